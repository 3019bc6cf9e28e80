use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use shared::types::{ClientError, Session};

use crate::client::client;
use crate::state::SESSION;

const METHOD_GET: &str = "GET";
const METHOD_POST: &str = "POST";
const METHOD_PATCH: &str = "PATCH";
const METHOD_DELETE: &str = "DELETE";

/// Whatever the backend said, verbatim, for the toast.
#[derive(Debug, serde::Deserialize, Default)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error_description: Option<String>,
    #[serde(default)]
    msg: Option<String>,
}

fn bearer() -> String {
    match SESSION.get_cloned() {
        Some(session) if !session.access_token.is_empty() => session.access_token,
        _ => client().map(|c| c.key.clone()).unwrap_or_default(),
    }
}

fn js_error(err: JsValue) -> ClientError {
    ClientError::Request(format!("{err:?}"))
}

fn to_body<T: Serialize>(data: &T) -> Result<String, ClientError> {
    let value = serde_wasm_bindgen::to_value(data)
        .map_err(|err| ClientError::Decode(err.to_string()))?;
    js_sys::JSON::stringify(&value)
        .map(String::from)
        .map_err(js_error)
}

async fn send(method: &str, url: &str, body: Option<String>) -> Result<String, ClientError> {
    let client = client()?;

    let mut opts = RequestInit::new();
    opts.method(method);
    if let Some(body) = &body {
        opts.body(Some(&JsValue::from_str(body)));
    }

    let request = Request::new_with_str_and_init(url, &opts).map_err(js_error)?;
    let headers = request.headers();
    headers.set("apikey", &client.key).map_err(js_error)?;
    headers
        .set("Authorization", &format!("Bearer {}", bearer()))
        .map_err(js_error)?;
    headers.set("Content-Type", "application/json").map_err(js_error)?;
    if method != METHOD_GET {
        headers.set("Prefer", "return=minimal").map_err(js_error)?;
    }

    let window = web_sys::window().ok_or_else(|| ClientError::Request("sin ventana".to_string()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    let resp: Response = resp_value.dyn_into().map_err(js_error)?;

    let text = JsFuture::from(resp.text().map_err(js_error)?)
        .await
        .map_err(js_error)?
        .as_string()
        .unwrap_or_default();

    if resp.ok() {
        Ok(text)
    } else {
        let body: ErrorBody = serde_json::from_str(&text).unwrap_or_default();
        let message = body
            .message
            .or(body.error_description)
            .or(body.msg)
            .unwrap_or_else(|| format!("HTTP {}", resp.status()));
        Err(ClientError::Request(message))
    }
}

fn decode<T: DeserializeOwned>(text: &str) -> Result<T, ClientError> {
    serde_json::from_str(text).map_err(|err| ClientError::Decode(err.to_string()))
}

// === rest ===

pub async fn select_all<T: DeserializeOwned>(
    table: &str,
    order_key: &str,
    ascending: bool,
) -> Result<Vec<T>, ClientError> {
    let direction = if ascending { "asc" } else { "desc" };
    let url = format!("{}?select=*&order={order_key}.{direction}", client()?.rest_url(table));
    decode(&send(METHOD_GET, &url, None).await?)
}

pub async fn select_where<T: DeserializeOwned>(
    table: &str,
    filter: &str,
    order_key: &str,
    ascending: bool,
) -> Result<Vec<T>, ClientError> {
    let direction = if ascending { "asc" } else { "desc" };
    let url = format!(
        "{}?select=*&{filter}&order={order_key}.{direction}",
        client()?.rest_url(table)
    );
    decode(&send(METHOD_GET, &url, None).await?)
}

pub async fn insert<T: Serialize>(table: &str, row: &T) -> Result<(), ClientError> {
    let url = client()?.rest_url(table);
    send(METHOD_POST, &url, Some(to_body(row)?)).await?;
    Ok(())
}

pub async fn update<T: Serialize>(table: &str, id: &str, row: &T) -> Result<(), ClientError> {
    let url = format!("{}?id=eq.{id}", client()?.rest_url(table));
    send(METHOD_PATCH, &url, Some(to_body(row)?)).await?;
    Ok(())
}

pub async fn delete_row(table: &str, id: &str) -> Result<(), ClientError> {
    let url = format!("{}?id=eq.{id}", client()?.rest_url(table));
    send(METHOD_DELETE, &url, None).await?;
    Ok(())
}

// === auth ===

#[derive(Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

pub async fn sign_in(email: &str, password: &str) -> Result<Session, ClientError> {
    let url = format!("{}?grant_type=password", client()?.auth_url("token"));
    let body = to_body(&Credentials { email, password })?;
    decode(&send(METHOD_POST, &url, Some(body)).await?)
}

pub async fn sign_up(email: &str, password: &str) -> Result<(), ClientError> {
    let url = client()?.auth_url("signup");
    let body = to_body(&Credentials { email, password })?;
    send(METHOD_POST, &url, Some(body)).await?;
    Ok(())
}

pub async fn sign_out() -> Result<(), ClientError> {
    let url = client()?.auth_url("logout");
    send(METHOD_POST, &url, None).await?;
    Ok(())
}
