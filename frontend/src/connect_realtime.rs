use std::cell::{Cell, RefCell};

use gloo_timers::callback::Interval;
use serde::Deserialize;
use serde_json::json;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{ErrorEvent, MessageEvent, WebSocket};

use shared::constants::{
    TABLE_ACTIVITY_LOGS, TABLE_CHANNEL_TYPES, TABLE_NOTES, TABLE_PHONE_LABELS,
    TABLE_POSITION_LABELS, TABLE_PRODUCTS, TABLE_SALES_NUMBERS, TABLE_STATUSES,
};
use shared::types::{ChangeRecord, Session};

use crate::client::client;
use crate::loader::{notes_channel, table_channel};

static TOPIC_NOTES_PREFIX: &'static str = "realtime:notes:";

const HEARTBEAT_MS: u32 = 30_000;

thread_local! {
    static SOCKET: RefCell<Option<WebSocket>> = RefCell::new(None);
    static HEARTBEAT: RefCell<Option<Interval>> = RefCell::new(None);
    static FRAME_REF: Cell<u32> = Cell::new(0);
}

#[derive(Debug, Deserialize)]
struct SocketFrame {
    topic: String,
    event: String,
    #[serde(default)]
    payload: serde_json::Value,
}

fn next_ref() -> String {
    FRAME_REF.with(|cell| {
        let value = cell.get() + 1;
        cell.set(value);
        value.to_string()
    })
}

fn frame(topic: &str, event: &str, payload: serde_json::Value) -> String {
    json!({
        "topic": topic,
        "event": event,
        "payload": payload,
        "ref": next_ref(),
    })
    .to_string()
}

fn send_frame(text: String) {
    SOCKET.with(|socket| match socket.borrow().as_ref() {
        Some(ws) => {
            if let Err(err) = ws.send_with_str(&text) {
                log::error!("[realtime] send: {:?}", err);
            }
        }
        None => log::error!("[realtime] send without socket"),
    });
}

fn table_config(table: &str, filter: String) -> serde_json::Value {
    json!({ "event": "*", "schema": "public", "table": table, "filter": filter })
}

/// One multiplexed channel per authenticated session: a single join carrying
/// a postgres_changes entry per table, scoped to the current user.
pub fn start_realtime(session: &Session) {
    let client = match client() {
        Ok(client) => client,
        Err(err) => {
            log::error!("[realtime] {err}");
            return;
        }
    };

    let ws = match WebSocket::new(&client.realtime_url()) {
        Ok(ws) => ws,
        Err(err) => {
            log::error!("[realtime] connect: {:?}", err);
            return;
        }
    };

    let user_id = session.user.id.clone();
    let access_token = session.access_token.clone();

    let onopen_callback = Closure::<dyn FnMut()>::new(move || {
        log::info!("[realtime] opened");
        let scope = format!("user_id=eq.{user_id}");
        let join = frame(
            &format!("realtime:user-changes-{user_id}"),
            "phx_join",
            json!({
                "access_token": access_token,
                "config": { "postgres_changes": [
                    table_config(TABLE_SALES_NUMBERS, scope.clone()),
                    table_config(TABLE_PRODUCTS, scope.clone()),
                    table_config(TABLE_STATUSES, scope.clone()),
                    table_config(TABLE_PHONE_LABELS, scope.clone()),
                    table_config(TABLE_POSITION_LABELS, scope.clone()),
                    table_config(TABLE_CHANNEL_TYPES, scope.clone()),
                    table_config(TABLE_ACTIVITY_LOGS, scope.clone()),
                ]},
            }),
        );
        send_frame(join);

        let heartbeat = Interval::new(HEARTBEAT_MS, || {
            send_frame(frame("phoenix", "heartbeat", json!({})));
        });
        HEARTBEAT.with(|cell| *cell.borrow_mut() = Some(heartbeat));
    });
    ws.set_onopen(Some(onopen_callback.as_ref().unchecked_ref()));
    onopen_callback.forget();

    let onmessage_callback = Closure::<dyn FnMut(_)>::new(move |e: MessageEvent| {
        if let Ok(text) = e.data().dyn_into::<js_sys::JsString>() {
            handle_frame(&String::from(text));
        }
    });
    ws.set_onmessage(Some(onmessage_callback.as_ref().unchecked_ref()));
    onmessage_callback.forget();

    let onerror_callback = Closure::<dyn FnMut(_)>::new(move |err: ErrorEvent| {
        log::error!("[realtime] error: {}", err.message());
    });
    ws.set_onerror(Some(onerror_callback.as_ref().unchecked_ref()));
    onerror_callback.forget();

    SOCKET.with(|socket| *socket.borrow_mut() = Some(ws));
}

fn handle_frame(text: &str) {
    let frame: SocketFrame = match serde_json::from_str(text) {
        Ok(frame) => frame,
        Err(err) => {
            log::error!("[realtime] frame: {err}");
            return;
        }
    };

    match frame.event.as_str() {
        "postgres_changes" => {
            let data = frame.payload.get("data").cloned().unwrap_or_default();
            match serde_json::from_value::<ChangeRecord>(data) {
                Ok(record) => {
                    if frame.topic.starts_with(TOPIC_NOTES_PREFIX) {
                        notes_channel(record);
                    } else {
                        table_channel(record);
                    }
                }
                Err(err) => log::error!("[realtime] change: {err}"),
            }
        }
        "phx_reply" | "phx_close" | "system" | "presence_state" => {
            log::info!("[realtime] {} on {}", frame.event, frame.topic);
        }
        other => log::info!("[realtime] unhandled event {other}"),
    }
}

/// Dedicated insert-only feed for the notes panel; left again on close.
pub fn subscribe_notes(sales_number_id: &str, access_token: &str) {
    let join = frame(
        &format!("{TOPIC_NOTES_PREFIX}{sales_number_id}"),
        "phx_join",
        json!({
            "access_token": access_token,
            "config": { "postgres_changes": [
                {
                    "event": "INSERT",
                    "schema": "public",
                    "table": TABLE_NOTES,
                    "filter": format!("sales_number_id=eq.{sales_number_id}"),
                }
            ]},
        }),
    );
    send_frame(join);
}

pub fn unsubscribe_notes(sales_number_id: &str) {
    send_frame(frame(
        &format!("{TOPIC_NOTES_PREFIX}{sales_number_id}"),
        "phx_leave",
        json!({}),
    ));
}

pub fn stop_realtime() {
    HEARTBEAT.with(|cell| *cell.borrow_mut() = None);
    SOCKET.with(|socket| {
        if let Some(ws) = socket.borrow_mut().take() {
            if let Err(err) = ws.close() {
                log::error!("[realtime] close: {:?}", err);
            }
        }
    });
}
