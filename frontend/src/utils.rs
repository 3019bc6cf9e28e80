use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, EventTarget, HtmlElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, Storage, Window};

use shared::columns::{ColumnDef, merge_column_order, DEFAULT_COLUMNS};
use shared::constants::STORAGE_COLUMN_ORDER;

fn get_window() -> Option<Window> {
    web_sys::window()
}

fn get_document() -> Option<Document> {
    get_window().and_then(|w| w.document())
}

pub fn set_title(text: &str) {
    if let Some(d) = get_document() {
        d.set_title(text);
    }
}

pub fn query_selector(selectors: &str) -> Option<Element> {
    get_document().and_then(|d| d.query_selector(selectors).ok()).and_then(|e| e)
}

pub fn get_html_element(el: Option<Element>) -> Option<HtmlElement> {
    el.map(|el| el.dyn_into::<HtmlElement>().ok()).and_then(|el| el)
}

fn get_value_from_input(element: JsValue) -> String {
    if let Some(element) = element.dyn_ref::<HtmlInputElement>() {
        element.value()
    } else if let Some(element) = element.dyn_ref::<HtmlTextAreaElement>() {
        element.value()
    } else if let Some(element) = element.dyn_ref::<HtmlSelectElement>() {
        element.value()
    } else {
        "".to_string()
    }
}

pub fn get_input_value(name: &str) -> String {
    query_selector(&format!("[name={name}]"))
        .map(|element| get_value_from_input(JsValue::from(element)))
        .unwrap_or_default()
}

/// Current value of the input/select/textarea an event fired on.
pub fn target_value(target: Option<EventTarget>) -> String {
    target
        .map(|target| get_value_from_input(JsValue::from(target)))
        .unwrap_or_default()
}

/// "2024-05-01T10:30:00.000Z" rendered as "2024-05-01 10:30".
pub fn format_timestamp(iso: &str) -> String {
    match iso.get(..16) {
        Some(prefix) => prefix.replace('T', " "),
        None => iso.to_string(),
    }
}

pub fn location_reload() {
    if let Some(w) = get_window() {
        w.location().reload().ok();
    }
}

fn local_storage() -> Option<Storage> {
    get_window().and_then(|w| w.local_storage().ok()).and_then(|s| s)
}

pub fn storage_get(key: &str) -> Option<String> {
    local_storage().and_then(|storage| storage.get_item(key).ok()).and_then(|v| v)
}

pub fn storage_set(key: &str, value: &str) {
    if let Some(storage) = local_storage() {
        storage.set_item(key, value).ok();
    }
}

pub fn storage_remove(key: &str) {
    if let Some(storage) = local_storage() {
        storage.remove_item(key).ok();
    }
}

/// Persisted as a JSON list of column ids; anything malformed falls back to
/// the default layout.
pub fn load_column_order() -> Vec<ColumnDef> {
    match storage_get(STORAGE_COLUMN_ORDER) {
        Some(saved) => match serde_json::from_str::<Vec<String>>(&saved) {
            Ok(ids) => merge_column_order(&ids),
            Err(err) => {
                log::error!("column order in storage is unreadable: {err}");
                DEFAULT_COLUMNS.to_vec()
            }
        },
        None => DEFAULT_COLUMNS.to_vec(),
    }
}

pub fn save_column_order(columns: &[ColumnDef]) {
    let ids: Vec<&str> = columns.iter().map(|column| column.id).collect();
    match serde_json::to_string(&ids) {
        Ok(text) => storage_set(STORAGE_COLUMN_ORDER, &text),
        Err(err) => log::error!("column order not saved: {err}"),
    }
}
