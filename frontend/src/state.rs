use futures_signals::signal::Mutable;
use gloo_timers::callback::Timeout;
use once_cell::sync::Lazy;

use shared::columns::{ColumnDef, DEFAULT_COLUMNS};
use shared::store::Store;
use shared::types::{Note, SalesNumber, Session};

use crate::types::{NumberForm, Panel, ShellState, Tab};

pub static SHELL: Lazy<Mutable<ShellState>> = Lazy::new(|| Mutable::new(ShellState::Loading));

pub static SESSION: Lazy<Mutable<Option<Session>>> = Lazy::new(|| Mutable::new(None));

pub static STORE: Lazy<Store> = Lazy::new(Store::default);

pub static ACTIVE_TAB: Lazy<Mutable<Tab>> = Lazy::new(|| Mutable::new(Tab::AddNumber));

pub static GLOBAL_FILTER: Lazy<Mutable<String>> = Lazy::new(|| Mutable::new("".to_string()));

pub static LOG_FILTER: Lazy<Mutable<String>> = Lazy::new(|| Mutable::new("".to_string()));

pub static STATUS_FILTER: Lazy<Mutable<String>> = Lazy::new(|| Mutable::new("".to_string()));

pub static MESSAGE: Lazy<Mutable<String>> = Lazy::new(|| Mutable::new("".to_string()));

pub static COLUMN_ORDER: Lazy<Mutable<Vec<ColumnDef>>> =
    Lazy::new(|| Mutable::new(DEFAULT_COLUMNS.to_vec()));

pub static PANEL: Lazy<Mutable<Option<Panel>>> = Lazy::new(|| Mutable::new(None));

pub static NEW_NUMBER: Lazy<NumberForm> = Lazy::new(|| {
    let form = NumberForm::default();
    form.clear();
    form
});

pub static EDITING_ID: Lazy<Mutable<Option<String>>> = Lazy::new(|| Mutable::new(None));

pub static EDIT_FORM: Lazy<NumberForm> = Lazy::new(NumberForm::default);

pub static NOTES_FOR: Lazy<Mutable<Option<SalesNumber>>> = Lazy::new(|| Mutable::new(None));

pub static NOTES: Lazy<Mutable<Vec<Note>>> = Lazy::new(|| Mutable::new(vec![]));

pub static NEW_NOTE: Lazy<Mutable<String>> = Lazy::new(|| Mutable::new("".to_string()));

/// Transient bottom-of-screen toast; replaced by the next message, cleared
/// after three seconds.
pub fn show_message(text: &str) {
    MESSAGE.set(text.to_string());
    let timer = Timeout::new(3000, || MESSAGE.set("".to_string()));
    timer.forget();
}
