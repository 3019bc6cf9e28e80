use dominator::{html, Dom};
use futures_signals::signal::SignalExt;

use crate::constants::TAG_DIV;
use crate::elements::app_body::app_body;
use crate::elements::app_header::app_header;
use crate::elements::app_notes::notes_panel;
use crate::elements::app_panel::panel_view;
use crate::state::{MESSAGE, NOTES_FOR, PANEL};
use crate::utils::set_title;

pub fn app_root() -> Dom {
    set_title("Gestión de Ventas");
    html!(TAG_DIV, {
        .class("app-root")
        .children([app_header(), app_body()])
        .child_signal(PANEL.signal().map(|panel| panel.map(panel_view)))
        .child_signal(NOTES_FOR.signal_cloned().map(|row| row.map(notes_panel)))
        .child_signal(MESSAGE.signal_cloned().map(toast))
    })
}

fn toast(text: String) -> Option<Dom> {
    if text.is_empty() {
        None
    } else {
        Some(html!(TAG_DIV, {
            .class("app-root__toast")
            .text(&text)
        }))
    }
}
