use dominator::{events, html, Dom};
use futures_signals::signal::SignalExt;

use shared::types::{Note, SalesNumber};

use crate::constants::{PROP_PLACEHOLDER, TAG_BUTTON, TAG_DIV, TAG_SPAN};
use crate::elements::icons::icon_close;
use crate::loader::{add_note, close_notes};
use crate::state::{NEW_NOTE, NOTES};
use crate::utils::{format_timestamp, target_value};

fn css_class(label: &str) -> String {
    format!("app-notes__{label}")
}

pub fn notes_panel(row: SalesNumber) -> Dom {
    html!(TAG_DIV, {
        .class(css_class("overlay"))
        .event(|_: events::Click| close_notes())
        .child(html!(TAG_DIV, {
            .class(css_class("card"))
            .event(|ev: events::Click| ev.stop_propagation())
            .children([
                html!(TAG_DIV, {
                    .class(css_class("header"))
                    .children([
                        html!("h2", {
                            .text(&format!("Notas para {}", row.number))
                        }),
                        html!(TAG_BUTTON, {
                            .attr("title", "Cerrar")
                            .child(icon_close())
                            .event(|_: events::Click| close_notes())
                        }),
                    ])
                }),
                html!("textarea", {
                    .attr(PROP_PLACEHOLDER, "Escribe una nota...")
                    .prop_signal("value", NEW_NOTE.signal_cloned())
                    .event(|e: events::Input| NEW_NOTE.set(target_value(e.target())))
                }),
                html!(TAG_BUTTON, {
                    .class(css_class("submit"))
                    .text("Añadir Nota")
                    .event(|_: events::Click| add_note())
                }),
                html!(TAG_DIV, {
                    .class(css_class("list"))
                    .children_signal_vec(
                        NOTES
                            .signal_cloned()
                            .map(|notes| notes.into_iter().map(note_row).collect::<Vec<Dom>>())
                            .to_signal_vec()
                    )
                }),
            ])
        }))
    })
}

fn note_row(note: Note) -> Dom {
    html!(TAG_DIV, {
        .class(css_class("row"))
        .children([
            html!(TAG_SPAN, {
                .class(css_class("date"))
                .text(&format_timestamp(&note.created_at))
            }),
            html!(TAG_SPAN, {
                .class(css_class("text"))
                .text(&note.text)
            }),
        ])
    })
}
