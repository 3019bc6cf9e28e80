use std::cell::Cell;

use dominator::{events, html, Dom};
use futures_signals::signal::{Mutable, SignalExt};

use shared::constants::COUNTRIES;
use shared::types::{LabelItem, LabelKind};

use crate::constants::{PROP_DRAGGABLE, TAG_BUTTON, TAG_DIV, TAG_SPAN};
use crate::elements::icons::{icon_close, icon_trash};
use crate::elements::inputs::text_input;
use crate::loader::{add_option, delete_option, reorder_options};
use crate::state::{PANEL, STORE};
use crate::types::Panel;

thread_local! {
    static DRAG_OPTION: Cell<Option<usize>> = Cell::new(None);
}

fn css_class(label: &str) -> String {
    format!("app-panel__{label}")
}

pub fn panel_view(panel: Panel) -> Dom {
    match panel {
        Panel::Labels(kind) => labels_panel(kind),
        Panel::Countries => countries_panel(),
    }
}

fn overlay(card: Dom) -> Dom {
    html!(TAG_DIV, {
        .class(css_class("overlay"))
        .event(|_: events::Click| PANEL.set(None))
        .child(card)
    })
}

fn card_header(title: &str) -> Dom {
    html!(TAG_DIV, {
        .class(css_class("header"))
        .children([
            html!("h2", {
                .text(title)
            }),
            html!(TAG_BUTTON, {
                .attr("title", "Cerrar")
                .child(icon_close())
                .event(|_: events::Click| PANEL.set(None))
            }),
        ])
    })
}

// === editable label collections ===

fn labels_panel(kind: LabelKind) -> Dom {
    let new_name: Mutable<String> = Mutable::new("".to_string());
    let submit_name = new_name.clone();
    overlay(html!(TAG_DIV, {
        .class(css_class("card"))
        .event(|ev: events::Click| ev.stop_propagation())
        .child(card_header(kind.panel_title()))
        .child(html!(TAG_DIV, {
            .class(css_class("add-row"))
            .children([
                text_input("Nuevo nombre...", &new_name),
                html!(TAG_BUTTON, {
                    .text("Añadir")
                    .event(move |_: events::Click| {
                        add_option(kind, submit_name.get_cloned());
                        submit_name.set("".to_string());
                    })
                }),
            ])
        }))
        .child_signal(
            STORE
                .labels(kind)
                .signal_cloned()
                .map(move |items| Some(options_list(kind, items)))
        )
    }))
}

/// Rebuilt whole on every collection change; drag state lives outside the DOM
/// so a rebuild mid-drag does not lose the dragged index.
fn options_list(kind: LabelKind, items: Vec<LabelItem>) -> Dom {
    html!(TAG_DIV, {
        .class(css_class("list"))
        .children(items.into_iter().enumerate().map(|(index, item)| {
            option_row(kind, index, item)
        }))
    })
}

fn option_row(kind: LabelKind, index: usize, item: LabelItem) -> Dom {
    let delete_id = item.id.clone();
    let delete_name = item.name.clone();
    html!(TAG_DIV, {
        .class(css_class("row"))
        .attr(PROP_DRAGGABLE, "true")
        .event(move |_: events::DragStart| {
            DRAG_OPTION.with(|cell| cell.set(Some(index)));
        })
        .event(|ev: events::DragOver| ev.prevent_default())
        .event(move |ev: events::Drop| {
            ev.prevent_default();
            if let Some(dragged) = DRAG_OPTION.with(|cell| cell.take()) {
                if dragged != index {
                    reorder_options(kind, dragged, index);
                }
            }
        })
        .children([
            html!(TAG_SPAN, {
                .class(css_class("name"))
                .text(&item.name)
            }),
            html!(TAG_BUTTON, {
                .attr("title", "Eliminar")
                .child(icon_trash())
                .event(move |_: events::Click| {
                    delete_option(kind, delete_id.clone(), delete_name.clone());
                })
            }),
        ])
    })
}

// === fixed country list ===

fn countries_panel() -> Dom {
    overlay(html!(TAG_DIV, {
        .class(css_class("card"))
        .event(|ev: events::Click| ev.stop_propagation())
        .child(card_header("Países Activos"))
        .child(html!("p", {
            .class(css_class("hint"))
            .text("Lista fija; no se puede editar.")
        }))
        .child(html!(TAG_DIV, {
            .class(css_class("list"))
            .children(COUNTRIES.iter().map(|code| {
                html!(TAG_DIV, {
                    .class(css_class("row"))
                    .text(code)
                })
            }))
        }))
    }))
}
