use std::cell::Cell;

use dominator::{events, html, Dom};

use shared::columns::{ColumnDef, ColumnKind};
use shared::types::{LabelKind, SalesNumber};

use crate::constants::{PROP_DRAGGABLE, TAG_BUTTON, TAG_DIV, TAG_SECTION, TAG_SPAN};
use crate::elements::icons::{icon_check, icon_close, icon_edit, icon_note, icon_trash};
use crate::elements::inputs::{kommo_select, label_select, text_input};
use crate::elements::multi_select::multi_select;
use crate::loader::{
    cancel_editing, delete_sales_number, open_notes, start_editing, update_sales_number,
};
use crate::state::{COLUMN_ORDER, EDIT_FORM};
use crate::utils::save_column_order;

const EMPTY_CELL: &str = "N/A";

thread_local! {
    static DRAG_COLUMN: Cell<Option<usize>> = Cell::new(None);
    static DRAG_OVER_COLUMN: Cell<Option<usize>> = Cell::new(None);
}

fn css_class(label: &str) -> String {
    format!("app-table__{label}")
}

/// One status bucket rendered as a table. Everything arrives by value because
/// the whole region is rebuilt on any input change.
pub fn sales_table(
    title: String,
    rows: Vec<SalesNumber>,
    columns: Vec<ColumnDef>,
    editing: Option<String>,
) -> Dom {
    html!(TAG_SECTION, {
        .class(css_class("container"))
        .children([
            html!("h3", {
                .class(css_class("title"))
                .text(&format!("{title} ({})", rows.len()))
            }),
            html!("table", {
                .children([
                    header_row(&columns),
                    html!("tbody", {
                        .children(rows.into_iter().map(|row| {
                            if editing.as_deref() == Some(row.id.as_str()) {
                                edit_row(&columns)
                            } else {
                                display_row(row, &columns)
                            }
                        }))
                    }),
                ])
            }),
        ])
    })
}

// === column reordering ===

fn header_row(columns: &[ColumnDef]) -> Dom {
    html!("thead", {
        .child(html!("tr", {
            .children(columns.iter().enumerate().map(|(index, column)| {
                html!("th", {
                    .attr(PROP_DRAGGABLE, "true")
                    .text(column.name)
                    .event(move |_: events::DragStart| {
                        DRAG_COLUMN.with(|cell| cell.set(Some(index)));
                    })
                    .event(move |ev: events::DragOver| {
                        ev.prevent_default();
                        DRAG_OVER_COLUMN.with(|cell| cell.set(Some(index)));
                    })
                    .event(move |ev: events::Drop| {
                        ev.prevent_default();
                        finish_column_drag();
                    })
                })
            }))
        }))
    })
}

/// Splices the dragged header in front of the drop target and persists the
/// new layout; every table follows because they all read COLUMN_ORDER.
fn finish_column_drag() {
    let dragged = DRAG_COLUMN.with(|cell| cell.take());
    let target = DRAG_OVER_COLUMN.with(|cell| cell.take());
    let (dragged, target) = match (dragged, target) {
        (Some(dragged), Some(target)) if dragged != target => (dragged, target),
        _ => return,
    };
    let mut columns = COLUMN_ORDER.get_cloned();
    if dragged >= columns.len() || target >= columns.len() {
        return;
    }
    let column = columns.remove(dragged);
    columns.insert(target, column);
    save_column_order(&columns);
    COLUMN_ORDER.set(columns);
}

// === display rows ===

fn display_row(row: SalesNumber, columns: &[ColumnDef]) -> Dom {
    html!("tr", {
        .children(columns.iter().map(|column| display_cell(&row, column)))
    })
}

fn display_cell(row: &SalesNumber, column: &ColumnDef) -> Dom {
    match column.kind {
        ColumnKind::Text => text_cell(text_value(row, column.id)),
        ColumnKind::Status => chip_cell(&row.status, "status"),
        ColumnKind::Kommo => chip_cell(&row.added_to_kommo, "kommo"),
        ColumnKind::Array => text_cell(row.active_countries.join(", ")),
        ColumnKind::Actions => actions_cell(row.clone()),
    }
}

fn text_value(row: &SalesNumber, id: &str) -> String {
    match id {
        "number" => row.number.clone(),
        "product" => row.product.clone(),
        "channel" => row.channel_type.clone(),
        "phone" => row.phone_number_label.clone(),
        "position" => row.position_label.clone(),
        _ => "".to_string(),
    }
}

fn text_cell(value: String) -> Dom {
    html!("td", {
        .text(if value.is_empty() { EMPTY_CELL } else { &value })
    })
}

fn chip_cell(value: &str, flavor: &str) -> Dom {
    html!("td", {
        .child(html!(TAG_SPAN, {
            .class(css_class("chip"))
            .class(css_class(flavor))
            .text(if value.is_empty() { EMPTY_CELL } else { value })
        }))
    })
}

fn actions_cell(row: SalesNumber) -> Dom {
    let edit_target = row.clone();
    let notes_target = row.clone();
    let delete_id = row.id.clone();
    html!("td", {
        .class(css_class("actions"))
        .children([
            html!(TAG_BUTTON, {
                .attr("title", "Editar")
                .child(icon_edit())
                .event(move |_: events::Click| start_editing(&edit_target))
            }),
            html!(TAG_BUTTON, {
                .attr("title", "Notas")
                .child(icon_note())
                .event(move |_: events::Click| open_notes(notes_target.clone()))
            }),
            html!(TAG_BUTTON, {
                .attr("title", "Eliminar")
                .child(icon_trash())
                .event(move |_: events::Click| delete_sales_number(delete_id.clone()))
            }),
        ])
    })
}

// === the row under edit ===

fn edit_row(columns: &[ColumnDef]) -> Dom {
    html!("tr", {
        .class(css_class("editing"))
        .children(columns.iter().map(|column| edit_cell(column)))
    })
}

fn edit_cell(column: &ColumnDef) -> Dom {
    html!("td", {
        .child(match (column.kind, column.id) {
            (ColumnKind::Status, _) => label_select("Estado *", LabelKind::Status, &EDIT_FORM.status),
            (ColumnKind::Kommo, _) => kommo_select(&EDIT_FORM.added_to_kommo),
            (ColumnKind::Array, _) => multi_select("", &EDIT_FORM.active_countries),
            (ColumnKind::Actions, _) => edit_actions(),
            (ColumnKind::Text, "number") => text_input("Número *", &EDIT_FORM.number),
            (ColumnKind::Text, "product") => label_select("Producto", LabelKind::Product, &EDIT_FORM.product),
            (ColumnKind::Text, "channel") => label_select("Fuente", LabelKind::ChannelType, &EDIT_FORM.channel_type),
            (ColumnKind::Text, "phone") => label_select("Celular", LabelKind::PhoneNumberLabel, &EDIT_FORM.phone_number_label),
            (ColumnKind::Text, "position") => label_select("Posición", LabelKind::PositionLabel, &EDIT_FORM.position_label),
            (ColumnKind::Text, _) => text_input("", &EDIT_FORM.number),
        })
    })
}

fn edit_actions() -> Dom {
    html!(TAG_DIV, {
        .class(css_class("actions"))
        .children([
            html!(TAG_BUTTON, {
                .attr("title", "Guardar")
                .child(icon_check())
                .event(|_: events::Click| update_sales_number())
            }),
            html!(TAG_BUTTON, {
                .attr("title", "Cancelar")
                .child(icon_close())
                .event(|_: events::Click| cancel_editing())
            }),
        ])
    })
}
