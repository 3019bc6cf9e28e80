use dominator::{events, html, Dom};
use futures_signals::map_ref;
use futures_signals::signal::SignalExt;

use shared::types::{ActivityLog, LabelKind};
use shared::views::{display_groups, filter_logs};

use crate::constants::{PROP_PLACEHOLDER, PROP_TYPE, TAG_BUTTON, TAG_DIV, TAG_INPUT, TAG_SECTION, TAG_SPAN};
use crate::elements::app_dashboard::dashboard_view;
use crate::elements::app_table::sales_table;
use crate::elements::inputs::{kommo_select, label_select, text_input};
use crate::elements::multi_select::multi_select;
use crate::loader::add_sales_number;
use crate::state::{
    ACTIVE_TAB, COLUMN_ORDER, EDITING_ID, GLOBAL_FILTER, LOG_FILTER, NEW_NUMBER, PANEL, STORE,
};
use crate::types::{Panel, Tab};
use crate::utils::{format_timestamp, target_value};

fn css_class(label: &str) -> String {
    format!("app-body__{label}")
}

pub fn app_body() -> Dom {
    html!(TAG_DIV, {
        .class(css_class("container"))
        .child_signal(ACTIVE_TAB.signal().map(|tab| {
            Some(match tab {
                Tab::AddNumber => numbers_tab(),
                Tab::Dashboard => dashboard_tab(),
                Tab::History => history_tab(),
                Tab::DataManagement => data_tab(),
            })
        }))
    })
}

// === numbers tab ===

fn numbers_tab() -> Dom {
    html!(TAG_DIV, {
        .children([add_form(), filter_bar(), tables_region()])
    })
}

/// The charts sit above the same filter bar and grouped tables the add tab
/// shows.
fn dashboard_tab() -> Dom {
    html!(TAG_DIV, {
        .children([dashboard_view(), filter_bar(), tables_region()])
    })
}

fn add_form() -> Dom {
    html!(TAG_SECTION, {
        .class(css_class("add-form"))
        .children([
            html!("h2", {
                .text("Añadir Número de Venta")
            }),
            text_input("Número de venta *", &NEW_NUMBER.number),
            label_select("Producto", LabelKind::Product, &NEW_NUMBER.product),
            label_select("Estado *", LabelKind::Status, &NEW_NUMBER.status),
            kommo_select(&NEW_NUMBER.added_to_kommo),
            label_select("Fuente", LabelKind::ChannelType, &NEW_NUMBER.channel_type),
            multi_select("Países", &NEW_NUMBER.active_countries),
            label_select("Celular", LabelKind::PhoneNumberLabel, &NEW_NUMBER.phone_number_label),
            label_select("Posición", LabelKind::PositionLabel, &NEW_NUMBER.position_label),
            html!(TAG_BUTTON, {
                .class(css_class("submit"))
                .text("Añadir Número")
                .event(|_: events::Click| add_sales_number())
            }),
        ])
    })
}

fn filter_bar() -> Dom {
    html!(TAG_DIV, {
        .class(css_class("filter"))
        .child(html!(TAG_INPUT, {
            .attr(PROP_TYPE, "text")
            .attr(PROP_PLACEHOLDER, "Buscar en todos los números...")
            .prop_signal("value", GLOBAL_FILTER.signal_cloned())
            .event(|e: events::Input| GLOBAL_FILTER.set(target_value(e.target())))
        }))
    })
}

/// One table per status, rebuilt whole whenever rows, statuses, the filter,
/// the column layout or the row under edit change.
fn tables_region() -> Dom {
    html!(TAG_DIV, {
        .class(css_class("tables"))
        .children_signal_vec(
            map_ref! {
                let numbers = STORE.sales_numbers.signal_cloned(),
                let statuses = STORE.statuses.signal_cloned(),
                let filter = GLOBAL_FILTER.signal_cloned(),
                let columns = COLUMN_ORDER.signal_cloned(),
                let editing = EDITING_ID.signal_cloned() => {
                    display_groups(numbers, statuses, filter)
                        .into_iter()
                        .map(|(name, rows)| {
                            sales_table(name, rows, columns.clone(), editing.clone())
                        })
                        .collect::<Vec<Dom>>()
                }
            }
            .to_signal_vec()
        )
    })
}

// === history tab ===

fn history_tab() -> Dom {
    html!(TAG_SECTION, {
        .class(css_class("history"))
        .children([
            html!("h2", {
                .text("Historial de Actividad")
            }),
            html!(TAG_INPUT, {
                .attr(PROP_TYPE, "text")
                .attr(PROP_PLACEHOLDER, "Buscar en el historial...")
                .prop_signal("value", LOG_FILTER.signal_cloned())
                .event(|e: events::Input| LOG_FILTER.set(target_value(e.target())))
            }),
        ])
        .child(html!(TAG_DIV, {
            .class(css_class("history-list"))
            .children_signal_vec(
                map_ref! {
                    let logs = STORE.activity_logs.signal_cloned(),
                    let filter = LOG_FILTER.signal_cloned() =>
                    filter_logs(logs, filter).into_iter().map(log_row).collect::<Vec<Dom>>()
                }
                .to_signal_vec()
            )
        }))
    })
}

fn log_row(log: ActivityLog) -> Dom {
    html!(TAG_DIV, {
        .class(css_class("history-row"))
        .children([
            html!(TAG_SPAN, {
                .class(css_class("history-date"))
                .text(&format_timestamp(&log.created_at))
            }),
            html!(TAG_SPAN, {
                .class(css_class("history-text"))
                .text(&log.description)
            }),
        ])
    })
}

// === data management tab ===

fn data_tab() -> Dom {
    html!(TAG_SECTION, {
        .class(css_class("data"))
        .child(html!("h2", {
            .text("Gestión de Datos")
        }))
        .child(html!(TAG_DIV, {
            .class(css_class("data-grid"))
            .children([
                panel_button("Productos", Panel::Labels(LabelKind::Product)),
                panel_button("Estados", Panel::Labels(LabelKind::Status)),
                panel_button("Etiquetas de Celular", Panel::Labels(LabelKind::PhoneNumberLabel)),
                panel_button("Posiciones", Panel::Labels(LabelKind::PositionLabel)),
                panel_button("Fuentes", Panel::Labels(LabelKind::ChannelType)),
                panel_button("Países", Panel::Countries),
            ])
        }))
    })
}

fn panel_button(label: &str, panel: Panel) -> Dom {
    html!(TAG_BUTTON, {
        .class(css_class("data-button"))
        .text(label)
        .event(move |_: events::Click| PANEL.set(Some(panel)))
    })
}
