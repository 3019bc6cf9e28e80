use dominator::{events, html, Dom};
use futures_signals::signal::SignalExt;

use crate::constants::{TAG_BUTTON, TAG_DIV, TAG_SPAN};
use crate::loader::logout;
use crate::state::{ACTIVE_TAB, SESSION};
use crate::types::Tab;

fn css_class(label: &str) -> String {
    format!("app-header__{label}")
}

pub fn app_header() -> Dom {
    html!(TAG_DIV, {
        .class(css_class("container"))
        .children([
            html!(TAG_DIV, {
                .class(css_class("top"))
                .children([
                    html!("h1", {
                        .text("Gestión de Ventas")
                    }),
                    html!(TAG_DIV, {
                        .class(css_class("session"))
                        .children([
                            html!(TAG_SPAN, {
                                .class(css_class("user"))
                                .text_signal(SESSION.signal_cloned().map(|session| {
                                    session
                                        .map(|session| format!("Usuario: {}", session.user.email))
                                        .unwrap_or_default()
                                }))
                            }),
                            html!(TAG_BUTTON, {
                                .class(css_class("logout"))
                                .text("Cerrar Sesión")
                                .event(|_: events::Click| logout())
                            }),
                        ])
                    }),
                ])
            }),
            html!(TAG_DIV, {
                .class(css_class("tabs"))
                .children([
                    tab_button("Añadir", Tab::AddNumber),
                    tab_button("Panel", Tab::Dashboard),
                    tab_button("Historial", Tab::History),
                    tab_button("Datos", Tab::DataManagement),
                ])
            }),
        ])
    })
}

fn tab_button(label: &str, tab: Tab) -> Dom {
    html!(TAG_BUTTON, {
        .class(css_class("tab"))
        .class_signal("active", ACTIVE_TAB.signal().map(move |current| current == tab))
        .text(label)
        .event(move |_: events::Click| ACTIVE_TAB.set(tab))
    })
}
