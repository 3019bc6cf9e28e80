use dominator::{events, html, Dom};
use futures_signals::signal::{Mutable, SignalExt};
use once_cell::sync::Lazy;
use wasm_bindgen_futures::spawn_local;

use shared::constants::STORAGE_SESSION;

use crate::connect_fetch as fetch;
use crate::constants::{PROP_NAME, PROP_PLACEHOLDER, PROP_TITLE, PROP_TYPE, TAG_BUTTON, TAG_DIV, TAG_INPUT};
use crate::elements::app_root::app_root;
use crate::loader::{boot, set_session};
use crate::state::SHELL;
use crate::types::ShellState;
use crate::utils::{get_html_element, get_input_value, query_selector, set_title, storage_set};

const KEY_ENTER: &str = "Enter";
const FIELD_EMAIL: &str = "email";
const FIELD_PASS: &str = "password";

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum AuthMode {
    SignIn,
    SignUp,
}

static AUTH_MODE: Lazy<Mutable<AuthMode>> = Lazy::new(|| Mutable::new(AuthMode::SignIn));
static AUTH_ERROR: Lazy<Mutable<String>> = Lazy::new(|| Mutable::new("".to_string()));
static AUTH_MESSAGE: Lazy<Mutable<String>> = Lazy::new(|| Mutable::new("".to_string()));
static AUTH_BUSY: Lazy<Mutable<bool>> = Lazy::new(|| Mutable::new(false));

fn css_class(label: &str) -> String {
    format!("app-login__{label}")
}

/// Root of the whole application: the shell signal decides which of the four
/// screens is mounted.
pub fn app_shell() -> Dom {
    boot();
    html!(TAG_DIV, {
        .child_signal(SHELL.signal().map(|state| {
            match state {
                ShellState::Loading => Some(loading_page()),
                ShellState::NoConfig => Some(config_page()),
                ShellState::SignedOut => Some(login_page()),
                ShellState::SignedIn => Some(app_root()),
            }
        }))
    })
}

fn loading_page() -> Dom {
    set_title("Cargando...");
    html!(TAG_DIV, {
        .class(css_class("loading"))
        .text("Cargando...")
    })
}

fn config_page() -> Dom {
    set_title("Falta Configuración");
    html!(TAG_DIV, {
        .class(css_class("container"))
        .child(html!(TAG_DIV, {
            .class(css_class("card"))
            .children([
                html!("h1", {
                    .text("Falta Configuración")
                }),
                html!("p", {
                    .text("No se pudieron cargar las credenciales del servidor.")
                }),
            ])
        }))
    })
}

fn login_page() -> Dom {
    set_title("Gestión de Ventas");
    html!(TAG_DIV, {
        .class(css_class("container"))
        .child(html!(TAG_DIV, {
            .class(css_class("card"))
            .children([
                html!("h1", {
                    .text("Gestión de Ventas")
                }),
                html!("p", {
                    .class(css_class("subtitle"))
                    .text("Ingresa para gestionar tus números")
                }),
            ])
            .child_signal(AUTH_ERROR.signal_cloned().map(|text| {
                if text.is_empty() {
                    None
                } else {
                    Some(html!(TAG_DIV, {
                        .class(css_class("error"))
                        .text(&text)
                    }))
                }
            }))
            .child_signal(AUTH_MESSAGE.signal_cloned().map(|text| {
                if text.is_empty() {
                    None
                } else {
                    Some(html!(TAG_DIV, {
                        .class(css_class("message"))
                        .text(&text)
                    }))
                }
            }))
            .children([
                html!(TAG_INPUT, {
                    .class(css_class("input"))
                    .attr(PROP_TYPE, "email")
                    .attr(PROP_TITLE, "Correo Electrónico")
                    .attr(PROP_PLACEHOLDER, "tu@email.com")
                    .attr(PROP_NAME, FIELD_EMAIL)
                    .event(handle_key_email)
                }),
                html!(TAG_INPUT, {
                    .class(css_class("input"))
                    .attr(PROP_TYPE, "password")
                    .attr(PROP_TITLE, "Contraseña")
                    .attr(PROP_PLACEHOLDER, "******")
                    .attr("minlength", "6")
                    .attr(PROP_NAME, FIELD_PASS)
                    .event(handle_key_pass)
                }),
                html!(TAG_BUTTON, {
                    .class(css_class("submit"))
                    .text_signal(AUTH_BUSY.signal().map(|busy| {
                        if busy {
                            "Procesando...".to_string()
                        } else {
                            submit_label(AUTH_MODE.get())
                        }
                    }))
                    .event(|_: events::Click| handle_submit())
                }),
                html!(TAG_BUTTON, {
                    .class(css_class("toggle"))
                    .text_signal(AUTH_MODE.signal().map(|mode| match mode {
                        AuthMode::SignIn => "¿No tienes cuenta? Regístrate",
                        AuthMode::SignUp => "¿Ya tienes cuenta? Inicia Sesión",
                    }))
                    .event(|_: events::Click| toggle_mode())
                }),
            ])
        }))
    })
}

fn submit_label(mode: AuthMode) -> String {
    match mode {
        AuthMode::SignIn => "Iniciar Sesión".to_string(),
        AuthMode::SignUp => "Registrarse".to_string(),
    }
}

fn toggle_mode() {
    let next = match AUTH_MODE.get() {
        AuthMode::SignIn => AuthMode::SignUp,
        AuthMode::SignUp => AuthMode::SignIn,
    };
    AUTH_MODE.set(next);
    AUTH_ERROR.set("".to_string());
    AUTH_MESSAGE.set("".to_string());
}

fn handle_key_email(ev: events::KeyDown) {
    if ev.key() == KEY_ENTER {
        if let Some(elem) = get_html_element(query_selector(&format!("[name={FIELD_PASS}]"))) {
            elem.focus().ok();
        }
    }
}

fn handle_key_pass(ev: events::KeyDown) {
    if ev.key() == KEY_ENTER {
        handle_submit();
    }
}

fn handle_submit() {
    if AUTH_BUSY.get() {
        return;
    }
    AUTH_ERROR.set("".to_string());
    AUTH_MESSAGE.set("".to_string());

    let email = get_input_value(FIELD_EMAIL).trim().to_string();
    let password = get_input_value(FIELD_PASS).trim().to_string();
    let mode = AUTH_MODE.get();

    AUTH_BUSY.set(true);
    spawn_local(async move {
        match mode {
            AuthMode::SignUp => match fetch::sign_up(&email, &password).await {
                Ok(()) => {
                    AUTH_MESSAGE.set(
                        "¡Registro exitoso! Revisa tu correo para confirmar la cuenta (si es necesario) o inicia sesión."
                            .to_string(),
                    );
                    AUTH_MODE.set(AuthMode::SignIn);
                }
                Err(err) => AUTH_ERROR.set(err.to_string()),
            },
            AuthMode::SignIn => match fetch::sign_in(&email, &password).await {
                Ok(session) => {
                    match serde_json::to_string(&session) {
                        Ok(text) => storage_set(STORAGE_SESSION, &text),
                        Err(err) => log::error!("sesión no guardada: {err}"),
                    }
                    // Navigation happens through the shell signal.
                    set_session(Some(session));
                }
                Err(err) => AUTH_ERROR.set(err.to_string()),
            },
        }
        AUTH_BUSY.set(false);
    });
}
