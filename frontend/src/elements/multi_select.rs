use dominator::{events, html, Dom};
use futures_signals::signal::{Mutable, SignalExt};

use shared::constants::COUNTRIES;

use crate::constants::{PROP_TYPE, PROP_VALUE, TAG_DIV, TAG_INPUT, TAG_LABEL, TAG_SPAN};
use crate::elements::icons::icon_chevron_down;

fn css_class(label: &str) -> String {
    format!("multi-select__{label}")
}

/// Checkbox dropdown over the fixed country list; edits the given set in
/// place.
pub fn multi_select(label: &str, values: &Mutable<Vec<String>>) -> Dom {
    let label = label.to_string();
    let open = Mutable::new(false);
    let open_toggle = open.clone();
    let values = values.clone();
    let options_values = values.clone();
    html!(TAG_DIV, {
        .class(css_class("container"))
        .child(html!(TAG_DIV, {
            .class(css_class("header"))
            .child(html!(TAG_SPAN, {
                .text_signal(values.signal_cloned().map(move |selected| {
                    let display = if selected.is_empty() {
                        "Ninguno".to_string()
                    } else {
                        selected.join(", ")
                    };
                    if label.is_empty() {
                        display
                    } else {
                        format!("{label}: {display}")
                    }
                }))
            }))
            .child(icon_chevron_down())
            .event(move |_: events::Click| open_toggle.set(!open_toggle.get()))
        }))
        .child_signal(open.signal().map(move |is_open| {
            if is_open {
                Some(options_list(&options_values))
            } else {
                None
            }
        }))
    })
}

fn options_list(values: &Mutable<Vec<String>>) -> Dom {
    html!(TAG_DIV, {
        .class(css_class("options"))
        .children(COUNTRIES.iter().map(|code| {
            let values = values.clone();
            let checked = values.clone();
            html!(TAG_LABEL, {
                .class(css_class("option"))
                .child(html!(TAG_INPUT, {
                    .attr(PROP_TYPE, "checkbox")
                    .attr(PROP_VALUE, code)
                    .prop_signal("checked", checked.signal_cloned().map(move |selected| {
                        selected.iter().any(|value| value == code)
                    }))
                    .event(move |_: events::Change| toggle(&values, code))
                }))
                .text(code)
            })
        }))
    })
}

fn toggle(values: &Mutable<Vec<String>>, code: &str) {
    let mut selected = values.get_cloned();
    match selected.iter().position(|value| value == code) {
        Some(index) => {
            selected.remove(index);
        }
        None => selected.push(code.to_string()),
    }
    values.set(selected);
}
