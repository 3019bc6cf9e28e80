use dominator::{events, html, Dom};
use futures_signals::map_ref;
use futures_signals::signal::{Mutable, SignalExt};

use shared::constants::{KOMMO_NO, KOMMO_YES};
use shared::types::{LabelItem, LabelKind};

use crate::constants::{PROP_PLACEHOLDER, PROP_SELECTED, PROP_TYPE, PROP_VALUE, TAG_INPUT, TAG_OPTION, TAG_SELECT};
use crate::state::STORE;
use crate::utils::target_value;

/// Plain text input bound both ways to a field of one of the number forms.
pub fn text_input(placeholder: &str, value: &Mutable<String>) -> Dom {
    let handler = value.clone();
    html!(TAG_INPUT, {
        .attr(PROP_TYPE, "text")
        .attr(PROP_PLACEHOLDER, placeholder)
        .prop_signal(PROP_VALUE, value.signal_cloned())
        .event(move |e: events::Input| handler.set(target_value(e.target())))
    })
}

/// Dropdown fed by one of the label collections; the empty option is the
/// placeholder and the stored value.
pub fn label_select(placeholder: &str, kind: LabelKind, value: &Mutable<String>) -> Dom {
    let placeholder = placeholder.to_string();
    let handler = value.clone();
    let value = value.clone();
    html!(TAG_SELECT, {
        .event(move |e: events::Change| handler.set(target_value(e.target())))
        .children_signal_vec(
            map_ref! {
                let options = STORE.labels(kind).signal_cloned(),
                let current = value.signal_cloned() =>
                label_options(&placeholder, options, current)
            }
            .to_signal_vec()
        )
    })
}

fn label_options(placeholder: &str, options: &[LabelItem], current: &str) -> Vec<Dom> {
    let mut list = vec![option_el("", placeholder, current.is_empty())];
    list.extend(options.iter().map(|item| option_el(&item.name, &item.name, item.name == current)));
    list
}

/// The binary Kommo flag is a string column with two spellings.
pub fn kommo_select(value: &Mutable<String>) -> Dom {
    let handler = value.clone();
    let value = value.clone();
    html!(TAG_SELECT, {
        .event(move |e: events::Change| handler.set(target_value(e.target())))
        .children_signal_vec(
            value
                .signal_cloned()
                .map(|current| {
                    vec![
                        option_el(KOMMO_NO, &format!("Kommo: {KOMMO_NO}"), current != KOMMO_YES),
                        option_el(KOMMO_YES, &format!("Kommo: {KOMMO_YES}"), current == KOMMO_YES),
                    ]
                })
                .to_signal_vec()
        )
    })
}

pub fn option_el(value: &str, label: &str, selected: bool) -> Dom {
    html!(TAG_OPTION, {
        .attr(PROP_VALUE, value)
        .apply_if(selected, |dom| dom.attr(PROP_SELECTED, ""))
        .text(label)
    })
}
