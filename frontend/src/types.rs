use futures_signals::signal::Mutable;

use shared::constants::{KOMMO_NO, KOMMO_YES};
use shared::types::{LabelKind, SalesNumber, SalesNumberDraft};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ShellState {
    Loading,
    NoConfig,
    SignedOut,
    SignedIn,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Tab {
    AddNumber,
    Dashboard,
    History,
    DataManagement,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Panel {
    Labels(LabelKind),
    Countries,
}

/// Field state behind both the add form and the in-row editor.
#[derive(Debug, Clone, Default)]
pub struct NumberForm {
    pub number: Mutable<String>,
    pub product: Mutable<String>,
    pub status: Mutable<String>,
    pub added_to_kommo: Mutable<String>,
    pub channel_type: Mutable<String>,
    pub active_countries: Mutable<Vec<String>>,
    pub phone_number_label: Mutable<String>,
    pub position_label: Mutable<String>,
}

impl NumberForm {
    pub fn clear(&self) {
        self.number.set("".to_string());
        self.product.set("".to_string());
        self.status.set("".to_string());
        self.added_to_kommo.set(KOMMO_NO.to_string());
        self.channel_type.set("".to_string());
        self.active_countries.set(vec![]);
        self.phone_number_label.set("".to_string());
        self.position_label.set("".to_string());
    }

    pub fn fill(&self, row: &SalesNumber) {
        self.number.set(row.number.clone());
        self.product.set(row.product.clone());
        self.status.set(row.status.clone());
        self.added_to_kommo.set(if row.added_to_kommo == KOMMO_YES {
            KOMMO_YES.to_string()
        } else {
            KOMMO_NO.to_string()
        });
        self.channel_type.set(row.channel_type.clone());
        self.active_countries.set(row.active_countries.clone());
        self.phone_number_label.set(row.phone_number_label.clone());
        self.position_label.set(row.position_label.clone());
    }

    pub fn to_draft(&self, user_id: Option<String>) -> SalesNumberDraft {
        SalesNumberDraft {
            number: self.number.get_cloned().trim().to_string(),
            product: self.product.get_cloned(),
            status: self.status.get_cloned(),
            added_to_kommo: self.added_to_kommo.get_cloned(),
            channel_type: self.channel_type.get_cloned(),
            active_countries: self.active_countries.get_cloned(),
            phone_number_label: self.phone_number_label.get_cloned(),
            position_label: self.position_label.get_cloned(),
            user_id,
        }
    }
}
