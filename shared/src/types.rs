use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::constants::{
    TABLE_CHANNEL_TYPES, TABLE_PHONE_LABELS, TABLE_POSITION_LABELS, TABLE_PRODUCTS, TABLE_STATUSES,
};

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("MISSING_CREDENTIALS")]
    MissingCredentials,
    #[error("{0}")]
    Request(String),
    #[error("respuesta ilegible: {0}")]
    Decode(String),
}

pub trait HasId {
    fn id(&self) -> &str;
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct SalesNumber {
    pub id: String,
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub number: String,
    #[serde(default)]
    pub product: String,
    #[serde(default)]
    pub status: String,
    #[serde(rename = "addedToKommoSources", default)]
    pub added_to_kommo: String,
    #[serde(rename = "channelType", default)]
    pub channel_type: String,
    #[serde(rename = "activeCountries", default)]
    pub active_countries: Vec<String>,
    #[serde(rename = "phoneNumberLabel", default)]
    pub phone_number_label: String,
    #[serde(rename = "positionLabel", default)]
    pub position_label: String,
}

impl HasId for SalesNumber {
    fn id(&self) -> &str {
        &self.id
    }
}

impl SalesNumber {
    /// Every field rendered to text, the way the global filter sees a row.
    pub fn field_values(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.created_at.clone(),
            self.user_id.clone().unwrap_or_default(),
            self.number.clone(),
            self.product.clone(),
            self.status.clone(),
            self.added_to_kommo.clone(),
            self.channel_type.clone(),
            self.active_countries.join(", "),
            self.phone_number_label.clone(),
            self.position_label.clone(),
        ]
    }
}

/// Insert/update payload: the server owns `id` and `created_at`.
#[derive(Debug, Serialize, Clone, Default)]
pub struct SalesNumberDraft {
    pub number: String,
    pub product: String,
    pub status: String,
    #[serde(rename = "addedToKommoSources")]
    pub added_to_kommo: String,
    #[serde(rename = "channelType")]
    pub channel_type: String,
    #[serde(rename = "activeCountries")]
    pub active_countries: Vec<String>,
    #[serde(rename = "phoneNumberLabel")]
    pub phone_number_label: String,
    #[serde(rename = "positionLabel")]
    pub position_label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LabelKind {
    Product,
    Status,
    PhoneNumberLabel,
    PositionLabel,
    ChannelType,
}

pub static LABEL_KINDS: [LabelKind; 5] = [
    LabelKind::Product,
    LabelKind::Status,
    LabelKind::PhoneNumberLabel,
    LabelKind::PositionLabel,
    LabelKind::ChannelType,
];

impl LabelKind {
    pub fn table(&self) -> &'static str {
        match *self {
            LabelKind::Product => TABLE_PRODUCTS,
            LabelKind::Status => TABLE_STATUSES,
            LabelKind::PhoneNumberLabel => TABLE_PHONE_LABELS,
            LabelKind::PositionLabel => TABLE_POSITION_LABELS,
            LabelKind::ChannelType => TABLE_CHANNEL_TYPES,
        }
    }

    /// Singular noun used in toasts and activity-log lines.
    pub fn item_name(&self) -> &'static str {
        match *self {
            LabelKind::Product => "producto",
            LabelKind::Status => "estado",
            LabelKind::PhoneNumberLabel => "etiqueta",
            LabelKind::PositionLabel => "posición",
            LabelKind::ChannelType => "fuente",
        }
    }

    pub fn panel_title(&self) -> &'static str {
        match *self {
            LabelKind::Product => "Gestionar Productos",
            LabelKind::Status => "Gestionar Estados",
            LabelKind::PhoneNumberLabel => "Gestionar Etiquetas de Celular",
            LabelKind::PositionLabel => "Gestionar Posiciones",
            LabelKind::ChannelType => "Gestionar Fuentes",
        }
    }
}

/// One row of any of the five user-configurable label collections.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct LabelItem {
    pub id: String,
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub order: Option<i32>,
}

impl HasId for LabelItem {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Serialize, Clone, Default)]
pub struct LabelDraft {
    pub name: String,
    pub order: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

#[derive(Debug, Serialize, Clone, Default)]
pub struct RankPatch {
    pub order: i32,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct ActivityLog {
    pub id: String,
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(rename = "actionType", default)]
    pub action_type: String,
    #[serde(rename = "recordType", default)]
    pub record_type: String,
    #[serde(default)]
    pub description: String,
}

impl HasId for ActivityLog {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Serialize, Clone, Default)]
pub struct ActivityDraft {
    #[serde(rename = "actionType")]
    pub action_type: String,
    #[serde(rename = "recordType")]
    pub record_type: String,
    pub description: String,
    pub user_id: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Note {
    pub id: String,
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub sales_number_id: String,
}

#[derive(Debug, Serialize, Clone, Default)]
pub struct NoteDraft {
    pub text: String,
    pub sales_number_id: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct SessionUser {
    pub id: String,
    #[serde(default)]
    pub email: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Session {
    pub access_token: String,
    pub user: SessionUser,
}

// ===

/// Raw row-change frame as the change feed delivers it.
#[derive(Debug, Deserialize, Clone)]
pub struct ChangeRecord {
    #[serde(rename = "type")]
    pub kind: String,
    pub table: String,
    #[serde(default)]
    pub record: Option<serde_json::Value>,
    #[serde(default)]
    pub old_record: Option<serde_json::Value>,
}

#[derive(Debug, thiserror::Error)]
pub enum ChangeError {
    #[error("evento desconocido '{0}'")]
    UnknownKind(String),
    #[error("falta el registro {0}")]
    MissingPayload(&'static str),
    #[error("registro ilegible: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// A change-feed payload validated at the subscription boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum ChangeEvent<T> {
    Insert(T),
    Update(T),
    Delete { id: String },
}

impl<T: DeserializeOwned> ChangeEvent<T> {
    pub fn decode(raw: &ChangeRecord) -> Result<Self, ChangeError> {
        match raw.kind.as_str() {
            "INSERT" => {
                let record = raw.record.clone().ok_or(ChangeError::MissingPayload("new"))?;
                Ok(ChangeEvent::Insert(serde_json::from_value(record)?))
            }
            "UPDATE" => {
                let record = raw.record.clone().ok_or(ChangeError::MissingPayload("new"))?;
                Ok(ChangeEvent::Update(serde_json::from_value(record)?))
            }
            "DELETE" => {
                let id = raw
                    .old_record
                    .as_ref()
                    .and_then(|old| old.get("id"))
                    .and_then(|id| id.as_str())
                    .ok_or(ChangeError::MissingPayload("old"))?;
                Ok(ChangeEvent::Delete { id: id.to_string() })
            }
            other => Err(ChangeError::UnknownKind(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(kind: &str, record: Option<serde_json::Value>, old: Option<serde_json::Value>) -> ChangeRecord {
        ChangeRecord {
            kind: kind.to_string(),
            table: "notes".to_string(),
            record,
            old_record: old,
        }
    }

    #[test]
    fn decode_insert_carries_the_new_row() {
        let event = ChangeEvent::<Note>::decode(&raw(
            "INSERT",
            Some(json!({"id": "n1", "created_at": "2024-01-01", "text": "hola", "sales_number_id": "s1"})),
            None,
        ))
        .unwrap();
        match event {
            ChangeEvent::Insert(note) => assert_eq!(note.text, "hola"),
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn decode_delete_only_needs_the_old_id() {
        let event =
            ChangeEvent::<Note>::decode(&raw("DELETE", None, Some(json!({"id": "n2"})))).unwrap();
        assert_eq!(event, ChangeEvent::Delete { id: "n2".to_string() });
    }

    #[test]
    fn decode_rejects_unknown_kinds_and_missing_payloads() {
        assert!(ChangeEvent::<Note>::decode(&raw("TRUNCATE", None, None)).is_err());
        assert!(ChangeEvent::<Note>::decode(&raw("INSERT", None, None)).is_err());
        assert!(ChangeEvent::<Note>::decode(&raw("DELETE", None, Some(json!({})))).is_err());
    }

    #[test]
    fn sales_number_round_trips_the_backend_column_names() {
        let row = json!({
            "id": "a",
            "created_at": "2024-05-01T10:00:00Z",
            "number": "+54 11 5555",
            "addedToKommoSources": "Sí",
            "channelType": "WPP",
            "activeCountries": ["AR", "MX"],
            "phoneNumberLabel": "C1",
            "positionLabel": "W2"
        });
        let number: SalesNumber = serde_json::from_value(row).unwrap();
        assert_eq!(number.added_to_kommo, "Sí");
        assert_eq!(number.active_countries, vec!["AR", "MX"]);

        let back = serde_json::to_value(&number).unwrap();
        assert!(back.get("channelType").is_some());
        assert!(back.get("user_id").is_none());
    }
}
