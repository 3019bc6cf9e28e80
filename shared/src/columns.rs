#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Text,
    Status,
    Kommo,
    Array,
    Actions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDef {
    pub id: &'static str,
    pub name: &'static str,
    pub kind: ColumnKind,
}

pub static DEFAULT_COLUMNS: [ColumnDef; 9] = [
    ColumnDef { id: "number", name: "Número", kind: ColumnKind::Text },
    ColumnDef { id: "product", name: "Producto", kind: ColumnKind::Text },
    ColumnDef { id: "status", name: "Estado", kind: ColumnKind::Status },
    ColumnDef { id: "kommo", name: "Kommo", kind: ColumnKind::Kommo },
    ColumnDef { id: "channel", name: "Fuente", kind: ColumnKind::Text },
    ColumnDef { id: "countries", name: "Países", kind: ColumnKind::Array },
    ColumnDef { id: "phone", name: "Celular", kind: ColumnKind::Text },
    ColumnDef { id: "position", name: "Posición", kind: ColumnKind::Text },
    ColumnDef { id: "actions", name: "Acciones", kind: ColumnKind::Actions },
];

/// Rebuilds the column order from a persisted list of ids: unknown ids are
/// dropped, known ids keep the saved order, columns missing from the saved
/// list are appended in default order.
pub fn merge_column_order(saved_ids: &[String]) -> Vec<ColumnDef> {
    let mut order: Vec<ColumnDef> = saved_ids
        .iter()
        .filter_map(|id| DEFAULT_COLUMNS.iter().find(|column| column.id == id).copied())
        .collect();
    for column in DEFAULT_COLUMNS.iter() {
        if !order.iter().any(|existing| existing.id == column.id) {
            order.push(*column);
        }
    }
    order
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(columns: &[ColumnDef]) -> Vec<&'static str> {
        columns.iter().map(|column| column.id).collect()
    }

    #[test]
    fn saved_order_is_respected() {
        let saved: Vec<String> = ["actions", "number", "status", "kommo", "channel", "countries", "phone", "position", "product"]
            .iter()
            .map(|id| id.to_string())
            .collect();
        let merged = merge_column_order(&saved);
        assert_eq!(ids(&merged)[0], "actions");
        assert_eq!(merged.len(), DEFAULT_COLUMNS.len());
    }

    #[test]
    fn unknown_ids_are_dropped_and_missing_ones_appended() {
        let saved = vec!["zebra".to_string(), "status".to_string(), "number".to_string()];
        let merged = merge_column_order(&saved);
        assert!(!ids(&merged).contains(&"zebra"));
        assert_eq!(ids(&merged)[..2], ["status", "number"]);
        // "product" was missing from the saved list and comes back at the end,
        // in default order relative to the other appended columns.
        assert!(ids(&merged).contains(&"product"));
        assert_eq!(merged.len(), DEFAULT_COLUMNS.len());
    }

    #[test]
    fn empty_saved_list_yields_the_defaults() {
        assert_eq!(merge_column_order(&[]), DEFAULT_COLUMNS.to_vec());
    }
}
