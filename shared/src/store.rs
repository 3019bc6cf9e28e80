use std::cmp::Ordering;

use futures_signals::signal::Mutable;

use crate::constants::DEFAULT_RANK;
use crate::types::{ActivityLog, ChangeEvent, ClientError, HasId, LabelItem, LabelKind, SalesNumber};

/// Newest first; `created_at` is ISO-8601 so the lexical order is the
/// chronological one.
pub fn by_created_desc<T: Created>(a: &T, b: &T) -> Ordering {
    b.created_at().cmp(a.created_at())
}

/// Explicit rank ascending, rows without a rank sink to the bottom. Ties keep
/// their current relative order (the sort is stable).
pub fn by_rank(a: &LabelItem, b: &LabelItem) -> Ordering {
    rank(a).cmp(&rank(b))
}

pub fn rank(item: &LabelItem) -> i32 {
    item.order.unwrap_or(DEFAULT_RANK)
}

pub trait Created {
    fn created_at(&self) -> &str;
}

impl Created for SalesNumber {
    fn created_at(&self) -> &str {
        &self.created_at
    }
}

impl Created for ActivityLog {
    fn created_at(&self) -> &str {
        &self.created_at
    }
}

/// All session-local collections, mutated only through the named operations
/// below. The change feed is trusted to deliver each committed change once
/// and in order per id; nothing here buffers or deduplicates.
#[derive(Default)]
pub struct Store {
    pub sales_numbers: Mutable<Vec<SalesNumber>>,
    pub products: Mutable<Vec<LabelItem>>,
    pub statuses: Mutable<Vec<LabelItem>>,
    pub phone_number_labels: Mutable<Vec<LabelItem>>,
    pub position_labels: Mutable<Vec<LabelItem>>,
    pub channel_types: Mutable<Vec<LabelItem>>,
    pub activity_logs: Mutable<Vec<ActivityLog>>,
}

impl Store {
    pub fn labels(&self, kind: LabelKind) -> &Mutable<Vec<LabelItem>> {
        match kind {
            LabelKind::Product => &self.products,
            LabelKind::Status => &self.statuses,
            LabelKind::PhoneNumberLabel => &self.phone_number_labels,
            LabelKind::PositionLabel => &self.position_labels,
            LabelKind::ChannelType => &self.channel_types,
        }
    }

    pub fn apply_sales_change(&self, event: ChangeEvent<SalesNumber>) {
        apply(&self.sales_numbers, event, Some(by_created_desc));
    }

    pub fn apply_label_change(&self, kind: LabelKind, event: ChangeEvent<LabelItem>) {
        apply(self.labels(kind), event, Some(by_rank));
    }

    pub fn apply_log_change(&self, event: ChangeEvent<ActivityLog>) {
        apply(&self.activity_logs, event, Some(by_created_desc));
    }

    /// Logout drops every local copy; the backend rows are untouched.
    pub fn clear_all(&self) {
        self.sales_numbers.lock_mut().clear();
        self.products.lock_mut().clear();
        self.statuses.lock_mut().clear();
        self.phone_number_labels.lock_mut().clear();
        self.position_labels.lock_mut().clear();
        self.channel_types.lock_mut().clear();
        self.activity_logs.lock_mut().clear();
    }
}

/// First-run detection for the stock taxonomies: seed only when both label
/// fetches succeeded and came back empty. A failed fetch also leaves the
/// local collections empty and must not trigger seeding.
pub fn needs_default_labels(
    products: &Result<Vec<LabelItem>, ClientError>,
    statuses: &Result<Vec<LabelItem>, ClientError>,
) -> bool {
    matches!(products, Ok(rows) if rows.is_empty())
        && matches!(statuses, Ok(rows) if rows.is_empty())
}

/// Insert appends, update replaces the row with the matching id wholesale,
/// delete removes by id. Collections with a comparator are re-sorted after
/// insert and update.
fn apply<T>(list: &Mutable<Vec<T>>, event: ChangeEvent<T>, sort: Option<fn(&T, &T) -> Ordering>)
where
    T: HasId + Clone,
{
    let mut rows = list.lock_mut();
    match event {
        ChangeEvent::Insert(row) => {
            rows.push(row);
            if let Some(sort) = sort {
                rows.sort_by(sort);
            }
        }
        ChangeEvent::Update(row) => {
            if let Some(current) = rows.iter_mut().find(|item| item.id() == row.id()) {
                *current = row;
                if let Some(sort) = sort {
                    rows.sort_by(sort);
                }
            }
        }
        ChangeEvent::Delete { id } => {
            rows.retain(|item| item.id() != id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn number(id: &str, created_at: &str, number: &str) -> SalesNumber {
        SalesNumber {
            id: id.to_string(),
            created_at: created_at.to_string(),
            number: number.to_string(),
            ..SalesNumber::default()
        }
    }

    fn label(id: &str, name: &str, order: Option<i32>) -> LabelItem {
        LabelItem {
            id: id.to_string(),
            name: name.to_string(),
            order,
            ..LabelItem::default()
        }
    }

    #[test]
    fn insert_keeps_numbers_newest_first() {
        let store = Store::default();
        store.apply_sales_change(ChangeEvent::Insert(number("a", "2024-01-01T00:00:00Z", "1")));
        store.apply_sales_change(ChangeEvent::Insert(number("b", "2024-03-01T00:00:00Z", "2")));
        store.apply_sales_change(ChangeEvent::Insert(number("c", "2024-02-01T00:00:00Z", "3")));
        let ids: Vec<String> = store.sales_numbers.lock_ref().iter().map(|n| n.id.clone()).collect();
        assert_eq!(ids, ["b", "c", "a"]);
    }

    #[test]
    fn update_replaces_the_whole_row_and_resorts() {
        let store = Store::default();
        store.apply_label_change(LabelKind::Status, ChangeEvent::Insert(label("a", "Activo", Some(0))));
        store.apply_label_change(LabelKind::Status, ChangeEvent::Insert(label("b", "Libre", Some(1))));
        store.apply_label_change(LabelKind::Status, ChangeEvent::Update(label("a", "Activo", Some(5))));
        let rows = store.statuses.lock_ref();
        assert_eq!(rows[0].id, "b");
        assert_eq!(rows[1].id, "a");
        assert_eq!(rows[1].order, Some(5));
    }

    #[test]
    fn update_for_an_unknown_id_is_a_membership_noop() {
        let store = Store::default();
        store.apply_sales_change(ChangeEvent::Insert(number("a", "2024-01-01T00:00:00Z", "1")));
        store.apply_sales_change(ChangeEvent::Update(number("ghost", "2024-01-02T00:00:00Z", "9")));
        let rows = store.sales_numbers.lock_ref();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, "a");
    }

    #[test]
    fn insert_then_delete_leaves_no_trace() {
        let store = Store::default();
        store.apply_sales_change(ChangeEvent::Insert(number("x", "2024-01-01T00:00:00Z", "1")));
        store.apply_sales_change(ChangeEvent::Delete { id: "x".to_string() });
        assert!(store.sales_numbers.lock_ref().is_empty());
    }

    #[test]
    fn rows_without_rank_sort_after_ranked_rows() {
        let store = Store::default();
        store.apply_label_change(LabelKind::Product, ChangeEvent::Insert(label("a", "B", None)));
        store.apply_label_change(LabelKind::Product, ChangeEvent::Insert(label("b", "A", Some(3))));
        let names: Vec<String> = store.products.lock_ref().iter().map(|l| l.name.clone()).collect();
        assert_eq!(names, ["A", "B"]);
    }

    #[test]
    fn seeding_requires_both_label_fetches_to_succeed_empty() {
        let empty = || Ok(vec![]);
        let failed = || Err(ClientError::Request("timeout".to_string()));
        let populated = || Ok(vec![label("a", "Activo", Some(0))]);

        assert!(needs_default_labels(&empty(), &empty()));
        assert!(!needs_default_labels(&failed(), &empty()));
        assert!(!needs_default_labels(&empty(), &failed()));
        assert!(!needs_default_labels(&populated(), &empty()));
        assert!(!needs_default_labels(&empty(), &populated()));
    }

    #[test]
    fn clear_all_empties_every_collection() {
        let store = Store::default();
        store.sales_numbers.lock_mut().push(number("a", "t", "1"));
        store.products.lock_mut().push(label("b", "P", Some(0)));
        store.statuses.lock_mut().push(label("c", "S", Some(0)));
        store.phone_number_labels.lock_mut().push(label("d", "C1", None));
        store.position_labels.lock_mut().push(label("e", "W1", None));
        store.channel_types.lock_mut().push(label("f", "WPP", None));
        store.activity_logs.lock_mut().push(ActivityLog {
            id: "g".to_string(),
            ..ActivityLog::default()
        });

        store.clear_all();

        assert!(store.sales_numbers.lock_ref().is_empty());
        assert!(store.products.lock_ref().is_empty());
        assert!(store.statuses.lock_ref().is_empty());
        assert!(store.phone_number_labels.lock_ref().is_empty());
        assert!(store.position_labels.lock_ref().is_empty());
        assert!(store.channel_types.lock_ref().is_empty());
        assert!(store.activity_logs.lock_ref().is_empty());
    }
}
