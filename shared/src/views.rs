use crate::constants::STATUS_NONE;
use crate::store::rank;
use crate::types::{ActivityLog, LabelItem, SalesNumber};

/// Case-insensitive substring match against every field of every row.
pub fn filter_numbers(numbers: &[SalesNumber], filter: &str) -> Vec<SalesNumber> {
    if filter.is_empty() {
        return numbers.to_vec();
    }
    let filter = filter.to_lowercase();
    numbers
        .iter()
        .filter(|row| row.field_values().iter().any(|value| value.to_lowercase().contains(&filter)))
        .cloned()
        .collect()
}

/// One bucket per known status (in rank order) plus a trailing synthetic
/// bucket for rows whose status matches no known name. Deleting a status
/// leaves its old rows orphaned on purpose; they land in the synthetic
/// bucket instead of disappearing.
pub fn group_by_status(numbers: &[SalesNumber], statuses: &[LabelItem]) -> Vec<(String, Vec<SalesNumber>)> {
    let mut groups: Vec<(String, Vec<SalesNumber>)> = statuses
        .iter()
        .map(|status| (status.name.clone(), Vec::new()))
        .collect();
    let mut orphans: Vec<SalesNumber> = Vec::new();

    for row in numbers {
        match groups.iter_mut().find(|(name, _)| *name == row.status) {
            Some((_, bucket)) => bucket.push(row.clone()),
            None => orphans.push(row.clone()),
        }
    }

    groups.push((STATUS_NONE.to_string(), orphans));
    groups
}

/// The tables actually rendered: filtered rows grouped by status. With no
/// filter every bucket shows, the empty orphan bucket included; a filter
/// hides the buckets it empties.
pub fn display_groups(
    numbers: &[SalesNumber],
    statuses: &[LabelItem],
    filter: &str,
) -> Vec<(String, Vec<SalesNumber>)> {
    let visible = filter_numbers(numbers, filter);
    group_by_status(&visible, statuses)
        .into_iter()
        .filter(|(_, rows)| !rows.is_empty() || filter.is_empty())
        .collect()
}

pub fn filter_logs(logs: &[ActivityLog], filter: &str) -> Vec<ActivityLog> {
    if filter.is_empty() {
        return logs.to_vec();
    }
    let filter = filter.to_lowercase();
    logs.iter()
        .filter(|log| log.description.to_lowercase().contains(&filter))
        .cloned()
        .collect()
}

/// Chart input: (status, count) in first-seen order.
pub fn count_by_status(numbers: &[SalesNumber]) -> Vec<(String, usize)> {
    count_values(numbers.iter().map(|row| row.status.clone()))
}

/// Chart input: (product, count), optionally narrowed to one status.
pub fn count_by_product(numbers: &[SalesNumber], status_filter: &str) -> Vec<(String, usize)> {
    count_values(
        numbers
            .iter()
            .filter(|row| status_filter.is_empty() || row.status == status_filter)
            .map(|row| row.product.clone()),
    )
}

fn count_values(values: impl Iterator<Item = String>) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for value in values {
        match counts.iter_mut().find(|(name, _)| *name == value) {
            Some((_, count)) => *count += 1,
            None => counts.push((value, 1)),
        }
    }
    counts
}

/// Client-side uniqueness scan run before any insert is issued. Concurrent
/// sessions can still race; see DESIGN.md.
pub fn duplicate_number(numbers: &[SalesNumber], candidate: &str) -> bool {
    numbers.iter().any(|row| row.number == candidate)
}

/// Rank for a freshly added label: one past the current maximum.
pub fn next_rank(labels: &[LabelItem]) -> i32 {
    labels.iter().map(|item| item.order.unwrap_or(0)).max().map_or(0, |max| max + 1)
}

/// The sequence after dragging `dragged` onto `dropped`; the caller persists
/// each element's new rank as its index in the result.
pub fn reorder(labels: &[LabelItem], dragged: usize, dropped: usize) -> Vec<LabelItem> {
    let mut list = labels.to_vec();
    if dragged >= list.len() || dropped >= list.len() {
        return list;
    }
    let item = list.remove(dragged);
    list.insert(dropped, item);
    list
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::by_rank;

    fn number(id: &str, num: &str, product: &str, status: &str) -> SalesNumber {
        SalesNumber {
            id: id.to_string(),
            number: num.to_string(),
            product: product.to_string(),
            status: status.to_string(),
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
    fn filter_matches_a_single_product_field() {
        let rows = vec![
            number("a", "111", "PRODUCTO A", "Activo"),
            number("b", "222", "PRODUCTO B", "Activo"),
        ];
        let hits = filter_numbers(&rows, "producto b");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "b");
    }

    #[test]
    fn empty_filter_returns_everything() {
        let rows = vec![number("a", "111", "", ""), number("b", "222", "", "")];
        assert_eq!(filter_numbers(&rows, "").len(), 2);
    }

    #[test]
    fn filter_sees_countries_and_kommo_flag() {
        let mut row = number("a", "111", "", "");
        row.active_countries = vec!["AR".to_string(), "MX".to_string()];
        row.added_to_kommo = "Sí".to_string();
        assert_eq!(filter_numbers(&[row.clone()], "mx").len(), 1);
        assert_eq!(filter_numbers(&[row], "sí").len(), 1);
    }

    #[test]
    fn grouping_partitions_without_loss_or_duplication() {
        let statuses = vec![label("s1", "Activo", Some(0)), label("s2", "Libre", Some(1))];
        let rows = vec![
            number("a", "1", "", "Activo"),
            number("b", "2", "", "Libre"),
            number("c", "3", "", "Borrado hace tiempo"),
            number("d", "4", "", ""),
        ];
        let groups = group_by_status(&rows, &statuses);

        let total: usize = groups.iter().map(|(_, bucket)| bucket.len()).sum();
        assert_eq!(total, rows.len());

        let orphans = &groups.last().unwrap().1;
        assert_eq!(groups.last().unwrap().0, STATUS_NONE);
        assert_eq!(orphans.len(), 2);
        assert!(orphans.iter().any(|row| row.id == "c"));
        assert!(orphans.iter().any(|row| row.id == "d"));
    }

    #[test]
    fn grouping_keeps_status_rank_order() {
        let statuses = vec![label("s1", "Libre", Some(1)), label("s2", "Activo", Some(0))];
        let mut sorted = statuses.clone();
        sorted.sort_by(by_rank);
        let groups = group_by_status(&[], &sorted);
        let names: Vec<&str> = groups.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, ["Activo", "Libre", STATUS_NONE]);
    }

    #[test]
    fn without_a_filter_every_bucket_shows_even_empty_ones() {
        let statuses = vec![label("s1", "Activo", Some(0)), label("s2", "Libre", Some(1))];
        let rows = vec![number("a", "111", "", "Activo")];
        let groups = display_groups(&rows, &statuses, "");
        let names: Vec<&str> = groups.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, ["Activo", "Libre", STATUS_NONE]);
    }

    #[test]
    fn filtering_hides_the_buckets_it_empties() {
        let statuses = vec![label("s1", "Activo", Some(0)), label("s2", "Libre", Some(1))];
        let rows = vec![
            number("a", "111", "", "Activo"),
            number("b", "222", "", "Libre"),
        ];
        let groups = display_groups(&rows, &statuses, "111");
        let names: Vec<&str> = groups.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, ["Activo"]);
    }

    #[test]
    fn log_filter_matches_descriptions_only() {
        let logs = vec![
            ActivityLog {
                id: "a".to_string(),
                description: "Número '111' añadido.".to_string(),
                ..ActivityLog::default()
            },
            ActivityLog {
                id: "b".to_string(),
                description: "estado 'Libre' eliminado.".to_string(),
                ..ActivityLog::default()
            },
        ];
        let hits = filter_logs(&logs, "añadido");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "a");
    }

    #[test]
    fn product_counts_honor_the_status_filter() {
        let rows = vec![
            number("a", "1", "PRODUCTO A", "Activo"),
            number("b", "2", "PRODUCTO A", "Libre"),
            number("c", "3", "PRODUCTO B", "Activo"),
        ];
        assert_eq!(count_by_product(&rows, ""), vec![("PRODUCTO A".to_string(), 2), ("PRODUCTO B".to_string(), 1)]);
        assert_eq!(count_by_product(&rows, "Activo"), vec![("PRODUCTO A".to_string(), 1), ("PRODUCTO B".to_string(), 1)]);
    }

    #[test]
    fn duplicate_scan_is_exact_match() {
        let rows = vec![number("a", "+54 11 5555", "", "")];
        assert!(duplicate_number(&rows, "+54 11 5555"));
        assert!(!duplicate_number(&rows, "+54 11 555"));
    }

    #[test]
    fn next_rank_is_one_past_the_maximum() {
        assert_eq!(next_rank(&[]), 0);
        let labels = vec![label("a", "x", Some(4)), label("b", "y", None)];
        assert_eq!(next_rank(&labels), 5);
    }

    #[test]
    fn reorder_produces_the_requested_sequence() {
        let labels = vec![
            label("a", "uno", Some(0)),
            label("b", "dos", Some(1)),
            label("c", "tres", Some(2)),
        ];
        let moved = reorder(&labels, 2, 0);
        let names: Vec<&str> = moved.iter().map(|item| item.name.as_str()).collect();
        assert_eq!(names, ["tres", "uno", "dos"]);

        // Persisting index-as-rank and sorting by rank reproduces the sequence.
        let mut persisted: Vec<LabelItem> = moved
            .iter()
            .enumerate()
            .map(|(index, item)| LabelItem { order: Some(index as i32), ..item.clone() })
            .collect();
        persisted.sort_by(by_rank);
        let persisted_names: Vec<&str> = persisted.iter().map(|item| item.name.as_str()).collect();
        assert_eq!(persisted_names, names);
    }

    #[test]
    fn reorder_out_of_bounds_is_a_noop() {
        let labels = vec![label("a", "uno", Some(0))];
        assert_eq!(reorder(&labels, 3, 0), labels);
    }
}
