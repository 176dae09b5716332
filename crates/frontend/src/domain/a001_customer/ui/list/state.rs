use crate::shared::labels::CUSTOMER_COLUMN_COUNT;
use contracts::domain::a001_customer::Customer;
use leptos::prelude::*;

/// Текст поиска; живёт, пока смонтирован компонент
pub fn create_search_state() -> RwSignal<String> {
    RwSignal::new(String::new())
}

/// What the table body shows.
#[derive(Debug, Clone, PartialEq)]
pub enum TableView {
    Loading,
    /// Not loading and nothing matched: a single placeholder row
    Empty,
    Populated(Vec<Customer>),
}

impl TableView {
    pub fn is_loading(&self) -> bool {
        matches!(self, TableView::Loading)
    }

    /// Search box and table are rendered only once loading is over
    pub fn shows_table(&self) -> bool {
        !self.is_loading()
    }

    /// `colspan` of the placeholder row when the body is a placeholder
    pub fn placeholder_colspan(&self) -> Option<usize> {
        matches!(self, TableView::Empty).then_some(CUSTOMER_COLUMN_COUNT)
    }

    /// Customers rendered as data rows
    pub fn rows(&self) -> &[Customer] {
        match self {
            TableView::Populated(rows) => rows,
            TableView::Loading | TableView::Empty => &[],
        }
    }

    /// Number of `<tr>` in the table body
    pub fn body_row_count(&self) -> usize {
        match self {
            TableView::Loading => 0,
            TableView::Empty => 1,
            TableView::Populated(rows) => rows.len(),
        }
    }
}

/// Search rule: lowercased name contains the lowercased term, or the mobile
/// number contains the term as typed.
pub fn matches_search(customer: &Customer, term: &str) -> bool {
    customer
        .customer_name
        .to_lowercase()
        .contains(&term.to_lowercase())
        || customer.mobile_number.contains(term)
}

/// Subset of `customers` matching `term`, input order preserved.
pub fn filter_customers(customers: &[Customer], term: &str) -> Vec<Customer> {
    customers
        .iter()
        .filter(|customer| matches_search(customer, term))
        .cloned()
        .collect()
}

pub fn table_view(loading: bool, customers: &[Customer], term: &str) -> TableView {
    if loading {
        return TableView::Loading;
    }

    let filtered = filter_customers(customers, term);
    if filtered.is_empty() {
        TableView::Empty
    } else {
        TableView::Populated(filtered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_customer::ui::test_support::customer;

    fn sample_list() -> Vec<Customer> {
        vec![
            customer(1, "Ahmed Ali", "0551234567"),
            customer(2, "Sara Omar", "0509876543"),
            customer(3, "محمد الأحمد", "0561112222"),
        ]
    }

    fn ids(customers: &[Customer]) -> Vec<i64> {
        customers.iter().map(|c| c.id).collect()
    }

    #[test]
    fn test_name_match_ignores_case() {
        let list = sample_list();
        assert_eq!(ids(&filter_customers(&list, "ahmed")), vec![1]);
        assert_eq!(ids(&filter_customers(&list, "AHMED")), vec![1]);
        assert_eq!(ids(&filter_customers(&list, "oMaR")), vec![2]);
    }

    #[test]
    fn test_mobile_match_is_substring() {
        let list = sample_list();
        assert_eq!(ids(&filter_customers(&list, "0509")), vec![2]);
        assert_eq!(ids(&filter_customers(&list, "1112")), vec![3]);
        assert_eq!(ids(&filter_customers(&list, "05")), vec![1, 2, 3]);
    }

    #[test]
    fn test_mobile_match_is_case_sensitive() {
        let mut list = sample_list();
        list[1].mobile_number = "EXT-42".to_string();
        assert_eq!(ids(&filter_customers(&list, "EXT")), vec![2]);
        assert!(filter_customers(&list, "ext").is_empty());
    }

    #[test]
    fn test_arabic_name_match() {
        let list = sample_list();
        assert_eq!(ids(&filter_customers(&list, "الأحمد")), vec![3]);
    }

    #[test]
    fn test_empty_term_keeps_everything_in_order() {
        let list = sample_list();
        assert_eq!(filter_customers(&list, ""), list);
    }

    #[test]
    fn test_filtered_is_subset() {
        let list = sample_list();
        for term in ["a", "05", "x", "Ali", "9"] {
            let filtered = filter_customers(&list, term);
            assert!(filtered.iter().all(|c| list.contains(c)));
            assert!(filtered.iter().all(|c| matches_search(c, term)));
            let missing = list.iter().filter(|c| !filtered.contains(c));
            assert!(missing.into_iter().all(|c| !matches_search(c, term)));
        }
    }

    #[test]
    fn test_loading_renders_no_table() {
        let view = table_view(true, &sample_list(), "");
        assert!(!view.shows_table());
        assert_eq!(view.body_row_count(), 0);
        assert_eq!(view.placeholder_colspan(), None);
        assert!(view.rows().is_empty());
    }

    #[test]
    fn test_empty_renders_single_full_width_row() {
        let view = table_view(false, &sample_list(), "999");
        assert!(view.shows_table());
        assert_eq!(view.body_row_count(), 1);
        assert_eq!(view.placeholder_colspan(), Some(9));
        assert!(view.rows().is_empty());
    }

    #[test]
    fn test_populated_renders_one_row_per_match() {
        let view = table_view(false, &sample_list(), "05");
        assert!(view.shows_table());
        assert_eq!(view.placeholder_colspan(), None);
        assert_eq!(view.body_row_count(), 3);
        assert_eq!(ids(view.rows()), vec![1, 2, 3]);
    }

    #[test]
    fn test_loading_wins_over_content() {
        let list = sample_list();
        assert_eq!(table_view(true, &list, ""), TableView::Loading);
        assert_eq!(table_view(true, &[], "zzz"), TableView::Loading);
        assert!(table_view(true, &list, "ahmed").is_loading());
    }

    #[test]
    fn test_no_match_is_empty_view() {
        let list = vec![customer(1, "Ahmed Ali", "0551234567")];
        assert_eq!(table_view(false, &list, "999"), TableView::Empty);
        assert_eq!(table_view(false, &[], ""), TableView::Empty);
    }

    #[test]
    fn test_match_is_populated_view() {
        let list = vec![customer(1, "Ahmed Ali", "0551234567")];
        match table_view(false, &list, "ahmed") {
            TableView::Populated(rows) => assert_eq!(ids(&rows), vec![1]),
            other => panic!("unexpected view: {:?}", other),
        }
    }
}
