use library_console::models::*;

fn loan(id: i64, status: LoanStatus) -> Loan {
    Loan {
        id,
        user_id: 1,
        book_id: 1,
        borrow_date: "2024-01-10T00:00:00".to_string(),
        due_date: "2024-01-24T00:00:00".to_string(),
        return_date: None,
        status,
    }
}

fn sample_loans() -> Vec<Loan> {
    vec![
        loan(1, LoanStatus::Ongoing),
        loan(2, LoanStatus::Returned),
        loan(3, LoanStatus::Ongoing),
        loan(4, LoanStatus::Overdue),
    ]
}

#[test]
fn filter_all_returns_full_input() {
    let loans = sample_loans();
    let filtered = filter_loans(&loans, LoanFilter::All);
    assert_eq!(filtered, loans);
}

#[test]
fn filter_is_order_preserving_subsequence() {
    let loans = sample_loans();
    let filtered = filter_loans(&loans, LoanFilter::Ongoing);
    let ids: Vec<i64> = filtered.iter().map(|l| l.id).collect();
    assert_eq!(ids, vec![1, 3]);
    assert!(filtered.iter().all(|l| l.status == LoanStatus::Ongoing));
}

#[test]
fn filter_overdue_selects_exactly_the_overdue_loan() {
    let loans = sample_loans();
    let filtered = filter_loans(&loans, LoanFilter::Overdue);
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, 4);
}

#[test]
fn filter_on_empty_input_is_empty() {
    for f in LoanFilter::all() {
        assert!(filter_loans(&[], *f).is_empty());
    }
}

#[test]
fn stats_partition_the_input() {
    let loans = sample_loans();
    let stats = LoanStats::of(&loans);
    assert_eq!(stats.total, 4);
    assert_eq!(stats.ongoing, 2);
    assert_eq!(stats.returned, 1);
    assert_eq!(stats.overdue, 1);
    assert_eq!(stats.ongoing + stats.returned + stats.overdue, stats.total);
    assert_eq!(stats.total, loans.len());
}

#[test]
fn stats_of_empty_input_are_zero() {
    let stats = LoanStats::of(&[]);
    assert_eq!(stats, LoanStats::default());
}

#[test]
fn stats_counts_match_filtered_lengths() {
    let loans = sample_loans();
    let stats = LoanStats::of(&loans);
    for f in LoanFilter::all() {
        assert_eq!(stats.for_filter(*f), filter_loans(&loans, *f).len());
    }
}

#[test]
fn filtering_is_idempotent_on_identical_inputs() {
    let loans = sample_loans();
    assert_eq!(
        filter_loans(&loans, LoanFilter::Returned),
        filter_loans(&loans, LoanFilter::Returned)
    );
    assert_eq!(LoanStats::of(&loans), LoanStats::of(&loans));
}
