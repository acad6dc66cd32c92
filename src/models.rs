use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub address: String,
    pub phone: String,
}

/// Full record minus id, sent on both create and update.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserPayload {
    pub name: String,
    pub email: String,
    pub address: String,
    pub phone: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub category: String,
    pub isbn: String,
    pub total_quantity: u32,
    pub available_quantity: u32,
    pub borrowed_quantity: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookPayload {
    pub title: String,
    pub author: String,
    pub category: String,
    pub isbn: String,
    pub total_quantity: u32,
    pub available_quantity: u32,
    pub borrowed_quantity: u32,
}

/// Category values accepted by the backend, with display labels.
pub const BOOK_CATEGORIES: &[(&str, &str)] = &[
    ("NOVEL", "Novel"),
    ("SCIENCE_FICTION", "Science fiction"),
    ("HISTORY", "History"),
    ("BIOGRAPHY", "Biography"),
    ("TECHNICAL", "Technical"),
    ("YOUTH", "Youth"),
    ("OTHER", "Other"),
];

pub fn category_label(value: &str) -> &str {
    BOOK_CATEGORIES
        .iter()
        .find(|(v, _)| *v == value)
        .map(|(_, label)| *label)
        .unwrap_or(value)
}

/// Loan lifecycle stage, computed server-side. The console never derives
/// OVERDUE itself; it only filters and counts the value it received.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LoanStatus {
    Ongoing,
    Returned,
    Overdue,
}

impl LoanStatus {
    pub fn label(&self) -> &'static str {
        match self {
            LoanStatus::Ongoing => "ONGOING",
            LoanStatus::Returned => "RETURNED",
            LoanStatus::Overdue => "OVERDUE",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            LoanStatus::Ongoing => "badge ongoing",
            LoanStatus::Returned => "badge returned",
            LoanStatus::Overdue => "badge overdue",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Loan {
    pub id: i64,
    pub user_id: i64,
    pub book_id: i64,
    pub borrow_date: String,
    pub due_date: String,
    pub return_date: Option<String>,
    pub status: LoanStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLoanPayload {
    pub user_id: i64,
    pub book_id: i64,
}

/// Partial update; absent fields are left untouched by the backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLoanPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub book_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_days: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub borrow_date: Option<String>,
}

/// Status selector for the loans screen. `All` disables filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoanFilter {
    #[default]
    All,
    Ongoing,
    Returned,
    Overdue,
}

impl LoanFilter {
    pub fn label(&self) -> &'static str {
        match self {
            LoanFilter::All => "All",
            LoanFilter::Ongoing => "Ongoing",
            LoanFilter::Returned => "Returned",
            LoanFilter::Overdue => "Overdue",
        }
    }

    pub fn all() -> &'static [LoanFilter] {
        &[
            LoanFilter::All,
            LoanFilter::Ongoing,
            LoanFilter::Returned,
            LoanFilter::Overdue,
        ]
    }

    pub fn matches(&self, status: LoanStatus) -> bool {
        match self {
            LoanFilter::All => true,
            LoanFilter::Ongoing => status == LoanStatus::Ongoing,
            LoanFilter::Returned => status == LoanStatus::Returned,
            LoanFilter::Overdue => status == LoanStatus::Overdue,
        }
    }
}

/// Order-preserving subsequence of `loans` matching `filter`.
pub fn filter_loans(loans: &[Loan], filter: LoanFilter) -> Vec<Loan> {
    loans
        .iter()
        .filter(|l| filter.matches(l.status))
        .cloned()
        .collect()
}

/// Per-status counts over a loan collection. `total` is the input length;
/// the other three partition it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoanStats {
    pub total: usize,
    pub ongoing: usize,
    pub returned: usize,
    pub overdue: usize,
}

impl LoanStats {
    pub fn of(loans: &[Loan]) -> Self {
        let mut stats = LoanStats {
            total: loans.len(),
            ..Default::default()
        };
        for loan in loans {
            match loan.status {
                LoanStatus::Ongoing => stats.ongoing += 1,
                LoanStatus::Returned => stats.returned += 1,
                LoanStatus::Overdue => stats.overdue += 1,
            }
        }
        stats
    }

    pub fn for_filter(&self, filter: LoanFilter) -> usize {
        match filter {
            LoanFilter::All => self.total,
            LoanFilter::Ongoing => self.ongoing,
            LoanFilter::Returned => self.returned,
            LoanFilter::Overdue => self.overdue,
        }
    }
}
