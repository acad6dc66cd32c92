use dioxus::logger::tracing;
use dioxus::prelude::*;

use crate::api;
use crate::models::Loan;
use crate::utils::format_date;

#[component]
pub fn DashboardView() -> Element {
    let mut user_count = use_signal(|| 0usize);
    let mut book_count = use_signal(|| 0usize);
    let mut loans = use_signal(Vec::<Loan>::new);
    let mut overdue = use_signal(Vec::<Loan>::new);
    let mut loading = use_signal(|| true);

    use_effect(move || {
        spawn(async move {
            loading.set(true);
            match api::get_users().await {
                Ok(users) => user_count.set(users.len()),
                Err(e) => tracing::error!("failed to fetch users: {e}"),
            }
            match api::get_books().await {
                Ok(books) => book_count.set(books.len()),
                Err(e) => tracing::error!("failed to fetch books: {e}"),
            }
            match api::get_loans().await {
                Ok(list) => loans.set(list),
                Err(e) => tracing::error!("failed to fetch loans: {e}"),
            }
            match api::get_overdue_loans().await {
                Ok(list) => overdue.set(list),
                Err(e) => tracing::error!("failed to fetch overdue loans: {e}"),
            }
            loading.set(false);
        });
    });

    // Last five loans, newest first.
    let recent_loans: Vec<Loan> = loans().iter().rev().take(5).cloned().collect();
    let loan_count = loans().len();
    let overdue_list = overdue();

    if loading() {
        return rsx! {
            div { class: "loading", "Loading..." }
        };
    }

    rsx! {
        div { class: "content-header",
            h1 { "Dashboard" }
            p { class: "subtitle", "Library overview" }
        }

        div { class: "stat-grid",
            div { class: "stat-card",
                div { class: "stat-label", "Users" }
                div { class: "stat-value", "{user_count}" }
            }
            div { class: "stat-card",
                div { class: "stat-label", "Books" }
                div { class: "stat-value", "{book_count}" }
            }
            div { class: "stat-card",
                div { class: "stat-label", "Loans" }
                div { class: "stat-value", "{loan_count}" }
            }
            div { class: "stat-card",
                div { class: "stat-label", "Overdue" }
                div { class: "stat-value overdue", "{overdue_list.len()}" }
            }
        }

        div { class: "dashboard-grid",
            div { class: "dashboard-block",
                h2 { "Recent loans" }
                if recent_loans.is_empty() {
                    div { class: "empty-state", "No loans" }
                } else {
                    div { class: "loan-list",
                        for loan in recent_loans {
                            div { class: "loan-row", key: "{loan.id}",
                                div {
                                    div { class: "row-title", "Loan #{loan.id}" }
                                    div { class: "row-detail", "User #{loan.user_id} · Book #{loan.book_id}" }
                                }
                                span { class: "{loan.status.badge_class()}", "{loan.status.label()}" }
                            }
                        }
                    }
                }
            }

            div { class: "dashboard-block",
                h2 { "Overdue loans" }
                if overdue_list.is_empty() {
                    div { class: "empty-state ok", "Nothing overdue" }
                } else {
                    div { class: "loan-list",
                        for loan in overdue_list.iter().take(5) {
                            div { class: "loan-row late", key: "{loan.id}",
                                div {
                                    div { class: "row-title", "Loan #{loan.id}" }
                                    div { class: "row-detail", "Due {format_date(&loan.due_date)}" }
                                }
                                span { class: "{loan.status.badge_class()}", "{loan.status.label()}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
