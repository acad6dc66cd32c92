use dioxus::logger::tracing;
use dioxus::prelude::*;

use crate::api;
use crate::components::Modal;
use crate::models::{
    filter_loans, Book, CreateLoanPayload, Loan, LoanFilter, LoanStats, LoanStatus,
    UpdateLoanPayload, User,
};
use crate::utils::{alert, date_input_value, format_date, loan_duration_days, midnight_date_time};

#[component]
pub fn LoansView() -> Element {
    let mut loans = use_signal(Vec::<Loan>::new);
    let mut loading = use_signal(|| true);
    let mut filter = use_signal(LoanFilter::default);
    let mut returning = use_signal(|| None::<i64>);

    let mut show_new_modal = use_signal(|| false);
    let mut editing_loan = use_signal(|| None::<Loan>);

    let fetch_loans = move || {
        spawn(async move {
            loading.set(true);
            match api::get_loans().await {
                Ok(list) => loans.set(list),
                Err(e) => tracing::error!("failed to fetch loans: {e}"),
            }
            loading.set(false);
        });
    };

    use_effect(move || {
        fetch_loans();
    });

    let mut handle_return = move |id: i64| {
        returning.set(Some(id));
        spawn(async move {
            match api::return_loan(id).await {
                Ok(_) => fetch_loans(),
                Err(e) => alert(&format!("Failed to return book: {e}")),
            }
            returning.set(None);
        });
    };

    let all_loans = loans();
    let stats = LoanStats::of(&all_loans);
    let filtered_loans = filter_loans(&all_loans, filter());

    rsx! {
        div { class: "content-header",
            div {
                h1 { "Loans" }
                p { class: "subtitle", "Manage the library's loans" }
            }
            button { class: "primary", onclick: move |_| show_new_modal.set(true), "New loan" }
        }

        div { class: "filter-tabs",
            for f in LoanFilter::all() {
                {
                    let count = stats.for_filter(*f);
                    rsx! {
                        button {
                            class: if *f == filter() { "tab active" } else { "tab" },
                            onclick: move |_| filter.set(*f),
                            "{f.label()} ({count})"
                        }
                    }
                }
            }
        }

        if loading() {
            div { class: "loading", "Loading..." }
        } else if filtered_loans.is_empty() {
            div { class: "empty-state", "No loans found" }
        } else {
            table { class: "data-table",
                thead {
                    tr {
                        th { "ID" }
                        th { "User" }
                        th { "Book" }
                        th { "Borrowed" }
                        th { "Due" }
                        th { "Status" }
                        th { class: "actions", "Actions" }
                    }
                }
                tbody {
                    for loan in filtered_loans {
                        {
                            let loan_for_edit = loan.clone();
                            let returned_at = match (loan.status, loan.return_date.as_deref()) {
                                (LoanStatus::Returned, Some(returned)) => Some(format_date(returned)),
                                _ => None,
                            };
                            rsx! {
                                tr { key: "{loan.id}",
                                    td { class: "row-title", "#{loan.id}" }
                                    td { "User #{loan.user_id}" }
                                    td { "Book #{loan.book_id}" }
                                    td { "{format_date(&loan.borrow_date)}" }
                                    td {
                                        class: if loan.status == LoanStatus::Overdue { "late" } else { "" },
                                        "{format_date(&loan.due_date)}"
                                    }
                                    td {
                                        span { class: "{loan.status.badge_class()}", "{loan.status.label()}" }
                                    }
                                    td { class: "actions",
                                        button {
                                            class: "btn-text",
                                            onclick: move |_| editing_loan.set(Some(loan_for_edit.clone())),
                                            "Edit"
                                        }
                                        if loan.status != LoanStatus::Returned {
                                            button {
                                                class: "btn-text",
                                                disabled: returning() == Some(loan.id),
                                                onclick: move |_| handle_return(loan.id),
                                                if returning() == Some(loan.id) { "Returning..." } else { "Return" }
                                            }
                                        }
                                        if let Some(returned) = returned_at {
                                            span { class: "returned-at", "✓ {returned}" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }

        if show_new_modal() {
            NewLoanModal {
                on_close: move |_| show_new_modal.set(false),
                on_saved: move |_| {
                    show_new_modal.set(false);
                    fetch_loans();
                }
            }
        }

        if let Some(loan) = editing_loan() {
            EditLoanModal {
                loan: loan.clone(),
                on_close: move |_| editing_loan.set(None),
                on_saved: move |_| {
                    editing_loan.set(None);
                    fetch_loans();
                }
            }
        }
    }
}

/// Edits a loan's dates. The pickers are date-only, so the two calendar
/// dates are translated into a midnight-anchored borrow date plus a whole-day
/// duration, which is what the update endpoint expects; the backend derives
/// the due date from them.
#[component]
fn EditLoanModal(loan: Loan, on_close: EventHandler<()>, on_saved: EventHandler<()>) -> Element {
    let mut borrow_date = use_signal(|| date_input_value(&loan.borrow_date));
    let mut due_date = use_signal(|| date_input_value(&loan.due_date));
    let mut error = use_signal(|| None::<String>);
    let mut loading = use_signal(|| false);

    let loan_id = loan.id;

    let handle_submit = move |e: Event<FormData>| {
        e.prevent_default();
        e.stop_propagation();

        // Both dates are required; the submit button is disabled without
        // them, so this is only a guard against a stale event.
        if borrow_date().is_empty() || due_date().is_empty() {
            return;
        }

        let (Some(duration), Some(borrow)) = (
            loan_duration_days(&borrow_date(), &due_date()),
            midnight_date_time(&borrow_date()),
        ) else {
            error.set(Some("Invalid dates".to_string()));
            return;
        };

        loading.set(true);
        error.set(None);

        spawn(async move {
            let result = api::update_loan(
                loan_id,
                UpdateLoanPayload {
                    borrow_date: Some(borrow),
                    duration_days: Some(duration),
                    ..Default::default()
                },
            )
            .await;

            loading.set(false);

            match result {
                Ok(_) => on_saved.call(()),
                Err(e) => error.set(Some(e)),
            }
        });
    };

    rsx! {
        Modal { title: "Edit loan".to_string(), on_close: on_close,
            if let Some(err) = error() {
                div { class: "error-message", "{err}" }
            }

            form { onsubmit: handle_submit,
                div { class: "form-group",
                    label { "Borrow date" }
                    input {
                        r#type: "date",
                        value: "{borrow_date}",
                        onchange: move |e| borrow_date.set(e.value()),
                        disabled: loading(),
                    }
                }

                div { class: "form-group",
                    label { "Expected return date" }
                    input {
                        r#type: "date",
                        value: "{due_date}",
                        onchange: move |e| due_date.set(e.value()),
                        disabled: loading(),
                    }
                }

                button {
                    class: "primary w-full",
                    r#type: "submit",
                    disabled: loading() || borrow_date().is_empty() || due_date().is_empty(),
                    if loading() { "Saving..." } else { "Save" }
                }
            }
        }
    }
}

/// Borrow dialog: pick one user and one book with stock, then submit.
/// The duration is left to the backend's default loan period.
#[component]
fn NewLoanModal(on_close: EventHandler<()>, on_saved: EventHandler<()>) -> Element {
    let mut users = use_signal(Vec::<User>::new);
    let mut books = use_signal(Vec::<Book>::new);
    let mut loading = use_signal(|| true);

    let mut user_search = use_signal(String::new);
    let mut book_search = use_signal(String::new);
    let mut selected_user = use_signal(|| None::<i64>);
    let mut selected_book = use_signal(|| None::<i64>);
    let mut error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    use_effect(move || {
        spawn(async move {
            loading.set(true);
            match api::get_users().await {
                Ok(list) => users.set(list),
                Err(e) => tracing::error!("failed to fetch users: {e}"),
            }
            match api::get_books().await {
                // Only books with copies on the shelf can be borrowed.
                Ok(list) => books.set(
                    list.into_iter()
                        .filter(|b| b.available_quantity > 0)
                        .collect(),
                ),
                Err(e) => tracing::error!("failed to fetch books: {e}"),
            }
            loading.set(false);
        });
    });

    let handle_submit = move |_| {
        let (Some(user_id), Some(book_id)) = (selected_user(), selected_book()) else {
            return;
        };

        submitting.set(true);
        error.set(None);

        spawn(async move {
            let result = api::create_loan(CreateLoanPayload { user_id, book_id }).await;

            submitting.set(false);

            match result {
                Ok(_) => on_saved.call(()),
                Err(e) => error.set(Some(e)),
            }
        });
    };

    let user_query = user_search().to_lowercase();
    let filtered_users: Vec<User> = users()
        .into_iter()
        .filter(|u| {
            user_query.is_empty()
                || u.name.to_lowercase().contains(&user_query)
                || u.email.to_lowercase().contains(&user_query)
        })
        .collect();

    let book_query = book_search().to_lowercase();
    let filtered_books: Vec<Book> = books()
        .into_iter()
        .filter(|b| {
            book_query.is_empty()
                || b.title.to_lowercase().contains(&book_query)
                || b.author.to_lowercase().contains(&book_query)
        })
        .collect();

    let no_users = filtered_users.is_empty();
    let no_books = filtered_books.is_empty();

    let selected_user_name = selected_user()
        .and_then(|id| users().iter().find(|u| u.id == id).map(|u| u.name.clone()));
    let selected_book_title = selected_book()
        .and_then(|id| books().iter().find(|b| b.id == id).map(|b| b.title.clone()));

    rsx! {
        Modal { title: "New loan".to_string(), on_close: on_close,
            if let Some(err) = error() {
                div { class: "error-message", "{err}" }
            }

            if loading() {
                div { class: "loading", "Loading..." }
            } else {
                div { class: "picker-grid",
                    div { class: "picker",
                        label { "1. Select a user" }
                        input {
                            r#type: "text",
                            placeholder: "Search...",
                            value: "{user_search}",
                            oninput: move |e| user_search.set(e.value()),
                        }
                        div { class: "pick-list",
                            for user in filtered_users {
                                button {
                                    r#type: "button",
                                    key: "{user.id}",
                                    class: if selected_user() == Some(user.id) { "pick-item selected" } else { "pick-item" },
                                    onclick: move |_| selected_user.set(Some(user.id)),
                                    div { class: "row-title", "{user.name}" }
                                    div { class: "row-detail", "{user.email}" }
                                }
                            }
                            if no_users {
                                div { class: "empty-state", "No users found" }
                            }
                        }
                    }

                    div { class: "picker",
                        label { "2. Select a book" }
                        input {
                            r#type: "text",
                            placeholder: "Search...",
                            value: "{book_search}",
                            oninput: move |e| book_search.set(e.value()),
                        }
                        div { class: "pick-list",
                            for book in filtered_books {
                                button {
                                    r#type: "button",
                                    key: "{book.id}",
                                    class: if selected_book() == Some(book.id) { "pick-item selected" } else { "pick-item" },
                                    onclick: move |_| selected_book.set(Some(book.id)),
                                    div { class: "row-title", "{book.title}" }
                                    div { class: "row-detail", "{book.author} · {book.available_quantity} available" }
                                }
                            }
                            if no_books {
                                div { class: "empty-state", "No books available" }
                            }
                        }
                    }
                }

                div { class: "summary",
                    div {
                        span { class: "row-detail", "User: " }
                        if let Some(name) = selected_user_name {
                            span { class: "row-title", "{name}" }
                        } else {
                            span { class: "row-detail", "not selected" }
                        }
                    }
                    div {
                        span { class: "row-detail", "Book: " }
                        if let Some(title) = selected_book_title {
                            span { class: "row-title", "{title}" }
                        } else {
                            span { class: "row-detail", "not selected" }
                        }
                    }
                }

                button {
                    class: "primary w-full",
                    r#type: "button",
                    disabled: submitting() || selected_user().is_none() || selected_book().is_none(),
                    onclick: handle_submit,
                    if submitting() { "Creating..." } else { "Create loan" }
                }
            }
        }
    }
}
