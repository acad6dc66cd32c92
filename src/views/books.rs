use dioxus::logger::tracing;
use dioxus::prelude::*;

use crate::api;
use crate::components::Modal;
use crate::models::{category_label, Book, BookPayload, BOOK_CATEGORIES};
use crate::utils::{alert, confirm};

#[component]
pub fn BooksView() -> Element {
    let mut books = use_signal(Vec::<Book>::new);
    let mut loading = use_signal(|| true);
    let mut search = use_signal(String::new);
    let mut category_filter = use_signal(String::new);
    let mut deleting = use_signal(|| None::<i64>);

    let mut show_add_modal = use_signal(|| false);
    let mut editing_book = use_signal(|| None::<Book>);

    let fetch_books = move || {
        spawn(async move {
            loading.set(true);
            match api::get_books().await {
                Ok(list) => books.set(list),
                Err(e) => tracing::error!("failed to fetch books: {e}"),
            }
            loading.set(false);
        });
    };

    use_effect(move || {
        fetch_books();
    });

    let mut handle_delete = move |id: i64| {
        if !confirm("Delete this book?") {
            return;
        }
        deleting.set(Some(id));
        spawn(async move {
            match api::delete_book(id).await {
                Ok(()) => fetch_books(),
                Err(e) => alert(&format!("Failed to delete book: {e}")),
            }
            deleting.set(None);
        });
    };

    let total = books().len();
    let query = search().to_lowercase();
    let filtered_books: Vec<Book> = books()
        .into_iter()
        .filter(|b| {
            let search_match = query.is_empty()
                || b.title.to_lowercase().contains(&query)
                || b.author.to_lowercase().contains(&query)
                || b.isbn.to_lowercase().contains(&query);
            let category_match = category_filter().is_empty() || b.category == category_filter();
            search_match && category_match
        })
        .collect();

    rsx! {
        div { class: "content-header",
            div {
                h1 { "Books" }
                p { class: "subtitle", "{total} books in the catalog" }
            }
            button { class: "primary", onclick: move |_| show_add_modal.set(true), "Add book" }
        }

        div { class: "filters",
            input {
                r#type: "text",
                class: "search",
                placeholder: "Search by title, author or ISBN...",
                value: "{search}",
                oninput: move |e| search.set(e.value()),
            }
            select {
                value: "{category_filter}",
                onchange: move |e| category_filter.set(e.value()),
                option { value: "", "All categories" }
                for (value, label) in BOOK_CATEGORIES {
                    option { value: "{value}", "{label}" }
                }
            }
        }

        if loading() {
            div { class: "loading", "Loading..." }
        } else if filtered_books.is_empty() {
            div { class: "empty-state", "No books found" }
        } else {
            table { class: "data-table",
                thead {
                    tr {
                        th { "Book" }
                        th { "Category" }
                        th { "ISBN" }
                        th { "Stock" }
                        th { class: "actions", "Actions" }
                    }
                }
                tbody {
                    for book in filtered_books {
                        {
                            let book_for_edit = book.clone();
                            rsx! {
                                tr { key: "{book.id}",
                                    td {
                                        div { class: "row-title", "{book.title}" }
                                        div { class: "row-detail", "{book.author}" }
                                    }
                                    td {
                                        span { class: "tag", "{category_label(&book.category)}" }
                                    }
                                    td { class: "mono", "{book.isbn}" }
                                    td {
                                        span {
                                            class: if book.available_quantity > 0 { "stock available" } else { "stock depleted" },
                                            "{book.available_quantity}"
                                        }
                                        span { class: "row-detail", " / {book.total_quantity}" }
                                    }
                                    td { class: "actions",
                                        button {
                                            class: "btn-text",
                                            onclick: move |_| editing_book.set(Some(book_for_edit.clone())),
                                            "Edit"
                                        }
                                        button {
                                            class: "btn-text danger",
                                            disabled: deleting() == Some(book.id),
                                            onclick: move |_| handle_delete(book.id),
                                            if deleting() == Some(book.id) { "Deleting..." } else { "Delete" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }

        if show_add_modal() {
            AddBookModal {
                on_close: move |_| show_add_modal.set(false),
                on_saved: move |_| {
                    show_add_modal.set(false);
                    fetch_books();
                }
            }
        }

        if let Some(book) = editing_book() {
            EditBookModal {
                book: book.clone(),
                on_close: move |_| editing_book.set(None),
                on_saved: move |_| {
                    editing_book.set(None);
                    fetch_books();
                }
            }
        }
    }
}

fn parse_quantity(value: &str) -> Result<u32, String> {
    value
        .trim()
        .parse()
        .map_err(|_| "Quantities must be whole numbers".to_string())
}

#[component]
fn AddBookModal(on_close: EventHandler<()>, on_saved: EventHandler<()>) -> Element {
    let mut title = use_signal(String::new);
    let mut author = use_signal(String::new);
    let mut category = use_signal(|| "NOVEL".to_string());
    let mut isbn = use_signal(String::new);
    let mut total_quantity = use_signal(|| "1".to_string());
    let mut available_quantity = use_signal(|| "1".to_string());
    let mut borrowed_quantity = use_signal(|| "0".to_string());
    let mut error = use_signal(|| None::<String>);
    let mut loading = use_signal(|| false);

    let handle_submit = move |e: Event<FormData>| {
        e.prevent_default();
        e.stop_propagation();

        let title_val = title().trim().to_string();
        let author_val = author().trim().to_string();

        if title_val.is_empty() {
            error.set(Some("Title is required".to_string()));
            return;
        }
        if author_val.is_empty() {
            error.set(Some("Author is required".to_string()));
            return;
        }

        let (total, available, borrowed) = match (
            parse_quantity(&total_quantity()),
            parse_quantity(&available_quantity()),
            parse_quantity(&borrowed_quantity()),
        ) {
            (Ok(t), Ok(a), Ok(b)) => (t, a, b),
            _ => {
                error.set(Some("Quantities must be whole numbers".to_string()));
                return;
            }
        };

        loading.set(true);
        error.set(None);

        spawn(async move {
            let result = api::create_book(BookPayload {
                title: title_val,
                author: author_val,
                category: category(),
                isbn: isbn().trim().to_string(),
                total_quantity: total,
                available_quantity: available,
                borrowed_quantity: borrowed,
            })
            .await;

            loading.set(false);

            match result {
                Ok(_) => on_saved.call(()),
                Err(e) => error.set(Some(e)),
            }
        });
    };

    rsx! {
        Modal { title: "New book".to_string(), on_close: on_close,
            if let Some(err) = error() {
                div { class: "error-message", "{err}" }
            }

            form { onsubmit: handle_submit,
                div { class: "form-group",
                    label { "Title" }
                    input {
                        r#type: "text",
                        placeholder: "The Little Prince",
                        value: "{title}",
                        oninput: move |e| title.set(e.value()),
                        disabled: loading(),
                    }
                }

                div { class: "form-group",
                    label { "Author" }
                    input {
                        r#type: "text",
                        placeholder: "Antoine de Saint-Exupéry",
                        value: "{author}",
                        oninput: move |e| author.set(e.value()),
                        disabled: loading(),
                    }
                }

                div { class: "form-group",
                    label { "Category" }
                    select {
                        value: "{category}",
                        onchange: move |e| category.set(e.value()),
                        disabled: loading(),
                        for (value, label) in BOOK_CATEGORIES {
                            option { value: "{value}", "{label}" }
                        }
                    }
                }

                div { class: "form-group",
                    label { "ISBN" }
                    input {
                        r#type: "text",
                        placeholder: "978-3-16-148410-0",
                        value: "{isbn}",
                        oninput: move |e| isbn.set(e.value()),
                        disabled: loading(),
                    }
                }

                div { class: "form-row",
                    div { class: "form-group",
                        label { "Total" }
                        input {
                            r#type: "number",
                            min: "1",
                            value: "{total_quantity}",
                            oninput: move |e| total_quantity.set(e.value()),
                            disabled: loading(),
                        }
                    }
                    div { class: "form-group",
                        label { "Available" }
                        input {
                            r#type: "number",
                            min: "0",
                            value: "{available_quantity}",
                            oninput: move |e| available_quantity.set(e.value()),
                            disabled: loading(),
                        }
                    }
                    div { class: "form-group",
                        label { "Borrowed" }
                        input {
                            r#type: "number",
                            min: "0",
                            value: "{borrowed_quantity}",
                            oninput: move |e| borrowed_quantity.set(e.value()),
                            disabled: loading(),
                        }
                    }
                }

                button {
                    class: "primary w-full",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Saving..." } else { "Create" }
                }
            }
        }
    }
}

#[component]
fn EditBookModal(book: Book, on_close: EventHandler<()>, on_saved: EventHandler<()>) -> Element {
    let mut title = use_signal(|| book.title.clone());
    let mut author = use_signal(|| book.author.clone());
    let mut category = use_signal(|| book.category.clone());
    let mut isbn = use_signal(|| book.isbn.clone());
    let mut total_quantity = use_signal(|| book.total_quantity.to_string());
    let mut available_quantity = use_signal(|| book.available_quantity.to_string());
    let mut borrowed_quantity = use_signal(|| book.borrowed_quantity.to_string());
    let mut error = use_signal(|| None::<String>);
    let mut loading = use_signal(|| false);

    let book_id = book.id;

    let handle_submit = move |e: Event<FormData>| {
        e.prevent_default();
        e.stop_propagation();

        let title_val = title().trim().to_string();
        let author_val = author().trim().to_string();

        if title_val.is_empty() {
            error.set(Some("Title is required".to_string()));
            return;
        }
        if author_val.is_empty() {
            error.set(Some("Author is required".to_string()));
            return;
        }

        let (total, available, borrowed) = match (
            parse_quantity(&total_quantity()),
            parse_quantity(&available_quantity()),
            parse_quantity(&borrowed_quantity()),
        ) {
            (Ok(t), Ok(a), Ok(b)) => (t, a, b),
            _ => {
                error.set(Some("Quantities must be whole numbers".to_string()));
                return;
            }
        };

        loading.set(true);
        error.set(None);

        spawn(async move {
            let result = api::update_book(
                book_id,
                BookPayload {
                    title: title_val,
                    author: author_val,
                    category: category(),
                    isbn: isbn().trim().to_string(),
                    total_quantity: total,
                    available_quantity: available,
                    borrowed_quantity: borrowed,
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
        Modal { title: "Edit book".to_string(), on_close: on_close,
            if let Some(err) = error() {
                div { class: "error-message", "{err}" }
            }

            form { onsubmit: handle_submit,
                div { class: "form-group",
                    label { "Title" }
                    input {
                        r#type: "text",
                        value: "{title}",
                        oninput: move |e| title.set(e.value()),
                        disabled: loading(),
                    }
                }

                div { class: "form-group",
                    label { "Author" }
                    input {
                        r#type: "text",
                        value: "{author}",
                        oninput: move |e| author.set(e.value()),
                        disabled: loading(),
                    }
                }

                div { class: "form-group",
                    label { "Category" }
                    select {
                        value: "{category}",
                        onchange: move |e| category.set(e.value()),
                        disabled: loading(),
                        for (value, label) in BOOK_CATEGORIES {
                            option { value: "{value}", "{label}" }
                        }
                    }
                }

                div { class: "form-group",
                    label { "ISBN" }
                    input {
                        r#type: "text",
                        value: "{isbn}",
                        oninput: move |e| isbn.set(e.value()),
                        disabled: loading(),
                    }
                }

                div { class: "form-row",
                    div { class: "form-group",
                        label { "Total" }
                        input {
                            r#type: "number",
                            min: "1",
                            value: "{total_quantity}",
                            oninput: move |e| total_quantity.set(e.value()),
                            disabled: loading(),
                        }
                    }
                    div { class: "form-group",
                        label { "Available" }
                        input {
                            r#type: "number",
                            min: "0",
                            value: "{available_quantity}",
                            oninput: move |e| available_quantity.set(e.value()),
                            disabled: loading(),
                        }
                    }
                    div { class: "form-group",
                        label { "Borrowed" }
                        input {
                            r#type: "number",
                            min: "0",
                            value: "{borrowed_quantity}",
                            oninput: move |e| borrowed_quantity.set(e.value()),
                            disabled: loading(),
                        }
                    }
                }

                button {
                    class: "primary w-full",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Saving..." } else { "Save" }
                }
            }
        }
    }
}
