use dioxus::logger::tracing;
use dioxus::prelude::*;

use crate::api;
use crate::components::Modal;
use crate::models::{User, UserPayload};
use crate::utils::{alert, confirm};

#[component]
pub fn UsersView() -> Element {
    let mut users = use_signal(Vec::<User>::new);
    let mut loading = use_signal(|| true);
    let mut search = use_signal(String::new);
    let mut deleting = use_signal(|| None::<i64>);

    let mut show_add_modal = use_signal(|| false);
    let mut editing_user = use_signal(|| None::<User>);

    let fetch_users = move || {
        spawn(async move {
            loading.set(true);
            match api::get_users().await {
                Ok(list) => users.set(list),
                Err(e) => tracing::error!("failed to fetch users: {e}"),
            }
            loading.set(false);
        });
    };

    use_effect(move || {
        fetch_users();
    });

    let mut handle_delete = move |id: i64| {
        if !confirm("Delete this user?") {
            return;
        }
        deleting.set(Some(id));
        spawn(async move {
            match api::delete_user(id).await {
                Ok(()) => fetch_users(),
                Err(e) => alert(&format!("Failed to delete user: {e}")),
            }
            deleting.set(None);
        });
    };

    let total = users().len();
    let query = search().to_lowercase();
    let filtered_users: Vec<User> = users()
        .into_iter()
        .filter(|u| {
            query.is_empty()
                || u.name.to_lowercase().contains(&query)
                || u.email.to_lowercase().contains(&query)
        })
        .collect();

    rsx! {
        div { class: "content-header",
            div {
                h1 { "Users" }
                p { class: "subtitle", "{total} registered users" }
            }
            button { class: "primary", onclick: move |_| show_add_modal.set(true), "Add user" }
        }

        div { class: "filters",
            input {
                r#type: "text",
                class: "search",
                placeholder: "Search by name or email...",
                value: "{search}",
                oninput: move |e| search.set(e.value()),
            }
        }

        if loading() {
            div { class: "loading", "Loading..." }
        } else if filtered_users.is_empty() {
            div { class: "empty-state", "No users found" }
        } else {
            table { class: "data-table",
                thead {
                    tr {
                        th { "Name" }
                        th { "Email" }
                        th { "Phone" }
                        th { class: "actions", "Actions" }
                    }
                }
                tbody {
                    for user in filtered_users {
                        {
                            let user_for_edit = user.clone();
                            let phone = if user.phone.is_empty() { "—".to_string() } else { user.phone.clone() };
                            rsx! {
                                tr { key: "{user.id}",
                                    td { class: "row-title", "{user.name}" }
                                    td { "{user.email}" }
                                    td { "{phone}" }
                                    td { class: "actions",
                                        button {
                                            class: "btn-text",
                                            onclick: move |_| editing_user.set(Some(user_for_edit.clone())),
                                            "Edit"
                                        }
                                        button {
                                            class: "btn-text danger",
                                            disabled: deleting() == Some(user.id),
                                            onclick: move |_| handle_delete(user.id),
                                            if deleting() == Some(user.id) { "Deleting..." } else { "Delete" }
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
            AddUserModal {
                on_close: move |_| show_add_modal.set(false),
                on_saved: move |_| {
                    show_add_modal.set(false);
                    fetch_users();
                }
            }
        }

        if let Some(user) = editing_user() {
            EditUserModal {
                user: user.clone(),
                on_close: move |_| editing_user.set(None),
                on_saved: move |_| {
                    editing_user.set(None);
                    fetch_users();
                }
            }
        }
    }
}

#[component]
fn AddUserModal(on_close: EventHandler<()>, on_saved: EventHandler<()>) -> Element {
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut address = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut loading = use_signal(|| false);

    let handle_submit = move |e: Event<FormData>| {
        e.prevent_default();
        e.stop_propagation();

        let name_val = name().trim().to_string();
        let email_val = email().trim().to_string();

        if name_val.is_empty() {
            error.set(Some("Name is required".to_string()));
            return;
        }
        if email_val.is_empty() {
            error.set(Some("Email is required".to_string()));
            return;
        }

        loading.set(true);
        error.set(None);

        spawn(async move {
            let result = api::create_user(UserPayload {
                name: name_val,
                email: email_val,
                address: address(),
                phone: phone(),
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
        Modal { title: "New user".to_string(), on_close: on_close,
            if let Some(err) = error() {
                div { class: "error-message", "{err}" }
            }

            form { onsubmit: handle_submit,
                div { class: "form-group",
                    label { "Name" }
                    input {
                        r#type: "text",
                        placeholder: "John Doe",
                        value: "{name}",
                        oninput: move |e| name.set(e.value()),
                        disabled: loading(),
                    }
                }

                div { class: "form-group",
                    label { "Email" }
                    input {
                        r#type: "email",
                        placeholder: "john@example.com",
                        value: "{email}",
                        oninput: move |e| email.set(e.value()),
                        disabled: loading(),
                    }
                }

                div { class: "form-group",
                    label { "Address" }
                    input {
                        r#type: "text",
                        value: "{address}",
                        oninput: move |e| address.set(e.value()),
                        disabled: loading(),
                    }
                }

                div { class: "form-group",
                    label { "Phone" }
                    input {
                        r#type: "text",
                        value: "{phone}",
                        oninput: move |e| phone.set(e.value()),
                        disabled: loading(),
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
fn EditUserModal(user: User, on_close: EventHandler<()>, on_saved: EventHandler<()>) -> Element {
    let mut name = use_signal(|| user.name.clone());
    let mut email = use_signal(|| user.email.clone());
    let mut address = use_signal(|| user.address.clone());
    let mut phone = use_signal(|| user.phone.clone());
    let mut error = use_signal(|| None::<String>);
    let mut loading = use_signal(|| false);

    let user_id = user.id;

    let handle_submit = move |e: Event<FormData>| {
        e.prevent_default();
        e.stop_propagation();

        let name_val = name().trim().to_string();
        let email_val = email().trim().to_string();

        if name_val.is_empty() {
            error.set(Some("Name is required".to_string()));
            return;
        }
        if email_val.is_empty() {
            error.set(Some("Email is required".to_string()));
            return;
        }

        loading.set(true);
        error.set(None);

        spawn(async move {
            let result = api::update_user(
                user_id,
                UserPayload {
                    name: name_val,
                    email: email_val,
                    address: address(),
                    phone: phone(),
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
        Modal { title: "Edit user".to_string(), on_close: on_close,
            if let Some(err) = error() {
                div { class: "error-message", "{err}" }
            }

            form { onsubmit: handle_submit,
                div { class: "form-group",
                    label { "Name" }
                    input {
                        r#type: "text",
                        value: "{name}",
                        oninput: move |e| name.set(e.value()),
                        disabled: loading(),
                    }
                }

                div { class: "form-group",
                    label { "Email" }
                    input {
                        r#type: "email",
                        value: "{email}",
                        oninput: move |e| email.set(e.value()),
                        disabled: loading(),
                    }
                }

                div { class: "form-group",
                    label { "Address" }
                    input {
                        r#type: "text",
                        value: "{address}",
                        oninput: move |e| address.set(e.value()),
                        disabled: loading(),
                    }
                }

                div { class: "form-group",
                    label { "Phone" }
                    input {
                        r#type: "text",
                        value: "{phone}",
                        oninput: move |e| phone.set(e.value()),
                        disabled: loading(),
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
