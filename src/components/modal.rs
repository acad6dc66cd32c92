use dioxus::prelude::*;

/// Blocking dialog; clicking the backdrop or the close button dismisses it.
#[component]
pub fn Modal(title: String, on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal",
                onclick: move |e| e.stop_propagation(),
                div { class: "modal-header",
                    h2 { "{title}" }
                    button { class: "btn-text", onclick: move |_| on_close.call(()), "✕" }
                }
                div { class: "modal-body",
                    {children}
                }
            }
        }
    }
}
