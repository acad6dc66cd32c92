use dioxus::prelude::*;

#[derive(Clone, Copy, PartialEq)]
pub enum Section {
    Dashboard,
    Users,
    Books,
    Loans,
}

impl Section {
    pub fn label(&self) -> &'static str {
        match self {
            Section::Dashboard => "Dashboard",
            Section::Users => "Users",
            Section::Books => "Books",
            Section::Loans => "Loans",
        }
    }

    pub fn all() -> &'static [Section] {
        &[
            Section::Dashboard,
            Section::Users,
            Section::Books,
            Section::Loans,
        ]
    }
}

#[component]
pub fn Sidebar(current: Section, on_change: EventHandler<Section>) -> Element {
    rsx! {
        nav { class: "sidebar",
            div { class: "app-name", "LIBRARY" }
            for section in Section::all() {
                button {
                    class: if *section == current { "nav-item active" } else { "nav-item" },
                    onclick: move |_| on_change.call(*section),
                    "{section.label()}"
                }
            }
        }
    }
}

#[component]
pub fn Shell(
    current_section: Section,
    on_section_change: EventHandler<Section>,
    children: Element,
) -> Element {
    rsx! {
        div { id: "main",
            Sidebar { current: current_section, on_change: on_section_change }
            div { class: "content",
                {children}
            }
        }
    }
}
