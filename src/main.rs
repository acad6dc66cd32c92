use dioxus::prelude::*;

use library_console::components::{Section, Shell};
use library_console::views::{BooksView, DashboardView, LoansView, UsersView};

static MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[allow(non_snake_case)]
fn App() -> Element {
    let mut current_section = use_signal(|| Section::Dashboard);

    let handle_section_change = move |section: Section| {
        current_section.set(section);
    };

    rsx! {
        document::Stylesheet { href: MAIN_CSS }

        Shell {
            current_section: current_section(),
            on_section_change: handle_section_change,

            match current_section() {
                Section::Dashboard => rsx! { DashboardView {} },
                Section::Users => rsx! { UsersView {} },
                Section::Books => rsx! { BooksView {} },
                Section::Loans => rsx! { LoansView {} },
            }
        }
    }
}
