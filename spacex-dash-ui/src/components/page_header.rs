use dioxus::prelude::*;

#[component]
pub fn PageHeader(title: String) -> Element {
    rsx! {
        h1 {
            style: "text-align: center; color: #503D36; font-size: 40px;",
            "{title}"
        }
    }
}
