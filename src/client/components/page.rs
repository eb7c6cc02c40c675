use dioxus::prelude::*;

/// Content area of a tab, with the tab's heading.
#[component]
pub fn Page(title: &'static str, subtitle: Option<&'static str>, children: Element) -> Element {
    rsx!(
        div {
            class: "min-h-screen p-4 flex flex-col gap-4 max-w-[1440px] mx-auto",
            div {
                h1 { class: "text-2xl font-semibold", "{title}" }
                if let Some(subtitle) = subtitle {
                    p { class: "text-sm opacity-70", "{subtitle}" }
                }
            }
            {children}
        }
    )
}
