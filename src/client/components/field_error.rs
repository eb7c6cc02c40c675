use dioxus::prelude::*;

/// Validation message rendered under a form input.
#[component]
pub fn FieldError(#[props(!optional)] message: Option<String>) -> Element {
    rsx!(
        if let Some(message) = message {
            p { class: "text-error text-sm mt-1", "{message}" }
        }
    )
}
