use dioxus::prelude::*;
use siba::{
    engine::status::{classify, delivery_tone},
    model::tracking::DeliveryStatus,
};

/// Stock status badge with the item's note as tooltip.
#[component]
pub fn StatusBadge(quantity: u32, safety: u32, note: String) -> Element {
    let status = classify(quantity, safety);
    let class = status.tone().css_class();

    rsx!(
        div { class: "dropdown dropdown-hover",
            span {
                tabindex: "0",
                class: "badge gap-1 {class}",
                "{status.icon} {status.label}"
            }
            if !note.is_empty() {
                div {
                    tabindex: "0",
                    class: "dropdown-content card card-compact bg-base-100 shadow p-2 w-64 text-sm",
                    dangerous_inner_html: "{note}",
                }
            }
        }
    )
}

#[component]
pub fn DeliveryBadge(status: DeliveryStatus) -> Element {
    let class = delivery_tone(&status).css_class();

    rsx!(
        span { class: "badge {class}", "{status}" }
    )
}
