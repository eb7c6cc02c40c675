use dioxus::prelude::*;

/// Dialog overlay used for the stock form, delete confirmation and order success.
///
/// Renders nothing while `show` is false. The confirm button is only shown when `on_confirm` is
/// set; forms inside the modal bring their own submit button instead.
#[component]
pub fn AppModal(
    show: bool,
    title: String,
    on_close: EventHandler<()>,
    on_confirm: Option<EventHandler<()>>,
    #[props(default = "Ya".to_string())] confirm_label: String,
    children: Element,
) -> Element {
    if !show {
        return rsx! {};
    }

    rsx!(
        div { class: "modal modal-open",
            div { class: "modal-box",
                div { class: "flex justify-between items-center mb-4",
                    h3 { class: "text-lg font-bold", "{title}" }
                    button {
                        class: "btn btn-sm btn-circle btn-ghost",
                        onclick: move |_| on_close.call(()),
                        "✕"
                    }
                }
                {children}
                if let Some(on_confirm) = on_confirm {
                    div { class: "modal-action",
                        button {
                            class: "btn",
                            onclick: move |_| on_close.call(()),
                            "Batal"
                        }
                        button {
                            class: "btn btn-primary",
                            onclick: move |_| on_confirm.call(()),
                            "{confirm_label}"
                        }
                    }
                }
            }
            div {
                class: "modal-backdrop",
                onclick: move |_| on_close.call(()),
            }
        }
    )
}
