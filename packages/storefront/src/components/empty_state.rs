use dioxus::prelude::*;

use super::DIAGNOSTICS_PATH;

/// Shown in place of the grid when the active collection came back empty.
#[component]
pub fn EmptyState(on_seed: EventHandler<()>) -> Element {
    rsx! {
        div { class: "text-center py-16",
            h3 { class: "mt-2 text-lg font-semibold text-gray-900", "No products yet" }
            p { class: "mt-1 text-sm text-gray-500",
                "Add your first items or load sample products to preview the store."
            }
            div { class: "mt-6 flex items-center justify-center gap-3",
                button {
                    r#type: "button",
                    class: "rounded-md bg-black px-4 py-2 text-sm font-semibold text-white hover:bg-gray-900",
                    onclick: move |_| on_seed.call(()),
                    "Load sample products"
                }
                a {
                    href: DIAGNOSTICS_PATH,
                    class: "rounded-md bg-gray-200 px-4 py-2 text-sm font-semibold text-gray-900 hover:bg-gray-300",
                    "Check backend"
                }
            }
        }
    }
}
