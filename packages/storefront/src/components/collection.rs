use dioxus::prelude::*;

use super::{EmptyState, ProductCard};
use crate::Catalog;

const GRID: &str = "grid grid-cols-2 sm:grid-cols-3 lg:grid-cols-4 gap-4";

/// Tiles shown while a request is in flight.
const SKELETON_TILES: usize = 8;

/// The product section: toolbar, error banner, then either the loading
/// skeleton, the empty state or the grid.
#[component]
pub fn Collection(
    catalog: Catalog,
    on_refresh: EventHandler<()>,
    on_seed: EventHandler<()>,
) -> Element {
    let heading = format!("{} Collection", catalog.active());

    let error = catalog.error().map(|message| {
        rsx! {
            div { class: "mb-4 rounded-md border border-red-200 bg-red-50 px-4 py-3 text-sm text-red-700",
                "{message}"
            }
        }
    });

    let body = if catalog.loading() {
        rsx! { LoadingGrid {} }
    } else if catalog.items().is_empty() {
        rsx! { EmptyState { on_seed } }
    } else {
        let cards = catalog.items().iter().enumerate().map(|(index, product)| {
            let key = product.id.clone().unwrap_or_else(|| index.to_string());
            rsx! { ProductCard { key: "{key}", product: product.clone() } }
        });
        rsx! {
            div { class: GRID, {cards} }
        }
    };

    rsx! {
        section { id: "products", class: "mx-auto max-w-7xl px-4 sm:px-6 lg:px-8 pb-16",
            div { class: "flex items-center justify-between mb-4",
                h2 { class: "text-xl font-bold text-gray-900", "{heading}" }
                div { class: "flex items-center gap-2",
                    button {
                        r#type: "button",
                        class: "rounded-md border border-gray-300 bg-white px-3 py-1.5 text-sm font-medium hover:bg-gray-50",
                        onclick: move |_| on_refresh.call(()),
                        "Refresh"
                    }
                    button {
                        r#type: "button",
                        class: "rounded-md bg-black px-3 py-1.5 text-sm font-semibold text-white hover:bg-gray-900",
                        onclick: move |_| on_seed.call(()),
                        "Load samples"
                    }
                }
            }
            {error}
            {body}
        }
    }
}

#[component]
fn LoadingGrid() -> Element {
    rsx! {
        div { class: GRID,
            for tile in 0..SKELETON_TILES {
                div { key: "{tile}", class: "animate-pulse h-64 rounded-xl bg-gray-200" }
            }
        }
    }
}
