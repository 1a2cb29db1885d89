use dioxus::prelude::*;
use flames_api::Product;

/// One product tile in the collection grid.
///
/// "Add to cart" is decorative: the storefront has no cart.
#[component]
pub fn ProductCard(product: Product) -> Element {
    let price = product.display_price();

    let image = match product.image() {
        Some(src) => rsx! {
            img {
                src: "{src}",
                alt: "{product.title}",
                class: "h-full w-full object-cover object-center transition-transform duration-300 group-hover:scale-105",
            }
        },
        None => rsx! {
            div { class: "h-full w-full flex items-center justify-center text-gray-400", "No image" }
        },
    };

    let description = product.summary().map(|text| {
        rsx! {
            p { class: "mt-2 text-xs text-gray-500 line-clamp-2", "{text}" }
        }
    });

    rsx! {
        div { class: "group relative overflow-hidden rounded-xl border border-gray-200 bg-white shadow-sm hover:shadow-md transition-all",
            div { class: "aspect-square w-full overflow-hidden bg-gray-50", {image} }
            div { class: "p-4",
                div { class: "flex items-start justify-between gap-2",
                    h3 { class: "text-sm font-semibold text-gray-900 line-clamp-2", "{product.title}" }
                    p { class: "text-sm font-bold text-gray-900", "{price}" }
                }
                {description}
                div { class: "mt-3 flex items-center justify-between",
                    span { class: "inline-flex items-center rounded-full bg-gray-100 px-2 py-0.5 text-xs font-medium text-gray-700",
                        "{product.category}"
                    }
                    button {
                        r#type: "button",
                        class: "rounded-md bg-black px-3 py-1.5 text-xs font-semibold text-white hover:bg-gray-900",
                        "Add to cart"
                    }
                }
            }
        }
    }
}
