//! Page furniture around the collection.

use chrono::Datelike;
use dioxus::prelude::*;

use super::DIAGNOSTICS_PATH;
use crate::Category;

const HERO_IMAGE: &str =
    "https://images.unsplash.com/photo-1516826957135-700dedea698c?q=80&w=1600&auto=format&fit=crop";

#[component]
pub fn SiteHeader(on_select: EventHandler<Category>) -> Element {
    rsx! {
        header { class: "sticky top-0 z-10 backdrop-blur bg-white/70 border-b border-gray-100",
            div { class: "mx-auto max-w-7xl px-4 sm:px-6 lg:px-8 h-16 flex items-center justify-between",
                div { class: "flex items-center gap-2",
                    div { class: "h-8 w-8 rounded-full bg-black" }
                    span { class: "text-lg font-bold tracking-tight", "FLAMES STUDIO" }
                }
                nav { class: "hidden md:flex items-center gap-6 text-sm text-gray-600",
                    for category in Category::ALL {
                        a {
                            key: "{category}",
                            href: "#products",
                            class: "hover:text-gray-900",
                            onclick: move |_| on_select.call(category),
                            {category.nav_label()}
                        }
                    }
                    a { href: DIAGNOSTICS_PATH, class: "hover:text-gray-900", "System" }
                }
            }
        }
    }
}

#[component]
pub fn Hero(active: Category, on_select: EventHandler<Category>) -> Element {
    rsx! {
        section { class: "relative",
            div { class: "mx-auto max-w-7xl px-4 sm:px-6 lg:px-8 py-16 sm:py-24 grid gap-8 md:grid-cols-2 items-center",
                div {
                    h1 { class: "text-4xl sm:text-5xl font-extrabold tracking-tight text-gray-900",
                        "Wear your story."
                    }
                    p { class: "mt-4 text-gray-600",
                        "Explore three curated worlds – clean Minimal staples, bold Anime inspired art, and meaningful Christian designs."
                    }
                    div { class: "mt-8 flex gap-3",
                        for category in Category::ALL {
                            CategoryPill {
                                key: "{category}",
                                category,
                                selected: category == active,
                                on_select,
                            }
                        }
                    }
                }
                div { class: "relative aspect-[4/3] rounded-2xl overflow-hidden shadow-xl",
                    img { src: HERO_IMAGE, alt: "Hero", class: "absolute inset-0 h-full w-full object-cover" }
                }
            }
        }
    }
}

#[component]
fn CategoryPill(category: Category, selected: bool, on_select: EventHandler<Category>) -> Element {
    let tone = if selected {
        "bg-black text-white border-black"
    } else {
        "bg-white text-gray-900 border-gray-300 hover:border-gray-500"
    };

    rsx! {
        button {
            r#type: "button",
            class: "rounded-full px-4 py-2 text-sm font-semibold border transition {tone}",
            onclick: move |_| on_select.call(category),
            {category.label()}
        }
    }
}

#[component]
pub fn SiteFooter() -> Element {
    let year = chrono::Local::now().year();

    rsx! {
        footer { class: "border-t border-gray-200 py-8 text-center text-sm text-gray-500",
            "© {year} Flames Studio. All rights reserved."
        }
    }
}
