//! Render components to HTML without a renderer.

#![allow(dead_code)]

use dioxus::prelude::*;
use flames_api::Product;
use flames_storefront::components::{Collection, Hero, ProductCard, SiteFooter};
use flames_storefront::{Catalog, Category};

#[derive(Props, Clone, PartialEq)]
struct CollectionHarness {
    catalog: Catalog,
}

fn collection_harness(props: CollectionHarness) -> Element {
    rsx! {
        Collection { catalog: props.catalog, on_refresh: move |_| {}, on_seed: move |_| {} }
    }
}

#[derive(Props, Clone, PartialEq)]
struct CardHarness {
    product: Product,
}

fn card_harness(props: CardHarness) -> Element {
    rsx! {
        ProductCard { product: props.product }
    }
}

#[derive(Props, Clone, PartialEq)]
struct HeroHarness {
    active: Category,
}

fn hero_harness(props: HeroHarness) -> Element {
    rsx! {
        Hero { active: props.active, on_select: move |_| {} }
        SiteFooter {}
    }
}

pub fn render_collection(catalog: Catalog) -> String {
    let mut dom = VirtualDom::new_with_props(collection_harness, CollectionHarness { catalog });
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

pub fn render_card(product: Product) -> String {
    let mut dom = VirtualDom::new_with_props(card_harness, CardHarness { product });
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

pub fn render_hero(active: Category) -> String {
    let mut dom = VirtualDom::new_with_props(hero_harness, HeroHarness { active });
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}
