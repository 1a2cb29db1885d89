mod harness;

use flames_api::{Action, ApiError, Product};
use flames_storefront::{Catalog, Category};
use harness::{render_card, render_collection, render_hero};

fn onyx() -> Product {
    Product {
        id: Some("p1".to_string()),
        title: "Essential Oversized Tee".to_string(),
        description: Some("Premium heavyweight cotton.".to_string()),
        price: 34.0,
        category: "Minimal".to_string(),
        image_url: Some("https://example.com/onyx.jpg".to_string()),
        tags: vec!["minimal".to_string()],
    }
}

fn loaded(items: Vec<Product>) -> Catalog {
    let mut catalog = Catalog::new();
    let ticket = catalog.refresh();
    catalog.finish_fetch(ticket.complete(Ok(items)));
    catalog
}

#[test]
fn card_shows_price_with_two_decimals() {
    let html = render_card(onyx());

    assert!(html.contains("$34.00"));
    assert!(html.contains("Essential Oversized Tee"));
    assert!(html.contains("Premium heavyweight cotton."));
    assert!(html.contains("https://example.com/onyx.jpg"));
    assert!(html.contains("Minimal"));
    assert!(html.contains("Add to cart"));
    assert!(!html.contains("No image"));
}

#[test]
fn card_without_image_or_description() {
    let html = render_card(Product {
        description: Some(String::new()),
        image_url: None,
        price: 5.5,
        ..onyx()
    });

    assert!(html.contains("No image"));
    assert!(html.contains("$5.50"));
    assert!(!html.contains("<img"));
    assert!(!html.contains("text-xs text-gray-500"));
}

#[test]
fn tags_are_never_rendered() {
    let html = render_card(Product {
        tags: vec!["secret-tag".to_string()],
        ..onyx()
    });

    assert!(!html.contains("secret-tag"));
}

#[test]
fn empty_collection_offers_samples() {
    let html = render_collection(loaded(Vec::new()));

    assert!(html.contains("No products yet"));
    assert!(html.contains("Load sample products"));
    assert!(html.contains("href=\"/test\""));
    assert!(html.contains("Minimal Collection"));
    assert!(!html.contains("bg-red-50"));
}

#[test]
fn failed_fetch_shows_the_error_above_the_grid() {
    let mut catalog = Catalog::new();
    let ticket = catalog.refresh();
    catalog.finish_fetch(ticket.complete(Err(ApiError::Status {
        action: Action::Load,
        status: 502,
    })));

    let html = render_collection(catalog);

    assert!(html.contains("bg-red-50"));
    assert!(html.contains("Failed to load: 502"));
    assert!(!html.contains("Add to cart"));
}

#[test]
fn loading_shows_the_skeleton() {
    let mut catalog = loaded(vec![onyx()]);
    let _pending = catalog.select(Category::Christian);

    let html = render_collection(catalog);

    assert_eq!(html.matches("animate-pulse").count(), 8);
    assert!(html.contains("Christian Collection"));
    assert!(!html.contains("No products yet"));
    assert!(!html.contains("Add to cart"));
}

#[test]
fn loaded_collection_renders_one_card_per_product() {
    let second = Product {
        id: None,
        title: "Gradient Hoodie".to_string(),
        price: 68.0,
        ..onyx()
    };

    let html = render_collection(loaded(vec![onyx(), second]));

    assert_eq!(html.matches("Add to cart").count(), 2);
    assert!(html.contains("$34.00"));
    assert!(html.contains("$68.00"));
    assert!(!html.contains("No products yet"));
}

#[test]
fn hero_highlights_only_the_active_category() {
    let html = render_hero(Category::AnimeInspired);

    assert_eq!(html.matches("bg-black text-white border-black").count(), 1);
    assert!(html.contains("Anime inspired"));
    assert!(html.contains("Flames Studio. All rights reserved."));
}
