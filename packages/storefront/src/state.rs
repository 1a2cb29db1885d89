//! The view state behind [`ProductListView`](crate::components::ProductListView).
//!
//! Every request the view issues is stamped with a generation number. When a
//! response comes back it is applied only if no newer request was issued in
//! the meantime, so a slow response for a category the user already left can
//! never overwrite the current collection.

use std::fmt::Display;

use dioxus::logger::tracing::{debug, warn};
use flames_api::{sample_products, ApiClient, ApiError, NewProduct, Product};

/// The collections the storefront is organized into.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Category {
    #[default]
    Minimal,
    AnimeInspired,
    Christian,
}

impl Category {
    pub const ALL: [Category; 3] = [
        Category::Minimal,
        Category::AnimeInspired,
        Category::Christian,
    ];

    /// The value sent as `?category=`.
    pub fn key(self) -> &'static str {
        match self {
            Category::Minimal => "Minimal",
            Category::AnimeInspired => "Anime Inspired",
            Category::Christian => "Christian",
        }
    }

    /// The text on the category's pill button.
    pub fn label(self) -> &'static str {
        match self {
            Category::Minimal => "Minimal",
            Category::AnimeInspired => "Anime inspired",
            Category::Christian => "Christian",
        }
    }

    /// Short name used in the header navigation.
    pub fn nav_label(self) -> &'static str {
        match self {
            Category::Minimal => "Minimal",
            Category::AnimeInspired => "Anime",
            Category::Christian => "Christian",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Catalog {
    active: Category,
    loading: bool,
    error: String,
    items: Vec<Product>,
    generation: u64,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            active: Category::ALL[0],
            loading: false,
            error: String::new(),
            items: Vec::new(),
            generation: 0,
        }
    }

    pub fn active(&self) -> Category {
        self.active
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        (!self.error.is_empty()).then_some(self.error.as_str())
    }

    pub fn items(&self) -> &[Product] {
        &self.items
    }

    /// Nothing to show and nothing on the way.
    pub fn is_empty(&self) -> bool {
        !self.loading && self.items.is_empty()
    }

    /// Make `category` the active collection and fetch it.
    pub fn select(&mut self, category: Category) -> FetchTicket {
        self.active = category;
        self.fetch(category.key())
    }

    /// Fetch the active collection again.
    pub fn refresh(&mut self) -> FetchTicket {
        self.fetch(self.active.key())
    }

    /// Start a fetch for `category`. The category is sent as given.
    pub fn fetch(&mut self, category: impl Into<String>) -> FetchTicket {
        FetchTicket {
            generation: self.begin(),
            category: category.into(),
        }
    }

    /// Apply a finished fetch. Returns `false` when a newer request has been
    /// issued since, in which case nothing changes.
    pub fn finish_fetch(&mut self, done: FetchDone) -> bool {
        if done.generation != self.generation {
            debug!(
                category = %done.category,
                generation = done.generation,
                latest = self.generation,
                "dropping stale product response"
            );
            return false;
        }

        match done.result {
            Ok(items) => {
                self.items = items;
                self.error.clear();
            }
            Err(err) => {
                warn!(category = %done.category, "failed to load products: {err}");
                self.error = err.to_string();
                self.items.clear();
            }
        }

        self.loading = false;
        true
    }

    /// Start seeding the backend with the bundled sample products.
    pub fn seed(&mut self) -> SeedTicket {
        self.seed_with(sample_products())
    }

    pub fn seed_with(&mut self, samples: Vec<NewProduct>) -> SeedTicket {
        SeedTicket {
            generation: self.begin(),
            samples,
        }
    }

    /// Apply a finished seed.
    ///
    /// On success the active collection is re-fetched and the returned ticket
    /// must be run; `loading` stays set until that fetch lands. This happens
    /// even when a newer request was issued since, because the backend has
    /// changed under it. On failure the error is shown and the current items
    /// are kept, unless a newer request superseded the seed.
    pub fn finish_seed(&mut self, done: SeedDone) -> Option<FetchTicket> {
        match done.result {
            Ok(()) => Some(self.refresh()),
            Err(err) if done.generation != self.generation => {
                debug!(
                    generation = done.generation,
                    latest = self.generation,
                    "dropping stale seed failure: {err}"
                );
                None
            }
            Err(err) => {
                warn!("failed to seed products: {err}");
                self.error = err.to_string();
                self.loading = false;
                None
            }
        }
    }

    fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.loading = true;
        self.error.clear();
        self.generation
    }
}

/// An issued product fetch.
#[derive(Debug)]
#[must_use = "a fetch does nothing until it is run"]
pub struct FetchTicket {
    generation: u64,
    category: String,
}

impl FetchTicket {
    pub fn category(&self) -> &str {
        &self.category
    }

    pub async fn run(self, api: &ApiClient) -> FetchDone {
        let result = api.list_products(&self.category).await;
        self.complete(result)
    }

    pub fn complete(self, result: Result<Vec<Product>, ApiError>) -> FetchDone {
        FetchDone {
            generation: self.generation,
            category: self.category,
            result,
        }
    }
}

#[derive(Debug)]
pub struct FetchDone {
    generation: u64,
    category: String,
    result: Result<Vec<Product>, ApiError>,
}

/// An issued seed of sample products.
#[derive(Debug)]
#[must_use = "a seed does nothing until it is run"]
pub struct SeedTicket {
    generation: u64,
    samples: Vec<NewProduct>,
}

impl SeedTicket {
    pub fn samples(&self) -> &[NewProduct] {
        &self.samples
    }

    pub async fn run(self, api: &ApiClient) -> SeedDone {
        let result = api.seed_products(&self.samples).await;
        self.complete(result)
    }

    pub fn complete(self, result: Result<(), ApiError>) -> SeedDone {
        SeedDone {
            generation: self.generation,
            result,
        }
    }
}

#[derive(Debug)]
pub struct SeedDone {
    generation: u64,
    result: Result<(), ApiError>,
}
