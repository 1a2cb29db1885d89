//! An in-process stand-in for the product backend.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use flames_api::{ApiClient, ApiConfig};
use serde_json::{json, Value};

#[derive(Default)]
pub struct Backend {
    pub products: Vec<Value>,
    /// The `category` of every list request, in arrival order.
    pub list_requests: Vec<String>,
    pub create_requests: usize,
    /// Answer list requests with this status instead of the catalog.
    pub list_status: Option<StatusCode>,
    /// Answer list requests with this raw body instead of the catalog.
    pub list_body: Option<String>,
    /// Creations with one of these titles are rejected with a 422.
    pub reject_titles: Vec<String>,
    next_id: usize,
}

#[derive(Clone)]
pub struct MockBackend {
    state: Arc<Mutex<Backend>>,
    url: String,
}

impl MockBackend {
    pub async fn start() -> Self {
        let state = Arc::new(Mutex::new(Backend::default()));

        let router = Router::new()
            .route("/api/products", get(list_products).post(create_product))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        Self {
            state,
            url: format!("http://{addr}"),
        }
    }

    /// A backend address nothing is listening on.
    pub async fn unreachable() -> ApiConfig {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        ApiConfig::new(format!("http://{addr}"))
    }

    pub fn config(&self) -> ApiConfig {
        ApiConfig::new(&self.url)
    }

    pub fn client(&self) -> ApiClient {
        ApiClient::new(&self.config())
    }

    pub fn with<R>(&self, f: impl FnOnce(&mut Backend) -> R) -> R {
        f(&mut self.state.lock().unwrap())
    }

    pub fn insert(&self, product: Value) {
        self.with(|backend| backend.products.push(product));
    }

    pub fn list_requests(&self) -> Vec<String> {
        self.with(|backend| backend.list_requests.clone())
    }
}

async fn list_products(
    State(state): State<Arc<Mutex<Backend>>>,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    let mut backend = state.lock().unwrap();
    let category = query.get("category").cloned();
    backend
        .list_requests
        .push(category.clone().unwrap_or_default());

    if let Some(status) = backend.list_status {
        return (status, "backend unavailable").into_response();
    }

    if let Some(body) = &backend.list_body {
        return body.clone().into_response();
    }

    let items: Vec<Value> = backend
        .products
        .iter()
        .filter(|product| match &category {
            Some(category) => product["category"] == category.as_str(),
            None => true,
        })
        .cloned()
        .collect();

    Json(json!({ "items": items })).into_response()
}

async fn create_product(
    State(state): State<Arc<Mutex<Backend>>>,
    Json(mut product): Json<Value>,
) -> StatusCode {
    let mut backend = state.lock().unwrap();
    backend.create_requests += 1;

    let rejected = backend
        .reject_titles
        .iter()
        .any(|title| product["title"] == title.as_str());
    if rejected {
        return StatusCode::UNPROCESSABLE_ENTITY;
    }

    backend.next_id += 1;
    product["_id"] = json!(format!("p{}", backend.next_id));
    backend.products.push(product);

    StatusCode::CREATED
}
