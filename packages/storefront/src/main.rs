use dioxus::logger::tracing::info;
use dioxus::prelude::*;
use flames_api::{ApiClient, ApiConfig};
use flames_storefront::components::ProductListView;

const TAILWIND: &str = "https://cdn.tailwindcss.com";

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(app);
}

fn app() -> Element {
    use_context_provider(|| {
        let config = ApiConfig::from_env();
        info!(backend = config.backend_url(), "starting storefront");
        ApiClient::new(&config)
    });

    rsx! {
        document::Title { "Flames Studio" }
        document::Script { src: TAILWIND }
        ProductListView {}
    }
}
