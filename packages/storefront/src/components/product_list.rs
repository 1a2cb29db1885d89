use dioxus::logger::tracing::info;
use dioxus::prelude::*;
use flames_api::ApiClient;

use super::{Collection, Hero, SiteFooter, SiteHeader};
use crate::{Catalog, Category, FetchTicket};

/// The storefront page.
///
/// Owns the [`Catalog`] for as long as it is mounted and expects an
/// [`ApiClient`] in context. The active collection is fetched on mount and
/// again on every category selection, refresh and successful seed.
#[component]
pub fn ProductListView() -> Element {
    let store = use_storefront();
    let snapshot = store.catalog.read().clone();

    rsx! {
        div { class: "min-h-screen bg-gradient-to-b from-white to-gray-50",
            SiteHeader { on_select: store.select }
            Hero { active: snapshot.active(), on_select: store.select }
            Collection { catalog: snapshot, on_refresh: store.refresh, on_seed: store.seed }
            SiteFooter {}
        }
    }
}

/// The catalog signal and the actions that drive it.
#[derive(Clone, Copy)]
pub struct Storefront {
    pub catalog: Signal<Catalog>,
    pub select: Callback<Category>,
    pub refresh: Callback<()>,
    pub seed: Callback<()>,
}

/// Create the catalog for this component and fetch the active collection on
/// mount. Requires an [`ApiClient`] in context.
pub fn use_storefront() -> Storefront {
    let api = use_context::<ApiClient>();
    let mut catalog = use_signal(Catalog::new);

    let select = use_callback({
        let api = api.clone();
        move |category: Category| {
            info!(%category, "category selected");
            let ticket = catalog.write().select(category);
            start_fetch(api.clone(), catalog, ticket);
        }
    });

    let refresh = use_callback({
        let api = api.clone();
        move |_: ()| {
            let ticket = catalog.write().refresh();
            start_fetch(api.clone(), catalog, ticket);
        }
    });

    let seed = use_callback(move |_: ()| start_seed(api.clone(), catalog));

    use_effect(move || refresh.call(()));

    Storefront {
        catalog,
        select,
        refresh,
        seed,
    }
}

fn start_fetch(api: ApiClient, mut catalog: Signal<Catalog>, ticket: FetchTicket) {
    spawn(async move {
        let done = ticket.run(&api).await;
        catalog.write().finish_fetch(done);
    });
}

fn start_seed(api: ApiClient, mut catalog: Signal<Catalog>) {
    let ticket = catalog.write().seed();
    info!(count = ticket.samples().len(), "seeding sample products");

    spawn(async move {
        let done = ticket.run(&api).await;
        let refresh = catalog.write().finish_seed(done);
        if let Some(ticket) = refresh {
            let done = ticket.run(&api).await;
            catalog.write().finish_fetch(done);
        }
    });
}
