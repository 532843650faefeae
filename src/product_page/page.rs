use std::sync::Arc;

use axum::{extract::State, response::Html};
use reqwest::StatusCode;
use showcase::{
    catalog::{products_or_empty, ProductRecord, ProductSource},
    template::{render_page, Snackbar},
};
use tracing::error;

pub(super) struct PageState<S> {
    pub source: S,
    pub show_fetch_errors: bool,
}

/// Fetches the catalog and renders both views. Always answers with a page.
pub(super) async fn get_product_page<S>(
    State(state): State<Arc<PageState<S>>>,
) -> (StatusCode, Html<String>)
where
    S: ProductSource + Send + Sync + 'static,
{
    let (products, notice): (Vec<ProductRecord>, Option<Snackbar<'_>>) =
        if state.show_fetch_errors {
            match state.source.fetch().await {
                Ok(v) => (v, None),
                Err(e) => {
                    error!("Could not fetch products: {}", e);
                    (Vec::new(), Some(Snackbar::fetch_failed()))
                }
            }
        } else {
            (products_or_empty(&state.source).await, None)
        };

    match render_page(&products, notice) {
        Ok(v) => (StatusCode::OK, Html(v)),
        Err(e) => {
            error!("Could not render product page: {:?}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html("<h1>Could not render products</h1>".to_owned()),
            )
        }
    }
}
