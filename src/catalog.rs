mod error;
mod model;
pub mod request;

use std::future::Future;

pub use error::*;
pub use model::*;
pub use request::{HttpProductSource, PRODUCTS_URL};
use tracing::error;

/// Where product records come from.
pub trait ProductSource {
    fn fetch(&self) -> impl Future<Output = Result<Vec<ProductRecord>, FetchFailure>> + Send;
}

/// Fetches from `source`, logging and masking any failure as an empty list.
///
/// An empty result is indistinguishable from a catalog that has no products.
/// Call [`ProductSource::fetch`] directly when the difference matters.
pub async fn products_or_empty<S: ProductSource>(source: &S) -> Vec<ProductRecord> {
    match source.fetch().await {
        Ok(v) => v,
        Err(e) => {
            error!("Could not fetch products: {}", e);
            Vec::new()
        }
    }
}
