use reqwest::Response;
use tracing::debug;

use super::{FetchFailure, ProductRecord, ProductSource};

/// Fake Store API product listing.
pub const PRODUCTS_URL: &str = "https://fakestoreapi.com/products";

/// Reads the product list from the remote catalog over HTTP.
#[derive(Clone)]
pub struct HttpProductSource {
    req_client: reqwest::Client,
    url: String,
}

impl HttpProductSource {
    pub fn new(req_client: reqwest::Client) -> Self {
        Self::with_url(req_client, PRODUCTS_URL)
    }

    pub fn with_url(req_client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            req_client,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl ProductSource for HttpProductSource {
    async fn fetch(&self) -> Result<Vec<ProductRecord>, FetchFailure> {
        fetch_products(&self.req_client, &self.url).await
    }
}

/// Single GET against `url`, no retries and no timeout beyond the client default.
pub async fn fetch_products(
    req_client: &reqwest::Client,
    url: &str,
) -> Result<Vec<ProductRecord>, FetchFailure> {
    let response: Response = req_client.get(url).send().await?;

    if !response.status().is_success() {
        return Err(FetchFailure::Status(response.status()));
    }

    let body: String = response.text().await?;
    let products: Vec<ProductRecord> = serde_json::from_str(&body)?;

    debug!("Fetched {} products from {}", products.len(), url);

    Ok(products)
}
