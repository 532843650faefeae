use serde::{Deserialize, Serialize};

/// One catalog item, shaped like the remote service's response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: u64,
    pub title: String,
    pub price: f64,
    // Not rendered.
    pub description: String,
    pub category: String,
    pub image: String,
    pub rating: Rating,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub rate: f64,
    pub count: u64,
}

impl ProductRecord {
    /// Price with a leading `$` and exactly two decimals.
    pub fn display_price(&self) -> String {
        format!("${:.2}", self.price)
    }
}

impl Rating {
    pub fn display_rate(&self) -> String {
        format!("{} ★", self.rate)
    }

    pub fn display_reviews(&self) -> String {
        format!("{} ({} reviews)", self.display_rate(), self.count)
    }
}
