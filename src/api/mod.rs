//! Read-only access to the recipe service.

mod client;
mod wire;

pub use client::HttpSource;

use async_trait::async_trait;
use thiserror::Error;

use crate::model::{Category, MealDetail, MealSummary};

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("service answered with HTTP {0}")]
    Status(u16),

    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// The four queries the service supports.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Endpoint {
    Categories,
    MealsByCategory(String),
    MealById(String),
    Search(String),
}

impl Endpoint {
    pub fn url(&self, base: &str) -> String {
        match self {
            Endpoint::Categories => format!("{base}/categories.php"),
            Endpoint::MealsByCategory(category) => {
                format!("{base}/filter.php?c={}", urlencoding::encode(category.trim()))
            }
            Endpoint::MealById(id) => {
                format!("{base}/lookup.php?i={}", urlencoding::encode(id.trim()))
            }
            Endpoint::Search(query) => {
                format!("{base}/search.php?s={}", urlencoding::encode(query.trim()))
            }
        }
    }
}

/// Where meal data comes from. An empty `Vec` means the service had no
/// matching records; `Ok(None)` from `meal_by_id` means the id is unknown.
#[async_trait(?Send)]
pub trait MealSource {
    async fn categories(&self) -> Result<Vec<Category>, ApiError>;

    async fn meals_by_category(&self, category: &str) -> Result<Vec<MealSummary>, ApiError>;

    async fn meal_by_id(&self, id: &str) -> Result<Option<MealDetail>, ApiError>;

    async fn search(&self, query: &str) -> Result<Vec<MealSummary>, ApiError>;
}
