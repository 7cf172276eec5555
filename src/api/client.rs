use async_trait::async_trait;
use reqwest::Client;

use super::{wire, ApiError, Endpoint, MealSource};
use crate::config::Config;
use crate::model::{Category, MealDetail, MealSummary};

/// `MealSource` backed by the live service. On wasm32 `reqwest` goes through
/// the browser's fetch.
pub struct HttpSource {
    client: Client,
    base: String,
    meal_cap: usize,
}

impl HttpSource {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::new(),
            base: config.api_base.clone(),
            meal_cap: config.meal_cap,
        }
    }

    async fn get(&self, endpoint: &Endpoint) -> Result<String, ApiError> {
        let url = endpoint.url(&self.base);
        log::debug!("GET {url}");
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }
        Ok(response.text().await?)
    }
}

#[async_trait(?Send)]
impl MealSource for HttpSource {
    async fn categories(&self) -> Result<Vec<Category>, ApiError> {
        let body = self.get(&Endpoint::Categories).await?;
        Ok(wire::parse_categories(&body)?)
    }

    async fn meals_by_category(&self, category: &str) -> Result<Vec<MealSummary>, ApiError> {
        let body = self
            .get(&Endpoint::MealsByCategory(category.to_string()))
            .await?;
        Ok(wire::parse_meals(&body, category, Some(self.meal_cap))?)
    }

    async fn meal_by_id(&self, id: &str) -> Result<Option<MealDetail>, ApiError> {
        let body = self.get(&Endpoint::MealById(id.to_string())).await?;
        Ok(wire::parse_meal_detail(&body)?)
    }

    async fn search(&self, query: &str) -> Result<Vec<MealSummary>, ApiError> {
        let body = self.get(&Endpoint::Search(query.to_string())).await?;
        Ok(wire::parse_meals(&body, "", None)?)
    }
}
