use std::collections::HashMap;

use crate::model::Category;

/// Category name to description, filled once the category list has loaded.
///
/// Lookups for unknown names are not errors: a meal can be opened before the
/// categories arrive, or carry a category string the list never mentioned.
#[derive(Debug, Default)]
pub struct CategoryStore {
    descriptions: HashMap<String, String>,
}

impl CategoryStore {
    /// Replaces the whole mapping.
    pub fn record_all(&mut self, categories: &[Category]) {
        self.descriptions = categories
            .iter()
            .map(|category| (category.name.clone(), category.description.clone()))
            .collect();
    }

    pub fn describe(&self, name: &str) -> &str {
        self.descriptions
            .get(name)
            .map(String::as_str)
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.descriptions.len()
    }
}
