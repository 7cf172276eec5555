/// Number of fixed ingredient/measure slot pairs in a meal detail record.
pub const INGREDIENT_SLOTS: usize = 20;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub thumbnail_url: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MealSummary {
    pub id: String,
    pub name: String,
    pub thumbnail_url: String,
    pub category_name: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ingredient {
    pub name: String,
    pub measure: Option<String>,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, measure: Option<String>) -> Self {
        Self {
            name: name.into(),
            measure,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MealDetail {
    pub id: String,
    pub name: String,
    pub thumbnail_url: String,
    pub category_name: String,
    pub area: Option<String>,
    pub source_url: Option<String>,
    pub instructions: String,
    /// Slot order as returned by the service, blank slots removed.
    pub ingredients: Vec<Ingredient>,
}
