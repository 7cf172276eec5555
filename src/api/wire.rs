use serde::Deserialize;
use serde_json::{Map, Value};

use crate::model::{Category, Ingredient, MealDetail, MealSummary, INGREDIENT_SLOTS};

#[derive(Deserialize)]
struct CategoriesResponse {
    #[serde(default)]
    categories: Option<Vec<CategoryRecord>>,
}

#[derive(Deserialize)]
struct CategoryRecord {
    #[serde(rename = "strCategory", default)]
    name: Option<String>,
    #[serde(rename = "strCategoryThumb", default)]
    thumbnail: Option<String>,
    #[serde(rename = "strCategoryDescription", default)]
    description: Option<String>,
}

#[derive(Deserialize)]
struct MealsResponse<T> {
    meals: Option<Vec<T>>,
}

#[derive(Deserialize)]
struct MealRecord {
    #[serde(rename = "idMeal", default)]
    id: Option<String>,
    #[serde(rename = "strMeal", default)]
    name: Option<String>,
    #[serde(rename = "strMealThumb", default)]
    thumbnail: Option<String>,
    #[serde(rename = "strCategory", default)]
    category: Option<String>,
}

pub fn parse_categories(body: &str) -> Result<Vec<Category>, serde_json::Error> {
    let response: CategoriesResponse = serde_json::from_str(body)?;
    Ok(response
        .categories
        .unwrap_or_default()
        .into_iter()
        .map(|record| Category {
            name: record.name.unwrap_or_default(),
            thumbnail_url: record.thumbnail.unwrap_or_default(),
            description: record.description.unwrap_or_default(),
        })
        .collect())
}

/// Meal summaries in service order, at most `cap` of them.
///
/// The filter endpoint leaves out `strCategory`, so `fallback_category` fills it.
pub fn parse_meals(
    body: &str,
    fallback_category: &str,
    cap: Option<usize>,
) -> Result<Vec<MealSummary>, serde_json::Error> {
    let response: MealsResponse<MealRecord> = serde_json::from_str(body)?;
    Ok(response
        .meals
        .unwrap_or_default()
        .into_iter()
        .take(cap.unwrap_or(usize::MAX))
        .map(|record| MealSummary {
            id: record.id.unwrap_or_default(),
            name: record.name.unwrap_or_default(),
            thumbnail_url: record.thumbnail.unwrap_or_default(),
            category_name: record
                .category
                .unwrap_or_else(|| fallback_category.to_string()),
        })
        .collect())
}

pub fn parse_meal_detail(body: &str) -> Result<Option<MealDetail>, serde_json::Error> {
    let response: MealsResponse<Map<String, Value>> = serde_json::from_str(body)?;
    Ok(response
        .meals
        .unwrap_or_default()
        .into_iter()
        .next()
        .map(|record| detail_from_record(&record)))
}

fn text(record: &Map<String, Value>, key: &str) -> Option<String> {
    record.get(key).and_then(Value::as_str).map(str::to_string)
}

fn non_blank(record: &Map<String, Value>, key: &str) -> Option<String> {
    record
        .get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

fn detail_from_record(record: &Map<String, Value>) -> MealDetail {
    let ingredients = (1..=INGREDIENT_SLOTS)
        .filter_map(|slot| {
            let name = non_blank(record, &format!("strIngredient{slot}"))?;
            Some(Ingredient::new(
                name,
                non_blank(record, &format!("strMeasure{slot}")),
            ))
        })
        .collect();

    MealDetail {
        id: text(record, "idMeal").unwrap_or_default(),
        name: text(record, "strMeal").unwrap_or_default(),
        thumbnail_url: text(record, "strMealThumb").unwrap_or_default(),
        category_name: text(record, "strCategory").unwrap_or_default(),
        area: non_blank(record, "strArea"),
        source_url: non_blank(record, "strSource"),
        instructions: text(record, "strInstructions").unwrap_or_default(),
        ingredients,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_categories() {
        let body = json!({
            "categories": [
                {
                    "idCategory": "1",
                    "strCategory": "Seafood",
                    "strCategoryThumb": "x.jpg",
                    "strCategoryDescription": "Fish dishes"
                },
                { "strCategory": "Beef", "strCategoryThumb": null }
            ]
        })
        .to_string();
        let categories = parse_categories(&body).unwrap();
        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0].name, "Seafood");
        assert_eq!(categories[0].thumbnail_url, "x.jpg");
        assert_eq!(categories[0].description, "Fish dishes");
        assert_eq!(categories[1].thumbnail_url, "");
        assert_eq!(categories[1].description, "");
    }

    #[test]
    fn null_or_missing_lists_are_empty() {
        assert!(parse_categories(r#"{"categories":null}"#).unwrap().is_empty());
        assert!(parse_categories("{}").unwrap().is_empty());
        assert!(parse_meals(r#"{"meals":null}"#, "Beef", Some(50)).unwrap().is_empty());
        assert!(parse_meals(r#"{"meals":[]}"#, "Beef", None).unwrap().is_empty());
        assert!(parse_meal_detail(r#"{"meals":null}"#).unwrap().is_none());
    }

    #[test]
    fn meal_responses_without_meals_key_are_empty() {
        assert!(parse_meals("{}", "Beef", Some(50)).unwrap().is_empty());
        assert!(parse_meal_detail("{}").unwrap().is_none());
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(parse_categories("<html>").is_err());
        assert!(parse_meals("", "Beef", None).is_err());
        assert!(parse_meal_detail(r#"{"meals":"nope"}"#).is_err());
    }

    #[test]
    fn caps_meal_lists_in_service_order() {
        let meals: Vec<_> = (0..75)
            .map(|i| json!({ "idMeal": i.to_string(), "strMeal": format!("Meal {i}"), "strMealThumb": "t.jpg" }))
            .collect();
        let body = json!({ "meals": meals }).to_string();
        let parsed = parse_meals(&body, "Beef", Some(50)).unwrap();
        assert_eq!(parsed.len(), 50);
        for (i, meal) in parsed.iter().enumerate() {
            assert_eq!(meal.id, i.to_string());
            assert_eq!(meal.category_name, "Beef");
        }
        let html = crate::view::meal_grid(&parsed, "Beef");
        assert_eq!(html.matches("data-meal-id=").count(), 50);
    }

    #[test]
    fn search_results_keep_their_own_category() {
        let body = json!({
            "meals": [{ "idMeal": "7", "strMeal": "Arrabiata", "strMealThumb": "a.jpg", "strCategory": "Vegetarian" }]
        })
        .to_string();
        let parsed = parse_meals(&body, "", None).unwrap();
        assert_eq!(parsed[0].category_name, "Vegetarian");
    }

    #[test]
    fn parses_meal_detail_with_ingredient_slots() {
        let body = json!({
            "meals": [{
                "idMeal": "52772",
                "strMeal": "Teriyaki Chicken",
                "strMealThumb": "t.jpg",
                "strCategory": "Chicken",
                "strArea": "Japanese",
                "strSource": "",
                "strInstructions": "Cook it.",
                "strIngredient1": "soy sauce",
                "strMeasure1": "3/4 cup",
                "strIngredient2": " water ",
                "strMeasure2": " ",
                "strIngredient3": "",
                "strMeasure3": "1 tbs",
                "strIngredient4": null,
                "strIngredient5": "garlic",
                "strMeasure5": null
            }]
        })
        .to_string();
        let meal = parse_meal_detail(&body).unwrap().unwrap();
        assert_eq!(meal.id, "52772");
        assert_eq!(meal.area.as_deref(), Some("Japanese"));
        assert_eq!(meal.source_url, None);
        assert_eq!(
            meal.ingredients,
            vec![
                Ingredient::new("soy sauce", Some("3/4 cup".to_string())),
                Ingredient::new("water", None),
                Ingredient::new("garlic", None),
            ]
        );
    }

    #[test]
    fn whitespace_only_ingredients_are_dropped() {
        let mut record = serde_json::Map::new();
        record.insert("idMeal".into(), json!("1"));
        for slot in 1..=20 {
            let name = if slot == 3 { "  " } else { "" };
            record.insert(format!("strIngredient{slot}"), json!(name));
            record.insert(format!("strMeasure{slot}"), json!(""));
        }
        let body = json!({ "meals": [record] }).to_string();
        let meal = parse_meal_detail(&body).unwrap().unwrap();
        assert!(meal.ingredients.is_empty());
    }
}
