//! Markup fragments for each page region. Every string that came from the
//! service goes through [`escape`] before it lands in the output.

use crate::markup::escape;
use crate::model::{Category, Ingredient, MealDetail, MealSummary};

const PLACEHOLDER: &str = "—";

/// Short status messages shown in place of content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    Loading,
    Searching,
    NoCategories,
    CategoriesFailed,
    NoMeals { category: String },
    MealsFailed { category: String },
    NoMealFound { query: String },
    SearchFailed { query: String },
    MealNotFound,
    MealFailed,
}

impl Notice {
    fn class(&self) -> &'static str {
        match self {
            Notice::Loading | Notice::Searching => "notice loading",
            Notice::NoCategories | Notice::NoMeals { .. } | Notice::NoMealFound { .. } => {
                "notice empty"
            }
            _ => "notice error",
        }
    }

    fn message(&self) -> String {
        match self {
            Notice::Loading => "Loading…".to_string(),
            Notice::Searching => "Searching…".to_string(),
            Notice::NoCategories => "No categories available.".to_string(),
            Notice::CategoriesFailed => "Could not load categories.".to_string(),
            Notice::NoMeals { category } => format!("No meals found for {}.", escape(category.as_str())),
            Notice::MealsFailed { category } => {
                format!("Failed to load meals for {}.", escape(category.as_str()))
            }
            Notice::NoMealFound { query } => format!("No meal found for “{}”.", escape(query.as_str())),
            Notice::SearchFailed { query } => format!("Search for “{}” failed.", escape(query.as_str())),
            Notice::MealNotFound => "That meal could not be found.".to_string(),
            Notice::MealFailed => "Failed to load meal details.".to_string(),
        }
    }
}

pub fn notice(notice: &Notice) -> String {
    format!(r#"<p class="{}">{}</p>"#, notice.class(), notice.message())
}

pub fn category_grid(categories: &[Category]) -> String {
    categories
        .iter()
        .map(|category| {
            let name = escape(category.name.as_str());
            format!(
                r#"<div class="card category-card" data-category="{name}"><img src="{thumb}" alt="{name}" loading="lazy"><h3>{name}</h3></div>"#,
                thumb = escape(category.thumbnail_url.as_str()),
            )
        })
        .collect()
}

/// Side-menu entries; they carry the same `data-category` key as grid tiles.
pub fn menu_list(categories: &[Category]) -> String {
    categories
        .iter()
        .map(|category| {
            let name = escape(category.name.as_str());
            format!(r#"<li class="menu-item" data-category="{name}">{name}</li>"#)
        })
        .collect()
}

pub fn category_blurb(name: &str, description: &str) -> String {
    let description = if description.trim().is_empty() {
        String::new()
    } else {
        format!(r#"<p class="category-description">{}</p>"#, escape(description))
    };
    format!(
        r#"<div class="category-blurb"><h2>{}</h2>{description}</div>"#,
        escape(name)
    )
}

pub fn meal_tile(meal: &MealSummary, label: &str) -> String {
    let name = escape(meal.name.as_str());
    format!(
        r#"<div class="card meal-card" data-meal-id="{id}"><img src="{thumb}" alt="{name}" loading="lazy"><span class="badge">{label}</span><h3>{name}</h3></div>"#,
        id = escape(meal.id.as_str()),
        thumb = escape(meal.thumbnail_url.as_str()),
        label = escape(label),
    )
}

pub fn meal_grid(meals: &[MealSummary], category_label: &str) -> String {
    if meals.is_empty() {
        return notice(&Notice::NoMeals {
            category: category_label.to_string(),
        });
    }
    meals
        .iter()
        .map(|meal| meal_tile(meal, category_label))
        .collect()
}

pub fn search_result(meal: &MealSummary) -> String {
    meal_tile(meal, &meal.category_name)
}

fn ingredient_item(ingredient: &Ingredient) -> String {
    match ingredient.measure.as_deref() {
        Some(measure) => format!(
            "<li>{} - {}</li>",
            escape(ingredient.name.as_str()),
            escape(measure)
        ),
        None => format!("<li>{}</li>", escape(ingredient.name.as_str())),
    }
}

pub fn meal_detail(meal: &MealDetail) -> String {
    let name = escape(meal.name.as_str());
    let area = meal.area.as_deref();
    let heading = match area {
        Some(area) => format!(r#"{name} <span class="area">({})</span>"#, escape(area)),
        None => name.clone(),
    };
    let source = match meal.source_url.as_deref() {
        Some(url) => {
            let url = escape(url);
            format!(r#"<a href="{url}" target="_blank" rel="noopener noreferrer">{url}</a>"#)
        }
        None => PLACEHOLDER.to_string(),
    };
    let ingredients: String = meal.ingredients.iter().map(ingredient_item).collect();

    format!(
        concat!(
            r#"<article class="meal-detail" data-meal="{id}">"#,
            "<h2>{heading}</h2>",
            r#"<img src="{thumb}" alt="{name}">"#,
            r#"<p class="meal-meta"><strong>Category:</strong> {category} | <strong>Area:</strong> {area}</p>"#,
            r#"<p class="meal-source"><strong>Source:</strong> {source}</p>"#,
            "<h3>Ingredients</h3>",
            r#"<ul class="ingredients">{ingredients}</ul>"#,
            "<h3>Instructions</h3>",
            r#"<p class="instructions">{instructions}</p>"#,
            "</article>",
        ),
        id = escape(meal.id.as_str()),
        heading = heading,
        thumb = escape(meal.thumbnail_url.as_str()),
        name = name,
        category = escape(meal.category_name.as_str()),
        area = area.map(escape).unwrap_or_else(|| PLACEHOLDER.to_string()),
        source = source,
        ingredients = ingredients,
        instructions = escape(meal.instructions.as_str()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(name: &str) -> Category {
        Category {
            name: name.to_string(),
            thumbnail_url: format!("{name}.jpg"),
            description: String::new(),
        }
    }

    fn meal(id: usize) -> MealSummary {
        MealSummary {
            id: id.to_string(),
            name: format!("Meal {id}"),
            thumbnail_url: "m.jpg".to_string(),
            category_name: "Beef".to_string(),
        }
    }

    fn detail() -> MealDetail {
        MealDetail {
            id: "52772".to_string(),
            name: "Teriyaki Chicken".to_string(),
            thumbnail_url: "t.jpg".to_string(),
            category_name: "Chicken".to_string(),
            area: Some("Japanese".to_string()),
            source_url: Some("https://example.test/teriyaki?a=1&b=2".to_string()),
            instructions: "Mix & cook.".to_string(),
            ingredients: vec![
                Ingredient::new("soy sauce", Some("3/4 cup".to_string())),
                Ingredient::new("garlic", None),
            ],
        }
    }

    #[test]
    fn category_grid_has_one_tile_per_category() {
        let categories = [category("Beef"), category("Side & Starter"), category("Vegan")];
        let html = category_grid(&categories);
        assert_eq!(html.matches("data-category=").count(), 3);
        assert!(html.contains(r#"data-category="Side &amp; Starter""#));
        assert!(html.contains(r#"<img src="Beef.jpg""#));
    }

    #[test]
    fn hostile_category_names_cannot_break_out() {
        let html = category_grid(&[category(r#""><script>alert(1)</script>"#)]);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&quot;&gt;&lt;script&gt;"));
    }

    #[test]
    fn menu_list_mirrors_categories() {
        let html = menu_list(&[category("Beef"), category("Pork")]);
        assert_eq!(html.matches("<li").count(), 2);
        assert!(html.contains(r#"data-category="Pork""#));
    }

    #[test]
    fn empty_meal_grid_is_a_single_notice() {
        let html = meal_grid(&[], "Goat");
        assert_eq!(html.matches("No meals found for Goat").count(), 1);
        assert_eq!(html.matches("data-meal-id").count(), 0);
    }

    #[test]
    fn meal_grid_keeps_order_and_label() {
        let meals: Vec<_> = (0..3).map(meal).collect();
        let html = meal_grid(&meals, "Beef");
        assert_eq!(html.matches("data-meal-id=").count(), 3);
        assert_eq!(html.matches(r#"<span class="badge">Beef</span>"#).count(), 3);
        let first = html.find("data-meal-id=\"0\"").unwrap();
        let last = html.find("data-meal-id=\"2\"").unwrap();
        assert!(first < last);
    }

    #[test]
    fn search_result_matches_tile_shape() {
        let meal = meal(9);
        assert_eq!(search_result(&meal), meal_tile(&meal, "Beef"));
    }

    #[test]
    fn renders_meal_detail() {
        let html = meal_detail(&detail());
        assert!(html.contains(r#"Teriyaki Chicken <span class="area">(Japanese)</span>"#));
        assert!(html.contains("<strong>Category:</strong> Chicken"));
        assert!(html.contains(r#"href="https://example.test/teriyaki?a=1&amp;b=2""#));
        assert!(html.contains("<li>soy sauce - 3/4 cup</li>"));
        assert!(html.contains("<li>garlic</li>"));
        assert!(html.contains("Mix &amp; cook."));
    }

    #[test]
    fn detail_without_source_or_area_uses_placeholders() {
        let mut meal = detail();
        meal.source_url = None;
        meal.area = None;
        let html = meal_detail(&meal);
        assert!(html.contains("<h2>Teriyaki Chicken</h2>"));
        assert!(html.contains("<strong>Source:</strong> —"));
        assert!(html.contains("<strong>Area:</strong> —"));
        assert!(!html.contains("<a "));
    }

    #[test]
    fn detail_without_ingredients_has_empty_list() {
        let mut meal = detail();
        meal.ingredients.clear();
        let html = meal_detail(&meal);
        assert!(html.contains(r#"<ul class="ingredients"></ul>"#));
        assert_eq!(html.matches("<li").count(), 0);
    }

    #[test]
    fn notices_escape_user_text() {
        let html = notice(&Notice::SearchFailed {
            query: "<script>".to_string(),
        });
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.starts_with(r#"<p class="notice error">"#));
    }

    #[test]
    fn blurb_omits_empty_description() {
        assert_eq!(
            category_blurb("Beef", ""),
            r#"<div class="category-blurb"><h2>Beef</h2></div>"#
        );
        assert!(category_blurb("Beef", "Cows & more").contains("Cows &amp; more"));
    }
}
