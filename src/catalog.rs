//! # Recipe Catalog
//!
//! Serde model of the JSON recipe catalog and helpers to load it and group
//! recipes by category (the day a recipe is meant for).

use crate::planner_errors::PlannerError;
use crate::shopping_list::IngredientRecord;
use log::{info, warn};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// A single recipe record
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,

    /// Day or meal slot this recipe belongs to (e.g., "monday", "sunday meal prep")
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,

    /// Free-form timing and yield fields, shown as authored
    #[serde(default)]
    pub prep_time: Option<serde_json::Value>,
    #[serde(default)]
    pub cook_time: Option<serde_json::Value>,
    #[serde(default)]
    pub servings: Option<serde_json::Value>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub ingredients: Vec<IngredientRecord>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub directions: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub notes: Vec<String>,

    /// Nutrition facts in catalog order (e.g., "calories": "420")
    #[serde(default, deserialize_with = "null_as_default")]
    pub nutrition: serde_json::Map<String, serde_json::Value>,

    #[serde(default)]
    pub source: Option<String>,
}

/// Treat an explicit null the same as a missing key
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Recipe {
    /// Normalized category key: trimmed and lowercased
    pub fn category_key(&self) -> String {
        self.category.trim().to_lowercase()
    }
}

/// The full list of recipes available for planning
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Catalog {
    recipes: Vec<Recipe>,
}

impl Catalog {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }

    /// Parse a catalog from a JSON array of recipes
    pub fn from_json_str(json: &str) -> Result<Self, PlannerError> {
        let recipes: Vec<Recipe> = serde_json::from_str(json)?;
        Ok(Self::new(recipes))
    }

    /// Load a catalog file from disk
    pub fn load(path: &Path) -> Result<Self, PlannerError> {
        info!("Loading recipe catalog from {}", path.display());
        let content = fs::read_to_string(path).map_err(|e| {
            PlannerError::CatalogIo(format!("{}: {}", path.display(), e))
        })?;
        let catalog = Self::from_json_str(&content)?;

        if catalog.is_empty() {
            warn!("Recipe catalog at {} is empty", path.display());
        } else {
            info!("Loaded {} recipes", catalog.len());
        }
        Ok(catalog)
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Group recipes by normalized category, keeping catalog order in each group
    pub fn by_category(&self) -> HashMap<String, Vec<&Recipe>> {
        let mut groups: HashMap<String, Vec<&Recipe>> = HashMap::new();
        for recipe in &self.recipes {
            groups.entry(recipe.category_key()).or_default().push(recipe);
        }
        groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[
        {"title": "Chili", "category": "Monday ", "ingredients": [
            {"name": "beans", "amount": "1 can", "department": "Canned Goods"}
        ]},
        {"title": "Tacos", "category": "monday"},
        {"title": "Soup", "category": "tuesday", "servings": 4,
         "nutrition": {"calories": "300", "protein": "12g"}}
    ]"#;

    #[test]
    fn test_parse_catalog() {
        let catalog = Catalog::from_json_str(SAMPLE).unwrap();
        assert_eq!(catalog.len(), 3);

        let chili = &catalog.recipes()[0];
        assert_eq!(chili.ingredients.len(), 1);
        assert_eq!(chili.ingredients[0].amount, "1 can");
        assert!(chili.directions.is_empty());

        let soup = &catalog.recipes()[2];
        assert_eq!(soup.servings, Some(serde_json::json!(4)));
        let keys: Vec<&String> = soup.nutrition.keys().collect();
        assert_eq!(keys, vec!["calories", "protein"]);
    }

    #[test]
    fn test_group_by_category() {
        let catalog = Catalog::from_json_str(SAMPLE).unwrap();
        let groups = catalog.by_category();

        let monday: Vec<&str> = groups["monday"].iter().map(|r| r.title.as_str()).collect();
        assert_eq!(monday, vec!["Chili", "Tacos"]);
        assert_eq!(groups["tuesday"].len(), 1);
        assert!(!groups.contains_key("wednesday"));
    }

    #[test]
    fn test_null_fields_read_as_empty() {
        let catalog = Catalog::from_json_str(
            r#"[
                {"title": "Chili", "category": null, "directions": null},
                {"title": null, "category": "monday", "ingredients": null,
                 "notes": null, "nutrition": null, "servings": null, "source": null}
            ]"#,
        )
        .unwrap();
        assert_eq!(catalog.len(), 2);

        let chili = &catalog.recipes()[0];
        assert_eq!(chili.category, "");
        assert!(chili.directions.is_empty());

        let untitled = &catalog.recipes()[1];
        assert_eq!(untitled.title, "");
        assert_eq!(untitled.category_key(), "monday");
        assert!(untitled.ingredients.is_empty());
        assert!(untitled.notes.is_empty());
        assert!(untitled.nutrition.is_empty());
        assert_eq!(untitled.servings, None);
        assert_eq!(untitled.source, None);
    }

    #[test]
    fn test_malformed_catalog() {
        let result = Catalog::from_json_str("{not json");
        assert!(matches!(result, Err(PlannerError::CatalogFormat(_))));
    }

    #[test]
    fn test_missing_catalog_file() {
        let result = Catalog::load(Path::new("/nonexistent/recipes.json"));
        assert!(matches!(result, Err(PlannerError::CatalogIo(_))));
    }
}
