//! # Shopping List Builder
//!
//! This module buckets the ingredient records of a meal plan by department and
//! ingredient name, then consolidates each bucket into one display amount.
//!
//! ## Usage
//!
//! ```rust
//! use meal_planner::shopping_list::{build_shopping_list, IngredientRecord};
//!
//! let records = vec![
//!     IngredientRecord::new("flour", "2 cups", "Baking"),
//!     IngredientRecord::new("flour", "4 tbsp", "Baking"),
//! ];
//! let list = build_shopping_list(&records);
//! assert_eq!(list.get("Baking", "flour"), Some("2 1/4 cup"));
//! ```

use crate::amount_model::ParsedEntry;
use crate::amount_parser::parse;
use crate::consolidator::consolidate;
use log::{debug, info};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Department used when a record has none
pub const DEFAULT_DEPARTMENT: &str = "Other";

/// One ingredient line from a recipe
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct IngredientRecord {
    /// Ingredient name (e.g., "yellow onion")
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,

    /// Amount as authored (e.g., "1 1/2 cups")
    #[serde(default, deserialize_with = "lenient_string")]
    pub amount: String,

    /// Shopping department (e.g., "Produce")
    #[serde(default, deserialize_with = "lenient_string")]
    pub department: String,
}

impl IngredientRecord {
    pub fn new(name: &str, amount: &str, department: &str) -> Self {
        Self {
            name: name.to_string(),
            amount: amount.to_string(),
            department: department.to_string(),
        }
    }
}

/// Accept strings, numbers, booleans and null for free-text fields
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) => String::new(),
        Some(serde_json::Value::String(s)) => s,
        Some(other) => other.to_string(),
    })
}

/// A consolidated shopping list line
#[derive(Debug, Clone, PartialEq)]
pub struct ShoppingItem {
    pub name: String,
    /// Consolidated amount; empty when only the name should be shown
    pub amount: String,
}

/// All items of one department, in first-seen order
#[derive(Debug, Clone, PartialEq)]
pub struct DepartmentSection {
    pub name: String,
    pub items: Vec<ShoppingItem>,
}

/// Shopping list grouped by department.
///
/// Serializes as `{ department: { name: amount } }` in first-seen order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ShoppingList {
    departments: Vec<DepartmentSection>,
}

impl ShoppingList {
    /// Departments in first-seen order
    pub fn departments(&self) -> &[DepartmentSection] {
        &self.departments
    }

    /// Look up the display amount for one ingredient
    pub fn get(&self, department: &str, name: &str) -> Option<&str> {
        self.departments
            .iter()
            .find(|section| section.name == department)?
            .items
            .iter()
            .find(|item| item.name == name)
            .map(|item| item.amount.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.departments.is_empty()
    }

    /// Total number of items across departments
    pub fn item_count(&self) -> usize {
        self.departments.iter().map(|s| s.items.len()).sum()
    }
}

impl Serialize for DepartmentSection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.items.len()))?;
        for item in &self.items {
            map.serialize_entry(&item.name, &item.amount)?;
        }
        map.end()
    }
}

impl Serialize for ShoppingList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.departments.len()))?;
        for section in &self.departments {
            map.serialize_entry(&section.name, section)?;
        }
        map.end()
    }
}

impl fmt::Display for ShoppingList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for section in &self.departments {
            writeln!(f, "{}", section.name)?;
            for item in &section.items {
                if item.amount.is_empty() {
                    writeln!(f, "  - {}", item.name)?;
                } else {
                    writeln!(f, "  - {}: {}", item.name, item.amount)?;
                }
            }
        }
        Ok(())
    }
}

/// Entries collected for one (department, ingredient) pair
struct IngredientBucket {
    name: String,
    entries: Vec<ParsedEntry>,
}

struct DepartmentBuckets {
    name: String,
    buckets: Vec<IngredientBucket>,
}

/// Build a consolidated shopping list from ingredient records.
///
/// Names are trimmed, an empty department becomes [`DEFAULT_DEPARTMENT`], and
/// departments and ingredients keep the order in which they first appear.
pub fn build_shopping_list<'a, I>(records: I) -> ShoppingList
where
    I: IntoIterator<Item = &'a IngredientRecord>,
{
    let mut departments: Vec<DepartmentBuckets> = Vec::new();
    let mut record_count = 0usize;

    for record in records {
        record_count += 1;
        let name = record.name.trim();
        let department = match record.department.trim() {
            "" => DEFAULT_DEPARTMENT,
            dept => dept,
        };

        let dept_index = match departments.iter().position(|d| d.name == department) {
            Some(index) => index,
            None => {
                departments.push(DepartmentBuckets {
                    name: department.to_string(),
                    buckets: Vec::new(),
                });
                departments.len() - 1
            }
        };
        let buckets = &mut departments[dept_index].buckets;

        let entry = parse(&record.amount);
        match buckets.iter_mut().find(|b| b.name == name) {
            Some(bucket) => bucket.entries.push(entry),
            None => buckets.push(IngredientBucket {
                name: name.to_string(),
                entries: vec![entry],
            }),
        }
    }

    let departments: Vec<DepartmentSection> = departments
        .into_iter()
        .map(|dept| DepartmentSection {
            items: dept
                .buckets
                .into_iter()
                .map(|bucket| {
                    let amount = consolidate(&bucket.entries);
                    debug!(
                        "{} / {}: {} entries -> '{}'",
                        dept.name,
                        bucket.name,
                        bucket.entries.len(),
                        amount
                    );
                    ShoppingItem {
                        name: bucket.name,
                        amount,
                    }
                })
                .collect(),
            name: dept.name,
        })
        .collect();

    let list = ShoppingList { departments };
    info!(
        "Built shopping list: {} records -> {} items in {} departments",
        record_count,
        list.item_count(),
        list.departments.len()
    );
    list
}
