//! # HTML Export
//!
//! Renders a finalized meal plan and its shopping list as a standalone HTML
//! document suitable for previewing, printing or saving as PDF from a browser.

use crate::catalog::Recipe;
use crate::meal_plan::MealPlan;
use crate::planner_errors::PlannerError;
use crate::shopping_list::ShoppingList;
use log::{error, info};
use std::fs;
use std::path::Path;

const DOCUMENT_TITLE: &str = "Weekly Meal Plan";

const STYLESHEET: &str = r#"
    <style>
      body{font-family: Arial, Helvetica, sans-serif; padding:20px; color:#222; text-align:center;}
      h1{color:#2b6cb0;}
      h2{color:#234e52;}
      .day{margin-bottom:12px;}
      .recipe-title{font-weight:700;}
      .section{margin-top:18px; margin-bottom:18px;}
      .ingredients, .directions {margin-left:18px; text-align:left;}
      .shopping-list{column-count:1; margin-left:18px; text-align:left;}
      @media(min-width:800px){ .shopping-list{column-count:2;} }
      .meta { font-style: italic; color:#555; margin-bottom:6px; text-align:center; }
      .source { font-size: small; color:#555; }
    </style>
    "#;

/// Escape text for use in HTML content and quoted attribute values
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Capitalize the first letter of every word ("sunday meal prep" -> "Sunday Meal Prep")
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}

/// Render the plan and shopping list as a full HTML document
pub fn render_html(plan: &MealPlan, shopping_list: &ShoppingList) -> String {
    let mut parts: Vec<String> = Vec::new();

    parts.push(format!(
        "<!doctype html><html><head><meta charset='utf-8'><title>{DOCUMENT_TITLE}</title>"
    ));
    parts.push(STYLESHEET.to_string());
    parts.push("</head><body>".to_string());
    parts.push(format!("<h1>{DOCUMENT_TITLE}</h1>"));

    render_shopping_list(&mut parts, shopping_list);

    parts.push("<div class='section'><h2>Selected Meals</h2>".to_string());
    for planned in plan.days() {
        render_day(&mut parts, &planned.day, &planned.recipe);
    }
    parts.push("</div></body></html>".to_string());

    parts.join("\n")
}

fn render_shopping_list(parts: &mut Vec<String>, shopping_list: &ShoppingList) {
    parts.push("<div class='section'><h2>Shopping List</h2><div class='shopping-list'>".to_string());
    for section in shopping_list.departments() {
        parts.push(format!("<h3>{}</h3><ul>", escape_html(&section.name)));
        for item in &section.items {
            if item.amount.is_empty() {
                parts.push(format!("<li>{}</li>", escape_html(&item.name)));
            } else {
                parts.push(format!(
                    "<li>{}: {}</li>",
                    escape_html(&item.name),
                    escape_html(&item.amount)
                ));
            }
        }
        parts.push("</ul>".to_string());
    }
    parts.push("</div></div>".to_string());
}

fn render_day(parts: &mut Vec<String>, day: &str, recipe: &Recipe) {
    parts.push(format!(
        "<div class='day'><div class='recipe-title'>{}: {}</div>",
        escape_html(&title_case(day)),
        escape_html(&recipe.title)
    ));

    let mut meta: Vec<String> = Vec::new();
    for (label, value) in [
        ("Prep", &recipe.prep_time),
        ("Cook", &recipe.cook_time),
        ("Servings", &recipe.servings),
    ] {
        if let Some(text) = value.as_ref().map(display_value).filter(|v| !v.is_empty()) {
            meta.push(format!("{label}: {}", escape_html(&text)));
        }
    }
    if !meta.is_empty() {
        parts.push(format!("<div class='meta'>{}</div>", meta.join(" | ")));
    }

    if !recipe.ingredients.is_empty() {
        parts.push("<div class='ingredients'><strong>Ingredients:</strong><ul>".to_string());
        for ing in &recipe.ingredients {
            parts.push(format!(
                "<li>{}: {} <em>({})</em></li>",
                escape_html(&ing.name),
                escape_html(&ing.amount),
                escape_html(&ing.department)
            ));
        }
        parts.push("</ul></div>".to_string());
    }

    if !recipe.directions.is_empty() {
        parts.push("<div class='directions'><strong>Directions:</strong><ol>".to_string());
        for step in &recipe.directions {
            parts.push(format!("<li>{}</li>", escape_html(step)));
        }
        parts.push("</ol></div>".to_string());
    }

    if !recipe.notes.is_empty() {
        parts.push("<div class='notes'><strong>Notes:</strong><ul>".to_string());
        for note in &recipe.notes {
            parts.push(format!("<li>{}</li>", escape_html(note)));
        }
        parts.push("</ul></div>".to_string());
    }

    if !recipe.nutrition.is_empty() {
        parts.push("<div class='nutrition'><strong>Nutrition:</strong><ul>".to_string());
        for (key, value) in &recipe.nutrition {
            parts.push(format!(
                "<li>{}: {}</li>",
                escape_html(key),
                escape_html(&display_value(value))
            ));
        }
        parts.push("</ul></div>".to_string());
    }

    if let Some(source) = recipe.source.as_deref().filter(|s| !s.is_empty()) {
        let source = escape_html(source);
        parts.push(format!(
            "<div class='source'>Source: <a href='{source}' target='_blank'>{source}</a></div>"
        ));
    }

    parts.push("</div>".to_string());
}

/// Strings are shown without JSON quotes; null is shown as nothing
fn display_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Write a rendered document to disk
pub fn write_html(path: &Path, html: &str) -> Result<(), PlannerError> {
    fs::write(path, html)
        .inspect_err(|e| error!("Failed to write {}: {}", path.display(), e))?;
    info!("Wrote meal plan to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meal_plan::PlannedDay;
    use crate::shopping_list::{build_shopping_list, IngredientRecord};

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html("<b>Mac & \"Cheese\"</b>"),
            "&lt;b&gt;Mac &amp; &quot;Cheese&quot;&lt;/b&gt;"
        );
        assert_eq!(escape_html("cook's"), "cook&#x27;s");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("sunday meal prep"), "Sunday Meal Prep");
        assert_eq!(title_case("MONDAY"), "Monday");
    }

    #[test]
    fn test_render_document() {
        let recipe = Recipe {
            title: "Fish & Chips".to_string(),
            category: "monday".to_string(),
            servings: Some(serde_json::json!(4)),
            prep_time: Some(serde_json::json!("10 min")),
            ingredients: vec![
                IngredientRecord::new("cod", "1 lb", "Seafood"),
                IngredientRecord::new("lemon", "", "Produce"),
            ],
            directions: vec!["Fry the fish".to_string()],
            source: Some("https://example.com/fish".to_string()),
            ..Default::default()
        };
        let plan = MealPlan::new(vec![PlannedDay {
            day: "sunday meal prep".to_string(),
            recipe,
        }]);
        let list = build_shopping_list(plan.ingredient_records());
        let html = render_html(&plan, &list);

        assert!(html.starts_with("<!doctype html>"));
        assert!(html.contains("<h3>Seafood</h3>"));
        assert!(html.contains("<li>cod: 1 lb</li>"));
        assert!(html.contains("<li>lemon</li>"));
        assert!(html.contains("Sunday Meal Prep: Fish &amp; Chips"));
        assert!(html.contains("<div class='meta'>Prep: 10 min | Servings: 4</div>"));
        assert!(html.contains("<ol>\n<li>Fry the fish</li>"));
        assert!(html.contains("<a href='https://example.com/fish' target='_blank'>"));
        assert!(html.ends_with("</div></body></html>"));
    }
}
