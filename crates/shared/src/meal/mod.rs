mod pantry;

pub use pantry::*;

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Trim and lowercase an ingredient so equal ingredients compare equal.
pub fn normalize_ingredient(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Split comma separated ingredient text into normalized, non-empty,
/// de-duplicated ingredients. Order of first appearance is kept.
pub fn parse_ingredients(raw: &str) -> Vec<String> {
    normalize_ingredients(raw.split(','))
}

pub fn normalize_ingredients<I, S>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut ingredients: Vec<String> = Vec::new();

    for ingredient in raw.into_iter() {
        let ingredient = normalize_ingredient(ingredient.as_ref());
        if ingredient.is_empty() || ingredients.contains(&ingredient) {
            continue;
        }

        ingredients.push(ingredient);
    }

    ingredients
}

#[derive(Validate)]
pub struct MealInput {
    #[validate(length(min = 1, message = "Meal name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "At least one ingredient is required"))]
    pub ingredients: Vec<String>,
}

impl MealInput {
    pub fn parse(name: &str, raw_ingredients: &str) -> Self {
        Self {
            name: name.trim().to_owned(),
            ingredients: parse_ingredients(raw_ingredients),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
#[serde(from = "StoredMeal")]
pub struct Meal {
    pub name: String,
    pub ingredients: Vec<String>,
}

impl Meal {
    /// Build a meal from raw user input.
    pub fn parse(name: &str, raw_ingredients: &str) -> crate::Result<Self> {
        Self::try_from(MealInput::parse(name, raw_ingredients))
    }

    pub fn has_ingredient(&self, ingredient: &str) -> bool {
        let ingredient = normalize_ingredient(ingredient);
        self.ingredients.iter().any(|i| i == &ingredient)
    }
}

impl TryFrom<MealInput> for Meal {
    type Error = crate::Error;

    fn try_from(input: MealInput) -> crate::Result<Self> {
        input.validate()?;

        Ok(Self {
            name: input.name,
            ingredients: input.ingredients,
        })
    }
}

/// Shape of a meal as persisted. Documents written by hand or by older
/// versions may carry untrimmed or mixed case ingredients.
#[derive(Deserialize)]
struct StoredMeal {
    #[serde(default)]
    name: String,
    #[serde(default)]
    ingredients: Vec<String>,
}

impl From<StoredMeal> for Meal {
    fn from(value: StoredMeal) -> Self {
        Self {
            name: value.name.trim().to_owned(),
            ingredients: normalize_ingredients(value.ingredients),
        }
    }
}
