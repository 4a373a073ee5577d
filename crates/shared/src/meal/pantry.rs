use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};
use validator::Validate;

use super::{normalize_ingredient, normalize_ingredients, parse_ingredients};

/// How a pantry submission is merged into the existing pantry.
#[derive(
    EnumString,
    VariantArray,
    Display,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum PantryMode {
    /// Insert each submitted item unless already present.
    #[default]
    Accumulate,
    /// Replace the whole pantry with the submitted items.
    Replace,
}

#[derive(Validate)]
pub struct PantryInput {
    #[validate(length(min = 1, message = "At least one pantry ingredient is required"))]
    pub items: Vec<String>,
}

impl PantryInput {
    pub fn parse(raw: &str) -> Self {
        Self {
            items: parse_ingredients(raw),
        }
    }

    /// One item, taken as is apart from normalization.
    pub fn single(item: &str) -> Self {
        Self {
            items: normalize_ingredients([item]),
        }
    }
}

/// Ingredients the user already has.
///
/// Membership is a set of normalized strings; the insertion order is kept
/// so items can be listed and removed by position.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct Pantry {
    items: Vec<String>,
}

impl Pantry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, ingredient: &str) -> bool {
        let ingredient = normalize_ingredient(ingredient);
        self.items.contains(&ingredient)
    }

    /// Returns `false` when the item was empty or already present.
    pub fn insert(&mut self, ingredient: &str) -> bool {
        let ingredient = normalize_ingredient(ingredient);
        if ingredient.is_empty() || self.items.contains(&ingredient) {
            return false;
        }

        self.items.push(ingredient);
        true
    }

    pub fn replace(&mut self, items: Vec<String>) {
        self.items = normalize_ingredients(items);
    }

    pub fn remove(&mut self, index: usize) -> crate::Result<String> {
        if index >= self.items.len() {
            return Err(crate::Error::IndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }

        Ok(self.items.remove(index))
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.items
    }
}

impl From<Vec<String>> for Pantry {
    fn from(value: Vec<String>) -> Self {
        Self {
            items: normalize_ingredients(value),
        }
    }
}

impl From<Pantry> for Vec<String> {
    fn from(value: Pantry) -> Self {
        value.items
    }
}

impl<S: AsRef<str>> FromIterator<S> for Pantry {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self {
            items: normalize_ingredients(iter),
        }
    }
}

impl<'a> IntoIterator for &'a Pantry {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
