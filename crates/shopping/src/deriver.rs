use std::collections::{BTreeSet, HashSet};

use pantryplan_shared::meal::Pantry;
use pantryplan_shared::mealplan::WeeklyPlan;
use pantryplan_shared::shopping::{ItemOrder, ShoppingList};

/// Shopping List Deriver
///
/// Stateless domain service computing what the plan needs and the pantry
/// lacks: the union of every planned meal's ingredients minus the pantry.
/// Presence only, no quantities or units.
///
/// Ingredients are already normalized on `Meal` and `Pantry`, so plain
/// string equality is enough here.
pub struct ShoppingListDeriver;

impl ShoppingListDeriver {
    pub fn derive(plan: &WeeklyPlan, pantry: &Pantry, order: ItemOrder) -> ShoppingList {
        let needed = plan
            .meals()
            .flat_map(|meal| meal.ingredients.iter())
            .filter(|ingredient| !pantry.contains(ingredient));

        let items = match order {
            ItemOrder::Insertion => {
                let mut seen = HashSet::new();
                needed
                    .filter(|ingredient| seen.insert(*ingredient))
                    .cloned()
                    .collect::<Vec<_>>()
            }
            ItemOrder::Sorted => needed
                .map(String::as_str)
                .collect::<BTreeSet<_>>()
                .into_iter()
                .map(str::to_owned)
                .collect::<Vec<_>>(),
        };

        tracing::debug!(
            %order,
            planned = plan.filled(),
            pantry = pantry.len(),
            needed = items.len(),
            "shopping list derived"
        );

        ShoppingList::from_items(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pantryplan_shared::meal::Meal;

    fn plan(meals: &[(&str, &str)]) -> WeeklyPlan {
        WeeklyPlan::from_meals(
            meals
                .iter()
                .map(|(name, ingredients)| Meal::parse(name, ingredients).unwrap()),
        )
    }

    #[test]
    fn test_insertion_order_follows_days() {
        let plan = plan(&[("Tacos", "tortilla, beef"), ("Chili", "beef, beans, onion")]);
        let list = ShoppingListDeriver::derive(&plan, &Pantry::new(), ItemOrder::Insertion);
        assert_eq!(list.items(), ["tortilla", "beef", "beans", "onion"]);
    }

    #[test]
    fn test_sorted_order() {
        let plan = plan(&[("Tacos", "tortilla, beef"), ("Chili", "beef, beans, onion")]);
        let list = ShoppingListDeriver::derive(&plan, &Pantry::new(), ItemOrder::Sorted);
        assert_eq!(list.items(), ["beans", "beef", "onion", "tortilla"]);
    }

    #[test]
    fn test_pantry_items_are_removed() {
        let plan = plan(&[("Omelette", "eggs, cheese, chives")]);
        let pantry: Pantry = ["EGGS ", "chives"].into_iter().collect();
        let list = ShoppingListDeriver::derive(&plan, &pantry, ItemOrder::Insertion);
        assert_eq!(list.items(), ["cheese"]);
    }
}
