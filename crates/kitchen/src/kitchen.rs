use pantryplan_mealplan::PlanGenerator;
use pantryplan_shared::meal::{Meal, Pantry, PantryInput, PantryMode};
use pantryplan_shared::mealplan::WeeklyPlan;
use pantryplan_shared::shopping::{ItemOrder, ShoppingList};
use pantryplan_shopping::ShoppingListDeriver;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};
use validator::Validate;

use crate::{PersistedState, Presenter, Snapshot, Store};

/// Where an edited meal ends up.
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
pub enum EditMode {
    /// The meal keeps its position.
    #[default]
    ReplaceInPlace,
    /// The meal is removed and appended at the end of the list.
    Reinsert,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KitchenSettings {
    pub pantry_mode: PantryMode,
    pub edit_mode: EditMode,
    pub item_order: ItemOrder,
}

/// Meal and pantry repository.
///
/// Owns the collections, the current plan and the store. A mutating call
/// takes effect only once the store has saved the new collections; a
/// rejected call or a failed save leaves them untouched.
pub struct Kitchen<S: Store> {
    store: S,
    settings: KitchenSettings,
    meals: Vec<Meal>,
    pantry: Pantry,
    plan: WeeklyPlan,
}

impl<S: Store> Kitchen<S> {
    pub fn open(store: S, settings: KitchenSettings) -> Self {
        let PersistedState { meals, pantry } = store.load();

        tracing::debug!(meals = meals.len(), pantry = pantry.len(), "kitchen opened");

        Self {
            store,
            settings,
            meals,
            pantry,
            plan: WeeklyPlan::empty(),
        }
    }

    pub fn settings(&self) -> KitchenSettings {
        self.settings
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn meals(&self) -> &[Meal] {
        &self.meals
    }

    pub fn meal(&self, index: usize) -> Option<&Meal> {
        self.meals.get(index)
    }

    pub fn pantry(&self) -> &Pantry {
        &self.pantry
    }

    /// The last generated plan, empty until one is generated.
    pub fn plan(&self) -> &WeeklyPlan {
        &self.plan
    }

    /// Returns the index of the new meal.
    pub fn add_meal(
        &mut self,
        name: &str,
        raw_ingredients: &str,
    ) -> pantryplan_shared::Result<usize> {
        let meal = Meal::parse(name, raw_ingredients)?;

        let index = self.commit(|meals, _| {
            meals.push(meal);
            Ok(meals.len() - 1)
        })?;

        tracing::info!(index, name = %self.meals[index].name, "meal added");

        Ok(index)
    }

    /// Later meals shift down by one.
    pub fn remove_meal(&mut self, index: usize) -> pantryplan_shared::Result<Meal> {
        self.check_meal_index(index)?;

        let meal = self.commit(|meals, _| Ok(meals.remove(index)))?;

        tracing::info!(index, name = %meal.name, "meal removed");

        Ok(meal)
    }

    /// Returns the index the edited meal ends up at, which depends on the
    /// configured [`EditMode`].
    pub fn edit_meal(
        &mut self,
        index: usize,
        name: &str,
        raw_ingredients: &str,
    ) -> pantryplan_shared::Result<usize> {
        self.check_meal_index(index)?;
        let meal = Meal::parse(name, raw_ingredients)?;
        let mode = self.settings.edit_mode;

        let index = self.commit(|meals, _| match mode {
            EditMode::ReplaceInPlace => {
                meals[index] = meal;
                Ok(index)
            }
            EditMode::Reinsert => {
                meals.remove(index);
                meals.push(meal);
                Ok(meals.len() - 1)
            }
        })?;

        tracing::info!(index, %mode, "meal edited");

        Ok(index)
    }

    pub fn clear_meals(&mut self) -> pantryplan_shared::Result<()> {
        self.commit(|meals, _| {
            meals.clear();
            Ok(())
        })?;

        tracing::info!("meals cleared");

        Ok(())
    }

    /// Replaces the whole pantry with the items of `raw`.
    pub fn set_pantry(&mut self, raw: &str) -> pantryplan_shared::Result<()> {
        let input = PantryInput::parse(raw);
        input.validate()?;

        self.commit(|_, pantry| {
            pantry.replace(input.items);
            Ok(())
        })?;

        tracing::info!(items = self.pantry.len(), "pantry replaced");

        Ok(())
    }

    /// Returns `false` when the item was already in the pantry.
    pub fn add_pantry_item(&mut self, item: &str) -> pantryplan_shared::Result<bool> {
        let input = PantryInput::single(item);
        input.validate()?;

        let added = self.commit(|_, pantry| Ok(pantry.insert(item)))?;

        if added {
            tracing::info!(item, "pantry item added");
        } else {
            tracing::debug!(item, "pantry item already present");
        }

        Ok(added)
    }

    /// Applies a pantry submission according to the configured
    /// [`PantryMode`]. Returns how many items were added.
    pub fn submit_pantry(&mut self, raw: &str) -> pantryplan_shared::Result<usize> {
        match self.settings.pantry_mode {
            PantryMode::Replace => {
                self.set_pantry(raw)?;
                Ok(self.pantry.len())
            }
            PantryMode::Accumulate => {
                let input = PantryInput::parse(raw);
                input.validate()?;

                let added = self.commit(|_, pantry| {
                    Ok(input.items.iter().filter(|item| pantry.insert(item)).count())
                })?;

                tracing::info!(added, items = self.pantry.len(), "pantry merged");

                Ok(added)
            }
        }
    }

    pub fn remove_pantry_item(&mut self, index: usize) -> pantryplan_shared::Result<String> {
        let item = self
            .commit(|_, pantry| pantry.remove(index))
            .inspect_err(|e| {
                tracing::warn!(error = %e, "pantry item not removed");
            })?;

        tracing::info!(index, %item, "pantry item removed");

        Ok(item)
    }

    pub fn clear_pantry(&mut self) -> pantryplan_shared::Result<()> {
        self.commit(|_, pantry| {
            pantry.clear();
            Ok(())
        })?;

        tracing::info!("pantry cleared");

        Ok(())
    }

    /// Replaces the current plan with a fresh one.
    pub fn generate_plan(&mut self, generator: &mut PlanGenerator) -> &WeeklyPlan {
        self.plan = generator.generate(&self.meals, &self.pantry);
        &self.plan
    }

    /// Derived from the current plan and pantry on every call.
    pub fn shopping_list(&self) -> ShoppingList {
        ShoppingListDeriver::derive(&self.plan, &self.pantry, self.settings.item_order)
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            meals: &self.meals,
            pantry: &self.pantry,
            plan: &self.plan,
            shopping_list: self.shopping_list(),
        }
    }

    pub fn present<P: Presenter + ?Sized>(
        &self,
        presenter: &mut P,
    ) -> pantryplan_shared::Result<()> {
        presenter.present(&self.snapshot())
    }

    fn check_meal_index(&self, index: usize) -> pantryplan_shared::Result<()> {
        if index < self.meals.len() {
            return Ok(());
        }

        let e = pantryplan_shared::Error::IndexOutOfRange {
            index,
            len: self.meals.len(),
        };

        tracing::warn!(error = %e, "meal index rejected");

        Err(e)
    }

    /// Applies `change` to copies of the collections and keeps the result
    /// only once the store has saved it. Nothing is saved when the
    /// collections come out unchanged.
    fn commit<T>(
        &mut self,
        change: impl FnOnce(&mut Vec<Meal>, &mut Pantry) -> pantryplan_shared::Result<T>,
    ) -> pantryplan_shared::Result<T> {
        let mut meals = self.meals.clone();
        let mut pantry = self.pantry.clone();
        let value = change(&mut meals, &mut pantry)?;

        if meals == self.meals && pantry == self.pantry {
            return Ok(value);
        }

        let state = PersistedState { meals, pantry };
        self.store.save(&state).inspect_err(|e| {
            tracing::warn!(error = %e, "kitchen not saved, change discarded");
        })?;

        self.meals = state.meals;
        self.pantry = state.pantry;

        Ok(value)
    }
}
