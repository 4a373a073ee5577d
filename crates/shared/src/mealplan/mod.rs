use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

use crate::meal::Meal;

pub const DAYS_PER_WEEK: usize = 7;

#[derive(
    EnumString,
    VariantArray,
    Display,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Day> {
        Self::VARIANTS.get(index).copied()
    }
}

/// Seven slots, Monday to Sunday. An empty slot means no meal selected.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct WeeklyPlan {
    slots: [Option<Meal>; DAYS_PER_WEEK],
}

impl WeeklyPlan {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Places meals Monday onward. Anything past Sunday is dropped.
    pub fn from_meals(meals: impl IntoIterator<Item = Meal>) -> Self {
        let mut plan = Self::empty();
        for (slot, meal) in plan.slots.iter_mut().zip(meals) {
            *slot = Some(meal);
        }

        plan
    }

    pub fn get(&self, day: Day) -> Option<&Meal> {
        self.slots[day.index()].as_ref()
    }

    pub fn set(&mut self, day: Day, meal: Option<Meal>) {
        self.slots[day.index()] = meal;
    }

    pub fn days(&self) -> impl Iterator<Item = (Day, Option<&Meal>)> {
        Day::VARIANTS
            .iter()
            .copied()
            .zip(self.slots.iter().map(Option::as_ref))
    }

    /// Meals in day order, skipping empty slots.
    pub fn meals(&self) -> impl Iterator<Item = &Meal> {
        self.slots.iter().flatten()
    }

    pub fn contains(&self, meal: &Meal) -> bool {
        self.meals().any(|m| m == meal)
    }

    pub fn filled(&self) -> usize {
        self.meals().count()
    }

    pub fn is_empty(&self) -> bool {
        self.filled() == 0
    }
}
