use pantryplan_shared::meal::{Meal, Pantry};
use pantryplan_shared::mealplan::{DAYS_PER_WEEK, WeeklyPlan};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

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
pub enum PlanPolicy {
    /// Highest pantry score first, random order among equal scores.
    #[default]
    Scored,
    /// Random picks among meals sharing at least one pantry ingredient,
    /// or among all meals when none do.
    PantryFilter,
}

/// Number of the meal's ingredients already in the pantry.
pub fn score(meal: &Meal, pantry: &Pantry) -> usize {
    meal.ingredients
        .iter()
        .filter(|ingredient| pantry.contains(ingredient))
        .count()
}

/// Meals unique by value, first occurrence wins.
fn distinct(meals: &[Meal]) -> Vec<&Meal> {
    let mut unique: Vec<&Meal> = Vec::with_capacity(meals.len());
    for meal in meals {
        if !unique.contains(&meal) {
            unique.push(meal);
        }
    }

    unique
}

/// Builds weekly plans from a meal collection and a pantry.
///
/// Randomness comes from a [`StdRng`] owned by the generator. A fixed seed
/// makes every sequence of plans reproducible; without one the seed is
/// drawn from the thread rng. The rng advances on each call, so generating
/// again with unchanged input may produce a different plan.
pub struct PlanGenerator {
    policy: PlanPolicy,
    seed: u64,
    rng: StdRng,
}

impl PlanGenerator {
    pub fn new(policy: PlanPolicy, seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(|| rand::rng().random());

        tracing::debug!(%policy, seed, "plan generator seeded");

        Self {
            policy,
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn seeded(policy: PlanPolicy, seed: u64) -> Self {
        Self::new(policy, Some(seed))
    }

    pub fn policy(&self) -> PlanPolicy {
        self.policy
    }

    /// Seed the generator started from, useful to replay a plan.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// An empty meal collection yields an all-empty plan.
    pub fn generate(&mut self, meals: &[Meal], pantry: &Pantry) -> WeeklyPlan {
        let plan = match self.policy {
            PlanPolicy::Scored => self.scored(meals, pantry),
            PlanPolicy::PantryFilter => self.pantry_filter(meals, pantry),
        };

        tracing::debug!(
            policy = %self.policy,
            meals = meals.len(),
            pantry = pantry.len(),
            filled = plan.filled(),
            "weekly plan generated"
        );

        plan
    }

    fn scored(&mut self, meals: &[Meal], pantry: &Pantry) -> WeeklyPlan {
        let mut candidates = distinct(meals);

        // Shuffling before a stable sort leaves equal scores in random order.
        candidates.shuffle(&mut self.rng);
        let mut ranked = candidates
            .into_iter()
            .map(|meal| (score(meal, pantry), meal))
            .collect::<Vec<_>>();
        ranked.sort_by(|a, b| b.0.cmp(&a.0));

        let mut placed = ranked.into_iter().map(|(_, meal)| meal).collect::<Vec<_>>();
        let unplaced = placed.split_off(placed.len().min(DAYS_PER_WEEK));

        self.fill(placed, unplaced)
    }

    fn pantry_filter(&mut self, meals: &[Meal], pantry: &Pantry) -> WeeklyPlan {
        let (matching, others): (Vec<_>, Vec<_>) = distinct(meals)
            .into_iter()
            .partition(|meal| score(meal, pantry) > 0);

        let (mut candidates, others) = if matching.is_empty() {
            (others, Vec::new())
        } else {
            (matching, others)
        };

        candidates.shuffle(&mut self.rng);
        candidates.truncate(DAYS_PER_WEEK);

        self.fill(candidates, others)
    }

    /// Tops the plan up to seven meals by sampling `unplaced` without
    /// replacement. Slots stay empty once `unplaced` runs out.
    fn fill<'a>(
        &mut self,
        mut placed: Vec<&'a Meal>,
        mut unplaced: Vec<&'a Meal>,
    ) -> WeeklyPlan {
        unplaced.shuffle(&mut self.rng);

        while placed.len() < DAYS_PER_WEEK {
            let Some(meal) = unplaced.pop() else {
                break;
            };

            placed.push(meal);
        }

        WeeklyPlan::from_meals(placed.into_iter().cloned())
    }
}
