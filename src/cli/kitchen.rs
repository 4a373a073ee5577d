use clap::Subcommand;
use pantryplan::config::Config;
use pantryplan::presenter::View;
use pantryplan_mealplan::{PlanGenerator, PlanPolicy};

use super::{open_kitchen, render};

#[derive(Subcommand)]
pub enum MealCommand {
    /// Add a meal
    Add {
        name: String,
        /// Comma separated ingredients
        ingredients: String,
    },
    /// Replace the meal at INDEX
    Edit {
        index: usize,
        name: String,
        /// Comma separated ingredients
        ingredients: String,
    },
    /// Remove the meal at INDEX
    Remove { index: usize },
    /// List meals
    List,
    /// Remove every meal
    Clear,
}

#[derive(Subcommand)]
pub enum PantryCommand {
    /// Add a single item
    Add { item: String },
    /// Replace the pantry with comma separated items
    Set { items: String },
    /// Submit comma separated items, merged per the configured pantry mode
    Submit { items: String },
    /// Remove the item at INDEX
    Remove { index: usize },
    /// List pantry items
    List,
    /// Remove every item
    Clear,
}

#[tracing::instrument(skip_all)]
pub fn meal(config: &Config, command: MealCommand) -> pantryplan_shared::Result<()> {
    let mut kitchen = open_kitchen(config);

    match command {
        MealCommand::Add { name, ingredients } => {
            let index = kitchen.add_meal(&name, &ingredients)?;
            println!("Added meal [{index}]");
        }
        MealCommand::Edit {
            index,
            name,
            ingredients,
        } => {
            let index = kitchen.edit_meal(index, &name, &ingredients)?;
            println!("Updated meal [{index}]");
        }
        MealCommand::Remove { index } => {
            let meal = kitchen.remove_meal(index)?;
            println!("Removed {}", meal.name);
        }
        MealCommand::List => {}
        MealCommand::Clear => kitchen.clear_meals()?,
    }

    render(&kitchen, View::Meals)
}

#[tracing::instrument(skip_all)]
pub fn pantry(config: &Config, command: PantryCommand) -> pantryplan_shared::Result<()> {
    let mut kitchen = open_kitchen(config);

    match command {
        PantryCommand::Add { item } => {
            if !kitchen.add_pantry_item(&item)? {
                println!("Already in the pantry");
            }
        }
        PantryCommand::Set { items } => kitchen.set_pantry(&items)?,
        PantryCommand::Submit { items } => {
            let added = kitchen.submit_pantry(&items)?;
            println!("Added {added} item(s)");
        }
        PantryCommand::Remove { index } => {
            let item = kitchen.remove_pantry_item(index)?;
            println!("Removed {item}");
        }
        PantryCommand::List => {}
        PantryCommand::Clear => kitchen.clear_pantry()?,
    }

    render(&kitchen, View::Pantry)
}

/// Generates a fresh plan and renders `view`. The plan itself is not saved.
#[tracing::instrument(skip(config))]
pub fn plan(
    config: &Config,
    seed: Option<u64>,
    policy: Option<PlanPolicy>,
    view: View,
) -> pantryplan_shared::Result<()> {
    let mut kitchen = open_kitchen(config);
    let mut generator = PlanGenerator::new(
        policy.unwrap_or(config.planner.policy),
        seed.or(config.planner.seed),
    );

    let plan = kitchen.generate_plan(&mut generator);

    tracing::info!(
        filled = plan.filled(),
        seed = generator.seed(),
        policy = %generator.policy(),
        "plan generated"
    );

    render(&kitchen, view)
}
