mod cli;

use anyhow::Result;
use clap::{Parser, Subcommand};
use cli::kitchen::{MealCommand, PantryCommand};
use cli::user::UserCommand;
use pantryplan::presenter::View;
use pantryplan_mealplan::PlanPolicy;

/// pantryplan - Weekly meal planning from what you already have
#[derive(Parser)]
#[command(name = "pantryplan")]
#[command(about = "Plan a week of meals around your pantry", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage meals
    Meal {
        #[command(subcommand)]
        command: MealCommand,
    },
    /// Manage pantry items
    Pantry {
        #[command(subcommand)]
        command: PantryCommand,
    },
    /// Generate a weekly plan and its shopping list
    Plan {
        /// Seed for a reproducible plan (overrides config file)
        #[arg(long)]
        seed: Option<u64>,

        /// Selection policy (overrides config file)
        #[arg(long)]
        policy: Option<PlanPolicy>,
    },
    /// Generate a weekly plan and show only its shopping list
    Shopping {
        /// Seed for a reproducible plan (overrides config file)
        #[arg(long)]
        seed: Option<u64>,

        /// Selection policy (overrides config file)
        #[arg(long)]
        policy: Option<PlanPolicy>,
    },
    /// Manage accounts
    User {
        #[command(subcommand)]
        command: UserCommand,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = pantryplan::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    pantryplan::observability::init_logging(&config.logging.level, config.logging.format)?;

    let result = match cli.command {
        Commands::Meal { command } => cli::kitchen::meal(&config, command),
        Commands::Pantry { command } => cli::kitchen::pantry(&config, command),
        Commands::Plan { seed, policy } => cli::kitchen::plan(&config, seed, policy, View::Plan),
        Commands::Shopping { seed, policy } => {
            cli::kitchen::plan(&config, seed, policy, View::Shopping)
        }
        Commands::User { command } => cli::user::user(&config, command),
    };

    match result {
        Err(e) if e.is_rejection() => {
            eprintln!("{e}");
            std::process::exit(1);
        }
        result => Ok(result?),
    }
}
