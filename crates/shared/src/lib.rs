mod command;
pub mod document;
pub mod meal;
pub mod mealplan;
pub mod shopping;

pub use command::*;
