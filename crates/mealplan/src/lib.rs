mod generator;
mod week;

pub use generator::*;
pub use week::*;
