mod deriver;

pub use deriver::*;
