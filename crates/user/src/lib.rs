mod accounts;
mod password;

pub use accounts::*;
pub use password::*;
