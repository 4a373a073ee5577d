mod kitchen;
mod presenter;
mod store;

pub use kitchen::*;
pub use presenter::*;
pub use store::*;

cfg_if::cfg_if! {
    if #[cfg(feature = "full")] {
        mod json;

        pub use json::*;
    }
}
