//! Helper functions shared by the loaders and commands

mod date;
mod url;

pub use date::*;
pub use url::*;
