mod types;
mod utils;

pub use types::*;
