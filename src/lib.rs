pub mod cli;
pub mod models;
pub mod normalize;
pub mod raw;

pub use normalize::{normalize, ContactSet};
pub use raw::{parse_profiles, InvalidInputError};
