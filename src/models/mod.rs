mod company;
mod employment;
mod person;

pub use company::{Company, IntentStrength};
pub use employment::EmploymentEntry;
pub use person::{Person, Seniority};
