pub mod appointment;
pub mod enums;
pub mod filters;
pub mod patient;
pub mod prescription;
pub mod validation;

pub use appointment::*;
pub use enums::*;
pub use filters::*;
pub use patient::*;
pub use prescription::*;
pub use validation::{require, ValidationError};
