pub mod mask;
pub mod rules;

pub use rules::{validate, ValidationErrors};
