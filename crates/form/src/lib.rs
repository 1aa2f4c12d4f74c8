pub mod controller;
pub mod notification;

pub use controller::{FormController, FormState, StateTransition};
pub use notification::{Notification, Severity};
