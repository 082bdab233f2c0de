//! Login form validation
//!
//! Pure checks over a submitted credentials snapshot.

pub mod results;
pub mod rules;
pub mod validator;

pub use results::{Field, ValidationResult};
pub use validator::{Validator, validate};
