pub mod binding;
pub mod config;
pub mod console;
pub mod error;
pub mod form;
pub mod utils;
pub mod validation;
pub mod view;

pub use binding::FormBinding;
pub use form::{Credentials, FormState};
pub use validation::{Field, ValidationResult, Validator, validate};
pub use view::LoginView;
