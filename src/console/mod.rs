//! Console front end
//!
//! A line-oriented presentation layer for the login form.

pub mod handler;
pub mod parser;
pub mod session;

pub use handler::{CommandOutcome, CommandStatus, ConsoleState};
pub use parser::{Command, parse_command};
pub use session::run_session;
