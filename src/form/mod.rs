//! Login form state
//!
//! Live input, submitted snapshots and the observer plumbing between them.

pub mod credentials;
pub mod observable;
pub mod state;

pub use credentials::Credentials;
pub use observable::{Observable, SubscriptionId};
pub use state::FormState;
