pub mod service;

pub use service::{AuthOutcome, AuthenticationService};
