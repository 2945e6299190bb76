pub mod accounts;
pub mod authentication;

pub use accounts::{AccountService, SignupData};
pub use authentication::{AuthOutcome, AuthenticationService};
