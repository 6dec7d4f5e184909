//! OAuth Flows
//!
//! - Authorization Code: login redirect URL and code exchange
//! - User Profile: authenticated user lookup

pub mod authorization_code;
pub mod user_profile;

pub use authorization_code::{AuthorizationCodeFlow, AuthorizationCodeFlowImpl};
pub use user_profile::{UserProfileFlow, UserProfileFlowImpl};
