//! OAuth Types
//!
//! Data structures shared by the client and the flows.

pub mod auth;
pub mod config;
pub mod profile;
pub mod token;

pub use auth::*;
pub use config::*;
pub use profile::*;
pub use token::*;
