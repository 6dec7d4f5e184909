//! User Profile
//!
//! Snapshot of the authenticated user as returned by `GET /user`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Authenticated user record.
///
/// Field names match the GitHub REST API. Missing keys fall back to their
/// defaults so that an error body such as `{"message":"Bad credentials"}`
/// still deserializes; [`UserProfile::error_message`] tells the two apart.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    /// Error message sent by the provider in place of a profile.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Documentation link accompanying `message`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation_url: Option<String>,

    // Identity
    pub login: String,
    pub id: i64,
    pub node_id: String,
    #[serde(rename = "type")]
    pub user_type: String,
    pub site_admin: bool,

    // Presentation
    pub name: Option<String>,
    pub avatar_url: String,
    pub gravatar_id: Option<String>,
    pub bio: Option<String>,
    pub company: Option<String>,
    pub blog: Option<String>,
    pub location: Option<String>,
    pub email: Option<String>,
    pub hireable: Option<bool>,
    pub twitter_username: Option<String>,

    // API links
    pub url: String,
    pub html_url: String,
    pub followers_url: String,
    pub following_url: String,
    pub gists_url: String,
    pub starred_url: String,
    pub subscriptions_url: String,
    pub organizations_url: String,
    pub repos_url: String,
    pub events_url: String,
    pub received_events_url: String,

    // Account metadata
    pub public_repos: i64,
    pub public_gists: i64,
    pub followers: i64,
    pub following: i64,
    pub created_at: String,
    pub updated_at: String,
}

impl UserProfile {
    /// Provider error message, if the body was an error rather than a profile.
    pub fn error_message(&self) -> Option<&str> {
        self.message.as_deref().filter(|m| !m.is_empty())
    }

    /// Account creation time, when GitHub sent a parseable timestamp.
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.created_at)
    }

    /// Last profile update time, when GitHub sent a parseable timestamp.
    pub fn updated_at_utc(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.updated_at)
    }
}

fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|t| t.with_timezone(&Utc))
}
