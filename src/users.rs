use serde::{Deserialize, Serialize};

use crate::de::null_as_default;

/// The compact user (or organization) representation embedded in other resources, e.g. the
/// actor of an [`Event`](crate::Event).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimpleUser {
    #[serde(deserialize_with = "null_as_default")]
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub login: String,
    #[serde(deserialize_with = "null_as_default")]
    pub avatar_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub gravatar_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
}

/// Public profile of a user, as returned by `GET /users/:user`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PublicUser {
    #[serde(flatten)]
    pub user: SimpleUser,
    pub name: Option<String>,
    pub company: Option<String>,
    pub blog: Option<String>,
    pub location: Option<String>,
    pub email: Option<String>,
    pub hireable: Option<bool>,
    pub bio: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub public_repos: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub public_gists: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub followers: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub following: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub html_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
    /// `"User"` or `"Organization"`.
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub user_type: String,
}
