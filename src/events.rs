//! Activity events: envelope parsing and payload resolution.
use std::{fmt, sync::Arc};

use chrono::{DateTime, NaiveDateTime, Utc};
use derive_more::From;
use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};

use crate::{de::null_as_default, Commit, Error, Result, SimpleRepo, SimpleUser};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// A single activity event.
///
/// Every event shares the same envelope (id, type, actor, repo, timestamp). The type-specific part
/// is kept untouched in [`Event::payload`] and decoded into [`Event::variant`] according to
/// [`Event::event_type`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Event {
    #[serde(default, deserialize_with = "lenient")]
    pub id: String,
    /// Type tag, e.g. `"PushEvent"`. Unknown tags are kept as is.
    #[serde(rename = "type", default, deserialize_with = "lenient")]
    pub event_type: String,
    #[serde(default, deserialize_with = "lenient")]
    pub public: bool,
    #[serde(default, deserialize_with = "lenient")]
    pub actor: Option<SimpleUser>,
    #[serde(default, deserialize_with = "lenient")]
    pub repo: Option<SimpleRepo>,
    /// Only present on organization feeds.
    #[serde(default, deserialize_with = "lenient")]
    pub org: Option<SimpleUser>,
    /// Creation time as sent by the API.
    #[serde(rename = "created_at", default, deserialize_with = "lenient")]
    pub created_at_raw: String,
    /// Parsed [`Event::created_at_raw`]. Unix epoch if it could not be parsed.
    #[serde(skip)]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub payload: serde_json::Value,
    #[serde(skip)]
    pub variant: EventPayload,
}

impl Event {
    /// Parse [`Event::created_at_raw`] and decode [`Event::payload`]. Failures degrade the
    /// corresponding field to its zero value.
    fn resolve(&mut self) {
        self.created_at = parse_timestamp(&self.created_at_raw).unwrap_or_else(|err| {
            log::warn!(target: "github_client",
                       event_id:display = self.id,
                       created_at:display = self.created_at_raw;
                       "{}", err);
            DateTime::<Utc>::default()
        });
        self.variant = EventPayload::resolve(&self.event_type, &self.payload);
    }

    /// Render a one-line, human-readable description. See [`summarize`](crate::summarize).
    pub fn summary(&self, viewer: &str) -> String {
        crate::summarize(self, viewer)
    }
}

/// Parse a JSON array of events, preserving input order.
///
/// Fails only if `bytes` is not a JSON array of objects. Problems within a single event (bad
/// timestamp, payload that doesn't match its type, mistyped envelope field) are logged and degrade
/// that event's affected fields, without dropping it or affecting its siblings.
pub fn parse_events(bytes: &[u8]) -> Result<Vec<Event>> {
    let mut events: Vec<Event> = serde_json::from_slice(bytes)?;
    for event in &mut events {
        event.resolve();
    }
    log::debug!(target: "github_client", count = events.len(); "decoded events");
    Ok(events)
}

/// Parse an event timestamp (`YYYY-MM-DDTHH:MM:SSZ`, UTC).
///
/// ```
/// # use github_client::parse_timestamp;
/// let t = parse_timestamp("2013-06-16T01:06:59Z").unwrap();
/// assert_eq!(t.timestamp(), 1371344819);
/// ```
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(Error::InvalidTimestamp)
}

/// Deserialize a field, falling back to its default value if it has an unexpected shape. `null`
/// maps to the default silently.
fn lenient<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(T::default());
    }
    Ok(serde_json::from_value(value).unwrap_or_else(|err| {
        log::warn!(target: "github_client", "ignoring malformed event field: {}", err);
        T::default()
    }))
}

/// Type-specific part of an [`Event`].
#[derive(Debug, Clone, Default, PartialEq, Eq, From)]
pub enum EventPayload {
    /// Unknown event type, or a type that carries no interesting payload (e.g. `PublicEvent`).
    #[default]
    None,
    /// `PushEvent`.
    Push(Push),
    /// `CreateEvent`.
    Creation(Creation),
    /// `PullRequestEvent`.
    PullRequest(PullRequestAction),
}

impl EventPayload {
    /// Decode `raw` according to `event_type`. Unknown types always decode to
    /// [`EventPayload::None`]; a missing payload decodes to the zero value of the variant.
    pub fn decode(event_type: &str, raw: &serde_json::Value) -> Result<EventPayload> {
        let payload = match event_type {
            "PushEvent" => decode_variant::<Push>(event_type, raw)?.into(),
            "CreateEvent" => decode_variant::<Creation>(event_type, raw)?.into(),
            "PullRequestEvent" => decode_variant::<PullRequestAction>(event_type, raw)?.into(),
            _ => EventPayload::None,
        };
        Ok(payload)
    }

    /// Like [`EventPayload::decode`], but logs decoding errors and returns
    /// [`EventPayload::None`] instead.
    pub fn resolve(event_type: &str, raw: &serde_json::Value) -> EventPayload {
        EventPayload::decode(event_type, raw).unwrap_or_else(|err| {
            log::warn!(target: "github_client", event_type; "ignoring event payload: {:?}", err);
            EventPayload::None
        })
    }
}

fn decode_variant<T>(event_type: &str, raw: &serde_json::Value) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    if raw.is_null() {
        return Ok(T::default());
    }
    T::deserialize(raw).map_err(|err| Error::PayloadDecode {
        event_type: event_type.to_owned(),
        source: Arc::new(err),
    })
}

/// One or more commits pushed to a branch or tag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Push {
    /// SHA of the HEAD commit after the push.
    #[serde(deserialize_with = "null_as_default")]
    pub head: String,
    /// Full ref that was pushed, e.g. `refs/heads/master`.
    #[serde(rename = "ref", deserialize_with = "null_as_default")]
    pub git_ref: String,
    /// Number of commits in the push.
    #[serde(deserialize_with = "null_as_default")]
    pub size: u64,
    /// Number of commits new to the repository.
    #[serde(deserialize_with = "null_as_default")]
    pub distinct_size: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub commits: Vec<Commit>,
}

/// A created repository, branch, or tag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Creation {
    #[serde(deserialize_with = "null_as_default")]
    pub ref_type: RefType,
    /// `None` if only a repository was created.
    #[serde(rename = "ref")]
    pub git_ref: Option<String>,
    /// Name of the repository's default branch.
    #[serde(alias = "master_branch", deserialize_with = "null_as_default")]
    pub default_branch: String,
    /// Repository description at creation time.
    pub description: Option<String>,
}

/// Kind of object created by a `CreateEvent`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RefType {
    #[default]
    Repository,
    Branch,
    Tag,
    Other(String),
}

impl RefType {
    /// Wire name of the ref type.
    pub fn as_str(&self) -> &str {
        match self {
            RefType::Repository => "repository",
            RefType::Branch => "branch",
            RefType::Tag => "tag",
            RefType::Other(s) => s,
        }
    }
}

impl From<String> for RefType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "repository" => RefType::Repository,
            "branch" => RefType::Branch,
            "tag" => RefType::Tag,
            _ => RefType::Other(value),
        }
    }
}

impl From<RefType> for String {
    fn from(value: RefType) -> Self {
        match value {
            RefType::Other(s) => s,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for RefType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An action performed on a pull request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PullRequestAction {
    /// `"opened"`, `"closed"`, `"synchronize"`, `"reopened"`, ...
    #[serde(deserialize_with = "null_as_default")]
    pub action: String,
    /// Pull request number.
    #[serde(deserialize_with = "null_as_default")]
    pub number: u64,
}
