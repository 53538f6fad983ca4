//! A client for the GitHub REST API (v3).
//!
//! # Overview
//!
//! The crate revolves around a [`Client`] that issues blocking `GET` requests against the API and
//! decodes the JSON responses into typed records: users ([`PublicUser`], [`SimpleUser`]),
//! repositories ([`Repo`]) and activity events ([`Event`]).
//!
//! ```no_run
//! # use github_client::ClientConfig;
//! let client = ClientConfig::new().to_client();
//! for event in client.user_performed_events("plouc")? {
//!     println!("{} > {}", event.created_at.format("%a %d %b %H:%M"), event.summary("plouc"));
//! }
//! # Ok::<(), github_client::Error>(())
//! ```
//!
//! # Events
//!
//! Every [`Event`] shares the same envelope, while its payload depends on the event type. Known
//! types are decoded into an [`EventPayload`] variant; anything else is kept as
//! [`EventPayload::None`] with the raw payload still available. [`summarize`] renders an event as
//! a one-line message.
//!
//! # Error Handling
//!
//! Errors are represented by the [`Error`] enum.
//!
//! A listing call fails as a whole only on network errors or when the response is not a JSON
//! array. A single malformed event (bad timestamp, unexpected payload shape) never fails the
//! listing: the affected fields fall back to their zero value and a warning is logged.
//!
//! # Rate limits
//!
//! The rate-limit headers of the last response are available through [`Client::rate_limit`]. The
//! client doesn't throttle itself based on them.
//!
//! # Logging
//!
//! The package uses the [`log`](https://docs.rs/log/latest/log/) crate for logging
//! messages. Consider integrating a `log`-compatible logger implementation for better visibility
//! into client operations.
//!
//! # Examples
//!
//! A command-line example can be found in the `demos/events` directory of the crate repository.

#![warn(rustdoc::missing_crate_level_docs)]

mod client;
mod config;
mod de;
mod endpoints;
mod error;
mod events;
mod rate_limit;
mod repos;
mod summary;
mod users;

pub use client::Client;
pub use config::ClientConfig;
pub use endpoints::Endpoint;
pub use error::{Error, Result};
pub use events::{
    parse_events, parse_timestamp, Creation, Event, EventPayload, PullRequestAction, Push, RefType,
};
pub use rate_limit::RateLimit;
pub use repos::{Commit, CommitAuthor, Repo, SimpleRepo, Tree};
pub use summary::summarize;
pub use users::{PublicUser, SimpleUser};
