//! REST endpoint path templates.
use url::Url;

use crate::{Error, Result};

/// A REST endpoint. Placeholders in [`Endpoint::template`] start with `:` and occupy a whole path
/// segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// Get a single user.
    User,
    /// List all users.
    Users,
    /// Get a repository by its owner and name.
    Repo,
    /// List all public repositories.
    Repos,
    /// List public repositories for the specified user.
    UserRepos,
    /// List repositories for the specified org.
    OrgRepos,
    /// List public events.
    PublicEvents,
    /// List repository events.
    RepoEvents,
    /// List issue events for a repository.
    RepoIssueEvents,
    /// List public events for a network of repositories.
    NetworkEvents,
    /// List events that a user has received.
    UserReceivedEvents,
    /// List public events that a user has received.
    UserReceivedPublicEvents,
    /// List events performed by a user.
    UserPerformedEvents,
    /// List public events performed by a user.
    UserPerformedPublicEvents,
    /// List events for an organization (the user's organization dashboard).
    OrgEvents,
    /// List public events for an organization.
    OrgPublicEvents,
}

impl Endpoint {
    /// Path template of the endpoint.
    pub const fn template(self) -> &'static str {
        match self {
            Endpoint::User => "/users/:user",
            Endpoint::Users => "/users",
            Endpoint::Repo => "/repos/:owner/:repo",
            Endpoint::Repos => "/repositories",
            Endpoint::UserRepos => "/users/:user/repos",
            Endpoint::OrgRepos => "/orgs/:org/repos",
            Endpoint::PublicEvents => "/events",
            Endpoint::RepoEvents => "/repos/:owner/:repo/events",
            Endpoint::RepoIssueEvents => "/repos/:owner/:repo/issues/events",
            Endpoint::NetworkEvents => "/networks/:owner/:repo/events",
            Endpoint::UserReceivedEvents => "/users/:user/received_events",
            Endpoint::UserReceivedPublicEvents => "/users/:user/received_events/public",
            Endpoint::UserPerformedEvents => "/users/:user/events",
            Endpoint::UserPerformedPublicEvents => "/users/:user/events/public",
            Endpoint::OrgEvents => "/users/:user/events/orgs/:org",
            Endpoint::OrgPublicEvents => "/orgs/:org/events",
        }
    }

    /// Build the full request URL, substituting `params` (`(":placeholder", value)` pairs) into
    /// the template and appending the result to `base_url`.
    ///
    /// Each value is encoded as a single path segment, so a `/` inside a value does not change
    /// the shape of the path.
    ///
    /// ```
    /// # use github_client::Endpoint;
    /// let url = Endpoint::RepoEvents
    ///     .url("https://api.github.com", &[(":owner", "plouc"), (":repo", "go-github-client")])
    ///     .unwrap();
    /// assert_eq!(url.as_str(), "https://api.github.com/repos/plouc/go-github-client/events");
    /// ```
    pub fn url(self, base_url: &str, params: &[(&str, &str)]) -> Result<Url> {
        let mut url = Url::parse(base_url).map_err(Error::InvalidBaseUrl)?;

        let segments = self
            .template()
            .split('/')
            .filter(|segment| !segment.is_empty())
            .map(|segment| {
                params
                    .iter()
                    .find(|(placeholder, _)| *placeholder == segment)
                    .map_or(segment, |(_, value)| *value)
            });

        url.path_segments_mut()
            .map_err(|()| Error::InvalidBaseUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
            .pop_if_empty()
            .extend(segments);

        Ok(url)
    }
}
