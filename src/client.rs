use reqwest::header::{ACCEPT, USER_AGENT};
use serde::de::DeserializeOwned;

use crate::{
    endpoints::Endpoint,
    events::parse_events,
    rate_limit::{RateLimit, RateLimitStore},
    ClientConfig, Event, PublicUser, Repo, Result, SimpleUser,
};

const ACCEPT_JSON: &str = "application/vnd.github.v3+json";

/// A client for the GitHub REST API.
///
/// Every method issues a single blocking `GET` request and decodes the response. Methods take
/// `&self`, so one client can be shared between threads.
///
/// # Examples
/// ```
/// # use github_client::{Client, ClientConfig};
/// let client = Client::new(ClientConfig::new());
/// ```
pub struct Client {
    // Client holds a connection pool internally, so we're reusing the client between requests.
    http: reqwest::blocking::Client,
    config: ClientConfig,
    rate_limit: RateLimitStore,
}

impl Client {
    /// Create a new `Client` using the specified configuration.
    pub fn new(config: ClientConfig) -> Self {
        Client {
            http: reqwest::blocking::Client::new(),
            config,
            rate_limit: RateLimitStore::new(),
        }
    }

    /// Rate-limit status reported with the last response.
    pub fn rate_limit(&self) -> RateLimit {
        self.rate_limit.get()
    }

    /// Get a single user.
    pub fn user(&self, login: &str) -> Result<PublicUser> {
        self.get_json(Endpoint::User, &[(":user", login)])
    }

    /// List all users, in the order they signed up.
    pub fn users(&self) -> Result<Vec<SimpleUser>> {
        self.get_json(Endpoint::Users, &[])
    }

    /// Get a repository.
    pub fn repo(&self, owner: &str, name: &str) -> Result<Repo> {
        self.get_json(Endpoint::Repo, &[(":owner", owner), (":repo", name)])
    }

    /// List all public repositories.
    pub fn repos(&self) -> Result<Vec<Repo>> {
        self.get_json(Endpoint::Repos, &[])
    }

    /// List public repositories for the specified user.
    pub fn user_repos(&self, user: &str) -> Result<Vec<Repo>> {
        self.get_json(Endpoint::UserRepos, &[(":user", user)])
    }

    /// List repositories for the specified org.
    pub fn org_repos(&self, org: &str) -> Result<Vec<Repo>> {
        self.get_json(Endpoint::OrgRepos, &[(":org", org)])
    }

    /// List public events.
    pub fn events(&self) -> Result<Vec<Event>> {
        self.get_events(Endpoint::PublicEvents, &[])
    }

    /// List repository events.
    pub fn repo_events(&self, owner: &str, repo: &str) -> Result<Vec<Event>> {
        self.get_events(Endpoint::RepoEvents, &[(":owner", owner), (":repo", repo)])
    }

    /// List issue events for a repository.
    pub fn repo_issue_events(&self, owner: &str, repo: &str) -> Result<Vec<Event>> {
        self.get_events(
            Endpoint::RepoIssueEvents,
            &[(":owner", owner), (":repo", repo)],
        )
    }

    /// List public events for a network of repositories.
    pub fn network_events(&self, owner: &str, repo: &str) -> Result<Vec<Event>> {
        self.get_events(Endpoint::NetworkEvents, &[(":owner", owner), (":repo", repo)])
    }

    /// List events that a user has received by watching repos and following users.
    ///
    /// Only public events are visible unless the request is authenticated as that user.
    pub fn user_received_events(&self, user: &str) -> Result<Vec<Event>> {
        self.get_events(Endpoint::UserReceivedEvents, &[(":user", user)])
    }

    /// List public events that a user has received.
    pub fn user_received_public_events(&self, user: &str) -> Result<Vec<Event>> {
        self.get_events(Endpoint::UserReceivedPublicEvents, &[(":user", user)])
    }

    /// List events performed by a user.
    ///
    /// Only public events are visible unless the request is authenticated as that user.
    pub fn user_performed_events(&self, user: &str) -> Result<Vec<Event>> {
        self.get_events(Endpoint::UserPerformedEvents, &[(":user", user)])
    }

    /// List public events performed by a user.
    pub fn user_performed_public_events(&self, user: &str) -> Result<Vec<Event>> {
        self.get_events(Endpoint::UserPerformedPublicEvents, &[(":user", user)])
    }

    /// List events for an organization. This is the user's organization dashboard and requires
    /// being authenticated as that user.
    pub fn org_events(&self, user: &str, org: &str) -> Result<Vec<Event>> {
        self.get_events(Endpoint::OrgEvents, &[(":user", user), (":org", org)])
    }

    /// List public events for an organization.
    pub fn org_public_events(&self, org: &str) -> Result<Vec<Event>> {
        self.get_events(Endpoint::OrgPublicEvents, &[(":org", org)])
    }

    fn get_events(&self, endpoint: Endpoint, params: &[(&str, &str)]) -> Result<Vec<Event>> {
        let body = self.get(endpoint, params)?;
        parse_events(&body).inspect_err(|err| {
            log::warn!(target: "github_client",
                       endpoint:debug = endpoint;
                       "failed to decode events: {:?}", err);
        })
    }

    fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        params: &[(&str, &str)],
    ) -> Result<T> {
        let body = self.get(endpoint, params)?;
        let value = serde_json::from_slice(&body).inspect_err(|err| {
            log::warn!(target: "github_client",
                       endpoint:debug = endpoint;
                       "failed to decode response body: {:?}", err);
        })?;
        Ok(value)
    }

    /// Issue a `GET` request and return the response body. Rate-limit headers are recorded
    /// whatever the response status.
    fn get(&self, endpoint: Endpoint, params: &[(&str, &str)]) -> Result<Vec<u8>> {
        let url = endpoint.url(&self.config.base_url, params)?;

        log::debug!(target: "github_client", url = url.as_str(); "fetching");
        let response = self
            .http
            .get(url)
            .header(USER_AGENT, self.config.user_agent.as_str())
            .header(ACCEPT, ACCEPT_JSON)
            .send()?;

        self.rate_limit.update(response.headers());

        let response = response.error_for_status().inspect_err(|err| {
            log::warn!(target: "github_client",
                       endpoint:debug = endpoint;
                       "received non-success response: {:?}", err.status());
        })?;

        let body = response.bytes()?;

        log::debug!(target: "github_client", endpoint:debug = endpoint, bytes = body.len(); "fetched");

        Ok(body.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::Client;
    use crate::{ClientConfig, Error, RateLimit};

    #[test]
    fn rate_limit_is_zero_before_any_request() {
        let client = Client::new(ClientConfig::new());

        assert_eq!(client.rate_limit(), RateLimit::default());
    }

    #[test]
    fn invalid_base_url_fails_before_any_request() {
        let client = ClientConfig::new().base_url("not a url").to_client();

        assert!(matches!(client.events(), Err(Error::InvalidBaseUrl(_))));
        assert!(matches!(client.user("plouc"), Err(Error::InvalidBaseUrl(_))));
    }
}
