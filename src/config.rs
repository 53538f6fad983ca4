use crate::Client;

/// Configuration for [`Client`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub(crate) base_url: String,
    pub(crate) user_agent: String,
}

impl ClientConfig {
    /// Default base URL for API calls.
    pub const DEFAULT_BASE_URL: &'static str = "https://api.github.com";

    /// Default `User-Agent` header. The API rejects requests that don't carry one.
    pub const DEFAULT_USER_AGENT: &'static str =
        concat!("github-client/", env!("CARGO_PKG_VERSION"));

    /// Create a default configuration pointing at the public GitHub API.
    ///
    /// ```
    /// # use github_client::ClientConfig;
    /// ClientConfig::new();
    /// ```
    pub fn new() -> Self {
        ClientConfig {
            base_url: ClientConfig::DEFAULT_BASE_URL.to_owned(),
            user_agent: ClientConfig::DEFAULT_USER_AGENT.to_owned(),
        }
    }

    /// Override base URL for API calls, e.g. to target a GitHub Enterprise instance
    /// (`https://github.example.com/api/v3`).
    pub fn base_url(&mut self, base_url: impl Into<String>) -> &mut Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the `User-Agent` header sent with every request.
    pub fn user_agent(&mut self, user_agent: impl Into<String>) -> &mut Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Create a new [`Client`] using the specified configuration.
    ///
    /// ```
    /// # use github_client::{ClientConfig, Client};
    /// let client: Client = ClientConfig::new().to_client();
    /// ```
    pub fn to_client(&self) -> Client {
        Client::new(self.clone())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}
