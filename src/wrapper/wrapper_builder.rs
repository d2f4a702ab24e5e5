use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::auth::AuthInfo;
use crate::constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, MY_USER_AGENT};
use crate::types;
use crate::wrapper::request_data::KulasisWrapperData;
use crate::wrapper::KulasisWrapper;

/// A builder for the `KulasisWrapper`. This should be used to construct a new wrapper
/// when the defaults are not enough.
///
/// # Example
/// ```rust,no_run
/// use std::time::Duration;
/// use kulasis::auth::AuthInfo;
/// use kulasis::wrapper::wrapper_builder::KulasisWrapperBuilder;
///
/// let wrapper = KulasisWrapperBuilder::new()
///     .with_auth(AuthInfo::new("a0123456", "token"))
///     .with_default_timeout(Duration::from_secs(10))
///     .try_build_wrapper();
///
/// assert!(wrapper.is_some());
/// ```
pub struct KulasisWrapperBuilder {
    auth: Option<AuthInfo>,
    client: Client,
    user_agent: String,
    default_timeout: Duration,
    base_url: Url,
}

impl KulasisWrapperBuilder {
    /// Constructs a `KulasisWrapperBuilder` with the default client, user agent, base URL,
    /// and timeout. You are responsible for providing the credentials.
    ///
    /// # Returns
    /// A `KulasisWrapperBuilder`.
    pub fn new() -> Self {
        Self {
            auth: None,
            client: Client::new(),
            user_agent: MY_USER_AGENT.to_owned(),
            default_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            base_url: default_base_url(),
        }
    }

    /// Sets the credentials.
    ///
    /// # Parameters
    /// - `auth`: The account ID and access token.
    ///
    /// # Returns
    /// The builder.
    pub fn with_auth(mut self, auth: AuthInfo) -> Self {
        self.auth = Some(auth);
        self
    }

    /// Sets the client to the specified client.
    ///
    /// # Parameters
    /// - `client`: The client to use.
    ///
    /// # Returns
    /// The builder.
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    /// Sets the user agent to the specified user agent.
    ///
    /// # Parameters
    /// - `user_agent`: The user agent to use.
    ///
    /// # Returns
    /// The builder.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Sets the timeout to the specified timeout.
    ///
    /// # Parameters
    /// - `timeout`: The timeout to use.
    ///
    /// # Returns
    /// The builder.
    pub fn with_default_timeout(mut self, timeout: Duration) -> Self {
        self.default_timeout = timeout;
        self
    }

    /// Sets the root URL that every endpoint is resolved against. A trailing `/` is
    /// added if missing, so that endpoint paths are appended rather than replacing the
    /// last segment.
    ///
    /// # Parameters
    /// - `base_url`: The base URL.
    ///
    /// # Returns
    /// The builder, or an error if the URL could not be parsed.
    pub fn with_base_url(mut self, base_url: impl AsRef<str>) -> types::Result<Self> {
        let base_url = base_url.as_ref();
        self.base_url = if base_url.ends_with('/') {
            Url::parse(base_url)?
        } else {
            Url::parse(&format!("{base_url}/"))?
        };

        Ok(self)
    }

    /// Attempts to build the wrapper. To successfully build the wrapper, the credentials
    /// must be provided.
    ///
    /// # Returns
    /// The `KulasisWrapper` if the credentials were specified, and `None` otherwise.
    pub fn try_build_wrapper(self) -> Option<KulasisWrapper> {
        let auth = self.auth?;
        Some(KulasisWrapper {
            data: KulasisWrapperData {
                auth,
                client: self.client,
                user_agent: self.user_agent,
                timeout: self.default_timeout,
                base_url: self.base_url,
            },
        })
    }
}

impl Default for KulasisWrapperBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn default_base_url() -> Url {
    // The constant is a well-formed absolute URL.
    Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid")
}
