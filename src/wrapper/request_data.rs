use std::time::Duration;

use log::debug;
use reqwest::header::USER_AGENT;
use reqwest::{Client, RequestBuilder};
use url::Url;

use crate::auth::AuthInfo;
use crate::constants::ACCOUNT_HEADER;
use crate::types;

pub(crate) struct KulasisWrapperData {
    pub auth: AuthInfo,
    pub client: Client,
    pub user_agent: String,
    pub timeout: Duration,
    pub base_url: Url,
}

impl KulasisWrapperData {
    /// Resolves an endpoint against the base URL and appends the query parameters.
    ///
    /// # Parameters
    /// - `endpoint`: The endpoint path, relative to the base URL.
    /// - `query`: The query parameters.
    ///
    /// # Returns
    /// The full URL.
    pub fn endpoint(&self, endpoint: &str, query: &[(&str, String)]) -> types::Result<Url> {
        let mut url = self.base_url.join(endpoint)?;
        if !query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(query.iter().map(|(k, v)| (*k, v.as_str())));
        }

        Ok(url)
    }

    /// Makes a GET request using the credentials and headers provided by the user.
    ///
    /// # Parameters
    /// - `url`: The URL to request.
    ///
    /// # Returns
    /// A request builder that can further be built on top of, if needed.
    pub fn get(&self, url: Url) -> RequestBuilder {
        debug!("GET {url}");
        self.client
            .get(url)
            .bearer_auth(&self.auth.access_token)
            .header(ACCOUNT_HEADER, self.auth.account.as_str())
            .header(USER_AGENT, self.user_agent.as_str())
            .timeout(self.timeout)
    }
}
