use std::sync::Arc;

use log::debug;
use reqwest::{Url, cookie::Jar};

use crate::error::{PipelineError, Result};

pub const DEFAULT_COOKIE_NAME: &str = "__Secure-1PSID";
pub const GOOGLE_COOKIE_DOMAIN: &str = ".google.com";

/// Which requests the cookie travels with
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CookieScope {
    /// Host-only cookie for the host of this URL, `Secure` when it is https
    Host(Url),
    /// `Domain=` cookie, HTTPS only
    Domain(String),
}

/// A browser session cookie handed to the provider.
///
/// The value is passed through as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionCookie {
    pub scope: CookieScope,
    pub name: String,
    pub value: String,
}

impl SessionCookie {
    pub fn new(scope: CookieScope, name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            scope,
            name: name.into(),
            value: value.into(),
        }
    }

    /// `__Secure-1PSID` for `.google.com`
    pub fn google(value: impl Into<String>) -> Self {
        Self::new(
            CookieScope::Domain(GOOGLE_COOKIE_DOMAIN.into()),
            DEFAULT_COOKIE_NAME,
            value,
        )
    }

    /// Host-only cookie for whatever host `base_url` points at
    pub fn for_provider(
        base_url: &str,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Self> {
        let url = Url::parse(base_url).map_err(|e| {
            PipelineError::InvalidCookie(format!("bad provider url {base_url:?}: {e}"))
        })?;
        Ok(Self::new(CookieScope::Host(url), name, value))
    }

    fn cookie_str(&self) -> Result<(String, Url)> {
        let pair = format!("{}={}; Path=/", self.name, self.value);
        match &self.scope {
            CookieScope::Host(url) => {
                let cookie = if url.scheme() == "https" {
                    format!("{pair}; Secure")
                } else {
                    pair
                };
                Ok((cookie, url.clone()))
            }
            CookieScope::Domain(domain) => {
                let host = domain.trim_start_matches('.');
                let origin = Url::parse(&format!("https://{host}/")).map_err(|e| {
                    PipelineError::InvalidCookie(format!("bad domain {domain:?}: {e}"))
                })?;
                Ok((format!("{pair}; Domain={domain}; Secure"), origin))
            }
        }
    }

    pub fn jar(&self) -> Result<Arc<Jar>> {
        let (cookie, origin) = self.cookie_str()?;
        let jar = Jar::default();
        jar.add_cookie_str(&cookie, &origin);
        debug!("Session cookie {} set for {:?}", self.name, self.scope);

        Ok(Arc::new(jar))
    }
}
