use serde::{Deserialize, Serialize};

use crate::{
    error::Result,
    image_model::Model,
    session::{CookieScope, DEFAULT_COOKIE_NAME, SessionCookie},
};

pub const DEFAULT_BASE_URL: &str = "http://localhost:1337/v1";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub model: Model,
    pub base_url: String,
    /// `Domain=` for the session cookie, e.g. `.google.com`. Without it the
    /// cookie goes to the host of `base_url`.
    pub cookie_domain: Option<String>,
    pub cookie_name: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            model: Model::default(),
            base_url: DEFAULT_BASE_URL.into(),
            cookie_domain: None,
            cookie_name: DEFAULT_COOKIE_NAME.into(),
        }
    }
}

impl Settings {
    pub fn session_cookie(&self, session_id: impl Into<String>) -> Result<SessionCookie> {
        match &self.cookie_domain {
            Some(domain) => Ok(SessionCookie::new(
                CookieScope::Domain(domain.clone()),
                &self.cookie_name,
                session_id,
            )),
            None => SessionCookie::for_provider(&self.base_url, &self.cookie_name, session_id),
        }
    }
}
