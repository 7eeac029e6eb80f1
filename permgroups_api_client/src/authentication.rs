use std::fmt::Debug;


/// A pre-issued API token, sent as a bearer token on every request.
///
/// Obtaining the token is up to the caller, this client never logs in.
pub struct AccessToken {
    access_token: String,
}

impl AccessToken {
    pub fn new<T>(access_token: T) -> Self
    where
        T: Into<String>,
    {
        Self {
            access_token: access_token.into(),
        }
    }

    pub(crate) fn access_token(&self) -> &str {
        &self.access_token
    }
}

impl Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessToken")
            .field("access_token", &"<redacted>")
            .finish()
    }
}
