//! Explicit authentication context threaded into requests that need it.

use arena_domain::BearerToken;

/// Credential context passed to authenticated operations.
///
/// Request code never looks tokens up on its own; callers hand one of these in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthContext {
    token: Option<BearerToken>,
}

impl AuthContext {
    /// Context with no credential; requests go out without `Authorization`.
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn bearer(token: BearerToken) -> Self {
        Self { token: Some(token) }
    }

    pub fn from_token(token: Option<BearerToken>) -> Self {
        Self { token }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Value for the `Authorization` header, if any.
    pub fn authorization_header(&self) -> Option<String> {
        self.token.as_ref().map(BearerToken::authorization_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anonymous_has_no_header() {
        let ctx = AuthContext::anonymous();
        assert!(!ctx.is_authenticated());
        assert_eq!(ctx.authorization_header(), None);
    }

    #[test]
    fn test_bearer_header() {
        let token = BearerToken::new("tok").unwrap();
        let ctx = AuthContext::bearer(token);
        assert_eq!(ctx.authorization_header().as_deref(), Some("Bearer tok"));
    }
}
