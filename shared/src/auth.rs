/// Local-storage key holding the raw bearer token.
pub const AUTH_TOKEN_KEY: &str = "authToken";

pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Headers for an API call. `Authorization` is present iff a non-blank token is given.
pub fn auth_headers(token: Option<&str>) -> Vec<(&'static str, String)> {
    let mut headers = Vec::with_capacity(2);
    if let Some(token) = token.map(str::trim).filter(|t| !t.is_empty()) {
        headers.push(("Authorization", format!("Bearer {token}")));
    }
    headers.push(("Content-Type", CONTENT_TYPE_JSON.to_owned()));
    headers
}

#[cfg(test)]
mod tests {
    use super::auth_headers;

    fn has_authorization(headers: &[(&'static str, String)]) -> bool {
        headers.iter().any(|(name, _)| *name == "Authorization")
    }

    #[test]
    fn bearer_when_token_present() {
        let headers = auth_headers(Some("abc.def"));
        assert_eq!(
            headers,
            vec![
                ("Authorization", "Bearer abc.def".to_owned()),
                ("Content-Type", "application/json".to_owned()),
            ]
        );
    }

    #[test]
    fn authorization_iff_token() {
        for (token, expected) in [
            (None, false),
            (Some(""), false),
            (Some("   "), false),
            (Some("t"), true),
        ] {
            assert_eq!(has_authorization(&auth_headers(token)), expected, "{token:?}");
        }
    }
}
