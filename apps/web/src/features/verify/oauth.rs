//! OAuth authorization parameters carried through a login started from
//! `/login/oauth/authorize`.

use url::{form_urlencoded, Url};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OAuthParams {
    pub client_id: String,
    pub response_type: String,
    pub redirect_uri: String,
    pub scope: String,
    pub state: String,
    pub nonce: String,
    pub code_challenge_method: String,
    pub code_challenge: String,
}

impl OAuthParams {
    /// Reads the authorization request from a location search string. Returns
    /// `None` when there is no client to authorize for.
    pub fn from_search(search: &str) -> Option<Self> {
        let mut params = Self::default();
        for (key, value) in form_urlencoded::parse(search.trim_start_matches('?').as_bytes()) {
            let slot = match key.as_ref() {
                "client_id" => &mut params.client_id,
                "response_type" => &mut params.response_type,
                "redirect_uri" => &mut params.redirect_uri,
                "scope" => &mut params.scope,
                "state" => &mut params.state,
                "nonce" => &mut params.nonce,
                "code_challenge_method" => &mut params.code_challenge_method,
                "code_challenge" => &mut params.code_challenge,
                _ => continue,
            };
            if slot.is_empty() {
                *slot = value.into_owned();
            }
        }

        if params.client_id.is_empty() {
            None
        } else {
            Some(params)
        }
    }

    /// Authorization request of the current page, if any.
    #[cfg(target_arch = "wasm32")]
    pub fn from_location() -> Option<Self> {
        let search = web_sys::window()?.location().search().ok()?;
        Self::from_search(&search)
    }

    /// Query string appended to the login call, without the leading `?`.
    pub fn to_query(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .append_pair("clientId", &self.client_id)
            .append_pair("responseType", &self.response_type)
            .append_pair("redirectUri", &self.redirect_uri)
            .append_pair("scope", &self.scope)
            .append_pair("state", &self.state)
            .append_pair("nonce", &self.nonce)
            .append_pair("code_challenge_method", &self.code_challenge_method)
            .append_pair("code_challenge", &self.code_challenge)
            .finish()
    }

    /// Where the browser goes after an authorization code was issued. `None`
    /// when the redirect URI is not an absolute URL.
    pub fn redirect_with_code(&self, code: &str) -> Option<String> {
        let mut url = Url::parse(&self.redirect_uri).ok()?;
        url.query_pairs_mut()
            .append_pair("code", code)
            .append_pair("state", &self.state);
        Some(url.into())
    }
}

/// Login endpoint path, with the OAuth query when one is in progress.
pub fn login_path(base: &str, oauth: Option<&OAuthParams>) -> String {
    match oauth {
        Some(params) => format!("{base}?{}", params.to_query()),
        None => base.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AUTHORIZE: &str = "?client_id=abc&response_type=code&redirect_uri=https%3A%2F%2Fapp.test%2Fcb&scope=read&state=xyz";

    #[test]
    fn reads_authorization_request() {
        let params = OAuthParams::from_search(AUTHORIZE).expect("client id present");
        assert_eq!(params.client_id, "abc");
        assert_eq!(params.redirect_uri, "https://app.test/cb");
        assert_eq!(params.nonce, "");
    }

    #[test]
    fn missing_or_empty_client_id_means_no_oauth() {
        assert_eq!(OAuthParams::from_search(""), None);
        assert_eq!(OAuthParams::from_search("?state=xyz"), None);
        assert_eq!(OAuthParams::from_search("?client_id=&state=xyz"), None);
    }

    #[test]
    fn query_uses_login_parameter_names() {
        let params = OAuthParams::from_search(AUTHORIZE).expect("client id present");
        assert_eq!(
            login_path("/api/login", Some(&params)),
            "/api/login?clientId=abc&responseType=code&redirectUri=https%3A%2F%2Fapp.test%2Fcb&scope=read&state=xyz&nonce=&code_challenge_method=&code_challenge="
        );
        assert_eq!(login_path("/api/login", None), "/api/login");
    }

    #[test]
    fn redirect_carries_code_and_state() {
        let params = OAuthParams::from_search(AUTHORIZE).expect("client id present");
        assert_eq!(
            params.redirect_with_code("c0de").as_deref(),
            Some("https://app.test/cb?code=c0de&state=xyz")
        );

        let relative = OAuthParams {
            client_id: "abc".to_string(),
            redirect_uri: "/cb".to_string(),
            ..OAuthParams::default()
        };
        assert_eq!(relative.redirect_with_code("c0de"), None);
    }
}
