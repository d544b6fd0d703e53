use crate::error::GhasError;
use crate::result::GhasResult;
use anyhow::anyhow;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};

const GITHUB_ACCEPT: &str = "application/vnd.github+json";
const GITHUB_API_VERSION: &str = "2022-11-28";

/// Headers sent with every GitHub REST call. An empty token sends no
/// `Authorization` header.
pub fn github_headers(token: &str, user_agent: &str) -> GhasResult<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, header_value(user_agent)?);
    headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_ACCEPT));
    headers.insert(
        HeaderName::from_static("x-github-api-version"),
        HeaderValue::from_static(GITHUB_API_VERSION),
    );
    if !token.is_empty() {
        let mut authorization = header_value(&format!("Bearer {token}"))?;
        authorization.set_sensitive(true);
        headers.insert(AUTHORIZATION, authorization);
    }
    Ok(headers)
}

fn header_value(s: &str) -> GhasResult<HeaderValue> {
    HeaderValue::from_str(s).map_err(|e| GhasError::Other(anyhow!(e)))
}
