use reqwest::header::HeaderMap;
use reqwest::StatusCode;

const RATE_LIMIT_REMAINING: &str = "x-ratelimit-remaining";

/// GitHub signals an exhausted quota with 429, or with 403 plus
/// `x-ratelimit-remaining: 0` for the primary limit.
pub fn is_rate_limited(status: StatusCode, headers: &HeaderMap) -> bool {
    if status == StatusCode::TOO_MANY_REQUESTS {
        return true;
    }

    status == StatusCode::FORBIDDEN
        && headers
            .get(RATE_LIMIT_REMAINING)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<u64>().ok())
            == Some(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;
    use rstest::rstest;

    fn headers(remaining: Option<&'static str>) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Some(remaining) = remaining {
            headers.insert(RATE_LIMIT_REMAINING, HeaderValue::from_static(remaining));
        }
        headers
    }

    #[rstest]
    #[case(StatusCode::TOO_MANY_REQUESTS, None, true)]
    #[case(StatusCode::FORBIDDEN, Some("0"), true)]
    #[case(StatusCode::FORBIDDEN, Some("12"), false)]
    #[case(StatusCode::FORBIDDEN, None, false)]
    #[case(StatusCode::FORBIDDEN, Some("bad"), false)]
    #[case(StatusCode::OK, Some("0"), false)]
    fn detects_rate_limit(
        #[case] status: StatusCode,
        #[case] remaining: Option<&'static str>,
        #[case] expected: bool,
    ) {
        assert_eq!(expected, is_rate_limited(status, &headers(remaining)));
    }
}
