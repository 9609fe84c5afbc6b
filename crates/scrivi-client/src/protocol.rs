//! Wire format for the `/analyse` endpoint

use serde::Serialize;
use url::Url;

/// Path of the analysis endpoint, relative to the service base URL
pub const ANALYSE_PATH: &str = "analyse";

/// Request body: the draft is the only payload
#[derive(Debug, Clone, Serialize)]
pub struct AnalyseRequest<'a> {
    pub text: &'a str,
}

impl<'a> AnalyseRequest<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }
}

/// Resolve `{base}/analyse`.
///
/// The base is treated as a directory, so `http://host:8000`,
/// `http://host:8000/` and `http://host/api` resolve to `.../analyse`
/// under them rather than replacing the last path segment.
pub fn analyse_endpoint(base: &Url) -> Result<Url, url::ParseError> {
    let mut base = base.clone();
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base.join(ANALYSE_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_shape() {
        let body = serde_json::to_string(&AnalyseRequest::new("Hello there.")).unwrap();
        assert_eq!(body, r#"{"text":"Hello there."}"#);
    }

    #[test]
    fn test_empty_text_is_still_sent() {
        let body = serde_json::to_string(&AnalyseRequest::new("")).unwrap();
        assert_eq!(body, r#"{"text":""}"#);
    }

    #[test]
    fn test_endpoint_from_bare_host() {
        let base = Url::parse("http://127.0.0.1:8000").unwrap();
        assert_eq!(
            analyse_endpoint(&base).unwrap().as_str(),
            "http://127.0.0.1:8000/analyse"
        );
    }

    #[test]
    fn test_endpoint_with_trailing_slash() {
        let base = Url::parse("http://localhost:8000/").unwrap();
        assert_eq!(
            analyse_endpoint(&base).unwrap().as_str(),
            "http://localhost:8000/analyse"
        );
    }

    #[test]
    fn test_endpoint_keeps_path_prefix() {
        let base = Url::parse("https://example.com/nlp").unwrap();
        assert_eq!(
            analyse_endpoint(&base).unwrap().as_str(),
            "https://example.com/nlp/analyse"
        );

        let base = Url::parse("https://example.com/nlp/v1/").unwrap();
        assert_eq!(
            analyse_endpoint(&base).unwrap().as_str(),
            "https://example.com/nlp/v1/analyse"
        );
    }
}
