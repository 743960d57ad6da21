//! `GET /companies.json`: the raw collection, with an ETag.
//!
//! Meant for consumers outside the viewer; the viewer loads through the
//! `list_companies` server function, which reads the same source.

use axum::{
    body::Body,
    http::{HeaderMap, StatusCode, header::{CACHE_CONTROL, CONTENT_TYPE, ETAG, IF_NONE_MATCH}},
    response::{IntoResponse, Response},
};
use tracing::info;

use crate::data_utils::{
    company_source::{fetch_company_json, parse_companies},
    source_config::{CompanySource, get_company_source},
};

/// True when an `If-None-Match` header value names `etag` (or is `*`).
pub fn etag_matches(if_none_match: &str, etag: &str) -> bool {
    if_none_match
        .split(',')
        .map(str::trim)
        .any(|candidate| candidate == "*" || candidate.trim_start_matches("W/") == etag)
}

pub async fn serve_company_json(source: &CompanySource, headers: &HeaderMap) -> anyhow::Result<Response> {
    let body = fetch_company_json(source).await?;
    // never serve a file the viewer cannot decode
    let record_count = parse_companies(&body)?.len();
    let etag = format!("\"{}\"", sha256::digest(body.clone()));

    let not_modified = headers
        .get(IF_NONE_MATCH)
        .and_then(|value| value.to_str().ok())
        .map(|value| etag_matches(value, &etag))
        .unwrap_or(false);
    if not_modified {
        return Ok((StatusCode::NOT_MODIFIED, [(ETAG, etag)]).into_response());
    }

    info!("Serving {} companies from {}", record_count, source);
    let headers = [
        (CONTENT_TYPE, "application/json".to_string()),
        (CACHE_CONTROL, "no-cache".to_string()),
        (ETAG, etag),
    ];
    Ok((headers, Body::from(body)).into_response())
}

pub async fn companies_json(headers: HeaderMap) -> Response {
    match serve_company_json(&get_company_source(), &headers).await {
        Ok(response) => response,
        Err(e) => {
            tracing::error!("companies_json: request failed: {:#?}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, Body::from(e.to_string())).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use axum::http::HeaderValue;

    use super::*;

    fn temp_source(contents: &str) -> (tempfile::NamedTempFile, CompanySource) {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        let source = CompanySource::File(file.path().to_path_buf());
        (file, source)
    }

    #[test]
    fn if_none_match_forms() {
        let etag = "\"abc\"";
        assert!(etag_matches("\"abc\"", etag));
        assert!(etag_matches("W/\"abc\"", etag));
        assert!(etag_matches("\"x\", \"abc\"", etag));
        assert!(etag_matches("*", etag));
        assert!(!etag_matches("\"abd\"", etag));
    }

    #[tokio::test]
    async fn serves_json_then_not_modified() {
        let (_file, source) = temp_source(r#"[{"id": "1", "name": "TechCorp"}]"#);

        let response = serve_company_json(&source, &HeaderMap::new()).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers().get(CONTENT_TYPE).unwrap(), "application/json");
        let etag = response.headers().get(ETAG).unwrap().clone();

        let mut headers = HeaderMap::new();
        headers.insert(IF_NONE_MATCH, etag.clone());
        let response = serve_company_json(&source, &headers).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_MODIFIED);

        headers.insert(IF_NONE_MATCH, HeaderValue::from_static("\"stale\""));
        let response = serve_company_json(&source, &headers).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn body_is_the_collection_the_viewer_loads() {
        let json = r#"[{"id": 1, "name": "TechCorp", "ceo": null}, {"id": "2", "name": "Nordic Bank"}]"#;
        let (_file, source) = temp_source(json);

        let response = serve_company_json(&source, &HeaderMap::new()).await.unwrap();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let served = parse_companies(std::str::from_utf8(&body).unwrap()).unwrap();
        let loaded = parse_companies(&fetch_company_json(&source).await.unwrap()).unwrap();
        assert_eq!(served, loaded);
        assert_eq!(served[0].id, "1");
    }

    #[tokio::test]
    async fn malformed_collection_is_refused() {
        let (_file, source) = temp_source(r#"{"not": "an array"}"#);
        assert!(serve_company_json(&source, &HeaderMap::new()).await.is_err());
    }
}
