use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use newsqa_server::{build_app, ServerConfig};
use serde_json::{json, Value};
use tower::ServiceExt;

fn articles() -> Value {
    json!([
        {
            "title": "Tesla announces new Model X",
            "content": "Tesla announced the new Model X electric SUV. Production will start next year.",
            "source_url": "news.example.com/1"
        },
        {
            "title": "Stock Market Today",
            "content": "NASDAQ and S&P 500 both increased today due to tech stock rally.",
            "source_url": "news.example.com/2"
        }
    ])
}

async fn post(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let req = Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

#[tokio::test]
async fn health_is_ok() {
    let app = build_app(ServerConfig::default());
    let resp = app.oneshot(Request::get("/health").body(Body::empty()).unwrap()).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], b"ok");
}

#[tokio::test]
async fn answer_returns_excerpt_and_citation() {
    let app = build_app(ServerConfig::default());
    let (status, json) = post(app, "/answer", json!({ "documents": articles(), "question": "What did Tesla announce?" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json["answer"],
        "Tesla announced the new Model X electric SUV. Production will start next year."
    );
    let citations = json["citations"].as_array().unwrap();
    assert_eq!(citations.len(), 1);
    assert_eq!(citations[0]["source"], "news.example.com/1");
    assert_eq!(citations[0]["start"], 0);
    assert_eq!(citations[0]["end"], 78);
    assert!(json["took_s"].is_number());
}

#[tokio::test]
async fn degenerate_parameters_are_clamped() {
    let app = build_app(ServerConfig::default());
    let body = json!({
        "documents": articles(),
        "question": "What did Tesla announce?",
        "chunk_size": 0,
        "overlap": -5,
        "min_score": -1.0,
        "top_k": 2
    });
    let (status, json) = post(app, "/answer", body).await;
    assert_eq!(status, StatusCode::OK);
    // one word per passage, so the single best passage is the word "Tesla"
    assert_eq!(json["citations"].as_array().unwrap().len(), 2);
    assert_eq!(json["citations"][0]["start"], 0);
    assert_eq!(json["citations"][0]["end"], 5);
}

#[tokio::test]
async fn no_match_returns_fallback() {
    let app = build_app(ServerConfig::default());
    let (status, json) = post(app, "/answer", json!({ "documents": articles(), "question": "quarterly dividend payout schedule" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["answer"], "No relevant article found.");
    assert_eq!(json["citations"], json!([]));
}

#[tokio::test]
async fn report_includes_qa_only_with_question() {
    let app = build_app(ServerConfig::default());
    let (status, json) = post(app.clone(), "/report", json!({ "news_articles": articles(), "question": "Tesla?" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["qa"]["citations"][0]["source"], "news.example.com/1");

    let (status, json) = post(app, "/report", json!({ "news_articles": articles() })).await;
    assert_eq!(status, StatusCode::OK);
    assert!(json.get("qa").is_none());
}

#[tokio::test]
async fn empty_report_is_rejected() {
    let app = build_app(ServerConfig::default());
    let (status, _) = post(app, "/report", json!({ "question": "  " })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn oversized_body_is_rejected() {
    let app = build_app(ServerConfig { max_body_bytes: 64, ..Default::default() });
    let (status, _) = post(app, "/answer", json!({ "documents": articles(), "question": "Tesla?" })).await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
}
