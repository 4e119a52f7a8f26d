//! Fake MediaWiki API shared by the router, analyzer and CLI tests

use axum::{extract::Query, response::Json, routing::get, Router};
use serde_json::{json, Value};
use std::collections::HashMap;

/// Nothing listens on the discard port
pub const UNREACHABLE_API: &str = "http://127.0.0.1:9/w/api.php";

/// Serve a fake MediaWiki `api.php` and return its URL
pub async fn spawn_fake_api() -> String {
    async fn api(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
        if params.get("list").map(String::as_str) == Some("categorymembers") {
            return match params.get("cmtitle").map(String::as_str) {
                Some("Category:Large language models") => Json(json!({
                    "query": {"categorymembers": [
                        {"pageid": 1, "ns": 0, "title": "GPT-4"},
                        {"pageid": 2, "ns": 0, "title": "BERT"},
                        {"pageid": 3, "ns": 14, "title": "Category:Chatbots"}
                    ]}
                })),
                _ => Json(json!({"query": {"categorymembers": []}})),
            };
        }

        let extract = match params.get("titles").map(String::as_str) {
            Some("GPT-4") => "The neural model is a large model.",
            Some("BERT") => "BERT is a neural encoder model.",
            _ => "",
        };
        Json(json!({"query": {"pages": {"1": {"pageid": 1, "extract": extract}}}}))
    }

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, Router::new().route("/w/api.php", get(api)))
            .await
            .unwrap();
    });
    format!("http://{}/w/api.php", addr)
}
