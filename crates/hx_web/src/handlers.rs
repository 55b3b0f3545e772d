use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;
use tracing::error;

use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub headline: Option<String>,
}

pub async fn list_headlines(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.store.titles())
}

pub async fn analyze(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AnalyzeRequest>,
) -> Response {
    let headline = match request.headline.as_deref() {
        Some(h) if !h.is_empty() => h,
        _ => return error_response(StatusCode::BAD_REQUEST, "No headline provided"),
    };

    let record = match state.store.find_by_title(headline) {
        Some(record) => record.clone(),
        None => return error_response(StatusCode::NOT_FOUND, "Headline not found"),
    };

    match state.explainer.explain(&record).await {
        Ok(result) => Json(json!({ "result": result })).into_response(),
        Err(err) => {
            // Detail stays in the log; the response body is generic.
            error!("Explanation failed for '{}': {}", record.title, err);
            error_response(StatusCode::BAD_GATEWAY, "Explanation service failed")
        }
    }
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use hx_core::{Error, Explainer, HeadlineRecord, Result};
    use hx_dataset::DatasetStore;
    use std::sync::Mutex;

    /// Test explainer that records the composed prompt for each call.
    struct RecordingExplainer {
        prompts: Mutex<Vec<String>>,
        response: Option<String>,
    }

    impl RecordingExplainer {
        fn returning(text: &str) -> Self {
            Self {
                prompts: Mutex::new(Vec::new()),
                response: Some(text.to_string()),
            }
        }

        fn failing() -> Self {
            Self {
                prompts: Mutex::new(Vec::new()),
                response: None,
            }
        }
    }

    #[async_trait]
    impl Explainer for RecordingExplainer {
        fn name(&self) -> &str {
            "Recording"
        }

        async fn explain(&self, record: &HeadlineRecord) -> Result<String> {
            self.prompts
                .lock()
                .unwrap()
                .push(hx_inference::prompt::compose(record));
            self.response
                .clone()
                .ok_or_else(|| Error::Explanation("upstream unavailable".to_string()))
        }
    }

    fn state_with(explainer: Arc<RecordingExplainer>) -> Arc<AppState> {
        let store = DatasetStore::from_records(vec![HeadlineRecord {
            title: "First headline".to_string(),
            description: "Something happened".to_string(),
            link: "http://news.example/1".to_string(),
        }]);
        Arc::new(AppState {
            store: Arc::new(store),
            explainer,
            assets_dir: std::env::temp_dir(),
        })
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_missing_headline_is_bad_request() {
        let state = state_with(Arc::new(RecordingExplainer::returning("OK")));
        let response = analyze(State(state), Json(AnalyzeRequest { headline: None })).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"], "No headline provided");
    }

    #[tokio::test]
    async fn test_empty_headline_is_bad_request() {
        let state = state_with(Arc::new(RecordingExplainer::returning("OK")));
        let request = AnalyzeRequest {
            headline: Some(String::new()),
        };
        let response = analyze(State(state), Json(request)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_unknown_headline_is_not_found() {
        let state = state_with(Arc::new(RecordingExplainer::returning("OK")));
        let request = AnalyzeRequest {
            headline: Some("Not in the dataset".to_string()),
        };
        let response = analyze(State(state), Json(request)).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["error"], "Headline not found");
    }

    #[tokio::test]
    async fn test_analyze_invokes_explainer_with_record_prompt() {
        let explainer = Arc::new(RecordingExplainer::returning("OK"));
        let state = state_with(explainer.clone());
        let request = AnalyzeRequest {
            headline: Some("First headline".to_string()),
        };
        let response = analyze(State(state), Json(request)).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["result"], "OK");

        let prompts = explainer.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("First headline"));
        assert!(prompts[0].contains("Something happened"));
        assert!(prompts[0].contains("http://news.example/1"));
    }

    #[tokio::test]
    async fn test_explainer_failure_maps_to_bad_gateway() {
        let state = state_with(Arc::new(RecordingExplainer::failing()));
        let request = AnalyzeRequest {
            headline: Some("First headline".to_string()),
        };
        let response = analyze(State(state), Json(request)).await;
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(body_json(response).await["error"], "Explanation service failed");
    }
}
