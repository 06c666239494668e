use crate::error::Result;
use axum::{routing::get, Json, Router};
use std::sync::Arc;
use utoipa::openapi::OpenApi;

/// Path the OpenAPI document is served under.
pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

/// Router serving `openapi` as JSON at [`OPENAPI_JSON_PATH`].
pub fn openapi_json_router<S>(openapi: OpenApi) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    let doc = Arc::new(openapi);
    Router::new().route(
        OPENAPI_JSON_PATH,
        get(move || {
            let doc = doc.clone();
            async move { Json((*doc).clone()) }
        }),
    )
}

pub fn to_pretty_json(openapi: &OpenApi) -> Result<String> {
    Ok(openapi.to_pretty_json()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;
    use utoipa::openapi::{InfoBuilder, OpenApiBuilder};

    fn sample_doc() -> OpenApi {
        OpenApiBuilder::new()
            .info(InfoBuilder::new().title("sample").version("0.1.0").build())
            .build()
    }

    #[tokio::test]
    async fn serves_document_as_json() {
        let app: Router = openapi_json_router(sample_doc());
        let response = app
            .oneshot(Request::get(OPENAPI_JSON_PATH).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["info"]["title"], "sample");
    }

    #[test]
    fn pretty_json_contains_title() {
        let text = to_pretty_json(&sample_doc()).unwrap();
        assert!(text.contains("\"title\": \"sample\""));
    }
}
