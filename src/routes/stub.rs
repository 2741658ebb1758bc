//! Stub endpoint.
//!
//! GET /<author>/<repository>/<branch>/path/to/file[?dry_run=true]
//!
//! resolve → fetch first available candidate → project with the dialect's
//! projector. Each stage either hands over to the next or ends the request
//! with its `AppError`; nothing is retried.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::header,
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Deserialize;

use crate::error::Result;
use crate::models::TYPESCRIPT_CONTENT_TYPE;
use crate::remote::fetch_first_available;
use crate::routes::SharedState;

pub fn routes(state: SharedState) -> Router {
    Router::new()
        .route("/", get(get_root))
        .route("/{*path}", get(get_stubs))
        .with_state(state)
}

#[derive(Debug, Default, Deserialize)]
struct StubQuery {
    #[serde(default)]
    dry_run: bool,
}

async fn get_root(State(state): State<SharedState>, Query(query): Query<StubQuery>) -> Result<Response> {
    handle(&state, "", &query).await
}

async fn get_stubs(
    State(state): State<SharedState>,
    Path(path): Path<String>,
    Query(query): Query<StubQuery>,
) -> Result<Response> {
    handle(&state, &path, &query).await
}

async fn handle(state: &SharedState, path: &str, query: &StubQuery) -> Result<Response> {
    let path = path.strip_prefix('/').unwrap_or(path);
    let target = state.resolver.resolve(path)?;

    if query.dry_run {
        return Ok(Json(target).into_response());
    }

    tracing::debug!(
        "Resolved {} to stem {} (target {})",
        path,
        target.stem,
        target.target_extension
    );

    let fetched = fetch_first_available(state.fetcher.as_ref(), &target.candidates).await?;
    let body = state
        .projectors
        .project(fetched.dialect, &fetched.url, &fetched.content)?;

    Ok(([(header::CONTENT_TYPE, TYPESCRIPT_CONTENT_TYPE)], body).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projector::{DeclarationScope, ProjectorRegistry};
    use crate::remote::PathResolver;
    use crate::remote::fetch::tests::FakeFetcher;
    use crate::routes::{AppState, create_router};
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    const GO_URL: &str = "https://github.com/alice/repo/main/raw/pkg/types.go";
    const PROTO_URL: &str = "https://github.com/alice/repo/main/raw/pkg/types.proto";

    fn app(fetcher: Arc<FakeFetcher>) -> Router {
        create_router(Arc::new(AppState {
            resolver: PathResolver::default(),
            fetcher,
            projectors: ProjectorRegistry::with_builtin(DeclarationScope::All),
        }))
    }

    async fn send_get(app: Router, uri: &str) -> (StatusCode, Option<String>, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .map(|v| v.to_str().unwrap().to_string());
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, content_type, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn projects_go_file() {
        let fetcher = Arc::new(FakeFetcher::default().with_file(
            GO_URL,
            "package types\n\ntype A struct{ X int }\ntype B interface{}\ntype C = A\n",
        ));
        let (status, content_type, body) = send_get(app(fetcher.clone()), "/alice/repo/main/pkg/types").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some("application/typescript"));
        assert_eq!(
            body,
            "export interface A {}\nexport interface B {}\nexport interface C {}\n"
        );
        assert_eq!(fetcher.attempts(), vec![GO_URL]);
    }

    #[tokio::test]
    async fn short_path_is_bad_request() {
        let fetcher = Arc::new(FakeFetcher::default());
        let (status, _, body) = send_get(app(fetcher.clone()), "/alice/repo").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.starts_with("Invalid path."));

        let (status, _, _) = send_get(app(fetcher.clone()), "/").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(fetcher.attempts().is_empty());
    }

    #[tokio::test]
    async fn unreachable_candidates_are_not_found() {
        let fetcher = Arc::new(FakeFetcher::default());
        let (status, _, body) = send_get(app(fetcher.clone()), "/alice/repo/main/pkg/types").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, "File not found.");
        assert_eq!(fetcher.attempts(), vec![GO_URL, PROTO_URL]);
    }

    #[tokio::test]
    async fn protobuf_hit_is_not_implemented() {
        let fetcher = Arc::new(FakeFetcher::default().with_file(PROTO_URL, "syntax = \"proto3\";"));
        let (status, content_type, _) = send_get(app(fetcher), "/alice/repo/main/pkg/types").await;
        assert_eq!(status, StatusCode::NOT_IMPLEMENTED);
        assert_ne!(content_type.as_deref(), Some("application/typescript"));
    }

    #[tokio::test]
    async fn broken_body_is_bad_gateway() {
        let fetcher = Arc::new(
            FakeFetcher::default()
                .with_broken_body(GO_URL)
                .with_file(PROTO_URL, "syntax = \"proto3\";"),
        );
        let (status, _, body) = send_get(app(fetcher.clone()), "/alice/repo/main/pkg/types").await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert!(body.contains(GO_URL));
        assert_eq!(fetcher.attempts(), vec![GO_URL]);
    }

    #[tokio::test]
    async fn doubled_leading_slash_resolves_like_single() {
        let fetcher = Arc::new(FakeFetcher::default().with_file(GO_URL, "package types\n\ntype A int\n"));
        let (status, _, body) = send_get(app(fetcher.clone()), "//alice/repo/main/pkg/types").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "export interface A {}\n");
        assert_eq!(fetcher.attempts(), vec![GO_URL]);
    }

    #[tokio::test]
    async fn invalid_go_is_unprocessable() {
        let fetcher = Arc::new(FakeFetcher::default().with_file(GO_URL, "<html>Not Found</html>"));
        let (status, _, body) = send_get(app(fetcher), "/alice/repo/main/pkg/types").await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body.contains(GO_URL));
    }

    #[tokio::test]
    async fn dry_run_lists_candidates_without_fetching() {
        let fetcher = Arc::new(FakeFetcher::default());
        let (status, _, body) = send_get(app(fetcher.clone()), "/alice/repo/main/pkg/types?dry_run=true").await;
        assert_eq!(status, StatusCode::OK);

        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["stem"], "pkg/types");
        assert_eq!(json["target_extension"], ".ts");
        assert_eq!(json["candidates"][0]["dialect"], "go");
        assert_eq!(json["candidates"][0]["url"], GO_URL);
        assert_eq!(json["candidates"][1]["url"], PROTO_URL);
        assert!(fetcher.attempts().is_empty());
    }
}
