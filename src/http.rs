use std::time::Duration;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::error;

use crate::application::Application;
use crate::read_model::{Course, CourseId};

pub fn router(app: Application) -> Router {
    Router::new()
        .route("/courses/:id", get(get_course))
        .route("/health", get(health))
        .layer(
            tower::ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(TimeoutLayer::new(Duration::from_secs(5))),
        )
        .with_state(app)
}

async fn health() -> StatusCode {
    StatusCode::OK
}

#[derive(Serialize)]
struct GetCourseResponse {
    course: Course,
}

#[derive(Debug, thiserror::Error)]
enum GetCourseError {
    #[error("course not found")]
    NotFound,
    #[error(transparent)]
    Lookup(#[from] anyhow::Error),
}

impl IntoResponse for GetCourseError {
    fn into_response(self) -> Response {
        match self {
            GetCourseError::NotFound => StatusCode::NOT_FOUND.into_response(),
            GetCourseError::Lookup(e) => {
                error!(error = %e, "course lookup failed");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

/// `GET /courses/:id`
///
/// A malformed `id` is rejected by the `Path` extractor before this handler
/// runs.
async fn get_course(
    State(app): State<Application>,
    Path(id): Path<CourseId>,
) -> Result<Json<GetCourseResponse>, GetCourseError> {
    let course = app
        .course_by_id(id)
        .await?
        .ok_or(GetCourseError::NotFound)?;
    Ok(Json(GetCourseResponse { course }))
}
