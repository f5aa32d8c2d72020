//! Request-body extraction. Wraps [`axum::Json`] so rejections speak the
//! same `{"errors": [...]}` envelope as validation failures instead of
//! axum's plain-text defaults.

use axum::async_trait;
use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};

/// JSON body extractor for the write routes.
///
/// Unreadable or syntactically invalid bodies come back as 400 with the
/// rejection text in the errors list; an over-long body keeps its 413 from
/// the request-size layer.
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: serde::de::DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<Value>);

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ApiJson(value)),
            Err(rejection) => {
                let status = if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
                    StatusCode::PAYLOAD_TOO_LARGE
                } else {
                    StatusCode::BAD_REQUEST
                };
                let body = Json(json!({ "errors": [rejection.body_text()] }));
                Err((status, body))
            }
        }
    }
}
