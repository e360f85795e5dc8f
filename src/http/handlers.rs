use crate::core::relay::ContactRelay;
use crate::core::{ConfigProvider, ContactResponse, ContactSubmission, MailTransport};
use crate::utils::error::ErrorCategory;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use std::sync::Arc;

pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

pub async fn submit_contact<T, C>(
    State(relay): State<Arc<ContactRelay<T, C>>>,
    body: Bytes,
) -> (StatusCode, Json<ContactResponse>)
where
    T: MailTransport + 'static,
    C: ConfigProvider + 'static,
{
    // 瀏覽器 fetch 未指定標頭時送 text/plain，因此不檢查 Content-Type
    let submission = match serde_json::from_slice::<ContactSubmission>(&body) {
        Ok(submission) => submission,
        Err(e) => {
            tracing::warn!("⚠️ Rejected contact request body: {}", e);
            return (StatusCode::BAD_REQUEST, Json(ContactResponse::failure()));
        }
    };

    let (status, response) = handle_submission(&relay, &submission).await;
    (status, Json(response))
}

/// 把投遞結果映射成 HTTP 狀態；投遞失敗只在這裡記錄一次
pub async fn handle_submission<T, C>(
    relay: &ContactRelay<T, C>,
    submission: &ContactSubmission,
) -> (StatusCode, ContactResponse)
where
    T: MailTransport,
    C: ConfigProvider,
{
    match relay.deliver(submission).await {
        Ok(_) => (StatusCode::OK, ContactResponse::success()),
        Err(e) if e.category() == ErrorCategory::Validation => {
            tracing::warn!("⚠️ Contact submission rejected: {}", e);
            (StatusCode::BAD_REQUEST, ContactResponse::failure())
        }
        Err(e) => {
            tracing::error!(
                "❌ Contact delivery failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            (StatusCode::INTERNAL_SERVER_ERROR, ContactResponse::failure())
        }
    }
}
