use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, HeaderMap};
use axum::response::{IntoResponse, Redirect, Response};
use axum::Json;
use serde::Serialize;

use crate::services::deeplink::{is_mobile_user_agent, sms_url};
use crate::state::AppState;

#[derive(Serialize)]
pub struct TextFallback {
    pub phone_display: String,
    pub sms_url: String,
}

// GET /text
// Phones open the messaging app directly; desktops get the number to copy.
pub async fn text_barber(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Response {
    let user_agent = headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    let greeting = format!(
        "Hi! I'd like to book an appointment at {}.",
        state.config.business_name
    );
    let url = sms_url(&state.config.sms_number, &greeting);

    if is_mobile_user_agent(user_agent) {
        tracing::info!("quick text link opened on mobile");
        return Redirect::to(&url).into_response();
    }

    Json(TextFallback {
        phone_display: state.config.display_phone.clone(),
        sms_url: url,
    })
    .into_response()
}
