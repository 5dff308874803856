use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::{AppError, ValidationError};
use crate::models::{service_options, BookingForm, FieldId, ServiceOption};
use crate::services::deeplink::Navigation;
use crate::services::dispatch::Channel;
use crate::state::AppState;

static BOOKING_HTML: &str = include_str!("../web/booking.html");

pub async fn booking_page() -> Html<&'static str> {
    Html(BOOKING_HTML)
}

fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

// GET /api/booking/form
#[derive(Serialize)]
pub struct FormBootstrap {
    form: BookingForm,
    time_options: Vec<String>,
    services: Vec<ServiceOption>,
}

pub async fn get_form(State(state): State<Arc<AppState>>) -> Json<FormBootstrap> {
    Json(FormBootstrap {
        form: state.controller.new_form(today()),
        time_options: state.controller.time_options().to_vec(),
        services: service_options(),
    })
}

#[derive(Serialize)]
pub struct FormResponse {
    form: BookingForm,
}

// POST /api/booking/phone
#[derive(Deserialize)]
pub struct PhoneInput {
    #[serde(default)]
    pub form: BookingForm,
    pub value: String,
    pub cursor: Option<usize>,
}

#[derive(Serialize)]
pub struct PhoneResponse {
    form: BookingForm,
    cursor: usize,
}

pub async fn phone_input(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<PhoneInput>,
) -> Json<PhoneResponse> {
    let PhoneInput { mut form, value, cursor } = payload;
    let cursor = cursor.unwrap_or_else(|| value.chars().count());
    let cursor = state.controller.on_phone_input(&mut form, &value, cursor);
    Json(PhoneResponse { form, cursor })
}

// POST /api/booking/service
#[derive(Deserialize)]
pub struct ServiceInput {
    #[serde(default)]
    pub form: BookingForm,
    pub value: String,
}

pub async fn service_change(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ServiceInput>,
) -> Json<FormResponse> {
    let ServiceInput { mut form, value } = payload;
    state.controller.on_service_change(&mut form, &value);
    Json(FormResponse { form })
}

// POST /api/booking/field
#[derive(Deserialize)]
pub struct FieldInput {
    #[serde(default)]
    pub form: BookingForm,
    pub field: FieldId,
    pub value: String,
}

pub async fn field_input(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<FieldInput>,
) -> Result<Json<FormResponse>, AppError> {
    let FieldInput { mut form, field, value } = payload;
    state.controller.on_field_input(&mut form, field, &value)?;
    Ok(Json(FormResponse { form }))
}

// POST /api/booking/submit
#[derive(Deserialize)]
pub struct SubmitInput {
    pub form: BookingForm,
    pub channel: Channel,
}

#[derive(Serialize)]
pub struct SubmitResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub navigation: Option<Navigation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<FieldError>,
    pub form: BookingForm,
}

#[derive(Serialize)]
pub struct FieldError {
    pub field: FieldId,
    pub message: String,
}

impl From<ValidationError> for FieldError {
    fn from(e: ValidationError) -> Self {
        Self {
            field: e.field,
            message: e.message,
        }
    }
}

pub async fn submit(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<SubmitInput>,
) -> Response {
    let SubmitInput { mut form, channel } = payload;

    match state.dispatcher.dispatch(&mut form, channel, today()) {
        Ok(navigation) => Json(SubmitResponse {
            success: true,
            navigation: Some(navigation),
            error: None,
            form,
        })
        .into_response(),
        Err(e) => {
            tracing::warn!(channel = channel.as_str(), field = %e.field, "booking rejected");
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(SubmitResponse {
                    success: false,
                    navigation: None,
                    error: Some(e.into()),
                    form,
                }),
            )
                .into_response()
        }
    }
}
