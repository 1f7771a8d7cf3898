use crate::errors::AppError;
use crate::models::AlarmRecord;
use crate::state::AppState;
use crate::ui::render_index;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse},
    Json,
};
use chrono::Local;
use tracing::{debug, info};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let alarm = *state.alarm.lock().await;
    Html(render_index(&alarm))
}

pub async fn get_alarm(State(state): State<AppState>) -> Json<AlarmRecord> {
    let alarm = *state.alarm.lock().await;
    debug!("get alarm={alarm:?}");
    Json(alarm)
}

pub async fn put_alarm(
    State(state): State<AppState>,
    payload: Result<Json<AlarmRecord>, JsonRejection>,
) -> Result<Json<AlarmRecord>, AppError> {
    let Json(alarm) = payload?;
    if alarm.hour > 23 {
        return Err(AppError::bad_request("hour must be between 0 and 23"));
    }
    if alarm.minute > 59 {
        return Err(AppError::bad_request("minute must be between 0 and 59"));
    }

    let mut current = state.alarm.lock().await;
    *current = alarm;

    match alarm.next_occurrence(Local::now()) {
        Some(when) if alarm.enabled => info!("set alarm={alarm:?} next={when}"),
        _ => info!("set alarm={alarm:?}"),
    }

    Ok(Json(*current))
}

pub async fn method_not_allowed() -> impl IntoResponse {
    let err = AppError {
        status: StatusCode::METHOD_NOT_ALLOWED,
        message: "method not allowed".into(),
    };
    ([(header::ALLOW, "GET, PUT")], err)
}
