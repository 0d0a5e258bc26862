use crate::auth;
use crate::errors::AppError;
use crate::models::{
    AppData, ItemResponse, LoginRequest, NewItemRequest, RegisterRequest, SessionResponse,
    TrackedItem, UpdateItemRequest, UpdatePasswordRequest, UpdateProfileRequest, UserProfile,
};
use crate::state::AppState;
use crate::storage::persist_data;
use crate::ui::render_index;
use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::Html,
    Json,
};
use chrono::{DateTime, Utc};
use tracing::debug;
use uuid::Uuid;

pub async fn index() -> Html<String> {
    Html(render_index())
}

pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<Json<SessionResponse>, AppError> {
    let now = Utc::now();
    let mut data = state.data.lock().await;
    let (token, user) = auth::register(
        &mut data,
        &payload.name,
        &payload.email,
        &payload.password,
        now,
    )?;
    persist_data(&state.data_path, &data).await?;

    Ok(Json(SessionResponse { token, user }))
}

pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<SessionResponse>, AppError> {
    let now = Utc::now();
    let mut data = state.data.lock().await;
    let (token, user) = auth::login(&mut data, &payload.email, &payload.password, now)?;
    persist_data(&state.data_path, &data).await?;

    Ok(Json(SessionResponse { token, user }))
}

pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<StatusCode, AppError> {
    let token = bearer_token(&headers)?.to_string();
    let mut data = state.data.lock().await;
    auth::logout(&mut data, &token);
    persist_data(&state.data_path, &data).await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<UserProfile>, AppError> {
    let data = state.data.lock().await;
    let user_id = authorize(&data, &headers)?;
    let profile = data
        .user_by_id(&user_id)
        .map(UserProfile::from)
        .ok_or_else(|| AppError::not_found("no such user"))?;

    Ok(Json(profile))
}

pub async fn update_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<UpdateProfileRequest>,
) -> Result<Json<UserProfile>, AppError> {
    let mut data = state.data.lock().await;
    let user_id = authorize(&data, &headers)?;
    let profile = auth::update_profile(
        &mut data,
        &user_id,
        payload.name.as_deref(),
        payload.email.as_deref(),
    )?;
    persist_data(&state.data_path, &data).await?;

    Ok(Json(profile))
}

pub async fn update_password(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<UpdatePasswordRequest>,
) -> Result<StatusCode, AppError> {
    let mut data = state.data.lock().await;
    let user_id = authorize(&data, &headers)?;
    auth::update_password(
        &mut data,
        &user_id,
        &payload.current_password,
        &payload.new_password,
    )?;
    persist_data(&state.data_path, &data).await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_items(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<ItemResponse>>, AppError> {
    let now = Utc::now();
    let data = state.data.lock().await;
    let user_id = authorize(&data, &headers)?;
    let items = data
        .items_for(&user_id)
        .iter()
        .map(|item| to_item_response(item, now))
        .collect();

    Ok(Json(items))
}

pub async fn create_item(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<NewItemRequest>,
) -> Result<Json<ItemResponse>, AppError> {
    let name = clean_name(&payload.name)?;
    check_target_days(payload.target_days)?;

    let now = Utc::now();
    let mut data = state.data.lock().await;
    let user_id = authorize(&data, &headers)?;
    let item = TrackedItem {
        id: Uuid::new_v4().to_string(),
        name,
        start_date: now,
        description: clean_optional(payload.description),
        color: clean_optional(payload.color),
        target_days: payload.target_days,
    };
    let response = to_item_response(&item, now);
    data.insert_item(&user_id, item);
    persist_data(&state.data_path, &data).await?;

    Ok(Json(response))
}

pub async fn update_item(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(item_id): Path<String>,
    Json(payload): Json<UpdateItemRequest>,
) -> Result<Json<ItemResponse>, AppError> {
    if let Some(name) = payload.name.as_deref() {
        clean_name(name)?;
    }
    check_target_days(payload.target_days)?;

    let now = Utc::now();
    let mut data = state.data.lock().await;
    let user_id = authorize(&data, &headers)?;
    let item = data
        .item_mut(&user_id, &item_id)
        .ok_or_else(|| AppError::not_found("no such item"))?;

    if let Some(name) = payload.name {
        item.name = name.trim().to_string();
    }
    if let Some(description) = payload.description {
        item.description = clean_optional(Some(description));
    }
    if let Some(color) = payload.color {
        item.color = clean_optional(Some(color));
    }
    if let Some(days) = payload.target_days {
        item.target_days = Some(days);
    }
    let response = to_item_response(item, now);
    persist_data(&state.data_path, &data).await?;

    Ok(Json(response))
}

pub async fn delete_item(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(item_id): Path<String>,
) -> Result<StatusCode, AppError> {
    let mut data = state.data.lock().await;
    let user_id = authorize(&data, &headers)?;
    data.remove_item(&user_id, &item_id)
        .ok_or_else(|| AppError::not_found("no such item"))?;
    persist_data(&state.data_path, &data).await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn reset_item(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(item_id): Path<String>,
) -> Result<Json<ItemResponse>, AppError> {
    adjust_item(&state, &headers, &item_id, |item, now| {
        item.reset(now);
    })
    .await
}

pub async fn increment_item(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(item_id): Path<String>,
) -> Result<Json<ItemResponse>, AppError> {
    adjust_item(&state, &headers, &item_id, |item, _now| {
        item.increment_days();
    })
    .await
}

pub async fn decrement_item(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(item_id): Path<String>,
) -> Result<Json<ItemResponse>, AppError> {
    adjust_item(&state, &headers, &item_id, |item, now| {
        if !item.decrement_days(now) {
            debug!("decrement clamped for item {}", item.id);
        }
    })
    .await
}

async fn adjust_item(
    state: &AppState,
    headers: &HeaderMap,
    item_id: &str,
    apply: impl FnOnce(&mut TrackedItem, DateTime<Utc>),
) -> Result<Json<ItemResponse>, AppError> {
    let now = Utc::now();
    let mut data = state.data.lock().await;
    let user_id = authorize(&data, headers)?;
    let item = data
        .item_mut(&user_id, item_id)
        .ok_or_else(|| AppError::not_found("no such item"))?;
    apply(item, now);
    let response = to_item_response(item, now);
    persist_data(&state.data_path, &data).await?;

    Ok(Json(response))
}

fn to_item_response(item: &TrackedItem, now: DateTime<Utc>) -> ItemResponse {
    let progress = item.progress_at(now);
    ItemResponse {
        id: item.id.clone(),
        name: item.name.clone(),
        start_date: item.start_date,
        description: item.description.clone(),
        color: item.color.clone(),
        target_days: item.target_days,
        elapsed_days: progress.elapsed_days,
        percentage: progress.percentage,
    }
}

fn authorize(data: &AppData, headers: &HeaderMap) -> Result<String, AppError> {
    let token = bearer_token(headers)?;
    auth::session_user_id(data, token)
}

fn bearer_token(headers: &HeaderMap) -> Result<&str, AppError> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or_else(|| AppError::unauthorized("missing bearer token"))
}

fn clean_name(name: &str) -> Result<String, AppError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::bad_request("name must not be empty"));
    }
    Ok(name.to_string())
}

fn check_target_days(target_days: Option<u32>) -> Result<(), AppError> {
    if target_days == Some(0) {
        return Err(AppError::bad_request("target days must be positive"));
    }
    Ok(())
}

fn clean_optional(text: Option<String>) -> Option<String> {
    text.map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
