//! Theme preference API endpoints

use crate::error::ApiResult;
use crate::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use finboard_core::{Theme, ThemeContext};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeResponse {
    pub theme: Theme,
    pub is_dark_mode: bool,
}

impl From<&ThemeContext> for ThemeResponse {
    fn from(ctx: &ThemeContext) -> Self {
        Self {
            theme: ctx.theme(),
            is_dark_mode: ctx.is_dark_mode(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SetThemeRequest {
    pub theme: String,
}

/// Get the active theme
pub async fn api_theme(State(state): State<AppState>) -> Json<ThemeResponse> {
    Json(ThemeResponse::from(&*state.theme.read().await))
}

/// Set the theme, e.g. `{"theme": "light"}`
pub async fn api_set_theme(
    State(state): State<AppState>,
    payload: Result<Json<SetThemeRequest>, JsonRejection>,
) -> ApiResult<Json<ThemeResponse>> {
    let Json(request) = payload?;
    let mut ctx = state.theme.write().await;
    ctx.set_named(&request.theme).await?;
    Ok(Json(ThemeResponse::from(&*ctx)))
}

pub async fn api_toggle_theme(State(state): State<AppState>) -> ApiResult<Json<ThemeResponse>> {
    let mut ctx = state.theme.write().await;
    ctx.toggle().await?;
    Ok(Json(ThemeResponse::from(&*ctx)))
}
