use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::models::{
    FavoriteResponse, Firm, FirmDetail, FirmId, LoginState, NoteRequest, NoteResponse,
};
use crate::session::FavoriteToggle;
use crate::state::AppState;

/// POST /api/firms/{id}/view - Open a firm's details (recorded as recently viewed)
pub async fn view_firm(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<FirmDetail>, (StatusCode, String)> {
    let id = FirmId::from(id.as_str());
    let mut session = state.session.lock();
    let firm = session.select_firm(&id).ok_or_else(|| not_found(&id))?;
    Ok(Json(FirmDetail {
        favorited: session.is_favorite(&id),
        note: session.note(&id).map(str::to_string),
        firm,
    }))
}

/// POST /api/firms/{id}/favorite - Star or unstar a firm
pub async fn toggle_favorite(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<FavoriteResponse>, (StatusCode, String)> {
    let id = FirmId::from(id.as_str());
    let mut session = state.session.lock();
    let (favorited, applied) = match session.toggle_favorite(&id) {
        FavoriteToggle::Starred => (true, true),
        FavoriteToggle::Unstarred => (false, true),
        FavoriteToggle::Suppressed => (session.is_favorite(&id), false),
        FavoriteToggle::UnknownFirm => return Err(not_found(&id)),
    };
    Ok(Json(FavoriteResponse {
        id: id.to_string(),
        favorited,
        applied,
    }))
}

/// GET /api/firms/{id}/note
pub async fn get_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<NoteResponse> {
    let id = FirmId::from(id.as_str());
    let session = state.session.lock();
    Json(NoteResponse {
        text: session.note(&id).unwrap_or_default().to_string(),
        editable: session.is_favorite(&id),
        id: id.to_string(),
    })
}

/// PUT /api/firms/{id}/note - Save the private note of a shortlisted firm
pub async fn set_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<NoteRequest>,
) -> Result<Json<NoteResponse>, (StatusCode, String)> {
    let id = FirmId::from(id.as_str());
    let mut session = state.session.lock();
    if !session.set_note(&id, &req.text) {
        return Err((
            StatusCode::CONFLICT,
            "Notes can only be added to shortlisted firms".to_string(),
        ));
    }
    Ok(Json(NoteResponse {
        id: id.to_string(),
        text: req.text,
        editable: true,
    }))
}

/// GET /api/favorites - The shortlist in starring order
pub async fn list_favorites(State(state): State<AppState>) -> Json<Vec<Firm>> {
    Json(state.session.lock().favorites().firms().to_vec())
}

/// GET /api/recent - Recently viewed firms, newest first
pub async fn list_recent(State(state): State<AppState>) -> Json<Vec<Firm>> {
    Json(state.session.lock().recently_viewed().to_vec())
}

/// PUT /api/session/login - Login stub
pub async fn set_login(
    State(state): State<AppState>,
    Json(req): Json<LoginState>,
) -> Json<LoginState> {
    let mut session = state.session.lock();
    session.set_logged_in(req.logged_in);
    Json(LoginState {
        logged_in: session.logged_in(),
    })
}

fn not_found(id: &FirmId) -> (StatusCode, String) {
    (StatusCode::NOT_FOUND, format!("Firm not found: {id}"))
}
