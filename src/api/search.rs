use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;

use crate::models::{
    FilterDimension, FilterToggleRequest, OptionsResponse, ResultsView, SearchRequest,
    SuggestParams,
};
use crate::search::filter::{Country, Stage};
use crate::search::industry::Industry;
use crate::search::range::RangeBucket;
use crate::state::AppState;

/// GET /api/options - Industry picker and sidebar choices
pub async fn options() -> Json<OptionsResponse> {
    Json(OptionsResponse::all())
}

/// POST /api/search - Fetch the catalog and narrow it to an industry.
///
/// The session lock is released while the catalog is fetched; if another search starts in
/// the meantime this one's result is discarded and the newer state is returned.
pub async fn search(
    State(state): State<AppState>,
    Json(req): Json<SearchRequest>,
) -> Result<Json<ResultsView>, (StatusCode, String)> {
    let industry: Industry = req.industry.parse().map_err(bad_request)?;

    let (ticket, source) = {
        let mut session = state.session.lock();
        let ticket = session.begin_search(industry, &req.free_text);
        (ticket, session.catalog_source())
    };

    let fetched = source.fetch().await;

    let mut session = state.session.lock();
    if !session.complete_search(ticket, fetched) {
        tracing::debug!("Search for {industry} superseded before its fetch resolved");
    }
    Ok(Json(session.view()))
}

/// GET /api/results - Current results with filters applied
pub async fn results(State(state): State<AppState>) -> Json<ResultsView> {
    Json(state.session.lock().view())
}

/// GET /api/suggest?q=..&industry=.. - Autosuggest for the custom industry box
pub async fn suggest(
    State(state): State<AppState>,
    Query(params): Query<SuggestParams>,
) -> Result<Json<Vec<String>>, (StatusCode, String)> {
    let industry: Industry = match params.industry.as_deref() {
        Some(raw) => raw.parse().map_err(bad_request)?,
        None => Industry::Other,
    };
    Ok(Json(state.session.lock().suggest(industry, &params.q)))
}

/// POST /api/filters/toggle - Check or uncheck one sidebar filter
pub async fn toggle_filter(
    State(state): State<AppState>,
    Json(req): Json<FilterToggleRequest>,
) -> Result<Json<ResultsView>, (StatusCode, String)> {
    let mut session = state.session.lock();
    let checked = match req.dimension {
        FilterDimension::Stage => {
            let stage: Stage = req.value.parse().map_err(bad_request)?;
            session.toggle_stage_filter(stage)
        }
        FilterDimension::Country => {
            let country: Country = req.value.parse().map_err(bad_request)?;
            session.toggle_country_filter(country)
        }
        FilterDimension::Range => {
            let range: RangeBucket = req.value.parse().map_err(bad_request)?;
            session.toggle_range_filter(range)
        }
    };
    tracing::debug!("Filter {:?} '{}' checked: {checked}", req.dimension, req.value);
    Ok(Json(session.view()))
}

/// DELETE /api/filters - Reset all sidebar filters
pub async fn clear_filters(State(state): State<AppState>) -> Json<ResultsView> {
    let mut session = state.session.lock();
    session.clear_filters();
    Json(session.view())
}

pub(crate) fn bad_request(message: String) -> (StatusCode, String) {
    (StatusCode::BAD_REQUEST, message)
}
