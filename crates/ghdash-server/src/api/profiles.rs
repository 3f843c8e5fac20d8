use axum::{
    extract::{Path, State},
    Extension, Json,
};
use ghdash_scraper::{Profile, ProfileDetails};

use crate::middleware::RequestId;

use super::{map_scrape_error, ApiError, ApiResponse, AppState, ResponseMeta};

/// `GET /api/v1/profiles/{username}`: scrapes the profile page on request.
///
/// No caching: every call is one upstream round trip, so the response always
/// reflects the live page.
pub(super) async fn get_profile(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(username): Path<String>,
) -> Result<Json<ApiResponse<Profile>>, ApiError> {
    let profile = state
        .client
        .fetch_profile(&username)
        .await
        .map_err(|e| map_scrape_error(req_id.0.clone(), &e))?;

    Ok(Json(ApiResponse {
        data: profile,
        meta: ResponseMeta::new(req_id.0),
    }))
}

/// `GET /api/v1/profiles/{username}/pinned`: pinned cards and repo count.
pub(super) async fn get_profile_pinned(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(username): Path<String>,
) -> Result<Json<ApiResponse<ProfileDetails>>, ApiError> {
    let details = state
        .client
        .fetch_profile_details(&username)
        .await
        .map_err(|e| map_scrape_error(req_id.0.clone(), &e))?;

    Ok(Json(ApiResponse {
        data: details,
        meta: ResponseMeta::new(req_id.0),
    }))
}
