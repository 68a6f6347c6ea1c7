use axum::{
    extract::{Path, State},
    Json,
};

pub mod response;

use crate::response::ApiResponse;
use crate::{ApiError, ApiState};

use self::response::{GetWorkResponse, GetWorksResponse, WorkResponse};

/// List published works in curated order
#[utoipa::path(
        get,
        path = "/works",
        responses(
            (status = 200, description = "List published works successfully", body = [GetWorksResponse])
        )
    )]
pub async fn get_works(
    State(state): State<ApiState>,
) -> ApiResponse<Json<GetWorksResponse>> {
    let works = site::published_works(state.backend.as_ref()).await;

    let response = Json(GetWorksResponse {
        works: works.into_iter().map(WorkResponse::from).collect(),
    });

    Ok(response)
}

/// Show a published work
#[utoipa::path(
    get,
    path = "/works/:slug",
    responses(
        (status = 200, description = "Show a work successfully", body = [GetWorkResponse]),
        (status = 404, description = "No published work with this slug")
    ),
    params(
        ("slug", description = "work slug, falls back to the id"),
    )
)]
pub async fn get_work(
    State(state): State<ApiState>,
    Path(slug): Path<String>,
) -> ApiResponse<Json<GetWorkResponse>> {
    let works = site::published_works(state.backend.as_ref()).await;

    let Some(work) = works
        .into_iter()
        .find(|w| w.slug == slug || w.id == slug)
    else {
        return Err(ApiError::NotFoundError(format!(
            "no published work {}",
            slug
        )));
    };

    Ok(Json(GetWorkResponse {
        work: WorkResponse::from(work),
    }))
}
