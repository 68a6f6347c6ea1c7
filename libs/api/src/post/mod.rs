use axum::{
    extract::{Path, State},
    Json,
};

pub mod response;

use crate::response::ApiResponse;
use crate::{ApiError, ApiState};

use self::response::{
    GetPostResponse, GetPostsResponse, PostDetail, PostSummary,
    SeoResponse,
};

/// List published posts
#[utoipa::path(
        get,
        path = "/posts",
        responses(
            (status = 200, description = "List published posts successfully", body = [GetPostsResponse])
        )
    )]
pub async fn get_posts(
    State(state): State<ApiState>,
) -> ApiResponse<Json<GetPostsResponse>> {
    let posts = site::published_posts(state.backend.as_ref()).await;

    let response = Json(GetPostsResponse {
        posts: posts.into_iter().map(PostSummary::from).collect(),
    });

    Ok(response)
}

/// Show a published post with its resolved SEO tags
#[utoipa::path(
    get,
    path = "/posts/:slug",
    responses(
        (status = 200, description = "Show a post successfully", body = [GetPostResponse]),
        (status = 404, description = "No published post with this slug")
    ),
    params(
        ("slug", description = "post slug, falls back to the id"),
    )
)]
pub async fn get_post(
    State(state): State<ApiState>,
    Path(slug): Path<String>,
) -> ApiResponse<Json<GetPostResponse>> {
    let posts = site::published_posts(state.backend.as_ref()).await;

    let Some(post) = posts
        .into_iter()
        .find(|p| p.slug == slug || p.id == slug)
    else {
        return Err(ApiError::NotFoundError(format!(
            "no published post {}",
            slug
        )));
    };

    let seo = post.seo(&state.config.site.base_url);

    Ok(Json(GetPostResponse {
        post: PostDetail::from(post),
        seo: SeoResponse::from(seo),
    }))
}
