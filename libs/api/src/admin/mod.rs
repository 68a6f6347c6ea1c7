use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::Utc;
use entity::post::BlogPost;
use entity::work::WorkItem;

pub mod request;

use crate::response::{ApiResponse, IntoApiResponse};
use crate::{ApiError, ApiState};

use self::request::{
    DeleteParams, PublishRequest, SavePostRequest, SaveWorkRequest,
};

/// List every post including drafts
#[utoipa::path(
        get,
        path = "/admin/posts",
        responses(
            (status = 200, description = "List every post successfully"),
            (status = 401, description = "Missing or invalid session token")
        )
    )]
pub async fn get_posts(
    State(state): State<ApiState>,
) -> ApiResponse<Json<Vec<BlogPost>>> {
    let posts = state
        .backend
        .all_posts()
        .await
        .into_response("failed to fetch posts")?;

    Ok(Json(posts))
}

/// Create a post
#[utoipa::path(
    post,
    path = "/admin/posts",
    request_body = SavePostRequest,
    responses(
        (status = 200, description = "Create a post successfully"),
        (status = 401, description = "Missing or invalid session token")
    )
)]
pub async fn create_post(
    State(state): State<ApiState>,
    Json(body): Json<SavePostRequest>,
) -> ApiResponse<Json<BlogPost>> {
    let id = body
        .id
        .clone()
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
    let mut post = body.into_post(id);
    post.prepare_save(Utc::now());

    state
        .backend
        .insert_post(post.clone())
        .await
        .into_response("failed to create post")?;

    Ok(Json(post))
}

/// Update a post
#[utoipa::path(
    put,
    path = "/admin/posts/:id",
    request_body = SavePostRequest,
    responses(
        (status = 200, description = "Update a post successfully"),
        (status = 401, description = "Missing or invalid session token")
    ),
    params(
        ("id", description = "post id"),
    )
)]
pub async fn update_post(
    State(state): State<ApiState>,
    Path(id): Path<String>,
    Json(body): Json<SavePostRequest>,
) -> ApiResponse<Json<BlogPost>> {
    let mut post = body.into_post(id);
    post.prepare_save(Utc::now());

    state
        .backend
        .update_post(post.clone())
        .await
        .into_response("failed to update post")?;

    Ok(Json(post))
}

/// Publish or unpublish a post
///
/// The caller states the target value instead of asking the server to
/// flip the current one, so a stale listing cannot double-toggle.
#[utoipa::path(
    patch,
    path = "/admin/posts/:id/published",
    request_body = PublishRequest,
    responses(
        (status = 200, description = "Update the published flag successfully"),
        (status = 401, description = "Missing or invalid session token")
    ),
    params(
        ("id", description = "post id"),
    )
)]
pub async fn set_post_published(
    State(state): State<ApiState>,
    Path(id): Path<String>,
    Json(body): Json<PublishRequest>,
) -> ApiResponse<()> {
    state
        .backend
        .set_post_published(&id, body.published)
        .await
        .into_response("failed to update post")?;

    Ok(())
}

/// Delete a post, requires confirm=true
#[utoipa::path(
    delete,
    path = "/admin/posts/:id",
    responses(
        (status = 200, description = "Delete a post successfully"),
        (status = 400, description = "Deletion was not confirmed"),
        (status = 401, description = "Missing or invalid session token")
    ),
    params(
        ("id", description = "post id"),
        DeleteParams,
    )
)]
pub async fn delete_post(
    State(state): State<ApiState>,
    Path(id): Path<String>,
    Query(params): Query<DeleteParams>,
) -> ApiResponse<()> {
    if params.confirm != Some(true) {
        return Err(ApiError::ClientError(
            "deletion requires confirm=true".to_string(),
        ));
    }

    state
        .backend
        .delete_post(&id)
        .await
        .into_response("failed to delete post")?;

    Ok(())
}

/// List every work item including drafts
#[utoipa::path(
        get,
        path = "/admin/works",
        responses(
            (status = 200, description = "List every work item successfully"),
            (status = 401, description = "Missing or invalid session token")
        )
    )]
pub async fn get_works(
    State(state): State<ApiState>,
) -> ApiResponse<Json<Vec<WorkItem>>> {
    let works = state
        .backend
        .all_works()
        .await
        .into_response("failed to fetch works")?;

    Ok(Json(works))
}

/// Create a work item
#[utoipa::path(
    post,
    path = "/admin/works",
    request_body = SaveWorkRequest,
    responses(
        (status = 200, description = "Create a work item successfully"),
        (status = 401, description = "Missing or invalid session token")
    )
)]
pub async fn create_work(
    State(state): State<ApiState>,
    Json(body): Json<SaveWorkRequest>,
) -> ApiResponse<Json<WorkItem>> {
    let id = body
        .id
        .clone()
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

    // New works append at the end of the curated ordering.
    let display_order = match body.display_order {
        Some(order) => order,
        None => state
            .backend
            .count_works()
            .await
            .into_response("failed to count works")? as i32,
    };

    let mut work = body.into_work(id, display_order);
    work.prepare_save(Utc::now());

    state
        .backend
        .insert_work(work.clone())
        .await
        .into_response("failed to create work")?;

    Ok(Json(work))
}

/// Update a work item
#[utoipa::path(
    put,
    path = "/admin/works/:id",
    request_body = SaveWorkRequest,
    responses(
        (status = 200, description = "Update a work item successfully"),
        (status = 401, description = "Missing or invalid session token")
    ),
    params(
        ("id", description = "work item id"),
    )
)]
pub async fn update_work(
    State(state): State<ApiState>,
    Path(id): Path<String>,
    Json(body): Json<SaveWorkRequest>,
) -> ApiResponse<Json<WorkItem>> {
    let stored = state
        .backend
        .all_works()
        .await
        .into_response("failed to fetch works")?
        .into_iter()
        .find(|w| w.id == id)
        .map(|w| w.display_order);

    let display_order = keep_order(body.display_order, stored);
    let mut work = body.into_work(id, display_order);
    work.prepare_save(Utc::now());

    state
        .backend
        .update_work(work.clone())
        .await
        .into_response("failed to update work")?;

    Ok(Json(work))
}

/// Publish or unpublish a work item
#[utoipa::path(
    patch,
    path = "/admin/works/:id/published",
    request_body = PublishRequest,
    responses(
        (status = 200, description = "Update the published flag successfully"),
        (status = 401, description = "Missing or invalid session token")
    ),
    params(
        ("id", description = "work item id"),
    )
)]
pub async fn set_work_published(
    State(state): State<ApiState>,
    Path(id): Path<String>,
    Json(body): Json<PublishRequest>,
) -> ApiResponse<()> {
    state
        .backend
        .set_work_published(&id, body.published)
        .await
        .into_response("failed to update work")?;

    Ok(())
}

/// Delete a work item, requires confirm=true
#[utoipa::path(
    delete,
    path = "/admin/works/:id",
    responses(
        (status = 200, description = "Delete a work item successfully"),
        (status = 400, description = "Deletion was not confirmed"),
        (status = 401, description = "Missing or invalid session token")
    ),
    params(
        ("id", description = "work item id"),
        DeleteParams,
    )
)]
pub async fn delete_work(
    State(state): State<ApiState>,
    Path(id): Path<String>,
    Query(params): Query<DeleteParams>,
) -> ApiResponse<()> {
    if params.confirm != Some(true) {
        return Err(ApiError::ClientError(
            "deletion requires confirm=true".to_string(),
        ));
    }

    state
        .backend
        .delete_work(&id)
        .await
        .into_response("failed to delete work")?;

    Ok(())
}

/// An edit that carries no ordering keeps the stored one instead of
/// re-sorting the item to the front.
fn keep_order(requested: Option<i32>, stored: Option<i32>) -> i32 {
    requested.or(stored).unwrap_or_default()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn edit_without_an_order_keeps_the_stored_one() {
        // Arrange / Act / Assert
        assert_eq!(keep_order(None, Some(2)), 2);
    }

    #[test]
    fn edit_with_an_order_wins_over_the_stored_one() {
        assert_eq!(keep_order(Some(5), Some(2)), 5);
    }

    #[test]
    fn unknown_row_without_an_order_lands_at_the_front() {
        assert_eq!(keep_order(None, None), 0);
    }
}
