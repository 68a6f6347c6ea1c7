use axum::{extract::State, Json};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};

pub mod request;
pub mod response;

use crate::response::{ApiResponse, IntoApiResponse};
use crate::ApiState;

use self::request::CredentialsRequest;
use self::response::{GetSessionResponse, SessionResponse};

/// Sign in with email and password
#[utoipa::path(
        post,
        path = "/auth/sign-in",
        request_body = CredentialsRequest,
        responses(
            (status = 200, description = "Sign in successfully", body = SessionResponse),
            (status = 401, description = "Invalid email or password")
        )
    )]
pub async fn sign_in(
    State(state): State<ApiState>,
    Json(body): Json<CredentialsRequest>,
) -> ApiResponse<Json<SessionResponse>> {
    let session = state
        .backend
        .sign_in(&body.email, &body.password)
        .await
        .into_response("failed to sign in")?;

    Ok(Json(SessionResponse::from(session)))
}

/// Create an account and sign it in
#[utoipa::path(
    post,
    path = "/auth/sign-up",
    request_body = CredentialsRequest,
    responses(
        (status = 200, description = "Sign up successfully", body = SessionResponse),
        (status = 401, description = "An account with this email already exists")
    )
)]
pub async fn sign_up(
    State(state): State<ApiState>,
    Json(body): Json<CredentialsRequest>,
) -> ApiResponse<Json<SessionResponse>> {
    let session = state
        .backend
        .sign_up(&body.email, &body.password)
        .await
        .into_response("failed to sign up")?;

    Ok(Json(SessionResponse::from(session)))
}

/// Revoke the bearer session
#[utoipa::path(
    post,
    path = "/auth/sign-out",
    responses(
        (status = 200, description = "Sign out successfully")
    )
)]
pub async fn sign_out(
    State(state): State<ApiState>,
    TypedHeader(bearer): TypedHeader<Authorization<Bearer>>,
) -> ApiResponse<()> {
    state
        .backend
        .sign_out(bearer.token())
        .await
        .into_response("failed to sign out")?;

    Ok(())
}

/// Show the session behind the bearer token, if any
#[utoipa::path(
    get,
    path = "/auth/session",
    responses(
        (status = 200, description = "Look up the session successfully", body = GetSessionResponse)
    )
)]
pub async fn get_session(
    State(state): State<ApiState>,
    TypedHeader(bearer): TypedHeader<Authorization<Bearer>>,
) -> ApiResponse<Json<GetSessionResponse>> {
    let session = state
        .backend
        .session(bearer.token())
        .await
        .into_response("failed to look up session")?;

    Ok(Json(GetSessionResponse {
        session: session.map(SessionResponse::from),
    }))
}
