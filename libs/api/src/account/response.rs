use backend::Session;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct SessionResponse {
    pub token: String,
    pub email: String,
}

impl From<Session> for SessionResponse {
    fn from(session: Session) -> Self {
        Self {
            token: session.token,
            email: session.email,
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct GetSessionResponse {
    pub session: Option<SessionResponse>,
}
