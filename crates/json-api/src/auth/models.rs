//! Session Models

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use mesa_app::auth::Session;

/// A signed-in session
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SessionResponse {
    /// Bearer token for subsequent requests
    pub token: String,

    pub user_id: String,

    pub email: String,

    /// `user` or `admin`
    pub role: String,
}

impl From<Session> for SessionResponse {
    fn from(session: Session) -> Self {
        SessionResponse {
            token: session.token,
            user_id: session.principal.user_id.into_string(),
            email: session.principal.email,
            role: session.principal.role.to_string(),
        }
    }
}
