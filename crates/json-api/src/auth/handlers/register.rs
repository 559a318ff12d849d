//! Register Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use mesa_app::auth::{Password, Role};

use crate::{
    auth::{errors::into_status_error, models::SessionResponse},
    extensions::*,
    state::State,
};

/// Register Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct RegisterRequest {
    pub email: String,
    pub password: String,

    /// `user` (default) or `admin`
    #[serde(default)]
    pub role: Option<String>,
}

/// Register Handler
///
/// Creates an account and signs it in.
#[endpoint(
    tags("auth"),
    summary = "Register",
    responses(
        (status_code = StatusCode::CREATED, description = "Account created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid email, password or role"),
        (status_code = StatusCode::FORBIDDEN, description = "Admin registration is disabled"),
        (status_code = StatusCode::CONFLICT, description = "Email already registered"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<RegisterRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<SessionResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();

    let role = request
        .role
        .as_deref()
        .map(str::parse::<Role>)
        .transpose()
        .or_400()?
        .unwrap_or_default();

    if role == Role::Admin && !state.allow_admin_signup {
        return Err(StatusError::forbidden().brief("Admin registration is disabled"));
    }

    let session = state
        .app
        .auth
        .register(&request.email, Password::new(request.password), role)
        .await
        .map_err(into_status_error)?;

    info!(user_id = %session.principal.user_id, %role, "registered user");

    res.status_code(StatusCode::CREATED);

    Ok(Json(session.into()))
}
