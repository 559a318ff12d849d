//! Session Views Handler

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use mesa_app::navigation::{Access, View, resolve_access};

use crate::{auth::gate::auth_state, extensions::*};

/// Access decision for one view
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ViewAccessResponse {
    pub view: String,
    pub path: String,

    /// `render` or `redirect`
    pub access: String,

    /// Where the client is sent instead, when redirected
    pub location: Option<String>,
}

/// Session Views Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SessionViewsResponse {
    pub authenticated: bool,
    pub role: Option<String>,
    pub views: Vec<ViewAccessResponse>,
}

/// Session Views Handler
///
/// Reports which views the caller may open.
#[endpoint(tags("auth"), summary = "Session Views", security(("bearer_auth" = [])))]
pub(crate) async fn handler(depot: &mut Depot) -> Json<SessionViewsResponse> {
    let auth = auth_state(depot);

    let views = View::ALL
        .into_iter()
        .map(|view| {
            let (access, location) = match resolve_access(auth, view) {
                Access::Render => ("render", None),
                Access::Loading => ("loading", None),
                Access::Redirect(redirect) => ("redirect", Some(redirect.location().to_string())),
            };

            ViewAccessResponse {
                view: view.to_string(),
                path: view.path().to_string(),
                access: access.to_string(),
                location,
            }
        })
        .collect();

    let principal = depot.principal();

    Json(SessionViewsResponse {
        authenticated: principal.is_some(),
        role: principal.map(|principal| principal.role.to_string()),
        views,
    })
}
