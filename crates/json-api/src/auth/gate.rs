//! View gates.
//!
//! Each protected route group is wrapped in a [`ViewGate`] for the view it
//! serves. Anonymous callers get 401 with `Location: /login`; callers whose
//! role does not match get 403 with `Location: /`.

use salvo::{http::header::LOCATION, prelude::*};
use tracing::warn;

use mesa_app::navigation::{Access, AuthState, Redirect, View, resolve_access};

use crate::extensions::*;

#[derive(Debug, Clone, Copy)]
pub(crate) struct ViewGate {
    view: View,
}

pub(crate) fn require(view: View) -> ViewGate {
    ViewGate { view }
}

/// What the auth middleware learned about the caller.
pub(crate) fn auth_state(depot: &Depot) -> AuthState {
    depot.principal().map_or(AuthState::Anonymous, |principal| {
        AuthState::Authenticated(principal.role)
    })
}

fn redirect_error(redirect: Redirect) -> StatusError {
    match redirect {
        Redirect::Login => StatusError::unauthorized().brief("Sign in required"),
        Redirect::Home => StatusError::forbidden().brief("Not available for your role"),
    }
}

#[handler]
impl ViewGate {
    async fn handle(&self, depot: &mut Depot, res: &mut Response, ctrl: &mut FlowCtrl) {
        match resolve_access(auth_state(depot), self.view) {
            Access::Render => {}
            Access::Loading => {
                res.render(StatusError::service_unavailable());
                ctrl.skip_rest();
            }
            Access::Redirect(redirect) => {
                if let Err(source) = res.add_header(LOCATION, redirect.location(), true) {
                    warn!("failed to set redirect location: {source}");
                }

                res.render(redirect_error(redirect));
                ctrl.skip_rest();
            }
        }
    }
}
