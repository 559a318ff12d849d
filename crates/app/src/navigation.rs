//! Role-gated navigation.
//!
//! Every protected view declares who may see it. [`resolve_access`] turns the
//! current authentication state into a decision: keep waiting, render, or
//! redirect somewhere safe.

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::Serialize;

use crate::auth::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    Menu,
    Admin,
    Cart,
    History,
    Tracking,
}

impl View {
    pub const ALL: [Self; 5] = [
        Self::Menu,
        Self::Admin,
        Self::Cart,
        Self::History,
        Self::Tracking,
    ];

    /// Role the view is reserved for; `None` means any signed-in user.
    #[must_use]
    pub const fn required_role(self) -> Option<Role> {
        match self {
            Self::Menu => None,
            Self::Admin => Some(Role::Admin),
            Self::Cart | Self::History | Self::Tracking => Some(Role::User),
        }
    }

    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Menu => "/menu",
            Self::Admin => "/admin",
            Self::Cart => "/cart",
            Self::History => "/history",
            Self::Tracking => "/tracking",
        }
    }
}

impl Display for View {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.path()[1..])
    }
}

/// What is known about the visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthState {
    /// Still waiting on the identity service.
    Resolving,
    Anonymous,
    Authenticated(Role),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Redirect {
    Login,
    Home,
}

impl Redirect {
    #[must_use]
    pub const fn location(self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Home => "/",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Loading,
    Render,
    Redirect(Redirect),
}

#[must_use]
pub fn resolve_access(auth: AuthState, view: View) -> Access {
    match (auth, view.required_role()) {
        (AuthState::Resolving, _) => Access::Loading,
        (AuthState::Anonymous, _) => Access::Redirect(Redirect::Login),
        (AuthState::Authenticated(role), Some(required)) if role != required => {
            Access::Redirect(Redirect::Home)
        }
        (AuthState::Authenticated(_), _) => Access::Render,
    }
}

/// Views `role` can open.
#[must_use]
pub fn reachable_views(role: Role) -> Vec<View> {
    View::ALL
        .into_iter()
        .filter(|view| resolve_access(AuthState::Authenticated(role), *view) == Access::Render)
        .collect()
}
