//! Route guard and shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every navigation passes through [`guard_navigation`]: a protected target
//! visited without a token is replaced by `/login?redirect=<target>`. The
//! check is synchronous and only looks at the current [`AuthState`]; it never
//! fetches the profile.
//!
//! [`RouteGuard`] performs the redirect from an `Effect`, which runs after the
//! matched route has mounted. Protected views are therefore wrapped in
//! [`RequireAuth`] so their content never renders (or fetches) for an
//! anonymous visitor while the redirect is pending.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use super::query::encode_component;
use crate::state::auth::{AuthState, Session};

pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/cvs";
pub const REDIRECT_PARAM: &str = "redirect";
pub const CV_EDIT_PATH: &str = "/cv/edit";
pub const REGISTER_PATH: &str = "/register";

/// Route metadata consumed by the guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteMeta {
    pub path: &'static str,
    pub requires_auth: bool,
}

/// Every route the app mounts. Keep in sync with `app::App`.
pub const ROUTES: &[RouteMeta] = &[
    RouteMeta { path: "/", requires_auth: false },
    RouteMeta { path: HOME_PATH, requires_auth: false },
    RouteMeta { path: LOGIN_PATH, requires_auth: false },
    RouteMeta { path: CV_EDIT_PATH, requires_auth: true },
    RouteMeta { path: REGISTER_PATH, requires_auth: true },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Proceed,
    Redirect(String),
}

/// Path portion of `full_path`: no query, no fragment, no trailing `/`.
fn route_path(full_path: &str) -> &str {
    let end = full_path.find(['?', '#']).unwrap_or(full_path.len());
    let path = &full_path[..end];
    match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    }
}

/// Look up the metadata for the route `full_path` resolves to.
pub fn route_meta(full_path: &str) -> Option<&'static RouteMeta> {
    let path = route_path(full_path);
    ROUTES.iter().find(|route| route.path == path)
}

pub fn requires_auth(full_path: &str) -> bool {
    route_meta(full_path).is_some_and(|route| route.requires_auth)
}

/// Login URL that returns to `full_path` afterwards.
pub fn login_redirect(full_path: &str) -> String {
    format!("{LOGIN_PATH}?{REDIRECT_PARAM}={}", encode_component(full_path))
}

/// Decide whether navigation to `full_path` may proceed.
pub fn guard_navigation(full_path: &str, authenticated: bool) -> GuardDecision {
    if requires_auth(full_path) && !authenticated {
        GuardDecision::Redirect(login_redirect(full_path))
    } else {
        GuardDecision::Proceed
    }
}

/// Whether the view mounted at `path` may render its content.
pub fn may_render(path: &str, authenticated: bool) -> bool {
    guard_navigation(path, authenticated) == GuardDecision::Proceed
}

/// Where to go after login. Only same-origin absolute paths are honored.
pub fn post_login_target(redirect: Option<&str>) -> String {
    match redirect.map(str::trim) {
        Some(target) if target.starts_with('/') && !target.starts_with("//") && !target.contains('\\') => {
            target.to_owned()
        }
        _ => HOME_PATH.to_owned(),
    }
}

/// Reassemble a router location into the full path the guard sees.
pub fn full_path(pathname: &str, search: &str, hash: &str) -> String {
    let mut out = pathname.to_owned();
    let search = search.trim_start_matches('?');
    if !search.is_empty() {
        out.push('?');
        out.push_str(search);
    }
    let hash = hash.trim_start_matches('#');
    if !hash.is_empty() {
        out.push('#');
        out.push_str(hash);
    }
    out
}

/// Mirror the session into the reactive signal pages and the guard read.
pub fn publish_session(session: &Session, auth: RwSignal<AuthState>) {
    auth.set(session.snapshot());
}

/// Navigation interceptor. Mount once inside `<Router>`.
///
/// Re-evaluates on every location change and whenever auth state changes, so
/// logging out on a protected page also bounces to the login view.
#[component]
pub fn RouteGuard() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let location = use_location();
    let navigate = use_navigate();

    Effect::new(move || {
        let target = full_path(&location.pathname.get(), &location.search.get(), &location.hash.get());
        let authenticated = auth.with(AuthState::is_authenticated);
        if let GuardDecision::Redirect(login) = guard_navigation(&target, authenticated) {
            log::debug!("guard: {target} requires auth, redirecting");
            navigate(&login, NavigateOptions { replace: true, ..Default::default() });
        }
    });
}

/// Renders `children` only while [`may_render`] allows the route at `path`.
#[component]
pub fn RequireAuth(path: &'static str, children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    view! {
        <Show when=move || may_render(path, auth.with(AuthState::is_authenticated))>
            {children()}
        </Show>
    }
}
