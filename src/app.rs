//! Root application component with routing and context providers.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{A, Redirect, Route, Router, Routes},
};

use crate::config::ClientConfig;
use crate::net::client::ApiClient;
use crate::pages::{
    cv_browse::CvBrowsePage, cv_edit::CvEditPage, login::LoginPage, person_create::PersonCreatePage,
};
use crate::state::auth::Session;
use crate::util::auth::{CV_EDIT_PATH, HOME_PATH, REGISTER_PATH, RequireAuth, RouteGuard};

/// Context handle for the session. The session holds `Rc`s, so it lives in
/// thread-local arena storage.
pub type SessionHandle = StoredValue<Session, LocalStorage>;

fn build_session() -> Session {
    let config = ClientConfig::from_build_env();
    #[cfg(feature = "csr")]
    let client = ApiClient::new(
        config,
        Rc::new(crate::net::transport::GlooTransport),
        Rc::new(crate::util::storage::BrowserStore),
    );
    #[cfg(not(feature = "csr"))]
    let client = ApiClient::new(
        config,
        Rc::new(crate::net::transport::UnavailableTransport),
        Rc::new(crate::util::storage::MemoryStore::new()),
    );
    Session::new(client)
}

/// Resolve the profile for a token left over from a previous visit.
#[cfg(feature = "csr")]
fn restore_session(session: Session, auth: RwSignal<crate::state::auth::AuthState>) {
    use crate::net::types::ApiError;

    if !session.is_authenticated() {
        return;
    }
    leptos::task::spawn_local(async move {
        match session.fetch_identity().await {
            Ok(()) => {}
            Err(ApiError::Unauthorized { .. }) => {
                log::info!("stored token rejected, logging out");
                session.logout();
            }
            Err(err) => log::warn!("profile restore failed: {err}"),
        }
        crate::util::auth::publish_session(&session, auth);
    });
}

/// Root application component.
///
/// Owns the session, provides it and its reactive mirror as context, and
/// mounts the router with the auth guard in front of every route.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = build_session();
    let auth = RwSignal::new(session.snapshot());

    #[cfg(feature = "csr")]
    restore_session(session.clone(), auth);

    provide_context::<SessionHandle>(StoredValue::new_local(session));
    provide_context(auth);

    view! {
        <Title text="CV Pro"/>

        <Router>
            <RouteGuard/>
            <nav class="top-nav">
                <A href="/cvs">"Browse CVs"</A>
                <A href=CV_EDIT_PATH>"My CV"</A>
                <A href=REGISTER_PATH>"New CV"</A>
            </nav>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=|| view! { <Redirect path=HOME_PATH/> }/>
                    <Route path=StaticSegment("cvs") view=CvBrowsePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route
                        path=(StaticSegment("cv"), StaticSegment("edit"))
                        view=|| view! { <RequireAuth path=CV_EDIT_PATH><CvEditPage/></RequireAuth> }
                    />
                    <Route
                        path=StaticSegment("register")
                        view=|| view! { <RequireAuth path=REGISTER_PATH><PersonCreatePage/></RequireAuth> }
                    />
                </Routes>
            </main>
        </Router>
    }
}
