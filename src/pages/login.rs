//! Login page with email + password.
//!
//! SYSTEM CONTEXT
//! ==============
//! The route guard sends anonymous visitors here with `?redirect=<path>`.
//! After a successful login the page navigates back to that path (local paths
//! only), otherwise to the CV list.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::app::SessionHandle;
use crate::net::types::ApiError;
use crate::state::auth::{AuthState, SessionError};
use crate::util::auth::{REDIRECT_PARAM, post_login_target};

const MIN_PASSWORD_LEN: usize = 6;

fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 6 characters.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

fn login_failure_message(err: &SessionError) -> String {
    match err {
        SessionError::Api(ApiError::Unauthorized { .. } | ApiError::Forbidden { .. }) => {
            "Invalid email or password.".to_owned()
        }
        SessionError::Api(ApiError::Transport(_) | ApiError::Timeout(_)) => {
            "Server unreachable, try again.".to_owned()
        }
        SessionError::MalformedToken => "Login response was not understood.".to_owned(),
        SessionError::Api(other) => format!("Login failed: {other}"),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let query = use_query_map();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_login_input(&email.get(), &password.get()) {
            Ok(values) => values,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        let target = post_login_target(query.with_untracked(|q| q.get(REDIRECT_PARAM)).as_deref());
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "csr")]
        {
            let session = session.get_value();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let result = session.login(&email_value, &password_value).await;
                crate::util::auth::publish_session(&session, auth);
                busy.set(false);
                match result {
                    Ok(()) => {
                        info.set(String::new());
                        navigate(&target, leptos_router::NavigateOptions::default());
                    }
                    Err(e) => info.set(login_failure_message(&e)),
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (session, auth, &navigate, email_value, password_value, target);
            busy.set(false);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"CV Pro"</h1>
                <p class="login-card__subtitle">"Sign in to edit your CV"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign in"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
