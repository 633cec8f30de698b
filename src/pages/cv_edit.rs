//! The signed-in user's own CV.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected route. Renders the cached profile from the session; logging out
//! here flips auth state and the route guard bounces to `/login`.

#[cfg(test)]
#[path = "cv_edit_test.rs"]
mod cv_edit_test;

use leptos::prelude::*;

use crate::app::SessionHandle;
use crate::net::types::Activity;
use crate::state::auth::AuthState;
use crate::util::auth::publish_session;

/// Activities newest first, ties by title.
fn timeline(activities: &[Activity]) -> Vec<Activity> {
    let mut sorted = activities.to_vec();
    sorted.sort_by(|a, b| b.year.cmp(&a.year).then_with(|| a.title.cmp(&b.title)));
    sorted
}

#[component]
pub fn CvEditPage() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let auth = expect_context::<RwSignal<AuthState>>();

    let on_logout = move |_| {
        session.with_value(|s| {
            s.logout();
            publish_session(s, auth);
        });
    };

    let profile = move || auth.with(|state| state.me.clone());

    view! {
        <div class="cv-edit">
            <header class="cv-edit__header">
                <h1>"My CV"</h1>
                <button class="cv-edit__logout" on:click=on_logout>"Log out"</button>
            </header>
            <Show
                when=move || profile().is_some()
                fallback=|| view! { <p class="cv-edit__loading">"Loading profile..."</p> }
            >
                {move || {
                    profile()
                        .map(|me| {
                            view! {
                                <section class="cv-edit__profile">
                                    <h2>{me.display_name()}</h2>
                                    <p>{me.email.clone()}</p>
                                    <p>{me.website.clone().unwrap_or_default()}</p>
                                    <p>{me.birth_date.clone().unwrap_or_default()}</p>
                                </section>
                                <ul class="cv-edit__activities">
                                    {timeline(&me.activities)
                                        .into_iter()
                                        .map(|activity| {
                                            view! {
                                                <li class="activity">
                                                    <span class="activity__year">{activity.year}</span>
                                                    <span class="activity__type">{activity.kind.label()}</span>
                                                    <span class="activity__title">{activity.title}</span>
                                                </li>
                                            }
                                        })
                                        .collect_view()}
                                </ul>
                            }
                        })
                }}
            </Show>
        </div>
    }
}
