//! Register a new person (CV owner). Protected route.

#[cfg(test)]
#[path = "person_create_test.rs"]
mod person_create_test;

use leptos::prelude::*;

use crate::app::SessionHandle;
use crate::net::types::PersonCreateRequest;

const MAX_NAME_LEN: usize = 100;
const MAX_EMAIL_LEN: usize = 255;
const PASSWORD_LEN: std::ops::RangeInclusive<usize> = 6..=100;

/// Raw form values as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct PersonForm {
    first_name: String,
    last_name: String,
    email: String,
    website: String,
    birth_date: String,
    password: String,
}

fn optional(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

/// Apply the server's field constraints before sending.
fn validate_person_form(form: &PersonForm) -> Result<PersonCreateRequest, &'static str> {
    let first_name = form.first_name.trim();
    let last_name = form.last_name.trim();
    let email = form.email.trim();
    if first_name.is_empty() || last_name.is_empty() {
        return Err("First and last name are required.");
    }
    if first_name.chars().count() > MAX_NAME_LEN || last_name.chars().count() > MAX_NAME_LEN {
        return Err("Names are limited to 100 characters.");
    }
    if !email.contains('@') || email.len() > MAX_EMAIL_LEN {
        return Err("Enter a valid email address.");
    }
    let website = optional(&form.website);
    if website
        .as_deref()
        .is_some_and(|w| !(w.starts_with("http://") || w.starts_with("https://")))
    {
        return Err("Website must start with http:// or https://");
    }
    if !PASSWORD_LEN.contains(&form.password.chars().count()) {
        return Err("Password must be 6 to 100 characters.");
    }
    Ok(PersonCreateRequest {
        first_name: first_name.to_owned(),
        last_name: last_name.to_owned(),
        email: email.to_owned(),
        website,
        birth_date: optional(&form.birth_date),
        raw_password: form.password.clone(),
    })
}

#[component]
pub fn PersonCreatePage() -> impl IntoView {
    let session = expect_context::<SessionHandle>();

    let form = RwSignal::new(PersonForm::default());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match validate_person_form(&form.get()) {
            Ok(request) => request,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Creating...".to_owned());

        #[cfg(feature = "csr")]
        {
            let client = session.with_value(|s| s.client().clone());
            leptos::task::spawn_local(async move {
                match client.create_person(&request).await {
                    Ok(person) => {
                        info.set(format!("Created {}.", person.display_name()));
                        form.set(PersonForm::default());
                    }
                    Err(e) => info.set(format!("Create failed: {e}")),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (session, request);
            busy.set(false);
        }
    };

    view! {
        <div class="person-create">
            <h1>"New CV"</h1>
            <form class="person-form" on:submit=on_submit>
                <input
                    placeholder="First name"
                    prop:value=move || form.with(|f| f.first_name.clone())
                    on:input=move |ev| form.update(|f| f.first_name = event_target_value(&ev))
                />
                <input
                    placeholder="Last name"
                    prop:value=move || form.with(|f| f.last_name.clone())
                    on:input=move |ev| form.update(|f| f.last_name = event_target_value(&ev))
                />
                <input
                    type="email"
                    placeholder="Email"
                    prop:value=move || form.with(|f| f.email.clone())
                    on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                />
                <input
                    type="url"
                    placeholder="https://example.com"
                    prop:value=move || form.with(|f| f.website.clone())
                    on:input=move |ev| form.update(|f| f.website = event_target_value(&ev))
                />
                <input
                    type="date"
                    prop:value=move || form.with(|f| f.birth_date.clone())
                    on:input=move |ev| form.update(|f| f.birth_date = event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Password"
                    prop:value=move || form.with(|f| f.password.clone())
                    on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                />
                <button type="submit" disabled=move || busy.get()>"Create"</button>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="person-form__message">{move || info.get()}</p>
            </Show>
        </div>
    }
}
