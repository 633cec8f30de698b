//! Public CV list with name search and paging.

use leptos::prelude::*;

use crate::app::SessionHandle;
use crate::net::types::{Page, Person};

#[component]
pub fn CvBrowsePage() -> impl IntoView {
    let session = expect_context::<SessionHandle>();

    let search = RwSignal::new(String::new());
    let persons = RwSignal::new(None::<Page<Person>>);
    let error = RwSignal::new(None::<String>);
    let loading = RwSignal::new(false);

    let load = move |page: u32| {
        let q = search.get_untracked().trim().to_owned();
        loading.set(true);

        #[cfg(feature = "csr")]
        {
            use crate::net::api::DEFAULT_PAGE_SIZE;

            let client = session.with_value(|s| s.client().clone());
            leptos::task::spawn_local(async move {
                let result = if q.is_empty() {
                    client.list_persons(page, DEFAULT_PAGE_SIZE).await
                } else {
                    client.search_persons(&q, page, DEFAULT_PAGE_SIZE).await
                };
                match result {
                    Ok(found) => {
                        persons.set(Some(found));
                        error.set(None);
                    }
                    Err(e) => error.set(Some(e.to_string())),
                }
                loading.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (session, q, page);
            loading.set(false);
        }
    };

    load(0);

    let current_page = move || persons.with(|p| p.as_ref().map_or(0, |p| p.number));
    let has_previous = move || persons.with(|p| p.as_ref().is_some_and(Page::has_previous));
    let has_next = move || persons.with(|p| p.as_ref().is_some_and(Page::has_next));

    view! {
        <div class="cv-browse">
            <form
                class="cv-search"
                on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    load(0);
                }
            >
                <input
                    class="cv-search__input"
                    type="search"
                    placeholder="Search by name"
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
                <button type="submit" disabled=move || loading.get()>"Search"</button>
            </form>
            <Show when=move || error.get().is_some()>
                <p class="cv-browse__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <ul class="cv-list">
                {move || {
                    persons
                        .get()
                        .map(|page| page.content)
                        .unwrap_or_default()
                        .into_iter()
                        .map(|person| {
                            view! {
                                <li class="cv-card">
                                    <span class="cv-card__name">{person.display_name()}</span>
                                    <span class="cv-card__email">{person.email}</span>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
            <div class="cv-pager">
                <button
                    disabled=move || !has_previous() || loading.get()
                    on:click=move |_| load(current_page().saturating_sub(1))
                >
                    "Previous"
                </button>
                <span class="cv-pager__page">{move || current_page() + 1}</span>
                <button disabled=move || !has_next() || loading.get() on:click=move |_| load(current_page() + 1)>
                    "Next"
                </button>
            </div>
        </div>
    }
}
