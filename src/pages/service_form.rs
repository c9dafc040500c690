//! Service create/edit form. Admin-only; the same component serves
//! `/add-service` and `/edit-service/:id`.

#[cfg(test)]
#[path = "service_form_test.rs"]
mod service_form_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::net::lookups;
use crate::net::services;
use crate::net::types::{LookupOption, ServicePayload};
use crate::session::Session;
use crate::state::lookups::LookupList;
use crate::state::resource::ServicesState;
use crate::state::ui::UiState;

/// Raw form field values as entered. Price stays a string until submit.
struct ServiceDraft {
    service_name: String,
    department: String,
    price: String,
    description: String,
}

/// Validate a draft and assemble the request body, coercing the price text
/// into a number.
fn build_payload(draft: &ServiceDraft) -> Result<ServicePayload, String> {
    let service_name = draft.service_name.trim();
    if service_name.is_empty() {
        return Err("Select a service name.".to_owned());
    }
    let department = draft.department.trim();
    if department.is_empty() {
        return Err("Select a department.".to_owned());
    }
    let price: f64 = draft
        .price
        .trim()
        .parse()
        .map_err(|_| "Price must be a number.".to_owned())?;
    if !price.is_finite() || price < 0.0 {
        return Err("Price must be zero or more.".to_owned());
    }
    Ok(ServicePayload {
        service_name: service_name.to_owned(),
        department: department.to_owned(),
        price,
        description: draft.description.trim().to_owned(),
    })
}

#[component]
pub fn ServiceFormPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let slice = expect_context::<RwSignal<ServicesState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();
    let params = use_params_map();

    let edit_id = move || params.read().get("id");

    let service_name = RwSignal::new(String::new());
    let department = RwSignal::new(String::new());
    let price = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());

    let names = RwSignal::new(LookupList::default());
    let departments = RwSignal::new(LookupList::default());

    let form_error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let ensure_names = move || {
        if !names.with_untracked(LookupList::needs_fetch) {
            return;
        }
        names.update(LookupList::begin_load);
        let session_value = session.get_untracked();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match lookups::fetch_service_names(&session_value).await {
                Ok(options) => names.update(|l| l.fill(options)),
                Err(e) => {
                    log::warn!("service name lookup failed: {e}");
                    names.update(LookupList::fail);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = session_value;
    };

    let ensure_departments = move || {
        if !departments.with_untracked(LookupList::needs_fetch) {
            return;
        }
        departments.update(LookupList::begin_load);
        let session_value = session.get_untracked();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match lookups::fetch_departments(&session_value).await {
                Ok(options) => departments.update(|l| l.fill(options)),
                Err(e) => {
                    log::warn!("department lookup failed: {e}");
                    departments.update(LookupList::fail);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = session_value;
    };

    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() {
            return;
        }
        requested.set(true);
        // Dropdowns load lazily on focus; edit mode needs them up front so
        // the record's values resolve to labels.
        if let Some(id) = edit_id() {
            ensure_names();
            ensure_departments();
            slice.update(|s| {
                s.clear_detail();
            });
            let mut token = 0;
            slice.update(|s| token = s.begin_request());
            let session_value = session.get_untracked();
            #[cfg(feature = "hydrate")]
            leptos::task::spawn_local(async move {
                match services::fetch_service_by_id(&session_value, &id).await {
                    Ok(record) => slice.update(|s| s.apply_detail(token, record)),
                    Err(e) => slice.update(|s| s.fail(token, e.to_string())),
                }
            });
            #[cfg(not(feature = "hydrate"))]
            let _ = (id, token, session_value);
        }
    });

    // Copy the fetched record into the field signals exactly once.
    let seeded = RwSignal::new(false);
    Effect::new(move || {
        if seeded.get() {
            return;
        }
        let Some(record) = slice.get().detail else {
            return;
        };
        seeded.set(true);
        service_name.set(record.service_name.clone());
        department.set(record.department.clone());
        price.set(format!("{}", record.price));
        description.set(record.description.clone());
        names.update(|l| l.seed(LookupOption::new(record.service_name.clone(), record.service_name.clone())));
        departments.update(|l| l.seed(LookupOption::new(record.department.clone(), record.department.clone())));
    });

    let go_list = Callback::new(move |()| navigate("/services", NavigateOptions::default()));
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let draft = ServiceDraft {
            service_name: service_name.get_untracked(),
            department: department.get_untracked(),
            price: price.get_untracked(),
            description: description.get_untracked(),
        };
        let payload = match build_payload(&draft) {
            Ok(payload) => payload,
            Err(message) => {
                form_error.set(message);
                return;
            }
        };
        form_error.set(String::new());
        busy.set(true);
        let session_value = session.get_untracked();
        let editing = edit_id();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = match &editing {
                Some(id) => services::update_service(&session_value, id, &payload).await,
                None => services::create_service(&session_value, &payload).await,
            };
            match result {
                Ok(record) => {
                    let updated = editing.is_some();
                    slice.update(|s| {
                        if updated {
                            s.apply_updated(record);
                        } else {
                            s.apply_created(record);
                        }
                    });
                    ui.update(|u| {
                        u.push_success(if updated { "Service updated" } else { "Service created" });
                    });
                    go_list.run(());
                }
                Err(e) => {
                    ui.update(|u| {
                        u.push_error(e.to_string());
                    });
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (payload, session_value, editing);
    };

    let loading_detail = move || edit_id().is_some() && slice.get().loading;

    view! {
        <div class="form-page">
            <header class="form-page__header toolbar">
                <span class="toolbar__title">
                    {move || if edit_id().is_some() { "Edit Service" } else { "Add Service" }}
                </span>
                <span class="toolbar__spacer"></span>
                <a class="btn" href="/services">
                    "Back"
                </a>
            </header>

            <Show
                when=move || session.get().is_admin()
                fallback=move || view! { <p class="form-page__error">"Access denied: admin only."</p> }
            >
                <Show when=move || !loading_detail() fallback=move || view! { <p>"Loading service..."</p> }>
                    <form class="form" on:submit=on_submit>
                        <label class="form__field">
                            "Service Name"
                            <select
                                class="input"
                                prop:value=move || service_name.get()
                                on:focus=move |_| ensure_names()
                                on:change=move |ev| service_name.set(event_target_value(&ev))
                            >
                                <option value="">"Select service"</option>
                                {move || {
                                    names
                                        .get()
                                        .options
                                        .into_iter()
                                        .map(|o| view! { <option value=o.value>{o.label}</option> })
                                        .collect_view()
                                }}
                            </select>
                        </label>

                        <label class="form__field">
                            "Department"
                            <select
                                class="input"
                                prop:value=move || department.get()
                                on:focus=move |_| ensure_departments()
                                on:change=move |ev| department.set(event_target_value(&ev))
                            >
                                <option value="">"Select department"</option>
                                {move || {
                                    departments
                                        .get()
                                        .options
                                        .into_iter()
                                        .map(|o| view! { <option value=o.value>{o.label}</option> })
                                        .collect_view()
                                }}
                            </select>
                        </label>

                        <label class="form__field">
                            "Price"
                            <input
                                class="input"
                                type="number"
                                min="0"
                                step="0.01"
                                prop:value=move || price.get()
                                on:input=move |ev| price.set(event_target_value(&ev))
                            />
                        </label>

                        <label class="form__field">
                            "Description"
                            <textarea
                                class="input"
                                prop:value=move || description.get()
                                on:input=move |ev| description.set(event_target_value(&ev))
                            ></textarea>
                        </label>

                        <Show when=move || !form_error.get().is_empty()>
                            <p class="form-page__error">{move || form_error.get()}</p>
                        </Show>

                        <div class="form__actions">
                            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                                {move || if edit_id().is_some() { "Update Service" } else { "Create Service" }}
                            </button>
                        </div>
                    </form>
                </Show>
            </Show>
        </div>
    }
}
