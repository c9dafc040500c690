//! Service list page: searchable, sortable, paginated table. All mutation
//! chrome is admin-only; other roles get a read-only table.

#[cfg(test)]
#[path = "service_list_test.rs"]
mod service_list_test;

use leptos::prelude::*;

use crate::components::column_picker::ColumnPicker;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::pagination::Pagination;
use crate::net::query::ListQuery;
use crate::net::services::{self, DEFAULT_ORDERING};
use crate::net::types::Service;
use crate::session::Session;
use crate::state::columns::{ColumnSet, SERVICE_COLUMNS, SERVICE_DEFAULTS};
use crate::state::resource::ServicesState;
use crate::state::ui::UiState;
use crate::util::time::format_day;

fn sort_field(key: &str) -> Option<&'static str> {
    match key {
        "price" => Some("price"),
        "createdAt" => Some("createdAt"),
        _ => None,
    }
}

fn cell_text(service: &Service, key: &str) -> String {
    match key {
        "serviceName" => service.service_name.clone(),
        "department" => service.department.clone(),
        "price" => format_price(service.price),
        "description" => service.description.clone(),
        "createdAt" => format_day(&service.created_at),
        _ => String::new(),
    }
}

fn format_price(price: f64) -> String {
    format!("\u{20b9}{price:.2}")
}

#[component]
pub fn ServiceListPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let slice = expect_context::<RwSignal<ServicesState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let query = RwSignal::new(ListQuery::first_page(DEFAULT_ORDERING));
    let search_draft = RwSignal::new(String::new());
    let columns = RwSignal::new(ColumnSet::new(SERVICE_DEFAULTS));
    let pending_delete = RwSignal::new(None::<Service>);
    let deleting = RwSignal::new(false);

    let load = move |next: ListQuery| {
        query.set(next.clone());
        let mut token = 0;
        slice.update(|s| token = s.begin_request());
        let session_value = session.get_untracked();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match services::fetch_services(&session_value, &next).await {
                Ok(page) => slice.update(|s| {
                    s.apply_page(token, page.services, page.total, page.total_pages, &next);
                }),
                Err(e) => slice.update(|s| s.fail(token, e.to_string())),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (token, next, session_value);
    };

    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() {
            return;
        }
        requested.set(true);
        load(ListQuery::first_page(DEFAULT_ORDERING));
    });

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut next = query.get_untracked();
        next.search = search_draft.get_untracked().trim().to_owned();
        next.page = 1;
        load(next);
    };

    let sort_by = move |field: &'static str| {
        let mut next = query.get_untracked();
        next.ordering = next.ordering.toggled(field);
        next.page = 1;
        load(next);
    };

    let on_page = Callback::new(move |page: u32| {
        let mut next = query.get_untracked();
        next.page = page;
        load(next);
    });

    let on_reset = move |_| {
        search_draft.set(String::new());
        load(ListQuery::first_page(DEFAULT_ORDERING));
    };

    let on_delete_cancel = Callback::new(move |()| pending_delete.set(None));
    let on_delete_confirm = Callback::new(move |()| {
        let Some(target) = pending_delete.get_untracked() else {
            return;
        };
        if deleting.get_untracked() {
            return;
        }
        deleting.set(true);
        let session_value = session.get_untracked();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match services::delete_service(&session_value, &target.id).await {
                Ok(()) => {
                    slice.update(|s| s.apply_deleted(&target.id));
                    ui.update(|u| {
                        u.push_success("Service deleted");
                    });
                    load(query.get_untracked());
                }
                Err(e) => ui.update(|u| {
                    u.push_error(e.to_string());
                }),
            }
            deleting.set(false);
            pending_delete.set(None);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (target, session_value);
    });

    let visible_columns = move || {
        SERVICE_COLUMNS
            .iter()
            .filter(|c| columns.with(|s| s.is_visible(c.key)))
            .collect::<Vec<_>>()
    };

    let is_admin = session.with_untracked(Session::is_admin);

    view! {
        <div class="list-page">
            <header class="list-page__header toolbar">
                <span class="toolbar__title">"Services"</span>
                <span class="toolbar__spacer"></span>
                <Show when=move || session.get().is_admin()>
                    <a class="btn btn--primary" href="/add-service">
                        "+ Add Service"
                    </a>
                </Show>
            </header>

            <div class="list-page__controls">
                <form class="list-page__search" on:submit=on_search>
                    <input
                        class="input"
                        type="text"
                        placeholder="Search services..."
                        prop:value=move || search_draft.get()
                        on:input=move |ev| search_draft.set(event_target_value(&ev))
                    />
                    <button class="btn" type="submit">
                        "Search"
                    </button>
                </form>
                <button class="btn" on:click=on_reset>
                    "Reset Filters"
                </button>
                <ColumnPicker catalog=SERVICE_COLUMNS set=columns/>
            </div>

            <Show when=move || slice.get().error.is_some()>
                <p class="list-page__error">{move || slice.get().error.unwrap_or_default()}</p>
            </Show>

            <Show when=move || !slice.get().loading fallback=move || view! { <p>"Loading services..."</p> }>
                <Show
                    when=move || !slice.get().items.is_empty()
                    fallback=move || view! { <p class="list-page__empty">"No services found."</p> }
                >
                    <table class="list-table">
                        <thead>
                            <tr>
                                {move || {
                                    visible_columns()
                                        .into_iter()
                                        .map(|column| {
                                            match sort_field(column.key) {
                                                Some(field) => {
                                                    let active = move || query.with(|q| q.ordering.is_field(field));
                                                    let arrow = move || {
                                                        if !active() {
                                                            ""
                                                        } else if query.with(|q| q.ordering.descending) {
                                                            " \u{25bc}"
                                                        } else {
                                                            " \u{25b2}"
                                                        }
                                                    };
                                                    view! {
                                                        <th
                                                            class="list-table__sortable"
                                                            on:click=move |_| sort_by(field)
                                                        >
                                                            {column.title}
                                                            {arrow}
                                                        </th>
                                                    }
                                                        .into_any()
                                                }
                                                None => view! { <th>{column.title}</th> }.into_any(),
                                            }
                                        })
                                        .collect_view()
                                }}
                                {is_admin.then(|| view! { <th>"Actions"</th> })}
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                slice
                                    .get()
                                    .items
                                    .into_iter()
                                    .map(|service| {
                                        let edit_href = format!("/edit-service/{}", service.id);
                                        let delete_target = service.clone();
                                        view! {
                                            <tr>
                                                {visible_columns()
                                                    .into_iter()
                                                    .map(|column| {
                                                        view! { <td>{cell_text(&service, column.key)}</td> }
                                                    })
                                                    .collect_view()}
                                                {is_admin
                                                    .then(move || {
                                                        view! {
                                                            <td class="list-table__actions">
                                                                <a class="btn btn--small" href=edit_href>
                                                                    "Edit"
                                                                </a>
                                                                <button
                                                                    class="btn btn--small btn--danger"
                                                                    on:click=move |_| {
                                                                        pending_delete.set(Some(delete_target.clone()));
                                                                    }
                                                                >
                                                                    "Delete"
                                                                </button>
                                                            </td>
                                                        }
                                                    })}
                                            </tr>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </tbody>
                    </table>
                    <Pagination
                        page=Signal::derive(move || slice.get().page)
                        total=Signal::derive(move || slice.get().total)
                        limit=Signal::derive(move || slice.get().limit)
                        on_page=on_page
                    />
                </Show>
            </Show>

            <Show when=move || pending_delete.get().is_some()>
                {move || {
                    pending_delete
                        .get()
                        .map(|target| {
                            view! {
                                <ConfirmDialog
                                    title="Delete Service"
                                    body=format!("This will permanently delete {}.", target.service_name)
                                    confirm_label="Delete"
                                    on_cancel=on_delete_cancel
                                    on_confirm=on_delete_confirm
                                />
                            }
                        })
                }}
            </Show>
        </div>
    }
}
