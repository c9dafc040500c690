//! Appointment list page: searchable, sortable, paginated table.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every page, search, sort, or date-range change re-issues a full list
//! fetch; the slice's request token discards responses that arrive after a
//! newer fetch was issued. Deleting refetches the current page so the table
//! matches the server instead of drifting on a locally-filtered list.

#[cfg(test)]
#[path = "appointment_list_test.rs"]
mod appointment_list_test;

use leptos::prelude::*;

use crate::components::column_picker::ColumnPicker;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::pagination::Pagination;
use crate::net::appointments::{self, DEFAULT_ORDERING};
use crate::net::query::ListQuery;
use crate::net::types::Appointment;
use crate::session::Session;
use crate::state::columns::{APPOINTMENT_COLUMNS, APPOINTMENT_DEFAULTS, ColumnSet};
use crate::state::resource::AppointmentsState;
use crate::state::ui::UiState;
use crate::util::time::{day_end_iso, day_start_iso, format_day};

/// Sort directive behind a column header, if the column is sortable.
fn sort_field(key: &str) -> Option<&'static str> {
    match key {
        "date" => Some("appointmentDate"),
        _ => None,
    }
}

/// Plain-text cell content for one column of one row.
fn cell_text(appointment: &Appointment, key: &str) -> String {
    match key {
        "patientName" => appointment.patient.full_name(),
        "date" => format_day(&appointment.appointment_date),
        "time" => format!("{} - {}", appointment.start_time, appointment.end_time),
        "doctorId" => appointment.doctor.name.clone(),
        "type" => appointment.appointment_type.label().to_owned(),
        "status" => appointment.status.label().to_owned(),
        "reason" => appointment.reason.clone(),
        "notes" => appointment.notes.clone(),
        "phone" => appointment.patient.phone.clone().unwrap_or_else(|| "-".to_owned()),
        "createdBy" => audit_name(appointment.created_by.as_ref()),
        "updatedBy" => audit_name(appointment.updated_by.as_ref()),
        _ => String::new(),
    }
}

fn audit_name(audit: Option<&crate::net::types::AuditRef>) -> String {
    audit.map_or_else(|| "-".to_owned(), |a| a.name.clone())
}

#[component]
pub fn AppointmentListPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let slice = expect_context::<RwSignal<AppointmentsState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let query = RwSignal::new(ListQuery::first_page(DEFAULT_ORDERING));
    let search_draft = RwSignal::new(String::new());
    let from_date = RwSignal::new(String::new());
    let to_date = RwSignal::new(String::new());
    let columns = RwSignal::new(ColumnSet::new(APPOINTMENT_DEFAULTS));
    let pending_delete = RwSignal::new(None::<Appointment>);
    let deleting = RwSignal::new(false);

    let load = move |next: ListQuery| {
        query.set(next.clone());
        let mut token = 0;
        slice.update(|s| token = s.begin_request());
        let session_value = session.get_untracked();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match appointments::fetch_appointments(&session_value, &next).await {
                Ok(page) => slice.update(|s| {
                    s.apply_page(token, page.appointments, page.total, page.total_pages, &next);
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

    let apply_dates = move || {
        let mut next = query.get_untracked();
        next.start_date = day_start_iso(from_date.get_untracked().trim());
        next.end_date = day_end_iso(to_date.get_untracked().trim());
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
        from_date.set(String::new());
        to_date.set(String::new());
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
            match appointments::delete_appointment(&session_value, &target.id).await {
                Ok(()) => {
                    slice.update(|s| s.apply_deleted(&target.id));
                    ui.update(|u| {
                        u.push_success("Appointment cancelled");
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
        APPOINTMENT_COLUMNS
            .iter()
            .filter(|c| columns.with(|s| s.is_visible(c.key)))
            .collect::<Vec<_>>()
    };

    // Role checks drive static row chrome; a role change means a new login.
    let can_schedule = session.with_untracked(Session::can_schedule);
    let is_admin = session.with_untracked(Session::is_admin);

    view! {
        <div class="list-page">
            <header class="list-page__header toolbar">
                <span class="toolbar__title">"Appointments"</span>
                <span class="toolbar__spacer"></span>
                <Show when=move || session.get().can_schedule()>
                    <a class="btn btn--primary" href="/add-appointment">
                        "+ Add Appointment"
                    </a>
                </Show>
            </header>

            <div class="list-page__controls">
                <form class="list-page__search" on:submit=on_search>
                    <input
                        class="input"
                        type="text"
                        placeholder="Search appointments..."
                        prop:value=move || search_draft.get()
                        on:input=move |ev| search_draft.set(event_target_value(&ev))
                    />
                    <button class="btn" type="submit">
                        "Search"
                    </button>
                </form>
                <label class="list-page__date">
                    "From"
                    <input
                        class="input"
                        type="date"
                        prop:value=move || from_date.get()
                        on:change=move |ev| {
                            from_date.set(event_target_value(&ev));
                            apply_dates();
                        }
                    />
                </label>
                <label class="list-page__date">
                    "To"
                    <input
                        class="input"
                        type="date"
                        prop:value=move || to_date.get()
                        on:change=move |ev| {
                            to_date.set(event_target_value(&ev));
                            apply_dates();
                        }
                    />
                </label>
                <button class="btn" on:click=on_reset>
                    "Reset Filters"
                </button>
                <ColumnPicker catalog=APPOINTMENT_COLUMNS set=columns/>
            </div>

            <Show when=move || slice.get().error.is_some()>
                <p class="list-page__error">{move || slice.get().error.unwrap_or_default()}</p>
            </Show>

            <Show when=move || !slice.get().loading fallback=move || view! { <p>"Loading appointments..."</p> }>
                <Show
                    when=move || !slice.get().items.is_empty()
                    fallback=move || view! { <p class="list-page__empty">"No appointments found."</p> }
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
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                slice
                                    .get()
                                    .items
                                    .into_iter()
                                    .map(|appointment| {
                                        let edit_href = format!("/edit-appointment/{}", appointment.id);
                                        let delete_target = appointment.clone();
                                        view! {
                                            <tr>
                                                {visible_columns()
                                                    .into_iter()
                                                    .map(|column| {
                                                        if column.key == "status" {
                                                            let tone = appointment.status.tone();
                                                            view! {
                                                                <td>
                                                                    <span class=format!("tag tag--{tone}")>
                                                                        {appointment.status.label()}
                                                                    </span>
                                                                </td>
                                                            }
                                                                .into_any()
                                                        } else {
                                                            view! { <td>{cell_text(&appointment, column.key)}</td> }
                                                                .into_any()
                                                        }
                                                    })
                                                    .collect_view()}
                                                <td class="list-table__actions">
                                                    {can_schedule
                                                        .then(|| {
                                                            view! {
                                                                <a class="btn btn--small" href=edit_href>
                                                                    "Edit"
                                                                </a>
                                                            }
                                                        })}
                                                    {is_admin
                                                        .then(move || {
                                                            view! {
                                                                <button
                                                                    class="btn btn--small btn--danger"
                                                                    on:click=move |_| {
                                                                        pending_delete.set(Some(delete_target.clone()));
                                                                    }
                                                                >
                                                                    "Cancel"
                                                                </button>
                                                            }
                                                        })}
                                                </td>
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
                                    title="Cancel Appointment"
                                    body=format!(
                                        "This will cancel the appointment for {}.",
                                        target.patient.full_name(),
                                    )
                                    confirm_label="Cancel Appointment"
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
