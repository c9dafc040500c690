//! Appointment create/edit form.
//!
//! SYSTEM CONTEXT
//! ==============
//! One component serves both `/add-appointment` and `/edit-appointment/:id`;
//! the route param decides the mode. Entering the edit route clears the slice
//! detail before fetching so a previously viewed record never pre-fills the
//! form. Patient and doctor dropdowns load once per mount, seeded from the
//! record under edit so its current values are selectable immediately.

#[cfg(test)]
#[path = "appointment_form_test.rs"]
mod appointment_form_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::net::appointments;
use crate::net::lookups;
use crate::net::types::{AppointmentPayload, AppointmentStatus, AppointmentType, LookupOption};
use crate::session::Session;
use crate::state::lookups::LookupList;
use crate::state::resource::AppointmentsState;
use crate::state::ui::UiState;
use crate::util::time::duration_minutes;

/// Raw form field values as entered.
struct AppointmentDraft {
    patient: String,
    doctor: String,
    date: String,
    start_time: String,
    end_time: String,
    appointment_type: String,
    status: String,
    reason: String,
    notes: String,
}

/// Validate a draft and assemble the request body. The first failing check
/// wins; duration is derived, never entered.
fn build_payload(draft: &AppointmentDraft) -> Result<AppointmentPayload, String> {
    let patient = draft.patient.trim();
    if patient.is_empty() {
        return Err("Select a patient.".to_owned());
    }
    let doctor = draft.doctor.trim();
    if doctor.is_empty() {
        return Err("Select a doctor.".to_owned());
    }
    let date = draft.date.trim();
    if date.is_empty() {
        return Err("Pick an appointment date.".to_owned());
    }
    let start_time = draft.start_time.trim();
    if start_time.is_empty() {
        return Err("Pick a start time.".to_owned());
    }
    let end_time = draft.end_time.trim();
    if end_time.is_empty() {
        return Err("Pick an end time.".to_owned());
    }
    // Reason is optional, and an end time at or before the start is not a
    // hard error: the derived duration clamps to zero and the submission
    // goes through.
    let duration = duration_minutes(start_time, end_time);
    Ok(AppointmentPayload {
        patient: patient.to_owned(),
        doctor: doctor.to_owned(),
        appointment_date: date.to_owned(),
        start_time: start_time.to_owned(),
        end_time: end_time.to_owned(),
        duration,
        appointment_type: AppointmentType::parse(draft.appointment_type.trim()).unwrap_or_default(),
        status: AppointmentStatus::parse(draft.status.trim()).unwrap_or_default(),
        reason: draft.reason.trim().to_owned(),
        notes: draft.notes.trim().to_owned(),
    })
}

#[component]
pub fn AppointmentFormPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let slice = expect_context::<RwSignal<AppointmentsState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();
    let params = use_params_map();

    let edit_id = move || params.read().get("id");

    let patient = RwSignal::new(String::new());
    let doctor = RwSignal::new(String::new());
    let date = RwSignal::new(String::new());
    let start_time = RwSignal::new(String::new());
    let end_time = RwSignal::new(String::new());
    let appointment_type = RwSignal::new(AppointmentType::default().as_str().to_owned());
    let status = RwSignal::new(AppointmentStatus::default().as_str().to_owned());
    let reason = RwSignal::new(String::new());
    let notes = RwSignal::new(String::new());

    let patients = RwSignal::new(LookupList::default());
    let doctors = RwSignal::new(LookupList::default());

    let form_error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let ensure_doctors = move || {
        if !doctors.with_untracked(LookupList::needs_fetch) {
            return;
        }
        doctors.update(LookupList::begin_load);
        let session_value = session.get_untracked();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match lookups::fetch_doctor_names(&session_value).await {
                Ok(options) => doctors.update(|l| l.fill(options)),
                Err(e) => {
                    log::warn!("doctor lookup failed: {e}");
                    doctors.update(LookupList::fail);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = session_value;
    };

    let ensure_patients = move || {
        if !patients.with_untracked(LookupList::needs_fetch) {
            return;
        }
        patients.update(LookupList::begin_load);
        let session_value = session.get_untracked();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match lookups::fetch_patient_names(&session_value, "").await {
                Ok(options) => patients.update(|l| l.fill(options)),
                Err(e) => {
                    log::warn!("patient lookup failed: {e}");
                    patients.update(LookupList::fail);
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
            ensure_doctors();
            ensure_patients();
            slice.update(|s| {
                s.clear_detail();
            });
            let mut token = 0;
            slice.update(|s| token = s.begin_request());
            let session_value = session.get_untracked();
            #[cfg(feature = "hydrate")]
            leptos::task::spawn_local(async move {
                match appointments::fetch_appointment_by_id(&session_value, &id).await {
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
        patient.set(record.patient.id.clone());
        doctor.set(record.doctor.id.clone());
        date.set(record.appointment_date.get(..10).unwrap_or_default().to_owned());
        start_time.set(record.start_time.clone());
        end_time.set(record.end_time.clone());
        appointment_type.set(record.appointment_type.as_str().to_owned());
        status.set(record.status.as_str().to_owned());
        reason.set(record.reason.clone());
        notes.set(record.notes.clone());
        patients.update(|l| l.seed(LookupOption::new(record.patient.full_name(), record.patient.id.clone())));
        doctors.update(|l| l.seed(LookupOption::new(record.doctor.name.to_uppercase(), record.doctor.id.clone())));
    });

    // Refetch open slots whenever the doctor/date pair changes.
    let slots = RwSignal::new(Vec::<String>::new());
    let slots_loading = RwSignal::new(false);
    let slots_key = RwSignal::new(None::<(String, String)>);
    Effect::new(move || {
        let doctor_id = doctor.get();
        let day = date.get();
        if doctor_id.is_empty() || day.is_empty() {
            slots.set(Vec::new());
            return;
        }
        let key = (doctor_id.clone(), day.clone());
        if slots_key.get_untracked().as_ref() == Some(&key) {
            return;
        }
        slots_key.set(Some(key));
        slots_loading.set(true);
        let session_value = session.get_untracked();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match appointments::fetch_available_slots(&session_value, &doctor_id, &day).await {
                Ok(list) => slots.set(list),
                Err(e) => {
                    log::warn!("slot lookup failed: {e}");
                    slots.set(Vec::new());
                }
            }
            slots_loading.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (doctor_id, day, session_value);
    });

    let go_list = Callback::new(move |()| navigate("/appointments", NavigateOptions::default()));
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let draft = AppointmentDraft {
            patient: patient.get_untracked(),
            doctor: doctor.get_untracked(),
            date: date.get_untracked(),
            start_time: start_time.get_untracked(),
            end_time: end_time.get_untracked(),
            appointment_type: appointment_type.get_untracked(),
            status: status.get_untracked(),
            reason: reason.get_untracked(),
            notes: notes.get_untracked(),
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
                Some(id) => appointments::update_appointment(&session_value, id, &payload).await,
                None => appointments::create_appointment(&session_value, &payload).await,
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
                        u.push_success(if updated { "Appointment updated" } else { "Appointment created" });
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
    let derived_duration = move || duration_minutes(&start_time.get(), &end_time.get());

    view! {
        <div class="form-page">
            <header class="form-page__header toolbar">
                <span class="toolbar__title">
                    {move || if edit_id().is_some() { "Edit Appointment" } else { "Add Appointment" }}
                </span>
                <span class="toolbar__spacer"></span>
                <a class="btn" href="/appointments">
                    "Back"
                </a>
            </header>

            <Show
                when=move || session.get().can_schedule()
                fallback=move || view! { <p class="form-page__error">"Access denied: scheduling staff only."</p> }
            >
                <Show when=move || !loading_detail() fallback=move || view! { <p>"Loading appointment..."</p> }>
                    <form class="form" on:submit=on_submit>
                        <label class="form__field">
                            "Patient"
                            <select
                                class="input"
                                prop:value=move || patient.get()
                                on:focus=move |_| ensure_patients()
                                on:change=move |ev| patient.set(event_target_value(&ev))
                            >
                                <option value="">"Select patient"</option>
                                {move || {
                                    patients
                                        .get()
                                        .options
                                        .into_iter()
                                        .map(|o| view! { <option value=o.value>{o.label}</option> })
                                        .collect_view()
                                }}
                            </select>
                        </label>

                        <label class="form__field">
                            "Doctor"
                            <select
                                class="input"
                                prop:value=move || doctor.get()
                                on:focus=move |_| ensure_doctors()
                                on:change=move |ev| doctor.set(event_target_value(&ev))
                            >
                                <option value="">"Select doctor"</option>
                                {move || {
                                    doctors
                                        .get()
                                        .options
                                        .into_iter()
                                        .map(|o| view! { <option value=o.value>{o.label}</option> })
                                        .collect_view()
                                }}
                            </select>
                        </label>

                        <label class="form__field">
                            "Date"
                            <input
                                class="input"
                                type="date"
                                prop:value=move || date.get()
                                on:change=move |ev| date.set(event_target_value(&ev))
                            />
                        </label>

                        <div class="form__row">
                            <label class="form__field">
                                "Start Time"
                                <input
                                    class="input"
                                    type="time"
                                    prop:value=move || start_time.get()
                                    on:change=move |ev| start_time.set(event_target_value(&ev))
                                />
                            </label>
                            <label class="form__field">
                                "End Time"
                                <input
                                    class="input"
                                    type="time"
                                    prop:value=move || end_time.get()
                                    on:change=move |ev| end_time.set(event_target_value(&ev))
                                />
                            </label>
                            <span class="form__duration">
                                {move || {
                                    let minutes = derived_duration();
                                    if minutes > 0 { format!("{minutes} min") } else { String::new() }
                                }}
                            </span>
                        </div>

                        <Show when=move || !slots.get().is_empty() || slots_loading.get()>
                            <div class="form__slots">
                                <span class="form__slots-title">"Available Slots"</span>
                                <Show
                                    when=move || !slots_loading.get()
                                    fallback=move || view! { <span>"Loading slots..."</span> }
                                >
                                    {move || {
                                        slots
                                            .get()
                                            .into_iter()
                                            .map(|slot| {
                                                let label = slot.clone();
                                                let value = slot.clone();
                                                view! {
                                                    <button
                                                        type="button"
                                                        class="form__slot-chip"
                                                        class:form__slot-chip--active=move || start_time.get() == value
                                                        on:click=move |_| start_time.set(slot.clone())
                                                    >
                                                        {label}
                                                    </button>
                                                }
                                            })
                                            .collect_view()
                                    }}
                                </Show>
                            </div>
                        </Show>

                        <div class="form__row">
                            <label class="form__field">
                                "Type"
                                <select
                                    class="input"
                                    prop:value=move || appointment_type.get()
                                    on:change=move |ev| appointment_type.set(event_target_value(&ev))
                                >
                                    {AppointmentType::ALL
                                        .into_iter()
                                        .map(|t| view! { <option value=t.as_str()>{t.label()}</option> })
                                        .collect_view()}
                                </select>
                            </label>
                            <label class="form__field">
                                "Status"
                                <select
                                    class="input"
                                    prop:value=move || status.get()
                                    on:change=move |ev| status.set(event_target_value(&ev))
                                >
                                    {AppointmentStatus::ALL
                                        .into_iter()
                                        .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                                        .collect_view()}
                                </select>
                            </label>
                        </div>

                        <label class="form__field">
                            "Reason"
                            <textarea
                                class="input"
                                prop:value=move || reason.get()
                                on:input=move |ev| reason.set(event_target_value(&ev))
                            ></textarea>
                        </label>

                        <label class="form__field">
                            "Notes"
                            <textarea
                                class="input"
                                prop:value=move || notes.get()
                                on:input=move |ev| notes.set(event_target_value(&ev))
                            ></textarea>
                        </label>

                        <Show when=move || !form_error.get().is_empty()>
                            <p class="form-page__error">{move || form_error.get()}</p>
                        </Show>

                        <div class="form__actions">
                            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                                {move || if edit_id().is_some() { "Update Appointment" } else { "Create Appointment" }}
                            </button>
                        </div>
                    </form>
                </Show>
            </Show>
        </div>
    }
}
