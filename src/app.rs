//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::notice_toast::NoticeToast;
use crate::pages::{
    appointment_form::AppointmentFormPage, appointment_list::AppointmentListPage, service_form::ServiceFormPage,
    service_list::ServiceListPage,
};
use crate::session::Session;
use crate::state::resource::{AppointmentsState, ServicesState};
use crate::state::ui::UiState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Loads the persisted session once and provides all shared state contexts;
/// pages and API calls receive the session explicitly instead of re-reading
/// browser storage.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(Session::load());
    let appointments = RwSignal::new(AppointmentsState::default());
    let services = RwSignal::new(ServicesState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(session);
    provide_context(appointments);
    provide_context(services);
    provide_context(ui);

    view! {
        <Stylesheet id="leptos" href="/pkg/clinic-ui.css"/>
        <Title text="Clinic"/>

        <Router>
            <nav class="app-nav">
                <a class="app-nav__link" href="/appointments">
                    "Appointments"
                </a>
                <a class="app-nav__link" href="/services">
                    "Services"
                </a>
            </nav>

            <NoticeToast/>

            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=AppointmentListPage/>
                <Route path=StaticSegment("appointments") view=AppointmentListPage/>
                <Route path=StaticSegment("add-appointment") view=AppointmentFormPage/>
                <Route path=(StaticSegment("edit-appointment"), ParamSegment("id")) view=AppointmentFormPage/>
                <Route path=StaticSegment("services") view=ServiceListPage/>
                <Route path=StaticSegment("add-service") view=ServiceFormPage/>
                <Route path=(StaticSegment("edit-service"), ParamSegment("id")) view=ServiceFormPage/>
            </Routes>
        </Router>
    }
}
