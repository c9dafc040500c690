//! Single-slot toast rendered above the router.

use leptos::prelude::*;

use crate::state::ui::{NoticeKind, UiState};

/// Shows the current [`UiState`] notice, if any, with a manual dismiss.
#[component]
pub fn NoticeToast() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <Show when=move || ui.with(|s| s.notice.is_some())>
            {move || {
                ui.with(|s| s.notice.clone())
                    .map(|notice| {
                        let class = match notice.kind {
                            NoticeKind::Success => "toast toast--success",
                            NoticeKind::Error => "toast toast--error",
                        };
                        let id = notice.id;
                        view! {
                            <div class=class role="status">
                                <span>{notice.text}</span>
                                <button class="toast__dismiss" on:click=move |_| ui.update(|s| s.dismiss(id))>
                                    "\u{d7}"
                                </button>
                            </div>
                        }
                    })
            }}
        </Show>
    }
}
