//! Column-visibility dropdown for the list tables.

use leptos::prelude::*;

use crate::state::columns::{Column, ColumnSet};

/// Checkbox dropdown over a column catalog. Visibility is session-local; the
/// reset button restores the table's defaults.
#[component]
pub fn ColumnPicker(catalog: &'static [Column], set: RwSignal<ColumnSet>) -> impl IntoView {
    let open = RwSignal::new(false);

    view! {
        <div class="column-picker">
            <button class="btn" on:click=move |_| open.update(|o| *o = !*o)>
                "Columns"
            </button>
            <Show when=move || open.get()>
                <div class="column-picker__menu">
                    {catalog
                        .iter()
                        .map(|column| {
                            let key = column.key;
                            view! {
                                <label class="column-picker__item">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || set.with(|s| s.is_visible(key))
                                        on:change=move |_| set.update(|s| s.toggle(key))
                                    />
                                    {column.title}
                                </label>
                            }
                        })
                        .collect_view()}
                    <button class="column-picker__reset" on:click=move |_| set.update(ColumnSet::reset)>
                        "Reset to default"
                    </button>
                </div>
            </Show>
        </div>
    }
}
