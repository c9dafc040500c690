//! Numbered pager for the list tables.

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

use leptos::prelude::*;

/// Pages needed to show `total` records at `limit` per page, never zero.
#[must_use]
pub fn page_count(total: u64, limit: u32) -> u32 {
    if limit == 0 {
        return 1;
    }
    let pages = total.div_ceil(u64::from(limit));
    u32::try_from(pages).unwrap_or(u32::MAX).max(1)
}

/// Prev / numbered / next pager. `on_page` fires only for a page other than
/// the current one, so re-clicking the active page issues no fetch.
#[component]
pub fn Pagination(
    #[prop(into)] page: Signal<u32>,
    #[prop(into)] total: Signal<u64>,
    #[prop(into)] limit: Signal<u32>,
    on_page: Callback<u32>,
) -> impl IntoView {
    let pages = move || page_count(total.get(), limit.get());
    let go = move |target: u32| {
        if target >= 1 && target <= pages() && target != page.get() {
            on_page.run(target);
        }
    };

    view! {
        <div class="pager">
            <button
                class="pager__btn"
                disabled=move || page.get() <= 1
                on:click=move |_| go(page.get().saturating_sub(1))
            >
                "Prev"
            </button>
            {move || {
                (1..=pages())
                    .map(|n| {
                        view! {
                            <button
                                class="pager__btn"
                                class:pager__btn--active=move || page.get() == n
                                on:click=move |_| go(n)
                            >
                                {n}
                            </button>
                        }
                    })
                    .collect_view()
            }}
            <button
                class="pager__btn"
                disabled=move || page.get() >= pages()
                on:click=move |_| go(page.get() + 1)
            >
                "Next"
            </button>
        </div>
    }
}
