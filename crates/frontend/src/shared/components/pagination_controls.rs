use contracts::shared::catalog_view::{ControlAction, ControlLayout, PageIndicator};
use leptos::prelude::*;

/// PaginationControls component - prev, page numbers, next.
///
/// The whole region is rebuilt from `layout` on every change; nothing is
/// patched in place. A hidden layout renders nothing.
#[component]
pub fn PaginationControls(
    /// Current control layout
    #[prop(into)]
    layout: Signal<ControlLayout>,

    /// Callback when an affordance is clicked
    on_action: Callback<ControlAction>,
) -> impl IntoView {
    move || match layout.get() {
        ControlLayout::Hidden => ().into_any(),
        ControlLayout::Shown { prev, pages, next } => view! {
            <button
                class="pagination-btn"
                disabled=!prev.enabled
                on:click=move |_| {
                    if prev.enabled {
                        on_action.run(ControlAction::Prev);
                    }
                }
            >
                "« Prev"
            </button>
            {pages
                .into_iter()
                .map(|indicator| page_indicator(indicator, on_action))
                .collect_view()}
            <button
                class="pagination-btn"
                disabled=!next.enabled
                on:click=move |_| {
                    if next.enabled {
                        on_action.run(ControlAction::Next);
                    }
                }
            >
                "Next »"
            </button>
        }
        .into_any(),
    }
}

/// Активная страница не кликабельна
fn page_indicator(indicator: PageIndicator, on_action: Callback<ControlAction>) -> AnyView {
    let page = indicator.page;
    if indicator.active {
        view! { <span class="pagination-page active">{page}</span> }.into_any()
    } else {
        view! {
            <span
                class="pagination-page"
                on:click=move |_| on_action.run(ControlAction::Page(page))
            >
                {page}
            </span>
        }
        .into_any()
    }
}
