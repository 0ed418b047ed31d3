//! Витрина: фильтр по категориям и постраничный вывод поверх серверной разметки.

pub mod markup;
pub mod renderer;

use crate::shared::components::pagination_controls::PaginationControls;
use contracts::shared::catalog_view::{CatalogView, ControlAction, ControlLayout, ViewEvent};
use leptos::prelude::*;
use markup::{ShopMarkup, FILTER_ATTR};
use renderer::DomRenderer;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

/// Entry point: refuses to start unless the page has every required region.
pub fn bootstrap() {
    let markup = match ShopMarkup::locate() {
        Ok(markup) => markup,
        Err(e) => {
            log::error!("Shop catalog not initialized: {}", e);
            return;
        }
    };

    let mount_point = markup.pagination_controls.clone();
    mount_point.set_inner_html("");
    leptos::mount::mount_to(mount_point, move || view! { <ShopCatalog markup=markup /> })
        .forget();
}

/// Owns the catalog state for the page session and renders the pagination
/// region. Cards and category buttons stay server-rendered.
#[component]
fn ShopCatalog(markup: ShopMarkup) -> impl IntoView {
    let items = markup.items();
    let page_size = markup.page_size();
    log::debug!(
        "Shop catalog: {} cards, {} selectors, page size {}",
        items.len(),
        markup.selectors.len(),
        page_size
    );

    let catalog = StoredValue::new(CatalogView::new(
        items,
        markup.selector_tokens(),
        page_size,
    ));
    let layout = RwSignal::new(ControlLayout::Hidden);
    let renderer = StoredValue::new_local(DomRenderer::new(
        markup.cards.clone(),
        markup.selectors.clone(),
        layout,
    ));

    // Обработчик целиком: пересчёт и отрисовка до следующего события
    let apply = move |event: Option<ViewEvent>| {
        let frame = catalog.try_update_value(|view| match event {
            Some(event) => view.handle(event),
            None => view.render(),
        });
        if let Some(frame) = frame {
            renderer.update_value(|r| frame.render_into(r));
        }
    };

    listen_category_clicks(&markup.category_list, move |token| {
        apply(Some(ViewEvent::SelectCategory(token)))
    });

    apply(None);

    view! {
        <PaginationControls
            layout=layout
            on_action=Callback::new(move |action: ControlAction| apply(Some(action.into())))
        />
    }
}

/// One delegated listener on the category list.
fn listen_category_clicks<F>(category_list: &HtmlElement, on_select: F)
where
    F: Fn(String) + 'static,
{
    let list = category_list.clone();
    let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
        let Some(target) = event.target() else { return };
        let Ok(element) = target.dyn_into::<Element>() else {
            return;
        };
        let Ok(Some(button)) = element.closest(&format!("button[{FILTER_ATTR}]")) else {
            return;
        };
        let node: &web_sys::Node = button.as_ref();
        if !list.contains(Some(node)) {
            return;
        }
        if let Some(token) = button.get_attribute(FILTER_ATTR) {
            on_select(token);
        }
    }) as Box<dyn FnMut(web_sys::Event)>);

    if let Err(e) =
        category_list.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
    {
        log::error!("Category selector listener not registered: {:?}", e);
        return;
    }
    // Слушатель живёт всю сессию страницы
    closure.forget();
}
