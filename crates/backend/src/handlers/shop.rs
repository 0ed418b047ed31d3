use ammonia::clean_text;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use contracts::domain::a001_category::aggregate::Category;
use contracts::domain::a002_product::aggregate::ProductCard;
use contracts::shared::catalog_view::{RequiredRegion, ALL_CATEGORIES};
use std::fmt::Write;

use crate::domain::a001_category::service::{self as categories, ShopFilters};
use crate::domain::a002_product::service as products;
use crate::shared::data::db::get_connection;
use crate::AppState;

/// GET /
pub async fn index() -> Redirect {
    Redirect::to("/shop")
}

/// GET /shop
pub async fn shop_page(axum::extract::State(state): axum::extract::State<AppState>) -> Response {
    let db = get_connection();
    let filters = categories::shop_filters(db).await;
    let cards = products::list_cards(db).await;

    match (filters, cards) {
        (Ok(filters), Ok(cards)) => {
            Html(render_shop_page(&filters, &cards, state.page_size)).into_response()
        }
        (Err(e), _) | (_, Err(e)) => {
            tracing::error!("Could not load shop data: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(render_shop_page(&ShopFilters::default(), &[], state.page_size)),
            )
                .into_response()
        }
    }
}

fn render_filter_button(out: &mut String, category: &Category) {
    let class = if category.slug == ALL_CATEGORIES {
        "category-btn active"
    } else {
        "category-btn"
    };
    let _ = write!(
        out,
        r#"<button type="button" class="{class}" data-filter="{}">{}</button>"#,
        clean_text(&category.slug),
        clean_text(&category.name),
    );
}

fn render_card(out: &mut String, card: &ProductCard) {
    let _ = write!(
        out,
        concat!(
            r#"<div class="product-card" data-category="{tags}">"#,
            r#"<img src="{img}" alt="{name}" loading="lazy">"#,
            r#"<h3 class="product-card__name">{name}</h3>"#,
            r#"<p class="product-card__category">{category}</p>"#,
            r#"<p class="product-card__price">{price}</p>"#,
            "</div>"
        ),
        tags = clean_text(&card.tags()),
        img = clean_text(&card.image_url),
        name = clean_text(&card.name),
        category = clean_text(&card.category_name),
        price = clean_text(&card.price),
    );
}

/// Server-rendered shop markup consumed by the frontend bundle.
///
/// Every card is present in the grid; filtering and paging happen in the
/// browser.
pub fn render_shop_page(filters: &ShopFilters, cards: &[ProductCard], page_size: usize) -> String {
    let mut out = String::with_capacity(4096 + cards.len() * 256);
    out.push_str(concat!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n",
        "<meta charset=\"utf-8\">\n",
        "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
        "<title>Shop</title>\n",
        "<link rel=\"stylesheet\" href=\"/static/css/shop.css\">\n",
        "</head>\n<body>\n<main class=\"shop\">\n",
    ));

    let _ = write!(
        out,
        r#"<nav id="{}" class="category-list">"#,
        RequiredRegion::CategoryList.element_id()
    );
    for category in filters.meta.iter().chain(filters.regular.iter()) {
        render_filter_button(&mut out, category);
    }
    out.push_str("</nav>\n");

    let _ = write!(
        out,
        r#"<section id="{}" class="product-grid">"#,
        RequiredRegion::ProductGrid.element_id()
    );
    for card in cards {
        render_card(&mut out, card);
    }
    out.push_str("</section>\n");

    let _ = writeln!(
        out,
        r#"<div id="{}" class="pagination-controls" data-page-size="{page_size}"></div>"#,
        RequiredRegion::PaginationControls.element_id()
    );

    out.push_str(concat!(
        "</main>\n",
        "<script type=\"module\">import init from '/pkg/frontend.js'; init();</script>\n",
        "</body>\n</html>\n",
    ));
    out
}
