use axum::{extract::Path, http::StatusCode, Json};
use contracts::domain::a002_product::aggregate::{ProductCard, ProductDto};
use serde_json::json;

use crate::domain::a002_product;
use crate::shared::data::db::get_connection;
use crate::shared::error::CatalogError;

/// GET /api/a002/products
pub async fn list_all() -> Result<Json<Vec<ProductCard>>, CatalogError> {
    Ok(Json(a002_product::service::list_cards_by_category(get_connection()).await?))
}

/// POST /api/a002/products
pub async fn create(
    Json(dto): Json<ProductDto>,
) -> Result<(StatusCode, Json<serde_json::Value>), CatalogError> {
    let id = a002_product::service::create(get_connection(), dto).await?;
    Ok((StatusCode::CREATED, Json(json!({ "id": id.to_string() }))))
}

/// DELETE /api/a002/products/:id
pub async fn delete(Path(id): Path<String>) -> Result<StatusCode, CatalogError> {
    a002_product::service::delete(get_connection(), &id).await?;
    Ok(StatusCode::NO_CONTENT)
}
