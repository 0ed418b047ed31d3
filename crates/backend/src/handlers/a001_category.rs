use axum::{extract::Path, http::StatusCode, Json};
use contracts::domain::a001_category::aggregate::{Category, CategoryDto};
use serde_json::json;

use crate::domain::a001_category;
use crate::shared::data::db::get_connection;
use crate::shared::error::CatalogError;

/// GET /api/a001/categories
pub async fn list_all() -> Result<Json<Vec<Category>>, CatalogError> {
    Ok(Json(a001_category::service::list_all(get_connection()).await?))
}

/// POST /api/a001/categories
pub async fn create(
    Json(dto): Json<CategoryDto>,
) -> Result<(StatusCode, Json<serde_json::Value>), CatalogError> {
    let id = a001_category::service::create(get_connection(), dto).await?;
    Ok((StatusCode::CREATED, Json(json!({ "id": id.to_string() }))))
}

/// DELETE /api/a001/categories/:id
pub async fn delete(Path(id): Path<String>) -> Result<StatusCode, CatalogError> {
    a001_category::service::delete(get_connection(), &id).await?;
    Ok(StatusCode::NO_CONTENT)
}
