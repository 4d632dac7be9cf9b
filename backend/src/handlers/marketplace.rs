//! HTTP handlers for the marketplace catalog

use axum::{extract::Query, Json};
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::services::catalog::{CatalogItem, CatalogService};

#[derive(Debug, Deserialize)]
pub struct ProductQuery {
    pub category: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ProductListResponse {
    pub products: Vec<CatalogItem>,
    pub total_count: usize,
}

/// List marketplace products with current prices
pub async fn list_products(
    Query(query): Query<ProductQuery>,
) -> AppResult<Json<ProductListResponse>> {
    let service = CatalogService::new();
    let products = service.list(query.category.as_deref())?;
    let total_count = products.len();
    Ok(Json(ProductListResponse {
        products,
        total_count,
    }))
}
