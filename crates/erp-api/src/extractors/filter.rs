//! List filter extractor
//!
//! Reads equality filters from the query string. Each entity accepts a fixed
//! set of keys; unknown keys are ignored and an unparsable value is rejected.

use std::collections::HashMap;
use std::str::FromStr;

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use erp_core::{
    AttributeFilter, CategoryFilter, LinkFilter, ProductAttributeFilter, ProductFilter, ShopFilter,
};

use crate::response::ApiError;

type QueryMap = HashMap<String, String>;

/// A filter that can be built from raw query parameters
pub trait FromQueryMap: Sized {
    fn from_query_map(query: &QueryMap) -> Result<Self, ApiError>;
}

/// Parse an optional query value; an empty value counts as absent
fn param<T: FromStr>(query: &QueryMap, key: &str) -> Result<Option<T>, ApiError> {
    match query.get(key).map(String::as_str) {
        None | Some("") => Ok(None),
        Some(raw) => raw
            .parse()
            .map(Some)
            .map_err(|_| ApiError::invalid_query(format!("{key}={raw}"))),
    }
}

/// Booleans accept the usual spellings: true/false, 1/0, t/f
fn flag(query: &QueryMap, key: &str) -> Result<Option<bool>, ApiError> {
    match query.get(key).map(String::as_str) {
        None | Some("") => Ok(None),
        Some("1" | "t" | "T" | "true" | "TRUE" | "True") => Ok(Some(true)),
        Some("0" | "f" | "F" | "false" | "FALSE" | "False") => Ok(Some(false)),
        Some(raw) => Err(ApiError::invalid_query(format!("{key}={raw}"))),
    }
}

impl FromQueryMap for ShopFilter {
    fn from_query_map(query: &QueryMap) -> Result<Self, ApiError> {
        Ok(Self {
            supplier_id: param(query, "supplier_id")?,
            is_enabled: flag(query, "is_enabled")?,
        })
    }
}

impl FromQueryMap for ProductFilter {
    fn from_query_map(query: &QueryMap) -> Result<Self, ApiError> {
        Ok(Self {
            supplier_id: param(query, "supplier_id")?,
            category_id: param(query, "category_id")?,
            product_type: param(query, "type")?,
            is_enabled: flag(query, "is_enabled")?,
        })
    }
}

impl FromQueryMap for CategoryFilter {
    fn from_query_map(query: &QueryMap) -> Result<Self, ApiError> {
        Ok(Self {
            parent_id: param(query, "parent_id")?,
            is_enabled: flag(query, "is_enabled")?,
        })
    }
}

impl FromQueryMap for LinkFilter {
    fn from_query_map(query: &QueryMap) -> Result<Self, ApiError> {
        Ok(Self {
            shop_id: param(query, "shop_id")?,
            category_id: param(query, "category_id")?,
            is_enabled: flag(query, "is_enabled")?,
        })
    }
}

impl FromQueryMap for AttributeFilter {
    fn from_query_map(query: &QueryMap) -> Result<Self, ApiError> {
        Ok(Self {
            category_id: param(query, "category_id")?,
            is_enabled: flag(query, "is_enabled")?,
        })
    }
}

impl FromQueryMap for ProductAttributeFilter {
    fn from_query_map(query: &QueryMap) -> Result<Self, ApiError> {
        Ok(Self {
            product_id: param(query, "product_id")?,
            attribute_id: param(query, "attribute_id")?,
        })
    }
}

/// Extracted list filter
#[derive(Debug, Clone, Copy)]
pub struct ListFilter<F>(pub F);

#[async_trait]
impl<S, F> FromRequestParts<S> for ListFilter<F>
where
    S: Send + Sync,
    F: FromQueryMap,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(query) = Query::<QueryMap>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.body_text()))?;

        F::from_query_map(&query).map(ListFilter)
    }
}
