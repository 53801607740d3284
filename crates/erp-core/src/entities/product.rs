//! Product entity - a sellable item with free-form dynamic attributes

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

/// Open string-keyed attribute document stored alongside a product.
///
/// Values are restricted to JSON-compatible kinds (string, number, bool, null, array, object)
/// and key order carries no meaning.
pub type DynamicAttrs = Map<String, Value>;

/// Product entity
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i64,
    pub supplier_id: i64,
    pub category_id: i64,
    pub name: String,
    pub sku: String,
    pub product_type: i32,
    pub price: f64,
    pub stock: i32,
    pub dynamic_attrs: DynamicAttrs,
    pub remark: String,
    pub is_enabled: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

/// User-supplied product fields
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub supplier_id: i64,
    pub category_id: i64,
    pub name: String,
    pub sku: String,
    pub product_type: i32,
    pub price: f64,
    pub stock: i32,
    pub dynamic_attrs: DynamicAttrs,
    pub remark: String,
    pub is_enabled: bool,
}

impl ProductDraft {
    /// Create an enabled draft with zero price and stock
    pub fn new(
        supplier_id: i64,
        category_id: i64,
        name: impl Into<String>,
        sku: impl Into<String>,
    ) -> Self {
        Self {
            supplier_id,
            category_id,
            name: name.into(),
            sku: sku.into(),
            product_type: 0,
            price: 0.0,
            stock: 0,
            dynamic_attrs: DynamicAttrs::new(),
            remark: String::new(),
            is_enabled: true,
        }
    }
}

impl Product {
    /// Current mutable fields as a draft
    pub fn draft(&self) -> ProductDraft {
        ProductDraft {
            supplier_id: self.supplier_id,
            category_id: self.category_id,
            name: self.name.clone(),
            sku: self.sku.clone(),
            product_type: self.product_type,
            price: self.price,
            stock: self.stock,
            dynamic_attrs: self.dynamic_attrs.clone(),
            remark: self.remark.clone(),
            is_enabled: self.is_enabled,
        }
    }

    #[inline]
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Look up a single dynamic attribute
    pub fn attr(&self, key: &str) -> Option<&Value> {
        self.dynamic_attrs.get(key)
    }
}
