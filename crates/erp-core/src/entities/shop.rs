//! Shop entity - a storefront operated by a supplier

use chrono::{DateTime, Utc};

/// Shop entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shop {
    pub id: i64,
    pub supplier_id: i64,
    pub name: String,
    pub remark: String,
    pub is_enabled: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

/// User-supplied shop fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShopDraft {
    pub supplier_id: i64,
    pub name: String,
    pub remark: String,
    pub is_enabled: bool,
}

impl ShopDraft {
    pub fn new(supplier_id: i64, name: impl Into<String>) -> Self {
        Self {
            supplier_id,
            name: name.into(),
            remark: String::new(),
            is_enabled: true,
        }
    }
}

impl Shop {
    /// Current mutable fields as a draft
    pub fn draft(&self) -> ShopDraft {
        ShopDraft {
            supplier_id: self.supplier_id,
            name: self.name.clone(),
            remark: self.remark.clone(),
            is_enabled: self.is_enabled,
        }
    }

    #[inline]
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}
