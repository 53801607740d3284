//! Supplier entity - an upstream vendor owning shops and products

use chrono::{DateTime, Utc};

/// Supplier entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Supplier {
    pub id: i64,
    pub name: String,
    pub remark: String,
    pub is_enabled: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

/// User-supplied supplier fields, used for both insert and full overwrite
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupplierDraft {
    pub name: String,
    pub remark: String,
    pub is_enabled: bool,
}

impl SupplierDraft {
    /// Create a new enabled draft with an empty remark
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            remark: String::new(),
            is_enabled: true,
        }
    }
}

impl Supplier {
    /// Current mutable fields as a draft
    pub fn draft(&self) -> SupplierDraft {
        SupplierDraft {
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
