//! Attribute definitions and the per-product values assigned to them

use chrono::{DateTime, Utc};

/// Attribute definition scoped to a category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub id: i64,
    pub name: String,
    /// Free-form type tag such as "string", "number" or "enum"
    pub data_type: String,
    pub category_id: i64,
    pub is_required: bool,
    pub remark: String,
    pub is_enabled: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

/// User-supplied attribute fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeDraft {
    pub name: String,
    pub data_type: String,
    pub category_id: i64,
    pub is_required: bool,
    pub remark: String,
    pub is_enabled: bool,
}

impl AttributeDraft {
    pub fn new(name: impl Into<String>, data_type: impl Into<String>, category_id: i64) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
            category_id,
            is_required: false,
            remark: String::new(),
            is_enabled: true,
        }
    }
}

impl Attribute {
    /// Current mutable fields as a draft
    pub fn draft(&self) -> AttributeDraft {
        AttributeDraft {
            name: self.name.clone(),
            data_type: self.data_type.clone(),
            category_id: self.category_id,
            is_required: self.is_required,
            remark: self.remark.clone(),
            is_enabled: self.is_enabled,
        }
    }

    #[inline]
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// Value of one attribute for one product
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductAttribute {
    pub id: i64,
    pub product_id: i64,
    pub attribute_id: i64,
    pub value: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

/// User-supplied product attribute fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductAttributeDraft {
    pub product_id: i64,
    pub attribute_id: i64,
    pub value: String,
}

impl ProductAttribute {
    /// Current mutable fields as a draft
    pub fn draft(&self) -> ProductAttributeDraft {
        ProductAttributeDraft {
            product_id: self.product_id,
            attribute_id: self.attribute_id,
            value: self.value.clone(),
        }
    }

    #[inline]
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}
