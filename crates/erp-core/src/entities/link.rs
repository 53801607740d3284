//! Link entity - an external listing URL for a shop within a category

use chrono::{DateTime, Utc};

/// Link entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub id: i64,
    pub name: String,
    pub url: String,
    pub base_remark: String,
    pub shop_id: i64,
    pub category_id: i64,
    pub remark: String,
    pub is_enabled: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

/// User-supplied link fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkDraft {
    pub name: String,
    pub url: String,
    pub base_remark: String,
    pub shop_id: i64,
    pub category_id: i64,
    pub remark: String,
    pub is_enabled: bool,
}

impl LinkDraft {
    pub fn new(
        name: impl Into<String>,
        url: impl Into<String>,
        shop_id: i64,
        category_id: i64,
    ) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            base_remark: String::new(),
            shop_id,
            category_id,
            remark: String::new(),
            is_enabled: true,
        }
    }
}

impl Link {
    /// Current mutable fields as a draft
    pub fn draft(&self) -> LinkDraft {
        LinkDraft {
            name: self.name.clone(),
            url: self.url.clone(),
            base_remark: self.base_remark.clone(),
            shop_id: self.shop_id,
            category_id: self.category_id,
            remark: self.remark.clone(),
            is_enabled: self.is_enabled,
        }
    }

    #[inline]
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}
