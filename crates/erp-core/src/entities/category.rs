//! Category entity - a node in the product category tree

use chrono::{DateTime, Utc};

/// Category entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub description: String,
    /// Parent category, `None` for a root node
    pub parent_id: Option<i64>,
    pub level_remark: String,
    pub is_enabled: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

/// User-supplied category fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryDraft {
    pub name: String,
    pub description: String,
    pub parent_id: Option<i64>,
    pub level_remark: String,
    pub is_enabled: bool,
}

impl CategoryDraft {
    /// Create an enabled root category draft
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            parent_id: None,
            level_remark: String::new(),
            is_enabled: true,
        }
    }

    /// Set the parent category
    pub fn with_parent(mut self, parent_id: i64) -> Self {
        self.parent_id = Some(parent_id);
        self
    }
}

impl Category {
    /// Current mutable fields as a draft
    pub fn draft(&self) -> CategoryDraft {
        CategoryDraft {
            name: self.name.clone(),
            description: self.description.clone(),
            parent_id: self.parent_id,
            level_remark: self.level_remark.clone(),
            is_enabled: self.is_enabled,
        }
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    #[inline]
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}
