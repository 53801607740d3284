//! List filters - optional equality constraints, one struct per filterable entity
//!
//! A `None` field places no constraint on that column. Each struct only carries the
//! columns that entity allows filtering on.

use crate::entities::{Attribute, Category, Link, Product, ProductAttribute, Shop};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShopFilter {
    pub supplier_id: Option<i64>,
    pub is_enabled: Option<bool>,
}

impl ShopFilter {
    /// Check whether a shop satisfies every present constraint
    pub fn matches(&self, shop: &Shop) -> bool {
        self.supplier_id.is_none_or(|v| shop.supplier_id == v)
            && self.is_enabled.is_none_or(|v| shop.is_enabled == v)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProductFilter {
    pub supplier_id: Option<i64>,
    pub category_id: Option<i64>,
    pub product_type: Option<i32>,
    pub is_enabled: Option<bool>,
}

impl ProductFilter {
    pub fn matches(&self, product: &Product) -> bool {
        self.supplier_id.is_none_or(|v| product.supplier_id == v)
            && self.category_id.is_none_or(|v| product.category_id == v)
            && self.product_type.is_none_or(|v| product.product_type == v)
            && self.is_enabled.is_none_or(|v| product.is_enabled == v)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryFilter {
    pub parent_id: Option<i64>,
    pub is_enabled: Option<bool>,
}

impl CategoryFilter {
    pub fn matches(&self, category: &Category) -> bool {
        self.parent_id.is_none_or(|v| category.parent_id == Some(v))
            && self.is_enabled.is_none_or(|v| category.is_enabled == v)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinkFilter {
    pub shop_id: Option<i64>,
    pub category_id: Option<i64>,
    pub is_enabled: Option<bool>,
}

impl LinkFilter {
    pub fn matches(&self, link: &Link) -> bool {
        self.shop_id.is_none_or(|v| link.shop_id == v)
            && self.category_id.is_none_or(|v| link.category_id == v)
            && self.is_enabled.is_none_or(|v| link.is_enabled == v)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AttributeFilter {
    pub category_id: Option<i64>,
    pub is_enabled: Option<bool>,
}

impl AttributeFilter {
    pub fn matches(&self, attribute: &Attribute) -> bool {
        self.category_id.is_none_or(|v| attribute.category_id == v)
            && self.is_enabled.is_none_or(|v| attribute.is_enabled == v)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProductAttributeFilter {
    pub product_id: Option<i64>,
    pub attribute_id: Option<i64>,
}

impl ProductAttributeFilter {
    pub fn matches(&self, value: &ProductAttribute) -> bool {
        self.product_id.is_none_or(|v| value.product_id == v)
            && self.attribute_id.is_none_or(|v| value.attribute_id == v)
    }
}
