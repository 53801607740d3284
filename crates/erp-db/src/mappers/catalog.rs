//! Catalog model -> entity mappers

use erp_core::{Attribute, Category, Link, ProductAttribute, Shop, Supplier};

use crate::models::{
    AttributeModel, CategoryModel, LinkModel, ProductAttributeModel, ShopModel, SupplierModel,
};

impl From<SupplierModel> for Supplier {
    fn from(model: SupplierModel) -> Self {
        Supplier {
            id: model.id,
            name: model.name,
            remark: model.remark,
            is_enabled: model.is_enabled,
            created_at: model.created_at,
            updated_at: model.updated_at,
            deleted_at: model.deleted_at,
        }
    }
}

impl From<ShopModel> for Shop {
    fn from(model: ShopModel) -> Self {
        Shop {
            id: model.id,
            supplier_id: model.supplier_id,
            name: model.name,
            remark: model.remark,
            is_enabled: model.is_enabled,
            created_at: model.created_at,
            updated_at: model.updated_at,
            deleted_at: model.deleted_at,
        }
    }
}

impl From<CategoryModel> for Category {
    fn from(model: CategoryModel) -> Self {
        Category {
            id: model.id,
            name: model.name,
            description: model.description,
            parent_id: model.parent_id,
            level_remark: model.level_remark,
            is_enabled: model.is_enabled,
            created_at: model.created_at,
            updated_at: model.updated_at,
            deleted_at: model.deleted_at,
        }
    }
}

impl From<LinkModel> for Link {
    fn from(model: LinkModel) -> Self {
        Link {
            id: model.id,
            name: model.name,
            url: model.url,
            base_remark: model.base_remark,
            shop_id: model.shop_id,
            category_id: model.category_id,
            remark: model.remark,
            is_enabled: model.is_enabled,
            created_at: model.created_at,
            updated_at: model.updated_at,
            deleted_at: model.deleted_at,
        }
    }
}

impl From<AttributeModel> for Attribute {
    fn from(model: AttributeModel) -> Self {
        Attribute {
            id: model.id,
            name: model.name,
            data_type: model.data_type,
            category_id: model.category_id,
            is_required: model.is_required,
            remark: model.remark,
            is_enabled: model.is_enabled,
            created_at: model.created_at,
            updated_at: model.updated_at,
            deleted_at: model.deleted_at,
        }
    }
}

impl From<ProductAttributeModel> for ProductAttribute {
    fn from(model: ProductAttributeModel) -> Self {
        ProductAttribute {
            id: model.id,
            product_id: model.product_id,
            attribute_id: model.attribute_id,
            value: model.value,
            created_at: model.created_at,
            updated_at: model.updated_at,
            deleted_at: model.deleted_at,
        }
    }
}
