//! Product model -> entity mapper

use erp_core::Product;

use crate::models::ProductModel;

impl From<ProductModel> for Product {
    fn from(model: ProductModel) -> Self {
        Product {
            id: model.id,
            supplier_id: model.supplier_id,
            category_id: model.category_id,
            name: model.name,
            sku: model.sku,
            product_type: model.product_type,
            price: model.price,
            stock: model.stock,
            dynamic_attrs: model.dynamic_attrs.0,
            remark: model.remark,
            is_enabled: model.is_enabled,
            created_at: model.created_at,
            updated_at: model.updated_at,
            deleted_at: model.deleted_at,
        }
    }
}
