//! Entity and request mappers
//!
//! Implements `From` conversions from domain entities to response DTOs, from create
//! requests to drafts, and the overlay of update requests onto a stored draft.

use erp_core::{
    Attribute, AttributeDraft, Category, CategoryDraft, Link, LinkDraft, Product,
    ProductAttribute, ProductAttributeDraft, ProductDraft, Shop, ShopDraft, Supplier,
    SupplierDraft, User, UserDraft,
};

use super::requests::{
    CreateAttributeRequest, CreateCategoryRequest, CreateLinkRequest,
    CreateProductAttributeRequest, CreateProductRequest, CreateShopRequest,
    CreateSupplierRequest, UpdateAttributeRequest, UpdateCategoryRequest, UpdateLinkRequest,
    UpdateProductAttributeRequest, UpdateProductRequest, UpdateProfileRequest,
    UpdateShopRequest, UpdateSupplierRequest, UpdateUserRequest,
};
use super::responses::{
    AttributeResponse, CategoryResponse, LinkResponse, ProductAttributeResponse,
    ProductResponse, ShopResponse, SupplierResponse, UserResponse,
};

/// Replace `target` when the request carried a value
fn overlay<T>(target: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *target = value;
    }
}

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            phone: user.phone.clone(),
            user_type: user.user_type,
            is_enabled: user.is_enabled,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

impl UpdateUserRequest {
    /// Overlay the provided account fields. The password is handled separately.
    pub fn apply_to(&self, draft: &mut UserDraft) {
        overlay(&mut draft.name, self.name.clone());
        overlay(&mut draft.email, self.email.clone());
        overlay(&mut draft.phone, self.phone.clone());
        overlay(&mut draft.user_type, self.user_type);
        overlay(&mut draft.is_enabled, self.is_enabled);
    }
}

impl UpdateProfileRequest {
    pub fn apply_to(self, draft: &mut UserDraft) {
        overlay(&mut draft.name, self.name);
        overlay(&mut draft.email, self.email);
        overlay(&mut draft.phone, self.phone);
    }
}

// ============================================================================
// Supplier Mappers
// ============================================================================

impl From<&Supplier> for SupplierResponse {
    fn from(supplier: &Supplier) -> Self {
        Self {
            id: supplier.id,
            name: supplier.name.clone(),
            remark: supplier.remark.clone(),
            is_enabled: supplier.is_enabled,
            created_at: supplier.created_at,
            updated_at: supplier.updated_at,
        }
    }
}

impl From<Supplier> for SupplierResponse {
    fn from(supplier: Supplier) -> Self {
        Self::from(&supplier)
    }
}

impl From<CreateSupplierRequest> for SupplierDraft {
    fn from(request: CreateSupplierRequest) -> Self {
        Self {
            name: request.name,
            remark: request.remark,
            is_enabled: request.is_enabled,
        }
    }
}

impl UpdateSupplierRequest {
    pub fn apply_to(self, draft: &mut SupplierDraft) {
        overlay(&mut draft.name, self.name);
        overlay(&mut draft.remark, self.remark);
        overlay(&mut draft.is_enabled, self.is_enabled);
    }
}

// ============================================================================
// Shop Mappers
// ============================================================================

impl From<&Shop> for ShopResponse {
    fn from(shop: &Shop) -> Self {
        Self {
            id: shop.id,
            supplier_id: shop.supplier_id,
            name: shop.name.clone(),
            remark: shop.remark.clone(),
            is_enabled: shop.is_enabled,
            created_at: shop.created_at,
            updated_at: shop.updated_at,
        }
    }
}

impl From<Shop> for ShopResponse {
    fn from(shop: Shop) -> Self {
        Self::from(&shop)
    }
}

impl From<CreateShopRequest> for ShopDraft {
    fn from(request: CreateShopRequest) -> Self {
        Self {
            supplier_id: request.supplier_id,
            name: request.name,
            remark: request.remark,
            is_enabled: request.is_enabled,
        }
    }
}

impl UpdateShopRequest {
    pub fn apply_to(self, draft: &mut ShopDraft) {
        overlay(&mut draft.supplier_id, self.supplier_id);
        overlay(&mut draft.name, self.name);
        overlay(&mut draft.remark, self.remark);
        overlay(&mut draft.is_enabled, self.is_enabled);
    }
}

// ============================================================================
// Product Mappers
// ============================================================================

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            supplier_id: product.supplier_id,
            category_id: product.category_id,
            name: product.name,
            sku: product.sku,
            product_type: product.product_type,
            price: product.price,
            stock: product.stock,
            dynamic_attrs: product.dynamic_attrs,
            remark: product.remark,
            is_enabled: product.is_enabled,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

impl From<CreateProductRequest> for ProductDraft {
    fn from(request: CreateProductRequest) -> Self {
        Self {
            supplier_id: request.supplier_id,
            category_id: request.category_id,
            name: request.name,
            sku: request.sku,
            product_type: request.product_type,
            price: request.price,
            stock: request.stock,
            dynamic_attrs: request.dynamic_attrs,
            remark: request.remark,
            is_enabled: request.is_enabled,
        }
    }
}

impl UpdateProductRequest {
    pub fn apply_to(self, draft: &mut ProductDraft) {
        overlay(&mut draft.supplier_id, self.supplier_id);
        overlay(&mut draft.category_id, self.category_id);
        overlay(&mut draft.name, self.name);
        overlay(&mut draft.sku, self.sku);
        overlay(&mut draft.product_type, self.product_type);
        overlay(&mut draft.price, self.price);
        overlay(&mut draft.stock, self.stock);
        overlay(&mut draft.dynamic_attrs, self.dynamic_attrs);
        overlay(&mut draft.remark, self.remark);
        overlay(&mut draft.is_enabled, self.is_enabled);
    }
}

// ============================================================================
// Category Mappers
// ============================================================================

impl From<&Category> for CategoryResponse {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id,
            name: category.name.clone(),
            description: category.description.clone(),
            parent_id: category.parent_id,
            level_remark: category.level_remark.clone(),
            is_enabled: category.is_enabled,
            created_at: category.created_at,
            updated_at: category.updated_at,
        }
    }
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self::from(&category)
    }
}

impl From<CreateCategoryRequest> for CategoryDraft {
    fn from(request: CreateCategoryRequest) -> Self {
        Self {
            name: request.name,
            description: request.description,
            parent_id: request.parent_id,
            level_remark: request.level_remark,
            is_enabled: request.is_enabled,
        }
    }
}

impl UpdateCategoryRequest {
    pub fn apply_to(self, draft: &mut CategoryDraft) {
        overlay(&mut draft.name, self.name);
        overlay(&mut draft.description, self.description);
        overlay(&mut draft.parent_id, self.parent_id);
        overlay(&mut draft.level_remark, self.level_remark);
        overlay(&mut draft.is_enabled, self.is_enabled);
    }
}

// ============================================================================
// Link Mappers
// ============================================================================

impl From<&Link> for LinkResponse {
    fn from(link: &Link) -> Self {
        Self {
            id: link.id,
            name: link.name.clone(),
            url: link.url.clone(),
            base_remark: link.base_remark.clone(),
            shop_id: link.shop_id,
            category_id: link.category_id,
            remark: link.remark.clone(),
            is_enabled: link.is_enabled,
            created_at: link.created_at,
            updated_at: link.updated_at,
        }
    }
}

impl From<Link> for LinkResponse {
    fn from(link: Link) -> Self {
        Self::from(&link)
    }
}

impl From<CreateLinkRequest> for LinkDraft {
    fn from(request: CreateLinkRequest) -> Self {
        Self {
            name: request.name,
            url: request.url,
            base_remark: request.base_remark,
            shop_id: request.shop_id,
            category_id: request.category_id,
            remark: request.remark,
            is_enabled: request.is_enabled,
        }
    }
}

impl UpdateLinkRequest {
    pub fn apply_to(self, draft: &mut LinkDraft) {
        overlay(&mut draft.name, self.name);
        overlay(&mut draft.url, self.url);
        overlay(&mut draft.base_remark, self.base_remark);
        overlay(&mut draft.shop_id, self.shop_id);
        overlay(&mut draft.category_id, self.category_id);
        overlay(&mut draft.remark, self.remark);
        overlay(&mut draft.is_enabled, self.is_enabled);
    }
}

// ============================================================================
// Attribute Mappers
// ============================================================================

impl From<&Attribute> for AttributeResponse {
    fn from(attribute: &Attribute) -> Self {
        Self {
            id: attribute.id,
            name: attribute.name.clone(),
            data_type: attribute.data_type.clone(),
            category_id: attribute.category_id,
            is_required: attribute.is_required,
            remark: attribute.remark.clone(),
            is_enabled: attribute.is_enabled,
            created_at: attribute.created_at,
            updated_at: attribute.updated_at,
        }
    }
}

impl From<Attribute> for AttributeResponse {
    fn from(attribute: Attribute) -> Self {
        Self::from(&attribute)
    }
}

impl From<CreateAttributeRequest> for AttributeDraft {
    fn from(request: CreateAttributeRequest) -> Self {
        Self {
            name: request.name,
            data_type: request.data_type,
            category_id: request.category_id,
            is_required: request.is_required,
            remark: request.remark,
            is_enabled: request.is_enabled,
        }
    }
}

impl UpdateAttributeRequest {
    pub fn apply_to(self, draft: &mut AttributeDraft) {
        overlay(&mut draft.name, self.name);
        overlay(&mut draft.data_type, self.data_type);
        overlay(&mut draft.category_id, self.category_id);
        overlay(&mut draft.is_required, self.is_required);
        overlay(&mut draft.remark, self.remark);
        overlay(&mut draft.is_enabled, self.is_enabled);
    }
}

impl From<ProductAttribute> for ProductAttributeResponse {
    fn from(value: ProductAttribute) -> Self {
        Self {
            id: value.id,
            product_id: value.product_id,
            attribute_id: value.attribute_id,
            value: value.value,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl From<CreateProductAttributeRequest> for ProductAttributeDraft {
    fn from(request: CreateProductAttributeRequest) -> Self {
        Self {
            product_id: request.product_id,
            attribute_id: request.attribute_id,
            value: request.value,
        }
    }
}

impl UpdateProductAttributeRequest {
    pub fn apply_to(self, draft: &mut ProductAttributeDraft) {
        overlay(&mut draft.product_id, self.product_id);
        overlay(&mut draft.attribute_id, self.attribute_id);
        overlay(&mut draft.value, self.value);
    }
}
