//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers between domain entities, drafts and DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

// Re-export commonly used request types
pub use requests::{
    ChangePasswordRequest, CreateAttributeRequest, CreateCategoryRequest, CreateLinkRequest,
    CreateProductAttributeRequest, CreateProductRequest, CreateShopRequest,
    CreateSupplierRequest, CreateUserRequest, LoginRequest, RegisterRequest,
    UpdateAttributeRequest, UpdateCategoryRequest, UpdateLinkRequest,
    UpdateProductAttributeRequest, UpdateProductRequest, UpdatePriceRequest,
    UpdateProfileRequest, UpdateShopRequest, UpdateStockRequest, UpdateSupplierRequest,
    UpdateUserRequest,
};

// Re-export commonly used response types
pub use responses::{
    AttributeResponse, CategoryResponse, HealthResponse, InfoResponse, LinkResponse,
    LoginResponse, ProductAttributeResponse, ProductResponse, ShopResponse, SupplierResponse,
    UserResponse,
};
