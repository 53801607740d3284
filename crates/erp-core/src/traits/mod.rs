//! Repository ports and their list filters

mod filters;
mod repositories;

pub use filters::{
    AttributeFilter, CategoryFilter, LinkFilter, ProductAttributeFilter, ProductFilter, ShopFilter,
};
pub use repositories::{
    AttributeRepository, CategoryRepository, LinkRepository, ProductAttributeRepository,
    ProductRepository, RepoResult, ShopRepository, SupplierRepository, UserRepository,
};
