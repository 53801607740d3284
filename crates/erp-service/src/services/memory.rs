//! In-memory repository fakes for service tests
//!
//! A single `MemoryStore` implements every repository trait with the same
//! live-row, soft-delete and uniqueness rules as the PostgreSQL schema.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use erp_common::auth::JwtService;
use erp_core::traits::{
    AttributeFilter, AttributeRepository, CategoryFilter, CategoryRepository, LinkFilter,
    LinkRepository, ProductAttributeFilter, ProductAttributeRepository, ProductFilter,
    ProductRepository, RepoResult, ShopFilter, ShopRepository, SupplierRepository,
    UserRepository,
};
use erp_core::{
    Attribute, AttributeDraft, Category, CategoryDraft, DomainError, Link, LinkDraft, Product,
    ProductAttribute, ProductAttributeDraft, ProductDraft, Shop, ShopDraft, Supplier,
    SupplierDraft, User, UserDraft,
};

use super::context::{ServiceContext, ServiceContextBuilder};

pub const TEST_SECRET: &str = "test-secret-key-that-is-long-enough";

trait Row: Clone {
    fn id(&self) -> i64;
    fn is_live(&self) -> bool;
    fn soft_delete(&mut self, now: DateTime<Utc>);
    fn touch(&mut self, now: DateTime<Utc>);
}

macro_rules! impl_row {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Row for $ty {
                fn id(&self) -> i64 {
                    self.id
                }

                fn is_live(&self) -> bool {
                    self.deleted_at.is_none()
                }

                fn soft_delete(&mut self, now: DateTime<Utc>) {
                    self.deleted_at = Some(now);
                }

                fn touch(&mut self, now: DateTime<Utc>) {
                    self.updated_at = now;
                }
            }
        )*
    };
}

impl_row!(User, Supplier, Shop, Product, Category, Link, Attribute, ProductAttribute);

struct Table<T> {
    rows: Mutex<Vec<T>>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
        }
    }
}

impl<T: Row> Table<T> {
    fn lock(&self) -> MutexGuard<'_, Vec<T>> {
        self.rows.lock().unwrap()
    }

    fn find(&self, id: i64) -> Option<T> {
        self.lock().iter().find(|r| r.id() == id && r.is_live()).cloned()
    }

    fn list(&self, pred: impl Fn(&T) -> bool) -> Vec<T> {
        self.lock().iter().filter(|r| r.is_live() && pred(r)).cloned().collect()
    }

    fn insert(&self, build: impl FnOnce(i64, DateTime<Utc>) -> T) -> T {
        let mut rows = self.lock();
        let row = build(rows.len() as i64 + 1, Utc::now());
        rows.push(row.clone());
        row
    }

    fn modify(&self, id: i64, entity: &'static str, f: impl FnOnce(&mut T)) -> RepoResult<T> {
        let mut rows = self.lock();
        let row = rows
            .iter_mut()
            .find(|r| r.id() == id && r.is_live())
            .ok_or_else(|| DomainError::not_found(entity, id))?;
        f(row);
        row.touch(Utc::now());
        Ok(row.clone())
    }

    fn delete(&self, id: i64, entity: &'static str) -> RepoResult<()> {
        let mut rows = self.lock();
        let row = rows
            .iter_mut()
            .find(|r| r.id() == id && r.is_live())
            .ok_or_else(|| DomainError::not_found(entity, id))?;
        row.soft_delete(Utc::now());
        Ok(())
    }
}

/// Every table in one place
#[derive(Default)]
pub struct MemoryStore {
    users: Table<User>,
    password_hashes: Mutex<HashMap<i64, String>>,
    suppliers: Table<Supplier>,
    shops: Table<Shop>,
    products: Table<Product>,
    categories: Table<Category>,
    links: Table<Link>,
    attributes: Table<Attribute>,
    product_attributes: Table<ProductAttribute>,
}

impl MemoryStore {
    /// Overwrite a stored hash, e.g. to simulate a corrupt row
    pub fn set_password_hash(&self, user_id: i64, hash: &str) {
        self.password_hashes
            .lock()
            .unwrap()
            .insert(user_id, hash.to_string());
    }

    fn user_conflict(&self, draft: &UserDraft, exclude: Option<i64>) -> RepoResult<()> {
        let clash = self
            .users
            .list(|u| Some(u.id) != exclude && (u.name == draft.name || u.email == draft.email));
        match clash.first() {
            Some(u) if u.name == draft.name => {
                Err(DomainError::Conflict(format!("User name '{}' is already taken", draft.name)))
            }
            Some(_) => Err(DomainError::Conflict(format!(
                "Email '{}' is already registered",
                draft.email
            ))),
            None => Ok(()),
        }
    }

    fn sku_conflict(&self, sku: &str, exclude: Option<i64>) -> RepoResult<()> {
        if self.products.list(|p| p.sku == sku && Some(p.id) != exclude).is_empty() {
            Ok(())
        } else {
            Err(DomainError::Conflict(format!("SKU '{sku}' is already in use")))
        }
    }
}

/// Build a service context whose repositories all share one in-memory store
pub fn memory_context() -> (ServiceContext, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::default());
    let ctx = ServiceContextBuilder::new()
        .user_repo(store.clone())
        .supplier_repo(store.clone())
        .shop_repo(store.clone())
        .product_repo(store.clone())
        .category_repo(store.clone())
        .link_repo(store.clone())
        .attribute_repo(store.clone())
        .product_attribute_repo(store.clone())
        .jwt_service(Arc::new(JwtService::new(TEST_SECRET, 3600)))
        .build()
        .unwrap();
    (ctx, store)
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<User>> {
        Ok(self.users.find(id))
    }

    async fn find_by_name(&self, name: &str) -> RepoResult<Option<User>> {
        Ok(self.users.list(|u| u.name == name).into_iter().next())
    }

    async fn name_exists(&self, name: &str) -> RepoResult<bool> {
        Ok(!self.users.list(|u| u.name == name).is_empty())
    }

    async fn email_exists(&self, email: &str) -> RepoResult<bool> {
        Ok(!self.users.list(|u| u.email == email).is_empty())
    }

    async fn list(&self) -> RepoResult<Vec<User>> {
        Ok(self.users.list(|_| true))
    }

    async fn count(&self) -> RepoResult<i64> {
        Ok(self.users.list(|_| true).len() as i64)
    }

    async fn create(&self, draft: &UserDraft, password_hash: &str) -> RepoResult<User> {
        self.user_conflict(draft, None)?;
        let user = self.users.insert(|id, now| User {
            id,
            name: draft.name.clone(),
            email: draft.email.clone(),
            phone: draft.phone.clone(),
            user_type: draft.user_type,
            is_enabled: draft.is_enabled,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        });
        self.set_password_hash(user.id, password_hash);
        Ok(user)
    }

    async fn update(&self, id: i64, draft: &UserDraft) -> RepoResult<User> {
        self.user_conflict(draft, Some(id))?;
        self.users.modify(id, "User", |u| {
            u.name.clone_from(&draft.name);
            u.email.clone_from(&draft.email);
            u.phone.clone_from(&draft.phone);
            u.user_type = draft.user_type;
            u.is_enabled = draft.is_enabled;
        })
    }

    async fn delete(&self, id: i64) -> RepoResult<()> {
        self.users.delete(id, "User")
    }

    async fn get_password_hash(&self, id: i64) -> RepoResult<Option<String>> {
        if self.users.find(id).is_none() {
            return Ok(None);
        }
        Ok(self.password_hashes.lock().unwrap().get(&id).cloned())
    }

    async fn update_password(&self, id: i64, password_hash: &str) -> RepoResult<()> {
        self.users.modify(id, "User", |_| {})?;
        self.set_password_hash(id, password_hash);
        Ok(())
    }
}

#[async_trait]
impl SupplierRepository for MemoryStore {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Supplier>> {
        Ok(self.suppliers.find(id))
    }

    async fn list(&self) -> RepoResult<Vec<Supplier>> {
        Ok(self.suppliers.list(|_| true))
    }

    async fn create(&self, draft: &SupplierDraft) -> RepoResult<Supplier> {
        Ok(self.suppliers.insert(|id, now| Supplier {
            id,
            name: draft.name.clone(),
            remark: draft.remark.clone(),
            is_enabled: draft.is_enabled,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }))
    }

    async fn update(&self, id: i64, draft: &SupplierDraft) -> RepoResult<Supplier> {
        self.suppliers.modify(id, "Supplier", |s| {
            s.name.clone_from(&draft.name);
            s.remark.clone_from(&draft.remark);
            s.is_enabled = draft.is_enabled;
        })
    }

    async fn delete(&self, id: i64) -> RepoResult<()> {
        self.suppliers.delete(id, "Supplier")
    }

    async fn toggle_enabled(&self, id: i64) -> RepoResult<Supplier> {
        self.suppliers.modify(id, "Supplier", |s| s.is_enabled = !s.is_enabled)
    }
}

#[async_trait]
impl ShopRepository for MemoryStore {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Shop>> {
        Ok(self.shops.find(id))
    }

    async fn list(&self, filter: &ShopFilter) -> RepoResult<Vec<Shop>> {
        Ok(self.shops.list(|s| filter.matches(s)))
    }

    async fn create(&self, draft: &ShopDraft) -> RepoResult<Shop> {
        Ok(self.shops.insert(|id, now| Shop {
            id,
            supplier_id: draft.supplier_id,
            name: draft.name.clone(),
            remark: draft.remark.clone(),
            is_enabled: draft.is_enabled,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }))
    }

    async fn update(&self, id: i64, draft: &ShopDraft) -> RepoResult<Shop> {
        self.shops.modify(id, "Shop", |s| {
            s.supplier_id = draft.supplier_id;
            s.name.clone_from(&draft.name);
            s.remark.clone_from(&draft.remark);
            s.is_enabled = draft.is_enabled;
        })
    }

    async fn delete(&self, id: i64) -> RepoResult<()> {
        self.shops.delete(id, "Shop")
    }

    async fn toggle_enabled(&self, id: i64) -> RepoResult<Shop> {
        self.shops.modify(id, "Shop", |s| s.is_enabled = !s.is_enabled)
    }
}

#[async_trait]
impl ProductRepository for MemoryStore {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Product>> {
        Ok(self.products.find(id))
    }

    async fn list(&self, filter: &ProductFilter) -> RepoResult<Vec<Product>> {
        Ok(self.products.list(|p| filter.matches(p)))
    }

    async fn sku_exists(&self, sku: &str, exclude_id: Option<i64>) -> RepoResult<bool> {
        Ok(self.sku_conflict(sku, exclude_id).is_err())
    }

    async fn create(&self, draft: &ProductDraft) -> RepoResult<Product> {
        self.sku_conflict(&draft.sku, None)?;
        Ok(self.products.insert(|id, now| Product {
            id,
            supplier_id: draft.supplier_id,
            category_id: draft.category_id,
            name: draft.name.clone(),
            sku: draft.sku.clone(),
            product_type: draft.product_type,
            price: draft.price,
            stock: draft.stock,
            dynamic_attrs: draft.dynamic_attrs.clone(),
            remark: draft.remark.clone(),
            is_enabled: draft.is_enabled,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }))
    }

    async fn update(&self, id: i64, draft: &ProductDraft) -> RepoResult<Product> {
        self.sku_conflict(&draft.sku, Some(id))?;
        self.products.modify(id, "Product", |p| {
            p.supplier_id = draft.supplier_id;
            p.category_id = draft.category_id;
            p.name.clone_from(&draft.name);
            p.sku.clone_from(&draft.sku);
            p.product_type = draft.product_type;
            p.price = draft.price;
            p.stock = draft.stock;
            p.dynamic_attrs.clone_from(&draft.dynamic_attrs);
            p.remark.clone_from(&draft.remark);
            p.is_enabled = draft.is_enabled;
        })
    }

    async fn delete(&self, id: i64) -> RepoResult<()> {
        self.products.delete(id, "Product")
    }

    async fn toggle_enabled(&self, id: i64) -> RepoResult<Product> {
        self.products.modify(id, "Product", |p| p.is_enabled = !p.is_enabled)
    }

    async fn update_stock(&self, id: i64, stock: i32) -> RepoResult<Product> {
        self.products.modify(id, "Product", |p| p.stock = stock)
    }

    async fn update_price(&self, id: i64, price: f64) -> RepoResult<Product> {
        self.products.modify(id, "Product", |p| p.price = price)
    }
}

#[async_trait]
impl CategoryRepository for MemoryStore {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Category>> {
        Ok(self.categories.find(id))
    }

    async fn list(&self, filter: &CategoryFilter) -> RepoResult<Vec<Category>> {
        Ok(self.categories.list(|c| filter.matches(c)))
    }

    async fn find_children(&self, parent_id: i64) -> RepoResult<Vec<Category>> {
        Ok(self.categories.list(|c| c.parent_id == Some(parent_id)))
    }

    async fn count_children(&self, parent_id: i64) -> RepoResult<i64> {
        Ok(self.categories.list(|c| c.parent_id == Some(parent_id)).len() as i64)
    }

    async fn create(&self, draft: &CategoryDraft) -> RepoResult<Category> {
        Ok(self.categories.insert(|id, now| Category {
            id,
            name: draft.name.clone(),
            description: draft.description.clone(),
            parent_id: draft.parent_id,
            level_remark: draft.level_remark.clone(),
            is_enabled: draft.is_enabled,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }))
    }

    async fn update(&self, id: i64, draft: &CategoryDraft) -> RepoResult<Category> {
        self.categories.modify(id, "Category", |c| {
            c.name.clone_from(&draft.name);
            c.description.clone_from(&draft.description);
            c.parent_id = draft.parent_id;
            c.level_remark.clone_from(&draft.level_remark);
            c.is_enabled = draft.is_enabled;
        })
    }

    async fn delete(&self, id: i64) -> RepoResult<()> {
        self.categories.delete(id, "Category")
    }

    async fn toggle_enabled(&self, id: i64) -> RepoResult<Category> {
        self.categories.modify(id, "Category", |c| c.is_enabled = !c.is_enabled)
    }
}

#[async_trait]
impl LinkRepository for MemoryStore {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Link>> {
        Ok(self.links.find(id))
    }

    async fn list(&self, filter: &LinkFilter) -> RepoResult<Vec<Link>> {
        Ok(self.links.list(|l| filter.matches(l)))
    }

    async fn create(&self, draft: &LinkDraft) -> RepoResult<Link> {
        Ok(self.links.insert(|id, now| Link {
            id,
            name: draft.name.clone(),
            url: draft.url.clone(),
            base_remark: draft.base_remark.clone(),
            shop_id: draft.shop_id,
            category_id: draft.category_id,
            remark: draft.remark.clone(),
            is_enabled: draft.is_enabled,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }))
    }

    async fn update(&self, id: i64, draft: &LinkDraft) -> RepoResult<Link> {
        self.links.modify(id, "Link", |l| {
            l.name.clone_from(&draft.name);
            l.url.clone_from(&draft.url);
            l.base_remark.clone_from(&draft.base_remark);
            l.shop_id = draft.shop_id;
            l.category_id = draft.category_id;
            l.remark.clone_from(&draft.remark);
            l.is_enabled = draft.is_enabled;
        })
    }

    async fn delete(&self, id: i64) -> RepoResult<()> {
        self.links.delete(id, "Link")
    }

    async fn toggle_enabled(&self, id: i64) -> RepoResult<Link> {
        self.links.modify(id, "Link", |l| l.is_enabled = !l.is_enabled)
    }
}

#[async_trait]
impl AttributeRepository for MemoryStore {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Attribute>> {
        Ok(self.attributes.find(id))
    }

    async fn list(&self, filter: &AttributeFilter) -> RepoResult<Vec<Attribute>> {
        Ok(self.attributes.list(|a| filter.matches(a)))
    }

    async fn create(&self, draft: &AttributeDraft) -> RepoResult<Attribute> {
        Ok(self.attributes.insert(|id, now| Attribute {
            id,
            name: draft.name.clone(),
            data_type: draft.data_type.clone(),
            category_id: draft.category_id,
            is_required: draft.is_required,
            remark: draft.remark.clone(),
            is_enabled: draft.is_enabled,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }))
    }

    async fn update(&self, id: i64, draft: &AttributeDraft) -> RepoResult<Attribute> {
        self.attributes.modify(id, "Attribute", |a| {
            a.name.clone_from(&draft.name);
            a.data_type.clone_from(&draft.data_type);
            a.category_id = draft.category_id;
            a.is_required = draft.is_required;
            a.remark.clone_from(&draft.remark);
            a.is_enabled = draft.is_enabled;
        })
    }

    async fn delete(&self, id: i64) -> RepoResult<()> {
        self.attributes.delete(id, "Attribute")
    }

    async fn toggle_enabled(&self, id: i64) -> RepoResult<Attribute> {
        self.attributes.modify(id, "Attribute", |a| a.is_enabled = !a.is_enabled)
    }
}

#[async_trait]
impl ProductAttributeRepository for MemoryStore {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<ProductAttribute>> {
        Ok(self.product_attributes.find(id))
    }

    async fn list(&self, filter: &ProductAttributeFilter) -> RepoResult<Vec<ProductAttribute>> {
        Ok(self.product_attributes.list(|v| filter.matches(v)))
    }

    async fn create(&self, draft: &ProductAttributeDraft) -> RepoResult<ProductAttribute> {
        Ok(self.product_attributes.insert(|id, now| ProductAttribute {
            id,
            product_id: draft.product_id,
            attribute_id: draft.attribute_id,
            value: draft.value.clone(),
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }))
    }

    async fn update(
        &self,
        id: i64,
        draft: &ProductAttributeDraft,
    ) -> RepoResult<ProductAttribute> {
        self.product_attributes.modify(id, "ProductAttribute", |v| {
            v.product_id = draft.product_id;
            v.attribute_id = draft.attribute_id;
            v.value.clone_from(&draft.value);
        })
    }

    async fn delete(&self, id: i64) -> RepoResult<()> {
        self.product_attributes.delete(id, "ProductAttribute")
    }
}
