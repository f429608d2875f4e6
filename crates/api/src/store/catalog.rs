//! Catalog store: products.

use std::sync::{RwLock, RwLockReadGuard};

use chrono::Utc;
use tracing::{debug, info, instrument};

use mercato_core::ProductId;

use super::{StoreError, read_lock, seed, write_lock};
use crate::models::{Product, ProductFilter, ProductInput};

const STORE: &str = "catalog";

struct Catalog {
    products: Vec<Product>,
    /// Next sequential product number. Never reused, never derived from
    /// `products.len()`.
    next_id: u64,
}

impl Catalog {
    fn insert(&mut self, input: ProductInput) -> Product {
        let product = Product {
            id: ProductId::new(self.next_id.to_string()),
            name: input.name,
            description: input.description,
            price: input.price,
            image: input.image,
            category: input.category,
            created_at: Utc::now(),
        };
        self.next_id += 1;
        self.products.push(product.clone());
        product
    }

    fn find(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }
}

/// Product catalog.
pub struct CatalogStore {
    inner: RwLock<Catalog>,
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogStore {
    /// Create an empty catalog. The first product gets ID `"1"`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            inner: RwLock::new(Catalog {
                products: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Create a catalog pre-loaded with the demo products (IDs `"1"`..`"8"`).
    #[must_use]
    pub fn seeded() -> Self {
        let mut catalog = Catalog {
            products: Vec::new(),
            next_id: 1,
        };
        for input in seed::demo_products() {
            catalog.insert(input);
        }
        debug!(count = catalog.products.len(), "Seeded catalog");

        Self {
            inner: RwLock::new(catalog),
        }
    }

    /// List products passing `filter`, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::LockPoisoned` if the store lock is poisoned.
    #[instrument(skip(self))]
    pub fn list(&self, filter: &ProductFilter) -> Result<Vec<Product>, StoreError> {
        let catalog = read_lock(&self.inner, STORE)?;
        Ok(catalog
            .products
            .iter()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect())
    }

    /// Get a product by ID.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no product has this ID.
    pub fn get(&self, id: &ProductId) -> Result<Product, StoreError> {
        read_lock(&self.inner, STORE)?
            .find(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound("Product not found".to_owned()))
    }

    /// Add a product, assigning the next sequential ID.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::LockPoisoned` if the store lock is poisoned.
    #[instrument(skip(self, input), fields(name = %input.name))]
    pub fn create(&self, input: ProductInput) -> Result<Product, StoreError> {
        let product = write_lock(&self.inner, STORE)?.insert(input);
        info!(product_id = %product.id, "Created product");
        Ok(product)
    }

    /// Number of products in the catalog.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::LockPoisoned` if the store lock is poisoned.
    pub fn len(&self) -> Result<usize, StoreError> {
        Ok(read_lock(&self.inner, STORE)?.products.len())
    }

    /// Whether the catalog holds no products.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::LockPoisoned` if the store lock is poisoned.
    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }

    /// Take a consistent read-only view of the catalog.
    ///
    /// The view holds the read lock until dropped; keep it short-lived.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::LockPoisoned` if the store lock is poisoned.
    pub fn view(&self) -> Result<CatalogView<'_>, StoreError> {
        Ok(CatalogView {
            guard: read_lock(&self.inner, STORE)?,
        })
    }
}

#[cfg(test)]
impl CatalogStore {
    /// Change a stored product's price in place.
    pub(crate) fn set_price(&self, id: &ProductId, price: mercato_core::Price) {
        let mut catalog = self.inner.write().unwrap_or_else(std::sync::PoisonError::into_inner);
        if let Some(product) = catalog.products.iter_mut().find(|p| &p.id == id) {
            product.price = price;
        }
    }
}

/// Read-locked view of the catalog, for multi-product lookups.
pub struct CatalogView<'a> {
    guard: RwLockReadGuard<'a, Catalog>,
}

impl CatalogView<'_> {
    /// Look up a product by ID.
    #[must_use]
    pub fn find(&self, id: &ProductId) -> Option<&Product> {
        self.guard.find(id)
    }
}
