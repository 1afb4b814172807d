//! The storefront application: user intents turned into remote calls,
//! dispatches and toasts.
//!
//! `Storefront` is constructed explicitly with its product service, its
//! snapshot store and (optionally) a notifier; there is no global instance.
//! Remote calls are awaited before the state-updating dispatch, and a failed
//! call leaves the state untouched and raises an error toast.
//!
//! ## Example
//!
//! ```ignore
//! use storefront::{HttpProductApi, InMemorySnapshotStore, Storefront};
//!
//! let mut shop = Storefront::new(HttpProductApi::new(base_url), InMemorySnapshotStore::new());
//! shop.load().await?;
//! shop.add_to_cart(ProductId(1))?;
//! println!("{}", shop.cart_view());
//! ```

use std::time::Instant;

use tracing::{info, warn};

use crate::api::ProductApi;
use crate::cart::{summarize, CartSummary};
use crate::catalog::{self, IdGenerator, ProductDraft, ProductEdit};
use crate::error::StorefrontError;
use crate::model::{Product, ProductId};
use crate::notify::{Notifier, Severity};
use crate::snapshot::{self, SnapshotStore};
use crate::state::{Action, AppState, Store};
use crate::view::{CartView, ProductListView, Route};

pub struct Storefront<A, S> {
    api: A,
    snapshots: S,
    store: Store,
    notifier: Notifier,
    ids: IdGenerator,
    sorted: bool,
}

impl<A: ProductApi, S: SnapshotStore> Storefront<A, S> {
    pub fn new(api: A, snapshots: S) -> Self {
        Self {
            api,
            snapshots,
            store: Store::new(),
            notifier: Notifier::new(),
            ids: IdGenerator::new(),
            sorted: false,
        }
    }

    /// Replace the default notifier (e.g. one with a configured interval).
    pub fn with_notifier(mut self, notifier: Notifier) -> Self {
        self.notifier = notifier;
        self
    }

    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    /// The state store, for subscribing to changes.
    pub fn store_mut(&mut self) -> &mut Store {
        &mut self.store
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut Notifier {
        &mut self.notifier
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn snapshots(&self) -> &S {
        &self.snapshots
    }

    /// Whether the list currently shows the price sort.
    pub fn is_sorted(&self) -> bool {
        self.sorted
    }

    /// Expire notifications whose display interval has elapsed.
    pub fn tick(&mut self, now: Instant) {
        self.notifier.tick(now);
    }

    /// Initial load: fetch the catalog, lock every product, cache it in the
    /// snapshot store and load the cached copy into the state.
    pub async fn load(&mut self) -> Result<(), StorefrontError> {
        let result = self.api.fetch_catalog().await;
        let fetched = match result {
            Ok(products) => products,
            Err(e) => return Err(self.fail("Failed to fetch products data", e)),
        };
        let products: Vec<Product> = fetched
            .into_iter()
            .map(|product| Product {
                locked: true,
                ..product
            })
            .collect();

        let saved = snapshot::save_products(&self.snapshots, &products);
        if let Err(e) = saved {
            return Err(self.fail("Failed to fetch products data", e));
        }
        let cached = snapshot::load_products(&self.snapshots);
        let products = match cached {
            Ok(Some(cached)) => cached,
            Ok(None) => products,
            Err(e) => return Err(self.fail("Failed to fetch products data", e)),
        };

        info!(count = products.len(), "catalog loaded");
        self.store.dispatch(Action::SetProducts(products));
        self.sorted = false;
        Ok(())
    }

    /// Add one unit of a listed product to the cart.
    pub fn add_to_cart(&mut self, id: ProductId) -> Result<(), StorefrontError> {
        let product = self
            .state()
            .product(id)
            .cloned()
            .ok_or(StorefrontError::NotFound(id))?;
        self.store.dispatch(Action::AddToCart(product));
        self.store.dispatch(Action::RecomputeCartTotal);
        self.notifier.notify("Item added to cart", Severity::Success);
        Ok(())
    }

    pub fn increase_quantity(&mut self, id: ProductId) -> Result<(), StorefrontError> {
        let line = self
            .state()
            .cart_line(id)
            .ok_or(StorefrontError::NotFound(id))?;
        let line = line.with_quantity(line.quantity.saturating_add(1));
        self.store.dispatch(Action::UpdateCartLine(line));
        self.store.dispatch(Action::RecomputeCartTotal);
        Ok(())
    }

    /// Decrease a line's quantity; a line never drops below one unit.
    pub fn decrease_quantity(&mut self, id: ProductId) -> Result<(), StorefrontError> {
        let line = self
            .state()
            .cart_line(id)
            .ok_or(StorefrontError::NotFound(id))?;
        if line.quantity > 1 {
            let line = line.with_quantity(line.quantity - 1);
            self.store.dispatch(Action::UpdateCartLine(line));
            self.store.dispatch(Action::RecomputeCartTotal);
        }
        Ok(())
    }

    /// Remove a line from the cart. Removing an absent line does nothing.
    pub fn remove_from_cart(&mut self, id: ProductId) {
        self.store.dispatch(Action::RemoveCartLine(id));
        self.store.dispatch(Action::RecomputeCartTotal);
    }

    /// Make a listed product the viewed one and return its detail route.
    pub fn view_product(&mut self, id: ProductId) -> Result<Route, StorefrontError> {
        let product = self
            .state()
            .product(id)
            .cloned()
            .ok_or(StorefrontError::NotFound(id))?;
        self.store.dispatch(Action::SetViewedProduct(product));
        Ok(Route::ProductDetail(id))
    }

    /// Validate the add-product form, create the product remotely and put
    /// the server's copy at the top of the list.
    pub async fn create_product(&mut self, draft: &ProductDraft) -> Result<Product, StorefrontError> {
        let product = draft.validate()?.into_product(self.ids.next_id());

        let result = self.api.create_product(&product).await;
        let created = match result {
            Ok(created) => created.locked(true),
            Err(e) => return Err(self.fail("Failed to add product", e)),
        };

        info!(product_id = %created.id, "product created");
        let products = catalog::prepend(self.state().products(), created.clone());
        self.store.dispatch(Action::SetProducts(products));
        self.notifier
            .notify("Product added successfully", Severity::Success);
        Ok(created)
    }

    /// Unlock a product for inline editing.
    pub fn begin_edit(&mut self, id: ProductId) -> Result<ProductEdit, StorefrontError> {
        let products = catalog::set_locked(self.state().products(), id, false)
            .ok_or(StorefrontError::NotFound(id))?;
        let edit = products
            .iter()
            .find(|p| p.id == id)
            .map(ProductEdit::from_product)
            .ok_or(StorefrontError::NotFound(id))?;
        self.store.dispatch(Action::SetProducts(products));
        Ok(edit)
    }

    /// Relock a product, discarding the caller's pending edits.
    pub fn cancel_edit(&mut self, id: ProductId) -> Result<(), StorefrontError> {
        let products = catalog::set_locked(self.state().products(), id, true)
            .ok_or(StorefrontError::NotFound(id))?;
        self.store.dispatch(Action::SetProducts(products));
        Ok(())
    }

    /// Validate the inline edit, persist it remotely and replace the listed
    /// product with the server's copy.
    pub async fn save_product(
        &mut self,
        id: ProductId,
        edit: &ProductEdit,
    ) -> Result<Product, StorefrontError> {
        let fields = edit.validate()?;
        let current = self
            .state()
            .product(id)
            .ok_or(StorefrontError::NotFound(id))?;
        let body = fields.apply_to(current);

        let result = self.api.update_product(&body).await;
        let saved = match result {
            Ok(saved) => saved.locked(true),
            Err(e) => return Err(self.fail("Failed to save product", e)),
        };

        let products = catalog::replace(self.state().products(), saved.clone())
            .ok_or(StorefrontError::NotFound(id))?;
        info!(product_id = %id, "product saved");
        self.store.dispatch(Action::SetProducts(products));
        self.notifier.notify("Edit successful", Severity::Success);
        Ok(saved)
    }

    /// Delete a product remotely, then drop it from the list.
    pub async fn delete_product(&mut self, id: ProductId) -> Result<(), StorefrontError> {
        let result = self.api.delete_product(id).await;
        if let Err(e) = result {
            return Err(self.fail("Failed to delete product", e));
        }

        info!(product_id = %id, "product deleted");
        let products = catalog::remove(self.state().products(), id);
        self.store.dispatch(Action::SetProducts(products));
        self.notifier.notify("Item deleted", Severity::Warning);
        Ok(())
    }

    pub fn sort_by_price(&mut self) {
        let products = catalog::sorted_by_price(self.state().products());
        self.store.dispatch(Action::SetProducts(products));
        self.sorted = true;
    }

    /// Undo the price sort by reloading the cached product list.
    pub fn cancel_sort(&mut self) -> Result<(), StorefrontError> {
        let cached = snapshot::load_products(&self.snapshots);
        let products = match cached {
            Ok(Some(products)) => products,
            Ok(None) => {
                return Err(self.fail("Failed to restore products", StorefrontError::NoSnapshot))
            }
            Err(e) => return Err(self.fail("Failed to restore products", e)),
        };
        self.store.dispatch(Action::SetProducts(products));
        self.sorted = false;
        Ok(())
    }

    pub fn cart_summary(&self) -> Option<CartSummary> {
        summarize(self.state().cart())
    }

    pub fn product_list_view(&self) -> ProductListView<'_> {
        ProductListView::from_state(self.state())
    }

    pub fn cart_view(&self) -> CartView<'_> {
        CartView::from_state(self.state())
    }

    fn fail(&mut self, message: &str, err: impl Into<StorefrontError>) -> StorefrontError {
        let err = err.into();
        warn!(error = %err, "{}", message);
        self.notifier.notify(message, Severity::Error);
        err
    }
}
