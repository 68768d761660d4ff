//! Cart Store
//!
//! The page's single cart, held in a reactive_stores Store. One handle is
//! created at boot and passed explicitly to every consumer.

use leptos::prelude::*;
use reactive_stores::Store;
use reserva_cart::{AddRequest, Cart, Shortfall};

#[derive(Clone, Debug, Default, Store)]
pub struct CartState {
    pub cart: Cart,
    /// A stock check is in flight
    pub busy: bool,
    /// Last capacity error, shown inline until the next add
    pub shortfall: Option<Shortfall>,
}

impl CartState {
    pub fn new(cart: Cart) -> Self {
        Self {
            cart,
            ..Default::default()
        }
    }
}

pub type CartStore = Store<CartState>;

// ========================
// Store Helper Functions
// ========================

/// Apply a stock-checked add against the cart as it is now. The store is
/// only written when the add fits.
pub fn store_add_line(
    store: &CartStore,
    request: &AddRequest,
    display_name: &str,
    available: u32,
) -> Result<(), Shortfall> {
    let mut cart = store.cart().get_untracked();
    cart.try_add(request.resource_id.clone(), display_name, request.quantity, available)?;
    store.cart().set(cart);
    Ok(())
}

pub fn store_remove_line(store: &CartStore, index: usize) {
    store.cart().update(|cart| {
        cart.remove(index);
    });
}

/// Marks the add control busy; released on drop, whatever the exit path
pub struct BusyGuard {
    store: CartStore,
}

impl BusyGuard {
    /// `None` while another check holds the control
    pub fn acquire(store: CartStore) -> Option<Self> {
        if store.busy().get_untracked() {
            return None;
        }
        store.busy().set(true);
        Some(Self { store })
    }
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.store.busy().set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reserva_cart::{AddDraft, Schedule};

    fn request(resource_id: &str, quantity: &str) -> AddRequest {
        AddDraft {
            resource_id: resource_id.to_string(),
            quantity: quantity.to_string(),
            schedule: Schedule {
                fecha: "2026-10-20".to_string(),
                hora_inicio: "10:00".to_string(),
                hora_fin: "12:00".to_string(),
            },
        }
        .validate()
        .unwrap()
    }

    #[test]
    fn test_busy_guard_released_on_drop() {
        let store = Store::new(CartState::default());
        {
            let _guard = BusyGuard::acquire(store).unwrap();
            assert!(store.busy().get_untracked());
            assert!(BusyGuard::acquire(store).is_none());
        }
        assert!(!store.busy().get_untracked());
    }

    #[test]
    fn test_store_add_and_remove() {
        let store = Store::new(CartState::default());
        store_add_line(&store, &request("1", "2"), "Proyector", 5).unwrap();
        store_add_line(&store, &request("2", "1"), "Mesa", 5).unwrap();

        let err = store_add_line(&store, &request("1", "4"), "Proyector", 5).unwrap_err();
        assert_eq!(err.held, 2);
        assert_eq!(store.cart().get_untracked().len(), 2);

        store_remove_line(&store, 0);
        let cart = store.cart().get_untracked();
        assert_eq!(cart.lines()[0].display_name, "Mesa");
    }
}
