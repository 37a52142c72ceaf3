//! Cart reconciliation rules.
//!
//! [`reconcile`] is a pure function from the current state of a user's cart
//! and a signed quantity delta to the single mutation to apply. The service
//! layer executes the resulting [`CartTransition`] inside one transaction.

use thiserror::Error;

use crate::domain::{
    carts::records::{CartLineUuid, CartRecord},
    menu::records::MenuItemUuid,
};

/// The mutation a quantity delta resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartTransition {
    /// Nothing to do: removing from a cart (or line) that does not exist.
    Noop,

    /// No cart exists yet; create one together with its first line.
    CreateCartWithLine { quantity: u32 },

    /// The cart exists but has no line for this menu item yet.
    InsertLine { quantity: u32 },

    /// Adjust an existing line to a new strictly positive quantity.
    UpdateLine { line: CartLineUuid, quantity: u32 },

    /// Delete an existing line; `remove_cart` is set when it was the cart's
    /// last line, since a cart never persists with zero lines.
    RemoveLine { line: CartLineUuid, remove_cart: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("resulting quantity is out of range")]
    QuantityOutOfRange,
}

/// Resolve a signed quantity delta against the user's current cart.
///
/// A zero delta against an existing line is an explicit clear of that line,
/// not a no-op; a zero or negative delta against a missing cart or line is a
/// no-op since nothing destructive was requested.
///
/// # Errors
///
/// Returns [`TransitionError::QuantityOutOfRange`] when the resulting
/// quantity would not fit a `u32`.
pub fn reconcile(
    cart: Option<&CartRecord>,
    menu_item: MenuItemUuid,
    delta: i32,
) -> Result<CartTransition, TransitionError> {
    let Some(cart) = cart else {
        if delta <= 0 {
            return Ok(CartTransition::Noop);
        }

        return Ok(CartTransition::CreateCartWithLine {
            quantity: positive(delta)?,
        });
    };

    let Some(line) = cart
        .lines
        .iter()
        .find(|line| line.menu_item_uuid == menu_item)
    else {
        if delta <= 0 {
            return Ok(CartTransition::Noop);
        }

        return Ok(CartTransition::InsertLine {
            quantity: positive(delta)?,
        });
    };

    let new_quantity = i64::from(line.quantity) + i64::from(delta);

    if delta == 0 || new_quantity <= 0 {
        return Ok(CartTransition::RemoveLine {
            line: line.uuid,
            remove_cart: cart.lines.len() == 1,
        });
    }

    let quantity =
        u32::try_from(new_quantity).map_err(|_| TransitionError::QuantityOutOfRange)?;

    Ok(CartTransition::UpdateLine {
        line: line.uuid,
        quantity,
    })
}

fn positive(delta: i32) -> Result<u32, TransitionError> {
    u32::try_from(delta).map_err(|_| TransitionError::QuantityOutOfRange)
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use crate::domain::carts::records::{CartLineRecord, CartUuid};

    use super::*;

    fn make_line(menu_item: MenuItemUuid, quantity: u32) -> CartLineRecord {
        CartLineRecord {
            uuid: CartLineUuid::new(),
            menu_item_uuid: menu_item,
            quantity,
            unit_price: Some(1_00),
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
        }
    }

    fn make_cart(lines: Vec<CartLineRecord>) -> CartRecord {
        CartRecord {
            uuid: CartUuid::new(),
            user_uuid: crate::auth::models::UserUuid::new(),
            total: 0,
            lines,
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
        }
    }

    #[test]
    fn no_cart_and_positive_delta_creates_cart_with_line() {
        let transition = reconcile(None, MenuItemUuid::new(), 2);

        assert_eq!(
            transition,
            Ok(CartTransition::CreateCartWithLine { quantity: 2 })
        );
    }

    #[test]
    fn no_cart_and_non_positive_delta_is_a_noop() {
        let menu_item = MenuItemUuid::new();

        assert_eq!(reconcile(None, menu_item, 0), Ok(CartTransition::Noop));
        assert_eq!(reconcile(None, menu_item, -3), Ok(CartTransition::Noop));
    }

    #[test]
    fn missing_line_and_positive_delta_inserts_line() {
        let menu_item = MenuItemUuid::new();
        let cart = make_cart(vec![make_line(MenuItemUuid::new(), 1)]);

        let transition = reconcile(Some(&cart), menu_item, 4);

        assert_eq!(transition, Ok(CartTransition::InsertLine { quantity: 4 }));
    }

    #[test]
    fn missing_line_and_non_positive_delta_is_a_noop() {
        let cart = make_cart(vec![make_line(MenuItemUuid::new(), 1)]);

        let transition = reconcile(Some(&cart), MenuItemUuid::new(), -1);

        assert_eq!(transition, Ok(CartTransition::Noop));
    }

    #[test]
    fn positive_delta_on_existing_line_adds_to_quantity() {
        let menu_item = MenuItemUuid::new();
        let line = make_line(menu_item, 3);
        let line_uuid = line.uuid;
        let cart = make_cart(vec![line]);

        let transition = reconcile(Some(&cart), menu_item, 2);

        assert_eq!(
            transition,
            Ok(CartTransition::UpdateLine {
                line: line_uuid,
                quantity: 5
            })
        );
    }

    #[test]
    fn negative_delta_decrements_but_keeps_positive_quantity() {
        let menu_item = MenuItemUuid::new();
        let line = make_line(menu_item, 3);
        let line_uuid = line.uuid;
        let cart = make_cart(vec![line]);

        let transition = reconcile(Some(&cart), menu_item, -2);

        assert_eq!(
            transition,
            Ok(CartTransition::UpdateLine {
                line: line_uuid,
                quantity: 1
            })
        );
    }

    #[test]
    fn zero_delta_clears_the_line() {
        let menu_item = MenuItemUuid::new();
        let line = make_line(menu_item, 3);
        let line_uuid = line.uuid;
        let cart = make_cart(vec![line, make_line(MenuItemUuid::new(), 1)]);

        let transition = reconcile(Some(&cart), menu_item, 0);

        assert_eq!(
            transition,
            Ok(CartTransition::RemoveLine {
                line: line_uuid,
                remove_cart: false
            })
        );
    }

    #[test]
    fn delta_cancelling_the_last_line_removes_the_cart() {
        let menu_item = MenuItemUuid::new();
        let line = make_line(menu_item, 2);
        let line_uuid = line.uuid;
        let cart = make_cart(vec![line]);

        let transition = reconcile(Some(&cart), menu_item, -2);

        assert_eq!(
            transition,
            Ok(CartTransition::RemoveLine {
                line: line_uuid,
                remove_cart: true
            })
        );
    }

    #[test]
    fn over_negative_delta_removes_rather_than_going_negative() {
        let menu_item = MenuItemUuid::new();
        let line = make_line(menu_item, 2);
        let line_uuid = line.uuid;
        let cart = make_cart(vec![line, make_line(MenuItemUuid::new(), 5)]);

        let transition = reconcile(Some(&cart), menu_item, -100);

        assert_eq!(
            transition,
            Ok(CartTransition::RemoveLine {
                line: line_uuid,
                remove_cart: false
            })
        );
    }

    #[test]
    fn no_transition_ever_yields_a_non_positive_quantity() {
        let menu_item = MenuItemUuid::new();

        for delta in -5_i32..=5 {
            for existing in 1_u32..=5 {
                let cart = make_cart(vec![make_line(menu_item, existing)]);

                match reconcile(Some(&cart), menu_item, delta) {
                    Ok(
                        CartTransition::UpdateLine { quantity, .. }
                        | CartTransition::InsertLine { quantity }
                        | CartTransition::CreateCartWithLine { quantity },
                    ) => {
                        assert!(quantity >= 1, "delta {delta} on {existing} gave {quantity}");
                    }
                    Ok(CartTransition::RemoveLine { .. } | CartTransition::Noop) | Err(_) => {}
                }
            }
        }
    }

    #[test]
    fn quantity_overflow_is_rejected() {
        let menu_item = MenuItemUuid::new();
        let cart = make_cart(vec![make_line(menu_item, u32::MAX)]);

        let transition = reconcile(Some(&cart), menu_item, 1);

        assert_eq!(transition, Err(TransitionError::QuantityOutOfRange));
    }
}
