//! Cart pricing.

use tracing::warn;

use crate::domain::carts::records::CartLineRecord;

/// Price a cart's lines against the current menu prices.
///
/// Stored totals are never consulted; this is a pure function of the lines
/// as read, so menu price changes are reflected immediately. A line whose
/// menu item has since been deleted contributes zero and is logged for
/// cleanup rather than failing the whole cart.
#[must_use]
pub fn price(lines: &[CartLineRecord]) -> u64 {
    lines
        .iter()
        .map(|line| match line.unit_price {
            Some(unit_price) => u64::from(line.quantity).saturating_mul(unit_price),
            None => {
                warn!(
                    line = %line.uuid,
                    menu_item = %line.menu_item_uuid,
                    "cart line references a missing menu item; priced as zero"
                );

                0
            }
        })
        .fold(0, u64::saturating_add)
}
