//! Domain modules.

pub mod carts;
pub mod menu;
pub mod orders;
