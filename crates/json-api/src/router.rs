//! Route tree.

use salvo::Router;

use crate::{auth, carts, healthcheck, menu, orders, payments};

/// Public routes plus the bearer-authenticated API surface.
pub(crate) fn build() -> Router {
    Router::new()
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(
            Router::with_path("auth")
                .push(Router::with_path("register").post(auth::register))
                .push(Router::with_path("login").post(auth::login)),
        )
        .push(
            Router::new()
                .hoop(auth::middleware::handler)
                .push(
                    Router::with_path("menu-items")
                        .get(menu::index)
                        .post(menu::create)
                        .push(
                            Router::with_path("{uuid}")
                                .get(menu::get)
                                .put(menu::update)
                                .delete(menu::delete),
                        ),
                )
                .push(
                    Router::with_path("cart")
                        .get(carts::get)
                        .post(carts::apply_delta),
                )
                .push(
                    Router::with_path("orders")
                        .get(orders::index)
                        .post(orders::create)
                        .push(
                            Router::with_path("{uuid}")
                                .get(orders::get)
                                .put(orders::update),
                        ),
                )
                .push(Router::with_path("payments").post(payments::create)),
        )
}
