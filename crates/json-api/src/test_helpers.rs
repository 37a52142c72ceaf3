//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};
use uuid::Uuid;

use ristoro_app::{
    auth::{MockIdentityProvider, models::{AuthenticatedUser, Role, UserUuid}},
    blobs::MockBlobStore,
    context::AppContext,
    domain::{
        carts::{
            MockCartsService,
            records::{CartLineRecord, CartLineUuid, CartRecord, CartUuid},
        },
        menu::{MockMenuService, records::{MenuItemRecord, MenuItemUuid}},
        orders::{
            MockOrdersService,
            records::{OrderDetailRecord, OrderDetailUuid, OrderRecord, OrderStatus, OrderUuid},
        },
    },
    payments::MockPaymentsService,
};

use crate::{carts, menu, orders, payments, state::State};

pub(crate) const TEST_USER_UUID: Uuid = Uuid::nil();

pub(crate) fn make_user(role: Role) -> AuthenticatedUser {
    AuthenticatedUser {
        uuid: TEST_USER_UUID.into(),
        name: "Test User".to_string(),
        email: "test@example.com".to_string(),
        role,
    }
}

/// Stand-in for the bearer middleware: the caller is already resolved.
#[salvo::handler]
pub(crate) async fn inject_customer(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.inject(make_user(Role::Customer));
    ctrl.call_next(req, depot, res).await;
}

#[salvo::handler]
pub(crate) async fn inject_admin(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.inject(make_user(Role::Admin));
    ctrl.call_next(req, depot, res).await;
}

fn strict_menu_mock() -> MockMenuService {
    let mut menu = MockMenuService::new();

    menu.expect_list_menu_items().never();
    menu.expect_get_menu_item().never();
    menu.expect_create_menu_item().never();
    menu.expect_update_menu_item().never();
    menu.expect_delete_menu_item().never();

    menu
}

fn strict_carts_mock() -> MockCartsService {
    let mut carts = MockCartsService::new();

    carts.expect_get_cart().never();
    carts.expect_apply_delta().never();

    carts
}

fn strict_orders_mock() -> MockOrdersService {
    let mut orders = MockOrdersService::new();

    orders.expect_list_orders().never();
    orders.expect_get_order().never();
    orders.expect_create_order().never();
    orders.expect_update_order().never();

    orders
}

fn strict_payments_mock() -> MockPaymentsService {
    let mut payments = MockPaymentsService::new();

    payments.expect_create_payment().never();

    payments
}

fn strict_identity_mock() -> MockIdentityProvider {
    let mut identity = MockIdentityProvider::new();

    identity.expect_register().never();
    identity.expect_login().never();
    identity.expect_authenticate_bearer().never();

    identity
}

fn strict_blobs_mock() -> MockBlobStore {
    let mut blobs = MockBlobStore::new();

    blobs.expect_upload().never();
    blobs.expect_delete().never();

    blobs
}

/// An app context where every collaborator answers `never()` unless replaced.
pub(crate) struct TestAppContext {
    pub(crate) menu: MockMenuService,
    pub(crate) carts: MockCartsService,
    pub(crate) orders: MockOrdersService,
    pub(crate) payments: MockPaymentsService,
    pub(crate) identity: MockIdentityProvider,
    pub(crate) blobs: MockBlobStore,
}

impl Default for TestAppContext {
    fn default() -> Self {
        Self {
            menu: strict_menu_mock(),
            carts: strict_carts_mock(),
            orders: strict_orders_mock(),
            payments: strict_payments_mock(),
            identity: strict_identity_mock(),
            blobs: strict_blobs_mock(),
        }
    }
}

impl TestAppContext {
    pub(crate) fn into_state(self) -> Arc<State> {
        State::from_app_context(AppContext {
            menu: Arc::new(self.menu),
            carts: Arc::new(self.carts),
            orders: Arc::new(self.orders),
            payments: Arc::new(self.payments),
            identity: Arc::new(self.identity),
            blobs: Arc::new(self.blobs),
        })
    }
}

pub(crate) fn state_with_identity(identity: MockIdentityProvider) -> Arc<State> {
    TestAppContext {
        identity,
        ..TestAppContext::default()
    }
    .into_state()
}

fn authed_service(state: Arc<State>, caller: impl Handler, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state))
            .hoop(caller)
            .push(route),
    )
}

fn menu_routes() -> Router {
    Router::with_path("menu-items")
        .get(menu::index)
        .post(menu::create)
        .push(
            Router::with_path("{uuid}")
                .get(menu::get)
                .put(menu::update)
                .delete(menu::delete),
        )
}

pub(crate) fn service_with_menu(menu: MockMenuService) -> Service {
    let state = TestAppContext {
        menu,
        ..TestAppContext::default()
    }
    .into_state();

    authed_service(state, inject_customer, menu_routes())
}

pub(crate) fn service_as_role_with_menu_and_blobs(
    role: Role,
    menu: MockMenuService,
    blobs: MockBlobStore,
) -> Service {
    let state = TestAppContext {
        menu,
        blobs,
        ..TestAppContext::default()
    }
    .into_state();

    match role {
        Role::Admin => authed_service(state, inject_admin, menu_routes()),
        Role::Customer => authed_service(state, inject_customer, menu_routes()),
    }
}

pub(crate) fn service_with_carts(carts: MockCartsService) -> Service {
    let state = TestAppContext {
        carts,
        ..TestAppContext::default()
    }
    .into_state();

    authed_service(
        state,
        inject_customer,
        Router::with_path("cart")
            .get(carts::get)
            .post(carts::apply_delta),
    )
}

pub(crate) fn service_with_orders(orders: MockOrdersService) -> Service {
    let state = TestAppContext {
        orders,
        ..TestAppContext::default()
    }
    .into_state();

    authed_service(
        state,
        inject_customer,
        Router::with_path("orders")
            .get(orders::index)
            .post(orders::create)
            .push(
                Router::with_path("{uuid}")
                    .get(orders::get)
                    .put(orders::update),
            ),
    )
}

pub(crate) fn service_with_payments(payments: MockPaymentsService) -> Service {
    let state = TestAppContext {
        payments,
        ..TestAppContext::default()
    }
    .into_state();

    authed_service(
        state,
        inject_customer,
        Router::with_path("payments").post(payments::create),
    )
}

/// Public routes, no bearer middleware.
pub(crate) fn public_service_with_identity(identity: MockIdentityProvider) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_identity(identity)))
            .push(
                Router::with_path("auth")
                    .push(Router::with_path("register").post(crate::auth::register))
                    .push(Router::with_path("login").post(crate::auth::login)),
            ),
    )
}

pub(crate) fn make_menu_item(name: &str, price: u64) -> MenuItemRecord {
    let uuid = MenuItemUuid::new();

    MenuItemRecord {
        uuid,
        name: name.to_string(),
        description: format!("A plate of {name}"),
        category: "Entree".to_string(),
        special_tag: None,
        price,
        image_url: format!("http://media.test/menu/{uuid}.png"),
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_cart(user: UserUuid, lines: &[(u64, u32)]) -> CartRecord {
    let lines: Vec<CartLineRecord> = lines
        .iter()
        .map(|&(unit_price, quantity)| CartLineRecord {
            uuid: CartLineUuid::new(),
            menu_item_uuid: MenuItemUuid::new(),
            quantity,
            unit_price: Some(unit_price),
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
        })
        .collect();

    let total = lines
        .iter()
        .map(|line| line.unit_price.unwrap_or(0) * u64::from(line.quantity))
        .sum();

    CartRecord {
        uuid: CartUuid::new(),
        user_uuid: user,
        total,
        lines,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_order(user: UserUuid) -> OrderRecord {
    OrderRecord {
        uuid: OrderUuid::new(),
        user_uuid: user,
        pickup_name: "Test User".to_string(),
        pickup_phone: "555-0100".to_string(),
        pickup_email: "test@example.com".to_string(),
        total: 18_00,
        total_items: 2,
        payment_intent_id: None,
        status: OrderStatus::Pending,
        details: vec![OrderDetailRecord {
            uuid: OrderDetailUuid::new(),
            menu_item_uuid: MenuItemUuid::new(),
            item_name: "Margherita".to_string(),
            unit_price: 9_00,
            quantity: 2,
        }],
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}
