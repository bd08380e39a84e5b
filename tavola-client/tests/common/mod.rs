// tavola-client/tests/common/mod.rs
// In-memory backend shared by the integration tests

#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Json;
use axum::Router;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, put};
use chrono::NaiveDate;
use serde::Serialize;
use shared::Decimal;
use shared::models::{
    DiningTable, DiningTableCreate, DiningTableUpdate, MenuItem, MenuItemCreate, MenuItemUpdate,
    Order, OrderLine, OrderLineInput, OrderStatus, StatusUpdate,
};
use tavola_client::{ClientError, ClientResult, RestaurantApi};

// =============================================================================
// Fixtures
// =============================================================================

pub fn menu_item(id: i64, name: &str, cents: i64, category: &str) -> MenuItem {
    MenuItem {
        id,
        name: name.to_string(),
        description: None,
        price: Decimal::new(cents, 2),
        category: category.to_string(),
    }
}

pub fn table(id: i64, number: i32) -> DiningTable {
    DiningTable {
        id,
        table_number: number,
        capacity: 4,
        occupied: false,
    }
}

pub fn order(id: i64, table: DiningTable, status: OrderStatus) -> Order {
    Order {
        id,
        order_time: NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(19, 30, 0)
            .unwrap(),
        table,
        order_items: Vec::new(),
        total_amount: Decimal::ZERO,
        status,
    }
}

/// Pizza 5.00, Lemonade 3.50, Tiramisu 6.00
pub fn sample_menu() -> Vec<MenuItem> {
    vec![
        menu_item(1, "Margherita", 500, "Pizza"),
        menu_item(2, "Lemonade", 350, "Drinks"),
        menu_item(3, "Tiramisu", 600, "Dessert"),
    ]
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

// =============================================================================
// MemoryApi
// =============================================================================

#[derive(Default)]
struct Store {
    menu: Vec<MenuItem>,
    tables: Vec<DiningTable>,
    orders: Vec<Order>,
    next_id: i64,
    calls: Vec<String>,
    failing: HashSet<&'static str>,
}

impl Store {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

/// Recording in-memory backend
///
/// Behaves like the real service for the endpoints the client uses: ids are
/// assigned on create, totals are computed from stored prices, opening an
/// order occupies the table and paying it frees the table.
#[derive(Default)]
pub struct MemoryApi {
    state: Mutex<Store>,
}

fn not_found(what: &str, id: i64) -> ClientError {
    ClientError::Rejected {
        status: 404,
        body: format!("{what} not found with id: {id}"),
    }
}

impl MemoryApi {
    pub fn new() -> Self {
        let api = Self::default();
        api.state.lock().unwrap().next_id = 100;
        api
    }

    pub fn with_menu(self, menu: Vec<MenuItem>) -> Self {
        self.state.lock().unwrap().menu = menu;
        self
    }

    pub fn with_tables(self, tables: Vec<DiningTable>) -> Self {
        self.state.lock().unwrap().tables = tables;
        self
    }

    pub fn with_orders(self, orders: Vec<Order>) -> Self {
        self.state.lock().unwrap().orders = orders;
        self
    }

    /// Make every call to `op` fail with a 500 until [`MemoryApi::recover`]
    pub fn fail(&self, op: &'static str) {
        self.state.lock().unwrap().failing.insert(op);
    }

    pub fn recover(&self, op: &'static str) {
        self.state.lock().unwrap().failing.remove(op);
    }

    pub fn calls(&self) -> Vec<String> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn call_count(&self, op: &str) -> usize {
        self.state
            .lock()
            .unwrap()
            .calls
            .iter()
            .filter(|c| c.split('(').next() == Some(op))
            .count()
    }

    /// Change an order's status behind the client's back
    pub fn set_status_server_side(&self, order_id: i64, status: OrderStatus) {
        let mut state = self.state.lock().unwrap();
        if let Some(order) = state.orders.iter_mut().find(|o| o.id == order_id) {
            order.status = status;
        }
    }

    pub fn stored_order(&self, order_id: i64) -> Option<Order> {
        let state = self.state.lock().unwrap();
        state.orders.iter().find(|o| o.id == order_id).cloned()
    }

    pub fn stored_table(&self, table_id: i64) -> Option<DiningTable> {
        let state = self.state.lock().unwrap();
        state.tables.iter().find(|t| t.id == table_id).cloned()
    }

    fn begin(&self, op: &'static str, args: String) -> ClientResult<std::sync::MutexGuard<'_, Store>> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(format!("{op}({args})"));
        if state.failing.contains(op) {
            return Err(ClientError::Rejected {
                status: 500,
                body: format!("injected failure in {op}"),
            });
        }
        Ok(state)
    }
}

#[async_trait]
impl RestaurantApi for MemoryApi {
    async fn list_menu_items(&self) -> ClientResult<Vec<MenuItem>> {
        Ok(self.begin("list_menu_items", String::new())?.menu.clone())
    }

    async fn list_menu_items_by_category(&self, category: &str) -> ClientResult<Vec<MenuItem>> {
        let state = self.begin("list_menu_items_by_category", category.to_string())?;
        Ok(state
            .menu
            .iter()
            .filter(|i| i.category == category)
            .cloned()
            .collect())
    }

    async fn get_menu_item(&self, id: i64) -> ClientResult<MenuItem> {
        let state = self.begin("get_menu_item", id.to_string())?;
        state
            .menu
            .iter()
            .find(|i| i.id == id)
            .cloned()
            .ok_or_else(|| not_found("Menu item", id))
    }

    async fn create_menu_item(&self, payload: &MenuItemCreate) -> ClientResult<MenuItem> {
        let mut state = self.begin("create_menu_item", payload.name.clone())?;
        let item = MenuItem {
            id: state.next_id(),
            name: payload.name.clone(),
            description: payload.description.clone(),
            price: payload.price,
            category: payload.category.clone(),
        };
        state.menu.push(item.clone());
        Ok(item)
    }

    async fn update_menu_item(&self, id: i64, payload: &MenuItemUpdate) -> ClientResult<MenuItem> {
        let mut state = self.begin("update_menu_item", id.to_string())?;
        let item = state
            .menu
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| not_found("Menu item", id))?;
        item.name = payload.name.clone();
        item.description = payload.description.clone();
        item.price = payload.price;
        item.category = payload.category.clone();
        Ok(item.clone())
    }

    async fn delete_menu_item(&self, id: i64) -> ClientResult<()> {
        let mut state = self.begin("delete_menu_item", id.to_string())?;
        let before = state.menu.len();
        state.menu.retain(|i| i.id != id);
        if state.menu.len() == before {
            return Err(not_found("Menu item", id));
        }
        Ok(())
    }

    async fn list_tables(&self) -> ClientResult<Vec<DiningTable>> {
        Ok(self.begin("list_tables", String::new())?.tables.clone())
    }

    async fn list_available_tables(&self) -> ClientResult<Vec<DiningTable>> {
        let state = self.begin("list_available_tables", String::new())?;
        Ok(state.tables.iter().filter(|t| !t.occupied).cloned().collect())
    }

    async fn get_table(&self, id: i64) -> ClientResult<DiningTable> {
        let state = self.begin("get_table", id.to_string())?;
        state
            .tables
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or_else(|| not_found("Table", id))
    }

    async fn create_table(&self, payload: &DiningTableCreate) -> ClientResult<DiningTable> {
        let mut state = self.begin("create_table", payload.table_number.to_string())?;
        let table = DiningTable {
            id: state.next_id(),
            table_number: payload.table_number,
            capacity: payload.capacity,
            occupied: payload.occupied,
        };
        state.tables.push(table.clone());
        Ok(table)
    }

    async fn update_table(&self, id: i64, payload: &DiningTableUpdate) -> ClientResult<DiningTable> {
        let mut state = self.begin("update_table", id.to_string())?;
        let table = state
            .tables
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| not_found("Table", id))?;
        table.table_number = payload.table_number;
        table.capacity = payload.capacity;
        table.occupied = payload.occupied;
        Ok(table.clone())
    }

    async fn delete_table(&self, id: i64) -> ClientResult<()> {
        let mut state = self.begin("delete_table", id.to_string())?;
        let before = state.tables.len();
        state.tables.retain(|t| t.id != id);
        if state.tables.len() == before {
            return Err(not_found("Table", id));
        }
        Ok(())
    }

    async fn list_orders(&self) -> ClientResult<Vec<Order>> {
        Ok(self.begin("list_orders", String::new())?.orders.clone())
    }

    async fn list_orders_by_status(&self, status: &OrderStatus) -> ClientResult<Vec<Order>> {
        let state = self.begin("list_orders_by_status", status.to_string())?;
        Ok(state
            .orders
            .iter()
            .filter(|o| o.status == *status)
            .cloned()
            .collect())
    }

    async fn get_order(&self, id: i64) -> ClientResult<Order> {
        let state = self.begin("get_order", id.to_string())?;
        state
            .orders
            .iter()
            .find(|o| o.id == id)
            .cloned()
            .ok_or_else(|| not_found("Order", id))
    }

    async fn create_order(&self, table_id: i64, lines: &[OrderLineInput]) -> ClientResult<Order> {
        let mut state = self.begin("create_order", format!("{table_id}, {} lines", lines.len()))?;
        let table = state
            .tables
            .iter_mut()
            .find(|t| t.id == table_id)
            .ok_or_else(|| not_found("Table", table_id))?;
        table.occupied = true;
        let table = table.clone();

        let mut order_items = Vec::with_capacity(lines.len());
        for line in lines {
            // Prices come from the stored menu, not from the request
            let menu_item = state
                .menu
                .iter()
                .find(|i| i.id == line.menu_item.id)
                .cloned()
                .ok_or_else(|| not_found("Menu item", line.menu_item.id))?;
            order_items.push(OrderLine {
                id: None,
                menu_item,
                quantity: line.quantity,
                special_instructions: Some(line.special_instructions.clone()),
            });
        }

        let mut created = order(state.next_id(), table, OrderStatus::Pending);
        created.order_items = order_items;
        created.total_amount = created.computed_total();
        state.orders.push(created.clone());
        Ok(created)
    }

    async fn update_order_status(&self, id: i64, status: &OrderStatus) -> ClientResult<Order> {
        let mut state = self.begin("update_order_status", format!("{id}, {status}"))?;
        let order = state
            .orders
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or_else(|| not_found("Order", id))?;
        order.status = status.clone();
        let updated = order.clone();
        if *status == OrderStatus::Paid
            && let Some(table) = state.tables.iter_mut().find(|t| t.id == updated.table.id)
        {
            table.occupied = false;
        }
        Ok(updated)
    }
}

// =============================================================================
// HTTP backend
// =============================================================================

type Backend = State<Arc<MemoryApi>>;

fn respond<T: Serialize>(result: ClientResult<T>) -> Response {
    match result {
        Ok(value) => Json(value).into_response(),
        Err(e) => error_response(e),
    }
}

fn respond_empty(result: ClientResult<()>) -> Response {
    match result {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => error_response(e),
    }
}

fn error_response(e: ClientError) -> Response {
    match e {
        ClientError::Rejected { status, body } => (
            StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            body,
        )
            .into_response(),
        other => (StatusCode::BAD_REQUEST, other.to_string()).into_response(),
    }
}

async fn list_menu(State(api): Backend) -> Response {
    respond(api.list_menu_items().await)
}

async fn menu_by_category(State(api): Backend, Path(category): Path<String>) -> Response {
    respond(api.list_menu_items_by_category(&category).await)
}

async fn get_menu(State(api): Backend, Path(id): Path<i64>) -> Response {
    respond(api.get_menu_item(id).await)
}

async fn create_menu(State(api): Backend, Json(body): Json<MenuItemCreate>) -> Response {
    respond(api.create_menu_item(&body).await)
}

async fn update_menu(
    State(api): Backend,
    Path(id): Path<i64>,
    Json(body): Json<MenuItemUpdate>,
) -> Response {
    respond(api.update_menu_item(id, &body).await)
}

async fn delete_menu(State(api): Backend, Path(id): Path<i64>) -> Response {
    respond_empty(api.delete_menu_item(id).await)
}

async fn list_tables(State(api): Backend) -> Response {
    respond(api.list_tables().await)
}

async fn available_tables(State(api): Backend) -> Response {
    respond(api.list_available_tables().await)
}

async fn get_table(State(api): Backend, Path(id): Path<i64>) -> Response {
    respond(api.get_table(id).await)
}

async fn create_table(State(api): Backend, Json(body): Json<DiningTableCreate>) -> Response {
    respond(api.create_table(&body).await)
}

async fn update_table(
    State(api): Backend,
    Path(id): Path<i64>,
    Json(body): Json<DiningTableUpdate>,
) -> Response {
    respond(api.update_table(id, &body).await)
}

async fn delete_table(State(api): Backend, Path(id): Path<i64>) -> Response {
    respond_empty(api.delete_table(id).await)
}

async fn list_orders(State(api): Backend) -> Response {
    respond(api.list_orders().await)
}

async fn orders_by_status(State(api): Backend, Path(status): Path<String>) -> Response {
    let Ok(status) = status.parse::<OrderStatus>();
    respond(api.list_orders_by_status(&status).await)
}

async fn get_order(State(api): Backend, Path(id): Path<i64>) -> Response {
    respond(api.get_order(id).await)
}

async fn create_order(
    State(api): Backend,
    Path(table_id): Path<i64>,
    Json(lines): Json<Vec<OrderLineInput>>,
) -> Response {
    respond(api.create_order(table_id, &lines).await)
}

async fn update_status(
    State(api): Backend,
    Path(id): Path<i64>,
    Json(body): Json<StatusUpdate>,
) -> Response {
    respond(api.update_order_status(id, &body.status).await)
}

pub fn router(api: Arc<MemoryApi>) -> Router {
    Router::new()
        .route("/api/menu", get(list_menu).post(create_menu))
        .route("/api/menu/category/{category}", get(menu_by_category))
        .route(
            "/api/menu/{id}",
            get(get_menu).put(update_menu).delete(delete_menu),
        )
        .route("/api/tables", get(list_tables).post(create_table))
        .route("/api/tables/available", get(available_tables))
        .route(
            "/api/tables/{id}",
            get(get_table).put(update_table).delete(delete_table),
        )
        .route("/api/orders", get(list_orders))
        .route("/api/orders/status/{status}", get(orders_by_status))
        .route("/api/orders/table/{table_id}", post(create_order))
        .route("/api/orders/{id}", get(get_order))
        .route("/api/orders/{id}/status", put(update_status))
        .with_state(api)
}

/// Serve `router` on an ephemeral port and return its base URL
pub async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// Serve the in-memory backend; returns the API root (`.../api`)
pub async fn spawn_backend(api: Arc<MemoryApi>) -> String {
    format!("{}/api", serve(router(api)).await)
}
