//! Remote data gateway
//!
//! [`RestaurantApi`] is the boundary to the restaurant backend: one method per
//! endpoint, one request/response round trip per call, no caching. Mutating
//! calls return the canonical entity as stored by the backend.
//!
//! | Entity | Endpoints |
//! |--------|-----------|
//! | Menu   | `GET /menu`, `GET /menu/{id}`, `GET /menu/category/{category}`, `POST /menu`, `PUT /menu/{id}`, `DELETE /menu/{id}` |
//! | Tables | `GET /tables`, `GET /tables/available`, `GET /tables/{id}`, `POST /tables`, `PUT /tables/{id}`, `DELETE /tables/{id}` |
//! | Orders | `GET /orders`, `GET /orders/{id}`, `GET /orders/status/{status}`, `POST /orders/table/{tableId}`, `PUT /orders/{id}/status` |

use async_trait::async_trait;
use shared::models::{
    DiningTable, DiningTableCreate, DiningTableUpdate, MenuItem, MenuItemCreate, MenuItemUpdate,
    Order, OrderLineInput, OrderStatus, StatusUpdate,
};
use tracing::instrument;
use urlencoding::encode;

use crate::http::HttpClient;
use crate::{ClientResult, validation};

/// Backend operations used by the order workflow and the CRUD screens
#[async_trait]
pub trait RestaurantApi: Send + Sync {
    // ========== Menu ==========
    async fn list_menu_items(&self) -> ClientResult<Vec<MenuItem>>;
    async fn list_menu_items_by_category(&self, category: &str) -> ClientResult<Vec<MenuItem>>;
    async fn get_menu_item(&self, id: i64) -> ClientResult<MenuItem>;
    async fn create_menu_item(&self, payload: &MenuItemCreate) -> ClientResult<MenuItem>;
    async fn update_menu_item(&self, id: i64, payload: &MenuItemUpdate) -> ClientResult<MenuItem>;
    async fn delete_menu_item(&self, id: i64) -> ClientResult<()>;

    // ========== Tables ==========
    async fn list_tables(&self) -> ClientResult<Vec<DiningTable>>;
    async fn list_available_tables(&self) -> ClientResult<Vec<DiningTable>>;
    async fn get_table(&self, id: i64) -> ClientResult<DiningTable>;
    async fn create_table(&self, payload: &DiningTableCreate) -> ClientResult<DiningTable>;
    async fn update_table(&self, id: i64, payload: &DiningTableUpdate) -> ClientResult<DiningTable>;
    async fn delete_table(&self, id: i64) -> ClientResult<()>;

    // ========== Orders ==========
    async fn list_orders(&self) -> ClientResult<Vec<Order>>;
    async fn list_orders_by_status(&self, status: &OrderStatus) -> ClientResult<Vec<Order>>;
    async fn get_order(&self, id: i64) -> ClientResult<Order>;
    async fn create_order(&self, table_id: i64, lines: &[OrderLineInput]) -> ClientResult<Order>;
    async fn update_order_status(&self, id: i64, status: &OrderStatus) -> ClientResult<Order>;
}

/// [`RestaurantApi`] over an [`HttpClient`]
#[derive(Debug, Clone)]
pub struct Gateway<H> {
    http: H,
}

impl<H: HttpClient> Gateway<H> {
    pub fn new(http: H) -> Self {
        Self { http }
    }
}

#[async_trait]
impl<H: HttpClient> RestaurantApi for Gateway<H> {
    #[instrument(skip(self))]
    async fn list_menu_items(&self) -> ClientResult<Vec<MenuItem>> {
        self.http.get("menu").await
    }

    #[instrument(skip(self))]
    async fn list_menu_items_by_category(&self, category: &str) -> ClientResult<Vec<MenuItem>> {
        self.http
            .get(&format!("menu/category/{}", encode(category)))
            .await
    }

    #[instrument(skip(self))]
    async fn get_menu_item(&self, id: i64) -> ClientResult<MenuItem> {
        self.http.get(&format!("menu/{id}")).await
    }

    #[instrument(skip(self, payload), fields(name = %payload.name))]
    async fn create_menu_item(&self, payload: &MenuItemCreate) -> ClientResult<MenuItem> {
        validation::validate_menu_item_create(payload)?;
        let item: MenuItem = self.http.post("menu", payload).await?;
        tracing::info!(id = item.id, "Menu item created");
        Ok(item)
    }

    #[instrument(skip(self, payload))]
    async fn update_menu_item(&self, id: i64, payload: &MenuItemUpdate) -> ClientResult<MenuItem> {
        validation::validate_menu_item_update(payload)?;
        self.http.put(&format!("menu/{id}"), payload).await
    }

    #[instrument(skip(self))]
    async fn delete_menu_item(&self, id: i64) -> ClientResult<()> {
        self.http.delete(&format!("menu/{id}")).await?;
        tracing::info!("Menu item deleted");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn list_tables(&self) -> ClientResult<Vec<DiningTable>> {
        self.http.get("tables").await
    }

    #[instrument(skip(self))]
    async fn list_available_tables(&self) -> ClientResult<Vec<DiningTable>> {
        self.http.get("tables/available").await
    }

    #[instrument(skip(self))]
    async fn get_table(&self, id: i64) -> ClientResult<DiningTable> {
        self.http.get(&format!("tables/{id}")).await
    }

    #[instrument(skip(self, payload), fields(table_number = payload.table_number))]
    async fn create_table(&self, payload: &DiningTableCreate) -> ClientResult<DiningTable> {
        validation::validate_table_create(payload)?;
        let table: DiningTable = self.http.post("tables", payload).await?;
        tracing::info!(id = table.id, "Table created");
        Ok(table)
    }

    #[instrument(skip(self, payload))]
    async fn update_table(&self, id: i64, payload: &DiningTableUpdate) -> ClientResult<DiningTable> {
        validation::validate_table_update(payload)?;
        self.http.put(&format!("tables/{id}"), payload).await
    }

    #[instrument(skip(self))]
    async fn delete_table(&self, id: i64) -> ClientResult<()> {
        self.http.delete(&format!("tables/{id}")).await?;
        tracing::info!("Table deleted");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn list_orders(&self) -> ClientResult<Vec<Order>> {
        self.http.get("orders").await
    }

    #[instrument(skip(self, status), fields(status = %status))]
    async fn list_orders_by_status(&self, status: &OrderStatus) -> ClientResult<Vec<Order>> {
        self.http
            .get(&format!("orders/status/{}", encode(status.as_str())))
            .await
    }

    #[instrument(skip(self))]
    async fn get_order(&self, id: i64) -> ClientResult<Order> {
        self.http.get(&format!("orders/{id}")).await
    }

    #[instrument(skip(self, lines), fields(lines = lines.len()))]
    async fn create_order(&self, table_id: i64, lines: &[OrderLineInput]) -> ClientResult<Order> {
        let order: Order = self
            .http
            .post(&format!("orders/table/{table_id}"), &lines)
            .await?;
        tracing::info!(order_id = order.id, total = %order.total_amount, "Order created");
        Ok(order)
    }

    #[instrument(skip(self, status), fields(status = %status))]
    async fn update_order_status(&self, id: i64, status: &OrderStatus) -> ClientResult<Order> {
        let body = StatusUpdate {
            status: status.clone(),
        };
        self.http.put(&format!("orders/{id}/status"), &body).await
    }
}
