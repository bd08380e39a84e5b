//! Command handlers

use std::sync::Arc;

use anyhow::{Context, bail};
use shared::models::{
    DiningTableCreate, DiningTableUpdate, MenuItemCreate, MenuItemUpdate, OrderStatus,
};
use tavola_client::{
    AdvanceOutcome, CategoryFilter, ClientConfig, Gateway, NetworkHttpClient, OrderBoard,
    OrderComposer, OrderPoller, RestaurantApi, SubmitOutcome,
};

use crate::render;
use crate::{Command, MenuCommand, OrderCommand, TableCommand};

/// One `--item` argument: menu item id, optional quantity, optional note
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemSpec {
    pub menu_item_id: i64,
    pub quantity: Option<i32>,
    pub note: Option<String>,
}

/// Parse `ID[:QTY[:NOTE]]`; the note may itself contain colons
pub fn parse_item_spec(raw: &str) -> Result<ItemSpec, String> {
    let mut parts = raw.splitn(3, ':');
    let id = parts.next().unwrap_or_default();
    let menu_item_id = id
        .trim()
        .parse()
        .map_err(|_| format!("invalid menu item id '{id}'"))?;
    let quantity = match parts.next().map(str::trim).filter(|q| !q.is_empty()) {
        Some(q) => Some(q.parse().map_err(|_| format!("invalid quantity '{q}'"))?),
        None => None,
    };
    let note = parts.next().map(str::to_string);
    Ok(ItemSpec {
        menu_item_id,
        quantity,
        note,
    })
}

/// Status names are accepted in any case
pub fn parse_status(raw: &str) -> Result<OrderStatus, String> {
    let Ok(status) = raw.trim().to_uppercase().parse::<OrderStatus>();
    match status {
        OrderStatus::Unknown(other) => Err(format!("unknown order status '{other}'")),
        status => Ok(status),
    }
}

pub async fn run(config: ClientConfig, command: Command) -> anyhow::Result<()> {
    let gateway = config
        .build_gateway()
        .context("Failed to create HTTP client")?;
    tracing::debug!(base_url = %config.base_url, "Using backend");

    match command {
        Command::Menu { command } => menu(&gateway, command).await,
        Command::Tables { command } => tables(&gateway, command).await,
        Command::Orders { command } => orders(gateway, &config, command).await,
    }
}

async fn menu(api: &Gateway<NetworkHttpClient>, command: MenuCommand) -> anyhow::Result<()> {
    match command {
        MenuCommand::List { category } => {
            let filter = CategoryFilter::from(category.as_deref());
            let items = match &filter {
                CategoryFilter::All => api.list_menu_items().await,
                CategoryFilter::Named(name) => api.list_menu_items_by_category(name).await,
            }
            .context("Failed to load menu items")?;
            render::menu(&items);
        }
        MenuCommand::Show { id } => {
            let item = api
                .get_menu_item(id)
                .await
                .context("Failed to load menu item")?;
            render::menu_item(&item);
        }
        MenuCommand::Add {
            name,
            price,
            category,
            description,
        } => {
            let item = api
                .create_menu_item(&MenuItemCreate {
                    name,
                    description,
                    price,
                    category,
                })
                .await
                .context("Failed to save menu item")?;
            tracing::info!(id = item.id, "Menu item created");
            render::menu_item(&item);
        }
        MenuCommand::Update {
            id,
            name,
            price,
            category,
            description,
        } => {
            let current = api
                .get_menu_item(id)
                .await
                .context("Failed to load menu item")?;
            let mut update = MenuItemUpdate::from_item(&current);
            if let Some(name) = name {
                update.name = name;
            }
            if let Some(price) = price {
                update.price = price;
            }
            if let Some(category) = category {
                update.category = category;
            }
            if description.is_some() {
                update.description = description;
            }
            let item = api
                .update_menu_item(id, &update)
                .await
                .context("Failed to save menu item")?;
            render::menu_item(&item);
        }
        MenuCommand::Delete { id } => {
            api.delete_menu_item(id)
                .await
                .context("Failed to delete menu item")?;
            println!("Menu item #{id} deleted");
        }
    }
    Ok(())
}

async fn tables(api: &Gateway<NetworkHttpClient>, command: TableCommand) -> anyhow::Result<()> {
    match command {
        TableCommand::List { available } => {
            let tables = if available {
                api.list_available_tables().await
            } else {
                api.list_tables().await
            }
            .context("Failed to load tables")?;
            render::tables(&tables);
        }
        TableCommand::Add { number, capacity } => {
            let table = api
                .create_table(&DiningTableCreate {
                    table_number: number,
                    capacity,
                    occupied: false,
                })
                .await
                .context("Failed to save table")?;
            tracing::info!(id = table.id, "Table created");
            render::tables(std::slice::from_ref(&table));
        }
        TableCommand::Update {
            id,
            number,
            capacity,
            occupied,
        } => {
            let current = api.get_table(id).await.context("Failed to load table")?;
            let mut update = DiningTableUpdate::from_table(&current);
            if let Some(number) = number {
                update.table_number = number;
            }
            if let Some(capacity) = capacity {
                update.capacity = capacity;
            }
            if let Some(occupied) = occupied {
                update.occupied = occupied;
            }
            let table = api
                .update_table(id, &update)
                .await
                .context("Failed to save table")?;
            render::tables(std::slice::from_ref(&table));
        }
        TableCommand::Delete { id } => {
            api.delete_table(id)
                .await
                .context("Failed to delete table")?;
            println!("Table #{id} deleted");
        }
    }
    Ok(())
}

async fn orders(
    api: Gateway<NetworkHttpClient>,
    config: &ClientConfig,
    command: OrderCommand,
) -> anyhow::Result<()> {
    match command {
        OrderCommand::List { status } => {
            let orders = match &status {
                Some(status) => api.list_orders_by_status(status).await,
                None => api.list_orders().await,
            }
            .context("Failed to load orders")?;
            render::orders(&orders);
        }
        OrderCommand::Show { id } => {
            let mut board = OrderBoard::new();
            let order = board
                .select(&api, id)
                .await
                .context("Failed to load order details")?;
            render::order(order);
        }
        OrderCommand::Create { table_id, items } => create_order(&api, table_id, items).await?,
        OrderCommand::Advance { id } => {
            let mut board = OrderBoard::new();
            board
                .refresh(&api)
                .await
                .context("Failed to load orders")?;
            match board
                .advance(&api, id)
                .await
                .context("Failed to update order status")?
            {
                AdvanceOutcome::Advanced(order) => render::order(&order),
                AdvanceOutcome::NoActionAvailable => {
                    println!("No action available for order #{id}");
                }
            }
        }
        OrderCommand::Watch { interval } => {
            let period = match interval.filter(|secs| *secs > 0) {
                Some(secs) => std::time::Duration::from_secs(secs),
                None => config.poll_period(),
            };
            watch(Arc::new(api), period).await?;
        }
    }
    Ok(())
}

async fn create_order(
    api: &Gateway<NetworkHttpClient>,
    table_id: i64,
    items: Vec<ItemSpec>,
) -> anyhow::Result<()> {
    let mut composer = OrderComposer::load(api, table_id)
        .await
        .context("Failed to load table and menu")?;

    for spec in items {
        if !composer.add_menu_item(spec.menu_item_id) {
            bail!("Menu item #{} is not on the menu", spec.menu_item_id);
        }
        let draft = composer.draft_mut();
        if let Some(quantity) = spec.quantity {
            draft.set_quantity(spec.menu_item_id, quantity);
        }
        if let Some(note) = spec.note {
            draft.set_note(spec.menu_item_id, note);
        }
    }

    match composer.submit(api).await.context("Failed to create order")? {
        SubmitOutcome::Created(order) => {
            tracing::info!(order_id = order.id, "Order created");
            render::order(&order);
            Ok(())
        }
        SubmitOutcome::Blocked(block) => bail!(block.message()),
    }
}

async fn watch(
    api: Arc<Gateway<NetworkHttpClient>>,
    period: std::time::Duration,
) -> anyhow::Result<()> {
    let mut board = OrderBoard::new();
    board
        .refresh(api.as_ref())
        .await
        .context("Failed to load orders")?;
    render::orders(board.orders());

    let (poller, mut updates) = OrderPoller::spawn(api, period);
    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                board.apply_poll(updates.borrow_and_update().clone());
                println!();
                render::orders(board.orders());
            }
        }
    }
    poller.shutdown().await;
    Ok(())
}
