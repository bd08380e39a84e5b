//! Plain-text views

use shared::models::{DiningTable, MenuItem, Order};
use shared::money;

pub fn menu(items: &[MenuItem]) {
    if items.is_empty() {
        println!("No menu items");
        return;
    }
    println!("{:>5}  {:<28} {:<16} {:>9}", "ID", "NAME", "CATEGORY", "PRICE");
    for item in items {
        println!(
            "{:>5}  {:<28} {:<16} {:>9}",
            item.id,
            item.name,
            item.category,
            money::format(item.price)
        );
    }
}

pub fn menu_item(item: &MenuItem) {
    println!("#{} {}", item.id, item.name);
    println!("  category: {}", item.category);
    println!("  price:    {}", money::format(item.price));
    if let Some(description) = item.description.as_deref().filter(|d| !d.is_empty()) {
        println!("  {description}");
    }
}

pub fn tables(tables: &[DiningTable]) {
    if tables.is_empty() {
        println!("No tables");
        return;
    }
    println!("{:>5}  {:>6} {:>8}  {}", "ID", "NUMBER", "CAPACITY", "STATE");
    for table in tables {
        println!(
            "{:>5}  {:>6} {:>8}  {}",
            table.id,
            table.table_number,
            table.capacity,
            if table.occupied { "occupied" } else { "available" }
        );
    }
}

pub fn orders(orders: &[Order]) {
    if orders.is_empty() {
        println!("No orders");
        return;
    }
    println!(
        "{:>5}  {:>5}  {:<16} {:>5} {:>10}  {:<22} {}",
        "ID", "TABLE", "TIME", "ITEMS", "TOTAL", "STATUS", "ACTION"
    );
    for order in orders {
        println!(
            "{:>5}  {:>5}  {:<16} {:>5} {:>10}  {:<22} {}",
            order.id,
            order.table.table_number,
            order.order_time.format("%Y-%m-%d %H:%M").to_string(),
            order.item_count(),
            money::format(order.total_amount),
            status_cell(order),
            order.status.action_label().unwrap_or_default()
        );
    }
}

pub fn order(order: &Order) {
    println!(
        "Order #{}  table {}  {}",
        order.id,
        order.table.table_number,
        order.order_time.format("%Y-%m-%d %H:%M")
    );
    println!("  status: {}", status_cell(order));
    for line in &order.order_items {
        println!(
            "  {:>3} x {:<28} {:>9}",
            line.quantity,
            line.menu_item.name,
            money::format(line.line_total())
        );
        if let Some(note) = line.special_instructions.as_deref().filter(|n| !n.is_empty()) {
            println!("        note: {note}");
        }
    }
    println!("  total: {}", money::format(order.total_amount));
    if let Some(label) = order.status.action_label() {
        println!("  next:  {label}");
    }
}

fn status_cell(order: &Order) -> String {
    format!("{} [{}]", order.status, order.status.badge())
}
