//! Formato de salida por consola. Solo consume valores ya calculados por el
//! nucleo, no tiene logica de negocio.

use std::collections::HashMap;
use std::io::Write;

use crate::flavor::DrinkFlavor;
use crate::ingredient::Ingredient;
use crate::sale::Sale;
use crate::sales_report::DailySalesReport;
use crate::size::DrinkSize;

const SEPARATOR: &str = "================================";
const THIN_SEPARATOR: &str = "--------------------------------";

pub fn display_inventory(inventory: &HashMap<Ingredient, f64>) {
    println!("{}", SEPARATOR);
    println!("         CURRENT INVENTORY");
    println!("{}", SEPARATOR);

    if inventory.is_empty() {
        println!("No inventory available.");
        return;
    }

    println!("{:<20} {:>15}", "Ingredient", "Quantity");
    println!("{}", THIN_SEPARATOR);
    for ingredient in Ingredient::ALL {
        if let Some(quantity) = inventory.get(&ingredient) {
            println!(
                "{:<20} {:>10.2} {}",
                ingredient.display_name(),
                quantity,
                ingredient.unit()
            );
        }
    }
    println!();
}

pub fn display_sale_success(sale: &Sale) {
    println!("{}", SEPARATOR);
    println!("         SALE COMPLETED");
    println!("{}", SEPARATOR);
    println!("Drink: {}", sale.recipe());
    println!("Price: ${:.2}", sale.price());
    println!("Time: {}", sale.sold_at());
    println!("Thank you for your purchase!");
    println!();
}

pub fn display_low_stock_warning(low_stock: &[Ingredient], threshold: u32) {
    if low_stock.is_empty() {
        return;
    }

    println!("LOW STOCK WARNING");
    println!("{}", THIN_SEPARATOR);
    println!(
        "The following ingredients are below the level required for {} drinks:",
        threshold
    );
    for ingredient in low_stock {
        println!("- {}", ingredient.display_name());
    }
    println!();
}

pub fn display_daily_sales_report(report: &DailySalesReport) {
    println!("{}", SEPARATOR);
    println!("    DAILY SALES REPORT - {}", report.date());
    println!("{}", SEPARATOR);
    println!("Total Sales: {}", report.total_sales());
    println!("Total Revenue: ${:.2}", report.total_revenue());
    println!("Average Order Value: ${:.2}", report.average_order_value());

    if !report.sales().is_empty() {
        println!("{}", THIN_SEPARATOR);
        println!("Individual Sales:");
        for sale in report.sales() {
            println!("- {}: ${:.2}", sale.recipe(), sale.price());
        }
    }
    println!();
}

pub fn display_sales_history(sales: &[Sale]) {
    println!("{}", SEPARATOR);
    println!("         SALES HISTORY");
    println!("{}", SEPARATOR);
    println!("{:<25} {:<10} {:<15}", "Drink", "Price", "Date");
    println!("{}", THIN_SEPARATOR);

    for sale in sales {
        println!(
            "{:<25} ${:<9.2} {}",
            sale.recipe().to_string(),
            sale.price(),
            sale.sold_at().date()
        );
    }

    let total_revenue: f64 = sales.iter().map(Sale::price).sum();
    println!("{}", THIN_SEPARATOR);
    println!("Total Sales: {}", sales.len());
    println!("Total Revenue: ${:.2}", total_revenue);
    println!();
}

pub fn display_available_flavors() {
    println!("Available Flavors:");
    for (position, flavor) in DrinkFlavor::ALL.iter().enumerate() {
        println!("{}. {}", position + 1, flavor.display_name());
    }
    println!();
}

pub fn display_available_sizes() {
    println!("Available Sizes:");
    for (position, size) in DrinkSize::ALL.iter().enumerate() {
        println!("{}. {}", position + 1, size);
    }
    println!();
}

pub fn display_main_menu() {
    println!("{}", SEPARATOR);
    println!("    FRUIT VENDOR MANAGEMENT SYSTEM");
    println!("{}", SEPARATOR);
    println!("1. View Current Inventory");
    println!("2. Sell Single Flavor Drink");
    println!("3. Sell Mixed Flavor Drink");
    println!("4. Check Low Stock Ingredients");
    println!("5. View Daily Sales Report");
    println!("6. View All Sales History");
    println!("7. Process Orders From File");
    println!("0. Exit");
    println!("{}", SEPARATOR);
    print!("Please select an option: ");
    let _ = std::io::stdout().flush();
}

pub fn display_error(message: &str) {
    println!("ERROR: {}", message);
    println!();
}

pub fn display_info(message: &str) {
    println!("{}", message);
    println!();
}
