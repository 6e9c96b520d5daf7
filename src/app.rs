//! Menu interactivo del puesto. Toda la lectura y el parseo de texto de la
//! consola vive aca, el vendedor solo recibe valores ya tipados.

use std::io::{self, BufRead, Write};

use chrono::{Local, NaiveDate};
use log::info;

use crate::console;
use crate::constants::DEFAULT_LOW_STOCK_THRESHOLD;
use crate::flavor::DrinkFlavor;
use crate::orders_reader::read_orders;
use crate::recipe::Recipe;
use crate::size::DrinkSize;
use crate::vendor::Vendor;

pub struct VendorApp {
    vendor: Vendor,
}

impl VendorApp {
    pub fn new() -> VendorApp {
        VendorApp {
            vendor: Vendor::new(),
        }
    }

    /// Loop principal del menu. Corta con la opcion de salida o al terminarse
    /// la entrada.
    pub fn run(&mut self) {
        console::display_info("Welcome to the Fruit Vendor Management System!");
        self.check_and_display_low_stock();

        loop {
            console::display_main_menu();
            let Some(choice) = read_line() else { break };

            match choice.as_str() {
                "1" => self.view_current_inventory(),
                "2" => self.sell_single_flavor_drink(),
                "3" => self.sell_mixed_flavor_drink(),
                "4" => self.check_low_stock_ingredients(),
                "5" => self.view_daily_sales_report(),
                "6" => self.view_all_sales_history(),
                "7" => self.process_orders_from_file(),
                "0" => {
                    console::display_info("Thank you for using the Fruit Vendor Management System!");
                    break;
                }
                _ => console::display_error("Invalid option. Please try again."),
            }
        }
    }

    fn view_current_inventory(&self) {
        console::display_inventory(&self.vendor.current_inventory());
    }

    fn sell_single_flavor_drink(&mut self) {
        let Some(flavor) = select_flavor() else { return };
        let Some(size) = select_size() else { return };

        let recipe = Recipe::new(flavor, size);
        if !self.vendor.can_make(recipe) {
            console::display_error("Cannot make this drink - insufficient ingredients.");
            return;
        }

        match self.vendor.sell_single(recipe) {
            Ok(sale) => {
                console::display_sale_success(&sale);
                self.check_and_display_low_stock();
            }
            Err(error) => console::display_error(&error.to_string()),
        }
    }

    fn sell_mixed_flavor_drink(&mut self) {
        println!("Select flavors for mixed drink (enter 0 when done):");
        console::display_available_flavors();

        let mut selected = Vec::new();
        loop {
            let Some(input) = prompt("Select flavor (0 to finish): ") else { return };
            if input == "0" {
                break;
            }

            match parse_selection(&input, &DrinkFlavor::ALL) {
                Some(flavor) if selected.contains(&flavor) => {
                    println!("Flavor already selected.");
                }
                Some(flavor) => {
                    selected.push(flavor);
                    println!("Added: {}", flavor.display_name());
                }
                None => console::display_error("Invalid flavor selection."),
            }
        }

        if selected.is_empty() {
            console::display_error("At least one flavor must be selected.");
            return;
        }

        let Some(size) = select_size() else { return };

        match self.vendor.sell_mixed(&selected, size) {
            Ok(sale) => {
                console::display_sale_success(&sale);
                self.check_and_display_low_stock();
            }
            Err(error) => console::display_error(&error.to_string()),
        }
    }

    fn check_low_stock_ingredients(&self) {
        let Some(input) = prompt("Enter threshold number of drinks (default 4): ") else {
            return;
        };
        let Some(threshold) = parse_threshold(&input) else {
            console::display_error("Threshold must be a positive number.");
            return;
        };

        let low_stock = self.vendor.low_stock_ingredients(threshold);
        console::display_low_stock_warning(&low_stock, threshold);
        if low_stock.is_empty() {
            console::display_info("All ingredients are sufficiently stocked.");
        }
    }

    fn view_daily_sales_report(&self) {
        let Some(input) = prompt("Enter date (YYYY-MM-DD) or press Enter for today: ") else {
            return;
        };
        let Some(date) = parse_date(&input) else {
            console::display_error("Invalid date format. Use YYYY-MM-DD.");
            return;
        };

        let report = self.vendor.daily_report(date);
        console::display_daily_sales_report(&report);
    }

    fn view_all_sales_history(&self) {
        let sales = self.vendor.all_sales();
        if sales.is_empty() {
            console::display_info("No sales recorded yet.");
            return;
        }
        console::display_sales_history(&sales);
    }

    /// Procesa un archivo de pedidos por lote. Los pedidos que no se pueden
    /// preparar se saltean, el resto se vende normalmente.
    fn process_orders_from_file(&mut self) {
        let Some(input) = prompt("Enter orders file path (default orders.json): ") else {
            return;
        };
        let path = if input.is_empty() {
            "orders.json".to_string()
        } else {
            input
        };

        let orders = match read_orders(&path) {
            Ok(orders) => orders,
            Err(error) => {
                console::display_error(&error.to_string());
                return;
            }
        };

        let mut sold = 0;
        let mut skipped = 0;
        for (position, order) in orders.iter().enumerate() {
            let result = if order.flavors.len() == 1 {
                self.vendor.sell_single(Recipe::new(order.flavors[0], order.size))
            } else {
                self.vendor.sell_mixed(&order.flavors, order.size)
            };

            match result {
                Ok(sale) => {
                    info!("[BATCH] Sold order {}: {}", position, sale);
                    sold += 1;
                }
                Err(error) => {
                    info!("[BATCH] Skipped order {}: {}", position, error);
                    skipped += 1;
                }
            }
        }

        console::display_info(&format!(
            "Processed {} orders: {} sold, {} skipped.",
            orders.len(),
            sold,
            skipped
        ));
        self.check_and_display_low_stock();
    }

    fn check_and_display_low_stock(&self) {
        let low_stock = self
            .vendor
            .low_stock_ingredients(DEFAULT_LOW_STOCK_THRESHOLD);
        console::display_low_stock_warning(&low_stock, DEFAULT_LOW_STOCK_THRESHOLD);
    }
}

impl Default for VendorApp {
    fn default() -> Self {
        VendorApp::new()
    }
}

fn select_flavor() -> Option<DrinkFlavor> {
    console::display_available_flavors();
    let input = prompt(&format!("Select flavor (1-{}): ", DrinkFlavor::ALL.len()))?;
    let selection = parse_selection(&input, &DrinkFlavor::ALL);
    if selection.is_none() {
        console::display_error("Invalid flavor selection.");
    }
    selection
}

fn select_size() -> Option<DrinkSize> {
    console::display_available_sizes();
    let input = prompt(&format!("Select size (1-{}): ", DrinkSize::ALL.len()))?;
    let selection = parse_selection(&input, &DrinkSize::ALL);
    if selection.is_none() {
        console::display_error("Invalid size selection.");
    }
    selection
}

/// Traduce una opcion numerica de menu (desde 1) al elemento del catalogo
fn parse_selection<T: Copy>(input: &str, options: &[T]) -> Option<T> {
    let choice: usize = input.parse().ok()?;
    if choice < 1 || choice > options.len() {
        return None;
    }
    Some(options[choice - 1])
}

/// Fecha en formato YYYY-MM-DD, vacio significa hoy
fn parse_date(input: &str) -> Option<NaiveDate> {
    if input.is_empty() {
        return Some(Local::now().date_naive());
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d").ok()
}

/// Umbral de bebidas para el control de stock, vacio usa el valor por defecto
fn parse_threshold(input: &str) -> Option<u32> {
    if input.is_empty() {
        return Some(DEFAULT_LOW_STOCK_THRESHOLD);
    }
    match input.parse() {
        Ok(threshold) if threshold >= 1 => Some(threshold),
        _ => None,
    }
}

fn prompt(message: &str) -> Option<String> {
    print!("{}", message);
    if io::stdout().flush().is_err() {
        return None;
    }
    read_line()
}

/// Lee una linea de la entrada, None si se termino
fn read_line() -> Option<String> {
    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim().to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_a_menu_selection_starting_from_one() {
        assert_eq!(Some(DrinkFlavor::Strawberry), parse_selection("1", &DrinkFlavor::ALL));
        assert_eq!(Some(DrinkFlavor::Mango), parse_selection("3", &DrinkFlavor::ALL));
        assert_eq!(None, parse_selection("0", &DrinkFlavor::ALL));
        assert_eq!(None, parse_selection("4", &DrinkFlavor::ALL));
        assert_eq!(None, parse_selection("abc", &DrinkFlavor::ALL));
    }

    #[test]
    fn should_parse_a_report_date() {
        let expected = NaiveDate::from_ymd_opt(2024, 6, 1).expect("valid date");
        assert_eq!(Some(expected), parse_date("2024-06-01"));
        assert_eq!(None, parse_date("06/01/2024"));
        assert_eq!(Some(Local::now().date_naive()), parse_date(""));
    }

    #[test]
    fn should_parse_the_low_stock_threshold() {
        assert_eq!(Some(7), parse_threshold("7"));
        assert_eq!(Some(DEFAULT_LOW_STOCK_THRESHOLD), parse_threshold(""));
        assert_eq!(None, parse_threshold("0"));
        assert_eq!(None, parse_threshold("-2"));
        assert_eq!(None, parse_threshold("many"));
    }
}
