//! Nucleo transaccional del puesto. Coordina recetas, stock, precios y el
//! historial de ventas para concretar cada operacion.

use std::collections::HashMap;

use chrono::NaiveDate;
use log::debug;

use crate::errors::VendorError;
use crate::flavor::DrinkFlavor;
use crate::ingredient::Ingredient;
use crate::inventory::Inventory;
use crate::pricing;
use crate::recipe::{mixed_required_ingredients, Recipe};
use crate::sale::Sale;
use crate::sales_ledger::SalesLedger;
use crate::sales_report::DailySalesReport;
use crate::size::DrinkSize;

/// Vendedor del puesto. Es el unico duenio del inventario y del historial,
/// toda venta pasa por aca.
pub struct Vendor {
    inventory: Inventory,
    ledger: SalesLedger,
}

impl Vendor {
    pub fn new() -> Vendor {
        Vendor {
            inventory: Inventory::new(),
            ledger: SalesLedger::new(),
        }
    }

    /// Vende una bebida de un solo sabor. Primero valida que alcance el stock
    /// de todos los ingredientes, recien despues descuenta. Si falta alguno
    /// devuelve `InsufficientInventory` sin haber modificado nada.
    pub fn sell_single(&mut self, recipe: Recipe) -> Result<Sale, VendorError> {
        let required = recipe.required_ingredients();
        self.validate_availability(&required)?;
        self.consume(&required)?;

        let price = pricing::price(&recipe);
        let sale = Sale::new(recipe, price)?;
        self.ledger.record(sale.clone());
        debug!(
            "[VENDOR] Sold {} for ${:.2} (margin {:.1}%)",
            recipe,
            price,
            pricing::profit_margin(&recipe)
        );
        Ok(sale)
    }

    /// Indica si alcanza el stock para preparar la receta, sin descontar nada
    pub fn can_make(&self, recipe: Recipe) -> bool {
        recipe
            .required_ingredients()
            .iter()
            .all(|(ingredient, amount)| self.inventory.is_available(*ingredient, *amount))
    }

    /// Vende una bebida de sabores mezclados. Cada sabor aporta 1/N de una
    /// bebida completa del tamanio pedido. La venta se registra con una receta
    /// representativa del primer sabor, el precio ya es el de la mezcla.
    pub fn sell_mixed(&mut self, flavors: &[DrinkFlavor], size: DrinkSize) -> Result<Sale, VendorError> {
        if flavors.is_empty() {
            return Err(VendorError::InvalidArgument(
                "At least one flavor must be specified".to_string(),
            ));
        }

        let required = mixed_required_ingredients(flavors, size);
        self.validate_availability(&required)?;
        self.consume(&required)?;

        let price = pricing::mixed_price(flavors, size)?;
        let representative = Recipe::new(flavors[0], size);
        let sale = Sale::new(representative, price)?;
        self.ledger.record(sale.clone());
        debug!(
            "[VENDOR] Sold mixed drink of {} flavors for ${:.2}",
            flavors.len(),
            price
        );
        Ok(sale)
    }

    /// Ingredientes que no alcanzan para preparar `drinks_threshold` bebidas
    /// medianas de algun sabor. La bebida mediana se usa siempre como receta
    /// de referencia, sin importar que tamanios se venden. Cada ingrediente
    /// aparece una sola vez aunque lo marquen varios sabores.
    pub fn low_stock_ingredients(&self, drinks_threshold: u32) -> Vec<Ingredient> {
        let mut low_stock = Vec::new();

        for flavor in DrinkFlavor::ALL {
            let required = Recipe::new(flavor, DrinkSize::Medium).required_ingredients();
            for ingredient in Ingredient::ALL {
                if let Some(amount) = required.get(&ingredient) {
                    let required_for_threshold = amount * drinks_threshold as f64;
                    if !self.inventory.is_available(ingredient, required_for_threshold)
                        && !low_stock.contains(&ingredient)
                    {
                        low_stock.push(ingredient);
                    }
                }
            }
        }

        low_stock
    }

    pub fn daily_report(&self, date: NaiveDate) -> DailySalesReport {
        DailySalesReport::new(date, self.ledger.sales_on_date(date))
    }

    pub fn all_sales(&self) -> Vec<Sale> {
        self.ledger.all_sales()
    }

    pub fn current_inventory(&self) -> HashMap<Ingredient, f64> {
        self.inventory.all_inventory()
    }

    /// Valida que alcance el stock para todos los ingredientes pedidos.
    /// Se recorre en el orden del catalogo y se corta en el primer faltante.
    fn validate_availability(&self, required: &HashMap<Ingredient, f64>) -> Result<(), VendorError> {
        for ingredient in Ingredient::ALL {
            if let Some(amount) = required.get(&ingredient) {
                if !self.inventory.is_available(ingredient, *amount) {
                    return Err(VendorError::InsufficientInventory {
                        ingredient,
                        required: *amount,
                        available: self.inventory.quantity(ingredient),
                    });
                }
            }
        }
        Ok(())
    }

    /// Descuenta del stock todos los ingredientes pedidos. Se asume stock ya
    /// validado, un faltante aca es un error del llamador.
    fn consume(&mut self, required: &HashMap<Ingredient, f64>) -> Result<(), VendorError> {
        for ingredient in Ingredient::ALL {
            if let Some(amount) = required.get(&ingredient) {
                self.inventory.reduce_quantity(ingredient, *amount)?;
            }
        }
        Ok(())
    }
}

impl Default for Vendor {
    fn default() -> Self {
        Vendor::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Local;

    fn vendor_with(quantities: &[(Ingredient, f64)]) -> Vendor {
        let mut vendor = Vendor::new();
        for (ingredient, quantity) in quantities {
            vendor
                .inventory
                .set_quantity(*ingredient, *quantity)
                .expect("set should succeed");
        }
        vendor
    }

    #[test]
    fn should_sell_a_single_flavor_drink_and_reduce_the_stock() {
        let mut vendor = Vendor::new();
        let recipe = Recipe::new(DrinkFlavor::Strawberry, DrinkSize::Medium);

        let sale = vendor.sell_single(recipe).expect("sale should succeed");

        assert_eq!(recipe, sale.recipe());
        assert_eq!(2.60, sale.price());
        let inventory = vendor.current_inventory();
        assert_eq!(4850.0, inventory[&Ingredient::Strawberries]);
        assert_eq!(9910.0, inventory[&Ingredient::Ice]);
        assert_eq!(2940.0, inventory[&Ingredient::CondensedMilk]);
        assert_eq!(1976.0, inventory[&Ingredient::Sugar]);
        // El resto del stock queda igual
        assert_eq!(6000.0, inventory[&Ingredient::Bananas]);
        assert_eq!(4000.0, inventory[&Ingredient::Mango]);
    }

    #[test]
    fn should_record_the_sale_in_the_history() {
        let mut vendor = Vendor::new();
        let recipe = Recipe::new(DrinkFlavor::Banana, DrinkSize::Small);

        let sale = vendor.sell_single(recipe).expect("sale should succeed");

        let history = vendor.all_sales();
        assert_eq!(1, history.len());
        assert_eq!(sale, history[0]);
    }

    #[test]
    fn should_fail_the_sale_without_touching_the_stock_when_an_ingredient_is_short() {
        let mut vendor = vendor_with(&[(Ingredient::CondensedMilk, 50.0)]);
        let recipe = Recipe::new(DrinkFlavor::Strawberry, DrinkSize::Medium);

        let result = vendor.sell_single(recipe);

        assert_eq!(
            Err(VendorError::InsufficientInventory {
                ingredient: Ingredient::CondensedMilk,
                required: 60.0,
                available: 50.0,
            }),
            result
        );
        let inventory = vendor.current_inventory();
        assert_eq!(5000.0, inventory[&Ingredient::Strawberries]);
        assert_eq!(10000.0, inventory[&Ingredient::Ice]);
        assert_eq!(50.0, inventory[&Ingredient::CondensedMilk]);
        assert_eq!(2000.0, inventory[&Ingredient::Sugar]);
        assert!(vendor.all_sales().is_empty());
    }

    #[test]
    fn should_report_the_first_short_ingredient_in_catalog_order() {
        let mut vendor = vendor_with(&[
            (Ingredient::Strawberries, 10.0),
            (Ingredient::Sugar, 1.0),
        ]);
        let recipe = Recipe::new(DrinkFlavor::Strawberry, DrinkSize::Medium);

        let result = vendor.sell_single(recipe);

        assert_eq!(
            Err(VendorError::InsufficientInventory {
                ingredient: Ingredient::Strawberries,
                required: 150.0,
                available: 10.0,
            }),
            result
        );
    }

    #[test]
    fn should_know_if_a_drink_can_be_made() {
        let vendor = Vendor::new();
        assert!(vendor.can_make(Recipe::new(DrinkFlavor::Mango, DrinkSize::Large)));

        let short = vendor_with(&[(Ingredient::Ice, 10.0)]);
        assert!(!short.can_make(Recipe::new(DrinkFlavor::Mango, DrinkSize::Large)));
    }

    #[test]
    fn should_not_mutate_the_stock_when_checking_feasibility() {
        let vendor = Vendor::new();
        vendor.can_make(Recipe::new(DrinkFlavor::Banana, DrinkSize::Large));
        assert_eq!(6000.0, vendor.current_inventory()[&Ingredient::Bananas]);
    }

    #[test]
    fn should_sell_a_mixed_drink_splitting_a_full_drink_between_flavors() {
        let mut vendor = Vendor::new();
        let flavors = [DrinkFlavor::Strawberry, DrinkFlavor::Banana];

        let sale = vendor
            .sell_mixed(&flavors, DrinkSize::Medium)
            .expect("sale should succeed");

        assert_eq!(2.30, sale.price());
        let inventory = vendor.current_inventory();
        assert_eq!(5000.0 - 75.0, inventory[&Ingredient::Strawberries]);
        assert_eq!(6000.0 - 90.0, inventory[&Ingredient::Bananas]);
        assert_eq!(10000.0 - 90.0, inventory[&Ingredient::Ice]);
        assert_eq!(3000.0 - 60.0, inventory[&Ingredient::CondensedMilk]);
        assert_eq!(2000.0 - 24.0, inventory[&Ingredient::Sugar]);
    }

    #[test]
    fn should_record_the_mixed_sale_with_the_first_flavor_as_representative() {
        let mut vendor = Vendor::new();
        let flavors = [DrinkFlavor::Mango, DrinkFlavor::Strawberry];

        let sale = vendor
            .sell_mixed(&flavors, DrinkSize::Large)
            .expect("sale should succeed");

        assert_eq!(Recipe::new(DrinkFlavor::Mango, DrinkSize::Large), sale.recipe());
        assert_eq!(1, vendor.all_sales().len());
    }

    #[test]
    fn should_reject_a_mixed_sale_without_flavors() {
        let mut vendor = Vendor::new();
        let result = vendor.sell_mixed(&[], DrinkSize::Medium);
        assert!(matches!(result, Err(VendorError::InvalidArgument(_))));
        assert!(vendor.all_sales().is_empty());
    }

    #[test]
    fn should_fail_a_mixed_sale_without_touching_the_stock_when_short() {
        let mut vendor = vendor_with(&[(Ingredient::Bananas, 10.0)]);
        let flavors = [DrinkFlavor::Strawberry, DrinkFlavor::Banana];

        let result = vendor.sell_mixed(&flavors, DrinkSize::Medium);

        assert_eq!(
            Err(VendorError::InsufficientInventory {
                ingredient: Ingredient::Bananas,
                required: 90.0,
                available: 10.0,
            }),
            result
        );
        let inventory = vendor.current_inventory();
        assert_eq!(5000.0, inventory[&Ingredient::Strawberries]);
        assert_eq!(10.0, inventory[&Ingredient::Bananas]);
        assert_eq!(10000.0, inventory[&Ingredient::Ice]);
    }

    #[test]
    fn should_find_no_low_stock_with_a_fresh_inventory() {
        let vendor = Vendor::new();
        assert!(vendor.low_stock_ingredients(4).is_empty());
    }

    #[test]
    fn should_flag_ingredients_short_for_the_threshold_without_duplicates() {
        // 4 bebidas medianas de frutilla necesitan 600 g de frutillas y 96 g
        // de azucar. El azucar lo marcan los tres sabores pero aparece una vez.
        let vendor = vendor_with(&[
            (Ingredient::Strawberries, 100.0),
            (Ingredient::Sugar, 50.0),
        ]);

        let low_stock = vendor.low_stock_ingredients(4);

        assert_eq!(vec![Ingredient::Strawberries, Ingredient::Sugar], low_stock);
    }

    #[test]
    fn should_flag_every_fruit_that_is_short() {
        let vendor = vendor_with(&[
            (Ingredient::Strawberries, 0.0),
            (Ingredient::Bananas, 0.0),
            (Ingredient::Mango, 0.0),
        ]);

        let low_stock = vendor.low_stock_ingredients(1);

        assert_eq!(
            vec![Ingredient::Strawberries, Ingredient::Bananas, Ingredient::Mango],
            low_stock
        );
    }

    #[test]
    fn should_build_the_daily_report_from_the_recorded_sales() {
        let mut vendor = Vendor::new();
        vendor
            .sell_single(Recipe::new(DrinkFlavor::Strawberry, DrinkSize::Medium))
            .expect("sale should succeed");
        vendor
            .sell_single(Recipe::new(DrinkFlavor::Banana, DrinkSize::Medium))
            .expect("sale should succeed");
        vendor
            .sell_mixed(&[DrinkFlavor::Strawberry, DrinkFlavor::Banana], DrinkSize::Medium)
            .expect("sale should succeed");

        let today = Local::now().date_naive();
        let report = vendor.daily_report(today);

        assert_eq!(3, report.total_sales());
        assert!((report.total_revenue() - (2.60 + 1.55 + 2.30)).abs() < 1e-9);
    }

    #[test]
    fn should_build_an_empty_report_for_a_date_without_sales() {
        let vendor = Vendor::new();
        let date = chrono::NaiveDate::from_ymd_opt(1999, 1, 1).expect("valid date");
        let report = vendor.daily_report(date);
        assert_eq!(0, report.total_sales());
        assert_eq!(0.0, report.average_order_value());
    }
}
