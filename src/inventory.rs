//! Stock de ingredientes del puesto. Guarda la cantidad disponible de cada
//! ingrediente y controla que nunca quede en negativo.

use std::collections::HashMap;

use crate::constants::{
    BANANAS_STORAGE, CONDENSED_MILK_STORAGE, ICE_STORAGE, MANGO_STORAGE, STRAWBERRIES_STORAGE,
    SUGAR_STORAGE,
};
use crate::errors::VendorError;
use crate::ingredient::Ingredient;

/// Inventario en memoria. Es el unico duenio de su mapa interno, hacia
/// afuera solo entrega copias.
pub struct Inventory {
    quantities: HashMap<Ingredient, f64>,
}

impl Inventory {
    /// Crea el inventario con las cantidades iniciales de cada ingrediente
    pub fn new() -> Inventory {
        let mut inventory = Inventory {
            quantities: HashMap::new(),
        };
        inventory.initialize();
        inventory
    }

    /// Vuelve el stock a las cantidades iniciales
    pub fn initialize(&mut self) {
        self.quantities.clear();
        self.quantities
            .insert(Ingredient::Strawberries, STRAWBERRIES_STORAGE);
        self.quantities.insert(Ingredient::Bananas, BANANAS_STORAGE);
        self.quantities.insert(Ingredient::Mango, MANGO_STORAGE);
        self.quantities.insert(Ingredient::Ice, ICE_STORAGE);
        self.quantities
            .insert(Ingredient::CondensedMilk, CONDENSED_MILK_STORAGE);
        self.quantities.insert(Ingredient::Sugar, SUGAR_STORAGE);
    }

    /// Cantidad disponible del ingrediente, 0 si nunca fue cargado
    pub fn quantity(&self, ingredient: Ingredient) -> f64 {
        *self.quantities.get(&ingredient).unwrap_or(&0.0)
    }

    /// Pisa la cantidad del ingrediente con un nuevo valor
    pub fn set_quantity(&mut self, ingredient: Ingredient, quantity: f64) -> Result<(), VendorError> {
        if quantity < 0.0 {
            return Err(VendorError::InvalidArgument(
                "Quantity cannot be negative".to_string(),
            ));
        }
        self.quantities.insert(ingredient, quantity);
        Ok(())
    }

    /// Descuenta `amount` del ingrediente. Falla si el descuento es negativo
    /// o si supera lo disponible, en ese caso no modifica nada.
    pub fn reduce_quantity(&mut self, ingredient: Ingredient, amount: f64) -> Result<(), VendorError> {
        if amount < 0.0 {
            return Err(VendorError::InvalidArgument(
                "Amount to reduce cannot be negative".to_string(),
            ));
        }

        let current = self.quantity(ingredient);
        if amount > current {
            return Err(VendorError::InvalidArgument(format!(
                "Cannot reduce {} by {:.2} {}: only {:.2} {} available",
                ingredient.display_name(),
                amount,
                ingredient.unit(),
                current,
                ingredient.unit()
            )));
        }

        self.set_quantity(ingredient, current - amount)
    }

    pub fn is_available(&self, ingredient: Ingredient, amount: f64) -> bool {
        self.quantity(ingredient) >= amount
    }

    /// Copia del estado actual del stock, modificarla no afecta al inventario
    pub fn all_inventory(&self) -> HashMap<Ingredient, f64> {
        self.quantities.clone()
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Inventory::new()
    }
}
