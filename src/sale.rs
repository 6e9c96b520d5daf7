//! Registro de una venta concretada.

use chrono::{Local, NaiveDateTime};

use crate::errors::VendorError;
use crate::recipe::Recipe;

/// Venta ya realizada. Una vez creada no se modifica, solo se agrega al
/// historial. Para las bebidas mezcladas la receta guardada es representativa
/// (primer sabor elegido), el precio ya refleja la mezcla real.
#[derive(Debug, Clone, PartialEq)]
pub struct Sale {
    recipe: Recipe,
    price: f64,
    sold_at: NaiveDateTime,
}

impl Sale {
    /// Crea una venta con la fecha y hora actuales
    pub fn new(recipe: Recipe, price: f64) -> Result<Sale, VendorError> {
        Sale::at(recipe, price, Local::now().naive_local())
    }

    /// Crea una venta con un momento explicito
    pub fn at(recipe: Recipe, price: f64, sold_at: NaiveDateTime) -> Result<Sale, VendorError> {
        if price < 0.0 {
            return Err(VendorError::InvalidArgument(
                "Price cannot be negative".to_string(),
            ));
        }
        Ok(Sale {
            recipe,
            price,
            sold_at,
        })
    }

    pub fn recipe(&self) -> Recipe {
        self.recipe
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn sold_at(&self) -> NaiveDateTime {
        self.sold_at
    }
}

impl std::fmt::Display for Sale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Sale{{{}, ${:.2}, {}}}",
            self.recipe,
            self.price,
            self.sold_at.date()
        )
    }
}
