//! Receta de una bebida. Convierte un sabor y un tamanio en las cantidades
//! de ingredientes necesarias para prepararla.

use std::collections::HashMap;

use crate::constants::{
    BLENDED_FRUIT_ML_PER_100ML, CONDENSED_MILK_ML_PER_100ML, ICE_ML_PER_100ML, SUGAR_G_PER_100ML,
};
use crate::flavor::DrinkFlavor;
use crate::ingredient::Ingredient;
use crate::size::DrinkSize;

/// Receta de una bebida de un solo sabor. Dos recetas con el mismo sabor y
/// tamanio son la misma receta, no tienen identidad propia.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Recipe {
    pub flavor: DrinkFlavor,
    pub size: DrinkSize,
}

impl Recipe {
    pub fn new(flavor: DrinkFlavor, size: DrinkSize) -> Recipe {
        Recipe { flavor, size }
    }

    /// Calcula las cantidades de ingredientes necesarias para preparar la
    /// bebida. Devuelve siempre cuatro entradas: la fruta del sabor, hielo,
    /// leche condensada y azucar. Las tasas base estan definidas por cada
    /// 100 ml de bebida, por lo que escalan linealmente con el tamanio.
    pub fn required_ingredients(&self) -> HashMap<Ingredient, f64> {
        let mut ingredients = HashMap::new();

        let volume_multiplier = self.size.volume_ml() / 100.0;

        let blended_fruit_ml = BLENDED_FRUIT_ML_PER_100ML * volume_multiplier;
        let fruit_grams = (blended_fruit_ml / 100.0) * self.flavor.grams_per_blended_fruit_100ml();

        ingredients.insert(self.flavor.fruit_ingredient(), fruit_grams);
        ingredients.insert(Ingredient::Ice, ICE_ML_PER_100ML * volume_multiplier);
        ingredients.insert(
            Ingredient::CondensedMilk,
            CONDENSED_MILK_ML_PER_100ML * volume_multiplier,
        );
        ingredients.insert(Ingredient::Sugar, SUGAR_G_PER_100ML * volume_multiplier);

        ingredients
    }
}

impl std::fmt::Display for Recipe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} Drink",
            self.size.display_name(),
            self.flavor.display_name()
        )
    }
}

/// Calcula los ingredientes necesarios para una bebida de sabores mezclados.
/// Cada sabor aporta 1/N de los ingredientes de una bebida COMPLETA del
/// tamanio pedido, de manera que el total sigue siendo una sola bebida.
/// No se achica la receta de cada sabor antes de dividir.
pub fn mixed_required_ingredients(
    flavors: &[DrinkFlavor],
    size: DrinkSize,
) -> HashMap<Ingredient, f64> {
    let mut total: HashMap<Ingredient, f64> = HashMap::new();
    let share = flavors.len() as f64;

    for flavor in flavors {
        let required = Recipe::new(*flavor, size).required_ingredients();
        for (ingredient, amount) in required {
            *total.entry(ingredient).or_insert(0.0) += amount / share;
        }
    }

    total
}
