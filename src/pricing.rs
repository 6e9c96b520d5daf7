//! Calculo de precios de las bebidas a partir del costo de sus ingredientes.

use crate::constants::{MIXED_DRINK_PREMIUM, PROFIT_MARGIN};
use crate::errors::VendorError;
use crate::flavor::DrinkFlavor;
use crate::ingredient::Ingredient;
use crate::recipe::Recipe;
use crate::size::DrinkSize;

/// Costo por unidad del ingrediente, en dolares por gramo o por mililitro
pub fn ingredient_cost(ingredient: Ingredient) -> f64 {
    match ingredient {
        Ingredient::Strawberries => 0.008,
        Ingredient::Bananas => 0.003,
        Ingredient::Mango => 0.010,
        Ingredient::Ice => 0.001,
        Ingredient::CondensedMilk => 0.005,
        Ingredient::Sugar => 0.001,
    }
}

/// Redondea el valor para arriba al multiplo de $0.05 mas cercano.
/// El redondeo es siempre hacia arriba, nunca se pierde margen.
fn round_up_to_nickel(value: f64) -> f64 {
    (value * 20.0).ceil() / 20.0
}

fn ingredients_cost(recipe: &Recipe) -> f64 {
    recipe
        .required_ingredients()
        .iter()
        .map(|(ingredient, amount)| ingredient_cost(*ingredient) * amount)
        .sum()
}

/// Precio de venta de una bebida de un solo sabor: costo de los ingredientes
/// mas el margen de ganancia, redondeado a niquel
pub fn price(recipe: &Recipe) -> f64 {
    round_up_to_nickel(ingredients_cost(recipe) * (1.0 + PROFIT_MARGIN))
}

/// Precio de una bebida de sabores mezclados. Se promedian los precios de la
/// bebida completa de cada sabor y se aplica el recargo por mezcla.
pub fn mixed_price(flavors: &[DrinkFlavor], size: DrinkSize) -> Result<f64, VendorError> {
    if flavors.is_empty() {
        return Err(VendorError::InvalidArgument(
            "At least one flavor must be specified".to_string(),
        ));
    }

    let total: f64 = flavors
        .iter()
        .map(|flavor| price(&Recipe::new(*flavor, size)))
        .sum();
    let average = total / flavors.len() as f64;

    Ok(round_up_to_nickel(average * (1.0 + MIXED_DRINK_PREMIUM)))
}

/// Margen de ganancia efectivo de la receta como porcentaje del precio
pub fn profit_margin(recipe: &Recipe) -> f64 {
    let cost = ingredients_cost(recipe);
    if cost <= 0.0 {
        return 0.0;
    }
    let price = price(recipe);
    (price - cost) / price * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_price_a_medium_strawberry_drink() {
        // costo = 150*0.008 + 90*0.001 + 60*0.005 + 24*0.001 = 1.614
        // 1.614 * 1.6 = 2.5824 -> redondeado a niquel = 2.60
        let recipe = Recipe::new(DrinkFlavor::Strawberry, DrinkSize::Medium);
        assert_eq!(2.60, price(&recipe));
    }

    #[test]
    fn should_price_a_medium_banana_drink() {
        // costo = 180*0.003 + 90*0.001 + 60*0.005 + 24*0.001 = 0.954
        // 0.954 * 1.6 = 1.5264 -> 1.55
        let recipe = Recipe::new(DrinkFlavor::Banana, DrinkSize::Medium);
        assert_eq!(1.55, price(&recipe));
    }

    #[test]
    fn should_always_round_up_to_a_nickel_multiple() {
        for flavor in DrinkFlavor::ALL {
            for size in DrinkSize::ALL {
                let recipe = Recipe::new(flavor, size);
                let price = price(&recipe);
                let in_nickels = price * 20.0;
                assert!((in_nickels - in_nickels.round()).abs() < 1e-9);
                assert!(price >= ingredients_cost(&recipe) * 1.6 - 1e-9);
            }
        }
    }

    #[test]
    fn should_price_a_mixed_drink_with_the_premium() {
        // promedio(2.60, 1.55) = 2.075, * 1.10 = 2.2825 -> 2.30
        let flavors = [DrinkFlavor::Strawberry, DrinkFlavor::Banana];
        let price = mixed_price(&flavors, DrinkSize::Medium).expect("price should succeed");
        assert_eq!(2.30, price);
    }

    #[test]
    fn should_charge_the_premium_even_for_a_single_flavor_mix() {
        // 2.60 * 1.10 = 2.86 -> 2.90
        let price =
            mixed_price(&[DrinkFlavor::Strawberry], DrinkSize::Medium).expect("price should succeed");
        assert_eq!(2.90, price);
    }

    #[test]
    fn should_reject_an_empty_flavor_mix() {
        let result = mixed_price(&[], DrinkSize::Large);
        assert!(matches!(result, Err(VendorError::InvalidArgument(_))));
    }

    #[test]
    fn should_report_the_ingredient_costs() {
        assert_eq!(0.008, ingredient_cost(Ingredient::Strawberries));
        assert_eq!(0.003, ingredient_cost(Ingredient::Bananas));
        assert_eq!(0.010, ingredient_cost(Ingredient::Mango));
        assert_eq!(0.001, ingredient_cost(Ingredient::Ice));
        assert_eq!(0.005, ingredient_cost(Ingredient::CondensedMilk));
        assert_eq!(0.001, ingredient_cost(Ingredient::Sugar));
    }

    #[test]
    fn should_calculate_the_profit_margin_over_the_price() {
        // precio 2.60, costo 1.614 -> (2.60 - 1.614) / 2.60 * 100
        let recipe = Recipe::new(DrinkFlavor::Strawberry, DrinkSize::Medium);
        let margin = profit_margin(&recipe);
        assert!((margin - 37.923076923).abs() < 1e-6);
    }
}
