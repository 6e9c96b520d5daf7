//! Catalogo de sabores de las bebidas.

use crate::ingredient::Ingredient;

/// Sabores disponibles. Cada sabor conoce su fruta principal y la densidad
/// de fruta de la base licuada (gramos de fruta por cada 100 ml de base).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrinkFlavor {
    Strawberry,
    Banana,
    Mango,
}

impl DrinkFlavor {
    /// Todos los sabores, en el orden en que se muestran en el menu.
    pub const ALL: [DrinkFlavor; 3] = [
        DrinkFlavor::Strawberry,
        DrinkFlavor::Banana,
        DrinkFlavor::Mango,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            DrinkFlavor::Strawberry => "Strawberry",
            DrinkFlavor::Banana => "Banana",
            DrinkFlavor::Mango => "Mango",
        }
    }

    /// Fruta que se usa para preparar la base licuada de este sabor
    pub fn fruit_ingredient(&self) -> Ingredient {
        match self {
            DrinkFlavor::Strawberry => Ingredient::Strawberries,
            DrinkFlavor::Banana => Ingredient::Bananas,
            DrinkFlavor::Mango => Ingredient::Mango,
        }
    }

    /// Gramos de fruta necesarios por cada 100 ml de base licuada
    pub fn grams_per_blended_fruit_100ml(&self) -> f64 {
        match self {
            DrinkFlavor::Strawberry => 100.0,
            DrinkFlavor::Banana => 120.0,
            DrinkFlavor::Mango => 140.0,
        }
    }
}

impl std::fmt::Display for DrinkFlavor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
