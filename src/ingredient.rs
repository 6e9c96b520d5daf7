//! Catalogo de ingredientes del puesto de jugos.

/// Ingredientes con los que se preparan las bebidas. Es un conjunto cerrado,
/// cada variante tiene asociada su unidad de medida (gramos o mililitros).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ingredient {
    Strawberries,
    Bananas,
    Mango,
    Ice,
    CondensedMilk,
    Sugar,
}

impl Ingredient {
    /// Todos los ingredientes, en orden de declaracion. Se usa cuando se
    /// necesita recorrerlos en un orden determinista.
    pub const ALL: [Ingredient; 6] = [
        Ingredient::Strawberries,
        Ingredient::Bananas,
        Ingredient::Mango,
        Ingredient::Ice,
        Ingredient::CondensedMilk,
        Ingredient::Sugar,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Ingredient::Strawberries => "strawberries",
            Ingredient::Bananas => "bananas",
            Ingredient::Mango => "mango",
            Ingredient::Ice => "ice",
            Ingredient::CondensedMilk => "condensed milk",
            Ingredient::Sugar => "sugar",
        }
    }

    /// Unidad en la que se mide el ingrediente, "g" o "ml"
    pub fn unit(&self) -> &'static str {
        match self {
            Ingredient::Strawberries | Ingredient::Bananas | Ingredient::Mango => "g",
            Ingredient::Ice | Ingredient::CondensedMilk => "ml",
            Ingredient::Sugar => "g",
        }
    }
}

impl std::fmt::Display for Ingredient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
