//! Tamanios de las bebidas.

/// Tamanios en los que se vende una bebida, con su volumen total en ml.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrinkSize {
    Small,
    Medium,
    Large,
}

impl DrinkSize {
    /// Todos los tamanios, de menor a mayor.
    pub const ALL: [DrinkSize; 3] = [DrinkSize::Small, DrinkSize::Medium, DrinkSize::Large];

    pub fn display_name(&self) -> &'static str {
        match self {
            DrinkSize::Small => "Small",
            DrinkSize::Medium => "Medium",
            DrinkSize::Large => "Large",
        }
    }

    /// Volumen total de la bebida en mililitros
    pub fn volume_ml(&self) -> f64 {
        match self {
            DrinkSize::Small => 200.0,
            DrinkSize::Medium => 300.0,
            DrinkSize::Large => 500.0,
        }
    }
}

impl std::fmt::Display for DrinkSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}ml)", self.display_name(), self.volume_ml() as u64)
    }
}
