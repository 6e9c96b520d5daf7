//! Errores del puesto de jugos.

use crate::ingredient::Ingredient;

/// Errores que pueden devolver las operaciones del puesto.
/// `InsufficientInventory` es una condicion de negocio recuperable, la venta
/// se aborta sin haber modificado el stock. `InvalidArgument` indica un error
/// de uso por parte del llamador.
#[derive(Debug, Clone, PartialEq)]
pub enum VendorError {
    InsufficientInventory {
        ingredient: Ingredient,
        required: f64,
        available: f64,
    },
    InvalidArgument(String),
    OrdersFileError(String),
}

impl std::fmt::Display for VendorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VendorError::InsufficientInventory {
                ingredient,
                required,
                available,
            } => write!(
                f,
                "Insufficient {}: required {:.2} {}, but only {:.2} {} available",
                ingredient.display_name(),
                required,
                ingredient.unit(),
                available,
                ingredient.unit()
            ),
            VendorError::InvalidArgument(message) => write!(f, "Invalid argument: {}", message),
            VendorError::OrdersFileError(message) => {
                write!(f, "Could not process orders file: {}", message)
            }
        }
    }
}

impl std::error::Error for VendorError {}
