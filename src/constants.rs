//! Parametros de configuracion del puesto de jugos

/// Mililitros de base licuada de fruta por cada 100 ml de bebida
pub const BLENDED_FRUIT_ML_PER_100ML: f64 = 50.0;

/// Mililitros de hielo por cada 100 ml de bebida
pub const ICE_ML_PER_100ML: f64 = 30.0;

/// Mililitros de leche condensada por cada 100 ml de bebida
pub const CONDENSED_MILK_ML_PER_100ML: f64 = 20.0;

/// Gramos de azucar por cada 100 ml de bebida
pub const SUGAR_G_PER_100ML: f64 = 8.0;

/// Margen de ganancia que se aplica sobre el costo de los ingredientes (60%)
pub const PROFIT_MARGIN: f64 = 0.60;

/// Recargo extra que se aplica a las bebidas de sabores mezclados (10%)
pub const MIXED_DRINK_PREMIUM: f64 = 0.10;

/// Capacidad inicial de frutillas en gramos
pub const STRAWBERRIES_STORAGE: f64 = 5000.0;

/// Capacidad inicial de bananas en gramos
pub const BANANAS_STORAGE: f64 = 6000.0;

/// Capacidad inicial de mango en gramos
pub const MANGO_STORAGE: f64 = 4000.0;

/// Capacidad inicial de hielo en mililitros
pub const ICE_STORAGE: f64 = 10000.0;

/// Capacidad inicial de leche condensada en mililitros
pub const CONDENSED_MILK_STORAGE: f64 = 3000.0;

/// Capacidad inicial de azucar en gramos
pub const SUGAR_STORAGE: f64 = 2000.0;

/// Cantidad de bebidas que se usa por defecto para proyectar el stock bajo.
/// Por ejemplo, con 4 se alerta todo ingrediente que no alcance para preparar
/// 4 bebidas medianas de algun sabor.
pub const DEFAULT_LOW_STOCK_THRESHOLD: u32 = 4;
