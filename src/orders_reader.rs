//! Lectura de pedidos por lote desde un archivo JSON. Traduce los nombres de
//! sabores y tamanios a los tipos del catalogo, el resto del sistema nunca ve
//! texto crudo.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::{debug, info};
use serde::Deserialize;

use crate::errors::VendorError;
use crate::flavor::DrinkFlavor;
use crate::size::DrinkSize;

#[derive(Deserialize, Debug)]
struct JsonOrder {
    flavors: Vec<String>,
    size: String,
}

#[derive(Deserialize)]
struct OrdersConfiguration {
    orders: Vec<JsonOrder>,
}

/// Pedido ya tipado, listo para pasarle al vendedor
#[derive(Debug, Clone, PartialEq)]
pub struct BatchOrder {
    pub flavors: Vec<DrinkFlavor>,
    pub size: DrinkSize,
}

fn parse_flavor(name: &str) -> Result<DrinkFlavor, VendorError> {
    DrinkFlavor::ALL
        .into_iter()
        .find(|flavor| flavor.display_name().eq_ignore_ascii_case(name.trim()))
        .ok_or_else(|| VendorError::OrdersFileError(format!("unknown flavor '{}'", name)))
}

fn parse_size(name: &str) -> Result<DrinkSize, VendorError> {
    DrinkSize::ALL
        .into_iter()
        .find(|size| size.display_name().eq_ignore_ascii_case(name.trim()))
        .ok_or_else(|| VendorError::OrdersFileError(format!("unknown size '{}'", name)))
}

fn convert_orders(json_orders: Vec<JsonOrder>) -> Result<Vec<BatchOrder>, VendorError> {
    let mut orders = Vec::new();
    for (position, order) in json_orders.into_iter().enumerate() {
        if order.flavors.is_empty() {
            return Err(VendorError::OrdersFileError(format!(
                "order {} has no flavors",
                position
            )));
        }
        let flavors = order
            .flavors
            .iter()
            .map(|name| parse_flavor(name))
            .collect::<Result<Vec<DrinkFlavor>, VendorError>>()?;
        let size = parse_size(&order.size)?;
        debug!("[READER] Parsed order {} of {:?}", position, size);
        orders.push(BatchOrder { flavors, size });
    }
    Ok(orders)
}

/// Lee y tipa todos los pedidos del archivo. Si algun pedido esta mal armado
/// se descarta el archivo completo.
pub fn read_orders<P: AsRef<Path>>(path: P) -> Result<Vec<BatchOrder>, VendorError> {
    let file = File::open(&path)
        .map_err(|error| VendorError::OrdersFileError(error.to_string()))?;
    let reader = BufReader::new(file);
    let configuration: OrdersConfiguration = serde_json::from_reader(reader)
        .map_err(|error| VendorError::OrdersFileError(error.to_string()))?;

    let orders = convert_orders(configuration.orders)?;
    info!("[READER] Read {} orders from the file", orders.len());
    Ok(orders)
}
