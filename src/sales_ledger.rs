//! Historial de ventas del puesto. Solo se agregan ventas, nunca se
//! modifican ni se borran.

use chrono::NaiveDate;

use crate::sale::Sale;

/// Libro de ventas en memoria, en orden de insercion.
pub struct SalesLedger {
    sales: Vec<Sale>,
}

impl SalesLedger {
    pub fn new() -> SalesLedger {
        SalesLedger { sales: Vec::new() }
    }

    pub fn record(&mut self, sale: Sale) {
        self.sales.push(sale);
    }

    /// Ventas cuya fecha calendario coincide con la pedida, en orden de
    /// insercion
    pub fn sales_on_date(&self, date: NaiveDate) -> Vec<Sale> {
        self.sales
            .iter()
            .filter(|sale| sale.sold_at().date() == date)
            .cloned()
            .collect()
    }

    /// Copia de todo el historial
    pub fn all_sales(&self) -> Vec<Sale> {
        self.sales.clone()
    }

    pub fn total_revenue_on_date(&self, date: NaiveDate) -> f64 {
        self.sales_on_date(date).iter().map(Sale::price).sum()
    }

    pub fn count_on_date(&self, date: NaiveDate) -> usize {
        self.sales_on_date(date).len()
    }
}

impl Default for SalesLedger {
    fn default() -> Self {
        SalesLedger::new()
    }
}
