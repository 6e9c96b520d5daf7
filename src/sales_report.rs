//! Reporte diario de ventas. Es un agregado derivado, se arma a pedido a
//! partir del historial y no se guarda.

use chrono::NaiveDate;

use crate::sale::Sale;

/// Resumen de las ventas de una fecha: cantidad, recaudacion total y ticket
/// promedio.
#[derive(Debug, Clone, PartialEq)]
pub struct DailySalesReport {
    date: NaiveDate,
    sales: Vec<Sale>,
    total_revenue: f64,
    total_sales: usize,
}

impl DailySalesReport {
    pub fn new(date: NaiveDate, sales: Vec<Sale>) -> DailySalesReport {
        let total_revenue = sales.iter().map(Sale::price).sum();
        let total_sales = sales.len();
        DailySalesReport {
            date,
            sales,
            total_revenue,
            total_sales,
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn sales(&self) -> &[Sale] {
        &self.sales
    }

    pub fn total_revenue(&self) -> f64 {
        self.total_revenue
    }

    pub fn total_sales(&self) -> usize {
        self.total_sales
    }

    /// Ticket promedio del dia, 0 si no hubo ventas
    pub fn average_order_value(&self) -> f64 {
        if self.total_sales == 0 {
            return 0.0;
        }
        self.total_revenue / self.total_sales as f64
    }
}

impl std::fmt::Display for DailySalesReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Daily Sales Report for {}: {} sales, ${:.2} revenue (avg: ${:.2})",
            self.date,
            self.total_sales,
            self.total_revenue,
            self.average_order_value()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flavor::DrinkFlavor;
    use crate::recipe::Recipe;
    use crate::size::DrinkSize;

    fn report_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).expect("valid date")
    }

    fn sale_with_price(price: f64) -> Sale {
        let sold_at = report_date().and_hms_opt(9, 0, 0).expect("valid time");
        Sale::at(
            Recipe::new(DrinkFlavor::Banana, DrinkSize::Large),
            price,
            sold_at,
        )
        .expect("sale should be created")
    }

    #[test]
    fn should_aggregate_count_and_revenue() {
        let report = DailySalesReport::new(
            report_date(),
            vec![sale_with_price(2.60), sale_with_price(1.55), sale_with_price(4.05)],
        );
        assert_eq!(3, report.total_sales());
        assert!((report.total_revenue() - 8.20).abs() < 1e-9);
        assert!((report.average_order_value() - 8.20 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn should_report_a_zero_average_without_sales() {
        let report = DailySalesReport::new(report_date(), Vec::new());
        assert_eq!(0, report.total_sales());
        assert_eq!(0.0, report.total_revenue());
        assert_eq!(0.0, report.average_order_value());
    }

    #[test]
    fn should_format_the_summary_line() {
        let report = DailySalesReport::new(report_date(), vec![sale_with_price(2.60)]);
        assert_eq!(
            "Daily Sales Report for 2024-06-01: 1 sales, $2.60 revenue (avg: $2.60)",
            report.to_string()
        );
    }
}
