pub mod app;
pub mod console;
pub mod constants;
pub mod errors;
pub mod flavor;
pub mod ingredient;
pub mod inventory;
pub mod orders_reader;
pub mod pricing;
pub mod recipe;
pub mod sale;
pub mod sales_ledger;
pub mod sales_report;
pub mod size;
pub mod vendor;

use app::VendorApp;
use log::LevelFilter;
use simple_logger::SimpleLogger;

fn main() {
    SimpleLogger::new()
        .with_level(LevelFilter::Info)
        .env()
        .init()
        .expect("Error initializing the logger");

    let mut app = VendorApp::new();
    app.run();
}
