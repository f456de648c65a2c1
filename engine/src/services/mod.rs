pub mod calculator_service;
pub mod report;

pub use calculator_service::CalculatorService;
