//! Standalone debugging exercises that sit beside the cart.

pub mod data_processing;
pub mod golden_ratio;

pub use data_processing::{calculate_average, process_data, ProcessedData};
pub use golden_ratio::{approx_phi, fib, phi_table};
