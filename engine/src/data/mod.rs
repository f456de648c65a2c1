// Batch input sources
pub mod csv_batch;
