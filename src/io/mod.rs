// I/O module
// File-backed persistence implementing the core persistence-gateway seam

pub mod json_store;

pub use json_store::JsonFileGateway;
