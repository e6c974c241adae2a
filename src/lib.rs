pub mod dataset;
pub mod graph;
pub mod server;
pub mod views;
