pub mod edge;
pub use edge::*;

pub mod generator;
pub use generator::{GeneratedGraph, GraphError, GraphRequest, RandomGraphGenerator};

pub mod figure;
pub mod layout;
