pub mod traits;
pub mod dijkstra;
pub mod suurballe;

pub use traits::{ShortestPathAlgorithm, ShortestPathResult};
