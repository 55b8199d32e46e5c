pub mod traits;
pub mod directed;
pub mod generators;
pub mod vertex_split;

pub use traits::{Graph, MutableGraph, GraphTransform};
pub use directed::DirectedGraph;
pub use vertex_split::VertexSplit;
