pub mod incidence;
pub mod priority_queue;
pub mod tree_numbering;

pub use incidence::{Edge, IncidenceLists};
pub use priority_queue::BinaryHeapWrapper;
pub use tree_numbering::TreeNumbering;
