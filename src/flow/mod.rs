pub mod graph;
pub mod kind;
pub mod node;
pub mod property;

pub use graph::*;
pub use kind::*;
pub use node::*;
pub use property::*;
