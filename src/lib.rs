pub mod graph;
pub mod history;
pub mod node_types;

pub use graph::{FlowEdge, FlowGraph, FlowNode, Port};
pub use history::{HistoryManager, HistoryOptions, ReplayGuard, Restored, Snapshot};
pub use node_types::{NodeKind, PayloadType};
