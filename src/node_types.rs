use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum PayloadType {
    ExecutionFlow,
    Text,
    Number,
    Boolean,
    Json,
    Custom(String),
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum NodeKind {
    // Entry point for the flow
    Entry,
    Step { step_id: String, auto_flow: bool },
    ToolCall { name: String },
    Decision,
    End,
}

impl Default for NodeKind {
    fn default() -> Self {
        NodeKind::Entry
    }
}
