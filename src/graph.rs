use super::node_types::{NodeKind, PayloadType};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FlowGraph {
    pub nodes: HashMap<Uuid, FlowNode>,
    pub edges: Vec<FlowEdge>,
}

impl Default for FlowGraph {
    fn default() -> Self {
        Self {
            nodes: HashMap::new(),
            edges: Vec::new(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FlowNode {
    pub id: Uuid,
    pub kind: NodeKind,
    pub position: (f32, f32),
    pub inputs: Vec<Port>,
    pub outputs: Vec<Port>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Port {
    pub name: String,
    pub payload: PayloadType,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FlowEdge {
    pub from_node: Uuid,
    pub from_port: String,
    pub to_node: Uuid,
    pub to_port: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
}

impl Port {
    fn flow(name: &str) -> Self {
        Self {
            name: name.to_string(),
            payload: PayloadType::ExecutionFlow,
        }
    }

    fn json(name: &str) -> Self {
        Self {
            name: name.to_string(),
            payload: PayloadType::Json,
        }
    }
}

impl FlowNode {
    /// Creates a node with the default port layout for its kind.
    pub fn new(kind: NodeKind, position: (f32, f32)) -> Self {
        let (inputs, outputs) = match &kind {
            NodeKind::Entry => (vec![], vec![Port::flow("out")]),
            NodeKind::Step { .. } => (vec![Port::flow("in")], vec![Port::flow("out")]),
            NodeKind::ToolCall { .. } => (
                vec![Port::flow("in"), Port::json("args")],
                vec![Port::flow("out"), Port::json("result")],
            ),
            NodeKind::Decision => (
                vec![Port::flow("in")],
                vec![Port::flow("true"), Port::flow("false")],
            ),
            NodeKind::End => (vec![Port::flow("in")], vec![]),
        };
        Self {
            id: Uuid::new_v4(),
            kind,
            position,
            inputs,
            outputs,
        }
    }
}

impl FlowGraph {
    pub fn add_node(&mut self, node: FlowNode) -> Uuid {
        let id = node.id;
        self.nodes.insert(id, node);
        id
    }

    /// Removes a node and every edge touching it.
    pub fn remove_node(&mut self, id: Uuid) -> Option<FlowNode> {
        let removed = self.nodes.remove(&id);
        if removed.is_some() {
            self.edges.retain(|e| e.from_node != id && e.to_node != id);
        }
        removed
    }

    pub fn connect(&mut self, from_node: Uuid, from_port: &str, to_node: Uuid, to_port: &str) {
        self.edges.push(FlowEdge {
            from_node,
            from_port: from_port.to_string(),
            to_node,
            to_port: to_port.to_string(),
            condition: None,
        });
    }

    /// Connects two nodes along a conditional route (e.g. a Decision branch).
    pub fn connect_when(
        &mut self,
        from_node: Uuid,
        from_port: &str,
        to_node: Uuid,
        to_port: &str,
        condition: &str,
    ) {
        self.edges.push(FlowEdge {
            from_node,
            from_port: from_port.to_string(),
            to_node,
            to_port: to_port.to_string(),
            condition: Some(condition.to_string()),
        });
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
