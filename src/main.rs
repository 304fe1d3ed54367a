use chrono::Local;
use flow_history::{FlowGraph, FlowNode, HistoryManager, HistoryOptions, NodeKind};

// Walks a small onboarding flow through an edit session: checkpoint before
// each change, then undo and redo a step. RUST_LOG=debug shows the history
// manager's per-operation trace.
fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut history = HistoryManager::with_options(HistoryOptions {
        max_history_size: 50,
        save_description: true,
    });
    let mut graph = FlowGraph::default();

    history.save_state(&graph, Some("add entry"));
    let entry = graph.add_node(FlowNode::new(NodeKind::Entry, (40.0, 120.0)));

    history.save_state(&graph, Some("add greeting step"));
    let greet = graph.add_node(FlowNode::new(
        NodeKind::Step {
            step_id: "greet".to_string(),
            auto_flow: false,
        },
        (240.0, 120.0),
    ));
    graph.connect(entry, "out", greet, "in");

    history.save_state(&graph, Some("add lookup tool"));
    let lookup = graph.add_node(FlowNode::new(
        NodeKind::ToolCall {
            name: "lookup_account".to_string(),
        },
        (440.0, 120.0),
    ));
    graph.connect(greet, "out", lookup, "in");

    println!(
        "[{}] edited: {} nodes, {} edges, history {}",
        Local::now().format("%H:%M:%S"),
        graph.node_count(),
        graph.edge_count(),
        history.history_len()
    );

    if let Some(restored) = history.undo(&graph) {
        // An editor's change handler would fire here; its save is dropped
        // because the replay window is still open.
        history.save_state(&restored.graph, Some("auto save on change"));
        graph = restored.into_graph();
    }
    println!(
        "after undo: {} nodes, can_redo = {}",
        graph.node_count(),
        history.can_redo()
    );

    if let Some(restored) = history.redo(&graph) {
        graph = restored.into_graph();
    }
    println!(
        "after redo: {} nodes, history {}",
        graph.node_count(),
        history.history_len()
    );

    let json = graph.to_json()?;
    log::info!("flow document:\n{}", json);
    Ok(())
}
