use crate::graph::FlowGraph;
use serde::{Deserialize, Serialize};
use std::cell::Cell;
use std::rc::Rc;

/// One point in the graph's history. The graph payload is a full deep copy,
/// so later mutation of the live graph never reaches a stored snapshot.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Snapshot {
    pub graph: FlowGraph,
    pub timestamp_ms: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Snapshot {
    fn capture(graph: &FlowGraph, description: Option<String>) -> Self {
        Self {
            graph: graph.clone(),
            timestamp_ms: chrono::Local::now().timestamp_millis(),
            description,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct HistoryOptions {
    /// Caps undo-stack depth; oldest snapshots are evicted first.
    pub max_history_size: usize,
    /// When false, descriptions passed to save_state are not stored.
    pub save_description: bool,
}

impl Default for HistoryOptions {
    fn default() -> Self {
        Self {
            max_history_size: 50,
            save_description: false,
        }
    }
}

/// Undo/redo history for one editor session.
///
/// The host decides when to checkpoint: it calls [`save_state`] just before
/// applying a mutating action, and applies whatever graph [`undo`]/[`redo`]
/// hand back. While the returned [`Restored`] value is alive, `save_state`
/// calls are ignored, so a change handler firing on the restored state does
/// not record the replay as a new action.
///
/// [`save_state`]: HistoryManager::save_state
/// [`undo`]: HistoryManager::undo
/// [`redo`]: HistoryManager::redo
pub struct HistoryManager {
    undo_stack: Vec<Snapshot>,
    redo_stack: Vec<Snapshot>,
    replay_depth: Rc<Cell<usize>>,
    options: HistoryOptions,
}

/// Keeps capture suppressed while the host applies a restored graph.
/// Dropping it lifts suppression, on unwind paths included.
pub struct ReplayGuard {
    depth: Rc<Cell<usize>>,
}

impl Drop for ReplayGuard {
    fn drop(&mut self) {
        self.depth.set(self.depth.get().saturating_sub(1));
    }
}

/// A graph handed back by undo/redo, bundled with its replay window.
pub struct Restored {
    pub graph: FlowGraph,
    _guard: ReplayGuard,
}

impl Restored {
    /// Ends the replay window and yields the restored graph.
    pub fn into_graph(self) -> FlowGraph {
        self.graph
    }
}

impl Default for HistoryManager {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryManager {
    pub fn new() -> Self {
        Self::with_options(HistoryOptions::default())
    }

    pub fn with_options(options: HistoryOptions) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            replay_depth: Rc::new(Cell::new(0)),
            options,
        }
    }

    /// Checkpoints the current graph onto the undo stack and discards any
    /// redo history. Ignored while a [`Restored`] from undo/redo is alive.
    pub fn save_state(&mut self, graph: &FlowGraph, description: Option<&str>) {
        if self.replay_depth.get() > 0 {
            log::debug!("skipping state save (applying history)");
            return;
        }
        let description = if self.options.save_description {
            description.map(str::to_owned)
        } else {
            None
        };
        self.undo_stack.push(Snapshot::capture(graph, description));
        while self.undo_stack.len() > self.options.max_history_size {
            self.undo_stack.remove(0);
        }
        self.redo_stack.clear();
        log::debug!(
            "saved state: {} nodes, {} edges, undo depth {}",
            graph.node_count(),
            graph.edge_count(),
            self.undo_stack.len()
        );
    }

    /// Steps back one checkpoint. `current` is captured onto the redo stack
    /// before the previous state is handed back. Returns `None` when there is
    /// nothing to undo; the host leaves the graph untouched in that case.
    pub fn undo(&mut self, current: &FlowGraph) -> Option<Restored> {
        let Some(target) = self.undo_stack.pop() else {
            log::debug!("undo: stack is empty");
            return None;
        };
        self.redo_stack.push(Snapshot::capture(current, None));
        log::debug!(
            "undo: {} states left, {} redoable",
            self.undo_stack.len(),
            self.redo_stack.len()
        );
        Some(self.begin_replay(target))
    }

    /// Mirror of [`undo`](Self::undo): steps forward along the previously
    /// undone path. Any new save invalidates this path.
    pub fn redo(&mut self, current: &FlowGraph) -> Option<Restored> {
        let Some(target) = self.redo_stack.pop() else {
            log::debug!("redo: stack is empty");
            return None;
        };
        self.undo_stack.push(Snapshot::capture(current, None));
        log::debug!(
            "redo: {} states left, {} undoable",
            self.redo_stack.len(),
            self.undo_stack.len()
        );
        Some(self.begin_replay(target))
    }

    fn begin_replay(&self, target: Snapshot) -> Restored {
        self.replay_depth.set(self.replay_depth.get() + 1);
        Restored {
            graph: target.graph,
            _guard: ReplayGuard {
                depth: Rc::clone(&self.replay_depth),
            },
        }
    }

    /// Empties both stacks, e.g. when the host loads a new document.
    pub fn clear_history(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    /// Total entries across both stacks, for diagnostics and UI.
    pub fn history_len(&self) -> usize {
        self.undo_stack.len() + self.redo_stack.len()
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }
}
