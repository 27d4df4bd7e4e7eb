//! Undo/redo history for point edits.
//!
//! Every user-visible mutation is captured as one [`EditRecord`]: the kind of
//! edit plus the old and new coordinates of each point it touched. Undoing a
//! record writes the old coordinates back, redoing it writes the new ones, so
//! no operation needs a bespoke replay routine.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tracing::{debug, warn};

use vectorkit_core::{PointId, DEFAULT_HISTORY_DEPTH};

use crate::model::PointArena;

/// Types of edits that can be recorded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EditKind {
    Move,
    Scale,
    Rotate,
    Flip,
}

impl std::fmt::Display for EditKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            EditKind::Move => "Move",
            EditKind::Scale => "Scale",
            EditKind::Rotate => "Rotate",
            EditKind::Flip => "Flip",
        };
        write!(f, "{}", name)
    }
}

/// Coordinates of one point before and after an edit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointEdit {
    pub point: PointId,
    pub old: (f64, f64),
    pub new: (f64, f64),
}

/// One reversible edit over a batch of points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditRecord {
    pub kind: EditKind,
    pub description: String,
    pub edits: Vec<PointEdit>,
}

impl EditRecord {
    pub fn new(kind: EditKind, description: impl Into<String>) -> Self {
        Self {
            kind,
            description: description.into(),
            edits: Vec::new(),
        }
    }

    pub fn push(&mut self, point: PointId, old: (f64, f64), new: (f64, f64)) {
        self.edits.push(PointEdit { point, old, new });
    }

    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    /// Writes the new coordinates of every edit.
    pub fn apply(&self, points: &mut PointArena) {
        for edit in &self.edits {
            if !points.set(edit.point, edit.new.0, edit.new.1) {
                warn!("{}: point {} no longer exists", self.description, edit.point);
            }
        }
    }

    /// Writes the old coordinates back, last edit first.
    pub fn apply_inverse(&self, points: &mut PointArena) {
        for edit in self.edits.iter().rev() {
            if !points.set(edit.point, edit.old.0, edit.old.1) {
                warn!("{}: point {} no longer exists", self.description, edit.point);
            }
        }
    }
}

/// Sink for edit records, invoked once per user-visible mutation.
pub trait History {
    fn snapshot(&mut self, record: EditRecord);
}

/// History that discards every record.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullHistory;

impl History for NullHistory {
    fn snapshot(&mut self, _record: EditRecord) {}
}

/// A group of records undone and redone as one step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryTransaction {
    pub description: String,
    pub records: Vec<EditRecord>,
}

impl HistoryTransaction {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            records: Vec::new(),
        }
    }

    fn undo(&self, points: &mut PointArena) {
        for record in self.records.iter().rev() {
            record.apply_inverse(points);
        }
    }

    fn redo(&self, points: &mut PointArena) {
        for record in &self.records {
            record.apply(points);
        }
    }
}

/// Bounded undo/redo stacks of transactions.
#[derive(Debug, Clone)]
pub struct UndoRedoManager {
    undo_stack: VecDeque<HistoryTransaction>,
    redo_stack: Vec<HistoryTransaction>,
    max_depth: usize,
    current_batch: Option<HistoryTransaction>,
}

impl UndoRedoManager {
    /// Create a manager keeping at most `max_depth` undo steps
    pub fn new(max_depth: usize) -> Self {
        Self {
            undo_stack: VecDeque::with_capacity(max_depth.min(DEFAULT_HISTORY_DEPTH)),
            redo_stack: Vec::new(),
            max_depth: max_depth.max(1),
            current_batch: None,
        }
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Changes the depth limit, dropping the oldest steps if needed
    pub fn set_max_depth(&mut self, max_depth: usize) {
        self.max_depth = max_depth.max(1);
        while self.undo_stack.len() > self.max_depth {
            self.undo_stack.pop_front();
        }
    }

    fn push_undo(&mut self, transaction: HistoryTransaction) {
        self.redo_stack.clear();
        self.undo_stack.push_back(transaction);
        if self.undo_stack.len() > self.max_depth {
            self.undo_stack.pop_front();
        }
    }

    /// Start collecting records into a single undo step
    pub fn begin_batch(&mut self, description: impl Into<String>) {
        if self.current_batch.is_some() {
            warn!("begin_batch called while a batch is open; merging");
            return;
        }
        self.current_batch = Some(HistoryTransaction::new(description));
    }

    /// Commit the open batch. Empty batches are dropped.
    pub fn end_batch(&mut self) {
        if let Some(batch) = self.current_batch.take() {
            if !batch.records.is_empty() {
                debug!(
                    "Committed '{}' with {} records",
                    batch.description,
                    batch.records.len()
                );
                self.push_undo(batch);
            }
        }
    }

    pub fn is_batching(&self) -> bool {
        self.current_batch.is_some()
    }

    /// Undo the last step, returning its description
    pub fn undo(&mut self, points: &mut PointArena) -> Option<String> {
        let transaction = self.undo_stack.pop_back()?;
        transaction.undo(points);
        let description = transaction.description.clone();
        self.redo_stack.push(transaction);
        debug!("Undo: {}", description);
        Some(description)
    }

    /// Redo the last undone step, returning its description
    pub fn redo(&mut self, points: &mut PointArena) -> Option<String> {
        let transaction = self.redo_stack.pop()?;
        transaction.redo(points);
        let description = transaction.description.clone();
        self.undo_stack.push_back(transaction);
        debug!("Redo: {}", description);
        Some(description)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    /// Description of the step `undo` would revert
    pub fn undo_description(&self) -> Option<&str> {
        self.undo_stack.back().map(|t| t.description.as_str())
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.current_batch = None;
    }
}

impl Default for UndoRedoManager {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_DEPTH)
    }
}

impl History for UndoRedoManager {
    fn snapshot(&mut self, record: EditRecord) {
        if record.is_empty() {
            return;
        }
        match &mut self.current_batch {
            Some(batch) => batch.records.push(record),
            None => {
                let mut transaction = HistoryTransaction::new(record.description.clone());
                transaction.records.push(record);
                self.push_undo(transaction);
            }
        }
    }
}
