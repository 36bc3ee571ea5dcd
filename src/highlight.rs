//! Tile highlighting as seen from the rules side.
//!
//! The game loop publishes [`HighlightEvent`]s on a [`HighlightChannel`] it was given at
//! construction. Whoever draws the board subscribes a [`HighlightSink`] and removes it
//! again on teardown. [`HighlightGrid`] is a ready-made sink that just remembers the
//! current highlight of every cell.

use std::cell::RefCell;
use std::rc::Rc;

use crate::game_repr::{Cell, BOARD_SIZE};

const SIZE: usize = BOARD_SIZE as usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HighlightKind {
    /// The piece the player picked up.
    Selected,
    /// A quiet destination.
    Move,
    /// A destination holding an opponent.
    Capture,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighlightEvent {
    Highlight(Cell, HighlightKind),
    Unhighlight(Cell),
}

/// Receiver of highlight events.
pub trait HighlightSink {
    fn highlight(&mut self, cell: Cell, kind: HighlightKind);

    fn unhighlight(&mut self, cell: Cell);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Explicit publish/subscribe channel for highlight events.
///
/// Single threaded: sinks are shared as `Rc<RefCell<_>>` and borrowed mutably for the
/// duration of each delivery, so a sink must not publish from inside its handler.
#[derive(Default)]
pub struct HighlightChannel {
    subscribers: Vec<(SubscriptionId, Rc<RefCell<dyn HighlightSink>>)>,
    next_id: u64,
}

impl HighlightChannel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, sink: Rc<RefCell<dyn HighlightSink>>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, sink));
        id
    }

    /// Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub, _)| *sub != id);
        self.subscribers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    pub fn publish(&self, event: HighlightEvent) {
        log::trace!("Publishing {:?} to {} subscriber(s)", event, self.subscribers.len());
        for (_, sink) in &self.subscribers {
            let mut sink = sink.borrow_mut();
            match event {
                HighlightEvent::Highlight(cell, kind) => sink.highlight(cell, kind),
                HighlightEvent::Unhighlight(cell) => sink.unhighlight(cell),
            }
        }
    }

    pub fn highlight(&self, cell: Cell, kind: HighlightKind) {
        self.publish(HighlightEvent::Highlight(cell, kind));
    }

    pub fn unhighlight(&self, cell: Cell) {
        self.publish(HighlightEvent::Unhighlight(cell));
    }
}

impl std::fmt::Debug for HighlightChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HighlightChannel")
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

/// Current highlight of each cell, indexed `[row][col]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighlightGrid {
    cells: [[Option<HighlightKind>; SIZE]; SIZE],
}

impl HighlightGrid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, cell: Cell) -> Option<HighlightKind> {
        if !cell.is_inside_board() {
            return None;
        }
        self.cells[cell.row as usize][cell.col as usize]
    }

    /// Every highlighted cell with its kind, row by row from the bottom.
    pub fn highlighted(&self) -> Vec<(Cell, HighlightKind)> {
        Cell::all()
            .filter_map(|cell| self.get(cell).map(|kind| (cell, kind)))
            .collect()
    }

    pub fn clear(&mut self) {
        self.cells = [[None; SIZE]; SIZE];
    }

    fn slot_mut(&mut self, cell: Cell) -> Option<&mut Option<HighlightKind>> {
        if !cell.is_inside_board() {
            log::warn!("Ignoring highlight change on {}: outside the board", cell);
            return None;
        }
        Some(&mut self.cells[cell.row as usize][cell.col as usize])
    }
}

impl HighlightSink for HighlightGrid {
    fn highlight(&mut self, cell: Cell, kind: HighlightKind) {
        if let Some(slot) = self.slot_mut(cell) {
            *slot = Some(kind);
        }
    }

    fn unhighlight(&mut self, cell: Cell) {
        if let Some(slot) = self.slot_mut(cell) {
            *slot = None;
        }
    }
}
