//! Event log
//!
//! Scenes and screens never print. Each user interaction appends a
//! [`SimEvent`] to its owner's [`EventLog`], and whoever drives the model
//! (a view, the demo binary) drains the log once per frame. Sequence
//! numbers keep counting across drains.

use std::fmt;

/// What an event is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    VectorCreated,
    VectorActivated,
    /// Released off the graph, or removed; heading to the toolbox
    VectorReturning,
    /// Arrived in the toolbox
    VectorReturned,
    /// Equation type, coefficient or base vector control
    EquationChanged,
    SelectionChanged,
    Erased,
    Reset,
    Interrupted,
    OriginMoved,
    /// Shared view toggle or component style
    ToggleChanged,
    SceneSelected,
}

impl EventKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::VectorCreated => "created",
            Self::VectorActivated => "activated",
            Self::VectorReturning => "returning",
            Self::VectorReturned => "returned",
            Self::EquationChanged => "equation",
            Self::SelectionChanged => "selection",
            Self::Erased => "erased",
            Self::Reset => "reset",
            Self::Interrupted => "interrupted",
            Self::OriginMoved => "origin",
            Self::ToggleChanged => "toggle",
            Self::SceneSelected => "scene",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SimEvent {
    /// Position in the owner's history, starting at 0
    pub seq: u64,
    pub kind: EventKind,
    pub message: String,
}

impl fmt::Display for SimEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:<3} {:<11} {}", self.seq, self.kind, self.message)
    }
}

/// Events not yet drained, oldest first
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    pending: Vec<SimEvent>,
    next_seq: u64,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, kind: EventKind, message: impl Into<String>) {
        self.pending.push(SimEvent {
            seq: self.next_seq,
            kind,
            message: message.into(),
        });
        self.next_seq += 1;
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SimEvent> {
        self.pending.iter()
    }

    /// Pending events of one kind
    pub fn count(&self, kind: EventKind) -> usize {
        self.pending.iter().filter(|e| e.kind == kind).count()
    }

    pub fn has_kind(&self, kind: EventKind) -> bool {
        self.pending.iter().any(|e| e.kind == kind)
    }

    /// Hand over the pending events; the sequence keeps counting
    pub fn drain(&mut self) -> Vec<SimEvent> {
        std::mem::take(&mut self.pending)
    }
}
