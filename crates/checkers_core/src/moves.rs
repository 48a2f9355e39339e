use std::fmt;
use std::sync::Arc;

use crate::types::{Piece, Square};

/// One hop of a turn.
///
/// A turn is stored back to front: every hop points at the hop before it, so
/// extending a capture chain is O(1) and sibling branches share their common
/// prefix. The first hop of a turn has no predecessor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub capture: bool,
    /// The piece as it stood when making this hop (a man promoted mid-chain
    /// makes its later hops as a king).
    pub piece: Piece,
    prev: Option<Arc<Move>>,
}

impl Move {
    pub fn new(from: Square, to: Square, capture: bool, piece: Piece) -> Self {
        Self {
            from,
            to,
            capture,
            piece,
            prev: None,
        }
    }

    /// Links this hop after `prev` in the same turn.
    #[must_use]
    pub fn after(mut self, prev: Arc<Move>) -> Self {
        self.prev = Some(prev);
        self
    }

    pub fn prev(&self) -> Option<&Move> {
        self.prev.as_deref()
    }

    /// Hops of the turn ending here, first hop first.
    pub fn hops(&self) -> Vec<&Move> {
        let mut out = Vec::new();
        let mut cur = Some(self);
        while let Some(hop) = cur {
            out.push(hop);
            cur = hop.prev();
        }
        out.reverse();
        out
    }

    pub fn origin(&self) -> Square {
        match self.hops().first() {
            Some(first) => first.from,
            None => self.from,
        }
    }

    /// Origin followed by every landing square.
    pub fn path(&self) -> Vec<Square> {
        let hops = self.hops();
        let mut out = Vec::with_capacity(hops.len() + 1);
        out.push(self.origin());
        out.extend(hops.iter().map(|hop| hop.to));
        out
    }

    pub fn hop_count(&self) -> usize {
        1 + self.prev().map_or(0, Move::hop_count)
    }

    /// Number of capture hops in the turn.
    pub fn captures(&self) -> usize {
        self.hops().iter().filter(|hop| hop.capture).count()
    }

    pub fn is_capture(&self) -> bool {
        self.capture
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = self.path();
        write!(f, "{{{}", path[0])?;
        for sq in &path[1..] {
            write!(f, " -> {sq}")?;
        }
        write!(f, "}}")
    }
}
