use std::cmp::Ordering;

use generational_arena::{Arena, Index};
use tracing::instrument;

/// One roster mutation parsed from an operations file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterOp {
    Add(String),
    Remove(String),
}

/// Entry of the roster list. Neighbour links are arena indices.
#[derive(Debug)]
pub struct NameNode {
    pub name: String,
    pub prev: Option<Index>,
    pub next: Option<Index>,
}

/// Doubly linked list of names kept in ascending alphabetical order.
///
/// Nodes live in a generational arena; `head` and `tail` bound the list so
/// it can be walked in either direction. Removing the only entry resets
/// both bounds, leaving a valid empty roster.
#[derive(Debug, Default)]
pub struct Roster {
    arena: Arena<NameNode>,
    head: Option<Index>,
    tail: Option<Index>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `name` at its alphabetical slot.
    ///
    /// Returns `true` if the name was new; a duplicate returns `false` and
    /// leaves the roster untouched.
    #[instrument(level = "trace", skip(self))]
    pub fn add(&mut self, name: &str) -> bool {
        // Find the first entry that sorts at or after the new name.
        let mut cursor = self.head;
        while let Some(idx) = cursor {
            match self.arena.get(idx) {
                Some(node) => match name.cmp(node.name.as_str()) {
                    Ordering::Equal => return false,
                    Ordering::Less => break,
                    Ordering::Greater => cursor = node.next,
                },
                None => return false,
            }
        }

        match cursor {
            // Ran off the tail: append. Also covers the empty roster.
            None => {
                let prev = self.tail;
                let idx = self.arena.insert(NameNode {
                    name: name.to_string(),
                    prev,
                    next: None,
                });
                match prev {
                    Some(tail_idx) => {
                        if let Some(node) = self.arena.get_mut(tail_idx) {
                            node.next = Some(idx);
                        }
                    }
                    None => self.head = Some(idx),
                }
                self.tail = Some(idx);
            }
            // Splice in just before the entry the scan stopped at.
            Some(next_idx) => {
                let prev = self.arena.get(next_idx).and_then(|node| node.prev);
                let idx = self.arena.insert(NameNode {
                    name: name.to_string(),
                    prev,
                    next: Some(next_idx),
                });
                if let Some(node) = self.arena.get_mut(next_idx) {
                    node.prev = Some(idx);
                }
                match prev {
                    Some(prev_idx) => {
                        if let Some(node) = self.arena.get_mut(prev_idx) {
                            node.next = Some(idx);
                        }
                    }
                    None => self.head = Some(idx),
                }
            }
        }
        true
    }

    /// Remove `name` if present, returning whether anything was removed.
    #[instrument(level = "trace", skip(self))]
    pub fn remove(&mut self, name: &str) -> bool {
        let mut cursor = self.head;
        while let Some(idx) = cursor {
            match self.arena.get(idx) {
                Some(node) => match name.cmp(node.name.as_str()) {
                    Ordering::Equal => {
                        self.unlink(idx);
                        return true;
                    }
                    // The list is sorted, so walking past the slot means absent.
                    Ordering::Less => return false,
                    Ordering::Greater => cursor = node.next,
                },
                None => return false,
            }
        }
        false
    }

    fn unlink(&mut self, idx: Index) {
        let (prev, next) = match self.arena.get(idx) {
            Some(node) => (node.prev, node.next),
            None => return,
        };
        match prev {
            Some(prev_idx) => {
                if let Some(node) = self.arena.get_mut(prev_idx) {
                    node.next = next;
                }
            }
            None => self.head = next,
        }
        match next {
            Some(next_idx) => {
                if let Some(node) = self.arena.get_mut(next_idx) {
                    node.prev = prev;
                }
            }
            None => self.tail = prev,
        }
        self.arena.remove(idx);
    }

    /// Apply a parsed operation, returning whether it changed the roster.
    pub fn apply(&mut self, op: &RosterOp) -> bool {
        match op {
            RosterOp::Add(name) => self.add(name),
            RosterOp::Remove(name) => self.remove(name),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.iter_forward().any(|entry| entry == name)
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Names head to tail, i.e. in ascending alphabetical order.
    pub fn iter_forward(&self) -> ForwardIter {
        ForwardIter {
            roster: self,
            cursor: self.head,
        }
    }

    /// Names tail to head, i.e. in descending alphabetical order.
    pub fn iter_backward(&self) -> BackwardIter {
        BackwardIter {
            roster: self,
            cursor: self.tail,
        }
    }

    #[instrument(level = "debug", skip(self))]
    pub fn clear(&mut self) {
        self.arena.clear();
        self.head = None;
        self.tail = None;
    }
}

/// Walks `next` links starting at the head.
pub struct ForwardIter<'a> {
    roster: &'a Roster,
    cursor: Option<Index>,
}

impl<'a> Iterator for ForwardIter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.cursor?;
        let node = self.roster.arena.get(idx)?;
        self.cursor = node.next;
        Some(node.name.as_str())
    }
}

/// Walks `prev` links starting at the tail.
pub struct BackwardIter<'a> {
    roster: &'a Roster,
    cursor: Option<Index>,
}

impl<'a> Iterator for BackwardIter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.cursor?;
        let node = self.roster.arena.get(idx)?;
        self.cursor = node.prev;
        Some(node.name.as_str())
    }
}
