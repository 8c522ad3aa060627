//! Bidirectional cursors over effective timelines.
//!
//! A [`Cursor`] walks the *effective* timeline of a node: the ancestors'
//! segments up to each fork point, then the node's own segment, as one
//! strictly increasing sequence. Internally it keeps the chain of nodes
//! from the currently active ancestor down to the iterated node; only the
//! front of the chain is active, advancing across a fork point descends
//! the chain and retreating off a segment's first sample ascends it.
//!
//! The end cursor is normalized (chain reduced to the iterated node, no
//! position) so that the end of a node is unique, and ends of distinct
//! nodes are distinct.

use std::collections::VecDeque;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::ramure_errors::RamureError;
use crate::timeline::Position;

use super::{upgrade, NodeRc, NodeWeak};

/// A bidirectional cursor over the effective timeline of one node.
///
/// Obtained from `begin`/`end`/`find`/`lower_bound` on a
/// [`Trajectory`](super::Trajectory) or [`Branch`](super::Branch), or from
/// [`Branch::fork`](super::Branch::fork). Appends anywhere in the tree
/// leave cursors valid; deleting the node a cursor walks (or the ancestor
/// segment it currently sits in) makes further use panic.
pub struct Cursor<T, P> {
    target: NodeWeak<T, P>,
    /// Chain of nodes from the active ancestor (front) down to `target`
    /// (back); consecutive entries are parent and child.
    ancestry: VecDeque<NodeWeak<T, P>>,
    /// Position in the front node's own timeline; `None` is the end.
    position: Option<Position>,
}

impl<T: Copy + Ord, P> Cursor<T, P> {
    /// Cursor on the first effective sample of `target`.
    pub(crate) fn begin_of(target: &NodeRc<T, P>) -> Self {
        let mut ancestry = VecDeque::new();
        let mut current = target.clone();
        loop {
            ancestry.push_front(Rc::downgrade(&current));
            let parent = current
                .borrow()
                .parent
                .as_ref()
                .map(|link| link.node.clone());
            match parent {
                Some(weak) => current = upgrade(&weak),
                None => break,
            }
        }
        // `current` is now the root; its segment opens the effective
        // timeline. An empty root means an empty effective timeline.
        let position = current.borrow().timeline.begin();
        match position {
            Some(position) => Cursor {
                target: Rc::downgrade(target),
                ancestry,
                position: Some(position),
            },
            None => Self::end_of(target),
        }
    }

    /// The normalized end cursor of `target`.
    pub(crate) fn end_of(target: &NodeRc<T, P>) -> Self {
        let mut ancestry = VecDeque::new();
        ancestry.push_back(Rc::downgrade(target));
        Cursor {
            target: Rc::downgrade(target),
            ancestry,
            position: None,
        }
    }

    /// Cursor of `target` sitting on its fork-point sample in `parent`.
    pub(crate) fn at_fork_point(
        parent: &NodeRc<T, P>,
        position: Position,
        target: &NodeRc<T, P>,
    ) -> Self {
        let mut ancestry = VecDeque::new();
        ancestry.push_back(Rc::downgrade(parent));
        ancestry.push_back(Rc::downgrade(target));
        Cursor {
            target: Rc::downgrade(target),
            ancestry,
            position: Some(position),
        }
    }

    /// The active node and position, or `None` for an end cursor.
    pub(crate) fn active_segment(&self) -> Option<(NodeRc<T, P>, Position)> {
        let position = self.position?;
        Some((self.active(), position))
    }

    fn active(&self) -> NodeRc<T, P> {
        upgrade(self.ancestry.front().unwrap_or(&self.target))
    }

    /// True on the end cursor.
    #[inline]
    pub fn is_end(&self) -> bool {
        self.position.is_none()
    }

    /// Time of the designated sample, or `None` on the end cursor.
    pub fn time(&self) -> Option<T> {
        let (active, position) = self.active_segment()?;
        let result = match active.borrow().timeline.time(position) {
            Some(time) => Some(time),
            None => panic!("the cursor position has been invalidated"),
        };
        result
    }

    /// Clone of the designated sample's value, or `None` on the end cursor.
    pub fn value(&self) -> Option<P>
    where
        P: Clone,
    {
        self.with_value(P::clone)
    }

    /// Apply `f` to the designated sample's value without cloning it.
    pub fn with_value<R>(&self, f: impl FnOnce(&P) -> R) -> Option<R> {
        let (active, position) = self.active_segment()?;
        let node = active.borrow();
        match node.timeline.value(position) {
            Some(value) => Some(f(value)),
            None => panic!("the cursor position has been invalidated"),
        }
    }

    /// Move to the next effective sample.
    ///
    /// Return
    /// ------
    /// * `Ok(())`, or [`RamureError::PastEnd`] on the end cursor.
    pub fn advance(&mut self) -> Result<(), RamureError> {
        let Some(position) = self.position else {
            return Err(RamureError::PastEnd);
        };
        if self.ancestry.len() > 1 {
            // The active segment is an ancestor's; it is cut (inclusive) at
            // the next chain node's fork position.
            let next = upgrade(&self.ancestry[1]);
            let cut = match next.borrow().parent.as_ref() {
                Some(link) => link.position,
                None => panic!("a chained ancestor lost its parent link"),
            };
            if position == cut {
                self.ancestry.pop_front();
                let front = self.active();
                let head = front.borrow().timeline.begin();
                match head {
                    Some(head) => self.position = Some(head),
                    None => {
                        // Only the iterated node itself may have an empty
                        // segment: any mid-chain node owns its successor's
                        // fork sample.
                        debug_assert_eq!(self.ancestry.len(), 1);
                        self.position = None;
                    }
                }
                return Ok(());
            }
        }
        let active = self.active();
        let next_position = active.borrow().timeline.next(position);
        match next_position {
            Some(next_position) => self.position = Some(next_position),
            None if self.ancestry.len() == 1 => self.position = None,
            None => panic!("the cursor position has been invalidated"),
        }
        Ok(())
    }

    /// Move to the previous effective sample.
    ///
    /// Return
    /// ------
    /// * `Ok(())`, or [`RamureError::BeforeBegin`] on the first sample (or
    ///   on the end cursor of an empty root).
    pub fn retreat(&mut self) -> Result<(), RamureError> {
        match self.position {
            None => {
                let target = upgrade(&self.target);
                let last = target.borrow().timeline.last();
                match last {
                    Some(last) => {
                        self.position = Some(last);
                        Ok(())
                    }
                    // Empty own segment: the previous sample is the fork
                    // point in the parent.
                    None => self.ascend(),
                }
            }
            Some(position) => {
                let active = self.active();
                let (head, prev) = {
                    let node = active.borrow();
                    (node.timeline.begin(), node.timeline.prev(position))
                };
                if head == Some(position) {
                    self.ascend()
                } else {
                    match prev {
                        Some(prev) => {
                            self.position = Some(prev);
                            Ok(())
                        }
                        None => panic!("the cursor position has been invalidated"),
                    }
                }
            }
        }
    }

    fn ascend(&mut self) -> Result<(), RamureError> {
        let front = self.active();
        let link = {
            let node = front.borrow();
            match node.parent.as_ref() {
                Some(link) => Some((link.node.clone(), link.position)),
                None => None,
            }
        };
        match link {
            Some((parent, position)) => {
                self.ancestry.push_front(parent);
                self.position = Some(position);
                Ok(())
            }
            None => Err(RamureError::BeforeBegin),
        }
    }
}

impl<T, P> Clone for Cursor<T, P> {
    fn clone(&self) -> Self {
        Cursor {
            target: self.target.clone(),
            ancestry: self.ancestry.clone(),
            position: self.position,
        }
    }
}

impl<T, P> PartialEq for Cursor<T, P> {
    /// Same iterated node and same timeline position. The ends of distinct
    /// nodes are distinct.
    fn eq(&self, other: &Self) -> bool {
        if !Weak::ptr_eq(&self.target, &other.target) {
            return false;
        }
        match (self.position, other.position) {
            (None, None) => true,
            (Some(left), Some(right)) => {
                left == right
                    && match (self.ancestry.front(), other.ancestry.front()) {
                        (Some(a), Some(b)) => Weak::ptr_eq(a, b),
                        _ => false,
                    }
            }
            _ => false,
        }
    }
}

impl<T, P> Eq for Cursor<T, P> {}

impl<T, P> fmt::Debug for Cursor<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("target", &self.target.as_ptr())
            .field("depth", &self.ancestry.len())
            .field("position", &self.position)
            .finish()
    }
}

/// Forward iterator over an effective timeline, yielding `(time, value)`
/// pairs.
pub struct Samples<T, P> {
    cursor: Cursor<T, P>,
}

impl<T: Copy + Ord, P> Samples<T, P> {
    pub(crate) fn new(cursor: Cursor<T, P>) -> Self {
        Samples { cursor }
    }
}

impl<T: Copy + Ord, P: Clone> Iterator for Samples<T, P> {
    type Item = (T, P);

    fn next(&mut self) -> Option<(T, P)> {
        let time = self.cursor.time()?;
        let value = self.cursor.value()?;
        let _ = self.cursor.advance();
        Some((time, value))
    }
}
