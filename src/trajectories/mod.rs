//! # Branching trajectory timelines
//!
//! A trajectory is a time-ordered sequence of samples; a **fork** is a
//! trajectory that shares a past with its parent up to a chosen sample and
//! then diverges. This module stores whole families of such trajectories as
//! a tree: every node owns a local [`Timeline`] segment and the forks
//! branching off it, and the *effective* timeline of a node is the
//! concatenation of its ancestors' segments up to each fork point with its
//! own segment. The integrator appends to the tip of whichever branch is
//! active; planning code forks, compares and discards branches freely.
//!
//! Data Model
//! -----------------
//! * [`Trajectory`] – an **owned root**: the whole tree, or a subtree
//!   detached from its parent. Dropping it drops every descendant fork.
//! * [`Branch`] – a cheap, cloneable, non-owning handle to any node of a
//!   tree. Children are reached and mutated through `Branch` handles; their
//!   lifetime is bounded by the owning root.
//! * [`Cursor`] – a bidirectional cursor over the effective timeline of a
//!   node, crossing fork boundaries transparently.
//!
//! Every fork records its branch point as a reference-stable
//! [`Position`] into its parent's own segment, together with the fork
//! time. Appends anywhere in the tree never invalidate fork positions or
//! outstanding cursors; only deleting a subtree invalidates handles into
//! it, and using such a handle afterwards panics.
//!
//! Ownership
//! -----------------
//! Parent→child edges are strong (`Rc`), child→parent back-references are
//! weak, so a subtree dies exactly when its owner releases it. The tree is
//! deliberately not `Send`: mutations on one tree must be externally
//! serialized by the caller, which is the regime the integrator operates
//! under anyway.
//!
//! Quick-Start
//! -----------------
//! ```rust
//! use hifitime::{Duration, Epoch};
//! use ramure::trajectories::Trajectory;
//!
//! # fn run() -> Result<(), ramure::ramure_errors::RamureError> {
//! let t0 = Epoch::from_mjd_utc(59215.0);
//! let s = |n: f64| t0 + Duration::from_seconds(n);
//!
//! let root: Trajectory<Epoch, f64> = Trajectory::new();
//! root.push_back(s(7.0), 1.0)?;
//! root.push_back(s(17.0), 2.0)?;
//! root.push_back(s(27.0), 3.0)?;
//!
//! // Branch an alternative future off the sample at 17 s.
//! let fork = root.new_fork(&root.find(s(17.0)))?;
//! fork.push_back(s(37.0), 4.0)?;
//!
//! let times: Vec<Epoch> = fork.iter().map(|(t, _)| t).collect();
//! assert_eq!(times, vec![s(7.0), s(17.0), s(37.0)]);
//! # Ok(()) }
//! # run().unwrap();
//! ```
//!
//! See also
//! ------------
//! * [`crate::timeline::Timeline`] – The reference-stable sample storage.
//! * [`cursor::Cursor`] – Walking effective timelines in both directions.

pub mod cursor;

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::{Rc, Weak};

use smallvec::SmallVec;

use crate::ramure_errors::RamureError;
use crate::timeline::{Position, Timeline};

pub use cursor::{Cursor, Samples};

pub(crate) type NodeRc<T, P> = Rc<RefCell<Node<T, P>>>;
pub(crate) type NodeWeak<T, P> = Weak<RefCell<Node<T, P>>>;

/// Back-reference of a fork to its parent.
///
/// `position` designates the parent sample this fork branches at; it stays
/// valid across parent appends because timeline positions are
/// reference-stable. `fork_time` caches that sample's time, which keys the
/// parent's children map.
pub(crate) struct ParentLink<T, P> {
    pub(crate) node: NodeWeak<T, P>,
    pub(crate) position: Position,
    pub(crate) fork_time: T,
}

impl<T: Copy, P> ParentLink<T, P> {
    fn duplicate(&self) -> Self {
        ParentLink {
            node: self.node.clone(),
            position: self.position,
            fork_time: self.fork_time,
        }
    }
}

/// A vertex of the fork tree: one timeline segment, an optional parent
/// link, and the owned forks keyed by their fork time. Several forks may
/// branch at the same time.
pub(crate) struct Node<T, P> {
    pub(crate) timeline: Timeline<T, P>,
    pub(crate) parent: Option<ParentLink<T, P>>,
    children: BTreeMap<T, SmallVec<[NodeRc<T, P>; 2]>>,
}

impl<T: Copy + Ord, P> Node<T, P> {
    fn new_root() -> Self {
        Node {
            timeline: Timeline::new(),
            parent: None,
            children: BTreeMap::new(),
        }
    }

    /// Time of the latest sample seen from this node: its own last sample,
    /// or the fork time when the local segment is still empty.
    fn effective_last_time(&self) -> Option<T> {
        self.timeline
            .last_time()
            .or_else(|| self.parent.as_ref().map(|link| link.fork_time))
    }
}

pub(crate) fn upgrade<T, P>(weak: &NodeWeak<T, P>) -> NodeRc<T, P> {
    match weak.upgrade() {
        Some(rc) => rc,
        None => panic!("the handle refers to a deleted trajectory"),
    }
}

fn root_of<T, P>(node: &NodeRc<T, P>) -> NodeRc<T, P> {
    let mut current = node.clone();
    loop {
        let parent = current
            .borrow()
            .parent
            .as_ref()
            .map(|link| link.node.clone());
        match parent {
            Some(weak) => current = upgrade(&weak),
            None => return current,
        }
    }
}

fn push_back_impl<T: Copy + Ord, P>(
    node: &NodeRc<T, P>,
    time: T,
    value: P,
) -> Result<Position, RamureError> {
    let mut node = node.borrow_mut();
    if let Some(last) = node.effective_last_time() {
        if time <= last {
            return Err(RamureError::OutOfOrder);
        }
    }
    node.timeline.push_back(time, value)
}

fn new_fork_impl<T: Copy + Ord, P>(
    node: &NodeRc<T, P>,
    at: &Cursor<T, P>,
) -> Result<Branch<T, P>, RamureError> {
    let Some((active, position)) = at.active_segment() else {
        // Forking on an end cursor: the root-specific anti-pattern gets its
        // own kind, everything else is an empty fork request.
        return Err(if node.borrow().parent.is_none() {
            RamureError::RootFork
        } else {
            RamureError::EmptyFork
        });
    };
    let fork_time = match active.borrow().timeline.time(position) {
        Some(time) => time,
        None => panic!("the fork cursor position has been invalidated"),
    };
    let child: NodeRc<T, P> = Rc::new(RefCell::new(Node {
        timeline: Timeline::new(),
        parent: Some(ParentLink {
            node: Rc::downgrade(&active),
            position,
            fork_time,
        }),
        children: BTreeMap::new(),
    }));
    let branch = Branch {
        node: Rc::downgrade(&child),
    };
    active
        .borrow_mut()
        .children
        .entry(fork_time)
        .or_default()
        .push(child);
    Ok(branch)
}

fn delete_fork_impl<T: Copy + Ord, P>(
    node: &NodeRc<T, P>,
    child: Branch<T, P>,
) -> Result<(), RamureError> {
    let Some(child_rc) = child.node.upgrade() else {
        return Err(RamureError::NotAChild);
    };
    let fork_time = {
        let child_node = child_rc.borrow();
        let Some(link) = child_node.parent.as_ref() else {
            return Err(RamureError::IsRoot);
        };
        if !Weak::ptr_eq(&link.node, &Rc::downgrade(node)) {
            return Err(RamureError::NotAChild);
        }
        link.fork_time
    };
    let mut parent = node.borrow_mut();
    let Some(siblings) = parent.children.get_mut(&fork_time) else {
        return Err(RamureError::NotAChild);
    };
    let Some(index) = siblings.iter().position(|rc| Rc::ptr_eq(rc, &child_rc)) else {
        return Err(RamureError::NotAChild);
    };
    let removed = siblings.remove(index);
    if siblings.is_empty() {
        parent.children.remove(&fork_time);
    }
    drop(parent);
    drop(child_rc);
    // Last strong reference: the subtree dies here.
    drop(removed);
    Ok(())
}

fn attach_impl<T: Copy + Ord, P>(
    node: &NodeRc<T, P>,
    child: Trajectory<T, P>,
) -> Result<Branch<T, P>, RamureError> {
    let child_rc = child.node;
    let fork_time = {
        let child_node = child_rc.borrow();
        if child_node.parent.is_some() {
            return Err(RamureError::NotRoot);
        }
        match child_node.timeline.first_time() {
            Some(time) => time,
            None => return Err(RamureError::EmptyTimeline),
        }
    };
    let at = find_cursor(node, fork_time);
    let Some((active, position)) = at.active_segment() else {
        return Err(RamureError::ForkSampleNotFound);
    };

    let link = ParentLink {
        node: Rc::downgrade(&active),
        position,
        fork_time,
    };
    // Forks branching at the copied begin move up onto the parent sample,
    // so that the conventional pop_front of the duplicate cannot strand
    // them.
    let reparented = {
        let mut child_node = child_rc.borrow_mut();
        child_node.parent = Some(link.duplicate());
        child_node.children.remove(&fork_time).unwrap_or_default()
    };
    for grandchild in &reparented {
        grandchild.borrow_mut().parent = Some(link.duplicate());
    }

    let branch = Branch {
        node: Rc::downgrade(&child_rc),
    };
    let mut parent = active.borrow_mut();
    let siblings = parent.children.entry(fork_time).or_default();
    siblings.extend(reparented);
    siblings.push(child_rc);
    Ok(branch)
}

fn detach_impl<T: Copy + Ord, P: Clone>(
    node: &NodeRc<T, P>,
) -> Result<Trajectory<T, P>, RamureError> {
    let (parent_rc, position, fork_time) = {
        let this = node.borrow();
        let Some(link) = this.parent.as_ref() else {
            return Err(RamureError::IsRoot);
        };
        (upgrade(&link.node), link.position, link.fork_time)
    };
    let fork_value = match parent_rc.borrow().timeline.value(position) {
        Some(value) => value.clone(),
        None => panic!("the fork-point sample no longer exists in the parent timeline"),
    };
    // Copy the fork-point sample onto the detached front first: on failure
    // nothing has been unlinked yet.
    node.borrow_mut().timeline.push_front(fork_time, fork_value)?;

    let owned = {
        let mut parent = parent_rc.borrow_mut();
        let siblings = parent
            .children
            .get_mut(&fork_time)
            .and_then(|siblings| {
                siblings
                    .iter()
                    .position(|rc| Rc::ptr_eq(rc, node))
                    .map(|index| siblings.remove(index))
            });
        let Some(owned) = siblings else {
            panic!("the fork is missing from its parent's children");
        };
        if parent
            .children
            .get(&fork_time)
            .is_some_and(|siblings| siblings.is_empty())
        {
            parent.children.remove(&fork_time);
        }
        owned
    };
    owned.borrow_mut().parent = None;
    Ok(Trajectory { node: owned })
}

fn delete_all_forks_after_impl<T: Copy + Ord, P>(
    node: &NodeRc<T, P>,
    time: T,
) -> Result<(), RamureError> {
    let pruned = {
        let mut this = node.borrow_mut();
        match this.parent.as_ref() {
            Some(link) => {
                if time < link.fork_time {
                    return Err(RamureError::BeforeForkTime);
                }
            }
            None => {
                if let Some(first) = this.timeline.first_time() {
                    if time < first {
                        return Err(RamureError::BeforeForkTime);
                    }
                }
            }
        }
        // Keep forks branching exactly at `time`; everything strictly after
        // goes, descendants included, through ownership.
        let mut pruned = this.children.split_off(&time);
        if let Some(at_time) = pruned.remove(&time) {
            this.children.insert(time, at_time);
        }
        pruned
    };
    drop(pruned);
    Ok(())
}

fn check_no_forks_before_impl<T: Copy + Ord, P>(
    node: &NodeRc<T, P>,
    time: T,
) -> Result<(), RamureError> {
    let this = node.borrow();
    if this.parent.is_some() {
        return Err(RamureError::NonRoot);
    }
    let count: usize = this
        .children
        .range(..time)
        .map(|(_, siblings)| siblings.len())
        .sum();
    if count > 0 {
        return Err(RamureError::ForkFound { count });
    }
    Ok(())
}

fn fork_cursor<T: Copy + Ord, P>(node: &NodeRc<T, P>) -> Result<Cursor<T, P>, RamureError> {
    let this = node.borrow();
    let Some(link) = this.parent.as_ref() else {
        return Err(RamureError::NotAFork);
    };
    Ok(Cursor::at_fork_point(
        &upgrade(&link.node),
        link.position,
        node,
    ))
}

fn find_cursor<T: Copy + Ord, P>(node: &NodeRc<T, P>, time: T) -> Cursor<T, P> {
    let mut cursor = Cursor::begin_of(node);
    loop {
        match cursor.time() {
            None => return cursor,
            Some(sample_time) => {
                if sample_time == time {
                    return cursor;
                }
                if sample_time > time {
                    return Cursor::end_of(node);
                }
            }
        }
        if cursor.advance().is_err() {
            return Cursor::end_of(node);
        }
    }
}

fn lower_bound_cursor<T: Copy + Ord, P>(node: &NodeRc<T, P>, time: T) -> Cursor<T, P> {
    let mut cursor = Cursor::begin_of(node);
    loop {
        match cursor.time() {
            None => return cursor,
            Some(sample_time) if sample_time >= time => return cursor,
            Some(_) => {}
        }
        if cursor.advance().is_err() {
            return Cursor::end_of(node);
        }
    }
}

/// An owned branching trajectory: a root and every fork below it.
///
/// Created empty by [`Trajectory::new`], or produced by
/// [`Branch::detach_fork_with_copied_begin`]. A `Trajectory` is always a
/// root; attaching it to another tree consumes it. Dropping it drops the
/// whole subtree and invalidates every handle into it.
///
/// Mutating operations take `&self`: the tree uses interior mutability and
/// relies on the caller to serialize mutations, as the integrator does.
pub struct Trajectory<T, P> {
    node: NodeRc<T, P>,
}

/// A non-owning handle to one node of a fork tree.
///
/// Obtained from [`Trajectory::new_fork`] (and friends) or
/// [`Trajectory::as_branch`]. Cloning is cheap. Equality compares node
/// identity, not contents.
///
/// # Panics
///
/// Every operation panics if the node has been deleted (its owning subtree
/// was dropped, pruned or the fork itself deleted).
pub struct Branch<T, P> {
    node: NodeWeak<T, P>,
}

impl<T: Copy + Ord, P> Default for Trajectory<T, P> {
    fn default() -> Self {
        Trajectory::new()
    }
}

impl<T: Copy + Ord, P> Trajectory<T, P> {
    /// Create an empty root trajectory.
    pub fn new() -> Self {
        Trajectory {
            node: Rc::new(RefCell::new(Node::new_root())),
        }
    }

    /// A non-owning handle to this root.
    pub fn as_branch(&self) -> Branch<T, P> {
        Branch {
            node: Rc::downgrade(&self.node),
        }
    }

    /// Always true: an owned trajectory is a root.
    pub fn is_root(&self) -> bool {
        true
    }

    /// Append a sample to the local segment.
    ///
    /// Return
    /// ------
    /// * The position of the new sample, or [`RamureError::OutOfOrder`] if
    ///   `time` does not come strictly after the latest effective sample.
    pub fn push_back(&self, time: T, value: P) -> Result<Position, RamureError> {
        push_back_impl(&self.node, time, value)
    }

    /// Prepend a sample to the local segment; see [`Timeline::push_front`].
    pub fn push_front(&self, time: T, value: P) -> Result<Position, RamureError> {
        self.node.borrow_mut().timeline.push_front(time, value)
    }

    /// Remove and return the earliest local sample.
    pub fn pop_front(&self) -> Option<(T, P)> {
        self.node.borrow_mut().timeline.pop_front()
    }

    pub fn timeline_is_empty(&self) -> bool {
        self.node.borrow().timeline.is_empty()
    }

    pub fn timeline_len(&self) -> usize {
        self.node.borrow().timeline.len()
    }

    pub fn timeline_first_time(&self) -> Option<T> {
        self.node.borrow().timeline.first_time()
    }

    pub fn timeline_last_time(&self) -> Option<T> {
        self.node.borrow().timeline.last_time()
    }

    /// Create a fork branching at the sample designated by `at`.
    ///
    /// `at` must be a non-end cursor into this trajectory's effective
    /// timeline. The new fork becomes a child of whichever node actually
    /// owns the designated sample — forking at an inherited sample attaches
    /// the fork to the ancestor holding it. The fork starts with an empty
    /// local segment; subsequent [`push_back`](Self::push_back) calls must
    /// use times strictly after the fork point.
    ///
    /// Return
    /// ------
    /// * A handle to the new fork, [`RamureError::RootFork`] when forking a
    ///   root on an end cursor, [`RamureError::EmptyFork`] for an end
    ///   cursor otherwise.
    pub fn new_fork(&self, at: &Cursor<T, P>) -> Result<Branch<T, P>, RamureError> {
        new_fork_impl(&self.node, at)
    }

    /// Delete an owned fork, consuming the caller's handle.
    ///
    /// Return
    /// ------
    /// * `Ok(())` once the fork and its whole subtree are destroyed,
    ///   [`RamureError::IsRoot`] for a root handle,
    ///   [`RamureError::NotAChild`] if `child` is not a direct child of
    ///   this node.
    pub fn delete_fork(&self, child: Branch<T, P>) -> Result<(), RamureError> {
        delete_fork_impl(&self.node, child)
    }

    /// Take ownership of an independent root and attach it as a fork.
    ///
    /// The first sample of `child` must duplicate one of this trajectory's
    /// effective samples (the *copied begin*); that sample becomes the fork
    /// point. The caller conventionally follows up with
    /// [`pop_front`](Branch::pop_front) on the returned branch to drop the
    /// duplicate. Inverse of
    /// [`Branch::detach_fork_with_copied_begin`].
    ///
    /// Return
    /// ------
    /// * A handle to the attached node, [`RamureError::EmptyTimeline`] if
    ///   `child` has no samples, [`RamureError::ForkSampleNotFound`] if no
    ///   effective sample matches the child's first time.
    pub fn attach_fork_to_copied_begin(
        &self,
        child: Trajectory<T, P>,
    ) -> Result<Branch<T, P>, RamureError> {
        attach_impl(&self.node, child)
    }

    /// Delete every owned fork branching strictly after `time`.
    ///
    /// Forks branching exactly at `time` survive. Subtrees of deleted forks
    /// are destroyed with them.
    ///
    /// Return
    /// ------
    /// * `Ok(())`, or [`RamureError::BeforeForkTime`] when `time` precedes
    ///   the first sample (root) or the fork time (fork).
    pub fn delete_all_forks_after(&self, time: T) -> Result<(), RamureError> {
        delete_all_forks_after_impl(&self.node, time)
    }

    /// Assert that no owned fork branches strictly before `time`.
    ///
    /// Return
    /// ------
    /// * `Ok(())`, [`RamureError::ForkFound`] with the offending count
    ///   otherwise. Calling this on a non-root is itself an error
    ///   ([`RamureError::NonRoot`]); walk to the root first.
    pub fn check_no_forks_before(&self, time: T) -> Result<(), RamureError> {
        check_no_forks_before_impl(&self.node, time)
    }

    /// Cursor on the first effective sample (the end cursor when empty).
    pub fn begin(&self) -> Cursor<T, P> {
        Cursor::begin_of(&self.node)
    }

    /// The end cursor. Ends of distinct nodes are distinct.
    pub fn end(&self) -> Cursor<T, P> {
        Cursor::end_of(&self.node)
    }

    /// Cursor on the effective sample at exactly `time`, or the end cursor.
    pub fn find(&self, time: T) -> Cursor<T, P> {
        find_cursor(&self.node, time)
    }

    /// Cursor on the first effective sample at or after `time`, or the end
    /// cursor.
    pub fn lower_bound(&self, time: T) -> Cursor<T, P> {
        lower_bound_cursor(&self.node, time)
    }

    /// Forward iterator over the effective timeline.
    pub fn iter(&self) -> Samples<T, P> {
        Samples::new(self.begin())
    }
}

impl<T: Copy + Ord, P> Branch<T, P> {
    fn rc(&self) -> NodeRc<T, P> {
        upgrade(&self.node)
    }

    /// True iff this node has no parent.
    pub fn is_root(&self) -> bool {
        self.rc().borrow().parent.is_none()
    }

    /// Handle to the root of the tree containing this node.
    pub fn root(&self) -> Branch<T, P> {
        Branch {
            node: Rc::downgrade(&root_of(&self.rc())),
        }
    }

    /// Time of the fork point, or `None` for a root.
    pub fn fork_time(&self) -> Option<T> {
        self.rc().borrow().parent.as_ref().map(|link| link.fork_time)
    }

    /// Cursor on the parent sample this fork branches at.
    ///
    /// Return
    /// ------
    /// * The fork-point cursor, or [`RamureError::NotAFork`] on a root.
    pub fn fork(&self) -> Result<Cursor<T, P>, RamureError> {
        fork_cursor(&self.rc())
    }

    /// See [`Trajectory::push_back`].
    pub fn push_back(&self, time: T, value: P) -> Result<Position, RamureError> {
        push_back_impl(&self.rc(), time, value)
    }

    /// See [`Trajectory::push_front`].
    pub fn push_front(&self, time: T, value: P) -> Result<Position, RamureError> {
        self.rc().borrow_mut().timeline.push_front(time, value)
    }

    /// See [`Trajectory::pop_front`].
    pub fn pop_front(&self) -> Option<(T, P)> {
        self.rc().borrow_mut().timeline.pop_front()
    }

    pub fn timeline_is_empty(&self) -> bool {
        self.rc().borrow().timeline.is_empty()
    }

    pub fn timeline_len(&self) -> usize {
        self.rc().borrow().timeline.len()
    }

    pub fn timeline_first_time(&self) -> Option<T> {
        self.rc().borrow().timeline.first_time()
    }

    pub fn timeline_last_time(&self) -> Option<T> {
        self.rc().borrow().timeline.last_time()
    }

    /// See [`Trajectory::new_fork`].
    pub fn new_fork(&self, at: &Cursor<T, P>) -> Result<Branch<T, P>, RamureError> {
        new_fork_impl(&self.rc(), at)
    }

    /// See [`Trajectory::delete_fork`].
    pub fn delete_fork(&self, child: Branch<T, P>) -> Result<(), RamureError> {
        delete_fork_impl(&self.rc(), child)
    }

    /// See [`Trajectory::attach_fork_to_copied_begin`].
    pub fn attach_fork_to_copied_begin(
        &self,
        child: Trajectory<T, P>,
    ) -> Result<Branch<T, P>, RamureError> {
        attach_impl(&self.rc(), child)
    }

    /// Detach this fork from its parent and take ownership of its subtree.
    ///
    /// The parent's fork-point sample (time and value, hence `P: Clone`) is
    /// copied onto the detached timeline's front, so the returned root is
    /// self-contained and can later be re-attached with
    /// [`Trajectory::attach_fork_to_copied_begin`]. Handles into the
    /// subtree stay valid.
    ///
    /// Return
    /// ------
    /// * The subtree as an owned root, or [`RamureError::IsRoot`] when
    ///   called on a root.
    pub fn detach_fork_with_copied_begin(&self) -> Result<Trajectory<T, P>, RamureError>
    where
        P: Clone,
    {
        detach_impl(&self.rc())
    }

    /// See [`Trajectory::delete_all_forks_after`].
    pub fn delete_all_forks_after(&self, time: T) -> Result<(), RamureError> {
        delete_all_forks_after_impl(&self.rc(), time)
    }

    /// See [`Trajectory::check_no_forks_before`].
    pub fn check_no_forks_before(&self, time: T) -> Result<(), RamureError> {
        check_no_forks_before_impl(&self.rc(), time)
    }

    /// See [`Trajectory::begin`].
    pub fn begin(&self) -> Cursor<T, P> {
        Cursor::begin_of(&self.rc())
    }

    /// See [`Trajectory::end`].
    pub fn end(&self) -> Cursor<T, P> {
        Cursor::end_of(&self.rc())
    }

    /// See [`Trajectory::find`].
    pub fn find(&self, time: T) -> Cursor<T, P> {
        find_cursor(&self.rc(), time)
    }

    /// See [`Trajectory::lower_bound`].
    pub fn lower_bound(&self, time: T) -> Cursor<T, P> {
        lower_bound_cursor(&self.rc(), time)
    }

    /// See [`Trajectory::iter`].
    pub fn iter(&self) -> Samples<T, P> {
        Samples::new(self.begin())
    }
}

impl<T, P> Clone for Branch<T, P> {
    fn clone(&self) -> Self {
        Branch {
            node: self.node.clone(),
        }
    }
}

impl<T, P> PartialEq for Branch<T, P> {
    /// Node identity, not contents.
    fn eq(&self, other: &Self) -> bool {
        Weak::ptr_eq(&self.node, &other.node)
    }
}

impl<T, P> Eq for Branch<T, P> {}

impl<T, P> fmt::Debug for Trajectory<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Trajectory")
            .field("node", &Rc::as_ptr(&self.node))
            .finish()
    }
}

impl<T, P> fmt::Debug for Branch<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Branch")
            .field("node", &self.node.as_ptr())
            .finish()
    }
}
