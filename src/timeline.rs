//! # Reference-stable sample timelines
//!
//! A [`Timeline`] is a strictly time-ordered sequence of `(time, value)`
//! samples. Samples live in a slab of slots linked as a doubly linked list:
//! a slot is never moved, so a [`Position`] keeps designating the same
//! sample across appends at either end and across removal of earlier
//! samples. Freed slots carry a generation counter, which lets a stale
//! [`Position`] be detected instead of silently resolving to a recycled
//! sample.
//!
//! Lookup (`find`, `lower_bound`) is a linear scan from the front; the
//! timelines handled here are short segments of a fork tree and the
//! branching layer only resolves them once per fork operation.

use crate::ramure_errors::RamureError;

/// A reference-stable position inside one [`Timeline`].
///
/// Obtained from the timeline (push, `find`, `begin`, …) and valid until
/// the designated sample is removed. A position never dangles silently:
/// after removal every accessor returns `None` for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    index: u32,
    generation: u32,
}

#[derive(Debug)]
enum Slot<T, P> {
    Occupied {
        generation: u32,
        time: T,
        value: P,
        prev: Option<u32>,
        next: Option<u32>,
    },
    Vacant {
        generation: u32,
        next_free: Option<u32>,
    },
}

/// Strictly time-ordered samples with reference-stable positions.
#[derive(Debug)]
pub struct Timeline<T, P> {
    slots: Vec<Slot<T, P>>,
    free_head: Option<u32>,
    head: Option<u32>,
    tail: Option<u32>,
    len: usize,
}

impl<T, P> Default for Timeline<T, P> {
    fn default() -> Self {
        Timeline::new()
    }
}

impl<T, P> Timeline<T, P> {
    pub fn new() -> Self {
        Timeline {
            slots: Vec::new(),
            free_head: None,
            head: None,
            tail: None,
            len: 0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<T: Copy + Ord, P> Timeline<T, P> {
    /// Append a sample after the latest one.
    ///
    /// Return
    /// ------
    /// * The position of the new sample, or [`RamureError::OutOfOrder`] if
    ///   `time` is not strictly greater than the last sample's time.
    pub fn push_back(&mut self, time: T, value: P) -> Result<Position, RamureError> {
        if let Some(last) = self.last_time() {
            if time <= last {
                return Err(RamureError::OutOfOrder);
            }
        }
        let prev = self.tail;
        let index = self.allocate(time, value, prev, None);
        if let Some(prev) = prev {
            self.set_next(prev, Some(index));
        } else {
            self.head = Some(index);
        }
        self.tail = Some(index);
        self.len += 1;
        Ok(self.position_of(index))
    }

    /// Prepend a sample before the earliest one.
    ///
    /// Return
    /// ------
    /// * The position of the new sample, or [`RamureError::OutOfOrder`] if
    ///   `time` is not strictly less than the first sample's time.
    pub fn push_front(&mut self, time: T, value: P) -> Result<Position, RamureError> {
        if let Some(first) = self.first_time() {
            if time >= first {
                return Err(RamureError::OutOfOrder);
            }
        }
        let next = self.head;
        let index = self.allocate(time, value, None, next);
        if let Some(next) = next {
            self.set_prev(next, Some(index));
        } else {
            self.tail = Some(index);
        }
        self.head = Some(index);
        self.len += 1;
        Ok(self.position_of(index))
    }

    /// Remove and return the earliest sample.
    ///
    /// Positions of the remaining samples are unaffected; positions of the
    /// removed sample become invalid.
    pub fn pop_front(&mut self) -> Option<(T, P)> {
        let index = self.head?;
        let (time, value, next) = match std::mem::replace(
            &mut self.slots[index as usize],
            Slot::Vacant {
                generation: 0,
                next_free: None,
            },
        ) {
            Slot::Occupied {
                generation,
                time,
                value,
                next,
                ..
            } => {
                // Bumping the generation invalidates outstanding positions.
                self.slots[index as usize] = Slot::Vacant {
                    generation: generation.wrapping_add(1),
                    next_free: self.free_head,
                };
                (time, value, next)
            }
            Slot::Vacant { .. } => unreachable!("timeline head points at a vacant slot"),
        };
        self.free_head = Some(index);
        self.head = next;
        match next {
            Some(next) => self.set_prev(next, None),
            None => self.tail = None,
        }
        self.len -= 1;
        Some((time, value))
    }

    /// Position of the sample whose time equals `time`, if any.
    pub fn find(&self, time: T) -> Option<Position> {
        let mut at = self.begin();
        while let Some(position) = at {
            let sample_time = self.time(position)?;
            if sample_time == time {
                return Some(position);
            }
            if sample_time > time {
                return None;
            }
            at = self.next(position);
        }
        None
    }

    /// Position of the first sample whose time is `>= time`, if any.
    pub fn lower_bound(&self, time: T) -> Option<Position> {
        let mut at = self.begin();
        while let Some(position) = at {
            if self.time(position)? >= time {
                return Some(position);
            }
            at = self.next(position);
        }
        None
    }

    /// Position of the earliest sample.
    #[inline]
    pub fn begin(&self) -> Option<Position> {
        self.head.map(|index| self.position_of(index))
    }

    /// Position of the latest sample.
    #[inline]
    pub fn last(&self) -> Option<Position> {
        self.tail.map(|index| self.position_of(index))
    }

    /// Position of the sample after `at`, or `None` at the end.
    pub fn next(&self, at: Position) -> Option<Position> {
        let (.., next) = self.occupied(at)?;
        next.map(|index| self.position_of(index))
    }

    /// Position of the sample before `at`, or `None` at the beginning.
    pub fn prev(&self, at: Position) -> Option<Position> {
        let (.., prev, _) = self.occupied(at)?;
        prev.map(|index| self.position_of(index))
    }

    /// Time of the sample at `at`, or `None` for a stale position.
    #[inline]
    pub fn time(&self, at: Position) -> Option<T> {
        self.occupied(at).map(|(time, ..)| *time)
    }

    /// Value of the sample at `at`, or `None` for a stale position.
    #[inline]
    pub fn value(&self, at: Position) -> Option<&P> {
        self.occupied(at).map(|(_, value, ..)| value)
    }

    /// True while `at` designates a live sample of this timeline.
    #[inline]
    pub fn contains(&self, at: Position) -> bool {
        self.occupied(at).is_some()
    }

    #[inline]
    pub fn first_time(&self) -> Option<T> {
        self.begin().and_then(|at| self.time(at))
    }

    #[inline]
    pub fn last_time(&self) -> Option<T> {
        self.last().and_then(|at| self.time(at))
    }

    fn occupied(&self, at: Position) -> Option<(&T, &P, Option<u32>, Option<u32>)> {
        match self.slots.get(at.index as usize)? {
            Slot::Occupied {
                generation,
                time,
                value,
                prev,
                next,
            } if *generation == at.generation => Some((time, value, *prev, *next)),
            _ => None,
        }
    }

    fn position_of(&self, index: u32) -> Position {
        let generation = match &self.slots[index as usize] {
            Slot::Occupied { generation, .. } | Slot::Vacant { generation, .. } => *generation,
        };
        Position { index, generation }
    }

    fn allocate(&mut self, time: T, value: P, prev: Option<u32>, next: Option<u32>) -> u32 {
        match self.free_head {
            Some(index) => {
                let generation = match self.slots[index as usize] {
                    Slot::Vacant {
                        generation,
                        next_free,
                    } => {
                        self.free_head = next_free;
                        generation
                    }
                    Slot::Occupied { .. } => unreachable!("free list points at an occupied slot"),
                };
                self.slots[index as usize] = Slot::Occupied {
                    generation,
                    time,
                    value,
                    prev,
                    next,
                };
                index
            }
            None => {
                let index = self.slots.len() as u32;
                self.slots.push(Slot::Occupied {
                    generation: 0,
                    time,
                    value,
                    prev,
                    next,
                });
                index
            }
        }
    }

    fn set_next(&mut self, index: u32, link: Option<u32>) {
        if let Slot::Occupied { next, .. } = &mut self.slots[index as usize] {
            *next = link;
        }
    }

    fn set_prev(&mut self, index: u32, link: Option<u32>) {
        if let Slot::Occupied { prev, .. } = &mut self.slots[index as usize] {
            *prev = link;
        }
    }
}

#[cfg(test)]
mod timeline_test {
    use ordered_float::OrderedFloat;

    use super::*;
    use crate::ramure_errors::RamureError;

    type Mjd = OrderedFloat<f64>;

    fn mjd(day: f64) -> Mjd {
        OrderedFloat(day)
    }

    fn times(timeline: &Timeline<Mjd, u32>) -> Vec<f64> {
        let mut out = Vec::new();
        let mut at = timeline.begin();
        while let Some(position) = at {
            out.push(timeline.time(position).unwrap().0);
            at = timeline.next(position);
        }
        out
    }

    #[test]
    fn test_push_back_keeps_order() {
        let mut timeline = Timeline::new();
        timeline.push_back(mjd(59215.0), 0).unwrap();
        timeline.push_back(mjd(59215.5), 1).unwrap();
        timeline.push_back(mjd(59216.0), 2).unwrap();
        assert_eq!(times(&timeline), vec![59215.0, 59215.5, 59216.0]);
        assert_eq!(timeline.len(), 3);

        assert!(matches!(
            timeline.push_back(mjd(59216.0), 3),
            Err(RamureError::OutOfOrder)
        ));
        assert!(matches!(
            timeline.push_back(mjd(59215.25), 3),
            Err(RamureError::OutOfOrder)
        ));
    }

    #[test]
    fn test_push_front_keeps_order() {
        let mut timeline = Timeline::new();
        timeline.push_back(mjd(59216.0), 1).unwrap();
        timeline.push_front(mjd(59215.0), 0).unwrap();
        assert_eq!(times(&timeline), vec![59215.0, 59216.0]);

        assert!(matches!(
            timeline.push_front(mjd(59215.0), 2),
            Err(RamureError::OutOfOrder)
        ));
    }

    #[test]
    fn test_positions_survive_mutations_at_the_ends() {
        let mut timeline = Timeline::new();
        timeline.push_back(mjd(1.0), 10).unwrap();
        let middle = timeline.push_back(mjd(2.0), 20).unwrap();
        timeline.push_back(mjd(3.0), 30).unwrap();

        timeline.push_front(mjd(0.0), 0).unwrap();
        timeline.push_back(mjd(4.0), 40).unwrap();
        assert_eq!(timeline.time(middle), Some(mjd(2.0)));
        assert_eq!(timeline.value(middle), Some(&20));

        let (popped_time, popped_value) = timeline.pop_front().unwrap();
        assert_eq!((popped_time, popped_value), (mjd(0.0), 0));
        assert_eq!(timeline.time(middle), Some(mjd(2.0)));
        assert_eq!(times(&timeline), vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_stale_position_is_detected_across_slot_reuse() {
        let mut timeline = Timeline::new();
        let first = timeline.push_back(mjd(1.0), 10).unwrap();
        timeline.push_back(mjd(2.0), 20).unwrap();
        timeline.pop_front().unwrap();
        assert!(!timeline.contains(first));
        assert_eq!(timeline.time(first), None);

        // The freed slot is recycled; the stale position must not resolve
        // to the new sample.
        let recycled = timeline.push_back(mjd(3.0), 30).unwrap();
        assert_eq!(timeline.time(recycled), Some(mjd(3.0)));
        assert!(!timeline.contains(first));
        assert_eq!(times(&timeline), vec![2.0, 3.0]);
    }

    #[test]
    fn test_find_and_lower_bound() {
        let mut timeline = Timeline::new();
        timeline.push_back(mjd(1.0), 10).unwrap();
        timeline.push_back(mjd(2.0), 20).unwrap();
        timeline.push_back(mjd(4.0), 40).unwrap();

        let found = timeline.find(mjd(2.0)).unwrap();
        assert_eq!(timeline.time(found), Some(mjd(2.0)));
        assert!(timeline.find(mjd(3.0)).is_none());
        assert!(timeline.find(mjd(5.0)).is_none());

        let bound = timeline.lower_bound(mjd(3.0)).unwrap();
        assert_eq!(timeline.time(bound), Some(mjd(4.0)));
        let bound = timeline.lower_bound(mjd(0.0)).unwrap();
        assert_eq!(timeline.time(bound), Some(mjd(1.0)));
        assert!(timeline.lower_bound(mjd(5.0)).is_none());
    }

    #[test]
    fn test_walking_both_directions() {
        let mut timeline = Timeline::new();
        timeline.push_back(mjd(1.0), 10).unwrap();
        timeline.push_back(mjd(2.0), 20).unwrap();

        let begin = timeline.begin().unwrap();
        let last = timeline.last().unwrap();
        assert_eq!(timeline.next(begin), Some(last));
        assert_eq!(timeline.prev(last), Some(begin));
        assert_eq!(timeline.next(last), None);
        assert_eq!(timeline.prev(begin), None);

        let empty: Timeline<Mjd, u32> = Timeline::new();
        assert!(empty.is_empty());
        assert!(empty.begin().is_none());
        assert!(empty.last().is_none());
    }
}
