mod common;

use hifitime::Epoch;

use common::sec;
use ramure::ramure_errors::RamureError;
use ramure::trajectories::Trajectory;

fn instants() -> (Epoch, Epoch, Epoch, Epoch, Epoch) {
    (sec(0.0), sec(7.0), sec(17.0), sec(27.0), sec(37.0))
}

#[test]
fn test_retreat_error_on_empty_root() {
    let root: Trajectory<Epoch, ()> = Trajectory::new();
    let mut cursor = root.end();
    assert!(matches!(cursor.retreat(), Err(RamureError::BeforeBegin)));
}

#[test]
fn test_retreat_without_forks() {
    let (_, t1, t2, t3, _) = instants();
    let root: Trajectory<Epoch, ()> = Trajectory::new();
    root.push_back(t1, ()).unwrap();
    root.push_back(t2, ()).unwrap();
    root.push_back(t3, ()).unwrap();

    let mut cursor = root.end();
    cursor.retreat().unwrap();
    assert_eq!(cursor.time(), Some(t3));
    cursor.retreat().unwrap();
    assert_eq!(cursor.time(), Some(t2));
    cursor.retreat().unwrap();
    assert_eq!(cursor.time(), Some(t1));
    assert!(matches!(cursor.retreat(), Err(RamureError::BeforeBegin)));
}

#[test]
fn test_retreat_across_a_fork() {
    let (_, t1, t2, t3, t4) = instants();
    let root: Trajectory<Epoch, ()> = Trajectory::new();
    root.push_back(t1, ()).unwrap();
    root.push_back(t2, ()).unwrap();
    let fork = root.new_fork(&root.find(t1)).unwrap();
    root.push_back(t4, ()).unwrap();
    fork.push_back(t3, ()).unwrap();

    let mut cursor = fork.end();
    cursor.retreat().unwrap();
    assert_eq!(cursor.time(), Some(t3));
    cursor.retreat().unwrap();
    // Straight to the fork point: t2 and t4 belong to the other future.
    assert_eq!(cursor.time(), Some(t1));
    assert!(matches!(cursor.retreat(), Err(RamureError::BeforeBegin)));
}

#[test]
fn test_retreat_across_stacked_forks() {
    let (_, t1, t2, t3, _) = instants();
    let root: Trajectory<Epoch, ()> = Trajectory::new();
    root.push_back(t1, ()).unwrap();
    root.push_back(t2, ()).unwrap();
    let fork1 = root.new_fork(&root.find(t2)).unwrap();
    let fork2 = fork1.new_fork(&fork1.find(t2)).unwrap();
    let fork3 = fork2.new_fork(&fork2.find(t2)).unwrap();
    fork2.push_back(t3, ()).unwrap();

    // fork3 branched before t3 was appended to fork2 and must not see it.
    let mut cursor = fork3.end();
    cursor.retreat().unwrap();
    assert_eq!(cursor.time(), Some(t2));
    cursor.retreat().unwrap();
    assert_eq!(cursor.time(), Some(t1));
    assert_eq!(cursor, fork3.begin());
}

#[test]
fn test_advance_error_on_empty_root() {
    let root: Trajectory<Epoch, ()> = Trajectory::new();
    let mut cursor = root.begin();
    assert_eq!(cursor, root.end());
    assert!(matches!(cursor.advance(), Err(RamureError::PastEnd)));
}

#[test]
fn test_advance_without_forks() {
    let (_, t1, t2, t3, _) = instants();
    let root: Trajectory<Epoch, ()> = Trajectory::new();
    root.push_back(t1, ()).unwrap();
    root.push_back(t2, ()).unwrap();
    root.push_back(t3, ()).unwrap();

    let mut cursor = root.begin();
    assert_eq!(cursor.time(), Some(t1));
    cursor.advance().unwrap();
    assert_eq!(cursor.time(), Some(t2));
    cursor.advance().unwrap();
    assert_eq!(cursor.time(), Some(t3));
    cursor.advance().unwrap();
    assert_eq!(cursor, root.end());
}

#[test]
fn test_advance_across_a_fork() {
    let (_, t1, t2, t3, t4) = instants();
    let root: Trajectory<Epoch, ()> = Trajectory::new();
    root.push_back(t1, ()).unwrap();
    root.push_back(t2, ()).unwrap();
    let fork = root.new_fork(&root.find(t1)).unwrap();
    root.push_back(t4, ()).unwrap();
    fork.push_back(t3, ()).unwrap();

    let mut cursor = fork.begin();
    assert_eq!(cursor.time(), Some(t1));
    cursor.advance().unwrap();
    assert_eq!(cursor.time(), Some(t3));
    cursor.advance().unwrap();
    assert_eq!(cursor, fork.end());
}

#[test]
fn test_advance_across_stacked_forks() {
    let (_, t1, t2, t3, _) = instants();
    let root: Trajectory<Epoch, ()> = Trajectory::new();
    root.push_back(t1, ()).unwrap();
    root.push_back(t2, ()).unwrap();
    let fork1 = root.new_fork(&root.find(t2)).unwrap();
    let fork2 = fork1.new_fork(&fork1.find(t2)).unwrap();
    let fork3 = fork2.new_fork(&fork2.find(t2)).unwrap();

    let mut cursor = fork3.begin();
    assert_eq!(cursor.time(), Some(t1));
    cursor.advance().unwrap();
    assert_eq!(cursor.time(), Some(t2));
    cursor.advance().unwrap();
    assert_eq!(cursor, fork3.end());

    // The end cursor keeps no position: a later append is reachable by
    // retreating from it.
    fork3.push_back(t3, ()).unwrap();
    cursor.retreat().unwrap();
    assert_eq!(cursor.time(), Some(t3));

    let mut cursor = fork3.begin();
    assert_eq!(cursor.time(), Some(t1));
    cursor.advance().unwrap();
    assert_eq!(cursor.time(), Some(t2));
    cursor.advance().unwrap();
    assert_eq!(cursor.time(), Some(t3));
    cursor.advance().unwrap();
    assert_eq!(cursor, fork3.end());
}

#[test]
fn test_end_cursors_of_distinct_forks_differ() {
    let (_, t1, t2, _, _) = instants();
    let root: Trajectory<Epoch, ()> = Trajectory::new();
    root.push_back(t1, ()).unwrap();
    root.push_back(t2, ()).unwrap();
    let fork1 = root.new_fork(&root.find(t1)).unwrap();
    let fork2 = root.new_fork(&root.find(t2)).unwrap();

    assert_ne!(fork1.end(), fork2.end());
    assert_ne!(fork1.end(), root.end());
    assert_eq!(fork1.end(), fork1.end());
}

#[test]
fn test_find_over_effective_timelines() {
    let (t0, t1, t2, t3, t4) = instants();
    let root: Trajectory<Epoch, ()> = Trajectory::new();
    assert_eq!(root.find(t0), root.end());

    root.push_back(t1, ()).unwrap();
    root.push_back(t2, ()).unwrap();
    root.push_back(t3, ()).unwrap();

    assert_eq!(root.find(t0), root.end());
    assert_eq!(root.find(t1).time(), Some(t1));
    assert_eq!(root.find(t2).time(), Some(t2));
    assert_eq!(root.find(t4), root.end());

    let fork = root.new_fork(&root.find(t2)).unwrap();
    fork.push_back(t4, ()).unwrap();

    assert_eq!(fork.find(t0), fork.end());
    assert_eq!(fork.find(t1).time(), Some(t1));
    assert_eq!(fork.find(t2).time(), Some(t2));
    // t3 lives only on the parent's branch.
    assert_eq!(fork.find(t3), fork.end());
    assert_eq!(fork.find(t4).time(), Some(t4));
    assert_eq!(fork.find(t4 + (t4 - t3)), fork.end());
}

#[test]
fn test_lower_bound_over_effective_timelines() {
    let (t0, t1, t2, t3, t4) = instants();
    let root: Trajectory<Epoch, ()> = Trajectory::new();
    assert_eq!(root.lower_bound(t0), root.end());

    root.push_back(t1, ()).unwrap();
    root.push_back(t2, ()).unwrap();
    root.push_back(t3, ()).unwrap();

    assert_eq!(root.lower_bound(t0).time(), Some(t1));
    assert_eq!(root.lower_bound(t1).time(), Some(t1));
    assert_eq!(root.lower_bound(t2).time(), Some(t2));
    assert_eq!(root.lower_bound(t4), root.end());

    let fork = root.new_fork(&root.find(t2)).unwrap();
    fork.push_back(t4, ()).unwrap();

    assert_eq!(fork.lower_bound(t0).time(), Some(t1));
    assert_eq!(fork.lower_bound(t1).time(), Some(t1));
    assert_eq!(fork.lower_bound(t2).time(), Some(t2));
    // The first fork sample at or after t3 is t4.
    assert_eq!(fork.lower_bound(t3).time(), Some(t4));
    assert_eq!(fork.lower_bound(t4).time(), Some(t4));
    assert_eq!(fork.lower_bound(t4 + (t4 - t3)), fork.end());
}

#[test]
fn test_fork_cursor_walks_onward() {
    let (_, t1, t2, t3, _) = instants();
    let root: Trajectory<Epoch, ()> = Trajectory::new();
    root.push_back(t1, ()).unwrap();
    root.push_back(t2, ()).unwrap();
    let fork = root.new_fork(&root.find(t1)).unwrap();
    fork.push_back(t3, ()).unwrap();

    let mut cursor = fork.fork().unwrap();
    assert_eq!(cursor.time(), Some(t1));
    cursor.advance().unwrap();
    // Advancing from the fork point enters the fork's own segment, not the
    // parent's continuation.
    assert_eq!(cursor.time(), Some(t3));
    cursor.retreat().unwrap();
    assert_eq!(cursor.time(), Some(t1));
}

#[test]
fn test_value_access() {
    let (_, t1, t2, t3, t4) = instants();
    let root: Trajectory<Epoch, u32> = Trajectory::new();
    root.push_back(t1, 10).unwrap();
    root.push_back(t2, 20).unwrap();
    let fork = root.new_fork(&root.find(t2)).unwrap();
    fork.push_back(t3, 35).unwrap();
    root.push_back(t4, 40).unwrap();

    assert_eq!(fork.find(t2).value(), Some(20));
    assert_eq!(fork.find(t3).with_value(|v| v + 1), Some(36));
    assert_eq!(fork.end().value(), None);
    assert_eq!(
        fork.iter().collect::<Vec<_>>(),
        vec![(t1, 10), (t2, 20), (t3, 35)]
    );
    assert_eq!(
        root.iter().collect::<Vec<_>>(),
        vec![(t1, 10), (t2, 20), (t4, 40)]
    );
}
