use crate::linkset_error::LinkSetError;
use crate::set::OrderedSet;

#[test]
fn cursor_walks_forward_and_backward() {
    let s = OrderedSet::from_iter(["a", "b", "c"]);
    let mut fwd = s.cursor();
    let mut seen = Vec::new();
    while let Some(k) = fwd.advance(&s).unwrap() {
        seen.push(*k);
    }
    assert_eq!(seen, vec!["a", "b", "c"]);
    assert!(fwd.is_finished());
    assert_eq!(fwd.advance(&s).unwrap(), None);

    let mut back = s.cursor_rev();
    assert_eq!(back.advance(&s).unwrap(), Some(&"c"));
    assert_eq!(back.advance(&s).unwrap(), Some(&"b"));
}

#[test]
fn cursor_is_restartable() {
    let s = OrderedSet::from_iter(0..3);
    for _ in 0..2 {
        let mut c = s.cursor();
        assert_eq!(c.advance(&s).unwrap(), Some(&0));
    }
}

#[test]
fn mutation_mid_walk_is_detected() {
    let mut s = OrderedSet::from_iter(0..5);
    let mut c = s.cursor();
    assert_eq!(c.advance(&s).unwrap(), Some(&0));
    s.discard(&1);
    match c.advance(&s) {
        Err(LinkSetError::ConcurrentModification { expected, found }) => {
            assert!(found > expected);
        }
        other => panic!("expected ConcurrentModification, got {other:?}"),
    }
}

#[test]
fn no_op_mutations_do_not_invalidate() {
    let mut s = OrderedSet::from_iter(0..3);
    let mut c = s.cursor();
    c.advance(&s).unwrap();
    assert!(!s.add(2));
    assert!(!s.discard(&99));
    assert_eq!(c.advance(&s).unwrap(), Some(&1));
}

#[test]
fn finished_cursor_ignores_later_mutation() {
    let mut s = OrderedSet::from_iter(0..2);
    let mut c = s.cursor();
    while c.advance(&s).unwrap().is_some() {}
    s.add(7);
    assert_eq!(c.advance(&s).unwrap(), None);
}

#[test]
fn empty_set_cursor_finishes_immediately() {
    let s = OrderedSet::<u8>::new();
    let mut c = s.cursor_rev();
    assert_eq!(c.advance(&s).unwrap(), None);
    assert!(c.is_finished());
}

#[test]
fn cursor_from_another_set_is_rejected() {
    let a = OrderedSet::from_iter(0..10u32);
    let mut c = a.cursor();
    for _ in 0..8 {
        c.advance(&a).unwrap();
    }
    // Same epoch as `a`, but far fewer slots.
    let mut b = OrderedSet::<u32>::new();
    while b.epoch() < a.epoch() {
        if !b.discard(&0) {
            b.add(0);
        }
    }
    assert_eq!(b.epoch(), a.epoch());
    assert!(matches!(
        c.advance(&b),
        Err(LinkSetError::ConcurrentModification { .. })
    ));
}
