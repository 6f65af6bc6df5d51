//! Property-based invariant tests for `Buffer`.
//!
//! 1. The backing store never changes length.
//! 2. A cyclic buffer keeps the most recent `capacity` writes, in write order.
//! 3. Linear modes accept exactly `capacity` writes.
//! 4. FIFO reads return writes in order, LIFO reads in reverse order.
//! 5. `is_empty`/`is_full` agree with the raw slots.
//! 6. With direct slot assignment mixed in, a read fails exactly when the
//!    buffer is empty, and `len` matches the iterated contents.

use proptest::prelude::*;
use simbuf::{Buffer, ContentOrder, Cyclic, Fifo, Lifo, Mode, Normal};
use std::collections::VecDeque;

fn capacity() -> impl Strategy<Value = usize> {
    1usize..32
}

fn values() -> impl Strategy<Value = Vec<i64>> {
    proptest::collection::vec(any::<i64>(), 0..96)
}

fn assert_occupancy<M: Mode>(buf: &Buffer<i64, M>) {
    let filled = buf.as_slots().iter().filter(|slot| slot.is_some()).count();
    assert_eq!(buf.is_empty(), filled == 0);
    assert_eq!(buf.is_full(), filled == buf.capacity());
}

/// Operations for interleaved queue/stack runs.
#[derive(Debug, Clone)]
enum Op {
    Write(i64),
    Read,
}

/// Operations mixing the mode protocol with direct slot assignment.
#[derive(Debug, Clone)]
enum RawOp {
    Write(i64),
    Read,
    Set(usize, i64),
}

fn raw_ops() -> impl Strategy<Value = Vec<RawOp>> {
    proptest::collection::vec(
        prop_oneof![
            any::<i64>().prop_map(RawOp::Write),
            Just(RawOp::Read),
            (0usize..32, any::<i64>()).prop_map(|(index, val)| RawOp::Set(index, val)),
        ],
        0..128,
    )
}

fn run_raw_ops<M: Mode>(cap: usize, ops: Vec<RawOp>) -> Result<(), TestCaseError> {
    let mut buf = Buffer::<i64, M>::new(cap).unwrap();
    for op in ops {
        match op {
            RawOp::Write(val) => {
                let was_full = buf.is_full();
                let accepted = buf.write(val).is_ok();
                prop_assert_eq!(accepted, !(was_full && M::KIND.is_linear()));
            }
            RawOp::Read => {
                let was_empty = buf.is_empty();
                prop_assert_eq!(buf.read().is_err(), was_empty);
            }
            RawOp::Set(index, val) => {
                prop_assert_eq!(buf.set(index, val).is_ok(), index < cap);
            }
        }
        prop_assert_eq!(buf.len(), buf.iter().count());
        prop_assert_eq!(buf.iter().len(), buf.len());
        prop_assert_eq!(buf.peek().is_none(), buf.is_empty());
        assert_occupancy(&buf);
    }
    Ok(())
}

fn ops() -> impl Strategy<Value = Vec<Op>> {
    proptest::collection::vec(
        prop_oneof![any::<i64>().prop_map(Op::Write), Just(Op::Read)],
        0..128,
    )
}

proptest! {
    #[test]
    fn cyclic_keeps_most_recent_window(cap in capacity(), vals in values()) {
        let mut buf = Buffer::<i64, Cyclic>::new(cap).unwrap();
        for &val in &vals {
            prop_assert!(buf.write(val).is_ok());
            prop_assert_eq!(buf.as_slots().len(), cap);
        }

        let keep = vals.len().min(cap);
        let expected = vals[vals.len() - keep..].to_vec();
        prop_assert_eq!(buf.content(ContentOrder::OldestFirst), expected);
        if let Some(last) = vals.last() {
            prop_assert_eq!(buf.read().unwrap(), *last);
        }
        assert_occupancy(&buf);
    }

    #[test]
    fn linear_modes_accept_exactly_capacity(cap in capacity(), vals in values()) {
        let mut buf = Buffer::<i64, Normal>::new(cap).unwrap();
        let accepted = vals.iter().filter(|&&val| buf.write(val).is_ok()).count();

        prop_assert_eq!(accepted, vals.len().min(cap));
        prop_assert_eq!(buf.content(ContentOrder::OldestFirst), vals[..accepted].to_vec());
        assert_occupancy(&buf);
    }

    #[test]
    fn fifo_matches_queue_model(cap in capacity(), ops in ops()) {
        let mut buf = Buffer::<i64, Fifo>::new(cap).unwrap();
        let mut model = VecDeque::new();

        for op in ops {
            match op {
                Op::Write(val) => {
                    let accepted = buf.write(val).is_ok();
                    prop_assert_eq!(accepted, model.len() < cap);
                    if accepted {
                        model.push_back(val);
                    }
                }
                Op::Read => {
                    prop_assert_eq!(buf.read().ok(), model.pop_front());
                }
            }
            prop_assert_eq!(buf.len(), model.len());
            assert_occupancy(&buf);
        }
    }

    #[test]
    fn lifo_matches_stack_model(cap in capacity(), ops in ops()) {
        let mut buf = Buffer::<i64, Lifo>::new(cap).unwrap();
        let mut model = Vec::new();

        for op in ops {
            match op {
                Op::Write(val) => {
                    let accepted = buf.write(val).is_ok();
                    prop_assert_eq!(accepted, model.len() < cap);
                    if accepted {
                        model.push(val);
                    }
                }
                Op::Read => {
                    prop_assert_eq!(buf.read().ok(), model.pop());
                }
            }
            prop_assert_eq!(buf.content(ContentOrder::OldestFirst), model.clone());
            assert_occupancy(&buf);
        }
    }

    #[test]
    fn reads_agree_with_occupancy(cap in capacity(), ops in raw_ops()) {
        run_raw_ops::<Normal>(cap, ops.clone())?;
        run_raw_ops::<Cyclic>(cap, ops.clone())?;
        run_raw_ops::<Lifo>(cap, ops.clone())?;
        run_raw_ops::<Fifo>(cap, ops)?;
    }
}
