use simbuf::{
    Buffer, BufferError, BufferState, Cyclic, Fifo, Lifo, ModeKind, Normal,
};

#[test]
fn test_buffer_initialization() {
    let buf = Buffer::<f64, Normal>::new(5).unwrap();

    assert_eq!(buf.capacity(), 5);
    assert_eq!(buf.len(), 0);
    assert_eq!(buf.index(), 0);
    assert!(buf.is_empty());
    assert!(!buf.is_full());
    assert_eq!(buf.state(), BufferState::Empty);
    assert!(buf.as_slots().iter().all(Option::is_none));
}

#[test]
fn test_fresh_buffer_every_mode() {
    fn check<M: simbuf::Mode>(kind: ModeKind) {
        let buf = Buffer::<i32, M>::new(4).unwrap();
        assert_eq!(buf.mode(), kind);
        assert_eq!(buf.as_slots().len(), 4);
        assert!(buf.is_empty());
        assert!(!buf.is_full());
    }

    check::<Normal>(ModeKind::Normal);
    check::<Cyclic>(ModeKind::Cyclic);
    check::<Lifo>(ModeKind::Lifo);
    check::<Fifo>(ModeKind::Fifo);
}

#[test]
fn test_default_mode_and_element_type() {
    let buf: Buffer = Buffer::new(3).unwrap();
    assert_eq!(buf.mode(), ModeKind::Cyclic);
    assert_eq!(buf.summary().eltype, "f64");
}

#[test]
fn test_zero_capacity_is_rejected() {
    let err = Buffer::<u8, Fifo>::new(0).unwrap_err();
    assert_eq!(err, BufferError::InvalidCapacity { capacity: 0 });
}

#[test]
fn test_state_transitions() {
    let mut buf = Buffer::<u32, Normal>::new(2).unwrap();
    assert_eq!(buf.state(), BufferState::Empty);

    buf.write(1).unwrap();
    assert_eq!(buf.state(), BufferState::Partial);

    buf.write(2).unwrap();
    assert_eq!(buf.state(), BufferState::Full);
}

#[test]
fn test_write_returns_stored_value() {
    let mut buf = Buffer::<String, Lifo>::new(2).unwrap();
    let stored = buf.write("first".to_string()).unwrap();
    assert_eq!(stored, "first");
}

#[test]
fn test_fill_writes_until_full() {
    let mut buf = Buffer::<f64, Normal>::new(3).unwrap();

    assert_eq!(buf.fill(1.0).unwrap(), 3);
    assert!(buf.is_full());
    assert_eq!(buf.as_slots(), &[Some(1.0), Some(1.0), Some(1.0)]);

    // Nothing left to fill
    assert_eq!(buf.fill(2.0).unwrap(), 0);
    assert_eq!(buf.as_slots(), &[Some(1.0), Some(1.0), Some(1.0)]);
}

#[test]
fn test_fill_partially_written_buffer() {
    let mut buf = Buffer::<i32, Fifo>::new(4).unwrap();
    buf.write(9).unwrap();

    assert_eq!(buf.fill(0).unwrap(), 3);
    assert_eq!(buf.as_slots(), &[Some(9), Some(0), Some(0), Some(0)]);
}

#[test]
fn test_fill_cyclic_buffer() {
    let mut buf: Buffer = Buffer::new(3).unwrap();

    assert_eq!(buf.fill(1.0).unwrap(), 3);
    assert!(buf.is_full());
    assert_eq!(buf.index(), 0);
}

#[test]
fn test_clear_operation() {
    let mut buf = Buffer::<i32, Lifo>::new(3).unwrap();
    buf.fill(4).unwrap();

    buf.clear();

    assert!(buf.is_empty());
    assert_eq!(buf.index(), 0);
    assert_eq!(buf.capacity(), 3);
    assert!(buf.read().is_err());

    buf.write(5).unwrap();
    assert_eq!(buf.read().unwrap(), 5);
}

#[test]
fn test_summary_rendering() {
    let mut buf = Buffer::<f64, Fifo>::new(3).unwrap();
    assert_eq!(
        buf.summary().to_string(),
        "Buffer(mode:Fifo, eltype:f64, length:3, index:0, state:empty)"
    );

    buf.write(1.0).unwrap();
    assert_eq!(
        buf.to_string(),
        "Buffer(mode:Fifo, eltype:f64, length:3, index:1, state:partial)"
    );

    buf.fill(2.0).unwrap();
    assert_eq!(
        buf.to_string(),
        "Buffer(mode:Fifo, eltype:f64, length:3, index:3, state:full)"
    );
}

#[test]
fn test_user_defined_element_type() {
    #[derive(Debug, Clone, PartialEq)]
    struct Object {
        id: u8,
    }

    let mut buf = Buffer::<Object, Normal>::new(4).unwrap();
    buf.write(Object { id: 1 }).unwrap();
    assert_eq!(buf.read().unwrap(), Object { id: 1 });
}

#[test]
fn test_vector_element_type() {
    let mut buf = Buffer::<Vec<i32>>::new(2).unwrap();
    buf.write(vec![1, 2]).unwrap();
    buf.write(vec![3]).unwrap();
    buf.write(vec![4, 5, 6]).unwrap();

    assert_eq!(buf.read().unwrap(), vec![4, 5, 6]);
    assert_eq!(buf.as_slots(), &[Some(vec![4, 5, 6]), Some(vec![3])]);
}

#[test]
fn test_debug_shows_raw_slots() {
    let mut buf = Buffer::<i32, Normal>::new(2).unwrap();
    buf.write(3).unwrap();

    let debug = format!("{buf:?}");
    assert!(debug.contains("Normal"));
    assert!(debug.contains("[Some(3), None]"));
}

#[test]
fn test_error_messages() {
    let err = BufferError::CapacityExceeded {
        capacity: 3,
        mode: ModeKind::Normal,
    };
    assert_eq!(
        err.to_string(),
        "Capacity exceeded: Normal buffer holds 3 elements and is full"
    );

    let err = BufferError::EmptyRead {
        mode: ModeKind::Lifo,
    };
    assert_eq!(err.to_string(), "Empty read: Lifo buffer has no element to read");
}
