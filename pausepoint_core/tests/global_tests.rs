use pausepoint_core::{global, NO_CALLBACK};

// The global slot is process-wide and the test harness runs tests on
// parallel threads, so the whole lifecycle is exercised as one sequence.
#[test]
fn test_global_slot_lifecycle() {
    // Fresh process: nothing registered yet.
    assert!(!global::is_registered());
    assert_eq!(global::invoke(50), NO_CALLBACK);

    // Register, invoke, observe the pass-through.
    global::register(|percent| percent * 2);
    assert!(global::is_registered());
    assert_eq!(global::invoke(10), 20);

    // Last write wins.
    global::register(|_| 1);
    global::register(|_| 99);
    assert_eq!(global::invoke(0), 99);

    // set(Some(..)) works with an explicitly boxed callback.
    global::set(Some(Box::new(|percent: i32| percent + 100)));
    assert_eq!(global::invoke(1), 101);

    // Clearing restores the sentinel.
    global::clear();
    assert!(!global::is_registered());
    assert_eq!(global::invoke(75), NO_CALLBACK);

    // set(None) is the same as clear.
    global::register(|_| 3);
    global::set(None);
    assert_eq!(global::invoke(75), NO_CALLBACK);
}
