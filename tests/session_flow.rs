//! End-to-end session scenarios through the public API.

use std::cell::RefCell;
use std::rc::Rc;

use flowtime::core::ManualClock;
use flowtime::features::flowtime::{
    DisplaySnapshot, Session, SessionClock, SessionEvent, SessionState, APP_TITLE,
};
use flowtime::FlowtimeError;

fn clock() -> (ManualClock, SessionClock<ManualClock>) {
    let time = ManualClock::new(1_700_000_000_000);
    (time.clone(), SessionClock::new(time))
}

#[test]
fn test_work_break_stop_cycle() {
    let (time, mut clock) = clock();
    let frames = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&frames);
    clock.subscribe(move |event: SessionEvent, session: &Session| {
        sink.borrow_mut()
            .push((event, DisplaySnapshot::from_session(session)));
    });

    clock.start_work("Write report").unwrap();
    for _ in 0..130 {
        time.advance_secs(1);
        assert!(clock.poll());
    }

    let snapshot = clock.snapshot();
    assert_eq!(snapshot.timer, "00:02:10");
    assert_eq!(snapshot.break_time, "00:00:26");
    assert_eq!(snapshot.title, format!("(00:02:10) {APP_TITLE}"));
    assert_eq!(snapshot.break_hint.as_deref(), Some("(00:00:26)"));

    clock.start_break().unwrap();
    let snapshot = clock.snapshot();
    assert_eq!(snapshot.current_session, "Break");
    assert_eq!(snapshot.work_duration, "00:02:10");
    assert_eq!(snapshot.status, "Taking a break (00:00:26 recommended)");

    time.advance_secs(30);
    clock.poll();
    clock.stop();
    assert_eq!(clock.state(), SessionState::Idle);
    assert!(!clock.is_ticking());

    let frames = frames.borrow();
    let ticks = frames.iter().filter(|(e, _)| *e == SessionEvent::Tick).count();
    assert_eq!(ticks, 131);
    let (last_event, last) = frames.last().unwrap();
    assert_eq!(*last_event, SessionEvent::Stopped);
    assert_eq!(last.timer, "00:00:00");
    assert_eq!(last.title, APP_TITLE);
    assert_eq!(last.work_duration, "00:02:10");
}

#[test]
fn test_no_tick_after_stop() {
    let (time, mut clock) = clock();
    let count = Rc::new(RefCell::new(0));
    let seen = Rc::clone(&count);
    clock.subscribe(move |event: SessionEvent, _: &Session| {
        if event == SessionEvent::Tick {
            *seen.borrow_mut() += 1;
        }
    });

    clock.start_work("a").unwrap();
    clock.stop();
    time.advance_secs(10);
    assert!(!clock.poll());
    assert_eq!(*count.borrow(), 0);
    assert!(clock.time_until_tick().is_none());
}

#[test]
fn test_resume_work_from_break() {
    let (time, mut clock) = clock();
    clock.start_work("first").unwrap();
    time.advance_secs(300);
    clock.start_break().unwrap();
    time.advance_secs(60);

    clock.start_work("second").unwrap();
    assert_eq!(clock.session().task_label(), Some("second"));
    assert_eq!(clock.session().elapsed_seconds(), 0);
    assert_eq!(clock.session().last_work_duration_seconds(), 300);
}

#[test]
fn test_illegal_transitions_leave_state_alone() {
    let (_, mut clock) = clock();
    assert!(matches!(
        clock.start_break(),
        Err(FlowtimeError::IllegalTransition { .. })
    ));
    assert!(matches!(
        clock.start_work("   "),
        Err(FlowtimeError::InvalidInput(_))
    ));
    assert_eq!(clock.state(), SessionState::Idle);

    clock.start_work("x").unwrap();
    let err = clock.start_work("y").unwrap_err();
    assert_eq!(err.to_string(), "Cannot start work while working");
    assert_eq!(clock.session().task_label(), Some("x"));
}
