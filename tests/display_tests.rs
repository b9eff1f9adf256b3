// Host-side tests for the display lifecycle and per-frame compositing.

mod support;

use face_fireworks::core::*;
use support::{DrawCall, ManualFrames, RecordingSurface};

type TestDisplay = Display<RecordingSurface, ManualFrames>;

fn make_display() -> TestDisplay {
    Display::with_seed(RecordingSurface::new(800.0, 600.0), ManualFrames::default(), 42)
}

#[test]
fn new_display_is_idle() {
    let display = make_display();
    assert!(!display.is_running());
    assert!(display.bursts().is_empty());
    assert!(display.pending_frame().is_none());
    assert!(display.frames().requested.is_empty());
}

#[test]
fn start_creates_batch_and_renders_first_frame() {
    let mut display = make_display();
    display.start_display(BURST_COUNT);

    assert!(display.is_running());
    assert_eq!(display.bursts().len(), 15);
    assert_eq!(display.frame_count(), 1);
    assert_eq!(display.frames().requested.len(), 1);
    assert_eq!(display.pending_frame(), display.frames().last_requested());
    assert!(display.bursts().iter().all(|b| !b.exploded));
}

#[test]
fn each_frame_fades_before_drawing_bursts() {
    let mut display = make_display();
    display.start_display(3);
    display.surface_mut().calls.clear();
    display.frame();

    let calls = &display.surface().calls;
    assert_eq!(calls[0], DrawCall::Fill(Color::rgba(0, 0, 0, 0.15)));
    assert_eq!(calls[1], DrawCall::Rect(0.0, 0.0, 800.0, 600.0));
    assert!(!calls[2..]
        .iter()
        .any(|c| matches!(c, DrawCall::Rect(..) | DrawCall::Clear)));
    assert_eq!(display.surface().circles(), 3);
}

#[test]
fn bursts_are_drawn_in_insertion_order() {
    let mut display = make_display();
    display.start_display(5);
    display.surface_mut().calls.clear();
    display.frame();

    let drawn: Vec<(f64, f64)> = display
        .surface()
        .calls
        .iter()
        .filter_map(|c| match c {
            DrawCall::Circle(x, y, _) => Some((*x, *y)),
            _ => None,
        })
        .collect();
    let expected: Vec<(f64, f64)> = display
        .bursts()
        .iter()
        .map(|b| (b.pos.x as f64, b.pos.y as f64))
        .collect();
    assert_eq!(drawn, expected);
}

#[test]
fn every_frame_requests_exactly_one_next_frame() {
    let mut display = make_display();
    display.start_display(BURST_COUNT);
    for _ in 0..10 {
        display.frame();
    }
    assert_eq!(display.frame_count(), 11);
    assert_eq!(display.frames().requested.len(), 11);
    assert_eq!(display.pending_frame(), display.frames().last_requested());
}

#[test]
fn start_then_stop_leaves_idle_and_cleared() {
    for extra_frames in [0, 1, 30] {
        let mut display = make_display();
        display.start_display(BURST_COUNT);
        for _ in 0..extra_frames {
            display.frame();
        }
        let pending = display.pending_frame().expect("pending frame while running");
        display.stop_display();

        assert!(!display.is_running());
        assert!(display.bursts().is_empty());
        assert!(display.pending_frame().is_none());
        assert_eq!(display.frames().cancelled, vec![pending]);
        assert!(display.surface().last_is_clear());
    }
}

#[test]
fn second_start_while_running_is_ignored() {
    let mut display = make_display();
    display.start_display(BURST_COUNT);
    let first_batch: Vec<_> = display.bursts().iter().map(|b| b.pos).collect();

    display.start_display(BURST_COUNT);
    display.start_display(3);

    assert_eq!(display.frames().requested.len(), 1);
    assert_eq!(display.frame_count(), 1);
    let batch: Vec<_> = display.bursts().iter().map(|b| b.pos).collect();
    assert_eq!(batch, first_batch);
}

#[test]
fn stop_while_idle_is_a_no_op() {
    let mut display = make_display();
    display.stop_display();
    display.stop_display();
    assert!(!display.is_running());
    assert!(display.frames().cancelled.is_empty());
    assert!(display.bursts().is_empty());
}

#[test]
fn repeated_stop_after_running_cancels_once() {
    let mut display = make_display();
    display.start_display(BURST_COUNT);
    display.stop_display();
    display.stop_display();
    assert_eq!(display.frames().cancelled.len(), 1);
    assert!(!display.is_running());
}

#[test]
fn late_frame_after_stop_does_nothing() {
    let mut display = make_display();
    display.start_display(BURST_COUNT);
    display.stop_display();
    let calls_before = display.surface().calls.len();

    display.frame();

    assert_eq!(display.surface().calls.len(), calls_before);
    assert_eq!(display.frames().requested.len(), 1);
    assert!(display.pending_frame().is_none());
}

#[test]
fn restart_after_stop_launches_a_fresh_batch() {
    let mut display = make_display();
    display.start_display(BURST_COUNT);
    for _ in 0..200 {
        display.frame();
    }
    display.stop_display();

    display.start_display(4);
    assert!(display.is_running());
    assert_eq!(display.bursts().len(), 4);
    assert_eq!(display.frame_count(), 1);
    assert!(display.bursts().iter().all(|b| !b.exploded));
}

#[test]
fn forcing_the_single_burst_to_target_explodes_it_next_frame() {
    let mut display = make_display();
    display.start_display(1);
    {
        let b = &mut display.bursts_mut()[0];
        b.pos.y = b.target_y;
    }
    display.frame();

    let b = &display.bursts()[0];
    assert!(b.exploded);
    assert_eq!(b.particles.len(), 40);
}

#[test]
fn spent_bursts_stay_until_teardown() {
    let mut display = make_display();
    display.start_display(BURST_COUNT);
    for _ in 0..300 {
        display.frame();
    }
    assert_eq!(display.bursts().len(), 15);
    assert!(display.bursts().iter().all(|b| b.is_spent()));
    assert!(display.is_running());

    display.surface_mut().calls.clear();
    display.frame();
    assert_eq!(
        display.surface().calls,
        vec![
            DrawCall::Fill(Color::rgba(0, 0, 0, 0.15)),
            DrawCall::Rect(0.0, 0.0, 800.0, 600.0),
        ]
    );
}

#[test]
fn bursts_are_placed_against_current_surface_size() {
    let mut display = make_display();
    display.surface_mut().width = 320.0;
    display.surface_mut().height = 200.0;
    display.start_display(50);
    for b in display.bursts() {
        assert!(b.pos.x < 320.0);
        assert!(b.target_y < 100.0);
    }
}

#[test]
fn seeded_displays_are_reproducible() {
    let mut a = make_display();
    let mut b = make_display();
    a.start_display(BURST_COUNT);
    b.start_display(BURST_COUNT);
    for _ in 0..80 {
        a.frame();
        b.frame();
    }
    assert_eq!(a.surface().calls, b.surface().calls);
}

#[test]
fn independent_displays_do_not_share_state() {
    let mut a = make_display();
    let mut b = make_display();
    a.start_display(2);
    assert!(a.is_running());
    assert!(!b.is_running());
    b.start_display(7);
    a.stop_display();
    assert_eq!(a.bursts().len(), 0);
    assert_eq!(b.bursts().len(), 7);
}

#[test]
fn refused_frame_request_falls_back_to_idle() {
    let mut display = Display::with_seed(
        RecordingSurface::new(800.0, 600.0),
        ManualFrames::refusing(),
        42,
    );
    display.start_display(BURST_COUNT);
    assert!(!display.is_running());
    assert!(display.pending_frame().is_none());
    assert!(display.bursts().is_empty());
    assert_eq!(display.frame_count(), 1);

    // a later start is not swallowed by a stale running flag
    display.surface_mut().calls.clear();
    display.start_display(3);
    assert_eq!(display.surface().circles(), 3);
    assert!(!display.is_running());
}

#[test]
fn stop_after_refused_frame_cancels_nothing() {
    let mut display = Display::with_seed(
        RecordingSurface::new(800.0, 600.0),
        ManualFrames::refusing(),
        42,
    );
    display.start_display(BURST_COUNT);
    display.stop_display();
    assert!(display.frames().cancelled.is_empty());
    assert!(display.surface().last_is_clear());
}
