// Host-side tests for frame gating and the snap debounce.

use folio_core::*;
use instant::Instant;
use std::time::Duration;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn frame_gate_allows_one_pending_request() {
    let mut gate = FrameGate::default();
    assert!(gate.request());
    for _ in 0..10 {
        assert!(!gate.request());
    }
    assert!(gate.take());
    assert!(!gate.take());
    assert!(gate.request(), "next frame may be scheduled after the callback ran");
}

#[test]
fn rapid_scrolls_fire_the_snap_once_after_the_last_pause() {
    let mut d = Debounce::new(ms(SNAP_DELAY_MS));
    let t0 = Instant::now();
    let scrolls = [0, 60, 130, 250, 380, 500];
    let mut fired = 0;

    for (i, &at) in scrolls.iter().enumerate() {
        d.touch(t0 + ms(at));
        if let Some(&next) = scrolls.get(i + 1) {
            // each gap is under 140ms, so nothing fires before the next scroll
            assert!(next - at < SNAP_DELAY_MS);
            if d.poll(t0 + ms(next - 1)) {
                fired += 1;
            }
        }
    }
    assert_eq!(fired, 0);
    assert!(!d.poll(t0 + ms(500 + 139)));
    assert!(d.poll(t0 + ms(500 + 140)));
    assert!(!d.poll(t0 + ms(2000)), "fires exactly once");
}

#[test]
fn cancel_disarms_a_pending_snap() {
    let mut d = Debounce::new(ms(140));
    let t0 = Instant::now();
    d.touch(t0);
    assert!(d.is_armed());
    d.cancel();
    assert!(!d.is_armed());
    assert!(!d.poll(t0 + ms(1000)));
}

#[test]
fn timer_fire_runs_once_per_arm() {
    let mut d = Debounce::new(ms(140));
    assert!(!d.fire(), "nothing armed yet");
    d.touch(Instant::now());
    assert!(d.fire());
    assert!(!d.fire());
    assert!(!d.is_armed());
}

#[test]
fn replaced_timers_snap_once_after_the_last_scroll() {
    // each scroll re-arms and replaces the pending timer; only the survivor runs
    let mut d = Debounce::new(ms(SNAP_DELAY_MS));
    let t0 = Instant::now();
    let mut live_deadline = None;
    for at in [0, 40, 90, 200] {
        live_deadline = Some(d.touch(t0 + ms(at)));
    }
    assert_eq!(live_deadline, Some(t0 + ms(200 + SNAP_DELAY_MS)));

    let mut snaps = 0;
    if d.fire() {
        snaps += 1;
    }
    // a stale callback that slipped through clearTimeout finds nothing armed
    if d.fire() {
        snaps += 1;
    }
    assert_eq!(snaps, 1);
}

#[test]
fn cancel_between_touch_and_fire_suppresses_the_snap() {
    let mut d = Debounce::new(ms(SNAP_DELAY_MS));
    d.touch(Instant::now());
    d.touch(Instant::now());
    d.cancel();
    assert!(!d.fire());
}
