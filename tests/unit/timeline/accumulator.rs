use super::*;

#[test]
fn three_scenes_two_fades() {
    let l = accumulate(&[150, 240, 90], &[15, 15]).unwrap();
    assert_eq!(l.total, 450);
    assert_eq!(l.starts, vec![0, 135, 360]);
    assert_eq!(l.scene_range(2), Some(Span { start: 360, end: 450 }));
    assert_eq!(l.transition_window(0), Some(Span { start: 135, end: 150 }));
}

#[test]
fn single_scene_has_no_overlaps() {
    let l = accumulate(&[150], &[]).unwrap();
    assert_eq!(l.total, 150);
    assert_eq!(l.starts, vec![0]);
    assert_eq!(l.len(), 1);
    assert!(!l.is_empty());
    assert_eq!(l.transition_window(0), None);
}

#[test]
fn transition_longer_than_a_scene_gives_signed_start() {
    let l = accumulate(&[30, 30], &[40]).unwrap();
    assert_eq!(l.total, 20);
    assert_eq!(l.starts, vec![0, -10]);

    let active = l.active_at(0);
    assert_eq!(active.len(), 2);
    assert_eq!(active[1].index, 1);
    assert_eq!(active[1].local, LocalFrame(10));
}

#[test]
fn overlaps_consuming_every_frame_underflow() {
    let err = accumulate(&[10, 10], &[25]).unwrap_err();
    assert!(err.is_duration_underflow());
    assert!(matches!(
        err,
        ExplainerError::DurationUnderflow {
            scene_frames: 20,
            transition_frames: 25
        }
    ));

    // Equal sums leave nothing to play.
    assert!(accumulate(&[10, 10], &[20]).unwrap_err().is_duration_underflow());
}

#[test]
fn transition_count_must_match() {
    let err = accumulate(&[10, 10, 10], &[2]).unwrap_err();
    assert!(matches!(
        err,
        ExplainerError::TransitionCountMismatch {
            scenes: 3,
            transitions: 1
        }
    ));
    assert!(accumulate(&[10], &[2]).is_err());
}

#[test]
fn empty_and_zero_length_scenes_are_rejected() {
    assert!(accumulate(&[], &[]).is_err());
    let err = accumulate(&[10, 0], &[0]).unwrap_err();
    assert!(err.to_string().contains("scene 1"));
}

#[test]
fn const_total_agrees_with_accumulate() {
    let cases: [(&[u64], &[u64]); 7] = [
        (&[150, 240, 90], &[15, 15]),
        (&[150], &[]),
        (&[30, 30], &[40]),
        (&[10, 10], &[25]),
        (&[10, 10], &[20]),
        (&[10, 0], &[0]),
        (&[10, 10, 10], &[2]),
    ];
    for (scenes, transitions) in cases {
        let lazy = accumulate(scenes, transitions).ok().map(|l| l.total);
        assert_eq!(sequence_total(scenes, transitions), lazy, "{scenes:?} {transitions:?}");
    }

    const TOTAL: Option<u64> = sequence_total(&[150, 240, 90], &[15, 15]);
    assert_eq!(TOTAL, Some(450));
}

#[test]
fn accumulation_is_pure() {
    let a = accumulate(&[90, 120, 60, 45], &[15, 20, 0]).unwrap();
    let b = accumulate(&[90, 120, 60, 45], &[15, 20, 0]).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.total, 90 + 120 + 60 + 45 - 35);
}

#[test]
fn transition_progress_hits_both_endpoints() {
    let l = accumulate(&[150, 240], &[15]).unwrap();
    assert_eq!(l.transition_progress(0, 134), 0.0);
    assert_eq!(l.transition_progress(0, 135), 0.0);
    assert_eq!(l.transition_progress(0, 149), 1.0);
    assert_eq!(l.transition_progress(0, 500), 1.0);
    let mid = l.transition_progress(0, 142);
    assert!((mid - 0.5).abs() < 1e-12);
}

#[test]
fn one_frame_transition_is_complete_at_once() {
    let l = accumulate(&[10, 10], &[1]).unwrap();
    assert_eq!(l.transition_progress(0, 9), 1.0);
    assert_eq!(l.transition_progress(0, 8), 0.0);
}

#[test]
fn active_at_reports_blends_inside_windows_only() {
    let l = accumulate(&[150, 240, 90], &[15, 15]).unwrap();

    let a = l.active_at(10);
    assert_eq!(a.len(), 1);
    assert_eq!(a[0].index, 0);
    assert_eq!(a[0].blend_in, None);

    let a = l.active_at(140);
    assert_eq!(a.len(), 2);
    assert_eq!((a[0].index, a[1].index), (0, 1));
    assert_eq!(a[1].local, LocalFrame(5));
    assert!(a[1].blend_in.is_some_and(|p| p > 0.0 && p < 1.0));

    let a = l.active_at(150);
    assert_eq!(a.len(), 1);
    assert_eq!(a[0].index, 1);
    assert_eq!(a[0].local, LocalFrame(15));
}

#[test]
fn active_at_clamps_outside_the_sequence() {
    let l = accumulate(&[150, 240, 90], &[15, 15]).unwrap();
    assert_eq!(l.active_at(-5), l.active_at(0));
    let end = l.active_at(10_000);
    assert_eq!(end, l.active_at(449));
    assert_eq!(end[0].index, 2);
    assert_eq!(end[0].local, LocalFrame(89));
}

#[test]
fn zero_length_transition_is_a_hard_cut() {
    let l = accumulate(&[10, 10], &[0]).unwrap();
    assert_eq!(l.total, 20);
    assert_eq!(l.active_at(9).len(), 1);
    assert_eq!(l.active_at(10)[0].index, 1);
}

#[test]
fn long_transition_can_start_a_scene_before_its_predecessor() {
    let l = accumulate(&[30, 10, 30], &[15, 15]).unwrap();
    assert_eq!(l.starts, vec![0, 15, 10]);
    assert_eq!(l.reordered_starts(), vec![2]);

    let active = l.active_at(11);
    let indices: Vec<_> = active.iter().map(|a| a.index).collect();
    assert_eq!(indices, vec![0, 2]);
    assert_eq!(active[1].local, LocalFrame(1));

    assert!(accumulate(&[150, 240, 90], &[15, 15]).unwrap().reordered_starts().is_empty());
    assert!(accumulate(&[30, 30], &[40]).unwrap().reordered_starts().is_empty());
}
