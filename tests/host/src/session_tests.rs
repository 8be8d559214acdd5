//! Casting Session Tests
//!
//! Whole strokes through the pad: activation, buffering, expiry,
//! whitelisting, casting and auto-hide.

use spellpad::gesture::{Pose, SessionState};
use spellpad::{CastOutcome, EffectToken, PadConfig, Point2, PointerEvent, PrimitiveGesture, Whitelist};
use spellpad_host_tests::{draw, draw_line, session_with, CENTER};

use PrimitiveGesture::*;

fn sticky() -> PadConfig {
    PadConfig::new().with_auto_hide(false)
}

fn history_of(session: &spellpad_host_tests::TestSession) -> Vec<PrimitiveGesture> {
    session.history().iter().map(|s| s.gesture).collect()
}

// ═══════════════════════════════════════════════════════════════════════════════
// ACTIVATION
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_inactive_session_ignores_input() {
    let mut session = session_with(&[("A", "-")], PadConfig::new());
    assert_eq!(session.state(), SessionState::Inactive);
    assert_eq!(draw(&mut session, '-', 0), None);
    assert!(session.history().is_empty());
    assert_eq!(session.tick(1_000), 0);
    assert!(session.host().points.is_empty());
}

#[test]
fn test_activate_locks_look() {
    let mut session = session_with(&[("A", "-")], PadConfig::new());
    session.activate(None);
    assert_eq!(session.state(), SessionState::Ready);
    assert!(!session.host().look_enabled);
    assert!(session.whitelist().is_none());
}

#[test]
fn test_deactivate_drops_progress() {
    let mut session = session_with(&[("HV", "- |")], sticky());
    session.activate(None);
    assert_eq!(draw(&mut session, '-', 0), Some(CastOutcome::Buffered(Horizontal)));

    session.deactivate();
    assert_eq!(session.state(), SessionState::Inactive);
    assert!(session.history().is_empty());
    assert!(session.host().look_enabled);

    // A fresh activation cannot finish the old sequence
    session.activate(None);
    assert_eq!(draw(&mut session, '|', 100), Some(CastOutcome::Buffered(Vertical)));
    assert!(session.host().spawned.is_empty());
}

// ═══════════════════════════════════════════════════════════════════════════════
// STROKES
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_stroke_visuals_follow_the_pointer() {
    let mut session = session_with(&[("HV", "- |")], sticky());
    session.activate(None);

    session.handle(PointerEvent::Begin(Point2::new(360.0, 300.0)), 0);
    session.handle(PointerEvent::Move(Point2::new(380.0, 300.0)), 0);
    assert_eq!(session.state(), SessionState::Drawing);
    assert_eq!(session.host().points.len(), 2);
    assert_eq!(session.stroke_points().len(), 2);

    session.handle(PointerEvent::Move(Point2::new(440.0, 300.0)), 0);
    assert!(session.handle(PointerEvent::End, 0).is_some());
    assert!(session.host().points.is_empty());
    assert!(session.stroke_points().is_empty());
}

#[test]
fn test_release_without_press() {
    let mut session = session_with(&[("A", "-")], PadConfig::new());
    session.activate(None);
    assert_eq!(session.handle(PointerEvent::End, 0), None);
    assert_eq!(session.stats().strokes_processed, 0);
}

#[test]
fn test_press_while_drawing_restarts() {
    let mut session = session_with(&[("A", "-")], sticky());
    session.activate(None);
    let clears = session.host().clears;

    session.handle(PointerEvent::Begin(Point2::new(360.0, 300.0)), 0);
    session.handle(PointerEvent::Move(Point2::new(400.0, 300.0)), 0);
    session.handle(PointerEvent::Begin(Point2::new(400.0, 340.0)), 0);

    assert_eq!(session.host().clears, clears + 1);
    assert_eq!(session.stroke_points().len(), 1);
    assert_eq!(session.host().points.len(), 1);
}

#[test]
fn test_unrecognized_stroke() {
    let mut session = session_with(&[("HV", "- |")], sticky());
    session.activate(None);
    draw(&mut session, '-', 0);

    // 4 px: far below the minimum length
    let outcome = draw_line(&mut session, CENTER, 4.0, 0.0, 50);
    assert_eq!(outcome, Some(CastOutcome::Unrecognized));
    assert_eq!(history_of(&session), vec![Horizontal]);
    assert_eq!(session.stats().unrecognized, 1);
    assert!(session.host().points.is_empty());
}

#[test]
fn test_no_projection_is_unrecognized() {
    let mut session = session_with(&[("A", "-")], sticky());
    session.activate(None);
    session.host_mut().blind = true;

    assert_eq!(draw(&mut session, '-', 0), Some(CastOutcome::Unrecognized));
    assert!(session.history().is_empty());
}

#[test]
fn test_nan_pad_extent_still_draws() {
    let config = PadConfig {
        pad_half_extent: f32::NAN,
        ..sticky()
    };
    let mut session = session_with(&[("HV", "- |")], config);
    session.activate(None);
    assert_eq!(draw(&mut session, '-', 0), Some(CastOutcome::Buffered(Horizontal)));
}

// ═══════════════════════════════════════════════════════════════════════════════
// CASTING
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_single_stroke_cast_hides_pad() {
    let mut session = session_with(&[("Spell_H", "-")], PadConfig::new());
    session.activate(None);

    let outcome = draw(&mut session, '-', 100);
    assert_eq!(
        outcome,
        Some(CastOutcome::Cast {
            gesture: Horizontal,
            combo_id: "Spell_H".to_string(),
            effect: EffectToken::from_name("Spell_H"),
            consumed: 1,
        })
    );

    let host = session.host();
    assert_eq!(host.spawned.len(), 1);
    assert_eq!(host.spawned[0].1.position, [0.0, 0.0, 1.0]);
    assert!(host.look_enabled);
    assert_eq!(session.state(), SessionState::Inactive);
    assert!(session.history().is_empty());
    assert_eq!(session.stats().casts, 1);
}

#[test]
fn test_sequence_within_window() {
    let mut session = session_with(&[("HV", "- |")], sticky());
    session.activate(None);

    assert_eq!(draw(&mut session, '-', 0), Some(CastOutcome::Buffered(Horizontal)));
    assert_eq!(session.state(), SessionState::Pending);

    match draw(&mut session, '|', 300) {
        Some(CastOutcome::Cast { combo_id, consumed, .. }) => {
            assert_eq!(combo_id, "HV");
            assert_eq!(consumed, 2);
        }
        other => panic!("expected cast, got {:?}", other),
    }
    assert!(session.history().is_empty());
    assert_eq!(session.state(), SessionState::Ready);
    assert_eq!(session.last_gesture(), Some(Vertical));
}

#[test]
fn test_only_matched_tail_consumed() {
    let mut session = session_with(&[("HV", "- |")], sticky());
    session.activate(None);

    draw(&mut session, '/', 0);
    draw(&mut session, '-', 100);
    draw(&mut session, '|', 200);
    assert_eq!(history_of(&session), vec![Slash]);
}

#[test]
fn test_expired_gesture_cannot_complete_combo() {
    let mut session = session_with(&[("HV", "- |")], sticky());
    session.activate(None);

    draw(&mut session, '-', 0);
    assert_eq!(draw(&mut session, '|', 700), Some(CastOutcome::Buffered(Vertical)));
    assert_eq!(history_of(&session), vec![Vertical]);
    assert_eq!(session.stats().pruned, 1);
    assert!(session.host().spawned.is_empty());
}

#[test]
fn test_timeout_override() {
    let mut session = session_with(&[("HV", "- |")], sticky().with_sequence_timeout(1_000));
    session.activate(None);

    draw(&mut session, '-', 0);
    assert!(matches!(draw(&mut session, '|', 700), Some(CastOutcome::Cast { .. })));
}

#[test]
fn test_tick_expires_buffer() {
    let mut session = session_with(&[("HV", "- |")], sticky());
    session.activate(None);
    draw(&mut session, '-', 0);

    assert_eq!(session.tick(600), 0);
    assert_eq!(session.state(), SessionState::Pending);
    assert_eq!(session.tick(601), 1);
    assert_eq!(session.state(), SessionState::Ready);
    assert_eq!(session.tick(601), 0);
}

#[test]
fn test_effect_anchor_follows_view() {
    let config = sticky().with_effect_distance(2.5);
    let mut session = session_with(&[("A", "|")], config);
    session.activate(None);
    session.host_mut().pose = Some(Pose {
        position: [1.0, 2.0, 3.0],
        ..Pose::IDENTITY
    });

    draw(&mut session, '|', 0);
    let (effect, anchor) = session.host().spawned[0];
    assert_eq!(effect, EffectToken::from_name("A"));
    assert_eq!(anchor.position, [1.0, 2.0, 5.5]);
}

#[test]
fn test_cast_without_view_spawns_nothing() {
    let mut session = session_with(&[("A", "|")], sticky());
    session.activate(None);
    session.host_mut().pose = None;

    assert!(matches!(draw(&mut session, '|', 0), Some(CastOutcome::Cast { .. })));
    assert!(session.host().spawned.is_empty());
    assert!(session.history().is_empty());
}

// ═══════════════════════════════════════════════════════════════════════════════
// WHITELIST
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_unauthorized_match_keeps_buffer() {
    let mut session = session_with(&[("A", "-"), ("B", "- |")], sticky());
    session.activate(Some(Whitelist::only(["B"])));

    assert_eq!(
        draw(&mut session, '-', 0),
        Some(CastOutcome::Unauthorized {
            gesture: Horizontal,
            combo_id: "A".to_string(),
        })
    );
    assert_eq!(history_of(&session), vec![Horizontal]);
    assert!(session.host().spawned.is_empty());

    match draw(&mut session, '|', 100) {
        Some(CastOutcome::Cast { combo_id, consumed, .. }) => {
            assert_eq!(combo_id, "B");
            assert_eq!(consumed, 2);
        }
        other => panic!("expected cast, got {:?}", other),
    }
    assert_eq!(session.stats().unauthorized, 1);
}

#[test]
fn test_empty_whitelist_allows_everything() {
    let mut session = session_with(&[("A", "-")], sticky());
    session.activate(Some(Whitelist::allow_all()));
    assert!(matches!(draw(&mut session, '-', 0), Some(CastOutcome::Cast { .. })));
}
