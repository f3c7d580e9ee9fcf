//! End-to-end tests from raw touch and button input to host effects.

use super::feedback_mock::RecordingFeedback;
use touchhud::audio::FeedbackCategory;
use touchhud::hud::{ButtonId, DispatchStatus, Entity, InputId, PanelName, TouchHud};
use touchhud::input::{Gesture, SwipeDirection, TouchEvent, TouchSample};
use touchhud::replay::ScriptedHost;
use touchhud::HudConfig;

fn touch(phase: &str, id: u64, x: f32, y: f32, t: u64) -> TouchEvent {
    let sample = TouchSample::new(x, y, t);
    match phase {
        "start" => TouchEvent::Start { id, sample },
        "move" => TouchEvent::Move { id, sample },
        _ => TouchEvent::End { id, sample },
    }
}

fn audio_only() -> HudConfig {
    HudConfig {
        haptic_feedback: false,
        ..Default::default()
    }
}

#[test]
fn test_swipe_left_advances_panel() {
    let feedback = RecordingFeedback::new();
    let mut hud = TouchHud::new(&audio_only(), feedback.boxed()).unwrap();
    let mut host = ScriptedHost::default();
    let mut ctx = host.context();

    assert_eq!(hud.active_panel(), PanelName::Main);
    assert!(hud
        .handle_touch(&mut ctx, touch("start", 1, 100.0, 100.0, 0))
        .is_none());
    let event = hud
        .handle_touch(&mut ctx, touch("end", 1, 40.0, 102.0, 50))
        .unwrap();

    assert!(event.is_success());
    assert_eq!(event.command_kind, "switch_panel");
    assert_eq!(event.payload["direction"], "left");
    assert_eq!(hud.active_panel(), PanelName::Spells);
    assert_eq!(feedback.tones().len(), 1);
    assert_eq!(feedback.count(FeedbackCategory::Swipe), 1);
}

#[test]
fn test_swipe_right_retreats_panel() {
    let feedback = RecordingFeedback::new();
    let mut hud = TouchHud::new(&audio_only(), feedback.boxed()).unwrap();
    let mut host = ScriptedHost::default();
    let mut ctx = host.context();

    hud.handle_touch(&mut ctx, touch("start", 4, 10.0, 300.0, 0));
    hud.handle_touch(&mut ctx, touch("move", 4, 90.0, 310.0, 20));
    hud.handle_touch(&mut ctx, touch("end", 4, 140.0, 305.0, 40));

    assert_eq!(hud.active_panel(), PanelName::Settings);
}

#[test]
fn test_vertical_swipe_and_tap_do_nothing() {
    let feedback = RecordingFeedback::new();
    let mut hud = TouchHud::new(&HudConfig::default(), feedback.boxed()).unwrap();
    let mut host = ScriptedHost::default();
    let mut ctx = host.context();

    hud.handle_touch(&mut ctx, touch("start", 1, 100.0, 100.0, 0));
    let up = hud
        .handle_touch(&mut ctx, touch("end", 1, 100.0, 0.0, 30))
        .unwrap();
    hud.handle_touch(&mut ctx, touch("start", 2, 100.0, 100.0, 100));
    let tap = hud
        .handle_touch(&mut ctx, touch("end", 2, 103.0, 98.0, 130))
        .unwrap();

    assert_eq!(up.status, DispatchStatus::Ignored);
    assert_eq!(tap.status, DispatchStatus::Ignored);
    assert_eq!(hud.active_panel(), PanelName::Main);
    assert!(feedback.tones().is_empty());
    assert!(feedback.pulses().is_empty());
}

#[test]
fn test_concurrent_touch_ignored() {
    let mut hud = TouchHud::new(&HudConfig::default(), None).unwrap();
    let mut host = ScriptedHost::default();
    let mut ctx = host.context();

    hud.handle_touch(&mut ctx, touch("start", 1, 0.0, 0.0, 0));
    // Second finger swipes hard while the first stays put
    hud.handle_touch(&mut ctx, touch("start", 2, 300.0, 0.0, 5));
    assert!(hud
        .handle_touch(&mut ctx, touch("end", 2, 0.0, 0.0, 20))
        .is_none());

    let event = hud
        .handle_touch(&mut ctx, touch("end", 1, 2.0, 1.0, 30))
        .unwrap();
    assert_eq!(event.status, DispatchStatus::Ignored);
    assert_eq!(hud.active_panel(), PanelName::Main);
}

#[test]
fn test_custom_threshold_from_config() {
    let config = HudConfig {
        swipe_threshold_px: 120.0,
        ..Default::default()
    };
    let mut hud = TouchHud::new(&config, None).unwrap();
    let mut host = ScriptedHost::default();
    let mut ctx = host.context();

    hud.handle_touch(&mut ctx, touch("start", 1, 200.0, 0.0, 0));
    hud.handle_touch(&mut ctx, touch("end", 1, 100.0, 0.0, 10));
    assert_eq!(hud.active_panel(), PanelName::Main);

    hud.handle_touch(&mut ctx, touch("start", 1, 200.0, 0.0, 20));
    hud.handle_touch(&mut ctx, touch("end", 1, 50.0, 0.0, 30));
    assert_eq!(hud.active_panel(), PanelName::Spells);
}

#[test]
fn test_buttons_and_tabs() {
    let feedback = RecordingFeedback::new();
    let mut hud = TouchHud::new(&HudConfig::default(), feedback.boxed()).unwrap();
    let mut host = ScriptedHost::with_selection(Entity::new("Cleric", 0.0, 0.0), 50.0);

    {
        let mut ctx = host.context();
        let moved = hud.handle_button(&mut ctx, "move-right").unwrap();
        assert!(moved.is_success());

        let tab = hud.handle_tab(&mut ctx, "inventory").unwrap();
        assert!(tab.is_success());

        let unknown = hud.handle_button(&mut ctx, "teleport").unwrap();
        assert_eq!(unknown.status, DispatchStatus::Ignored);
    }

    assert_eq!(host.board.selected.as_ref().unwrap().x, 50.0);
    assert_eq!(hud.active_panel(), PanelName::Inventory);
    assert_eq!(feedback.count(FeedbackCategory::Click), 2);
    // One haptic pulse per successful action
    assert_eq!(feedback.pulses().len(), 2);
}

#[test]
fn test_tab_then_swipe_continues_from_tab() {
    let mut hud = TouchHud::new(&HudConfig::default(), None).unwrap();
    let mut host = ScriptedHost::default();
    let mut ctx = host.context();

    hud.handle_tab(&mut ctx, "settings");
    hud.handle_touch(&mut ctx, touch("start", 9, 300.0, 300.0, 0));
    hud.handle_touch(&mut ctx, touch("end", 9, 200.0, 300.0, 10));

    assert_eq!(hud.active_panel(), PanelName::Main);
}

#[test]
fn test_audio_disabled_keeps_dispatch() {
    let feedback = RecordingFeedback::new();
    let config = HudConfig {
        audio_feedback: false,
        haptic_feedback: false,
        ..Default::default()
    };
    let mut hud = TouchHud::new(&config, feedback.boxed()).unwrap();
    let mut host = ScriptedHost::default();

    let event = hud.handle_button(&mut host.context(), "toggle-menu").unwrap();

    assert!(event.is_success());
    assert!(host.screen.sidebar_open);
    assert!(feedback.tones().is_empty());
}

#[test]
fn test_disabled_hud_ignores_typed_input() {
    let config = HudConfig {
        enabled: false,
        ..Default::default()
    };
    let feedback = RecordingFeedback::new();
    let mut hud = TouchHud::new(&config, feedback.boxed()).unwrap();
    let mut host = ScriptedHost::default();

    {
        let mut ctx = host.context();
        assert!(hud
            .handle_input(&mut ctx, InputId::Button(ButtonId::ToggleMenu))
            .is_none());
        assert!(hud
            .handle_gesture(&mut ctx, Gesture::Swipe(SwipeDirection::Left))
            .is_none());
        assert!(hud
            .handle_input(&mut ctx, InputId::Tab(PanelName::Settings))
            .is_none());
    }

    assert!(!host.screen.sidebar_open);
    assert_eq!(hud.active_panel(), PanelName::Main);
    assert!(feedback.tones().is_empty());
}

#[test]
fn test_typed_input_dispatches_when_enabled() {
    let mut hud = TouchHud::new(&HudConfig::default(), None).unwrap();
    let mut host = ScriptedHost::default();

    {
        let mut ctx = host.context();
        let toggle = hud
            .handle_input(&mut ctx, InputId::Button(ButtonId::ToggleMenu))
            .unwrap();
        assert!(toggle.is_success());

        let swipe = hud
            .handle_gesture(&mut ctx, Gesture::Swipe(SwipeDirection::Left))
            .unwrap();
        assert_eq!(swipe.payload["panel"], "spells");
    }

    assert!(host.screen.sidebar_open);
    assert_eq!(hud.active_panel(), PanelName::Spells);
}

#[test]
fn test_invalid_threshold_cannot_turn_taps_into_swipes() {
    let config = HudConfig {
        swipe_threshold_px: -5.0,
        ..Default::default()
    };
    assert!(TouchHud::new(&config, None).is_err());

    // A valid HUD still classifies a stationary touch as a tap
    let mut hud = TouchHud::new(&HudConfig::default(), None).unwrap();
    let mut host = ScriptedHost::default();
    let mut ctx = host.context();

    hud.handle_touch(&mut ctx, touch("start", 1, 10.0, 10.0, 0));
    let event = hud
        .handle_touch(&mut ctx, touch("end", 1, 10.0, 10.0, 10))
        .unwrap();

    assert_eq!(event.status, DispatchStatus::Ignored);
    assert_eq!(hud.active_panel(), PanelName::Main);
}
