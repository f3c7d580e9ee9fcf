//! Integration test modules.

mod feedback_mock;
mod touch_hud_test;
