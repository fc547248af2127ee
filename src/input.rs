use raylib::prelude::*;

use crate::layout::Layout;
use crate::render::Frame;
use crate::state::Command;

/// Keys that keep navigating while held down.
pub const REPEAT_KEYS: [KeyboardKey; 3] = [KeyboardKey::KEY_RIGHT, KeyboardKey::KEY_SPACE, KeyboardKey::KEY_LEFT];

pub fn key_command(key: KeyboardKey) -> Option<Command> {
    match key {
        KeyboardKey::KEY_RIGHT | KeyboardKey::KEY_SPACE => Some(Command::Next),
        KeyboardKey::KEY_LEFT => Some(Command::Previous),
        KeyboardKey::KEY_HOME => Some(Command::First),
        KeyboardKey::KEY_END => Some(Command::Last),
        _ => None,
    }
}

/// Command for a click at `point`. Disabled buttons swallow the click.
pub fn click_command(point: Vector2, layout: &Layout, frame: &Frame) -> Option<Command> {
    if layout.previous_button.check_collision_point_rec(point) {
        frame.previous_enabled.then_some(Command::Previous)
    } else if layout.next_button.check_collision_point_rec(point) {
        frame.next_enabled.then_some(Command::Next)
    } else {
        None
    }
}
