//! Keyboard stand-ins for the companion phone and the Bluetooth link.

use embedded_graphics_simulator::sdl2::Keycode;

/// What a key press asks the simulator to do.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum KeyAction {
    /// Send a configuration message carrying this mode string.
    SendMode(&'static str),
    ToggleBluetooth,
    ToggleClockStyle,
    Quit,
}

/// Action bound to `keycode`, if any.
pub fn key_action(keycode: Keycode) -> Option<KeyAction> {
    let action = match keycode {
        Keycode::NUM_0 | Keycode::KP_0 => KeyAction::SendMode("0"),
        Keycode::NUM_1 | Keycode::KP_1 => KeyAction::SendMode("1"),
        Keycode::NUM_2 | Keycode::KP_2 => KeyAction::SendMode("2"),
        // Out of range: the face must ignore it
        Keycode::NUM_5 | Keycode::KP_5 => KeyAction::SendMode("5"),
        Keycode::B => KeyAction::ToggleBluetooth,
        Keycode::T => KeyAction::ToggleClockStyle,
        Keycode::ESCAPE => KeyAction::Quit,
        _ => return None,
    };
    Some(action)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_keys() {
        assert_eq!(key_action(Keycode::NUM_0), Some(KeyAction::SendMode("0")));
        assert_eq!(key_action(Keycode::NUM_1), Some(KeyAction::SendMode("1")));
        assert_eq!(key_action(Keycode::KP_2), Some(KeyAction::SendMode("2")));
        assert_eq!(key_action(Keycode::NUM_5), Some(KeyAction::SendMode("5")));
    }

    #[test]
    fn test_toggles_and_quit() {
        assert_eq!(key_action(Keycode::B), Some(KeyAction::ToggleBluetooth));
        assert_eq!(key_action(Keycode::T), Some(KeyAction::ToggleClockStyle));
        assert_eq!(key_action(Keycode::ESCAPE), Some(KeyAction::Quit));
    }

    #[test]
    fn test_unbound_keys() {
        assert_eq!(key_action(Keycode::NUM_3), None);
        assert_eq!(key_action(Keycode::SPACE), None);
        assert_eq!(key_action(Keycode::X), None);
    }
}
