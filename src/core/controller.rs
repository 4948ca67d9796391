/// Logical input button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    KeyW,
    KeyA,
    KeyS,
    KeyD,
    Escape,
}

/// Input event already mapped to logical identities
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Key { button: Button, pressed: bool },
    /// Absolute pointer coordinates in window space
    Pointer { x: f32, y: f32 },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_button_hash() {
        let mut set = HashSet::new();
        set.insert(Button::KeyW);
        set.insert(Button::KeyA);
        set.insert(Button::KeyW);

        assert!(set.contains(&Button::KeyW));
        assert!(!set.contains(&Button::KeyS));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn key_events_compare_by_button_and_state() {
        let press = InputEvent::Key { button: Button::KeyD, pressed: true };
        assert_eq!(press, InputEvent::Key { button: Button::KeyD, pressed: true });
        assert_ne!(press, InputEvent::Key { button: Button::KeyD, pressed: false });
        assert_ne!(press, InputEvent::Pointer { x: 0.0, y: 0.0 });
    }
}
