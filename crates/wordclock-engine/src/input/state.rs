use std::collections::HashSet;

use super::frame::InputFrame;
use super::types::{InputEvent, Key, KeyState, Modifiers};

/// Current keyboard state for a single window.
#[derive(Debug, Default)]
pub struct InputState {
    pub modifiers: Modifiers,
    pub focused: bool,
    pub keys_down: HashSet<Key>,
}

impl InputState {
    /// Applies an event to the current state and records deltas in `frame`.
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: InputEvent) {
        match &ev {
            InputEvent::ModifiersChanged(m) => {
                self.modifiers = *m;
            }

            InputEvent::Focused(f) => {
                self.focused = *f;
                if !*f {
                    // Releases are not delivered to unfocused windows.
                    self.keys_down.clear();
                }
            }

            InputEvent::Key { key, state, modifiers, .. } => {
                self.modifiers = *modifiers;

                match state {
                    KeyState::Pressed => {
                        if self.keys_down.insert(*key) {
                            frame.keys_pressed.insert(*key);
                        }
                    }
                    KeyState::Released => {
                        if self.keys_down.remove(key) {
                            frame.keys_released.insert(*key);
                        }
                    }
                }
            }
        }

        frame.push_event(ev);
    }

    pub fn key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(key: Key, state: KeyState) -> InputEvent {
        InputEvent::Key { key, state, modifiers: Modifiers::default(), repeat: false }
    }

    #[test]
    fn press_and_release_are_recorded_once() {
        let mut st = InputState::default();
        let mut fr = InputFrame::default();

        st.apply_event(&mut fr, key(Key::Escape, KeyState::Pressed));
        st.apply_event(&mut fr, key(Key::Escape, KeyState::Pressed));
        assert!(st.key_down(Key::Escape));
        assert!(fr.pressed(Key::Escape));
        assert_eq!(fr.keys_pressed.len(), 1);
        assert_eq!(fr.events.len(), 2);

        fr.clear();
        st.apply_event(&mut fr, key(Key::Escape, KeyState::Released));
        assert!(!st.key_down(Key::Escape));
        assert!(fr.keys_released.contains(&Key::Escape));
        assert!(!fr.pressed(Key::Escape));
    }

    #[test]
    fn focus_loss_clears_held_keys() {
        let mut st = InputState::default();
        let mut fr = InputFrame::default();
        st.apply_event(&mut fr, key(Key::Q, KeyState::Pressed));
        st.apply_event(&mut fr, InputEvent::Focused(false));
        assert!(!st.key_down(Key::Q));
        assert!(!st.focused);
    }

    #[test]
    fn key_events_carry_modifiers() {
        let mut st = InputState::default();
        let mut fr = InputFrame::default();
        let ctrl = Modifiers { ctrl: true, ..Modifiers::default() };
        st.apply_event(
            &mut fr,
            InputEvent::Key { key: Key::Q, state: KeyState::Pressed, modifiers: ctrl, repeat: false },
        );
        assert_eq!(st.modifiers, ctrl);
        assert!(st.modifiers.any());
    }
}
