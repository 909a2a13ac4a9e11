use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};

/// Smooths over platform differences in crossterm's key stream.
///
/// Shift+Tab is reported as `BackTab` everywhere, and only presses survive:
/// Windows consoles also emit releases and auto-repeats, which would
/// otherwise reach window content twice. A held Esc is reported once.
#[derive(Debug, Default)]
pub struct KeyboardNormalizer {
    esc_held: bool,
}

impl KeyboardNormalizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn normalize(&mut self, event: Event) -> Option<Event> {
        let Event::Key(mut key) = event else {
            return Some(event);
        };
        if key.code == KeyCode::Tab && key.modifiers.contains(KeyModifiers::SHIFT) {
            key.code = KeyCode::BackTab;
            key.modifiers.remove(KeyModifiers::SHIFT);
        }
        match key.kind {
            KeyEventKind::Press => {}
            KeyEventKind::Release => {
                if key.code == KeyCode::Esc {
                    self.esc_held = false;
                }
                return None;
            }
            KeyEventKind::Repeat => return None,
        }
        if key.code == KeyCode::Esc {
            if self.esc_held {
                return None;
            }
            self.esc_held = cfg!(windows);
        }
        Some(Event::Key(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;

    fn key(code: KeyCode, modifiers: KeyModifiers, kind: KeyEventKind) -> Event {
        let mut key = KeyEvent::new(code, modifiers);
        key.kind = kind;
        Event::Key(key)
    }

    #[test]
    fn shift_tab_is_back_tab() {
        let mut normalizer = KeyboardNormalizer::new();
        let out = normalizer.normalize(key(KeyCode::Tab, KeyModifiers::SHIFT, KeyEventKind::Press));
        let Some(Event::Key(out)) = out else {
            panic!("expected key event");
        };
        assert_eq!(out.code, KeyCode::BackTab);
        assert!(!out.modifiers.contains(KeyModifiers::SHIFT));
    }

    #[test]
    fn releases_and_repeats_are_dropped() {
        let mut normalizer = KeyboardNormalizer::new();
        for kind in [KeyEventKind::Release, KeyEventKind::Repeat] {
            let out = normalizer.normalize(key(KeyCode::Char('a'), KeyModifiers::NONE, kind));
            assert!(out.is_none());
        }
    }

    #[test]
    fn other_events_pass_through() {
        let mut normalizer = KeyboardNormalizer::new();
        assert_eq!(normalizer.normalize(Event::Resize(10, 20)), Some(Event::Resize(10, 20)));
    }
}
