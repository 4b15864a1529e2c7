use crossterm::event::{Event, KeyCode, KeyEventKind};

/// Takes an event, checks if it is a key press event, and returns the [`KeyCode`]
pub(super) fn event_keycode(event: &Event) -> Option<KeyCode> {
    let Event::Key(key) = event else {
        return None;
    };

    if key.kind != KeyEventKind::Press {
        return None;
    }

    Some(key.code)
}

/// Whether an event closes the figure
pub(super) fn is_dismiss(event: &Event) -> bool {
    matches!(
        event_keycode(event),
        Some(KeyCode::Char('q') | KeyCode::Esc | KeyCode::Enter)
    )
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEvent, KeyEventState, KeyModifiers};

    use super::*;

    fn key(code: KeyCode, kind: KeyEventKind) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        })
    }

    #[test]
    fn dismiss_keys() {
        assert!(is_dismiss(&key(KeyCode::Char('q'), KeyEventKind::Press)));
        assert!(is_dismiss(&key(KeyCode::Esc, KeyEventKind::Press)));
        assert!(is_dismiss(&key(KeyCode::Enter, KeyEventKind::Press)));
        assert!(!is_dismiss(&key(KeyCode::Char('x'), KeyEventKind::Press)));
    }

    #[test]
    fn releases_and_resizes_are_ignored() {
        assert!(!is_dismiss(&key(KeyCode::Char('q'), KeyEventKind::Release)));
        assert!(!is_dismiss(&Event::Resize(80, 24)));
    }
}
