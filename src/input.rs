//! Input Module - Terminal event conversion
//!
//! Bridges crossterm's event system with the engine's keyboard and
//! pointer vocabulary, for TUI hosts. The engine does not own an event
//! loop or stdin; hosts convert events here and route them into the
//! bindings themselves (hit-testing which item a pointer event targets
//! is the host's job).
//!
//! # API
//!
//! - `convert_key_event` - crossterm KeyEvent to our KeyboardEvent
//! - `convert_pointer_event` - crossterm MouseEvent to our PointerEvent
//!
//! # Example
//!
//! ```ignore
//! use popup_nav::input::convert_key_event;
//! use crossterm::event::{read, Event};
//!
//! if let Ok(Event::Key(key)) = read() {
//!     let event = convert_key_event(key);
//!     floating.on_key_down(&event);
//! }
//! ```

use crossterm::event::{
    KeyCode, KeyEvent as CrosstermKeyEvent, KeyModifiers, MouseEvent as CrosstermMouseEvent,
    MouseEventKind,
};

use crate::events::{KeyState, KeyboardEvent, Modifiers, PointerAction, PointerEvent};

// =============================================================================
// KEY EVENT CONVERSION
// =============================================================================

/// Convert a crossterm KeyEvent to our KeyboardEvent
pub fn convert_key_event(event: CrosstermKeyEvent) -> KeyboardEvent {
    let key = match event.code {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Delete => "Delete".to_string(),
        KeyCode::Esc => "Escape".to_string(),
        KeyCode::Up => "ArrowUp".to_string(),
        KeyCode::Down => "ArrowDown".to_string(),
        KeyCode::Left => "ArrowLeft".to_string(),
        KeyCode::Right => "ArrowRight".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::PageUp => "PageUp".to_string(),
        KeyCode::PageDown => "PageDown".to_string(),
        _ => String::new(),
    };

    let state = match event.kind {
        crossterm::event::KeyEventKind::Press => KeyState::Press,
        crossterm::event::KeyEventKind::Repeat => KeyState::Repeat,
        crossterm::event::KeyEventKind::Release => KeyState::Release,
    };

    KeyboardEvent {
        key,
        modifiers: convert_modifiers(event.modifiers),
        state,
    }
}

// =============================================================================
// POINTER EVENT CONVERSION
// =============================================================================

/// Convert a crossterm MouseEvent to our PointerEvent.
///
/// Returns None for event kinds the navigation engine has no use for
/// (drags, scrolls). Pointer-leave has no terminal equivalent; hosts
/// synthesize it from their own hit-testing.
pub fn convert_pointer_event(event: CrosstermMouseEvent) -> Option<PointerEvent> {
    let action = match event.kind {
        MouseEventKind::Moved => PointerAction::Move,
        MouseEventKind::Down(_) => PointerAction::Down,
        MouseEventKind::Up(_) => PointerAction::Click,
        _ => return None,
    };

    Some(PointerEvent {
        action,
        modifiers: convert_modifiers(event.modifiers),
    })
}

// =============================================================================
// MODIFIER CONVERSION
// =============================================================================

/// Convert crossterm KeyModifiers to our Modifiers
fn convert_modifiers(mods: KeyModifiers) -> Modifiers {
    Modifiers {
        ctrl: mods.contains(KeyModifiers::CONTROL),
        alt: mods.contains(KeyModifiers::ALT),
        shift: mods.contains(KeyModifiers::SHIFT),
        meta: false, // Not exposed by crossterm
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState, MouseButton};

    fn key_event(code: KeyCode, modifiers: KeyModifiers) -> CrosstermKeyEvent {
        CrosstermKeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_convert_arrow_keys() {
        let event = convert_key_event(key_event(KeyCode::Down, KeyModifiers::empty()));
        assert_eq!(event.key, "ArrowDown");
        assert!(event.is_press());

        let event = convert_key_event(key_event(KeyCode::Home, KeyModifiers::empty()));
        assert_eq!(event.key, "Home");
    }

    #[test]
    fn test_convert_char_and_modifiers() {
        let event = convert_key_event(key_event(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(event.key, "c");
        assert!(event.modifiers.ctrl);
        assert!(!event.modifiers.shift);
    }

    #[test]
    fn test_convert_pointer_kinds() {
        let moved = CrosstermMouseEvent {
            kind: MouseEventKind::Moved,
            column: 3,
            row: 2,
            modifiers: KeyModifiers::empty(),
        };
        assert_eq!(
            convert_pointer_event(moved).map(|e| e.action),
            Some(PointerAction::Move)
        );

        let down = CrosstermMouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 3,
            row: 2,
            modifiers: KeyModifiers::empty(),
        };
        assert_eq!(
            convert_pointer_event(down).map(|e| e.action),
            Some(PointerAction::Down)
        );

        let scroll = CrosstermMouseEvent {
            kind: MouseEventKind::ScrollUp,
            column: 3,
            row: 2,
            modifiers: KeyModifiers::empty(),
        };
        assert_eq!(convert_pointer_event(scroll), None);
    }
}
