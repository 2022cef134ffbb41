// Event Handling
// Application event types and handler infrastructure

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent};

/// Application events that can be handled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Quit the application
    Quit,

    /// Select the tab to the left (wraps)
    NavigatePrevious,

    /// Select the tab to the right (wraps)
    NavigateNext,

    /// Select a tab by its 1-based number key
    Activate(usize),

    /// Move the underline between the top and bottom edge
    ToggleUnderline,

    /// Step through the background modes
    CycleBackground,

    /// Mouse input for the tab bar's press/drag/release gesture
    Mouse(MouseEvent),

    /// Terminal was resized
    Resize,

    /// No operation
    None,
}

/// Event handler that converts terminal events to application events
pub struct EventHandler;

impl EventHandler {
    /// Convert a crossterm event to an application event
    pub fn handle(event: Event) -> AppEvent {
        match event {
            Event::Key(key) => Self::handle_key(key),
            Event::Mouse(mouse) => AppEvent::Mouse(mouse),
            Event::Resize(_, _) => AppEvent::Resize,
            _ => AppEvent::None,
        }
    }

    /// Handle keyboard events
    fn handle_key(key: KeyEvent) -> AppEvent {
        // Only handle key press events
        if key.kind != KeyEventKind::Press {
            return AppEvent::None;
        }

        match key.code {
            // Quit
            KeyCode::Char('q') => AppEvent::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => AppEvent::Quit,

            // Navigation
            KeyCode::Left | KeyCode::Char('h') => AppEvent::NavigatePrevious,
            KeyCode::Right | KeyCode::Char('l') => AppEvent::NavigateNext,
            KeyCode::Char(digit @ '1'..='9') => {
                AppEvent::Activate(digit as usize - '0' as usize)
            }

            // Styling toggles
            KeyCode::Char('u') => AppEvent::ToggleUnderline,
            KeyCode::Char('b') => AppEvent::CycleBackground,

            _ => AppEvent::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, MouseButton, MouseEventKind};

    fn key(code: KeyCode, modifiers: KeyModifiers, kind: KeyEventKind) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind,
            state: KeyEventState::NONE,
        })
    }

    fn press(code: KeyCode) -> Event {
        key(code, KeyModifiers::NONE, KeyEventKind::Press)
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(EventHandler::handle(press(KeyCode::Left)), AppEvent::NavigatePrevious);
        assert_eq!(EventHandler::handle(press(KeyCode::Char('h'))), AppEvent::NavigatePrevious);
        assert_eq!(EventHandler::handle(press(KeyCode::Right)), AppEvent::NavigateNext);
        assert_eq!(EventHandler::handle(press(KeyCode::Char('l'))), AppEvent::NavigateNext);
    }

    #[test]
    fn test_number_keys_activate() {
        assert_eq!(EventHandler::handle(press(KeyCode::Char('1'))), AppEvent::Activate(1));
        assert_eq!(EventHandler::handle(press(KeyCode::Char('9'))), AppEvent::Activate(9));
        assert_eq!(EventHandler::handle(press(KeyCode::Char('0'))), AppEvent::None);
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(EventHandler::handle(press(KeyCode::Char('q'))), AppEvent::Quit);
        let ctrl_c = key(KeyCode::Char('c'), KeyModifiers::CONTROL, KeyEventKind::Press);
        assert_eq!(EventHandler::handle(ctrl_c), AppEvent::Quit);
        assert_eq!(EventHandler::handle(press(KeyCode::Char('c'))), AppEvent::None);
    }

    #[test]
    fn test_key_release_ignored() {
        let release = key(KeyCode::Char('q'), KeyModifiers::NONE, KeyEventKind::Release);
        assert_eq!(EventHandler::handle(release), AppEvent::None);
    }

    #[test]
    fn test_mouse_passed_through() {
        let mouse = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 4,
            row: 2,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(EventHandler::handle(Event::Mouse(mouse)), AppEvent::Mouse(mouse));
    }
}
