use crossterm::event::{
    self, Event, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};
use std::time::Duration;

/// TUI-specific input events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    // Core actions (passed to core::update)
    Quit,
    NextPage,
    PrevPage,
    Reload,

    // TUI-local events (handled directly in TUI)
    CursorUp,
    CursorDown,
    ScrollPageUp,
    ScrollPageDown,
    ScrollToTop,
    ScrollToBottom,
    Submit,
    Escape,
    ToggleFocus,
    ToggleSidebar,
    NextCodeBlock,
    PrevCodeBlock,
    CopyCodeBlock,
    ToggleLineNumbers,
    MouseClick(u16, u16),
    ScrollUp,
    ScrollDown,
    Resize,
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(Duration::ZERO)
}

pub fn poll_event_timeout(timeout: Duration) -> Option<TuiEvent> {
    if !event::poll(timeout).ok()? {
        return None;
    }
    match event::read().ok()? {
        Event::Key(key_event) => {
            if key_event.kind == KeyEventKind::Release {
                return None;
            }
            log::debug!("Key event: {:?} with modifiers {:?}", key_event.code, key_event.modifiers);
            map_key(key_event.modifiers, key_event.code)
        }
        Event::Mouse(mouse_event) => match mouse_event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                Some(TuiEvent::MouseClick(mouse_event.column, mouse_event.row))
            }
            MouseEventKind::ScrollUp => Some(TuiEvent::ScrollUp),
            MouseEventKind::ScrollDown => Some(TuiEvent::ScrollDown),
            _ => None,
        },
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

fn map_key(modifiers: KeyModifiers, code: KeyCode) -> Option<TuiEvent> {
    match (modifiers, code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::Quit),
        (_, KeyCode::Char('q')) => Some(TuiEvent::Quit),
        (_, KeyCode::Char(']')) => Some(TuiEvent::NextPage),
        (_, KeyCode::Char('[')) => Some(TuiEvent::PrevPage),
        (_, KeyCode::Char('r')) => Some(TuiEvent::Reload),
        (_, KeyCode::Char('m')) => Some(TuiEvent::ToggleSidebar),
        (_, KeyCode::Char('n')) => Some(TuiEvent::NextCodeBlock),
        (_, KeyCode::Char('N')) => Some(TuiEvent::PrevCodeBlock),
        (_, KeyCode::Char('y')) => Some(TuiEvent::CopyCodeBlock),
        (_, KeyCode::Char('l')) => Some(TuiEvent::ToggleLineNumbers),
        (_, KeyCode::Char('k')) | (_, KeyCode::Up) => Some(TuiEvent::CursorUp),
        (_, KeyCode::Char('j')) | (_, KeyCode::Down) => Some(TuiEvent::CursorDown),
        (_, KeyCode::Char('g')) | (_, KeyCode::Home) => Some(TuiEvent::ScrollToTop),
        (_, KeyCode::Char('G')) | (_, KeyCode::End) => Some(TuiEvent::ScrollToBottom),
        (_, KeyCode::PageUp) => Some(TuiEvent::ScrollPageUp),
        (_, KeyCode::PageDown) | (_, KeyCode::Char(' ')) => Some(TuiEvent::ScrollPageDown),
        (_, KeyCode::Tab) => Some(TuiEvent::ToggleFocus),
        (_, KeyCode::Enter) => Some(TuiEvent::Submit),
        (_, KeyCode::Esc) => Some(TuiEvent::Escape),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ctrl_c_and_q_quit() {
        assert_eq!(map_key(KeyModifiers::CONTROL, KeyCode::Char('c')), Some(TuiEvent::Quit));
        assert_eq!(map_key(KeyModifiers::NONE, KeyCode::Char('q')), Some(TuiEvent::Quit));
    }

    #[test]
    fn shifted_n_cycles_backwards() {
        assert_eq!(map_key(KeyModifiers::SHIFT, KeyCode::Char('N')), Some(TuiEvent::PrevCodeBlock));
        assert_eq!(map_key(KeyModifiers::NONE, KeyCode::Char('n')), Some(TuiEvent::NextCodeBlock));
    }

    #[test]
    fn unmapped_keys_are_ignored() {
        assert_eq!(map_key(KeyModifiers::NONE, KeyCode::Char('z')), None);
        assert_eq!(map_key(KeyModifiers::NONE, KeyCode::F(5)), None);
    }
}
