//! Terminal input → [`UiEvent`] translation.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use mklookup_engine::{Focus, UiEvent, UiState};

use super::layout::{Hit, ScreenLayout};

const PAGE: i32 = 10;

pub fn map_key(key: KeyEvent, state: &UiState) -> Option<UiEvent> {
    // Only handle key press events, not release
    if key.kind != KeyEventKind::Press {
        return None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let shift = key.modifiers.contains(KeyModifiers::SHIFT);

    if state.confirm.is_some() {
        return match key.code {
            KeyCode::Char('c') if ctrl => Some(UiEvent::Quit),
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                Some(UiEvent::ConfirmGenerate)
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                Some(UiEvent::CancelGenerate)
            }
            _ => None,
        };
    }

    if ctrl {
        return match key.code {
            KeyCode::Char('c') => Some(UiEvent::Quit),
            KeyCode::Char('g') => Some(UiEvent::RequestGenerate),
            KeyCode::Char('r') => Some(UiEvent::ToggleRawData),
            KeyCode::Char('o') => Some(UiEvent::ToggleCorporate),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Esc => return Some(UiEvent::Quit),
        KeyCode::Tab => return Some(UiEvent::FocusNext),
        KeyCode::BackTab => return Some(UiEvent::FocusPrev),
        _ => {}
    }

    match state.focus {
        Focus::Input => match key.code {
            KeyCode::Enter => Some(UiEvent::SubmitSearch),
            KeyCode::Char(c) => Some(UiEvent::InputChar(c)),
            KeyCode::Backspace => Some(UiEvent::InputBackspace),
            KeyCode::Delete => Some(UiEvent::InputDelete),
            KeyCode::Left => Some(UiEvent::CursorLeft),
            KeyCode::Right => Some(UiEvent::CursorRight),
            KeyCode::Home => Some(UiEvent::CursorHome),
            KeyCode::End => Some(UiEvent::CursorEnd),
            _ => None,
        },
        Focus::Details => match key.code {
            KeyCode::Up if shift => Some(UiEvent::MoveRowUp),
            KeyCode::Down if shift => Some(UiEvent::MoveRowDown),
            KeyCode::Char('K') => Some(UiEvent::MoveRowUp),
            KeyCode::Char('J') => Some(UiEvent::MoveRowDown),
            KeyCode::Up | KeyCode::Char('k') => Some(UiEvent::SelectPrevRow),
            KeyCode::Down | KeyCode::Char('j') => Some(UiEvent::SelectNextRow),
            KeyCode::PageUp => Some(UiEvent::ScrollDetails(-PAGE)),
            KeyCode::PageDown => Some(UiEvent::ScrollDetails(PAGE)),
            _ => None,
        },
        Focus::Corporate | Focus::Search | Focus::Generate | Focus::RawToggle => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => Some(UiEvent::Activate),
            _ => None,
        },
    }
}

pub fn map_mouse(mouse: MouseEvent, layout: &ScreenLayout, state: &UiState) -> Vec<UiEvent> {
    let (x, y) = (mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => match layout.hit_test(x, y) {
            Some(Hit::DialogYes) => vec![UiEvent::ConfirmGenerate],
            Some(Hit::DialogNo) => vec![UiEvent::CancelGenerate],
            Some(Hit::Control(Focus::Input)) => vec![UiEvent::Focus(Focus::Input)],
            Some(Hit::Control(focus)) => vec![UiEvent::Focus(focus), UiEvent::Activate],
            Some(Hit::Details) => vec![UiEvent::Focus(Focus::Details), UiEvent::DragStart { y }],
            None => Vec::new(),
        },
        MouseEventKind::Drag(MouseButton::Left) if state.drag.is_some() => {
            vec![UiEvent::DragMove { y }]
        }
        MouseEventKind::Up(MouseButton::Left) if state.drag.is_some() => vec![UiEvent::DragEnd],
        MouseEventKind::ScrollUp if layout.in_details(x, y) => vec![UiEvent::ScrollDetails(-1)],
        MouseEventKind::ScrollDown if layout.in_details(x, y) => vec![UiEvent::ScrollDetails(1)],
        _ => Vec::new(),
    }
}
