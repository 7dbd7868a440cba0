//! 键盘事件映射 (Input -> Action)
//!
//! 将按键事件转换为 Action

use std::io;
use std::time::Instant;

use crossterm::event::KeyCode;

use super::actions::Action;
use super::state::App;

/// 根据按键获取对应的 Action
pub fn get_action(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Esc => Some(Action::Quit),
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => Some(Action::SwitchFocus),
        KeyCode::Enter => Some(Action::Submit),
        KeyCode::Backspace => Some(Action::DeleteChar),
        KeyCode::Char(c) => Some(Action::Input(c)),
        _ => None,
    }
}

/// 处理按键事件
pub fn handle_key_event(app: &mut App, key: KeyCode, now: Instant) -> io::Result<bool> {
    if let Some(action) = get_action(key) {
        Ok(app.dispatch(action, now))
    } else {
        Ok(false)
    }
}
