//! Keyboard bindings configuration.
//!
//! The defaults can be extended from the `[keybindings]` table of the config
//! file, which maps key specs such as `"ctrl+f"` or `"pagedown"` to action
//! names such as `"page_down"` or `"section_3"`.

use super::loader::ConfigError;
use crate::model::key_action::KeyAction;
use crate::model::SectionId;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::{BTreeMap, HashMap};

/// Maps keyboard events to domain actions.
///
/// Provides default vim-style bindings.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings.get(&key).copied()
    }

    /// Default bindings plus `overrides` (key spec to action name).
    ///
    /// An override replaces whatever the key was bound to before.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidKeyBinding`] for an unparsable key spec
    /// or an unknown action name.
    pub fn with_overrides(overrides: &BTreeMap<String, String>) -> Result<Self, ConfigError> {
        let mut keys = Self::default();

        for (spec, action_name) in overrides {
            let key = parse_key(spec).ok_or_else(|| ConfigError::InvalidKeyBinding {
                key: spec.clone(),
                reason: "unrecognized key".to_string(),
            })?;
            let action = parse_action(action_name).ok_or_else(|| ConfigError::InvalidKeyBinding {
                key: spec.clone(),
                reason: format!("unknown action '{}'", action_name),
            })?;

            keys.bindings.insert(key, action);
            // Terminals report uppercase letters with or without SHIFT.
            if let KeyCode::Char(c) = key.code {
                if c.is_ascii_uppercase() && key.modifiers == KeyModifiers::NONE {
                    keys.bindings
                        .insert(KeyEvent::new(key.code, KeyModifiers::SHIFT), action);
                }
            }
        }

        Ok(keys)
    }
}

/// Parse a key spec: optional `ctrl+`, `alt+`, `shift+` prefixes followed by
/// a single character or a key name (`up`, `pagedown`, `tab`, `f5`, ...).
pub fn parse_key(spec: &str) -> Option<KeyEvent> {
    let mut parts: Vec<&str> = spec.split('+').collect();
    // "ctrl++" binds the plus key.
    if spec.ends_with("++") {
        parts.truncate(parts.len().saturating_sub(2));
        parts.push("+");
    }
    let (name, prefixes) = parts.split_last()?;

    let mut modifiers = KeyModifiers::NONE;
    for prefix in prefixes {
        modifiers |= match prefix.to_ascii_lowercase().as_str() {
            "ctrl" | "control" => KeyModifiers::CONTROL,
            "alt" => KeyModifiers::ALT,
            "shift" => KeyModifiers::SHIFT,
            _ => return None,
        };
    }

    let mut chars = name.chars();
    let code = match (chars.next(), chars.next()) {
        (Some(c), None) => KeyCode::Char(c),
        _ => match name.to_ascii_lowercase().as_str() {
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            "home" => KeyCode::Home,
            "end" => KeyCode::End,
            "pageup" => KeyCode::PageUp,
            "pagedown" => KeyCode::PageDown,
            "tab" => KeyCode::Tab,
            "backtab" => KeyCode::BackTab,
            "enter" => KeyCode::Enter,
            "space" => KeyCode::Char(' '),
            "backspace" => KeyCode::Backspace,
            lower => {
                let n: u8 = lower.strip_prefix('f')?.parse().ok()?;
                if !(1..=12).contains(&n) {
                    return None;
                }
                KeyCode::F(n)
            }
        },
    };

    Some(KeyEvent::new(code, modifiers))
}

/// Parse an action name as used in the `[keybindings]` table.
pub fn parse_action(name: &str) -> Option<KeyAction> {
    let action = match name {
        "scroll_up" => KeyAction::ScrollUp,
        "scroll_down" => KeyAction::ScrollDown,
        "page_up" => KeyAction::PageUp,
        "page_down" => KeyAction::PageDown,
        "scroll_to_top" => KeyAction::ScrollToTop,
        "scroll_to_bottom" => KeyAction::ScrollToBottom,
        "next_section" => KeyAction::NextSection,
        "prev_section" => KeyAction::PrevSection,
        "quit" => KeyAction::Quit,
        "help" => KeyAction::Help,
        other => {
            let n: usize = other.strip_prefix("section_")?.parse().ok()?;
            if n == 0 || n > SectionId::ALL.len() {
                return None;
            }
            KeyAction::JumpToSection(n - 1)
        }
    };
    Some(action)
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = HashMap::new();

        // Vim-style scrolling
        bindings.insert(
            KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE),
            KeyAction::ScrollDown,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('k'), KeyModifiers::NONE),
            KeyAction::ScrollUp,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('g'), KeyModifiers::NONE),
            KeyAction::ScrollToTop,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT),
            KeyAction::ScrollToBottom,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('G'), KeyModifiers::NONE),
            KeyAction::ScrollToBottom,
        );

        // Arrow key scrolling
        bindings.insert(
            KeyEvent::new(KeyCode::Up, KeyModifiers::NONE),
            KeyAction::ScrollUp,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Down, KeyModifiers::NONE),
            KeyAction::ScrollDown,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Home, KeyModifiers::NONE),
            KeyAction::ScrollToTop,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::End, KeyModifiers::NONE),
            KeyAction::ScrollToBottom,
        );

        // Page navigation
        bindings.insert(
            KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL),
            KeyAction::PageDown,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL),
            KeyAction::PageUp,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::PageDown, KeyModifiers::NONE),
            KeyAction::PageDown,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::PageUp, KeyModifiers::NONE),
            KeyAction::PageUp,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE),
            KeyAction::PageDown,
        );

        // Section navigation
        bindings.insert(
            KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE),
            KeyAction::NextSection,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT),
            KeyAction::PrevSection,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('n'), KeyModifiers::NONE),
            KeyAction::NextSection,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('p'), KeyModifiers::NONE),
            KeyAction::PrevSection,
        );

        // Direct section selection (1 = first section)
        for id in SectionId::ALL {
            if let Some(digit) = char::from_digit(id.index() as u32 + 1, 10) {
                bindings.insert(
                    KeyEvent::new(KeyCode::Char(digit), KeyModifiers::NONE),
                    KeyAction::JumpToSection(id.index()),
                );
            }
        }

        // Application controls
        bindings.insert(
            KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE),
            KeyAction::Quit,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('?'), KeyModifiers::NONE),
            KeyAction::Help,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('?'), KeyModifiers::SHIFT),
            KeyAction::Help,
        );

        Self { bindings }
    }
}
