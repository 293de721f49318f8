/// Key dispatch - maps key chords to navigation intents
///
/// A `KeyBinding` is a normalized chord (key code + modifiers); the
/// `KeyDispatcher` owns the chord-to-intent map plus the per-intent labels a
/// host supplies at registration time. Several chords may map to the same
/// intent (`0` and `Shift+H` both mean "home column").
use std::collections::HashMap;
use std::fmt;

use anyhow::{bail, Result};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

use crate::config::KeybindingConfig;
use crate::navigator::NavIntent;

/// A normalized key chord.
///
/// Terminals report shifted characters as the shifted character itself,
/// usually with the SHIFT modifier still set (`Shift+g` arrives as
/// `Char('G')` + SHIFT, `$` as `Char('$')` + SHIFT). To make lookups
/// reliable, chords over `Char` keys drop the SHIFT bit and let the
/// character carry the distinction, and control chords are lowercased.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    pub fn new(code: KeyCode) -> Self {
        Self::normalized(code, KeyModifiers::empty())
    }

    pub fn with_ctrl(code: KeyCode) -> Self {
        Self::normalized(code, KeyModifiers::CONTROL)
    }

    pub fn with_alt(code: KeyCode) -> Self {
        Self::normalized(code, KeyModifiers::ALT)
    }

    pub fn from_event(event: &KeyEvent) -> Self {
        Self::normalized(event.code, event.modifiers)
    }

    fn normalized(code: KeyCode, modifiers: KeyModifiers) -> Self {
        let mut modifiers = modifiers;
        let code = match code {
            KeyCode::Char(c) => {
                modifiers.remove(KeyModifiers::SHIFT);
                if modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
                    KeyCode::Char(c.to_ascii_lowercase())
                } else {
                    KeyCode::Char(c)
                }
            }
            other => other,
        };
        Self { code, modifiers }
    }

    /// Parse a chord from its config-file form: `"j"`, `"$"`, `"Ctrl+F"`,
    /// `"Shift+G"`, `"PageDown"`.
    pub fn parse(chord: &str) -> Result<Self> {
        let mut modifiers = KeyModifiers::empty();
        let mut shifted = false;
        let mut key = None;

        for token in chord.split('+').map(str::trim) {
            match token.to_ascii_lowercase().as_str() {
                "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
                "alt" | "meta" => modifiers |= KeyModifiers::ALT,
                "shift" => shifted = true,
                "up" => key = Some(KeyCode::Up),
                "down" => key = Some(KeyCode::Down),
                "left" => key = Some(KeyCode::Left),
                "right" => key = Some(KeyCode::Right),
                "pageup" => key = Some(KeyCode::PageUp),
                "pagedown" => key = Some(KeyCode::PageDown),
                "home" => key = Some(KeyCode::Home),
                "end" => key = Some(KeyCode::End),
                _ => {
                    let mut chars = token.chars();
                    match (chars.next(), chars.next()) {
                        (Some(c), None) => {
                            let c = if shifted { c.to_ascii_uppercase() } else { c };
                            key = Some(KeyCode::Char(c));
                        }
                        _ => bail!("unknown key '{}' in chord '{}'", token, chord),
                    }
                }
            }
        }

        match key {
            Some(code) => {
                if shifted && !matches!(code, KeyCode::Char(_)) {
                    modifiers |= KeyModifiers::SHIFT;
                }
                Ok(Self::normalized(code, modifiers))
            }
            None => bail!("chord '{}' has modifiers but no key", chord),
        }
    }
}

impl fmt::Display for KeyBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            write!(f, "Ctrl+")?;
        }
        if self.modifiers.contains(KeyModifiers::ALT) {
            write!(f, "Alt+")?;
        }
        if self.modifiers.contains(KeyModifiers::SHIFT) {
            write!(f, "Shift+")?;
        }
        match self.code {
            KeyCode::Char(c) if c.is_ascii_uppercase() => write!(f, "Shift+{}", c),
            KeyCode::Char(c) => write!(f, "{}", c),
            KeyCode::Up => write!(f, "Up"),
            KeyCode::Down => write!(f, "Down"),
            KeyCode::Left => write!(f, "Left"),
            KeyCode::Right => write!(f, "Right"),
            KeyCode::PageUp => write!(f, "PageUp"),
            KeyCode::PageDown => write!(f, "PageDown"),
            KeyCode::Home => write!(f, "Home"),
            KeyCode::End => write!(f, "End"),
            other => write!(f, "{:?}", other),
        }
    }
}

/// Maps key chords to navigation intents.
pub struct KeyDispatcher {
    map: HashMap<KeyBinding, NavIntent>,
    labels: HashMap<NavIntent, String>,
}

impl KeyDispatcher {
    /// Dispatcher with the full default map: vim chords plus arrow and
    /// page keys.
    pub fn new() -> Self {
        let mut dispatcher = Self {
            map: HashMap::new(),
            labels: HashMap::new(),
        };
        dispatcher.setup_arrow_bindings();
        dispatcher.setup_vim_bindings();
        dispatcher
    }

    /// Build a dispatcher from config: arrow keys always, vim chords when
    /// `vim_mode` is on, then any custom mappings on top.
    pub fn from_config(config: &KeybindingConfig) -> Result<Self> {
        let mut dispatcher = Self {
            map: HashMap::new(),
            labels: HashMap::new(),
        };
        dispatcher.setup_arrow_bindings();
        if config.vim_mode {
            dispatcher.setup_vim_bindings();
        }
        if let Some(mappings) = &config.custom_mappings {
            dispatcher.apply_custom_mappings(mappings)?;
        }
        Ok(dispatcher)
    }

    fn setup_vim_bindings(&mut self) {
        self.bind(KeyBinding::new(KeyCode::Char('j')), NavIntent::NextRow);
        self.bind(KeyBinding::new(KeyCode::Char('k')), NavIntent::PrevRow);
        self.bind(
            KeyBinding::with_ctrl(KeyCode::Char('f')),
            NavIntent::PageForward,
        );
        self.bind(
            KeyBinding::with_ctrl(KeyCode::Char('b')),
            NavIntent::PageBackward,
        );
        self.bind(KeyBinding::new(KeyCode::Char('g')), NavIntent::FirstRow);
        self.bind(KeyBinding::new(KeyCode::Char('G')), NavIntent::LastRow);
        self.bind(KeyBinding::new(KeyCode::Char('h')), NavIntent::VisualLeft);
        self.bind(KeyBinding::new(KeyCode::Char('l')), NavIntent::VisualRight);
        self.bind(KeyBinding::new(KeyCode::Char('0')), NavIntent::VisualHome);
        self.bind(KeyBinding::new(KeyCode::Char('H')), NavIntent::VisualHome);
        self.bind(KeyBinding::new(KeyCode::Char('$')), NavIntent::VisualEnd);
        self.bind(KeyBinding::new(KeyCode::Char('L')), NavIntent::VisualEnd);
    }

    fn setup_arrow_bindings(&mut self) {
        self.bind(KeyBinding::new(KeyCode::Down), NavIntent::NextRow);
        self.bind(KeyBinding::new(KeyCode::Up), NavIntent::PrevRow);
        self.bind(KeyBinding::new(KeyCode::PageDown), NavIntent::PageForward);
        self.bind(KeyBinding::new(KeyCode::PageUp), NavIntent::PageBackward);
        self.bind(KeyBinding::new(KeyCode::Home), NavIntent::FirstRow);
        self.bind(KeyBinding::new(KeyCode::End), NavIntent::LastRow);
        self.bind(KeyBinding::new(KeyCode::Left), NavIntent::VisualLeft);
        self.bind(KeyBinding::new(KeyCode::Right), NavIntent::VisualRight);
    }

    /// Bind a chord to an intent, replacing any previous binding of the
    /// same chord.
    pub fn bind(&mut self, binding: KeyBinding, intent: NavIntent) {
        self.map.insert(binding, intent);
    }

    pub fn unbind(&mut self, binding: &KeyBinding) -> Option<NavIntent> {
        self.map.remove(binding)
    }

    /// Remove every chord currently bound to an intent.
    pub fn clear_intent(&mut self, intent: NavIntent) {
        self.map.retain(|_, bound| *bound != intent);
    }

    /// Replace an intent's chords from a config mapping. The chord list
    /// fully replaces the intent's previous bindings.
    pub fn apply_custom_mappings(
        &mut self,
        mappings: &HashMap<String, Vec<String>>,
    ) -> Result<()> {
        for (action, chords) in mappings {
            let Some(intent) = NavIntent::from_action_name(action) else {
                bail!("unknown action '{}' in custom keybindings", action);
            };
            self.clear_intent(intent);
            for chord in chords {
                self.bind(KeyBinding::parse(chord)?, intent);
            }
        }
        Ok(())
    }

    /// Look up the intent for an incoming key event.
    pub fn dispatch(&self, event: &KeyEvent) -> Option<NavIntent> {
        let binding = KeyBinding::from_event(event);
        let intent = self.map.get(&binding).copied();
        debug!(target: "input", "dispatch: {} -> {:?}", binding, intent);
        intent
    }

    /// All chords bound to an intent, sorted for stable display.
    pub fn bindings_for(&self, intent: NavIntent) -> Vec<KeyBinding> {
        let mut bindings: Vec<KeyBinding> = self
            .map
            .iter()
            .filter(|(_, bound)| **bound == intent)
            .map(|(binding, _)| *binding)
            .collect();
        bindings.sort_by_key(|binding| binding.to_string());
        bindings
    }

    /// Override the display label for an intent.
    pub fn set_label(&mut self, intent: NavIntent, label: impl Into<String>) {
        self.labels.insert(intent, label.into());
    }

    pub fn label(&self, intent: NavIntent) -> &str {
        self.labels
            .get(&intent)
            .map(String::as_str)
            .unwrap_or_else(|| intent.default_label())
    }
}

impl Default for KeyDispatcher {
    fn default() -> Self {
        Self::new()
    }
}
