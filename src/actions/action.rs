use std::{
    collections::HashMap,
    fmt::{Display, Formatter},
    fs::read_to_string,
    hash::Hash,
    sync::LazyLock,
};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use strum::EnumString;

use crate::toml::{TomlFileError, get_config_file_path};

static DEFAULT_ACTIONS_STR: &str = include_str!("../../assets/actions.kv");
static DEFAULT_ACTIONS: LazyLock<HashMap<KeyBinding, Vec<Action>>> =
    LazyLock::new(|| Actions::from_str(DEFAULT_ACTIONS_STR).actions);

#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub struct KeyBinding {
    code: KeyCode,
    modifiers: KeyModifiers,
}

impl KeyBinding {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }
}

impl From<KeyEvent> for KeyBinding {
    fn from(key: KeyEvent) -> Self {
        Self {
            code: key.code,
            modifiers: key.modifiers,
        }
    }
}

impl Display for KeyBinding {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
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
            KeyCode::Char(' ') => write!(f, "Space"),
            KeyCode::Char(c) => write!(f, "{c}"),
            KeyCode::F(n) => write!(f, "F{n}"),
            code => write!(f, "{code:?}"),
        }
    }
}

#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash, Ord, PartialOrd)]
pub enum Action {
    Quit, // App will assert, on startup, there is at least one key-binding for Quit.
    Confirm,
    Cancel,
    Screen(ScreenAction),
    Navigation(NavigationAction),
    Text(TextAction),
    ListAction(ListAction),
    Playlists(PlaylistsAction),
}

#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash, EnumString, Ord, PartialOrd)]
pub enum NavigationAction {
    FocusNext,
    FocusPrevious,
    Up,
    Down,
    Home,
    End,
    PageUp,
    PageDown,
}

#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash, EnumString, Ord, PartialOrd)]
pub enum TextAction {
    Char(char),
    Delete,
    DeleteBack,
}

#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash, EnumString, Ord, PartialOrd)]
pub enum ListAction {
    Insert,
    Delete,
    Clear,
}

#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash, EnumString, Ord, PartialOrd)]
pub enum ScreenAction {
    General,
    Favorites,
    Help,
}

#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash, EnumString, Ord, PartialOrd)]
pub enum PlaylistsAction {
    Sort,
}

impl TryFrom<&str> for Action {
    type Error = strum::ParseError;

    fn try_from(value: &str) -> Result<Self, strum::ParseError> {
        if value == "Quit" {
            return Ok(Self::Quit);
        } else if value == "Confirm" {
            return Ok(Self::Confirm);
        } else if value == "Cancel" {
            return Ok(Self::Cancel);
        }

        let parts: Vec<&str> = value.split('.').collect();
        let [parent, child] = parts[..] else {
            return Err(strum::ParseError::VariantNotFound);
        };

        if parent == "Screen" {
            ScreenAction::try_from(child).map(Action::Screen)
        } else if parent == "Navigation" {
            NavigationAction::try_from(child).map(Action::Navigation)
        } else if parent == "Text" {
            TextAction::try_from(child).map(Action::Text)
        } else if parent == "List" {
            ListAction::try_from(child).map(Action::ListAction)
        } else if parent == "Playlists" {
            PlaylistsAction::try_from(child).map(Action::Playlists)
        } else {
            Err(strum::ParseError::VariantNotFound)
        }
    }
}

#[derive(Debug, Default)]
pub struct Actions {
    actions: HashMap<KeyBinding, Vec<Action>>,
}

impl Actions {
    fn from_str(s: &str) -> Self {
        let mut actions: HashMap<KeyBinding, Vec<Action>> = HashMap::new();

        s.lines()
            .filter(|line| line.len() >= 3 && !line.trim().starts_with('#'))
            .map(|line| line.split('=').collect::<Vec<&str>>())
            .filter_map(str_to_action_keys)
            .for_each(|(action, bindings)| {
                bindings.split(' ').filter_map(str_to_binding).for_each(|binding| {
                    actions
                        .entry(binding)
                        .and_modify(|actions| actions.push(action))
                        .or_insert(vec![action]);
                });
            });

        Self { actions }
    }

    pub fn from_file() -> Result<Self, TomlFileError> {
        let path = get_config_file_path("shortcuts.kv")?;
        let string = read_to_string(path)?;

        Ok(Self::from_str(string.as_str()))
    }

    pub fn from_file_or_default() -> Self {
        Self::from_file().unwrap_or_else(|err| {
            log::debug!(target: "::actions", "no custom shortcuts loaded: {err}");
            Self::default()
        })
    }

    pub fn action_by_key(&self, key: KeyEvent) -> Vec<Action> {
        log::trace!(target: "::actions", "action_by_key {key:?}");

        if let KeyCode::Char(c) = key.code
            && (key.modifiers - KeyModifiers::SHIFT).is_empty()
            && !c.is_control()
        {
            return vec![Action::Text(TextAction::Char(c))];
        }

        let kb = KeyBinding::from(key);
        self.actions
            .get(&kb)
            .or(DEFAULT_ACTIONS.get(&kb))
            .cloned()
            .unwrap_or_default()
    }

    pub fn contains(&self, action: Action) -> bool {
        self.actions
            .values()
            .chain(DEFAULT_ACTIONS.values())
            .flatten()
            .any(|a| *a == action)
    }

    /// All bindings, user-defined ones taking precedence over the defaults.
    pub fn actions(&self) -> HashMap<KeyBinding, Vec<Action>> {
        let mut actions = DEFAULT_ACTIONS.clone();
        actions.extend(self.actions.clone());
        actions
    }
}

pub trait OnAction<T = Action> {
    fn on_action(&self, action: Vec<T>);
}

pub trait OnActionMut<T = Action> {
    fn on_action(&mut self, action: Vec<T>);
}

fn str_to_action_keys(split: Vec<&str>) -> Option<(Action, &str)> {
    if let [value, keys] = split[..]
        && let Ok(action) = Action::try_from(value.trim())
    {
        Some((action, keys.trim()))
    } else {
        None
    }
}

fn str_to_binding(binding: &str) -> Option<KeyBinding> {
    str_to_modifiers(binding)
        .and_then(|(modifiers, key)| str_to_key(key, modifiers).map(|code| KeyBinding::new(code, modifiers)))
}

fn str_to_modifiers(key: &str) -> Option<(KeyModifiers, &str)> {
    let mut modifiers = KeyModifiers::NONE;
    let mut key = key;

    loop {
        if let Some(rest) = key.strip_prefix("Ctrl") {
            modifiers.toggle(KeyModifiers::CONTROL);
            key = rest;
        } else if let Some(rest) = key.strip_prefix("Alt") {
            modifiers.toggle(KeyModifiers::ALT);
            key = rest;
        } else if let Some(rest) = key.strip_prefix("Shift") {
            modifiers.toggle(KeyModifiers::SHIFT);
            key = rest;
        } else {
            break;
        }
    }

    Some((modifiers, key))
}

fn str_to_key(key: &str, modifiers: KeyModifiers) -> Option<KeyCode> {
    let code: KeyCode;

    if key.len() == 1 {
        let char = key.chars().next()?;

        if char.is_ascii_alphabetic() {
            if modifiers.contains(KeyModifiers::SHIFT) {
                code = KeyCode::Char(char);
            } else {
                code = KeyCode::Char(char.to_ascii_lowercase());
            }
        } else {
            code = KeyCode::Char(char);
        }
    } else if (key.len() == 2 || key.len() == 3)
        && key.starts_with('F')
        && let Ok(num) = key[1..].parse::<u8>()
    {
        code = KeyCode::F(num);
    } else if key == "Enter" {
        code = KeyCode::Enter;
    } else if key == "Esc" {
        code = KeyCode::Esc;
    } else if key == "Space" {
        code = KeyCode::Char(' ');
    } else if key == "Right" {
        code = KeyCode::Right;
    } else if key == "Left" {
        code = KeyCode::Left;
    } else if key == "Up" {
        code = KeyCode::Up;
    } else if key == "Down" {
        code = KeyCode::Down;
    } else if key == "Home" {
        code = KeyCode::Home;
    } else if key == "End" {
        code = KeyCode::End;
    } else if key == "PageUp" {
        code = KeyCode::PageUp;
    } else if key == "PageDown" {
        code = KeyCode::PageDown;
    } else if key == "Delete" {
        code = KeyCode::Delete;
    } else if key == "Backspace" {
        code = KeyCode::Backspace;
    } else if key == "Tab" {
        code = KeyCode::Tab;
    } else if key == "BackTab" {
        code = KeyCode::BackTab;
    } else if key == "Insert" {
        code = KeyCode::Insert;
    } else {
        return None;
    }
    Some(code)
}
