use crate::{
    actions::{Action, ListAction, OnActionMut, TextAction},
    theme::Theme,
};

/// A labeled, single-line text field. Typing always appends at the end, so Delete
/// and Backspace both drop the last char.
pub struct TextInput {
    pub(super) theme: Theme,
    pub(super) label: String,
    pub(super) value: String,
    pub(super) is_focused: bool,
}

impl TextInput {
    pub fn new(theme: Theme, label: impl Into<String>) -> Self {
        Self {
            theme,
            label: label.into(),
            value: String::new(),
            is_focused: true,
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_is_focused(&mut self, v: bool) {
        self.is_focused = v;
    }
}

impl OnActionMut for TextInput {
    fn on_action(&mut self, actions: Vec<Action>) {
        for action in actions {
            match action {
                Action::Text(TextAction::Char(c)) => self.value.push(c),
                Action::Text(TextAction::DeleteBack) | Action::Text(TextAction::Delete) => {
                    self.value.pop();
                }
                Action::ListAction(ListAction::Clear) => self.value.clear(),
                _ => continue,
            }
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_str(input: &mut TextInput, s: &str) {
        for c in s.chars() {
            input.on_action(vec![Action::Text(TextAction::Char(c))]);
        }
    }

    #[test]
    fn typing_and_deleting() {
        let mut input = TextInput::new(Theme::default(), "Title");
        type_str(&mut input, "Imagine!");
        assert_eq!(input.value(), "Imagine!");

        input.on_action(vec![Action::Text(TextAction::DeleteBack)]);
        assert_eq!(input.value(), "Imagine");

        // Delete is bound to both editing and list removal; only one char goes
        input.on_action(vec![
            Action::Text(TextAction::Delete),
            Action::ListAction(ListAction::Delete),
        ]);
        assert_eq!(input.value(), "Imagin");

        input.on_action(vec![Action::ListAction(ListAction::Clear)]);
        assert_eq!(input.value(), "");

        input.on_action(vec![Action::Text(TextAction::DeleteBack)]);
        assert_eq!(input.value(), "");
    }

    #[test]
    fn prefilled() {
        let input = TextInput::new(Theme::default(), "Title").with_value("Bold");
        assert_eq!(input.value(), "Bold");
    }
}
