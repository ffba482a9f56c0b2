use crate::{
    actions::{Action, NavigationAction, OnActionMut},
    components::TextInput,
    structs::{Song, SongField, SongInput, SongInputError},
    theme::Theme,
};

const FIELDS: [SongField; 4] = [SongField::Title, SongField::Artist, SongField::Genre, SongField::Duration];

fn label(field: SongField) -> &'static str {
    match field {
        SongField::Title => "Title",
        SongField::Artist => "Artist",
        SongField::Genre => "Genre",
        SongField::Duration => "Duration (in seconds)",
    }
}

/// The "Add Song" dialog: one text field per song attribute.
pub struct SongForm {
    pub(super) theme: Theme,
    pub(super) inputs: Vec<TextInput>,
    pub(super) focused: usize,
}

impl SongForm {
    pub fn new(theme: Theme) -> Self {
        let inputs = FIELDS
            .iter()
            .enumerate()
            .map(|(i, field)| {
                let mut input = TextInput::new(theme, label(*field));
                input.set_is_focused(i == 0);
                input
            })
            .collect();

        Self {
            theme,
            inputs,
            focused: 0,
        }
    }

    #[cfg(test)]
    pub fn focused_field(&self) -> SongField {
        FIELDS[self.focused]
    }

    pub fn is_last_field_focused(&self) -> bool {
        self.focused == FIELDS.len() - 1
    }

    pub fn focus_field(&mut self, field: SongField) {
        self.focused = FIELDS.iter().position(|f| *f == field).unwrap_or(0);
        for (i, input) in self.inputs.iter_mut().enumerate() {
            input.set_is_focused(i == self.focused);
        }
    }

    pub fn focus_next(&mut self) {
        let next = (self.focused + 1) % FIELDS.len();
        self.focus_field(FIELDS[next]);
    }

    pub fn focus_previous(&mut self) {
        let previous = (self.focused + FIELDS.len() - 1) % FIELDS.len();
        self.focus_field(FIELDS[previous]);
    }

    pub fn submit(&self) -> Result<Song, SongInputError> {
        self.input().into_song()
    }

    fn input(&self) -> SongInput {
        let mut input = SongInput::default();
        for (field, text_input) in FIELDS.iter().zip(&self.inputs) {
            input.field_mut(*field).push_str(text_input.value());
        }
        input
    }
}

impl OnActionMut for SongForm {
    fn on_action(&mut self, actions: Vec<Action>) {
        match actions.first() {
            Some(Action::Navigation(NavigationAction::FocusNext | NavigationAction::Down)) => self.focus_next(),
            Some(Action::Navigation(NavigationAction::FocusPrevious | NavigationAction::Up)) => self.focus_previous(),
            _ => self.inputs[self.focused].on_action(actions),
        }
    }
}
