use std::fmt::Display;

use super::component::List;
use crate::actions::{Action, OnAction};

impl<T> OnAction for List<T>
where
    T: Display,
{
    fn on_action(&self, actions: Vec<Action>) {
        if let Some(action) = actions.iter().find_map(|action| match action {
            Action::Navigation(action) => Some(*action),
            _ => None,
        }) {
            self.exec_navigation_action(action);
        }
    }
}
