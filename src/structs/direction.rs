use crate::actions::NavigationAction;

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum Direction {
    Backwards,
    Forwards,
}

impl From<NavigationAction> for Direction {
    fn from(action: NavigationAction) -> Self {
        if action == NavigationAction::Up
            || action == NavigationAction::Home
            || action == NavigationAction::PageUp
            || action == NavigationAction::FocusPrevious
        {
            Self::Backwards
        } else {
            Self::Forwards
        }
    }
}
