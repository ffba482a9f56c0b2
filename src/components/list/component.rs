use std::{
    cell::{Cell, RefCell},
    fmt::Display,
};

use crate::{
    actions::NavigationAction,
    structs::Direction,
    theme::Theme,
};

pub struct List<T>
where
    T: Display,
{
    pub(super) theme: Theme,

    pub(super) items: RefCell<Vec<T>>,
    pub(super) selected_item_index: Cell<usize>,

    pub(super) offset: Cell<usize>,
    pub(super) height: Cell<usize>,
    pub(super) is_focused: Cell<bool>,
    pub(super) empty_message: Option<String>,

    pub(super) padding: u8,
    pub(super) page_size: u8,
}

impl<T> List<T>
where
    T: Display,
{
    pub fn new(theme: Theme, items: Vec<T>) -> Self {
        Self {
            theme,

            items: RefCell::new(items),
            selected_item_index: Cell::new(0),

            offset: Cell::new(0),
            height: Cell::new(0),
            is_focused: Cell::new(true),
            empty_message: None,

            padding: 3,
            page_size: 10,
        }
    }

    /// Rendered instead of the items while there are none.
    pub fn set_empty_message(&mut self, message: impl Into<String>) {
        self.empty_message = Some(message.into());
    }

    pub fn set_is_focused(&self, v: bool) {
        self.is_focused.set(v);
    }

    #[cfg(test)]
    pub fn with_items<R>(&self, cb: impl FnOnce(&[T]) -> R) -> R {
        let items = self.items.borrow();
        cb(&items)
    }

    pub fn with_selected_item<R>(&self, cb: impl FnOnce(&T) -> R) -> Option<R> {
        let items = self.items.borrow();
        items.get(self.selected_item_index.get()).map(cb)
    }

    /// Replaces the items, keeping the selection where it was (or at the last item, if the list got shorter).
    pub fn set_items(&self, new_items: Vec<T>) {
        let len = new_items.len();
        *self.items.borrow_mut() = new_items;

        let selected_item_index = self.selected_item_index.get().min(len.saturating_sub(1));
        self.selected_item_index.set(selected_item_index);
        self.offset.set(self.offset.get().min(len.saturating_sub(self.height.get())));
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }

    #[cfg(test)]
    pub fn selected_index(&self) -> usize {
        self.selected_item_index.get()
    }

    #[cfg(test)]
    pub fn scroll_position(&self) -> usize {
        self.offset.get()
    }

    pub(super) fn exec_navigation_action(&self, action: NavigationAction) {
        let len = self.len();

        if len == 0 {
            return;
        }

        let current = self.selected_item_index.get();
        let page_size = self.page_size as usize;

        let new_index = match action {
            NavigationAction::Up | NavigationAction::FocusPrevious => current.saturating_sub(1),
            NavigationAction::Down | NavigationAction::FocusNext => (current + 1).min(len - 1),
            NavigationAction::PageUp => current.saturating_sub(page_size),
            NavigationAction::PageDown => (current + page_size).min(len - 1),
            NavigationAction::Home => 0,
            NavigationAction::End => len - 1,
        };

        if new_index != current {
            self.set_selected_index(new_index, Direction::from(action));
        }
    }

    fn set_selected_index(&self, new_index: usize, direction: Direction) {
        log::trace!(target: "::list", "set_selected_index {new_index} {direction:?}");

        self.selected_item_index.set(new_index);

        let height = self.height.get();

        if height > 0 {
            let len = self.len();
            let padding = (self.padding as usize).min(height.saturating_sub(1) / 2);
            let offset = self.offset.get();

            let offset = match direction {
                Direction::Backwards if new_index < offset + padding => new_index.saturating_sub(padding),
                Direction::Forwards if new_index + padding >= offset + height => new_index + padding + 1 - height,
                _ => offset,
            };

            self.offset.set(offset.min(len.saturating_sub(height)));
        }
    }
}

impl<T: Display> Drop for List<T> {
    fn drop(&mut self) {
        log::trace!("List.drop()");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{Action, OnAction};

    fn list(len: usize) -> List<String> {
        let list = List::new(Theme::default(), (0..len).map(|i| format!("item {i}")).collect());
        list.height.set(10);
        list
    }

    fn nav(list: &List<String>, action: NavigationAction) {
        list.on_action(vec![Action::Navigation(action)]);
    }

    #[test]
    fn navigation_clamps() {
        let list = list(3);

        nav(&list, NavigationAction::Up);
        assert_eq!(list.selected_index(), 0);

        nav(&list, NavigationAction::Down);
        nav(&list, NavigationAction::Down);
        nav(&list, NavigationAction::Down);
        assert_eq!(list.selected_index(), 2);

        nav(&list, NavigationAction::Home);
        assert_eq!(list.selected_index(), 0);

        nav(&list, NavigationAction::End);
        assert_eq!(list.with_selected_item(|s| s.clone()), Some("item 2".to_string()));
    }

    #[test]
    fn scrolls_with_padding() {
        let list = list(50);

        for _ in 0..6 {
            nav(&list, NavigationAction::Down);
        }
        assert_eq!(list.selected_index(), 6);
        assert_eq!(list.scroll_position(), 0);

        nav(&list, NavigationAction::Down);
        assert_eq!(list.selected_index(), 7);
        assert_eq!(list.scroll_position(), 1);

        nav(&list, NavigationAction::End);
        assert_eq!(list.scroll_position(), 40);

        nav(&list, NavigationAction::PageUp);
        assert_eq!(list.selected_index(), 39);
        assert_eq!(list.scroll_position(), 36);

        nav(&list, NavigationAction::Home);
        assert_eq!(list.scroll_position(), 0);
    }

    #[test]
    fn set_items_keeps_selection_in_bounds() {
        let list = list(5);
        nav(&list, NavigationAction::End);
        assert_eq!(list.selected_index(), 4);

        list.set_items(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(list.selected_index(), 1);

        list.set_items(vec![]);
        assert_eq!(list.selected_index(), 0);
        assert_eq!(list.with_selected_item(|s| s.clone()), None);

        // no panic on an empty list
        nav(&list, NavigationAction::Down);
        assert!(list.is_empty());
    }
}
