use super::PlaylistScreen;
use crate::actions::{Action, OnAction};

impl OnAction for PlaylistScreen {
    fn on_action(&self, action: Vec<Action>) {
        self.song_list.on_action(action);
    }
}
