use std::cmp::Ordering;

use strum::{Display, EnumIter, EnumString};

use crate::structs::{Song, song::fold_case};

#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash, Display, EnumString, EnumIter)]
pub enum SortKey {
    Title,
    Artist,
    Genre,
    Duration,
}

impl SortKey {
    pub fn compare(&self, a: &Song, b: &Song) -> Ordering {
        match self {
            SortKey::Title => cmp_ignore_case(a.title(), b.title()),
            SortKey::Artist => cmp_ignore_case(a.artist(), b.artist()),
            SortKey::Genre => cmp_ignore_case(a.genre(), b.genre()),
            SortKey::Duration => a.duration().cmp(&b.duration()),
        }
    }
}

fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    fold_case(a).cmp(fold_case(b))
}
