// src/gui/router.rs
use crate::config::options::PageKind::{ self, * };
use super::pages::{ self, Page };

/// Top navigation, left to right.
pub static TABS: &[&'static dyn Page] = &[
    &pages::home::PAGE,
    &pages::teams::PAGE,
    &pages::schedule::PAGE,
    &pages::standings::PAGE,
    &pages::favorites::PAGE,
];

pub fn tabs() -> &'static [&'static dyn Page] {
    TABS
}

pub fn page_for(kind: PageKind) -> &'static dyn Page {
    match kind {
        Home        => &pages::home::PAGE,
        Teams       => &pages::teams::PAGE,
        TeamDetail  => &pages::team_detail::PAGE,
        Schedule    => &pages::schedule::PAGE,
        MatchDetail => &pages::match_detail::PAGE,
        Standings   => &pages::standings::PAGE,
        Favorites   => &pages::favorites::PAGE,
    }
}
