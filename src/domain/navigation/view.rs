//! The five screens of the site.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One variant per screen; adding a screen without handling it everywhere
/// is a compile error thanks to exhaustive matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    Home,
    Coaching,
    Club,
    Blog,
    Admin,
}

impl View {
    /// Menu label shown in the visible navigation.
    pub fn label(&self) -> &'static str {
        match self {
            View::Home => "Home",
            View::Coaching => "Coaching",
            View::Club => "Club",
            View::Blog => "Blog",
            View::Admin => "Admin",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            View::Home => "home",
            View::Coaching => "coaching",
            View::Club => "club",
            View::Blog => "blog",
            View::Admin => "admin",
        };
        write!(f, "{}", s)
    }
}
