//! View router with the sticky admin reveal.
//!
//! Navigation is unconditional: any screen can transition to any other.
//! The admin screen is reached by address, not by credential, and is
//! omitted from the visible menu until it has been visited once in the
//! session, after which its entry stays visible.

use super::View;

/// Side effects the rendering layer applies after a transition.
///
/// The engine has no viewport, so the scroll reset is data for the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationEffect {
    pub scroll_to_top: bool,
}

/// Top-level screen selector.
#[derive(Debug, Clone)]
pub struct ViewRouter {
    current: View,
    admin_revealed: bool,
}

impl ViewRouter {
    /// A fresh session starts on the home screen.
    pub fn new() -> Self {
        Self {
            current: View::Home,
            admin_revealed: false,
        }
    }

    /// The active screen.
    pub fn current(&self) -> View {
        self.current
    }

    /// Transition to a screen. Always succeeds; every transition resets
    /// the viewport scroll.
    pub fn navigate(&mut self, target: View) -> NavigationEffect {
        if target == View::Admin {
            self.admin_revealed = true;
        }
        self.current = target;
        NavigationEffect {
            scroll_to_top: true,
        }
    }

    /// Whether the admin entry has been revealed for this session.
    pub fn admin_revealed(&self) -> bool {
        self.admin_revealed
    }

    /// Entries for the visible navigation menu. Admin is listed only once
    /// revealed, and then for the remainder of the session.
    pub fn menu_items(&self) -> Vec<View> {
        let mut items = vec![View::Home, View::Coaching, View::Club, View::Blog];
        if self.admin_revealed {
            items.push(View::Admin);
        }
        items
    }
}

impl Default for ViewRouter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_home() {
        assert_eq!(ViewRouter::new().current(), View::Home);
    }

    #[test]
    fn navigation_is_unconditional_and_resets_scroll() {
        let mut router = ViewRouter::new();
        let effect = router.navigate(View::Blog);
        assert_eq!(router.current(), View::Blog);
        assert!(effect.scroll_to_top);

        let effect = router.navigate(View::Club);
        assert_eq!(router.current(), View::Club);
        assert!(effect.scroll_to_top);
    }

    #[test]
    fn admin_hidden_until_visited() {
        let router = ViewRouter::new();
        assert!(!router.menu_items().contains(&View::Admin));
    }

    #[test]
    fn admin_reveal_is_sticky() {
        let mut router = ViewRouter::new();
        router.navigate(View::Admin);
        assert!(router.menu_items().contains(&View::Admin));

        // stays visible after leaving the admin screen
        router.navigate(View::Home);
        assert!(router.menu_items().contains(&View::Admin));
        assert!(router.admin_revealed());
    }
}
