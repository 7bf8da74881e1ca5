use super::route::{NavModifiers, Routable, Route, Screen};

#[derive(Debug, Clone, PartialEq)]
pub struct Entry<S> {
    pub screen: S,
    pub modifiers: NavModifiers,
}

/// Navigation stack over a closed route type.
///
/// The root entry is stored apart from the pushed ones, so the stack can
/// never become empty.
#[derive(Debug, Clone)]
pub struct Navigator<R: Routable> {
    root: Entry<R::Screen>,
    pushed: Vec<Entry<R::Screen>>,
}

impl<R: Routable> Navigator<R> {
    pub fn new(root: R::Screen) -> Self {
        Self {
            root: Entry {
                screen: root,
                modifiers: NavModifiers::default(),
            },
            pushed: Vec::new(),
        }
    }

    /// Pushes the route's screen with the route's default modifiers.
    pub fn select(&mut self, route: R) {
        self.select_with(route, route.default_modifiers());
    }

    pub fn select_with(&mut self, route: R, modifiers: NavModifiers) {
        self.pushed.push(Entry {
            screen: route.destination(),
            modifiers,
        });
    }

    /// Removes the top entry. At the root this does nothing and returns `None`.
    pub fn pop(&mut self) -> Option<Entry<R::Screen>> {
        self.pushed.pop()
    }

    pub fn len(&self) -> usize {
        self.pushed.len() + 1
    }

    pub fn top(&self) -> &Entry<R::Screen> {
        self.pushed.last().unwrap_or(&self.root)
    }

    pub fn is_at_root(&self) -> bool {
        self.pushed.is_empty()
    }

    pub fn back_visible(&self) -> bool {
        !self.is_at_root() && !self.top().modifiers.hide_back
    }

    /// Entries from root to top.
    pub fn entries(&self) -> impl Iterator<Item = &Entry<R::Screen>> {
        std::iter::once(&self.root).chain(self.pushed.iter())
    }
}

impl Default for Navigator<Route> {
    fn default() -> Self {
        Self::new(Screen::Root)
    }
}
