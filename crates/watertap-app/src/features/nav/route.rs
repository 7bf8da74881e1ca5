use std::fmt;
use std::str::FromStr;

/// Options applied to a single pushed entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavModifiers {
    /// Hide the back control while this entry is on top.
    pub hide_back: bool,
}

impl NavModifiers {
    pub fn hide_back() -> Self {
        Self { hide_back: true }
    }
}

/// A closed set of routes with a total mapping to screens.
pub trait Routable: Copy + Eq + fmt::Debug {
    type Screen: Clone + PartialEq + fmt::Debug;

    fn destination(self) -> Self::Screen;

    /// Modifiers used by `Navigator::select`.
    fn default_modifiers(self) -> NavModifiers {
        NavModifiers::default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Link1,
    Link2,
}

impl Route {
    pub const ALL: [Route; 2] = [Route::Link1, Route::Link2];

    pub fn name(self) -> &'static str {
        match self {
            Route::Link1 => "link1",
            Route::Link2 => "link2",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown route `{0}` (expected link1 or link2)")]
pub struct UnknownRoute(pub String);

impl FromStr for Route {
    type Err = UnknownRoute;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Route::ALL
            .into_iter()
            .find(|route| route.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownRoute(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Root,
    Screen1,
    Screen2,
}

impl Screen {
    pub fn title(self) -> &'static str {
        match self {
            Screen::Root => "Home",
            Screen::Screen1 => "Screen1",
            Screen::Screen2 => "Screen2",
        }
    }

    pub fn content(self) -> &'static str {
        match self {
            Screen::Root => "Choose a link",
            Screen::Screen1 => "You are in Link1 view",
            Screen::Screen2 => "You are in Link2 view",
        }
    }
}

impl Routable for Route {
    type Screen = Screen;

    fn destination(self) -> Screen {
        match self {
            Route::Link1 => Screen::Screen1,
            Route::Link2 => Screen::Screen2,
        }
    }

    fn default_modifiers(self) -> NavModifiers {
        match self {
            Route::Link1 => NavModifiers::hide_back(),
            Route::Link2 => NavModifiers::default(),
        }
    }
}
