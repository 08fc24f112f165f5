//! Demo screen state
//!
//! A closed set of screens and the controls that move between them. Each
//! control carries its own destination, so nothing needs to look at button
//! labels or listen on a global channel to decide where to go next.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Screen {
    #[default]
    Landing,
    Pantry,
    Recipe,
    Voice,
    Improviser,
    Profile,
    Login,
    TechStack,
}

impl Screen {
    /// Screens listed in the demo navigation bar, in display order
    pub const DEMO_NAV: [Screen; 7] = [
        Screen::Landing,
        Screen::Pantry,
        Screen::Recipe,
        Screen::Voice,
        Screen::Improviser,
        Screen::Profile,
        Screen::Login,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Screen::Landing => "Home",
            Screen::Pantry => "Pantry Vision",
            Screen::Recipe => "Recipe Gen",
            Screen::Voice => "Voice Cook",
            Screen::Improviser => "Improviser",
            Screen::Profile => "Profile",
            Screen::Login => "Login",
            Screen::TechStack => "Technology Stack",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An interactive control, bound to its intent when it is created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Control {
    /// Entry in the demo navigation bar; valid everywhere
    DemoNav(Screen),
    /// Header logo; always returns to the landing page
    HeaderLogo,
    /// Header login button; valid everywhere
    HeaderLogin,
    /// Landing page call to action ("Launch", "Start Cooking", "See It In Action")
    LaunchApp,
    /// Landing page navigation link
    TechStackLink,
    /// Pantry screen call to action
    GenerateRecipes,
    /// Recipe screen call to action
    StartVoiceCooking,
    /// Improviser screen call to action
    GenerateWithBridge,
}

/// Next screen after `control` is activated on `current`
///
/// Controls that do not belong to `current` leave it unchanged.
pub fn transition(current: Screen, control: Control) -> Screen {
    match (current, control) {
        (_, Control::DemoNav(target)) => target,
        (_, Control::HeaderLogin) => Screen::Login,
        (_, Control::HeaderLogo) => Screen::Landing,
        (Screen::Landing, Control::LaunchApp) => Screen::Pantry,
        (Screen::Landing, Control::TechStackLink) => Screen::TechStack,
        (Screen::Pantry, Control::GenerateRecipes) => Screen::Recipe,
        (Screen::Recipe, Control::StartVoiceCooking) => Screen::Voice,
        (Screen::Improviser, Control::GenerateWithBridge) => Screen::Recipe,
        (screen, _) => screen,
    }
}

/// Owns the current screen for one session
#[derive(Debug, Clone, Default)]
pub struct Navigator {
    current: Screen,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Screen {
        self.current
    }

    /// Apply a control, returning the screen now shown
    pub fn activate(&mut self, control: Control) -> Screen {
        self.current = transition(self.current, control);
        self.current
    }
}
