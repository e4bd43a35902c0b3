//! Light/dark presentation mode and the global flag that mirrors it.

use strum::{AsRefStr, Display as StrumDisplay, EnumIter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, StrumDisplay, AsRefStr, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

/// Document-wide marker read by the rendering layer.
///
/// `set_enabled(true)` on an already enabled flag must leave a single marker.
pub trait PresentationFlag {
    fn set_enabled(&self, enabled: bool);
}

/// Sole owner of the presentation mode and the only writer of the flag
pub struct ThemeController<F: PresentationFlag> {
    mode: ThemeMode,
    flag: F,
}

impl<F: PresentationFlag> ThemeController<F> {
    /// Starts in `Light` and clears any flag left behind by a previous mount.
    pub fn new(flag: F) -> Self {
        let mode = ThemeMode::default();
        flag.set_enabled(mode.is_dark());
        Self { mode, flag }
    }

    pub fn toggle(&mut self) -> ThemeMode {
        self.mode = self.mode.toggled();
        self.flag.set_enabled(self.mode.is_dark());
        crate::log_debug!(
            crate::domain::logging::LogComponent::Domain("Theme"),
            "theme switched to {}",
            self.mode
        );
        self.mode
    }

    pub fn current(&self) -> ThemeMode {
        self.mode
    }
}
