//! Responsive layout selection
//!
//! The viewport class is a pure function of the current width and is
//! recomputed on every render, never stored.

use serde::{Deserialize, Serialize};

/// Pixel thresholds (inclusive lower bounds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakpoints {
    /// Secondary link bar appears from this width
    #[serde(default = "default_secondary_bar")]
    pub secondary_bar: u32,
    /// Compact icon-only desktop nav from this width, mobile nav below it
    #[serde(default = "default_compact")]
    pub compact: u32,
    /// Full desktop nav from this width
    #[serde(default = "default_wide")]
    pub wide: u32,
}

fn default_secondary_bar() -> u32 {
    768
}

fn default_compact() -> u32 {
    1024
}

fn default_wide() -> u32 {
    1280
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            secondary_bar: default_secondary_bar(),
            compact: default_compact(),
            wide: default_wide(),
        }
    }
}

/// Which of the three header presentations is visible
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewportClass {
    /// Full labels and icons
    Wide,
    /// Icons only, first `compact_limit` entries, label as tooltip
    NarrowDesktop,
    /// Stacked list behind the menu toggle
    Mobile,
}

impl ViewportClass {
    pub fn from_width(width: u32, breakpoints: &Breakpoints) -> Self {
        if width >= breakpoints.wide {
            ViewportClass::Wide
        } else if width >= breakpoints.compact {
            ViewportClass::NarrowDesktop
        } else {
            ViewportClass::Mobile
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ViewportClass::Wide => "wide",
            ViewportClass::NarrowDesktop => "narrow-desktop",
            ViewportClass::Mobile => "mobile",
        }
    }
}

/// Current viewport as reported by the host platform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
}

impl Viewport {
    pub fn new(width: u32) -> Self {
        Self { width }
    }

    pub fn class(&self, breakpoints: &Breakpoints) -> ViewportClass {
        ViewportClass::from_width(self.width, breakpoints)
    }

    pub fn shows_secondary_bar(&self, breakpoints: &Breakpoints) -> bool {
        self.width >= breakpoints.secondary_bar
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_thresholds() {
        let bp = Breakpoints::default();
        assert_eq!(ViewportClass::from_width(0, &bp), ViewportClass::Mobile);
        assert_eq!(ViewportClass::from_width(1023, &bp), ViewportClass::Mobile);
        assert_eq!(
            ViewportClass::from_width(1024, &bp),
            ViewportClass::NarrowDesktop
        );
        assert_eq!(
            ViewportClass::from_width(1279, &bp),
            ViewportClass::NarrowDesktop
        );
        assert_eq!(ViewportClass::from_width(1280, &bp), ViewportClass::Wide);
        assert_eq!(ViewportClass::from_width(3840, &bp), ViewportClass::Wide);
    }

    #[test]
    fn test_secondary_bar_threshold() {
        let bp = Breakpoints::default();
        assert!(!Viewport::new(767).shows_secondary_bar(&bp));
        assert!(Viewport::new(768).shows_secondary_bar(&bp));
        assert_eq!(Viewport::new(768).class(&bp), ViewportClass::Mobile);
    }

    #[test]
    fn test_custom_breakpoints() {
        let bp = Breakpoints {
            secondary_bar: 500,
            compact: 800,
            wide: 1000,
        };
        assert_eq!(Viewport::new(900).class(&bp), ViewportClass::NarrowDesktop);
        assert_eq!(Viewport::new(1000).class(&bp), ViewportClass::Wide);
    }
}
