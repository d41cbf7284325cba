//! Badge text formatting
//!
//! The stored count is never modified; each presentation context applies its
//! own cap when turning the count into display text.

use serde::Serialize;

/// Where a badge is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BadgeContext {
    /// Full desktop nav and mobile panel
    Header,
    /// Icon-only compact nav
    Compact,
}

impl BadgeContext {
    /// Largest count shown verbatim
    pub fn cap(&self) -> u32 {
        match self {
            BadgeContext::Header => 99,
            BadgeContext::Compact => 9,
        }
    }
}

/// Display text for a badge, or `None` when no badge should be drawn
pub fn badge_text(count: u32, context: BadgeContext) -> Option<String> {
    if count == 0 {
        return None;
    }
    let cap = context.cap();
    if count > cap {
        Some(format!("{}+", cap))
    } else {
        Some(count.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_has_no_badge() {
        assert_eq!(badge_text(0, BadgeContext::Header), None);
        assert_eq!(badge_text(0, BadgeContext::Compact), None);
    }

    #[test]
    fn test_header_cap() {
        assert_eq!(badge_text(5, BadgeContext::Header).as_deref(), Some("5"));
        assert_eq!(badge_text(99, BadgeContext::Header).as_deref(), Some("99"));
        assert_eq!(badge_text(100, BadgeContext::Header).as_deref(), Some("99+"));
        assert_eq!(badge_text(150, BadgeContext::Header).as_deref(), Some("99+"));
    }

    #[test]
    fn test_compact_cap_is_independent() {
        assert_eq!(badge_text(9, BadgeContext::Compact).as_deref(), Some("9"));
        assert_eq!(badge_text(12, BadgeContext::Compact).as_deref(), Some("9+"));
        assert_eq!(badge_text(12, BadgeContext::Header).as_deref(), Some("12"));
    }
}
