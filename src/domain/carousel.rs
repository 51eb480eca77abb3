//! Scroll bookkeeping for the horizontal tool carousel.
//!
//! The renderer reports the scroll container's metrics; this module decides
//! which arrows are enabled and which scroll command to issue.

use serde::{Deserialize, Serialize};

/// Viewports narrower than this use the mobile card layout.
pub const MOBILE_BREAKPOINT_PX: u32 = 768;

/// Distance one arrow click scrolls.
pub const SCROLL_DELTA_PX: i32 = 300;

/// Card width and gap of one layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardLayout {
    pub card_width: u32,
    pub gap: u32,
}

impl CardLayout {
    pub const MOBILE: Self = Self {
        card_width: 280,
        gap: 16,
    };
    pub const DESKTOP: Self = Self {
        card_width: 320,
        gap: 24,
    };

    pub fn for_viewport(viewport_width: u32) -> Self {
        if viewport_width < MOBILE_BREAKPOINT_PX {
            Self::MOBILE
        } else {
            Self::DESKTOP
        }
    }

    /// Horizontal distance from one card's start to the next.
    pub fn stride(&self) -> u32 {
        self.card_width + self.gap
    }
}

/// Snapshot of the scroll container.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScrollMetrics {
    pub scroll_left: f64,
    pub scroll_width: f64,
    pub client_width: f64,
}

impl ScrollMetrics {
    pub fn can_scroll_left(&self) -> bool {
        self.scroll_left > 0.0
    }

    /// One pixel of tolerance absorbs sub-pixel scroll positions.
    pub fn can_scroll_right(&self) -> bool {
        self.scroll_left < self.scroll_width - self.client_width - 1.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "px", rename_all = "lowercase")]
pub enum ScrollCommand {
    /// Relative smooth scroll.
    By(i32),
    /// Absolute smooth scroll.
    To(u32),
}

pub fn scroll_left() -> ScrollCommand {
    ScrollCommand::By(-SCROLL_DELTA_PX)
}

pub fn scroll_right() -> ScrollCommand {
    ScrollCommand::By(SCROLL_DELTA_PX)
}

/// After the card at `index` is closed, bring the next card into view.
pub fn handle_card_close(index: u32, viewport_width: u32) -> ScrollCommand {
    let stride = CardLayout::for_viewport(viewport_width).stride();
    ScrollCommand::To(stride.saturating_mul(index.saturating_add(1)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(scroll_left: f64) -> ScrollMetrics {
        ScrollMetrics {
            scroll_left,
            scroll_width: 1000.0,
            client_width: 400.0,
        }
    }

    #[test]
    fn left_arrow_disabled_at_start() {
        assert!(!metrics(0.0).can_scroll_left());
        assert!(metrics(0.5).can_scroll_left());
    }

    #[test]
    fn right_arrow_has_one_pixel_tolerance() {
        assert!(metrics(598.0).can_scroll_right());
        assert!(!metrics(599.0).can_scroll_right());
        assert!(!metrics(600.0).can_scroll_right());
    }

    #[test]
    fn content_narrower_than_viewport_cannot_scroll() {
        let m = ScrollMetrics {
            scroll_left: 0.0,
            scroll_width: 300.0,
            client_width: 400.0,
        };
        assert!(!m.can_scroll_left());
        assert!(!m.can_scroll_right());
    }

    #[test]
    fn arrows_scroll_by_fixed_delta() {
        assert_eq!(scroll_left(), ScrollCommand::By(-300));
        assert_eq!(scroll_right(), ScrollCommand::By(300));
    }

    #[test]
    fn card_close_uses_layout_for_viewport() {
        assert_eq!(handle_card_close(0, 767), ScrollCommand::To(296));
        assert_eq!(handle_card_close(2, 375), ScrollCommand::To(888));
        assert_eq!(handle_card_close(0, 768), ScrollCommand::To(344));
        assert_eq!(handle_card_close(1, 1440), ScrollCommand::To(688));
    }
}
