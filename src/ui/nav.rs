//! Navigation bar behaviour

/// Inline style applied to `.navbar`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavbarStyle {
    pub background: &'static str,
    pub box_shadow: &'static str,
}

impl NavbarStyle {
    pub const TOP: Self = Self {
        background: "rgba(255, 255, 255, 0.95)",
        box_shadow: "none",
    };

    pub const SCROLLED: Self = Self {
        background: "rgba(255, 255, 255, 0.98)",
        box_shadow: "0 2px 20px rgba(0, 0, 0, 0.1)",
    };

    /// Style for a vertical scroll offset
    pub fn for_scroll(scroll_y: f64, threshold: f64) -> Self {
        if scroll_y > threshold {
            Self::SCROLLED
        } else {
            Self::TOP
        }
    }
}

/// Selector for an in-page link target, or `None` for links the browser
/// should follow normally
pub fn anchor_selector(href: &str) -> Option<&str> {
    let href = href.trim();
    (href.len() > 1 && href.starts_with('#')).then_some(href)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navbar_threshold() {
        assert_eq!(NavbarStyle::for_scroll(0.0, 100.0), NavbarStyle::TOP);
        assert_eq!(NavbarStyle::for_scroll(100.0, 100.0), NavbarStyle::TOP);
        assert_eq!(NavbarStyle::for_scroll(100.5, 100.0), NavbarStyle::SCROLLED);
    }

    #[test]
    fn test_anchor_selector() {
        assert_eq!(anchor_selector("#projects"), Some("#projects"));
        assert_eq!(anchor_selector(" #about "), Some("#about"));
        assert_eq!(anchor_selector("#"), None);
        assert_eq!(anchor_selector("resume.pdf"), None);
        assert_eq!(anchor_selector("https://example.com/#x"), None);
    }
}
