use crate::config;

/// Percentage of the page scrolled, rounded up and clamped to 0..=100.
/// A page that cannot scroll reports 0.
pub fn scroll_progress(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> u8 {
    let scrollable = scroll_height - viewport_height;
    if scrollable <= 0.0 || !scrollable.is_finite() || !scroll_y.is_finite() {
        return 0;
    }
    let percent = (scroll_y / scrollable * 100.0).ceil();
    percent.clamp(0.0, 100.0) as u8
}

pub fn parallax_transform(scroll_y: f64) -> String {
    format!("translateY({:.1}px) rotate({:.2}deg)", scroll_y * 0.2, scroll_y * 0.01)
}

pub fn header_is_compact(scroll_y: f64) -> bool {
    scroll_y > config::HEADER_COMPACT_AFTER_PX
}

/// Element id an in-page link points at. Bare `#` and external links give
/// `None` so the browser handles them.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_rounds_up_and_clamps() {
        assert_eq!(scroll_progress(0.0, 2000.0, 1000.0), 0);
        assert_eq!(scroll_progress(1.0, 2000.0, 1000.0), 1);
        assert_eq!(scroll_progress(500.0, 2000.0, 1000.0), 50);
        assert_eq!(scroll_progress(1000.0, 2000.0, 1000.0), 100);
        // overscroll bounce on some browsers
        assert_eq!(scroll_progress(1200.0, 2000.0, 1000.0), 100);
        assert_eq!(scroll_progress(-40.0, 2000.0, 1000.0), 0);
    }

    #[test]
    fn short_page_reports_zero() {
        assert_eq!(scroll_progress(0.0, 800.0, 1000.0), 0);
        assert_eq!(scroll_progress(0.0, 1000.0, 1000.0), 0);
    }

    #[test]
    fn parallax_moves_slower_than_page() {
        assert_eq!(parallax_transform(0.0), "translateY(0.0px) rotate(0.00deg)");
        assert_eq!(parallax_transform(500.0), "translateY(100.0px) rotate(5.00deg)");
    }

    #[test]
    fn header_compacts_past_threshold() {
        assert!(!header_is_compact(0.0));
        assert!(!header_is_compact(10.0));
        assert!(header_is_compact(10.5));
    }

    #[test]
    fn only_fragment_links_have_targets() {
        assert_eq!(anchor_target("#about"), Some("about"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("mailto:someone@example.com"), None);
        assert_eq!(anchor_target("https://github.com/"), None);
    }
}
