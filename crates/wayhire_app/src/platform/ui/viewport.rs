use std::ops::Range;

use wayhire_core::ScrollMetrics;

use super::constants::{ROW_HEIGHT, SCROLL_STEP, VIEWPORT_HEIGHT};

/// Scroll position of the terminal listing, measured in virtual pixels so the
/// core's proximity threshold keeps its meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    offset: u32,
}

impl Viewport {
    pub fn metrics(&self, rows: usize) -> ScrollMetrics {
        ScrollMetrics {
            offset: self.offset,
            visible_height: VIEWPORT_HEIGHT,
            content_height: content_height(rows),
        }
    }

    pub fn scroll_down(&mut self, rows: usize) {
        self.offset = (self.offset + SCROLL_STEP).min(max_offset(rows));
    }

    pub fn scroll_up(&mut self) {
        self.offset = self.offset.saturating_sub(SCROLL_STEP);
    }

    pub fn reset(&mut self) {
        self.offset = 0;
    }

    /// Keeps the offset valid after the row count shrank.
    pub fn clamp(&mut self, rows: usize) {
        self.offset = self.offset.min(max_offset(rows));
    }

    pub fn visible_rows(&self, rows: usize) -> Range<usize> {
        let first = (self.offset / ROW_HEIGHT) as usize;
        let count = (VIEWPORT_HEIGHT / ROW_HEIGHT) as usize;
        first.min(rows)..(first + count).min(rows)
    }
}

fn content_height(rows: usize) -> u32 {
    u32::try_from(rows)
        .unwrap_or(u32::MAX)
        .saturating_mul(ROW_HEIGHT)
}

fn max_offset(rows: usize) -> u32 {
    content_height(rows).saturating_sub(VIEWPORT_HEIGHT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_list_cannot_scroll() {
        let mut viewport = Viewport::default();
        viewport.scroll_down(5);
        assert_eq!(viewport.metrics(5).offset, 0);
        assert_eq!(viewport.visible_rows(5), 0..5);
    }

    #[test]
    fn scrolling_moves_window_and_stops_at_end() {
        let mut viewport = Viewport::default();
        viewport.scroll_down(30);
        assert_eq!(viewport.visible_rows(30), 5..15);

        for _ in 0..10 {
            viewport.scroll_down(30);
        }
        let metrics = viewport.metrics(30);
        assert_eq!(metrics.offset + metrics.visible_height, metrics.content_height);
        assert_eq!(viewport.visible_rows(30), 20..30);

        viewport.scroll_up();
        assert_eq!(viewport.visible_rows(30), 15..25);
    }

    #[test]
    fn first_full_page_sits_near_bottom() {
        let viewport = Viewport::default();
        assert!(viewport.metrics(10).is_near_bottom(300));
        assert!(!viewport.metrics(20).is_near_bottom(300));
    }

    #[test]
    fn clamp_follows_shrinking_list() {
        let mut viewport = Viewport::default();
        for _ in 0..4 {
            viewport.scroll_down(40);
        }
        viewport.clamp(12);
        assert_eq!(viewport.metrics(12).offset, 2 * ROW_HEIGHT);
    }
}
