//! Shared helpers for pane rendering
//!
//! All functions in this module are `pub(super)`, making them accessible only
//! within the panes module.

use crate::ui::theme::DEFAULT_THEME;
use ratatui::style::{Modifier, Style};

/// Border style for a pane, highlighted when it has focus
pub(super) fn border_style(is_focused: bool) -> Style {
    if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    }
}

/// Rows available inside a bordered block, at least 1
pub(super) fn visible_height(height: u16) -> usize {
    height.saturating_sub(2).max(1) as usize
}

/// Clamp a scroll offset so the last page stays full
pub(super) fn clamp_scroll(offset: &mut usize, total_items: usize, visible_height: usize) {
    if total_items > visible_height {
        *offset = (*offset).min(total_items - visible_height);
    } else {
        *offset = 0;
    }
}

/// Move `offset` the least amount needed for `row` to be on screen
pub(super) fn scroll_into_view(offset: &mut usize, row: usize, visible_height: usize) {
    if row < *offset {
        *offset = row;
    } else if row >= *offset + visible_height {
        *offset = row + 1 - visible_height;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_scroll() {
        let mut offset = 50;
        clamp_scroll(&mut offset, 20, 5);
        assert_eq!(offset, 15);

        clamp_scroll(&mut offset, 3, 5);
        assert_eq!(offset, 0);
    }

    #[test]
    fn test_scroll_into_view() {
        let mut offset = 10;
        scroll_into_view(&mut offset, 4, 5);
        assert_eq!(offset, 4);

        scroll_into_view(&mut offset, 12, 5);
        assert_eq!(offset, 8);

        // Already visible
        scroll_into_view(&mut offset, 9, 5);
        assert_eq!(offset, 8);
    }

    #[test]
    fn test_visible_height_never_zero() {
        assert_eq!(visible_height(0), 1);
        assert_eq!(visible_height(12), 10);
    }
}
