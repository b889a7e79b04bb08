//! Step log pane: every step of the trace with the current one highlighted

use super::utils::{border_style, clamp_scroll, visible_height};
use crate::trace::StepTrace;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Scroll state for the step log
///
/// The current step is pinned to `target_row` so it stays in the same visual
/// place while stepping; scrolling moves the pin.
#[derive(Debug, Default)]
pub struct StepsScrollState {
    pub offset: usize,
    pub target_row: Option<usize>,
}

/// Render the step log
pub fn render_steps_pane(
    frame: &mut Frame,
    area: Rect,
    trace: &StepTrace,
    position: usize,
    is_focused: bool,
    scroll_state: &mut StepsScrollState,
) {
    let block = Block::default()
        .title(format!(" Steps ({}) ", trace.algorithm().log_name()))
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    if trace.is_empty() {
        let paragraph = Paragraph::new("(no steps)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let height = visible_height(area.height);
    let target_row = scroll_state
        .target_row
        .unwrap_or(height / 2)
        .min(height - 1);
    scroll_state.target_row = Some(target_row);
    scroll_state.offset = position.saturating_sub(target_row);
    clamp_scroll(&mut scroll_state.offset, trace.len(), height);

    let number_width = trace.len().to_string().len();
    let items: Vec<ListItem> = trace
        .iter()
        .enumerate()
        .skip(scroll_state.offset)
        .take(height)
        .map(|(idx, step)| {
            let is_current = idx == position;
            let (marker, num_style, text_style) = if is_current {
                (
                    "▶ ",
                    Style::default()
                        .fg(DEFAULT_THEME.secondary)
                        .add_modifier(Modifier::BOLD),
                    Style::default()
                        .fg(DEFAULT_THEME.fg)
                        .bg(DEFAULT_THEME.current_line_bg),
                )
            } else {
                (
                    "  ",
                    Style::default().fg(DEFAULT_THEME.comment),
                    Style::default().fg(DEFAULT_THEME.fg),
                )
            };
            ListItem::new(Line::from(vec![
                Span::styled(marker, num_style),
                Span::styled(
                    format!("{:>width$} ", idx + 1, width = number_width),
                    num_style,
                ),
                Span::styled(step.to_string(), text_style),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
