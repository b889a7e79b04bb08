//! Value bars for sort traces

use super::utils::{border_style, clamp_scroll, scroll_into_view, visible_height};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Data needed to render the bars pane
pub struct BarsRenderData<'a> {
    pub values: &'a [i64],
    pub comparing: &'a [usize],
    pub swapped: &'a [usize],
}

/// Bar length for `value` when the values span `min..=max`.
///
/// The smallest value still gets one cell so it stays visible.
pub fn bar_length(value: i64, min: i64, max: i64, width: usize) -> usize {
    if width == 0 {
        return 0;
    }
    if max <= min {
        return width;
    }
    let span = max as i128 - min as i128;
    let offset = value as i128 - min as i128;
    let scaled = offset * (width as i128 - 1) / span;
    scaled as usize + 1
}

/// Render one horizontal bar per element, highlighting the annotated indices
pub fn render_bars_pane(
    frame: &mut Frame,
    area: Rect,
    data: BarsRenderData<'_>,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = Block::default()
        .title(" Values ")
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    if data.values.is_empty() {
        let paragraph = Paragraph::new("(empty sequence)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let min = data.values.iter().copied().min().unwrap_or(0);
    let max = data.values.iter().copied().max().unwrap_or(0);

    let index_width = (data.values.len() - 1).to_string().len();
    let value_width = data
        .values
        .iter()
        .map(|v| v.to_string().len())
        .max()
        .unwrap_or(1);
    // borders, index, separators and the value label
    let bar_width = (area.width as usize).saturating_sub(2 + index_width + 3 + value_width + 1);

    let height = visible_height(area.height);
    let highlighted = data.swapped.first().or_else(|| data.comparing.first());
    if let Some(&row) = highlighted {
        scroll_into_view(scroll_offset, row, height);
    }
    clamp_scroll(scroll_offset, data.values.len(), height);

    let items: Vec<ListItem> = data
        .values
        .iter()
        .enumerate()
        .skip(*scroll_offset)
        .take(height)
        .map(|(idx, &value)| {
            let color = if data.swapped.contains(&idx) {
                DEFAULT_THEME.swapped
            } else if data.comparing.contains(&idx) {
                DEFAULT_THEME.comparing
            } else {
                DEFAULT_THEME.bar
            };
            let is_marked = color != DEFAULT_THEME.bar;
            let mut bar_style = Style::default().fg(color);
            if is_marked {
                bar_style = bar_style.add_modifier(Modifier::BOLD);
            }

            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:>width$} │ ", idx, width = index_width),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
                Span::styled("█".repeat(bar_length(value, min, max, bar_width)), bar_style),
                Span::styled(format!(" {}", value), bar_style),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
