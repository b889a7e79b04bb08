//! Node list for search traces

use super::utils::{border_style, clamp_scroll, scroll_into_view, visible_height};
use crate::subject::graph::{Graph, NodeId};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};
use rustc_hash::FxHashMap;

/// Data needed to render the graph pane
///
/// Without a graph only the visited nodes are listed.
pub struct GraphRenderData<'a> {
    pub graph: Option<&'a Graph>,
    pub visited: &'a [NodeId],
}

/// Render every node with its visit order and outgoing edges
pub fn render_graph_pane(
    frame: &mut Frame,
    area: Rect,
    data: GraphRenderData<'_>,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let title = match data.graph {
        Some(graph) if graph.is_directed() => " Graph (directed) ",
        Some(_) => " Graph (undirected) ",
        None => " Visited ",
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    let nodes: &[NodeId] = match data.graph {
        Some(graph) => graph.nodes(),
        None => data.visited,
    };
    if nodes.is_empty() {
        let paragraph = Paragraph::new("(no nodes)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let order: FxHashMap<&str, usize> = data
        .visited
        .iter()
        .enumerate()
        .map(|(i, node)| (node.as_str(), i + 1))
        .collect();
    let latest = data.visited.last().map(String::as_str);
    let order_width = nodes.len().to_string().len() + 1;

    let height = visible_height(area.height);
    if let Some(row) = latest.and_then(|node| nodes.iter().position(|n| n == node)) {
        scroll_into_view(scroll_offset, row, height);
    }
    clamp_scroll(scroll_offset, nodes.len(), height);

    let items: Vec<ListItem> = nodes
        .iter()
        .skip(*scroll_offset)
        .take(height)
        .map(|node| {
            let (order_text, name_style) = match order.get(node.as_str()) {
                Some(&n) if Some(node.as_str()) == latest => (
                    format!("{:>width$}", format!("#{}", n), width = order_width),
                    Style::default()
                        .fg(DEFAULT_THEME.frontier)
                        .add_modifier(Modifier::BOLD),
                ),
                Some(&n) => (
                    format!("{:>width$}", format!("#{}", n), width = order_width),
                    Style::default().fg(DEFAULT_THEME.visited),
                ),
                None => (
                    format!("{:>width$}", "·", width = order_width),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
            };

            let mut spans = vec![
                Span::styled(order_text, Style::default().fg(DEFAULT_THEME.comment)),
                Span::raw(" "),
                Span::styled(node.clone(), name_style),
            ];

            if let Some(neighbors) = data.graph.and_then(|g| g.neighbors(node).ok()) {
                if !neighbors.is_empty() {
                    let arrow = if data.graph.is_some_and(Graph::is_directed) {
                        " → "
                    } else {
                        " ↔ "
                    };
                    spans.push(Span::styled(arrow, Style::default().fg(DEFAULT_THEME.comment)));
                    let edges = neighbors
                        .iter()
                        .map(|n| format!("{}({})", n.node, n.weight))
                        .collect::<Vec<_>>()
                        .join(" ");
                    spans.push(Span::styled(edges, Style::default().fg(DEFAULT_THEME.fg)));
                }
            }

            ListItem::new(Line::from(spans))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
