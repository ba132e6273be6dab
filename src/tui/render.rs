//! Overlay rendering for a visible panel.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{
    Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState,
};

use crate::host::{EmptyState, PanelHost};
use crate::item::ItemKind;
use crate::selection::SelectionMode;
use crate::theme;
use crate::tui::{CellMetrics, ClipFrame, PanelLayout};

/// Copy for a panel opened with no items at all.
pub const EMPTY_NO_ITEMS: &str = "nothing to display";
/// Copy for a search that filtered every item out. Distinct from
/// [`EMPTY_NO_ITEMS`]; the two states must not be conflated.
pub const EMPTY_NO_MATCHES: &str = "no items match your search";
/// Placeholder shown in an empty search box.
pub const SEARCH_PLACEHOLDER: &str = "type to filter...";

/// Draw one panel as a floating overlay. A hidden panel (unmeasured or
/// unplaced) draws nothing.
pub fn render_panel(frame: &mut ClipFrame<'_>, host: &PanelHost, metrics: &CellMetrics) {
    let Some(layout) = PanelLayout::of(host, metrics) else {
        return;
    };
    frame.render_widget(Clear, layout.frame);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::panel_border()))
        .style(Style::default().bg(theme::panel_bg()).fg(theme::panel_fg()));
    frame.render_widget(block, layout.frame);

    if let Some(search) = layout.search {
        render_search_line(frame, host, search);
    }

    if let Some(empty) = host.empty_state() {
        let copy = match empty {
            EmptyState::NoItems => EMPTY_NO_ITEMS,
            EmptyState::NoMatches => EMPTY_NO_MATCHES,
        };
        let paragraph = Paragraph::new(copy)
            .style(Style::default().fg(theme::empty_fg()))
            .centered();
        frame.render_widget(paragraph, layout.body);
        return;
    }

    render_rows(frame, host, &layout);
    render_scrollbar(frame, host, layout.body);
}

fn render_search_line(frame: &mut ClipFrame<'_>, host: &PanelHost, area: Rect) {
    let text = host.search_text();
    let (copy, style) = if text.is_empty() {
        (
            SEARCH_PLACEHOLDER.to_string(),
            Style::default().fg(theme::empty_fg()),
        )
    } else {
        (format!("/{text}"), Style::default().fg(theme::search_fg()))
    };
    frame.render_widget(Paragraph::new(copy).style(style), area);
}

fn render_rows(frame: &mut ClipFrame<'_>, host: &PanelHost, layout: &PanelLayout) {
    let multi = matches!(host.config().selection_mode, SelectionMode::Multi);
    for row in host.window().range() {
        let Some(line_y) = layout.line_for_row(host, row) else {
            continue;
        };
        let Some(item) = host.row(row) else {
            continue;
        };
        let area = Rect {
            x: layout.body.x,
            y: line_y,
            width: layout.body.width,
            height: 1,
        };
        let widget = match &item.kind {
            ItemKind::Divider => Paragraph::new(Line::from(
                "─".repeat(layout.body.width as usize),
            ))
            .style(Style::default().fg(theme::divider_fg())),
            _ => {
                let marker = if multi {
                    if host.selection().contains(&item.key) {
                        "[x] "
                    } else {
                        "[ ] "
                    }
                } else {
                    ""
                };
                let mut style = Style::default().fg(theme::panel_fg());
                if item.disabled {
                    style = Style::default()
                        .fg(theme::row_disabled_fg())
                        .add_modifier(Modifier::DIM);
                }
                if host.active_row() == Some(row) {
                    style = style
                        .bg(theme::row_active_bg())
                        .fg(theme::row_active_fg())
                        .remove_modifier(Modifier::DIM);
                }
                Paragraph::new(format!("{marker}{}", item.label)).style(style)
            }
        };
        frame.render_widget(widget, area);
    }
}

fn render_scrollbar(frame: &mut ClipFrame<'_>, host: &PanelHost, body: Rect) {
    let total = host.row_count();
    let view = body.height as usize;
    if total <= view || view == 0 {
        return;
    }
    let offset = (host.window().scroll_top / host.windowing().item_height).floor() as usize;
    let content_len = total.saturating_sub(view).saturating_add(1).max(1);
    let mut state = ScrollbarState::new(content_len)
        .position(offset.min(content_len.saturating_sub(1)))
        .viewport_content_length(view.max(1));
    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight);
    frame.render_stateful_widget(scrollbar, body, &mut state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{PxRect, PxSize};
    use crate::host::{PanelConfig, PanelEvent};
    use crate::item::Item;
    use crate::viewport::FixedViewport;
    use ratatui::buffer::Buffer;

    fn rendered_text(host: &PanelHost) -> String {
        let area = Rect::new(0, 0, 120, 40);
        let mut buffer = Buffer::empty(area);
        let mut frame = ClipFrame::from_parts(area, &mut buffer);
        render_panel(&mut frame, host, &CellMetrics::default());
        let mut text = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                if let Some(cell) = buffer.cell((x, y)) {
                    text.push_str(cell.symbol());
                }
            }
            text.push('\n');
        }
        text
    }

    fn open_visible(config: PanelConfig, items: Vec<Item>) -> (PanelHost, FixedViewport) {
        let port = FixedViewport::new(1200.0, 1600.0)
            .with_anchor(PxRect::new(100.0, 80.0, 100.0, 40.0));
        let mut host = PanelHost::new(config);
        host.open(items, [], &port);
        host.handle_event(PanelEvent::PanelMeasured(PxSize::new(300.0, 400.0)), &port);
        (host, port)
    }

    #[test]
    fn hidden_panel_draws_nothing() {
        let host = PanelHost::new(PanelConfig::default());
        let text = rendered_text(&host);
        assert!(text.trim_matches(['\n', ' ']).is_empty());
    }

    #[test]
    fn labels_and_active_row_render() {
        let (mut host, port) = open_visible(
            PanelConfig::default(),
            vec![Item::action("a", "Alpha"), Item::action("b", "Beta")],
        );
        host.handle_event(PanelEvent::HoverRow(1), &port);
        let text = rendered_text(&host);
        assert!(text.contains("Alpha"));
        assert!(text.contains("Beta"));
    }

    #[test]
    fn multi_mode_marks_selected_rows() {
        let config = PanelConfig {
            selection_mode: SelectionMode::Multi,
            ..Default::default()
        };
        let (mut host, port) = open_visible(
            config,
            vec![Item::action("a", "Alpha"), Item::action("b", "Beta")],
        );
        host.handle_event(PanelEvent::ClickRow(0), &port);
        let text = rendered_text(&host);
        assert!(text.contains("[x] Alpha"));
        assert!(text.contains("[ ] Beta"));
    }

    #[test]
    fn empty_states_use_distinct_copy() {
        let (host, _) = open_visible(PanelConfig::default(), Vec::new());
        assert!(rendered_text(&host).contains(EMPTY_NO_ITEMS));

        let config = PanelConfig {
            searchable: true,
            ..Default::default()
        };
        let (mut host, port) = open_visible(config, vec![Item::action("a", "Alpha")]);
        host.handle_event(PanelEvent::SearchChar('z'), &port);
        let text = rendered_text(&host);
        assert!(text.contains(EMPTY_NO_MATCHES));
        assert!(!text.contains(EMPTY_NO_ITEMS));
    }
}
