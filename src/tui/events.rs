//! Translation from crossterm input to engine [`PanelEvent`]s.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};

use crate::constants::WHEEL_SCROLL_ROWS;
use crate::host::{PanelEvent, PanelHost};
use crate::navigation::NavKey;
use crate::tui::{CellMetrics, PanelLayout};

/// Translate one terminal event into the engine events it implies for an
/// open panel. A single input can imply more than one engine event: mouse
/// movement both re-enables hover highlighting and hovers a row.
pub fn translate_event(
    event: &Event,
    host: &PanelHost,
    metrics: &CellMetrics,
) -> Vec<PanelEvent> {
    if !host.is_open() {
        return Vec::new();
    }
    match event {
        Event::Key(key) => translate_key(key, host),
        Event::Mouse(mouse) => translate_mouse(mouse, host, metrics),
        _ => Vec::new(),
    }
}

fn translate_key(key: &KeyEvent, host: &PanelHost) -> Vec<PanelEvent> {
    if key.kind == KeyEventKind::Release {
        return Vec::new();
    }
    let event = match key.code {
        KeyCode::Up => Some(PanelEvent::Key(NavKey::Up)),
        KeyCode::Down => Some(PanelEvent::Key(NavKey::Down)),
        KeyCode::Enter => Some(PanelEvent::Key(NavKey::Enter)),
        KeyCode::Esc => Some(PanelEvent::Key(NavKey::Escape)),
        KeyCode::Backspace => Some(PanelEvent::Key(NavKey::Backspace)),
        KeyCode::Char(ch) if host.config().searchable => Some(PanelEvent::SearchChar(ch)),
        _ => None,
    };
    event.into_iter().collect()
}

fn translate_mouse(mouse: &MouseEvent, host: &PanelHost, metrics: &CellMetrics) -> Vec<PanelEvent> {
    let layout = PanelLayout::of(host, metrics);
    match mouse.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) => {
            let mut events = vec![PanelEvent::PointerMoved];
            if let Some(layout) = layout
                && let Some(row) = layout.row_at(host, mouse.column, mouse.row)
            {
                events.push(PanelEvent::HoverRow(row));
            }
            events
        }
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(layout) = layout {
                if let Some(row) = layout.row_at(host, mouse.column, mouse.row) {
                    return vec![PanelEvent::ClickRow(row)];
                }
                if layout.contains(mouse.column, mouse.row) {
                    // Chrome (border, search box): inside the panel, no row.
                    return Vec::new();
                }
            }
            vec![PanelEvent::PointerDown(
                metrics.cell_center(mouse.column, mouse.row),
            )]
        }
        MouseEventKind::ScrollUp | MouseEventKind::ScrollDown => {
            let inside = layout
                .map(|layout| layout.contains(mouse.column, mouse.row))
                .unwrap_or(false);
            if inside {
                let step = WHEEL_SCROLL_ROWS * host.windowing().item_height;
                let current = host.window().scroll_top;
                let next = match mouse.kind {
                    MouseEventKind::ScrollUp => current - step,
                    _ => current + step,
                };
                vec![PanelEvent::ContainerScroll(next)]
            } else {
                // Wheel outside the panel scrolls an ancestor.
                vec![PanelEvent::AncestorScroll]
            }
        }
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{PxRect, PxSize};
    use crate::host::PanelConfig;
    use crate::item::Item;
    use crate::viewport::FixedViewport;
    use crossterm::event::KeyModifiers;

    fn visible_host(config: PanelConfig) -> PanelHost {
        let port = FixedViewport::new(1200.0, 1600.0)
            .with_anchor(PxRect::new(100.0, 80.0, 100.0, 40.0));
        let mut host = PanelHost::new(config);
        let items = (0..50)
            .map(|i| Item::action(i as i64, format!("Item {i}")))
            .collect();
        host.open(items, [], &port);
        host.handle_event(PanelEvent::PanelMeasured(PxSize::new(200.0, 400.0)), &port);
        host
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn navigation_keys_translate() {
        let host = visible_host(PanelConfig::default());
        let metrics = CellMetrics::default();
        assert_eq!(
            translate_event(&key(KeyCode::Down), &host, &metrics),
            vec![PanelEvent::Key(NavKey::Down)]
        );
        assert_eq!(
            translate_event(&key(KeyCode::Esc), &host, &metrics),
            vec![PanelEvent::Key(NavKey::Escape)]
        );
        // Typing does nothing for a non-searchable panel.
        assert_eq!(
            translate_event(&key(KeyCode::Char('a')), &host, &metrics),
            Vec::new()
        );
    }

    #[test]
    fn typed_chars_feed_the_search_box() {
        let host = visible_host(PanelConfig {
            searchable: true,
            ..Default::default()
        });
        assert_eq!(
            translate_event(&key(KeyCode::Char('a')), &host, &CellMetrics::default()),
            vec![PanelEvent::SearchChar('a')]
        );
    }

    #[test]
    fn click_inside_body_hits_a_row() {
        let host = visible_host(PanelConfig::default());
        let metrics = CellMetrics::default();
        let layout = PanelLayout::of(&host, &metrics).unwrap();
        let events = translate_event(
            &mouse(
                MouseEventKind::Down(MouseButton::Left),
                layout.body.x,
                layout.body.y,
            ),
            &host,
            &metrics,
        );
        assert_eq!(events, vec![PanelEvent::ClickRow(0)]);
    }

    #[test]
    fn click_outside_becomes_pointer_down() {
        let host = visible_host(PanelConfig::default());
        let events = translate_event(
            &mouse(MouseEventKind::Down(MouseButton::Left), 0, 0),
            &host,
            &CellMetrics::default(),
        );
        assert!(matches!(events.as_slice(), [PanelEvent::PointerDown(_)]));
    }

    #[test]
    fn movement_implies_pointer_moved_then_hover() {
        let host = visible_host(PanelConfig::default());
        let metrics = CellMetrics::default();
        let layout = PanelLayout::of(&host, &metrics).unwrap();
        let events = translate_event(
            &mouse(MouseEventKind::Moved, layout.body.x, layout.body.y),
            &host,
            &metrics,
        );
        assert_eq!(
            events,
            vec![PanelEvent::PointerMoved, PanelEvent::HoverRow(0)]
        );
    }

    #[test]
    fn wheel_splits_container_and_ancestor_scroll() {
        let host = visible_host(PanelConfig::default());
        let metrics = CellMetrics::default();
        let layout = PanelLayout::of(&host, &metrics).unwrap();
        let inside = translate_event(
            &mouse(MouseEventKind::ScrollDown, layout.body.x, layout.body.y),
            &host,
            &metrics,
        );
        assert_eq!(inside, vec![PanelEvent::ContainerScroll(120.0)]);
        let outside = translate_event(&mouse(MouseEventKind::ScrollDown, 0, 0), &host, &metrics);
        assert_eq!(outside, vec![PanelEvent::AncestorScroll]);
    }
}
