use std::io;
use std::time::Duration;

use clap::Parser;
use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind};
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, terminal};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use panel_kit::drivers::{ConsoleDriver, InputDriver};
use panel_kit::event_loop::{ControlFlow, EventLoop};
use panel_kit::tui::{CellMetrics, ClipFrame, render_panel, translate_event};
use panel_kit::{
    DismissalConfig, FixedViewport, Item, PanelConfig, PanelEvent, PanelHost, PanelResponse,
    PlacementFlags, PxSize, Result, SelectionMode, constants, theme, tracing_sub,
};

/// Floating panel demo: a trigger button that opens a dropdown panel.
#[derive(Debug, Parser)]
#[command(name = "panel-kit-demo")]
struct Args {
    /// Center the panel over the trigger instead of left-aligning.
    #[arg(long)]
    centered: bool,
    /// Force the panel to open upward from the trigger.
    #[arg(long)]
    top_fixed: bool,
    /// Force the panel to open downward below the trigger.
    #[arg(long)]
    bottom_fixed: bool,
    /// Match the panel width to the trigger width.
    #[arg(long)]
    width_fixed: bool,
    /// Follow scrolling instead of closing on it.
    #[arg(long)]
    reposition_on_scroll: bool,
    /// Multi-select with checkbox rows.
    #[arg(long)]
    multi: bool,
    /// Show a search box and filter as you type.
    #[arg(long)]
    searchable: bool,
    /// Number of generated rows.
    #[arg(long, default_value_t = 200)]
    items: usize,
}

fn main() -> Result<()> {
    tracing_sub::init_default();
    let args = Args::parse();
    let mut app = App::new(&args);

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    terminal::enable_raw_mode()?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;

    let mut event_loop = EventLoop::new(ConsoleDriver::new(), Duration::from_millis(16));
    event_loop.driver().set_mouse_capture(true)?;

    let result = event_loop.run(|_, event| {
        match event {
            Some(event) => {
                if app.handle_event(&event) {
                    return Ok(ControlFlow::Quit);
                }
            }
            None => {
                terminal.draw(|frame| {
                    app.screen = frame.area();
                    let mut clip = ClipFrame::new(frame);
                    app.draw(&mut clip);
                })?;
            }
        }
        Ok(ControlFlow::Continue)
    });

    terminal::disable_raw_mode()?;
    execute!(
        io::stdout(),
        crossterm::event::DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    result.map_err(Into::into)
}

struct App {
    host: PanelHost,
    metrics: CellMetrics,
    items: Vec<Item>,
    screen: Rect,
    status: String,
}

impl App {
    fn new(args: &Args) -> Self {
        let config = PanelConfig {
            placement: PlacementFlags {
                is_centered: args.centered,
                is_top_fixed: args.top_fixed,
                is_bottom_fixed: args.bottom_fixed,
                is_width_fixed: args.width_fixed,
            },
            dismissal: DismissalConfig {
                reposition_on_scroll: args.reposition_on_scroll,
                close_on_select: !args.multi,
                ..Default::default()
            },
            selection_mode: if args.multi {
                SelectionMode::Multi
            } else {
                SelectionMode::Single
            },
            has_active_by_default: true,
            searchable: args.searchable,
            ..Default::default()
        };
        Self {
            host: PanelHost::new(config),
            metrics: CellMetrics::default(),
            items: sample_items(args.items),
            screen: Rect::ZERO,
            status: String::from("press enter or click the button to open"),
        }
    }

    fn trigger_area(&self) -> Rect {
        Rect::new(4, 2, 18, 1)
    }

    fn port(&self) -> FixedViewport {
        FixedViewport::new(
            f64::from(self.screen.width) * self.metrics.px_per_col,
            f64::from(self.screen.height) * self.metrics.px_per_row,
        )
        .with_anchor(self.metrics.rect_to_px(self.trigger_area()))
    }

    fn open_panel(&mut self) {
        let port = self.port();
        let carried = self.host.selection().keys().to_vec();
        self.host.open(self.items.clone(), carried, &port);
        self.host
            .handle_event(PanelEvent::PanelMeasured(self.measure()), &port);
    }

    /// Desired panel size in pixels, the way a layout pass would report it.
    fn measure(&self) -> PxSize {
        let body = (self.host.row_count() as f64 * self.host.windowing().item_height)
            .min(constants::MAX_BODY_HEIGHT);
        let mut chrome = 2.0 * self.metrics.px_per_row;
        if self.host.config().searchable {
            chrome += self.metrics.px_per_row;
        }
        PxSize::new(28.0 * self.metrics.px_per_col, body + chrome)
    }

    /// Returns true when the app should quit.
    fn handle_event(&mut self, event: &Event) -> bool {
        if let Event::Key(key) = event
            && key.kind != KeyEventKind::Release
        {
            let quit_key = key.code == KeyCode::Char('q') && !self.host.is_open();
            let ctrl_c = key.code == KeyCode::Char('c')
                && key.modifiers.contains(KeyModifiers::CONTROL);
            if quit_key || ctrl_c {
                return true;
            }
            if !self.host.is_open() && key.code == KeyCode::Enter {
                self.open_panel();
                return false;
            }
        }
        if !self.host.is_open()
            && let Event::Mouse(mouse) = event
            && mouse.kind == MouseEventKind::Down(MouseButton::Left)
            && rect_contains(self.trigger_area(), mouse.column, mouse.row)
        {
            self.open_panel();
            return false;
        }

        let port = self.port();
        for panel_event in translate_event(event, &self.host, &self.metrics) {
            match self.host.handle_event(panel_event, &port) {
                PanelResponse::Committed { key, href } => {
                    self.status = match href {
                        Some(href) => format!("navigate to {href}"),
                        None => format!("committed {key}"),
                    };
                }
                PanelResponse::Closed => {
                    self.status = String::from("panel dismissed");
                }
                _ => {}
            }
        }
        false
    }

    fn draw(&self, frame: &mut ClipFrame<'_>) {
        let trigger = Paragraph::new(Line::from(" Open panel ")).style(
            Style::default()
                .bg(theme::trigger_bg())
                .fg(theme::trigger_fg()),
        );
        frame.render_widget(trigger, self.trigger_area());

        let selected: Vec<String> = self
            .host
            .selection()
            .keys()
            .iter()
            .map(ToString::to_string)
            .collect();
        let status = format!("{} | selected: [{}]", self.status, selected.join(", "));
        let status_area = Rect::new(4, 4, self.screen.width.saturating_sub(8), 1);
        frame.render_widget(
            Paragraph::new(status).style(Style::default().fg(theme::empty_fg())),
            status_area,
        );

        render_panel(frame, &self.host, &self.metrics);
    }
}

fn rect_contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x + area.width
        && row >= area.y
        && row < area.y + area.height
}

fn sample_items(count: usize) -> Vec<Item> {
    let mut items = Vec::with_capacity(count + 3);
    items.push(Item::link("docs", "Documentation", "https://example.com/docs"));
    items.push(Item::action("pinned", "Pinned entry").disabled());
    items.push(Item::divider());
    for i in 0..count {
        items.push(Item::action(i as i64, format!("Entry {i}")));
    }
    items
}
