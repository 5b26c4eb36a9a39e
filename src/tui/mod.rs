mod theme;
mod views;
mod widgets;

use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, MouseButton,
        MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::{Backend, CrosstermBackend},
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::config::{CardConfig, TuiConfig, Variant};
use crate::error::Error;
use crate::harness::{Activation, CardStatus, DemoHarness};
use theme::Theme;
use views::{DemoView, DemoViewState};
use widgets::{CardComponent, CardEvent, StatusBar};

type Tui = Terminal<CrosstermBackend<Stdout>>;

struct App {
    running: bool,
    harness: DemoHarness,
    view_state: DemoViewState,
    status_message: Option<String>,
    show_help: bool,
}

impl App {
    fn new(harness: DemoHarness, config: &TuiConfig) -> Self {
        let mut view_state = DemoViewState::new();
        view_state
            .grid_state
            .focus_first(harness.snapshot().cards());

        Self {
            running: true,
            harness,
            view_state,
            status_message: Some("Press ? for help".to_string()),
            show_help: config.show_help_on_start,
        }
    }

    fn focused_card(&self) -> Option<&CardConfig> {
        self.view_state
            .grid_state
            .focused
            .and_then(|i| self.harness.snapshot().cards().get(i))
    }

    fn focused_component(&self) -> Option<CardComponent<'_>> {
        let card = self.focused_card()?;
        let active = self.harness.status_of(card.id().as_str()) == Some(CardStatus::Active);
        Some(CardComponent::new(card).active(active).focused(true))
    }

    fn handle_key(&mut self, key: KeyCode) {
        if self.show_help {
            match key {
                KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q') => {
                    self.show_help = false;
                }
                _ => {}
            }
            return;
        }

        let grid = &mut self.view_state.grid_state;
        let cards = self.harness.snapshot().cards();

        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.running = false,
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => grid.focus_next(cards),
            KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => grid.focus_prev(cards),
            KeyCode::Down | KeyCode::Char('j') => grid.focus_down(cards),
            KeyCode::Up | KeyCode::Char('k') => grid.focus_up(cards),
            KeyCode::Char('r') => {
                let change = self.harness.reset();
                self.log_changes(&change);
                self.status_message = Some("Selection reset".to_string());
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                let event = self.focused_component().and_then(|c| c.on_key(key));
                self.dispatch(event);
            }
            KeyCode::Char('v') => self.cycle_focused_variant(),
            _ => {}
        }
    }

    /// Swap the focused card between the default and highlighted variants.
    fn cycle_focused_variant(&mut self) {
        let Some(card) = self.focused_card() else {
            return;
        };
        let variant = match card.variant() {
            Variant::Default => Variant::Highlighted,
            Variant::Highlighted => Variant::Default,
            Variant::Disabled => return,
        };
        let replacement = card.clone().with_variant(variant);
        let title = replacement.title().to_string();

        match self.harness.replace_card(replacement) {
            Ok(change) => {
                self.log_changes(&change);
                self.status_message = Some(format!("'{}' is now {}", title, variant));
            }
            Err(e) => self.status_message = Some(format!("Replace failed: {}", e)),
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if self.show_help || mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }

        let Some(idx) = self
            .view_state
            .grid_state
            .hit_test(mouse.column, mouse.row)
        else {
            return;
        };
        let Some(card) = self.harness.snapshot().cards().get(idx) else {
            return;
        };

        let component = CardComponent::new(card);
        if component.is_focusable() {
            self.view_state.grid_state.focused = Some(idx);
        }
        let event = component.on_click();
        self.dispatch(event);
    }

    fn dispatch(&mut self, event: Option<CardEvent>) {
        let Some(CardEvent::Activate(id)) = event else {
            return;
        };

        let change = self.harness.activate(id.as_str());
        self.log_changes(&change);

        let snapshot = self.harness.snapshot();
        self.status_message = match &change {
            Activation::Changed {
                activated: Some(id),
                ..
            } => snapshot
                .card(id.as_str())
                .map(|c| match c.description() {
                    Some(description) => format!("Selected '{}': {}", c.title(), description),
                    None => format!("Selected '{}'", c.title()),
                }),
            Activation::Changed {
                deactivated: Some(id),
                ..
            } => snapshot
                .card(id.as_str())
                .map(|c| format!("Deselected '{}'", c.title())),
            _ => self.status_message.take(),
        };
    }

    fn log_changes(&self, change: &Activation) {
        if !change.is_changed() {
            return;
        }
        for id in change.affected() {
            tracing::debug!(id = %id, "card status changed");
        }
    }
}

fn init_terminal() -> io::Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn restore_terminal(terminal: &mut Tui) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}

fn ui(frame: &mut Frame, app: &mut App) {
    let [main, status] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(frame.area());

    frame.render_stateful_widget(
        DemoView::new(app.harness.snapshot()),
        main,
        &mut app.view_state,
    );

    let stats = app.harness.stats_text();
    let label = app.focused_component().map(|c| c.accessible_label());
    frame.render_widget(
        StatusBar::new(&stats)
            .focus_label(label.as_deref())
            .message(app.status_message.as_deref()),
        status,
    );

    if app.show_help {
        render_help_modal(frame, frame.area());
    }
}

fn render_help_modal(frame: &mut Frame, area: Rect) {
    let help_text = vec![
        Line::from(vec![Span::styled("Navigation", Theme::bold())]),
        Line::from("  Tab / → / l     Next card"),
        Line::from("  S-Tab / ← / h   Previous card"),
        Line::from("  ↓ / j           Card below"),
        Line::from("  ↑ / k           Card above"),
        Line::from(""),
        Line::from(vec![Span::styled("Actions", Theme::bold())]),
        Line::from("  Enter / Space   Select or deselect"),
        Line::from("  Click           Select or deselect"),
        Line::from("  v               Toggle highlight"),
        Line::from("  r               Reset selection"),
        Line::from(""),
        Line::from(vec![Span::styled("Card Status", Theme::bold())]),
        Line::from("  ●               Active"),
        Line::from("  ○               Inactive"),
        Line::from("  ✕               Disabled (skipped by Tab)"),
        Line::from(""),
        Line::from(vec![Span::styled("General", Theme::bold())]),
        Line::from("  ?               Toggle help"),
        Line::from("  q / Esc         Quit"),
    ];

    let width = 46;
    let height = help_text.len() as u16 + 2;
    let x = area.width.saturating_sub(width) / 2;
    let y = area.height.saturating_sub(height) / 2;
    let modal_area = Rect::new(x, y, width.min(area.width), height.min(area.height));

    frame.render_widget(Clear, modal_area);

    let help_block = Block::default()
        .title(" Help ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Theme::help_border())
        .style(Theme::help_background());

    frame.render_widget(Paragraph::new(help_text).block(help_block), modal_area);
}

fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    tick: Duration,
) -> Result<(), Error> {
    while app.running {
        terminal.draw(|frame| ui(frame, app)).map_err(Error::Io)?;

        if !event::poll(tick).map_err(Error::Io)? {
            continue;
        }

        match event::read().map_err(Error::Io)? {
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key.code),
            Event::Mouse(mouse) => app.handle_mouse(mouse),
            _ => {}
        }
    }
    Ok(())
}

/// Run the interactive demo until the user quits.
pub fn run(harness: DemoHarness, config: &TuiConfig) -> Result<(), Error> {
    let mut terminal = init_terminal().map_err(Error::Io)?;

    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        hook(info);
    }));

    tracing::info!(cards = harness.snapshot().cards().len(), "demo mounted");
    let mut app = App::new(harness, config);
    let result = event_loop(&mut terminal, &mut app, Duration::from_millis(config.tick_ms));

    restore_terminal(&mut terminal).map_err(Error::Io)?;
    tracing::info!(stats = %app.harness.stats_text(), "demo unmounted");
    result
}
