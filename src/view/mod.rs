//! TUI rendering and terminal management (impure shell)

mod box_view;
pub mod constants;
pub mod styles;

pub use box_view::FitBoxView;
pub use styles::{BoxStyles, ColorConfig};

use crate::config::{KeyBindings, ResolvedConfig};
use crate::model::KeyAction;
use crate::sizing::SizingOutcome;
use crate::state::{BoxWidget, EntryPool};
use crate::surface::{CellSurface, RowSet, Viewport};
use constants::{REPORT_COLUMNS, REPORT_ROWS};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::{Backend, CrosstermBackend, TestBackend},
    Terminal,
};
use std::io::{self, Stdout};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

impl From<TuiError> for crate::model::AppError {
    fn from(err: TuiError) -> Self {
        match err {
            TuiError::Io(io) => crate::model::AppError::Io(io),
        }
    }
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: Backend,
{
    terminal: Terminal<B>,
    widget: BoxWidget,
    pool: EntryPool,
    key_bindings: KeyBindings,
    width_percent: u8,
    styles: BoxStyles,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(config: &ResolvedConfig, styles: BoxStyles) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self::with_terminal(terminal, config, styles))
    }

    /// Run the main event loop
    ///
    /// Returns when user quits. Redraws only on input or resize.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;

        loop {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if self.handle_key(key) {
                        return Ok(());
                    }
                    self.draw()?;
                }
                Event::Resize(width, height) => {
                    debug!(width, height, "Terminal resized");
                    self.draw()?;
                }
                _ => {}
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: Backend,
{
    /// Build an app around an existing terminal.
    pub fn with_terminal(terminal: Terminal<B>, config: &ResolvedConfig, styles: BoxStyles) -> Self {
        Self {
            terminal,
            widget: BoxWidget::new(config.entries.clone(), config.default_font_size),
            pool: EntryPool::new(config.entries.clone()),
            key_bindings: KeyBindings::default(),
            width_percent: config.width_percent,
            styles,
        }
    }

    /// The box widget state.
    pub fn widget(&self) -> &BoxWidget {
        &self.widget
    }

    /// The underlying terminal, for inspecting a test backend.
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Render, then hand the committed rows to the widget.
    ///
    /// If the commit changed the font size or ellipsis flag the frame is drawn
    /// again so the screen reflects the new state. That second commit carries
    /// the same row set, so it never triggers another pass.
    pub fn draw(&mut self) -> Result<Option<SizingOutcome>, TuiError> {
        let outcome = self.render_and_commit()?;
        if matches!(outcome, Some(SizingOutcome::Applied { .. })) {
            self.render_and_commit()?;
        }
        Ok(outcome)
    }

    fn render_and_commit(&mut self) -> Result<Option<SizingOutcome>, TuiError> {
        let (mut surface, rows) = self.mount()?;
        let view = FitBoxView::new(&self.widget, &surface, &rows).with_styles(self.styles);
        self.terminal.draw(|frame| frame.render_widget(view, frame.area()))?;

        let outcome = if self.widget.is_subscribed() {
            self.widget.on_rows_committed(&mut surface, &rows)
        } else {
            self.widget.after_first_render(&mut surface, &rows)
        };
        Ok(outcome)
    }

    fn mount(&self) -> Result<(CellSurface, RowSet), TuiError> {
        let cols = self.terminal.size()?.width.max(1);
        Ok(CellSurface::mount(
            self.widget.entries(),
            self.widget.font_size(),
            Viewport::new(cols, self.width_percent),
            self.widget.generation(),
        ))
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        match self.key_bindings.get(key) {
            Some(KeyAction::Quit) => true,
            Some(KeyAction::AppendEntry) => {
                let label = self.pool.next_label();
                debug!(%label, "Appending entry");
                self.widget.push_entry(label);
                false
            }
            Some(KeyAction::RemoveEntry) => {
                if let Some(label) = self.widget.pop_entry() {
                    debug!(%label, "Removed entry");
                }
                false
            }
            None => false,
        }
    }
}

/// Run the interactive box view until the user quits.
pub fn run(config: &ResolvedConfig, styles: BoxStyles) -> Result<(), TuiError> {
    info!(entries = config.entries.len(), "Starting box view");
    let mut app = TuiApp::new(config, styles)?;

    // Run the app and ensure cleanup happens even on error
    let result = app.run();

    restore_terminal()?;

    result
}

/// Render once into an off-screen terminal and return the widget state.
///
/// Backs `--report`: same render/commit sequence as the live view, no tty needed.
pub fn report(config: &ResolvedConfig) -> Result<BoxWidget, TuiError> {
    let terminal = Terminal::new(TestBackend::new(REPORT_COLUMNS, REPORT_ROWS))?;
    let mut app = TuiApp::with_terminal(terminal, config, BoxStyles::plain());
    let outcome = app.draw()?;
    debug!(?outcome, "Report pass finished");
    Ok(app.widget)
}

/// Restore terminal to normal state
///
/// Disables raw mode and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
