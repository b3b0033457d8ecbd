// Interactive selection: the `Selector` capability and its terminal picker.

use std::io::{self, Write};
use std::sync::Once;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::debug;

use crate::app::{KeyOutcome, Picker, handle_key};
use crate::error::Result;
use crate::ui;

/// Result of one interactive selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Item indices in the order the operator picked them.
    Confirmed(Vec<usize>),
    Cancelled,
}

/// Multi-choice picker over a labelled list.
pub trait Selector {
    fn select<T, F>(&mut self, items: &[T], label: F) -> Result<Selection>
    where
        F: Fn(&T) -> String;
}

/// Full-screen fuzzy picker drawn on stderr, leaving stdout for results.
pub struct TerminalSelector {
    _private: (),
}

impl TerminalSelector {
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl Default for TerminalSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl Selector for TerminalSelector {
    fn select<T, F>(&mut self, items: &[T], label: F) -> Result<Selection>
    where
        F: Fn(&T) -> String,
    {
        let mut picker = Picker::new(items.iter().map(label).collect());

        let mut terminal = setup_terminal()?;
        install_panic_hook();
        let result = run(&mut terminal, &mut picker);
        restore_terminal()?;

        let selection = result?;
        debug!(?selection, "picker closed");
        Ok(selection)
    }
}

type Backend = CrosstermBackend<io::Stderr>;

static PANIC_HOOK: Once = Once::new();

fn setup_terminal() -> io::Result<Terminal<Backend>> {
    terminal::enable_raw_mode()?;
    let mut stderr = io::stderr();
    enter_alternate_screen(&mut stderr)?;
    let backend = CrosstermBackend::new(stderr);
    Terminal::new(backend).inspect_err(|_| {
        let _ = restore_terminal();
    })
}

/// Raw mode is already on here; leave it again if the switch fails.
fn enter_alternate_screen<W: Write>(w: &mut W) -> io::Result<()> {
    execute!(w, EnterAlternateScreen).inspect_err(|_| {
        let _ = terminal::disable_raw_mode();
    })
}

/// Restore the terminal before a panic is reported. Installed once, on the
/// first picker session; restoring an already restored terminal is harmless.
fn install_panic_hook() {
    PANIC_HOOK.call_once(|| {
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = restore_terminal();
            original_hook(info);
        }));
    });
}

fn restore_terminal() -> io::Result<()> {
    terminal::disable_raw_mode()?;
    execute!(io::stderr(), LeaveAlternateScreen)?;
    Ok(())
}

fn run(terminal: &mut Terminal<Backend>, picker: &mut Picker) -> Result<Selection> {
    loop {
        terminal.draw(|frame| ui::draw(frame, picker))?;

        // Blocks until input; nothing else can change the picker.
        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            match handle_key(picker, key) {
                KeyOutcome::Continue => {}
                KeyOutcome::Confirmed(indices) => return Ok(Selection::Confirmed(indices)),
                KeyOutcome::Cancelled => return Ok(Selection::Cancelled),
            }
        }
    }
}
