// App state and main event loop.
// Manages focus, keyboard input, and dispatch of FAQ fetches and submissions.

use std::io;
use std::sync::Arc;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::prelude::*;
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::controller::{Controller, Outcome};
use crate::state::{FaqViewState, FormField};
use crate::store::FaqStore;
use crate::ui;

/// Part of the screen receiving keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Question,
    Answer,
    List,
}

impl Focus {
    pub fn next(&self) -> Self {
        match self {
            Focus::Question => Focus::Answer,
            Focus::Answer => Focus::List,
            Focus::List => Focus::Question,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Focus::Question => Focus::List,
            Focus::Answer => Focus::Question,
            Focus::List => Focus::Answer,
        }
    }

    /// The form field this focus edits, if any.
    pub fn field(&self) -> Option<FormField> {
        match self {
            Focus::Question => Some(FormField::Question),
            Focus::Answer => Some(FormField::Answer),
            Focus::List => None,
        }
    }
}

/// Main application state.
pub struct App {
    /// Currently focused area.
    pub focus: Focus,
    /// FAQ list, form, and status flags.
    pub view: FaqViewState,
    /// Server the client talks to, shown in the header.
    pub api_url: String,
    /// Whether the help overlay is visible.
    pub show_help: bool,
    /// Whether the app should exit.
    pub should_quit: bool,
    controller: Controller,
    outcomes: mpsc::UnboundedReceiver<Outcome>,
}

impl App {
    pub fn new(store: Arc<FaqStore>, api_url: impl Into<String>) -> Self {
        let (controller, outcomes) = Controller::new(store);
        Self {
            focus: Focus::default(),
            view: FaqViewState::new(),
            api_url: api_url.into(),
            show_help: false,
            should_quit: false,
            controller,
            outcomes,
        }
    }

    /// Main event loop.
    pub fn run(&mut self, terminal: &mut Terminal<impl Backend>) -> io::Result<()> {
        self.mount();
        while !self.should_quit {
            self.drain_outcomes();
            terminal.draw(|frame| ui::draw(frame, self))?;
            self.handle_events()?;
        }
        Ok(())
    }

    /// Show any cached snapshot, then start the initial fetch.
    pub fn mount(&mut self) {
        if let Some(snapshot) = self.controller.store().cached_snapshot() {
            info!(count = snapshot.data.len(), cached_at = %snapshot.cached_at, "showing cached FAQs");
            self.view.restore_snapshot(snapshot);
        }
        self.view.start_fetch();
        self.controller.spawn_fetch();
    }

    /// Manual refresh. Ignored while a fetch is in flight.
    pub fn refresh(&mut self) {
        if self.view.loading {
            debug!("refresh ignored, fetch in flight");
            return;
        }
        self.view.start_fetch();
        self.controller.spawn_fetch();
    }

    /// Submit the form. Ignored while a submission is in flight or a field is blank.
    pub fn submit(&mut self) {
        if self.view.submitting {
            debug!("submit ignored, submission in flight");
            return;
        }
        match self.view.start_submit() {
            Some(faq) => {
                self.controller.spawn_submit(faq);
            }
            None => debug!("submit ignored, blank field"),
        }
    }

    /// Apply every outcome that has arrived since the last frame.
    pub fn drain_outcomes(&mut self) {
        while let Ok(outcome) = self.outcomes.try_recv() {
            self.view.apply(outcome);
        }
    }

    /// Handle keyboard and other events.
    #[allow(clippy::collapsible_if)]
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Dispatch a single key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        if self.show_help {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
                self.show_help = false;
            }
            return;
        }

        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('s') if ctrl => self.submit(),
            KeyCode::Char('r') if ctrl => self.refresh(),
            KeyCode::F(5) => self.refresh(),
            KeyCode::Tab => self.focus = self.focus.next(),
            KeyCode::BackTab => self.focus = self.focus.prev(),
            KeyCode::Esc => self.focus = Focus::List,
            _ => match self.focus.field() {
                Some(field) => self.handle_form_key(field, key),
                None => self.handle_list_key(key),
            },
        }
    }

    fn handle_form_key(&mut self, field: FormField, key: KeyEvent) {
        match key.code {
            KeyCode::Enter if field == FormField::Question => self.submit(),
            KeyCode::Enter => self.view.form.newline(field),
            KeyCode::Backspace => self.view.form.backspace(field),
            KeyCode::Char(c) => self.view.form.insert(field, c),
            _ => {}
        }
    }

    fn handle_list_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('r') => self.refresh(),
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Up | KeyCode::Char('k') => self.view.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.view.select_next(),
            _ => {}
        }
    }
}
