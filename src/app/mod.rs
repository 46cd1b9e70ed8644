//! Application state for the throw card.
//!
//! [`CardApp`] owns the last bound throw and the card rendered from it.
//! Every snapshot replaces both outright; nothing from a previous snapshot
//! survives into the next card.

mod state;

pub use state::CardState;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::binder::{BoundThrow, ThrowBinder};
use crate::config::CardConfig;
use crate::models::Snapshot;
use crate::ui::card::{self, ThrowCard};

/// Card application state.
#[derive(Debug)]
pub struct CardApp {
    title: String,
    binder: ThrowBinder,
    bound: BoundThrow,
    card: ThrowCard,
    state: CardState,
    /// Number of snapshots applied
    updates: u64,
    /// Set when the card changed since the last draw
    pub needs_redraw: bool,
    pub should_quit: bool,
}

impl CardApp {
    /// Create the app in the [`CardState::NoData`] state.
    pub fn new(config: &CardConfig) -> Self {
        let title = config.display_title().to_string();
        let bound = BoundThrow::Unavailable;
        let card = card::render(&bound, &title);

        Self {
            title,
            binder: ThrowBinder::new(config.locale.clone()),
            bound,
            card,
            state: CardState::NoData,
            updates: 0,
            needs_redraw: true,
            should_quit: false,
        }
    }

    /// Use a specific binder (fixed timezone in tests).
    pub fn with_binder(mut self, binder: ThrowBinder) -> Self {
        self.binder = binder;
        self
    }

    /// Bind and render a new snapshot, replacing the previous card.
    ///
    /// Returns the resulting state.
    pub fn apply_snapshot(&mut self, snapshot: &Snapshot) -> CardState {
        let bound = self.binder.bind(snapshot);
        let card = card::render(&bound, &self.title);
        let state = CardState::from(&bound);

        if state != self.state {
            tracing::info!("Card state {} -> {}", self.state, state);
        }
        if card != self.card {
            self.mark_dirty();
        }

        self.bound = bound;
        self.card = card;
        self.state = state;
        self.updates += 1;
        state
    }

    pub fn state(&self) -> CardState {
        self.state
    }

    pub fn card(&self) -> &ThrowCard {
        &self.card
    }

    pub fn bound(&self) -> &BoundThrow {
        &self.bound
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn updates(&self) -> u64 {
        self.updates
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Handle a key press. `q`, `Esc` and `Ctrl+C` quit.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => self.quit(),
            KeyCode::Char('q') | KeyCode::Esc => self.quit(),
            _ => {}
        }
    }
}
