//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Data Flow
//!
//! ```text
//! key ─► TuiEvent ─► component state ─► Action ─► update(app) ─► Effect
//!                                                      │
//!                         BookingStore ─► Snapshot ─► BookingListState
//! ```
//!
//! The list never reads the store directly. It holds the latest snapshot
//! received over the store subscription, drained once per loop iteration.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop sleeps up to 500ms and only redraws after
//! input, a resize or a new snapshot.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info};
use std::io::stdout;
use std::sync::mpsc::Receiver;
use std::time::Duration;

use chrono::{NaiveDate, Utc};
use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, EnableBracketedPaste, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::booking::DateRange;
use crate::core::config::{ResolvedConfig, WeekStart};
use crate::core::state::{App, Screen};
use crate::core::store::Snapshot;
use crate::tui::component::EventHandler;
use crate::tui::components::{
    BookingFormState, BookingListState, DateRangePickerState, FormEvent, ListEvent, PickerEvent,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const IDLE_POLL: Duration = Duration::from_millis(500);

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    // Persistent component states
    pub booking_list: BookingListState,
    pub form: BookingFormState,
    // Date range picker overlay (None = hidden)
    pub picker: Option<DateRangePickerState>,
    pub today: NaiveDate,
    pub week_start: WeekStart,
}

impl TuiState {
    pub fn new(snapshot: Snapshot, config: &ResolvedConfig, today: NaiveDate) -> Self {
        Self {
            booking_list: BookingListState::new(snapshot, config.confirm_delete),
            form: BookingFormState::new(),
            picker: None,
            today,
            week_start: config.week_start,
        }
    }

    pub fn open_picker(&mut self, initial: DateRange) {
        self.picker = Some(DateRangePickerState::new(
            self.today,
            initial,
            self.week_start,
        ));
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Disambiguated escape codes let a lone Esc through without delay
        execute!(
            stdout(),
            EnableBracketedPaste,
            Show,
            SetCursorStyle::SteadyBlock,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
        )?;
        info!("Terminal modes enabled (bracketed paste, steady block cursor, keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            PopKeyboardEnhancementFlags,
            DisableBracketedPaste,
            Hide
        );
    }
}

/// Route one input event to whichever component owns focus and translate
/// what it emits into a core action.
pub fn handle_event(app: &App, tui: &mut TuiState, event: TuiEvent) -> Option<Action> {
    if matches!(event, TuiEvent::ForceQuit) {
        return Some(Action::Quit);
    }

    // The picker is modal: it sees every event while open
    if let Some(picker) = tui.picker.as_mut() {
        return match picker.handle_event(&event)? {
            PickerEvent::Confirm(range) => {
                tui.picker = None;
                Some(Action::SetDraftRange(range))
            }
            PickerEvent::Dismiss => {
                tui.picker = None;
                None
            }
        };
    }

    match app.screen {
        Screen::BookingList => match tui.booking_list.handle_event(&event)? {
            ListEvent::Toggle(id) => Some(Action::ToggleBooking(id)),
            ListEvent::Delete(id) => Some(Action::DeleteBooking(id)),
            ListEvent::Add => Some(Action::OpenAddBooking),
            ListEvent::Back => Some(Action::NavigateBack),
        },
        Screen::AddBooking => match tui.form.handle_event(&event)? {
            FormEvent::TitleChanged(title) => Some(Action::SetDraftTitle(title)),
            FormEvent::OpenPicker => {
                tui.open_picker(app.draft.range);
                None
            }
            FormEvent::Save => Some(Action::SaveDraft),
            FormEvent::Back => Some(Action::NavigateBack),
        },
    }
}

/// Apply an update's effect to presentation state. Returns true to quit.
fn apply_effect(tui: &mut TuiState, effect: Effect) -> bool {
    match effect {
        Effect::None => false,
        Effect::Quit => true,
        Effect::FormClosed => {
            tui.form.reset();
            tui.picker = None;
            false
        }
    }
}

/// Hand every pending snapshot to the list. Returns true if any arrived.
fn sync_snapshots(snapshots: &Receiver<Snapshot>, tui: &mut TuiState) -> bool {
    let mut received = false;
    while let Ok(snapshot) = snapshots.try_recv() {
        debug!("Snapshot v{} ({} entries)", snapshot.version(), snapshot.len());
        tui.booking_list.set_snapshot(snapshot);
        received = true;
    }
    received
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::from_config(&config);
    let snapshots = app.store.subscribe();
    let mut tui = TuiState::new(app.store.snapshot(), &config, Utc::now().date_naive());

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    let mut needs_redraw = true; // Force first frame

    loop {
        if sync_snapshots(&snapshots, &mut tui) {
            needs_redraw = true;
        }

        // Only draw when something changed
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(IDLE_POLL);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(event, TuiEvent::Resize) {
                continue;
            }
            if let Some(action) = handle_event(&app, &mut tui, event) {
                let effect = update(&mut app, action);
                if apply_effect(&mut tui, effect) {
                    should_quit = true;
                    break;
                }
            }
        }

        if should_quit {
            break;
        }
    }

    info!("Exiting with {} bookings", app.store.snapshot().len());
    ratatui::restore();
    Ok(())
}
