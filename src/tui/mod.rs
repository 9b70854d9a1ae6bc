//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the list
//! screen, and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The core list notifies a dirty flag after every mutation. The loop
//! redraws when that flag is set, when an input event arrived, or every
//! ~80ms while loading so the spinner animates. Idle frames sleep up to
//! 500ms waiting for input.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};

use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::details::CountryDetails;
use crate::core::state::CountryList;
use crate::network::{CountriesService, CountryRepository};
use crate::tui::component::EventHandler;
use crate::tui::components::{CountryListState, ListEvent, SearchBar, SearchEvent};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub search_bar: SearchBar,
    pub country_list: CountryListState,
    // Details overlay (None = hidden)
    pub details: Option<CountryDetails>,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            search_bar: SearchBar::default(),
            country_list: CountryListState::new(),
            details: None,
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableBracketedPaste)?;
        info!("Terminal modes enabled (bracketed paste)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste);
    }
}

/// Build the repository from a resolved config.
pub fn build_repository(config: &ResolvedConfig) -> Arc<dyn CountryRepository> {
    Arc::new(CountriesService::new(Some(config.base_url.clone())).with_timeout(config.timeout))
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut list = CountryList::new(build_repository(&config), config.page_size);
    list.set_region(config.region);

    let dirty = Arc::new(AtomicBool::new(true));
    {
        let dirty = dirty.clone();
        list.subscribe(Box::new(move |_| dirty.store(true, Ordering::Relaxed)));
    }

    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    dispatch(&mut list, &mut tui, Action::LoadCountries, &tx);

    let start_time = std::time::Instant::now();

    'outer: loop {
        let animating = list.is_loading();

        if animating || dirty.swap(false, Ordering::Relaxed) {
            tui.country_list.sync(list.visible().len());
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &list, &mut tui, spinner_frame))?;
        }

        // Dynamic poll timeout: short when animating (~12fps), long when idle
        let timeout = if animating {
            std::time::Duration::from_millis(80)
        } else {
            std::time::Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            dirty.store(true, Ordering::Relaxed);
        }

        // Process first event + drain ALL pending events before next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if handle_event(&mut list, &mut tui, event, &tx) == Effect::Quit {
                break 'outer;
            }
        }

        // Handle background task actions (fetch results)
        while let Ok(action) = rx.try_recv() {
            debug!("Event loop received background action");
            if dispatch(&mut list, &mut tui, action, &tx) == Effect::Quit {
                break 'outer;
            }
        }
    }

    ratatui::restore();
    Ok(())
}

/// Runs an action through the reducer and performs its effect.
fn dispatch(
    list: &mut CountryList,
    tui: &mut TuiState,
    action: Action,
    tx: &mpsc::Sender<Action>,
) -> Effect {
    let resets_window = matches!(
        action,
        Action::SetSearchText(_) | Action::SetRegion(_) | Action::CountriesLoaded(_)
    );
    let effect = update(list, action);
    if resets_window {
        tui.country_list.sync(list.visible().len());
        tui.country_list.reset();
    }
    if effect == Effect::FetchCountries {
        spawn_fetch(list.repository(), tx.clone());
    }
    effect
}

/// Routes one terminal event. Returns `Effect::Quit` when the app should exit.
fn handle_event(
    list: &mut CountryList,
    tui: &mut TuiState,
    event: TuiEvent,
    tx: &mpsc::Sender<Action>,
) -> Effect {
    match event {
        TuiEvent::Resize => Effect::None,
        TuiEvent::ForceQuit => dispatch(list, tui, Action::Quit, tx),
        TuiEvent::Refresh => dispatch(list, tui, Action::Refresh, tx),
        // Details overlay swallows everything else until dismissed
        _ if tui.details.is_some() => {
            if event == TuiEvent::Escape {
                tui.details = None;
            }
            Effect::None
        }
        TuiEvent::Escape => match tui.search_bar.clear() {
            Some(SearchEvent::Changed(text)) => dispatch(list, tui, Action::SetSearchText(text), tx),
            None => dispatch(list, tui, Action::Quit, tx),
        },
        TuiEvent::NextRegion => {
            let region = list.selected_region().next();
            dispatch(list, tui, Action::SetRegion(region), tx)
        }
        TuiEvent::PrevRegion => {
            let region = list.selected_region().prev();
            dispatch(list, tui, Action::SetRegion(region), tx)
        }
        TuiEvent::InputChar(_) | TuiEvent::Paste(_) | TuiEvent::Backspace => {
            match tui.search_bar.handle_event(&event) {
                Some(SearchEvent::Changed(text)) => {
                    dispatch(list, tui, Action::SetSearchText(text), tx)
                }
                None => Effect::None,
            }
        }
        _ => {
            tui.country_list.sync(list.visible().len());
            match tui.country_list.handle_event(&event) {
                Some(ListEvent::Moved(index)) => match list.visible().get(index) {
                    Some(country) => {
                        let id = country.id.clone();
                        dispatch(list, tui, Action::ItemShown(id), tx)
                    }
                    None => Effect::None,
                },
                Some(ListEvent::Open(index)) => {
                    tui.details = list.visible().get(index).cloned().map(CountryDetails::new);
                    Effect::None
                }
                None => Effect::None,
            }
        }
    }
}

fn spawn_fetch(repository: Arc<dyn CountryRepository>, tx: mpsc::Sender<Action>) {
    info!("Spawning country fetch");
    tokio::spawn(async move {
        let result = repository
            .fetch_countries()
            .await
            .map_err(|e| e.to_string());
        if tx.send(Action::CountriesLoaded(result)).is_err() {
            warn!("Failed to send fetch result: receiver dropped");
        }
    });
}
