// crates/synctab-cli/src/io/keys.rs
//
// Operator keys during a search: Esc (or Ctrl+C, which raw mode swallows)
// aborts the run, any other key skips to the next line count.

use std::io::IsTerminal;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal;
use synctab_core::cancel::{CancelPoll, CancelSignal};

pub static RAW_MODE: AtomicBool = AtomicBool::new(false);

/// Raw mode for the lifetime of the guard, so single key presses arrive without Enter.
pub struct RawModeGuard {
    _priv: (),
}

impl RawModeGuard {
    /// None when stdin is not a terminal or raw mode is unavailable.
    pub fn enable() -> Option<Self> {
        if !std::io::stdin().is_terminal() {
            return None;
        }
        match terminal::enable_raw_mode() {
            Ok(()) => {
                RAW_MODE.store(true, Ordering::Relaxed);
                Some(Self { _priv: () })
            }
            Err(e) => {
                log::warn!("key polling disabled: {e}");
                None
            }
        }
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        RAW_MODE.store(false, Ordering::Relaxed);
        let _ = terminal::disable_raw_mode();
    }
}

#[derive(Default)]
pub struct KeyCancel;

impl CancelPoll for KeyCancel {
    fn poll(&mut self) -> CancelSignal {
        match event::poll(Duration::ZERO) {
            Ok(true) => {}
            Ok(false) => return CancelSignal::None,
            Err(e) => {
                log::debug!("key poll failed: {e}");
                return CancelSignal::None;
            }
        }
        match event::read() {
            Ok(Event::Key(k)) if k.kind == KeyEventKind::Press => classify(k),
            Ok(_) => CancelSignal::None,
            Err(e) => {
                log::debug!("key read failed: {e}");
                CancelSignal::None
            }
        }
    }
}

fn classify(k: KeyEvent) -> CancelSignal {
    match k.code {
        KeyCode::Esc => CancelSignal::Abort,
        KeyCode::Char('c') if k.modifiers.contains(KeyModifiers::CONTROL) => CancelSignal::Abort,
        _ => CancelSignal::SkipPass,
    }
}
