// crates/synctab-core/src/cancel.rs
//
// Cooperative cancellation. The engine polls once per evaluated tuple and never
// blocks waiting for input.

use std::sync::mpsc::{Receiver, TryRecvError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CancelSignal {
    /// Nothing pending; keep searching.
    None,
    /// End the current pass and escalate to the next line count.
    SkipPass,
    /// End the whole run.
    Abort,
}

pub trait CancelPoll {
    /// Non-blocking check for operator input.
    fn poll(&mut self) -> CancelSignal;
}

impl<T: CancelPoll + ?Sized> CancelPoll for &mut T {
    fn poll(&mut self) -> CancelSignal {
        (**self).poll()
    }
}

impl<T: CancelPoll + ?Sized> CancelPoll for Box<T> {
    fn poll(&mut self) -> CancelSignal {
        (**self).poll()
    }
}

/// For batch runs and tests: nothing ever interrupts the search.
#[derive(Clone, Copy, Debug, Default)]
pub struct NeverCancel;

impl CancelPoll for NeverCancel {
    fn poll(&mut self) -> CancelSignal {
        CancelSignal::None
    }
}

/// Signals delivered from another thread. A dropped sender reads as "no input".
pub struct ChannelCancel {
    rx: Receiver<CancelSignal>,
}

impl ChannelCancel {
    pub fn new(rx: Receiver<CancelSignal>) -> Self {
        Self { rx }
    }
}

impl CancelPoll for ChannelCancel {
    fn poll(&mut self) -> CancelSignal {
        match self.rx.try_recv() {
            Ok(sig) => sig,
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => CancelSignal::None,
        }
    }
}
