//! An explicit logger handle.
//!
//! Components receive a [`Logger`] instead of logging through a process-wide
//! subscriber. The handle wraps a [`tracing::Dispatch`], so any `tracing`
//! subscriber can sit behind it, and every event is scoped to that dispatch.

use std::fmt::Display;

use tracing::{Dispatch, Level, dispatcher};

/// Cloneable logger handed to every component.
#[derive(Debug, Clone)]
pub struct Logger {
    dispatch: Dispatch,
}

impl Default for Logger {
    fn default() -> Self {
        Self::silent()
    }
}

impl Logger {
    pub fn new(dispatch: Dispatch) -> Self {
        Logger { dispatch }
    }

    /// A logger that drops every event.
    pub fn silent() -> Self {
        Logger {
            dispatch: Dispatch::none(),
        }
    }

    pub fn debug(&self, message: impl Display) {
        dispatcher::with_default(&self.dispatch, || tracing::debug!("{}", message));
    }

    pub fn info(&self, message: impl Display) {
        dispatcher::with_default(&self.dispatch, || tracing::info!("{}", message));
    }

    pub fn warn(&self, message: impl Display) {
        dispatcher::with_default(&self.dispatch, || tracing::warn!("{}", message));
    }

    pub fn error(&self, message: impl Display) {
        dispatcher::with_default(&self.dispatch, || tracing::error!("{}", message));
    }

    /// A step of a longer pipeline.
    pub fn process(&self, message: impl Display) {
        self.info(format_args!("==> {}", message));
    }

    /// Completion of a step.
    pub fn success(&self, message: impl Display) {
        self.info(format_args!("\u{2713} {}", message));
    }

    pub fn is_debug_enabled(&self) -> bool {
        dispatcher::with_default(&self.dispatch, || tracing::enabled!(Level::DEBUG))
    }
}
