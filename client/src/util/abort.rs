//! Cancellation for in-flight requests owned by a view.
//!
//! A view keeps an [`AbortHandle`] for its lifetime and hands an
//! [`AbortToken`] to each request. Aborting (or dropping) the handle flags
//! every token it issued and, in the browser, cancels the underlying fetch.

#[cfg(test)]
#[path = "abort_test.rs"]
mod abort_test;

use std::cell::Cell;
use std::rc::Rc;

/// Owner side: aborts the request when [`AbortHandle::abort`] runs or on drop.
#[derive(Debug, Default)]
pub struct AbortHandle {
    #[cfg(feature = "csr")]
    controller: Option<web_sys::AbortController>,
    aborted: Rc<Cell<bool>>,
}

/// Request side: the flag checked before sending and the signal passed to
/// `fetch`.
#[derive(Clone, Debug, Default)]
pub struct AbortToken {
    #[cfg(feature = "csr")]
    signal: Option<web_sys::AbortSignal>,
    aborted: Rc<Cell<bool>>,
}

impl AbortHandle {
    #[must_use]
    pub fn new() -> Self {
        Self {
            #[cfg(feature = "csr")]
            controller: web_sys::AbortController::new()
                .map_err(|e| log::debug!("abort controller unavailable: {e:?}"))
                .ok(),
            aborted: Rc::new(Cell::new(false)),
        }
    }

    #[must_use]
    pub fn token(&self) -> AbortToken {
        AbortToken {
            #[cfg(feature = "csr")]
            signal: self.controller.as_ref().map(web_sys::AbortController::signal),
            aborted: Rc::clone(&self.aborted),
        }
    }

    /// Abort whatever this handle issued so far and start over with a fresh
    /// controller. Returns the token for the next request.
    pub fn renew(&mut self) -> AbortToken {
        self.abort();
        *self = Self::new();
        self.token()
    }

    /// Cancel the request. Idempotent.
    pub fn abort(&mut self) {
        if self.aborted.replace(true) {
            return;
        }
        #[cfg(feature = "csr")]
        if let Some(controller) = &self.controller {
            controller.abort();
        }
    }

    #[must_use]
    pub fn is_aborted(&self) -> bool {
        self.aborted.get()
    }
}

impl Drop for AbortHandle {
    fn drop(&mut self) {
        self.abort();
    }
}

impl AbortToken {
    /// A token that never cancels.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_aborted(&self) -> bool {
        self.aborted.get()
    }

    #[cfg(feature = "csr")]
    #[must_use]
    pub fn signal(&self) -> Option<&web_sys::AbortSignal> {
        self.signal.as_ref()
    }
}
