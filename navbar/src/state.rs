//! Local UI state of a mounted navbar: whether the page is scrolled and
//! whether the mobile panel is open.

use leptos::prelude::*;

use crate::config::NavbarConfig;

/// A deferred close that has not fired yet. The ticket tells a stale close
/// apart from the one currently scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingClose {
    ticket: u64,
    #[cfg(target_arch = "wasm32")]
    handle: TimeoutHandle,
}

#[derive(Debug, Clone, Copy)]
pub struct NavbarState {
    pub scrolled: RwSignal<bool>,
    pub mobile_open: RwSignal<bool>,
    threshold: f64,
    last_ticket: StoredValue<u64>,
    pending_close: StoredValue<Option<PendingClose>>,
}

impl NavbarState {
    pub fn new(config: &NavbarConfig) -> Self {
        Self {
            scrolled: RwSignal::new(false),
            mobile_open: RwSignal::new(false),
            threshold: config.scroll_threshold,
            last_ticket: StoredValue::new(0),
            pending_close: StoredValue::new(None),
        }
    }

    /// Records a new vertical scroll offset.
    pub fn on_scroll(&self, offset: f64) {
        let scrolled = offset > self.threshold;
        if self.scrolled.get_untracked() != scrolled {
            tracing::trace!(offset, scrolled, "navbar scroll state changed");
            self.scrolled.set(scrolled);
        }
    }

    pub fn toggle_mobile(&self) {
        self.mobile_open.update(|open| *open = !*open);
    }

    pub fn close_mobile(&self) {
        if self.mobile_open.get_untracked() {
            self.mobile_open.set(false);
        }
    }

    /// Closes the mobile panel on the next tick, superseding any close that
    /// is still pending.
    ///
    /// In the browser the close runs from a zero-delay timeout; elsewhere it
    /// is spawned on the global executor.
    pub fn schedule_close(&self) {
        self.cancel_pending_close();
        let Some(ticket) = self.last_ticket.try_update_value(|last| {
            *last += 1;
            *last
        }) else {
            return;
        };
        let state = *self;

        #[cfg(target_arch = "wasm32")]
        match set_timeout_with_handle(
            move || state.finish_close(ticket),
            core::time::Duration::ZERO,
        ) {
            Ok(handle) => self
                .pending_close
                .set_value(Some(PendingClose { ticket, handle })),
            Err(err) => {
                tracing::warn!(?err, "could not defer mobile menu close");
                self.close_mobile();
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            self.pending_close.set_value(Some(PendingClose { ticket }));
            leptos::task::spawn(async move { state.finish_close(ticket) });
        }
    }

    /// Runs a deferred close unless it was cancelled or superseded.
    fn finish_close(&self, ticket: u64) {
        let current = self
            .pending_close
            .try_update_value(|pending| match *pending {
                Some(scheduled) if scheduled.ticket == ticket => pending.take(),
                _ => None,
            })
            .flatten();
        if current.is_some() {
            self.close_mobile();
        } else {
            tracing::trace!(ticket, "dropping superseded mobile menu close");
        }
    }

    pub fn cancel_pending_close(&self) {
        if let Some(pending) = self.pending_close.try_update_value(Option::take).flatten() {
            tracing::trace!(ticket = pending.ticket, "cancelling mobile menu close");
            #[cfg(target_arch = "wasm32")]
            pending.handle.clear();
        }
    }

    pub fn has_pending_close(&self) -> bool {
        self.pending_ticket().is_some()
    }

    /// Ticket of the close that is currently scheduled, if any.
    pub fn pending_ticket(&self) -> Option<u64> {
        self.pending_close
            .try_with_value(|pending| pending.map(|pending| pending.ticket))
            .flatten()
    }
}

/// Follows the window scroll offset for as long as the calling component is
/// mounted.
pub fn track_scroll(state: NavbarState) {
    Effect::new(move |_| {
        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            let offset = window().scroll_y().unwrap_or_default();
            state.on_scroll(offset);
        });
        on_cleanup(move || handle.remove());
    });
}

/// Closes the mobile panel whenever `pathname` changes.
///
/// Runs on the server too, so the close is driven by the same executor that
/// renders the page.
pub fn close_on_navigation(state: NavbarState, pathname: Signal<String>) {
    Effect::new_isomorphic(move |_| {
        pathname.track();
        state.schedule_close();
    });
    on_cleanup(move || state.cancel_pending_close());
}
