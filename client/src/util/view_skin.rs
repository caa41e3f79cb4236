//! Per-view skin lifecycle hook.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each admin page calls [`use_view_skin`] with its view identity and root
//! node. The hook fetches that view's assignments once, applies them once,
//! then keeps re-applying the same list whenever children are added under
//! the root. Rendering never waits on any of it.
//!
//! LIFECYCLE
//! =========
//! Session and abort handle live in local `StoredValue` slots ([`SkinSlots`])
//! owned by the calling component, and the browser watcher in a third. On
//! cleanup the fetch is aborted, the session is marked unmounted and the
//! watcher is dropped (which disconnects it). A fetch that resolves after
//! disposal finds its slots gone and is discarded.

#[cfg(test)]
#[path = "view_skin_test.rs"]
mod view_skin_test;

use leptos::html::Div;
use leptos::prelude::*;
use skin::{ApplyReport, FetchOutcome, StyleAssignment, StyleSession};

use crate::util::abort::{AbortHandle, AbortToken};

/// Observable progress of a view's skin, exposed as `data-skin-phase`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SkinPhase {
    /// Style fetch still in flight.
    #[default]
    Pending,
    /// Nothing to apply for this view.
    Unstyled,
    /// First pass done; watcher running.
    Applied(ApplyReport),
}

impl SkinPhase {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Unstyled => "unstyled",
            Self::Applied(_) => "applied",
        }
    }
}

/// View-owned state shared between the fetch task, the watcher callback and
/// cleanup.
#[derive(Clone, Copy)]
pub struct SkinSlots {
    session: StoredValue<StyleSession, LocalStorage>,
    abort: StoredValue<AbortHandle, LocalStorage>,
}

impl SkinSlots {
    /// Create the slots under the current owner and register their cleanup.
    #[must_use]
    pub fn new() -> Self {
        let slots = Self {
            session: StoredValue::new_local(StyleSession::new()),
            abort: StoredValue::new_local(AbortHandle::new()),
        };
        on_cleanup(move || slots.release());
        slots
    }

    /// Token for the style fetch; already aborted once the view is gone.
    #[must_use]
    pub fn token(&self) -> AbortToken {
        self.abort.try_with_value(AbortHandle::token).unwrap_or_else(|| {
            let mut handle = AbortHandle::new();
            handle.abort();
            handle.token()
        })
    }

    /// Hand the fetch result to the session; [`FetchOutcome::Discarded`]
    /// once the view is gone.
    pub fn accept(&self, assignments: Vec<StyleAssignment>) -> FetchOutcome {
        self.session
            .try_update_value(|s| s.accept_fetch(assignments))
            .unwrap_or(FetchOutcome::Discarded)
    }

    /// Run `f` over the list to re-apply, while the view is mounted and
    /// watching.
    pub fn with_reapply_list<R>(&self, f: impl FnOnce(&[StyleAssignment]) -> R) -> Option<R> {
        self.session.try_with_value(|s| s.reapply_list().map(f)).flatten()
    }

    /// Run `f` over the accepted list for the first pass.
    pub fn with_assignments<R>(&self, f: impl FnOnce(&[StyleAssignment]) -> R) -> Option<R> {
        self.session.try_with_value(|s| f(s.assignments()))
    }

    fn release(self) {
        self.abort.try_update_value(AbortHandle::abort);
        self.session.try_update_value(StyleSession::unmount);
    }
}

impl Default for SkinSlots {
    fn default() -> Self {
        Self::new()
    }
}

/// Start the skin lifecycle for `view_name` rooted at `root`.
pub fn use_view_skin(view_name: &'static str, root: NodeRef<Div>) -> ReadSignal<SkinPhase> {
    let (phase, set_phase) = signal(SkinPhase::Pending);
    let slots = SkinSlots::new();
    #[cfg(feature = "csr")]
    watch_view(view_name, root, slots, set_phase);
    #[cfg(not(feature = "csr"))]
    let _ = (view_name, root, slots, set_phase);
    phase
}

#[cfg(feature = "csr")]
fn watch_view(view_name: &'static str, root: NodeRef<Div>, slots: SkinSlots, set_phase: WriteSignal<SkinPhase>) {
    use crate::net::api;
    use crate::util::auth::ApiHandle;
    use crate::util::dom_skin::{DomScope, MutationWatcher};

    let client = ApiHandle::from_context().client();
    let watcher = StoredValue::new_local(None::<MutationWatcher>);
    let token = slots.token();

    leptos::task::spawn_local(async move {
        let assignments = api::fetch_styles(&client, view_name, &token).await;
        match slots.accept(assignments) {
            FetchOutcome::Discarded => log::debug!("skin: {view_name} gone before styles arrived"),
            FetchOutcome::Unstyled => {
                set_phase.try_set(SkinPhase::Unstyled);
            }
            FetchOutcome::ApplyAndWatch => {
                let Some(element) = root.get_untracked() else {
                    log::warn!("skin: {view_name} has no mounted root");
                    return;
                };
                let scope = DomScope::new(element.into());
                let report = slots.with_assignments(|list| scope.apply(list)).unwrap_or_default();
                log::debug!("skin: {view_name} first pass {report}");
                set_phase.try_set(SkinPhase::Applied(report));

                let rescan = scope.clone();
                let on_change = move || {
                    if let Some(report) = slots.with_reapply_list(|list| rescan.apply(list)) {
                        if !report.is_noop() {
                            log::debug!("skin: {view_name} reapplied {report}");
                        }
                    }
                };
                match MutationWatcher::observe(scope.root(), on_change) {
                    Ok(handle) => {
                        if watcher.try_set_value(Some(handle)).is_none() {
                            log::info!("skin: watching {view_name}");
                        }
                    }
                    Err(e) => log::warn!("skin: cannot observe {view_name}: {e:?}"),
                }
            }
        }
    });

    on_cleanup(move || {
        watcher.try_update_value(Option::take);
    });
}
