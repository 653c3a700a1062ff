//! Stale-response guard for type-ahead autocomplete.
//!
//! Suggestion lookups are fire-and-forget futures with no cancellation, so
//! a superseded request can resolve after a newer one and would otherwise
//! overwrite fresher UI state. Each query takes a monotonically increasing
//! token; a response whose token is no longer the latest is discarded.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::places::{PlaceSuggestion, PlacesError, SuggestionSource};

/// Type-ahead driver wrapping a [`SuggestionSource`].
#[derive(Debug)]
pub struct Autocomplete<S> {
    source: S,
    latest: AtomicU64,
}

impl<S: SuggestionSource> Autocomplete<S> {
    /// Wrap a suggestion source.
    pub const fn new(source: S) -> Self {
        Self {
            source,
            latest: AtomicU64::new(0),
        }
    }

    /// Access the wrapped source, e.g. for detail lookups after selection.
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Query suggestions for the current input.
    ///
    /// Returns `Ok(None)` when the response came back stale: a newer query
    /// was issued while this one was in flight, and its result must win.
    ///
    /// # Errors
    ///
    /// Returns `PlacesError` when the provider lookup itself fails. Errors
    /// from stale requests are surfaced too; shells typically show them as
    /// a transient notification either way.
    pub async fn query(
        &self,
        input: &str,
        country: Option<&str>,
    ) -> Result<Option<Vec<PlaceSuggestion>>, PlacesError> {
        let token = self.latest.fetch_add(1, Ordering::SeqCst) + 1;

        let suggestions = self.source.suggest(input, country).await?;

        if self.latest.load(Ordering::SeqCst) == token {
            Ok(Some(suggestions))
        } else {
            tracing::debug!(input, token, "Discarding stale autocomplete response");
            Ok(None)
        }
    }
}
