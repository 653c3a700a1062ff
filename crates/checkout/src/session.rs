//! Session-scoped saved-address book.
//!
//! Holds the records fetched from the address store, the currently selected
//! record, and the selector overlay's visibility. The list is read-only from
//! the UI's perspective except for selection; it is repopulated on each
//! [`AddressSession::refresh`] and simply dropped on navigation - nothing is
//! persisted client-side.

use doorstep_core::{Address, AddressId};

use crate::api::{AddressApi, ApiError};

/// Saved-address list and selector state for one checkout session.
#[derive(Debug, Default)]
pub struct AddressSession {
    addresses: Vec<Address>,
    selected: Option<AddressId>,
    show_selector: bool,
    form_filled: bool,
}

impl AddressSession {
    /// Create an empty session; call [`refresh`](Self::refresh) on mount.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the address list from the store service, replacing the cache.
    ///
    /// A selection pointing at a record that no longer exists is cleared.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` when the fetch fails; the previous list is kept so
    /// the shell can show a notification without blanking the screen.
    pub async fn refresh(&mut self, api: &AddressApi) -> Result<(), ApiError> {
        let addresses = api.list().await?;

        if let Some(id) = self.selected
            && !addresses.iter().any(|a| a.id == id)
        {
            self.selected = None;
        }

        self.addresses = addresses;
        Ok(())
    }

    /// The cached address list, in service order.
    #[must_use]
    pub fn addresses(&self) -> &[Address] {
        &self.addresses
    }

    /// The currently selected record, if any.
    #[must_use]
    pub fn selected(&self) -> Option<&Address> {
        let id = self.selected?;
        self.addresses.iter().find(|a| a.id == id)
    }

    /// Whether the selector overlay is open.
    #[must_use]
    pub const fn selector_open(&self) -> bool {
        self.show_selector
    }

    /// Toggle the selector overlay.
    pub const fn toggle_selector(&mut self) {
        self.show_selector = !self.show_selector;
    }

    /// Dismiss the selector overlay.
    pub const fn close_selector(&mut self) {
        self.show_selector = false;
    }

    /// Select a record by ID. Closes the selector and flags the form for
    /// prefill. Returns `false` when the ID is not in the cached list.
    pub fn select(&mut self, id: AddressId) -> bool {
        if !self.addresses.iter().any(|a| a.id == id) {
            return false;
        }
        self.selected = Some(id);
        self.show_selector = false;
        self.form_filled = true;
        true
    }

    /// Take the pending form prefill, if selection raised one.
    ///
    /// One-shot: the flag resets on read so the form is filled exactly once
    /// per selection.
    pub fn take_form_fill(&mut self) -> Option<Address> {
        if !self.form_filled {
            return None;
        }
        self.form_filled = false;
        self.selected().cloned()
    }
}
