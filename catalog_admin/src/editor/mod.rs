//! Generic list-and-edit controller.
//!
//! One [`Editor`] instance manages one collection: the authoritative item
//! list, the create draft, the per-row edit state, the pending delete
//! confirmation, and the last error. Mutations go create → POST → reload,
//! save → PUT → reload, confirmed remove → DELETE → reload; the list is only
//! ever replaced by a successful server response, never patched
//! optimistically.
//!
//! ## Failure model
//! No operation returns an error. Validation rejections land in
//! `validation_message`, network failures in `last_error`; both are state for
//! the presentation layer to render, and every failure leaves the controller
//! usable for another attempt.
//!
//! ## Superseded loads
//! Each list request carries a generation number. A completion whose
//! generation is no longer current is discarded instead of applied, so a
//! response that was overtaken by a newer load (or that resumes after its
//! owner moved on) cannot clobber fresher state.

mod parts;

pub use parts::PartsScreen;

use tracing::{debug, warn};

use crate::client::{ClientError, CollectionApi};
use crate::models::Resource;

/// Outcome of [`Editor::remove`]: deletion is gated on explicit confirmation
/// by the caller, which the controller never performs itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// The key is now pending; call [`Editor::confirm_remove`] to proceed or
    /// [`Editor::cancel_remove`] to drop it.
    ConfirmationRequired,
    /// No listed row has that key; nothing recorded.
    UnknownKey,
}

/// In-flight edit of one listed row.
#[derive(Clone, Debug)]
struct EditState<R: Resource> {
    key: R::Key,
    draft: R::Draft,
}

/// List-and-edit controller for one collection.
pub struct Editor<R: Resource> {
    api: Box<dyn CollectionApi<R>>,
    items: Vec<R>,
    loading: bool,
    last_error: Option<String>,
    create_draft: R::Draft,
    edit: Option<EditState<R>>,
    validation_message: Option<String>,
    pending_removal: Option<R::Key>,
    load_generation: u64,
    last_filter: Option<String>,
}

impl<R: Resource> Editor<R> {
    pub fn new(api: Box<dyn CollectionApi<R>>) -> Self {
        Self {
            api,
            items: Vec::new(),
            loading: true,
            last_error: None,
            create_draft: R::Draft::default(),
            edit: None,
            validation_message: None,
            pending_removal: None,
            load_generation: 0,
            last_filter: None,
        }
    }

    /// Last successful server response, stale-but-visible across failures.
    pub fn items(&self) -> &[R] {
        &self.items
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn validation_message(&self) -> Option<&str> {
        self.validation_message.as_deref()
    }

    pub fn create_draft(&self) -> &R::Draft {
        &self.create_draft
    }

    /// The create form edits the draft in place; changing it does NOT
    /// trigger a reload — listing and drafting are independent.
    pub fn create_draft_mut(&mut self) -> &mut R::Draft {
        &mut self.create_draft
    }

    pub fn editing_key(&self) -> Option<&R::Key> {
        self.edit.as_ref().map(|edit| &edit.key)
    }

    pub fn edit_draft(&self) -> Option<&R::Draft> {
        self.edit.as_ref().map(|edit| &edit.draft)
    }

    pub fn edit_draft_mut(&mut self) -> Option<&mut R::Draft> {
        self.edit.as_mut().map(|edit| &mut edit.draft)
    }

    pub fn pending_removal(&self) -> Option<&R::Key> {
        self.pending_removal.as_ref()
    }

    /// Fetches the list, optionally filtered by equality on the schema's
    /// filter field. On success the items are replaced and the error
    /// cleared; on failure the error is recorded and the stale items stay
    /// visible. The filter is remembered for post-mutation resyncs.
    pub async fn load(&mut self, filter: Option<&str>) {
        self.last_filter = filter.map(str::to_string);
        self.reload().await;
    }

    /// Re-fetches with the last filter. Runs after every successful
    /// mutation so the list reflects the server.
    pub async fn reload(&mut self) {
        self.loading = true;
        let generation = self.bump_generation();
        let filter = self.last_filter.clone();
        let result = self.api.list(filter.as_deref()).await;
        self.finish_load(generation, result);
    }

    fn bump_generation(&mut self) -> u64 {
        self.load_generation += 1;
        self.load_generation
    }

    fn finish_load(&mut self, generation: u64, result: Result<Vec<R>, ClientError>) {
        if generation != self.load_generation {
            debug!(
                collection = R::COLLECTION,
                generation,
                current = self.load_generation,
                "discarding superseded list response"
            );
            return;
        }
        self.loading = false;
        match result {
            Ok(rows) => {
                self.items = rows;
                self.last_error = None;
            }
            Err(err) => {
                warn!(collection = R::COLLECTION, error = %err, "list failed");
                self.last_error = Some(err.to_string());
            }
        }
    }

    /// Validates the create draft and, if it passes, POSTs it and resyncs.
    /// A rejection never reaches the network; a network failure keeps the
    /// draft so the user can retry.
    pub async fn create(&mut self) {
        let payload = match R::validate(&self.create_draft) {
            Ok(payload) => payload,
            Err(reason) => {
                self.validation_message = Some(reason.to_string());
                return;
            }
        };
        self.validation_message = None;
        match self.api.create(&payload).await {
            Ok(_) => {
                self.create_draft = R::Draft::default();
                self.reload().await;
            }
            Err(err) => {
                warn!(collection = R::COLLECTION, error = %err, "create failed");
                self.last_error = Some(err.to_string());
            }
        }
    }

    /// Enters edit mode on the row with `key`, seeding the edit draft from
    /// it. Calling this while another row is being edited silently switches
    /// rows; there is no unsaved-changes guard. Returns false when no listed
    /// row matches.
    pub fn begin_edit(&mut self, key: &R::Key) -> bool {
        match self.items.iter().find(|row| row.key() == *key) {
            Some(row) => {
                self.edit = Some(EditState {
                    key: key.clone(),
                    draft: row.draft(),
                });
                true
            }
            None => false,
        }
    }

    /// Leaves edit mode without touching the network.
    pub fn cancel_edit(&mut self) {
        self.edit = None;
        self.validation_message = None;
    }

    /// Validates the edit draft with the same rules as create and PUTs it
    /// keyed by the row's current identifier. For rename-style entities that
    /// key is the old id while the payload carries the new one.
    pub async fn save(&mut self) {
        let Some(edit) = self.edit.clone() else {
            return;
        };
        let payload = match R::validate(&edit.draft) {
            Ok(payload) => payload,
            Err(reason) => {
                self.validation_message = Some(reason.to_string());
                return;
            }
        };
        self.validation_message = None;
        match self.api.update(&edit.key, &payload).await {
            Ok(_) => {
                self.edit = None;
                self.reload().await;
            }
            Err(err) => {
                warn!(collection = R::COLLECTION, error = %err, "update failed");
                self.last_error = Some(err.to_string());
            }
        }
    }

    /// Records `key` as pending removal and asks the caller to confirm.
    /// Nothing is deleted until [`Editor::confirm_remove`].
    pub fn remove(&mut self, key: &R::Key) -> RemoveOutcome {
        if !self.items.iter().any(|row| row.key() == *key) {
            return RemoveOutcome::UnknownKey;
        }
        self.pending_removal = Some(key.clone());
        RemoveOutcome::ConfirmationRequired
    }

    /// Drops the pending removal without touching the network.
    pub fn cancel_remove(&mut self) {
        self.pending_removal = None;
    }

    /// Performs the confirmed DELETE and resyncs. A failure leaves the items
    /// exactly as they were; there is no optimistic removal to roll back.
    pub async fn confirm_remove(&mut self) {
        let Some(key) = self.pending_removal.take() else {
            return;
        };
        match self.api.delete(&key).await {
            Ok(()) => self.reload().await,
            Err(err) => {
                warn!(collection = R::COLLECTION, key = %key, error = %err, "delete failed");
                self.last_error = Some(err.to_string());
            }
        }
    }
}
