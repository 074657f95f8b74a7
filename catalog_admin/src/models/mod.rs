//! Entity schemas for the catalog collections.
//!
//! Each collection is described by one implementation of the [`Resource`]
//! trait: the collection path, the list filter parameter, how to extract a
//! row's key, how to seed an edit draft from a row, and how a draft is
//! validated into a wire payload. The generic controller in
//! [`crate::editor`] and the REST client in [`crate::client`] are written
//! against this trait only, so adding a sixth entity means adding a schema,
//! not another controller.

pub mod category;
pub mod part;
pub mod precision;
pub mod size;
pub mod unit;

pub use category::{Category, CategoryDraft, CategoryPayload};
pub use part::{Part, PartDraft, PartPayload, PartQuery};
pub use precision::{Precision, PrecisionDraft, PrecisionPayload};
pub use size::{Size, SizeDraft, SizePayload};
pub use unit::{Unit, UnitDraft, UnitPayload};

use std::fmt::Display;

use serde::{Serialize, de::DeserializeOwned};

use crate::validate::ValidationError;

/// Schema descriptor for one catalog collection.
pub trait Resource: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Row identifier; also the path segment for update and delete.
    type Key: Display + PartialEq + Clone + Send + Sync;
    /// Unsaved field set for the create form or an in-progress row edit.
    type Draft: Clone + Default + PartialEq + Send + Sync;
    /// Body sent on create and update.
    type Payload: Serialize + Send + Sync;

    /// Collection segment under the base URL, e.g. `categories`.
    const COLLECTION: &'static str;
    /// Query parameter the backend accepts as an equality filter on list.
    const FILTER_PARAM: &'static str;

    fn key(&self) -> Self::Key;

    /// Seeds an edit draft from an existing row.
    fn draft(&self) -> Self::Draft;

    /// Validates a draft and produces the wire payload.
    ///
    /// Pure and synchronous; a rejection blocks the network call and its
    /// message is shown to the user verbatim.
    fn validate(draft: &Self::Draft) -> Result<Self::Payload, ValidationError>;

    /// Human-readable display field, used by the reference resolver.
    fn label(&self) -> String;

    /// Path for PUT, relative to the base URL.
    fn update_path(key: &Self::Key) -> String {
        format!("{}/{}", Self::COLLECTION, key)
    }

    /// Path for DELETE, relative to the base URL.
    fn delete_path(key: &Self::Key) -> String {
        format!("{}/{}", Self::COLLECTION, key)
    }
}
