use serde::{Deserialize, Serialize};

use super::Resource;
use crate::validate::{self, ValidationError};

/// A part size. The user-assigned id is itself the key, so an update is a
/// rename: the PUT is keyed by the old id and carries the new one in the body.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub id: String,
}

/// In-progress size id.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SizeDraft {
    pub id: String,
}

/// Create/update body: `{"id": ...}`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SizePayload {
    pub id: String,
}

impl Resource for Size {
    type Key = String;
    type Draft = SizeDraft;
    type Payload = SizePayload;

    const COLLECTION: &'static str = "sizes";
    const FILTER_PARAM: &'static str = "id";

    fn key(&self) -> String {
        self.id.clone()
    }

    fn draft(&self) -> SizeDraft {
        SizeDraft {
            id: self.id.clone(),
        }
    }

    fn validate(draft: &SizeDraft) -> Result<SizePayload, ValidationError> {
        let id = validate::required_trimmed("ID", &draft.id)?;
        validate::length_range("ID", &id, 1, 4)?;
        Ok(SizePayload { id })
    }

    fn label(&self) -> String {
        self.id.clone()
    }
}
