use serde::{Deserialize, Serialize};

use super::Resource;
use crate::validate::{self, ValidationError};

/// A measurement unit. Same shape as [`super::Size`]: the user-assigned id is
/// the key and an update renames it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    pub id: String,
}

/// In-progress unit id.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UnitDraft {
    pub id: String,
}

/// Create/update body: `{"id": ...}`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct UnitPayload {
    pub id: String,
}

impl Resource for Unit {
    type Key = String;
    type Draft = UnitDraft;
    type Payload = UnitPayload;

    const COLLECTION: &'static str = "units";
    const FILTER_PARAM: &'static str = "id";

    fn key(&self) -> String {
        self.id.clone()
    }

    fn draft(&self) -> UnitDraft {
        UnitDraft {
            id: self.id.clone(),
        }
    }

    fn validate(draft: &UnitDraft) -> Result<UnitPayload, ValidationError> {
        let id = validate::required_trimmed("ID", &draft.id)?;
        validate::length_range("ID", &id, 1, 4)?;
        Ok(UnitPayload { id })
    }

    fn label(&self) -> String {
        self.id.clone()
    }
}
