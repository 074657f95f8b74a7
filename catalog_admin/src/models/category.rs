use serde::{Deserialize, Serialize};

use super::Resource;
use crate::validate::{self, ValidationError};

/// A part category, keyed by a server-assigned numeric id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

/// In-progress category fields.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CategoryDraft {
    pub name: String,
}

/// Create/update body: `{"name": ...}`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CategoryPayload {
    pub name: String,
}

impl Resource for Category {
    type Key = i64;
    type Draft = CategoryDraft;
    type Payload = CategoryPayload;

    const COLLECTION: &'static str = "categories";
    const FILTER_PARAM: &'static str = "name";

    fn key(&self) -> i64 {
        self.id
    }

    fn draft(&self) -> CategoryDraft {
        CategoryDraft {
            name: self.name.clone(),
        }
    }

    fn validate(draft: &CategoryDraft) -> Result<CategoryPayload, ValidationError> {
        let name = validate::required_trimmed("Name", &draft.name)?;
        validate::max_len("Name", &name, 50)?;
        Ok(CategoryPayload { name })
    }

    fn label(&self) -> String {
        self.name.clone()
    }

    // The backend routes category updates at the base root, not under
    // /categories.
    fn update_path(key: &i64) -> String {
        key.to_string()
    }
}
