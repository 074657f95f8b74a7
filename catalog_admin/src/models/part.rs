use serde::{Deserialize, Serialize};

use super::Resource;
use crate::validate::{self, ValidationError};

/// A part, referencing all four reference collections.
///
/// The backend uses camelCase field names; `categoryId` and `precisionId`
/// are numeric in list responses.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    pub id: i64,
    pub name: String,
    pub category_id: i64,
    pub size_id: String,
    pub unit_id: String,
    pub precision_id: i64,
}

/// In-progress part fields. All foreign keys are held as the raw selection
/// strings; structural validity only requires that each one is present.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PartDraft {
    pub name: String,
    pub category_id: String,
    pub size_id: String,
    pub unit_id: String,
    pub precision_id: String,
}

/// Create/update body. `categoryId` is sent as an integer; input that does
/// not parse goes out as `null` and the server rules on it. The other keys
/// are forwarded verbatim — referential integrity is the server's call.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PartPayload {
    pub name: String,
    pub category_id: Option<i64>,
    pub size_id: String,
    pub unit_id: String,
    pub precision_id: String,
}

impl Resource for Part {
    type Key = i64;
    type Draft = PartDraft;
    type Payload = PartPayload;

    const COLLECTION: &'static str = "parts";
    const FILTER_PARAM: &'static str = "name";

    fn key(&self) -> i64 {
        self.id
    }

    fn draft(&self) -> PartDraft {
        PartDraft {
            name: self.name.clone(),
            category_id: self.category_id.to_string(),
            size_id: self.size_id.clone(),
            unit_id: self.unit_id.clone(),
            precision_id: self.precision_id.to_string(),
        }
    }

    fn validate(draft: &PartDraft) -> Result<PartPayload, ValidationError> {
        let name = validate::required_trimmed("Name", &draft.name)?;
        validate::max_len("Name", &name, 100)?;
        let category_id = validate::required("Category", &draft.category_id)?;
        let size_id = validate::required("Size", &draft.size_id)?;
        let unit_id = validate::required("Unit", &draft.unit_id)?;
        let precision_id = validate::required("Precision", &draft.precision_id)?;
        Ok(PartPayload {
            name,
            category_id: category_id.trim().parse::<i64>().ok(),
            size_id,
            unit_id,
            precision_id,
        })
    }

    fn label(&self) -> String {
        self.name.clone()
    }
}

/// Multi-criteria server-side part search (`GET /parts?...`).
///
/// The generic controller only uses the single-field filter; this richer
/// query surface is exposed by [`crate::client::RestClient::search_parts`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PartQuery {
    pub name: Option<String>,
    pub category_ids: Vec<i64>,
    pub size_ids: Vec<String>,
    pub unit_ids: Vec<String>,
    pub precision_id: Option<i64>,
}

impl PartQuery {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.category_ids.is_empty()
            && self.size_ids.is_empty()
            && self.unit_ids.is_empty()
            && self.precision_id.is_none()
    }

    /// Encodes the criteria as repeated query pairs the backend binds to
    /// array parameters.
    pub(crate) fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(name) = &self.name {
            pairs.push(("name", name.clone()));
        }
        for id in &self.category_ids {
            pairs.push(("categoryIds", id.to_string()));
        }
        for id in &self.size_ids {
            pairs.push(("sizeIds", id.clone()));
        }
        for id in &self.unit_ids {
            pairs.push(("unitIds", id.clone()));
        }
        if let Some(id) = self.precision_id {
            pairs.push(("precisionId", id.to_string()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_draft() -> PartDraft {
        PartDraft {
            name: "Hex bolt".into(),
            category_id: "1".into(),
            size_id: "M10".into(),
            unit_id: "mm".into(),
            precision_id: "2".into(),
        }
    }

    #[test]
    fn complete_draft_validates() {
        let payload = Part::validate(&complete_draft()).unwrap();
        assert_eq!(payload.category_id, Some(1));
        assert_eq!(payload.size_id, "M10");
    }

    #[test]
    fn each_missing_foreign_key_has_its_own_message() {
        for (clear, field) in [
            (
                Box::new(|d: &mut PartDraft| d.category_id.clear()) as Box<dyn Fn(&mut PartDraft)>,
                "Category",
            ),
            (Box::new(|d: &mut PartDraft| d.size_id.clear()), "Size"),
            (Box::new(|d: &mut PartDraft| d.unit_id.clear()), "Unit"),
            (
                Box::new(|d: &mut PartDraft| d.precision_id.clear()),
                "Precision",
            ),
        ] {
            let mut draft = complete_draft();
            clear(&mut draft);
            assert_eq!(
                Part::validate(&draft),
                Err(ValidationError::Required { field }),
            );
        }
    }

    #[test]
    fn name_boundary_is_one_hundred() {
        let mut draft = complete_draft();
        draft.name = "x".repeat(100);
        assert!(Part::validate(&draft).is_ok());
        draft.name = "x".repeat(101);
        assert!(Part::validate(&draft).is_err());
    }

    #[test]
    fn unparsable_category_id_becomes_null() {
        let mut draft = complete_draft();
        draft.category_id = "not-a-number".into();
        let payload = Part::validate(&draft).unwrap();
        assert_eq!(payload.category_id, None);
        let body = serde_json::to_value(&payload).unwrap();
        assert!(body["categoryId"].is_null());
    }

    #[test]
    fn payload_uses_camel_case_on_the_wire() {
        let body = serde_json::to_value(Part::validate(&complete_draft()).unwrap()).unwrap();
        assert_eq!(body["categoryId"], 1);
        assert_eq!(body["sizeId"], "M10");
        assert_eq!(body["unitId"], "mm");
        assert_eq!(body["precisionId"], "2");
    }

    #[test]
    fn query_encoding_repeats_array_parameters() {
        let query = PartQuery {
            name: Some("bolt".into()),
            category_ids: vec![1, 2],
            size_ids: vec!["M10".into()],
            unit_ids: vec![],
            precision_id: Some(3),
        };
        assert_eq!(
            query.to_query(),
            vec![
                ("name", "bolt".to_string()),
                ("categoryIds", "1".to_string()),
                ("categoryIds", "2".to_string()),
                ("sizeIds", "M10".to_string()),
                ("precisionId", "3".to_string()),
            ]
        );
        assert!(PartQuery::default().is_empty());
    }
}
