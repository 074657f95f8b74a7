use serde::{Deserialize, Serialize};

use super::Resource;
use crate::validate::{self, ValidationError};

/// A measurement precision, keyed by a server-assigned numeric id.
///
/// The value travels as a string in both directions so the exact numeric text
/// the user typed is preserved; the backend owns the decimal interpretation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Precision {
    pub id: i64,
    pub value: String,
}

/// In-progress precision value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PrecisionDraft {
    pub value: String,
}

/// Create/update body: `{"value": ...}`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PrecisionPayload {
    pub value: String,
}

impl Resource for Precision {
    type Key = i64;
    type Draft = PrecisionDraft;
    type Payload = PrecisionPayload;

    const COLLECTION: &'static str = "precisions";
    const FILTER_PARAM: &'static str = "value";

    fn key(&self) -> i64 {
        self.id
    }

    fn draft(&self) -> PrecisionDraft {
        PrecisionDraft {
            value: self.value.clone(),
        }
    }

    fn validate(draft: &PrecisionDraft) -> Result<PrecisionPayload, ValidationError> {
        let value = validate::required_trimmed("Value", &draft.value)?;
        validate::finite_number("Value", &value)?;
        Ok(PrecisionPayload { value })
    }

    fn label(&self) -> String {
        self.value.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_decimal_is_accepted() {
        let payload = Precision::validate(&PrecisionDraft {
            value: "12.5".into(),
        })
        .unwrap();
        assert_eq!(payload.value, "12.5");
    }

    #[test]
    fn non_numeric_text_is_rejected() {
        for bad in ["-", "abc", "1.2.3"] {
            assert_eq!(
                Precision::validate(&PrecisionDraft { value: bad.into() }),
                Err(ValidationError::NotNumeric { field: "Value" }),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn empty_value_is_required_not_non_numeric() {
        assert_eq!(
            Precision::validate(&PrecisionDraft { value: "".into() }),
            Err(ValidationError::Required { field: "Value" })
        );
    }
}
