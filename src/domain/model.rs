use serde::{Deserialize, Serialize};

/// Information for one registrant. Pure data holder, no validation:
/// empty or malformed values are accepted as-is. Input checks belong
/// to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Special requests. Empty if the participant has none.
    pub special_request: String,
}

impl Participant {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        special_request: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            special_request: special_request.into(),
        }
    }
}
