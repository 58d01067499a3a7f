use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::validate::{self, Validate, Violation};

/// Site record (business view). `owner` is the id of the owning company;
/// nothing guarantees that company still exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Site {
    pub id: Uuid,
    pub nickname: String,
    pub url: String,
    pub owner: Uuid,
}

/// Create/update payload. Carries no id; the path id wins on update.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteInput {
    pub nickname: String,
    pub url: String,
    pub owner: Uuid,
}

impl Site {
    /// Materialize a draft under the given id (full-replace semantics).
    pub fn from_draft(id: Uuid, draft: SiteInput) -> Self {
        Self { id, nickname: draft.nickname, url: draft.url, owner: draft.owner }
    }
}

impl Validate for SiteInput {
    fn validate(&self) -> Vec<Violation> {
        let mut out = Vec::new();
        validate::require_non_blank(&mut out, "nickname", &self.nickname);
        validate::require_len(&mut out, "nickname", &self.nickname, 1, 50);
        validate::require_non_blank(&mut out, "url", &self.url);
        validate::require_url(&mut out, "url", &self.url);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> SiteInput {
        SiteInput {
            nickname: "Shop".into(),
            url: "https://shop.example.com".into(),
            owner: Uuid::new_v4(),
        }
    }

    #[test]
    fn valid_input_has_no_violations() {
        assert!(valid().validate().is_empty());
    }

    #[test]
    fn blank_nickname_and_broken_url_are_both_reported() {
        let input = SiteInput { nickname: "  ".into(), url: "not a url".into(), owner: Uuid::new_v4() };
        let fields: Vec<&str> = input.validate().iter().map(|v| v.field).collect();
        assert!(fields.contains(&"nickname"));
        assert!(fields.contains(&"url"));
    }

    #[test]
    fn nickname_length_is_capped_at_fifty() {
        let mut input = valid();
        input.nickname = "s".repeat(51);
        let violations = input.validate();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, "nickname");
    }
}
