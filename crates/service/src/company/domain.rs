use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::validate::{self, Validate, Violation};

/// Subscription plans a company can be registered under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanType {
    Starter = 1,
    Business = 2,
    Enterprise = 3,
}

impl PlanType {
    pub fn from_id(id: i64) -> Option<Self> {
        match id {
            1 => Some(Self::Starter),
            2 => Some(Self::Business),
            3 => Some(Self::Enterprise),
            _ => None,
        }
    }
}

/// Company record (business view). The password travels in the clear,
/// exactly as stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: Uuid,
    pub name: String,
    pub tax_id: String,
    pub plan_id: i64,
    pub phone: String,
    pub email: String,
    pub password: String,
}

/// Create/update payload. Carries no id: on update the path id wins over
/// anything the client put in the body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyInput {
    pub name: String,
    pub tax_id: String,
    pub plan_id: i64,
    pub phone: String,
    pub email: String,
    pub password: String,
}

/// Login payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

impl Company {
    /// Materialize a draft under the given id (full-replace semantics).
    pub fn from_draft(id: Uuid, draft: CompanyInput) -> Self {
        Self {
            id,
            name: draft.name,
            tax_id: draft.tax_id,
            plan_id: draft.plan_id,
            phone: draft.phone,
            email: draft.email,
            password: draft.password,
        }
    }
}

impl Validate for CompanyInput {
    fn validate(&self) -> Vec<Violation> {
        let mut out = Vec::new();
        validate::require_non_blank(&mut out, "name", &self.name);
        validate::require_len(&mut out, "name", &self.name, 1, 50);
        validate::require_non_blank(&mut out, "taxId", &self.tax_id);
        if PlanType::from_id(self.plan_id).is_none() {
            out.push(Violation::new("planId", "unknown plan id"));
        }
        validate::require_non_blank(&mut out, "phone", &self.phone);
        validate::require_non_blank(&mut out, "email", &self.email);
        validate::require_email(&mut out, "email", &self.email);
        validate::require_non_blank(&mut out, "password", &self.password);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> CompanyInput {
        CompanyInput {
            name: "Acme".into(),
            tax_id: "123".into(),
            plan_id: 1,
            phone: "555".into(),
            email: "a@x.com".into(),
            password: "s3cr3t".into(),
        }
    }

    #[test]
    fn valid_input_has_no_violations() {
        assert!(valid().validate().is_empty());
    }

    #[test]
    fn each_broken_field_is_named_on_the_wire() {
        let input = CompanyInput {
            name: "".into(),
            tax_id: " ".into(),
            plan_id: 99,
            phone: "".into(),
            email: "not-an-email".into(),
            password: "".into(),
        };
        let fields: Vec<&str> = input.validate().iter().map(|v| v.field).collect();
        for expected in ["name", "taxId", "planId", "phone", "email", "password"] {
            assert!(fields.contains(&expected), "missing violation for {expected}");
        }
    }

    #[test]
    fn name_longer_than_fifty_chars_is_rejected() {
        let mut input = valid();
        input.name = "x".repeat(51);
        let violations = input.validate();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, "name");
    }

    #[test]
    fn plan_ids_one_to_three_are_known() {
        assert_eq!(PlanType::from_id(1), Some(PlanType::Starter));
        assert_eq!(PlanType::from_id(2), Some(PlanType::Business));
        assert_eq!(PlanType::from_id(3), Some(PlanType::Enterprise));
        assert_eq!(PlanType::from_id(0), None);
        assert_eq!(PlanType::from_id(4), None);
    }

    #[test]
    fn wire_format_uses_camel_case() {
        let company = Company::from_draft(Uuid::nil(), valid());
        let json = serde_json::to_value(&company).unwrap();
        assert!(json.get("taxId").is_some());
        assert!(json.get("planId").is_some());
        assert!(json.get("tax_id").is_none());
    }
}
