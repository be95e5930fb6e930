//! Inhabitant (beneficiary) domain model

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::cpf::validate_cpf;

/// Residential address, embedded in the inhabitant record.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Address {
    #[validate(length(min = 3, max = 50, message = "street must be between 3 and 50 characters"))]
    pub street: String,
    #[validate(length(min = 1, message = "number must not be empty"))]
    pub number: String,
}

/// Inhabitant model.
///
/// `cpf` is stored sanitized (digits only); `community_id` is a soft
/// reference resolved by the service layer, the store does not enforce it.
#[derive(Debug, Clone, Serialize)]
pub struct Inhabitant {
    pub id: String,
    pub name: String,
    pub cpf: String,
    #[serde(rename = "numberPhone")]
    pub phone: String,
    pub address: Address,
    #[serde(rename = "communityID")]
    pub community_id: String,
}

/// Create/update candidate. The CPF must already be sanitized; formatted
/// input would fail the exact-length rule before the checksum even runs.
#[derive(Debug, Validate)]
pub struct NewInhabitant {
    #[validate(length(min = 5, max = 50, message = "name must be between 5 and 50 characters"))]
    pub name: String,
    #[validate(
        length(equal = 11, message = "cpf must be exactly 11 digits"),
        custom(function = validate_cpf)
    )]
    pub cpf: String,
    #[validate(length(max = 14, message = "numberPhone must be at most 14 characters"))]
    pub phone: String,
    #[validate(nested)]
    pub address: Address,
    #[validate(length(min = 1, message = "communityID must not be empty"))]
    pub community_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::collect_violations;
    use validator::Validate;

    fn candidate() -> NewInhabitant {
        NewInhabitant {
            name: "Maria da Silva".into(),
            cpf: "52998224725".into(),
            phone: "11987654321".into(),
            address: Address {
                street: "Rua das Flores".into(),
                number: "42".into(),
            },
            community_id: "c-1".into(),
        }
    }

    #[test]
    fn valid_candidate_passes() {
        assert!(candidate().validate().is_ok());
    }

    #[test]
    fn short_street_names_nested_property() {
        let mut c = candidate();
        c.address.street = "ab".into();
        let violations = collect_violations(&c.validate().unwrap_err());
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].property, "address.street");
    }

    #[test]
    fn bad_checksum_is_reported_on_cpf() {
        let mut c = candidate();
        c.cpf = "52998224726".into();
        let violations = collect_violations(&c.validate().unwrap_err());
        assert_eq!(violations[0].property, "cpf");
    }

    #[test]
    fn phone_may_be_empty() {
        let mut c = candidate();
        c.phone = String::new();
        assert!(c.validate().is_ok());
    }

    #[test]
    fn validation_is_idempotent() {
        let mut c = candidate();
        c.name = "ab".into();
        c.address.street = "x".into();
        let first = collect_violations(&c.validate().unwrap_err());
        let second = collect_violations(&c.validate().unwrap_err());
        assert_eq!(first, second);
    }
}
