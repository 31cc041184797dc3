//! Boundary validation
//!
//! Runs before any computation. Checks, in order:
//! 1. every denomination value is a finite positive number
//! 2. at least one denomination is active
//! 3. the participant list is non-empty
//! 4. participant names are unique
//! 5. buy-ins (or net amounts) are finite

use std::collections::HashSet;

use crate::models::{ActiveDenominations, DenominationTable, ValidationError};

use super::request::{NetSettlementRequest, SettlementRequest};

/// Validate a token-valued request, returning the typed table and active set
pub fn validate_request(
    request: &SettlementRequest,
) -> Result<(DenominationTable, ActiveDenominations), ValidationError> {
    let table = DenominationTable::try_from(request.denominations.clone())?;
    let active = ActiveDenominations::new(request.active.iter().cloned())?;

    validate_participants(
        request
            .participants
            .iter()
            .map(|p| (p.name(), p.buy_in())),
    )?;

    Ok((table, active))
}

/// Validate an already-net request
pub fn validate_net_request(request: &NetSettlementRequest) -> Result<(), ValidationError> {
    validate_participants(
        request
            .friends
            .iter()
            .map(|(name, amount)| (name.as_str(), *amount)),
    )
}

fn validate_participants<'a, I>(participants: I) -> Result<(), ValidationError>
where
    I: IntoIterator<Item = (&'a str, f64)>,
{
    let mut seen = HashSet::new();
    for (name, amount) in participants {
        if !seen.insert(name) {
            return Err(ValidationError::DuplicateParticipant {
                name: name.to_string(),
            });
        }
        if !amount.is_finite() {
            return Err(ValidationError::NonFiniteBuyIn {
                name: name.to_string(),
            });
        }
    }

    if seen.is_empty() {
        return Err(ValidationError::EmptyInput);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ParticipantInput;
    use std::collections::HashMap;

    fn request(
        participants: Vec<ParticipantInput>,
        denominations: &[(&str, f64)],
        active: &[&str],
    ) -> SettlementRequest {
        SettlementRequest {
            participants,
            denominations: denominations
                .iter()
                .map(|(k, v)| (k.to_string(), *v))
                .collect::<HashMap<_, _>>(),
            active: active.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_denominations_checked_before_participants() {
        let req = request(vec![], &[("red", 0.0)], &[]);
        assert!(matches!(
            validate_request(&req),
            Err(ValidationError::NonPositiveDenomination { .. })
        ));
    }

    #[test]
    fn test_active_checked_before_participants() {
        let req = request(vec![], &[("red", 0.5)], &[]);
        assert_eq!(validate_request(&req), Err(ValidationError::NoActiveDenominations));
    }

    #[test]
    fn test_empty_participants() {
        let req = request(vec![], &[("red", 0.5)], &["red"]);
        assert_eq!(validate_request(&req), Err(ValidationError::EmptyInput));
    }

    #[test]
    fn test_duplicate_names() {
        let req = request(
            vec![ParticipantInput::new("A", 1.0), ParticipantInput::new("A", 2.0)],
            &[("red", 0.5)],
            &["red"],
        );
        assert_eq!(
            validate_request(&req),
            Err(ValidationError::DuplicateParticipant {
                name: "A".to_string()
            })
        );
    }

    #[test]
    fn test_net_request_rejects_nan() {
        let req = NetSettlementRequest {
            friends: vec![("A".to_string(), f64::NAN)],
        };
        assert_eq!(
            validate_net_request(&req),
            Err(ValidationError::NonFiniteBuyIn {
                name: "A".to_string()
            })
        );
    }
}
