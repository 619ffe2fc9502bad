//! Decoding and checking of model replies.

use profile_primitives::ValidationResult;
use serde_json::Value;
use tracing::warn;

use crate::error::ValidationError;

/// Parses the raw model reply into a verdict.
///
/// The reply must be a JSON object with exactly `is_valid` (boolean),
/// `errors` and `warnings` (arrays of strings). A reply whose `is_valid`
/// disagrees with `errors` is kept but has `is_valid` recomputed.
///
/// # Errors
///
/// Returns [`ValidationError::MalformedReply`] for non-JSON text and
/// [`ValidationError::ContractViolation`] for any shape mismatch.
pub fn parse_reply(text: &str) -> Result<ValidationResult, ValidationError> {
    let value: Value = serde_json::from_str(text.trim())
        .map_err(|source| ValidationError::MalformedReply { source })?;

    if !value.is_object() {
        return Err(ValidationError::ContractViolation {
            reason: "expected a JSON object".to_owned(),
        });
    }

    let mut verdict: ValidationResult =
        serde_json::from_value(value).map_err(|err| ValidationError::ContractViolation {
            reason: err.to_string(),
        })?;

    if verdict.normalize() {
        warn!(
            errors = verdict.errors.len(),
            "model reply had is_valid inconsistent with errors; recomputed"
        );
    }

    Ok(verdict)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_reply() {
        let verdict = parse_reply(
            r#"{"is_valid": true, "errors": [], "warnings": ["phone calling code +91 does not match country US"]}"#,
        )
        .unwrap();
        assert!(verdict.is_valid);
        assert_eq!(verdict.warnings.len(), 1);
    }

    #[test]
    fn preserves_message_order() {
        let verdict = parse_reply(
            r#"{"is_valid": false, "errors": ["b", "a", "c"], "warnings": []}"#,
        )
        .unwrap();
        assert_eq!(verdict.errors, ["b", "a", "c"]);
    }

    #[test]
    fn tolerates_surrounding_whitespace() {
        assert!(parse_reply("\n {\"is_valid\":true,\"errors\":[],\"warnings\":[]} \n").is_ok());
    }

    #[test]
    fn non_json_is_malformed() {
        let err = parse_reply("Sure! Here is the result:").expect_err("prose");
        assert!(matches!(err, ValidationError::MalformedReply { .. }));
    }

    #[test]
    fn non_object_is_contract_violation() {
        let err = parse_reply("[true, [], []]").expect_err("array");
        assert!(matches!(err, ValidationError::ContractViolation { .. }));
    }

    #[test]
    fn extra_key_is_contract_violation() {
        let err = parse_reply(
            r#"{"is_valid": true, "errors": [], "warnings": [], "explanation": "looks fine"}"#,
        )
        .expect_err("extra key");
        assert!(matches!(err, ValidationError::ContractViolation { .. }));
    }

    #[test]
    fn missing_key_is_contract_violation() {
        let err = parse_reply(r#"{"is_valid": false, "errors": ["x"]}"#).expect_err("missing");
        assert!(matches!(err, ValidationError::ContractViolation { .. }));
    }

    #[test]
    fn wrong_element_type_is_contract_violation() {
        let err = parse_reply(r#"{"is_valid": false, "errors": [1], "warnings": []}"#)
            .expect_err("numeric message");
        assert!(matches!(err, ValidationError::ContractViolation { .. }));
    }

    #[test]
    fn inconsistent_flag_is_recomputed() {
        let verdict = parse_reply(
            r#"{"is_valid": true, "errors": ["country must be a 2-letter code"], "warnings": []}"#,
        )
        .unwrap();
        assert!(!verdict.is_valid);
        assert!(verdict.holds_invariant());

        let verdict =
            parse_reply(r#"{"is_valid": false, "errors": [], "warnings": ["minor"]}"#).unwrap();
        assert!(verdict.is_valid);
    }
}
