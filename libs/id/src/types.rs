//! Typed ID definitions for all platform resources.
//!
//! Each ID type has a unique prefix that identifies the resource type.
//! IDs are ULID-based for sortability and uniqueness.

use crate::define_id;

// =============================================================================
// Participants and Sessions
// =============================================================================

define_id!(UserId, "usr");
define_id!(SessionId, "sess");

// =============================================================================
// Content
// =============================================================================

define_id!(TutorialId, "tut");

// =============================================================================
// Requests
// =============================================================================

define_id!(RequestId, "req");

#[cfg(test)]
mod tests {
    use super::*;
    use crate::IdError;

    #[test]
    fn test_new_id_roundtrips() {
        let id = UserId::new();
        let parsed = UserId::parse(&id.to_string()).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_display_has_prefix() {
        let id = TutorialId::new();
        assert!(id.to_string().starts_with("tut_"));
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert_eq!(UserId::parse(""), Err(IdError::Empty));
    }

    #[test]
    fn test_parse_rejects_missing_separator() {
        assert_eq!(
            UserId::parse("usr01HV4Z2WQXKJNM8GPQY6VBKC3D"),
            Err(IdError::MissingSeparator)
        );
    }

    #[test]
    fn test_parse_rejects_wrong_prefix() {
        let err = UserId::parse("sess_01HV4Z2WQXKJNM8GPQY6VBKC3D").unwrap_err();
        assert!(err.is_prefix_error());
    }

    #[test]
    fn test_parse_rejects_bad_ulid() {
        let err = UserId::parse("usr_not-a-ulid").unwrap_err();
        assert!(matches!(err, IdError::InvalidUlid(_)));
    }

    #[test]
    fn test_serde_roundtrip() {
        let id = SessionId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{id}\""));
        let back: SessionId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
    }

    #[test]
    fn test_ids_sort_by_time() {
        let a = SessionId::from_ulid(ulid::Ulid::from(1u128));
        let b = SessionId::from_ulid(ulid::Ulid::from(2u128));
        assert!(a < b);
    }

    proptest::proptest! {
        #[test]
        fn prop_format_parse_roundtrip(raw in proptest::prelude::any::<u128>()) {
            let id = RequestId::from_ulid(ulid::Ulid::from(raw));
            let parsed = RequestId::parse(&id.to_string()).unwrap();
            proptest::prop_assert_eq!(id, parsed);
        }
    }
}
