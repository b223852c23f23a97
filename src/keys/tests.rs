mod codec_tests {
    use crate::keys::codec::{denormalize, needs_normalization, normalize, reform_bulk, SPACE_SENTINEL};
    use crate::keys::structs::normalized_key::NormalizedKey;
    use std::borrow::Cow;
    use std::collections::HashMap;

    #[test]
    fn test_clean_key_is_borrowed_unchanged() {
        let key = "user:42:profile";
        let normalized = normalize(key);
        assert!(matches!(normalized, Cow::Borrowed(_)));
        assert_eq!(normalized, key);
        assert!(std::ptr::eq(normalized.as_ref(), key));
    }

    #[test]
    fn test_space_uses_legacy_sentinel() {
        assert_eq!(normalize("hello world"), format!("hello{}world", SPACE_SENTINEL));
        assert_eq!(normalize(" a "), "@+~a@+~");
    }

    #[test]
    fn test_other_whitespace_and_controls_are_escaped() {
        assert_eq!(normalize("a\tb"), "a@+09~b");
        assert_eq!(normalize("a\nb\r"), "a@+0a~b@+0d~");
        assert_eq!(normalize("a\u{7f}"), "a@+7f~");
        assert_eq!(normalize("a\u{3000}b"), "a@+3000~b");
        assert!(!needs_normalization(&normalize("x y\tz\u{3000}")));
    }

    #[test]
    fn test_denormalize_inverts() {
        for key in ["hello world", "a\tb", " leading", "trailing ", "a\u{3000}b", "x\r\ny"] {
            assert_eq!(denormalize(&normalize(key)), key);
        }
    }

    #[test]
    fn test_denormalize_keeps_unknown_sequences() {
        assert_eq!(denormalize("mail@+example"), "mail@+example");
        assert_eq!(denormalize("a@+zz~"), "a@+zz~");
        assert_eq!(denormalize("a@+41~"), "a@+41~");
        assert!(matches!(denormalize("plain"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_normalized_key() {
        let key = NormalizedKey::new("a b");
        assert_eq!(key.normalized, "a@+~b");
        assert!(key.is_changed());
        assert!(!NormalizedKey::new("ab").is_changed());
    }

    #[test]
    fn test_reform_bulk_without_changes_returns_none() {
        let keys = vec!["a".to_string(), "b".to_string()];
        assert!(reform_bulk(&keys).is_none());
        assert!(reform_bulk::<String>(&[]).is_none());
    }

    #[test]
    fn test_reform_bulk_maps_only_changed_keys() {
        let keys = vec!["plain".to_string(), "with space".to_string(), "tab\there".to_string()];
        let mapping = reform_bulk(&keys).unwrap();
        assert_eq!(mapping.len(), 2);
        assert_eq!(mapping.normalized_for("with space"), "with@+~space");
        assert_eq!(mapping.original_for("with@+~space"), "with space");
        assert_eq!(mapping.normalized_for("plain"), "plain");
        assert_eq!(mapping.original_for("plain"), "plain");
        assert_eq!(
            mapping.normalize_keys(&keys),
            vec!["plain".to_string(), "with@+~space".to_string(), "tab@+09~here".to_string()]
        );
    }

    #[test]
    fn test_restore_rekeys_results() {
        let keys = vec!["plain".to_string(), "with space".to_string()];
        let mapping = reform_bulk(&keys).unwrap();
        let mut found = HashMap::new();
        found.insert("plain".to_string(), 1);
        found.insert("with@+~space".to_string(), 2);
        let restored = mapping.restore(found);
        assert_eq!(restored.get("plain"), Some(&1));
        assert_eq!(restored.get("with space"), Some(&2));
        assert_eq!(restored.len(), 2);
    }
}

mod codec_property_tests {
    use crate::keys::codec::{denormalize, needs_normalization, normalize, reform_bulk};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn clean_keys_are_untouched(key in "[a-zA-Z0-9:_.@+~-]{0,64}") {
            prop_assert_eq!(normalize(&key), key.as_str());
        }

        #[test]
        fn normalization_round_trips(key in "[a-z0-9:_. \t\r\n\u{3000}-]{0,64}") {
            let normalized = normalize(&key);
            prop_assert!(!needs_normalization(&normalized));
            prop_assert_eq!(denormalize(&normalized), key.as_str());
        }

        #[test]
        fn bulk_mapping_round_trips(keys in proptest::collection::vec("[a-z \t]{1,16}", 1..20)) {
            match reform_bulk(&keys) {
                None => prop_assert!(keys.iter().all(|key| !needs_normalization(key))),
                Some(mapping) => {
                    for key in &keys {
                        let normalized = mapping.normalized_for(key);
                        let expected = normalize(key);
                        prop_assert_eq!(normalized, expected.as_ref());
                        prop_assert_eq!(mapping.original_for(normalized), key.as_str());
                    }
                }
            }
        }
    }
}
