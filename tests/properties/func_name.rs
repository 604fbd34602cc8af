//! Property tests for accessor identifier sanitizing.

use proptest::prelude::*;

use bindata::FuncName;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: any non-empty name yields a valid identifier.
    #[test]
    fn property_func_name_is_valid_identifier(name in "\\PC{1,40}") {
        let func = FuncName::from_name(&name);
        let s = func.as_str();

        prop_assert!(!s.is_empty());
        prop_assert!(FuncName::is_valid(s), "invalid identifier {:?} from {:?}", s, name);
        prop_assert!(!s.contains("__"), "double underscore in {:?}", s);
        prop_assert!(!s.starts_with(|c: char| c.is_ascii_digit()));
    }

    /// PROPERTY: sanitizing is deterministic and idempotent.
    #[test]
    fn property_func_name_idempotent(name in "[A-Za-z0-9_./ -]{1,40}") {
        let once = FuncName::from_name(&name);
        let again = FuncName::from_name(&name);
        prop_assert_eq!(once.as_str(), again.as_str());

        let twice = FuncName::from_name(once.as_str());
        prop_assert_eq!(once.as_str(), twice.as_str());
    }
}
