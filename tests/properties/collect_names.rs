//! Property tests for collector naming.

use std::collections::BTreeSet;

use proptest::prelude::*;

use bindata::{collect, IgnorePatterns};

fn segment() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z0-9]{1,8}").unwrap()
}

fn rel_path() -> impl Strategy<Value = String> {
    proptest::collection::vec(segment(), 1..=3).prop_map(|parts| parts.join("/"))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 48,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: with the root as prefix, names are exactly the relative paths.
    #[test]
    fn property_names_are_relative_paths(paths in proptest::collection::btree_set(rel_path(), 1..8)) {
        let dir = tempfile::tempdir().unwrap();
        let mut written = BTreeSet::new();
        for rel in &paths {
            let path = dir.path().join(rel);
            // a shorter path may already be a file where a directory is needed
            if std::fs::create_dir_all(path.parent().unwrap()).is_err()
                || path.is_dir()
                || std::fs::write(&path, rel).is_err()
            {
                continue;
            }
            written.insert(rel.clone());
        }
        // a later write may have turned an earlier file's parent into a file
        written.retain(|rel| dir.path().join(rel).is_file());

        let prefix = dir.path().to_string_lossy().into_owned();
        let toc = collect(dir.path(), &prefix, true, &IgnorePatterns::empty()).unwrap();

        let names: BTreeSet<String> = toc.iter().map(|a| a.name().to_string()).collect();
        prop_assert_eq!(names, written);
        for asset in toc.iter() {
            prop_assert!(!asset.name().starts_with('/'));
            prop_assert!(asset.path().is_absolute());
        }
    }
}
