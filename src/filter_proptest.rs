//! Property-based tests for name derivation, exclusion filtering and
//! classpath merging.
//!
//! These tests use proptest to generate random inputs and verify that
//! invariants hold for all possible inputs.

#[cfg(test)]
mod proptest_tests {
    use std::collections::{BTreeSet, HashSet};
    use std::path::PathBuf;

    use crate::aggregate::merge_classpath;
    use crate::filter::{compile_patterns, compute_exclusions, derived_names, matches};
    use crate::module::Module;
    use proptest::prelude::*;

    fn module_with_classpath(name: &str, entries: &[String]) -> Module {
        Module {
            name: name.to_string(),
            display_name: name.to_string(),
            namespace: None,
            source_directories: vec![PathBuf::from(name)],
            classpath_entries: entries.iter().map(PathBuf::from).collect(),
            snippet_directories: BTreeSet::new(),
            resource_directories: BTreeSet::new(),
        }
    }

    // ============================================================================
    // derived_names property tests
    // ============================================================================

    proptest! {
        /// Property: segments after the root marker become the dotted name
        #[test]
        fn derived_name_joins_segments_after_marker(
            packages in prop::collection::vec("[a-z][a-z0-9]{0,7}", 0..5),
            class in "[A-Z][a-zA-Z0-9]{0,10}",
        ) {
            prop_assume!(!packages.iter().any(|p| p == "java"));
            let mut path = PathBuf::from("module/src/main/java");
            for package in &packages {
                path.push(package);
            }
            path.push(format!("{}.java", class));

            let names = derived_names([&path], "java");
            let mut expected = packages.clone();
            expected.push(class);
            prop_assert_eq!(names.into_iter().collect::<Vec<_>>(), vec![expected.join(".")]);
        }

        /// Property: the module descriptor never yields a name
        #[test]
        fn module_descriptor_never_named(packages in prop::collection::vec("[a-z]{1,8}", 0..4)) {
            let mut path = PathBuf::from("src/java");
            for package in &packages {
                path.push(package);
            }
            path.push("module-info.java");
            prop_assert!(derived_names([&path], "java").is_empty());
        }
    }

    // ============================================================================
    // exclusion property tests
    // ============================================================================

    proptest! {
        /// Property: exclusions are always a subset of the input names
        #[test]
        fn exclusions_are_subset(
            names in prop::collection::btree_set("[a-c](\\.[a-c]){0,3}", 0..20),
            patterns in prop::collection::vec("[a-c*](/[a-c*]){0,3}", 0..4),
        ) {
            let compiled = compile_patterns(&patterns).unwrap();
            let excluded = compute_exclusions(&names, &compiled);
            prop_assert!(excluded.is_subset(&names));
        }

        /// Property: "**" excludes every name
        #[test]
        fn double_star_excludes_all(names in prop::collection::btree_set("[a-z]{1,5}(\\.[a-z]{1,5}){0,3}", 0..20)) {
            let compiled = compile_patterns(&["**"]).unwrap();
            prop_assert_eq!(compute_exclusions(&names, &compiled), names);
        }

        /// Property: a name written as its own slash path matches itself
        #[test]
        fn exact_pattern_matches_itself(name in "[a-z]{1,5}(\\.[a-z]{1,5}){0,3}") {
            let compiled = compile_patterns(&[name.replace('.', "/")]).unwrap();
            prop_assert!(matches(&name, &compiled));
        }
    }

    // ============================================================================
    // merge_classpath property tests
    // ============================================================================

    proptest! {
        /// Property: merged classpath has no duplicates and keeps first-seen order
        #[test]
        fn merged_classpath_is_first_seen_order(
            a in prop::collection::vec("[a-e]\\.jar", 0..6),
            b in prop::collection::vec("[a-e]\\.jar", 0..6),
        ) {
            let modules = vec![module_with_classpath("a", &a), module_with_classpath("b", &b)];
            let merged = merge_classpath(&modules);

            let unique: HashSet<&PathBuf> = merged.iter().collect();
            prop_assert_eq!(unique.len(), merged.len());

            let mut seen = HashSet::new();
            let expected: Vec<PathBuf> = a
                .iter()
                .chain(b.iter())
                .filter(|entry| seen.insert(entry.as_str()))
                .map(PathBuf::from)
                .collect();
            prop_assert_eq!(merged, expected);
        }
    }
}
