//! Property-based tests for the defaults merge.
//!
//! These tests use proptest to generate random field values and verify that
//! the merge invariants hold for all possible inputs.

#[cfg(test)]
mod proptest_tests {
    use crate::merge::{merge_pom_defaults, seed_defaults};
    use crate::pom::{License, Pom, PomDefaults};
    use proptest::prelude::*;

    fn license(name: &str) -> License {
        License {
            name: Some(name.to_string()),
            ..License::default()
        }
    }

    proptest! {
        /// Property: a scalar field set on the target survives any defaults
        #[test]
        fn merge_never_overwrites_set_scalars(
            own in ".*",
            default_value in ".*",
            fallback in ".*",
        ) {
            let mut pom = Pom::new("com.example", "lib", "1.0.0");
            pom.description = Some(own.clone());
            pom.url = Some(own.clone());
            let defaults = PomDefaults {
                description: Some(default_value.clone()),
                url: Some(default_value),
                ..PomDefaults::default()
            };

            merge_pom_defaults(&mut pom, &defaults, &fallback);

            prop_assert_eq!(pom.description.as_deref(), Some(own.as_str()));
            prop_assert_eq!(pom.url.as_deref(), Some(own.as_str()));
        }

        /// Property: after a merge the name is always set (defaults value or
        /// the fallback)
        #[test]
        fn merge_always_yields_a_name(
            default_name in proptest::option::of(".*"),
            fallback in ".*",
        ) {
            let mut pom = Pom::new("com.example", "lib", "1.0.0");
            let defaults = PomDefaults {
                name: default_name.clone(),
                ..PomDefaults::default()
            };

            merge_pom_defaults(&mut pom, &defaults, &fallback);

            let expected = default_name.unwrap_or(fallback);
            prop_assert_eq!(pom.name, Some(expected));
        }

        /// Property: merged collections are target entries followed by the
        /// defaults entries, order preserved, nothing dropped
        #[test]
        fn merge_appends_collections_in_order(
            own_names in proptest::collection::vec("[a-z]{1,8}", 0..4),
            default_names in proptest::collection::vec("[a-z]{1,8}", 0..4),
        ) {
            let mut pom = Pom::new("com.example", "lib", "1.0.0");
            pom.licenses = own_names.iter().map(|n| license(n)).collect();
            let defaults = PomDefaults {
                licenses: default_names.iter().map(|n| license(n)).collect(),
                ..PomDefaults::default()
            };

            merge_pom_defaults(&mut pom, &defaults, "lib");

            let merged: Vec<_> = pom
                .licenses
                .iter()
                .filter_map(|l| l.name.clone())
                .collect();
            let expected: Vec<_> = own_names
                .iter()
                .chain(default_names.iter())
                .cloned()
                .collect();
            prop_assert_eq!(merged, expected);
        }

        /// Property: merging is deterministic
        #[test]
        fn merge_is_deterministic(
            description in proptest::option::of(".*"),
            url in proptest::option::of(".*"),
            fallback in ".*",
        ) {
            let defaults = PomDefaults {
                description,
                url,
                ..PomDefaults::default()
            };
            let mut first = Pom::new("com.example", "lib", "1.0.0");
            let mut second = first.clone();

            merge_pom_defaults(&mut first, &defaults, &fallback);
            merge_pom_defaults(&mut second, &defaults, &fallback);

            prop_assert_eq!(first, second);
        }

        /// Property: seeding keeps every value the module already set
        #[test]
        fn seed_never_overwrites_module_defaults(
            module_value in ".*",
            root_value in ".*",
        ) {
            let mut module = PomDefaults {
                description: Some(module_value.clone()),
                ..PomDefaults::default()
            };
            let root = PomDefaults {
                description: Some(root_value.clone()),
                url: Some(root_value.clone()),
                ..PomDefaults::default()
            };

            seed_defaults(&mut module, &root);

            prop_assert_eq!(module.description.as_deref(), Some(module_value.as_str()));
            prop_assert_eq!(module.url.as_deref(), Some(root_value.as_str()));
        }
    }
}
