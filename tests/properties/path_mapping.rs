//! Property tests for source → target path mapping and filtering.

use std::fs;
use std::path::{Path, PathBuf};

use proptest::prelude::*;

use filecloner::{PathFilter, SyncEngine, WatchConfig};

fn segment() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9_-][A-Za-z0-9._-]{0,15}").unwrap()
}

fn relative_path() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(segment(), 1..=5)
}

fn join_all(root: &Path, segments: &[String]) -> PathBuf {
    segments.iter().fold(root.to_path_buf(), |p, s| p.join(s))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: A file at `source/rel` always maps to `target/rel`.
    #[test]
    fn property_target_preserves_relative_structure(segments in relative_path()) {
        let temp = tempfile::tempdir().unwrap();
        let source = temp.path().join("source");
        let target = temp.path().join("target");
        fs::create_dir_all(&source).unwrap();
        fs::create_dir_all(&target).unwrap();

        let config = WatchConfig::new(&source, &target, true, None).unwrap();
        let engine = SyncEngine::new(config);
        let canonical_source = source.canonicalize().unwrap();
        let canonical_target = target.canonicalize().unwrap();

        let mapped = engine
            .target_path_for(&join_all(&canonical_source, &segments))
            .unwrap();

        prop_assert_eq!(&mapped, &join_all(&canonical_target, &segments));
        prop_assert!(mapped.starts_with(&canonical_target));
    }

    /// PROPERTY: An escaped literal filter matches any path containing it.
    #[test]
    fn property_literal_filter_matches_containing_path(
        segments in relative_path(),
        pick in any::<prop::sample::Index>(),
    ) {
        let needle = &segments[pick.index(segments.len())];
        let filter = PathFilter::new(&regex::escape(needle)).unwrap();

        prop_assert!(filter.matches(&join_all(Path::new("/root"), &segments)));
    }

    /// PROPERTY: Compiling an arbitrary pattern never panics.
    #[test]
    fn property_filter_compile_never_panics(pattern in "(?s).{0,64}") {
        let _ = PathFilter::new(&pattern);
    }
}
