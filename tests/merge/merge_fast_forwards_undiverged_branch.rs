use crate::common::{commit_files, seeded_repository};
use gitling::Repository;
use gitling::commands::porcelain::MergeOutcome;
use pretty_assertions::assert_eq;
use rstest::rstest;

/// Merging a strictly-ahead branch moves the HEAD pointer without
/// creating a merge commit
///
/// History:
///
///     first ── v2
///       |       |
///     main   feature
#[rstest]
fn merge_fast_forwards_undiverged_branch(mut seeded_repository: Repository) {
    let repository = &mut seeded_repository;

    repository.checkout_new("feature").unwrap();
    let v2 = commit_files(repository, &[("readme.md", "# hi v2")], "v2");

    repository.checkout("main").unwrap();
    let outcome = repository.merge("feature").unwrap();

    assert_eq!(outcome, MergeOutcome::FastForward(v2.id().clone()));
    assert_eq!(repository.refs().read_head(), Some(v2.id()));
    assert_eq!(repository.database().len(), 2);
    assert_eq!(repository.read_file("readme.md").unwrap(), "# hi v2");
    assert!(repository.status().unwrap().is_clean());
}
