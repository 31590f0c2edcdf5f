use crate::common::{commit_files, seeded_repository};
use gitling::Repository;
use gitling::commands::porcelain::MergeOutcome;
use pretty_assertions::assert_eq;
use rstest::rstest;

/// Divergent branches touching different files merge cleanly into an
/// automatic two-parent commit
///
/// History:
///
///         first
///        /     \
///   left.txt  right.txt
///       |        |
///     main    feature
#[rstest]
fn merge_divergent_branches_creates_two_parent_commit(mut seeded_repository: Repository) {
    let repository = &mut seeded_repository;

    repository.branch("feature").unwrap();
    let ours = commit_files(repository, &[("left.txt", "from main")], "left");

    repository.checkout("feature").unwrap();
    let theirs = commit_files(repository, &[("right.txt", "from feature")], "right");

    repository.checkout("main").unwrap();
    let outcome = repository.merge("feature").unwrap();

    let MergeOutcome::Merged(commit) = outcome else {
        panic!("expected a merged outcome, got {outcome:?}");
    };

    assert_eq!(commit.parents(), &[ours.id().clone(), theirs.id().clone()]);
    assert!(commit.is_merge());
    assert_eq!(commit.message(), "Merge branch 'feature'");

    // the merged tree is the union of both sides on top of the base
    assert_eq!(commit.tree().get("readme.md"), Some("# hi"));
    assert_eq!(commit.tree().get("left.txt"), Some("from main"));
    assert_eq!(commit.tree().get("right.txt"), Some("from feature"));

    assert_eq!(repository.refs().read_head(), Some(commit.id()));
    assert_eq!(repository.read_file("right.txt").unwrap(), "from feature");
    assert!(repository.index().is_empty());
    assert!(repository.status().unwrap().is_clean());
    assert_eq!(repository.database().len(), 4);
}
