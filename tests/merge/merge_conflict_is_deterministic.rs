use crate::common::{commit_files, repository};
use gitling::Repository;
use gitling::commands::porcelain::{AddTarget, MergeOutcome};
use pretty_assertions::assert_eq;
use rstest::rstest;

/// Both sides editing the same file produces a conflict-marked working
/// file, no commit, and an empty index; resolving by hand and committing
/// finishes the merge
///
/// History:
///
///       f = "A"  (base)
///        /   \
///   f = "C"  f = "B"
///       |      |
///     main     x
#[rstest]
fn merge_conflict_is_deterministic(mut repository: Repository) {
    commit_files(&mut repository, &[("f", "A")], "base");

    repository.branch("x").unwrap();
    commit_files(&mut repository, &[("f", "C")], "ours");

    repository.checkout("x").unwrap();
    commit_files(&mut repository, &[("f", "B")], "theirs");

    repository.checkout("main").unwrap();
    let outcome = repository.merge("x").unwrap();

    assert_eq!(outcome, MergeOutcome::Conflicted(vec!["f".to_string()]));

    // no merge commit, empty index, marked file in the working set
    assert_eq!(repository.database().len(), 3);
    assert!(repository.index().is_empty());
    assert_eq!(
        repository.read_file("f").unwrap(),
        "<<<<<<< HEAD\nC\n=======\nB\n>>>>>>> MERGE\n"
    );

    // resolve by hand, stage, and commit the result
    repository.write_file("f", "BC").unwrap();
    repository
        .add(AddTarget::Paths(vec!["f".to_string()]))
        .unwrap();
    let resolution = repository.commit("resolve conflict").unwrap();

    assert_eq!(resolution.tree().get("f"), Some("BC"));
    assert!(repository.status().unwrap().is_clean());
}
