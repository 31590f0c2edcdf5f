use crate::common::{commit_files, repository};
use gitling::Repository;
use gitling::commands::porcelain::MergeOutcome;
use pretty_assertions::assert_eq;
use rstest::rstest;

/// Merging into an unborn HEAD branch fast-forwards it to the other tip
#[rstest]
fn merge_fast_forwards_empty_head_branch(mut repository: Repository) {
    // main has no commits; all work happens on feature
    repository.checkout_new("feature").unwrap();
    let tip = commit_files(&mut repository, &[("work.txt", "done")], "feature work");

    repository.checkout("main").unwrap();
    assert!(repository.workspace().is_empty());

    let outcome = repository.merge("feature").unwrap();

    assert_eq!(outcome, MergeOutcome::FastForward(tip.id().clone()));
    assert_eq!(repository.refs().read_head(), Some(tip.id()));
    assert_eq!(repository.read_file("work.txt").unwrap(), "done");
}
