use crate::common::{commit_files, seeded_repository};
use gitling::Repository;
use gitling::artifacts::branch::branch_name::BranchName;
use pretty_assertions::assert_eq;
use rstest::rstest;

/// Pushing copies the branch pointer and every reachable commit into the
/// mirror
#[rstest]
fn push_copies_history_to_the_mirror(mut seeded_repository: Repository) {
    let repository = &mut seeded_repository;
    commit_files(repository, &[("more.txt", "x")], "second");
    repository
        .remote_add("origin", "https://example.com/repo")
        .unwrap();

    let pushed = repository.push("main", false).unwrap();

    let tip = repository.refs().read_head().unwrap();
    assert_eq!(pushed.as_ref(), Some(tip));

    let mirror = repository.remote().unwrap();
    let main = BranchName::default_branch();
    assert_eq!(mirror.branch_tip(&main), Some(tip));
    assert_eq!(mirror.commit_count(), repository.database().len());
}

/// Re-pushing after new commits overwrites the mirror pointer; earlier
/// mirror commits are kept
#[rstest]
fn push_again_moves_mirror_pointer(mut seeded_repository: Repository) {
    let repository = &mut seeded_repository;
    repository
        .remote_add("origin", "https://example.com/repo")
        .unwrap();
    repository.push("main", false).unwrap();

    let second = commit_files(repository, &[("more.txt", "x")], "second");
    repository.push("main", false).unwrap();

    let mirror = repository.remote().unwrap();
    let main = BranchName::default_branch();
    assert_eq!(mirror.branch_tip(&main), Some(second.id()));
    assert_eq!(mirror.commit_count(), 2);
}

/// Pushing an unborn branch records an unbound pointer on the mirror
#[rstest]
fn push_unborn_branch_records_unbound_pointer() {
    let mut repository = crate::common::repository();
    repository
        .remote_add("origin", "https://example.com/repo")
        .unwrap();

    // branched before the first commit so the pointer is unbound
    repository.branch("wip").unwrap();

    let pushed = repository.push("wip", false).unwrap();

    assert_eq!(pushed, None);
    let wip = BranchName::try_parse("wip").unwrap();
    assert_eq!(repository.remote().unwrap().branch_tip(&wip), None);
    assert_eq!(repository.remote().unwrap().commit_count(), 0);
}
