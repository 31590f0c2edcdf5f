use crate::common::{commit_files, seeded_repository};
use gitling::Repository;
use gitling::artifacts::branch::branch_name::BranchName;
use pretty_assertions::assert_eq;
use rstest::rstest;

/// A new branch is bound to the tip of the current HEAD branch and does
/// not move when HEAD advances afterwards
#[rstest]
fn create_branch_binds_current_tip(mut seeded_repository: Repository) {
    let repository = &mut seeded_repository;
    let tip = repository.refs().read_head().unwrap().clone();

    let name = repository.branch("feature").unwrap();
    assert_eq!(name.as_ref(), "feature");

    commit_files(repository, &[("more.txt", "x")], "second");

    let feature = BranchName::try_parse("feature").unwrap();
    assert_eq!(repository.refs().branch_tip(&feature).unwrap(), Some(&tip));
    assert_ne!(repository.refs().read_head(), Some(&tip));
}

/// Invalid branch names are rejected by the name parser
#[rstest]
#[case("")]
#[case("-lead")]
#[case("spa ce")]
fn invalid_branch_name_fails(mut seeded_repository: Repository, #[case] name: &str) {
    let result = seeded_repository.branch(name);

    assert!(matches!(result, Err(gitling::Error::Parse(_))));
}
