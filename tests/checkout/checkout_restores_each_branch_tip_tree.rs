use crate::common::{commit_files, seeded_repository};
use gitling::Repository;
use pretty_assertions::assert_eq;
use rstest::rstest;

/// Switching branches replaces the whole working set with each tip's tree
///
/// History:
///
///       first ── v2
///         |       |
///      feature   main
///
/// `readme.md` reads `# hi` on feature and `# hi v2` on main.
#[rstest]
fn checkout_restores_each_branch_tip_tree(mut seeded_repository: Repository) {
    let repository = &mut seeded_repository;

    repository.branch("feature").unwrap();
    commit_files(repository, &[("readme.md", "# hi v2")], "v2");

    repository.checkout("feature").unwrap();
    assert_eq!(repository.read_file("readme.md").unwrap(), "# hi");

    repository.checkout("main").unwrap();
    assert_eq!(repository.read_file("readme.md").unwrap(), "# hi v2");
}

/// Files absent from the target tip's tree disappear from the working set
#[rstest]
fn checkout_drops_files_missing_from_target(mut seeded_repository: Repository) {
    let repository = &mut seeded_repository;

    repository.branch("feature").unwrap();
    commit_files(repository, &[("extra.txt", "only on main")], "add extra");

    repository.checkout("feature").unwrap();

    assert!(!repository.workspace().contains("extra.txt"));
    assert!(repository.workspace().contains("readme.md"));
}
