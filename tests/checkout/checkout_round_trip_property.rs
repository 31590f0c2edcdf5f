use crate::common::{commit_files, repository};
use proptest::prelude::*;

proptest! {
    /// Committing an arbitrary working set, switching away to a branch
    /// with different content, and switching back restores the exact
    /// original snapshot
    #[test]
    fn checkout_round_trip_restores_snapshot(
        files in prop::collection::btree_map("[a-z]{1,8}\\.txt", "[ -~]{0,20}", 1..5usize),
    ) {
        let mut repo = repository();

        let files: Vec<(&str, &str)> = files
            .iter()
            .map(|(path, content)| (path.as_str(), content.as_str()))
            .collect();
        commit_files(&mut repo, &files, "snapshot");
        let before = repo.workspace().snapshot();

        repo.checkout_new("detour").unwrap();
        commit_files(&mut repo, &[("detour.log", "elsewhere")], "detour");

        repo.checkout("main").unwrap();
        let after = repo.workspace().snapshot();

        prop_assert_eq!(before, after);
    }
}
