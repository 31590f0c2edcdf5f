mod merge_conflict_is_deterministic;
mod merge_divergent_branches_creates_two_parent_commit;
mod merge_fast_forwards_empty_head_branch;
mod merge_fast_forwards_undiverged_branch;
mod merge_same_branch_is_noop;
