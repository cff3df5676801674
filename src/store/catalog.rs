//! The read-only fixture store
//!
//! Owns every record the dashboard renders. Built once at startup and
//! shared (behind an `Arc`) for the lifetime of the process.

use std::collections::{HashMap, HashSet};

use super::error::{StoreError, StoreResult};
use super::fixtures;
use super::types::{DeepDiveRecord, RepoRecord, SizeTreeNode};

/// Summary counts over the repository list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreStats {
    pub repo_count: usize,
    pub new_count: usize,
    pub category_count: usize,
    pub tree_nodes: usize,
}

impl std::fmt::Display for StoreStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} repos ({} new), {} categories, {} treemap nodes",
            self.repo_count, self.new_count, self.category_count, self.tree_nodes
        )
    }
}

/// In-memory repository list, deep-dive record and size tree
#[derive(Debug, Clone)]
pub struct FixtureStore {
    repos: Vec<RepoRecord>,
    deep_dive: DeepDiveRecord,
    size_tree: SizeTreeNode,
}

impl FixtureStore {
    /// Assemble a store, checking the record invariants
    ///
    /// Records are ordered by rank. Fails if the list is empty, an id or a
    /// rank repeats, or a rank is zero.
    pub fn new(
        mut repos: Vec<RepoRecord>,
        deep_dive: DeepDiveRecord,
        size_tree: SizeTreeNode,
    ) -> StoreResult<Self> {
        repos.sort_by_key(|r| r.rank);
        validate_repos(&repos)?;

        Ok(Self {
            repos,
            deep_dive,
            size_tree,
        })
    }

    /// The compiled-in dashboard data
    pub fn builtin() -> Self {
        let mut repos = fixtures::repo_data();
        repos.sort_by_key(|r| r.rank);

        Self {
            repos,
            deep_dive: fixtures::omniparse_data(),
            size_tree: fixtures::treemap_data(),
        }
    }

    /// All records in rank order
    pub fn repos(&self) -> &[RepoRecord] {
        &self.repos
    }

    /// Look up a record by id
    pub fn get(&self, id: &str) -> Option<&RepoRecord> {
        self.repos.iter().find(|r| r.id == id)
    }

    /// Whether a record with this id exists
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// The first record in rank order (the default selection)
    pub fn first(&self) -> &RepoRecord {
        // Non-empty: checked by `new`, and the builtin list has six entries.
        &self.repos[0]
    }

    /// The featured deep-dive record
    pub fn deep_dive(&self) -> &DeepDiveRecord {
        &self.deep_dive
    }

    /// The category size tree
    pub fn size_tree(&self) -> &SizeTreeNode {
        &self.size_tree
    }

    /// Record counts per language, most common first (ties by name)
    pub fn language_counts(&self) -> Vec<(String, usize)> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for repo in &self.repos {
            let lang = if repo.language.is_empty() { "Other" } else { repo.language.as_str() };
            *counts.entry(lang).or_insert(0) += 1;
        }

        let mut counts: Vec<(String, usize)> =
            counts.into_iter().map(|(k, v)| (k.to_string(), v)).collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        counts
    }

    /// Summary counts
    pub fn stats(&self) -> StoreStats {
        let mut categories: Vec<&str> = self.repos.iter().map(|r| r.category.as_str()).collect();
        categories.sort_unstable();
        categories.dedup();

        StoreStats {
            repo_count: self.repos.len(),
            new_count: self.repos.iter().filter(|r| r.is_new).count(),
            category_count: categories.len(),
            tree_nodes: self.size_tree.node_count(),
        }
    }
}

impl Default for FixtureStore {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Check a rank-sorted record list
fn validate_repos(repos: &[RepoRecord]) -> StoreResult<()> {
    if repos.is_empty() {
        return Err(StoreError::Empty);
    }

    let mut seen_ids: HashSet<&str> = HashSet::with_capacity(repos.len());
    for repo in repos {
        if repo.rank == 0 {
            return Err(StoreError::ZeroRank(repo.id.clone()));
        }
        if !seen_ids.insert(repo.id.as_str()) {
            return Err(StoreError::DuplicateId(repo.id.clone()));
        }
    }

    for pair in repos.windows(2) {
        if pair[0].rank == pair[1].rank {
            return Err(StoreError::DuplicateRank {
                rank: pair[0].rank,
                first: pair[0].id.clone(),
                second: pair[1].id.clone(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(repos: Vec<RepoRecord>) -> StoreResult<FixtureStore> {
        FixtureStore::new(repos, fixtures::omniparse_data(), fixtures::treemap_data())
    }

    #[test]
    fn test_builtin_store_is_valid() {
        let store = FixtureStore::builtin();
        let rebuilt = store_with(store.repos().to_vec()).unwrap();

        assert_eq!(rebuilt.repos().len(), 6);
        assert_eq!(store.first().id, "autogpt");
    }

    #[test]
    fn test_records_are_rank_ordered() {
        let store = FixtureStore::builtin();
        let ranks: Vec<u32> = store.repos().iter().map(|r| r.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_new_sorts_by_rank() {
        let store = store_with(vec![
            RepoRecord::new("b", 2, "o", "b"),
            RepoRecord::new("a", 1, "o", "a"),
        ])
        .unwrap();

        assert_eq!(store.first().id, "a");
    }

    #[test]
    fn test_lookup() {
        let store = FixtureStore::builtin();

        assert_eq!(store.get("bun").map(|r| r.rank), Some(5));
        assert!(store.contains("omniparse"));
        assert!(!store.contains("left-pad"));
    }

    #[test]
    fn test_rejects_empty_and_duplicates() {
        assert_eq!(store_with(vec![]).unwrap_err(), StoreError::Empty);

        let err = store_with(vec![
            RepoRecord::new("a", 1, "o", "a"),
            RepoRecord::new("a", 2, "o", "a"),
        ])
        .unwrap_err();
        assert_eq!(err, StoreError::DuplicateId("a".to_string()));

        let err = store_with(vec![
            RepoRecord::new("a", 1, "o", "a"),
            RepoRecord::new("b", 1, "o", "b"),
        ])
        .unwrap_err();
        assert!(matches!(err, StoreError::DuplicateRank { rank: 1, .. }));

        let err = store_with(vec![RepoRecord::new("z", 0, "o", "z")]).unwrap_err();
        assert_eq!(err, StoreError::ZeroRank("z".to_string()));
    }

    #[test]
    fn test_language_counts() {
        let store = FixtureStore::builtin();
        let counts = store.language_counts();

        assert_eq!(counts[0], ("Python".to_string(), 3));
        assert_eq!(counts.len(), 4);
    }

    #[test]
    fn test_stats() {
        let stats = FixtureStore::builtin().stats();

        assert_eq!(stats.repo_count, 6);
        assert_eq!(stats.new_count, 3);
        assert_eq!(stats.category_count, 5);
        assert_eq!(stats.tree_nodes, 18);
    }
}
