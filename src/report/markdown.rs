//! Markdown digest of the trending list

use chrono::NaiveDate;

use crate::render::format::{compact_stars, trend_marker};
use crate::store::{FixtureStore, RepoRecord};

/// Languages listed in the summary line
const TOP_LANGUAGES: usize = 5;
/// Entries listed in the "new today" section
const MAX_NEW_ENTRIES: usize = 5;
/// Description length in the "new today" section
const DESCRIPTION_PREVIEW: usize = 60;

/// Build the daily digest for `date`
pub fn generate_markdown(store: &FixtureStore, date: NaiveDate) -> String {
    let repos = store.repos();
    let stats = store.stats();

    let lang_summary = store
        .language_counts()
        .iter()
        .take(TOP_LANGUAGES)
        .map(|(lang, count)| format!("{}: {}", lang, count))
        .collect::<Vec<_>>()
        .join(" | ");

    let mut lines = vec![
        format!("# Synapse Trending Digest ({})", date.format("%Y-%m-%d")),
        String::new(),
        format!(
            "> **{}** trending repositories | **{}** new today",
            stats.repo_count, stats.new_count
        ),
        ">".to_string(),
        format!("> Languages: {}", lang_summary),
        String::new(),
        "---".to_string(),
        String::new(),
    ];

    let new_entries: Vec<&RepoRecord> = repos.iter().filter(|r| r.is_new).take(MAX_NEW_ENTRIES).collect();
    if !new_entries.is_empty() {
        lines.push("## New Today".to_string());
        lines.push(String::new());
        for repo in new_entries {
            lines.push(format!(
                "- **[{}]({})** - {} \u{2b50} {}",
                repo.full_name(),
                repo.url(),
                preview(&repo.description, DESCRIPTION_PREVIEW),
                compact_stars(&repo.stars),
            ));
        }
        lines.extend([String::new(), "---".to_string(), String::new()]);
    }

    lines.extend([
        "## Full List".to_string(),
        String::new(),
        "| # | Repository | Language | Stars | HN | Trend | Category |".to_string(),
        "|---|------------|----------|-------|----|-------|----------|".to_string(),
    ]);
    for repo in repos {
        lines.push(format!(
            "| {} | [{}]({}) | {} | {} | {} | {} | {} |",
            repo.rank,
            repo.full_name(),
            repo.url(),
            if repo.language.is_empty() { "Unknown" } else { repo.language.as_str() },
            compact_stars(&repo.stars),
            repo.hn_comments,
            trend_marker(repo),
            repo.category,
        ));
    }

    lines.extend([
        String::new(),
        "---".to_string(),
        String::new(),
        format!("Generated by Synapse on {}", date.format("%Y-%m-%d")),
    ]);

    lines.join("\n")
}

/// First `max` characters, with an ellipsis if anything was cut
fn preview(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let cut: String = text.chars().take(max).collect();
        format!("{}...", cut.trim_end())
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digest() -> String {
        let date = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        generate_markdown(&FixtureStore::builtin(), date)
    }

    #[test]
    fn test_header_and_counts() {
        let md = digest();

        assert!(md.starts_with("# Synapse Trending Digest (2026-10-16)"));
        assert!(md.contains("> **6** trending repositories | **3** new today"));
        assert!(md.contains("> Languages: Python: 3 | Rust: 1 | TypeScript: 1 | Zig: 1"));
    }

    #[test]
    fn test_new_today_section() {
        let md = digest();
        let section = md.split("## New Today").nth(1).unwrap();
        let section = section.split("## Full List").next().unwrap();

        assert_eq!(section.matches("\n- **").count(), 3);
        assert!(section.contains("[rust-lang/rust](https://github.com/rust-lang/rust)"));
        assert!(!section.contains("oven-sh/bun"));
    }

    #[test]
    fn test_full_table_in_rank_order() {
        let md = digest();
        let rows: Vec<&str> = md.lines().filter(|l| l.starts_with("| ") && !l.starts_with("| #")).collect();

        assert_eq!(rows.len(), 6);
        assert!(rows[0].starts_with("| 1 | [AutoGPT/AutoGPT]"));
        assert!(rows[4].contains("\u{25bc} 2"));
        assert!(rows[2].contains("\u{2013}"));
        assert!(rows[2].contains("[shadcn-ui/ui](https://github.com/shadcn-ui/ui)"));
    }

    #[test]
    fn test_preview() {
        assert_eq!(preview("short", 10), "short");
        assert_eq!(preview("abcdefghij klm", 10), "abcdefghij...");
    }
}
