//! Ranked list and detail panel

use super::format::{compact_stars, escape, rank_label, trend_class, trend_marker};
use super::page::Navigation;
use crate::store::RepoRecord;

/// Star history plotted in the detail panel
const STAR_GROWTH: [u32; 10] = [10, 15, 12, 20, 25, 30, 45, 50, 55, 60];

/// Placeholder discussion shown for every record
const HN_COMMENTS: [&str; 3] = [
    "The memory management is finally usable. I ran this on my M1 Air without swap issues.",
    "Agreed. The new plugin API also makes it much easier to wire into existing tooling.",
    "Curious how it holds up on longer tasks, but the early results look solid.",
];

/// List of all records with the selected one highlighted, plus the detail panel
pub fn render_list_view(repos: &[RepoRecord], selected: &RepoRecord, nav: &Navigation) -> String {
    let cards: String = repos
        .iter()
        .map(|repo| render_card(repo, repo.id == selected.id, nav))
        .collect();

    format!(
        r#"<section class="repo-list">{cards}</section>
            {detail}"#,
        detail = render_detail(selected),
    )
}

fn render_card(repo: &RepoRecord, is_selected: bool, nav: &Navigation) -> String {
    let class = if is_selected { "repo-card selected" } else { "repo-card" };
    let new_badge = if repo.is_new {
        r#" <span class="badge-new">NEW</span>"#
    } else {
        ""
    };

    let inner = format!(
        r#"<div class="rank"><span class="rank-number">{rank}</span><span class="{trend_class}">{trend}</span></div>
                <div class="repo-body">
                    <div><span class="repo-title">{owner} / {name}</span>{new_badge}</div>
                    <p class="repo-desc">{description}</p>
                    <div class="repo-meta">
                        <span><span class="lang-dot" style="background-color: {color}"></span>{language}</span>
                        <span>&#9733; {stars}</span>
                        <span class="hn">HN {hn}</span>
                        <span>Updated {updated}</span>
                    </div>
                </div>"#,
        rank = rank_label(repo.rank),
        trend_class = trend_class(repo.trend),
        trend = trend_marker(repo),
        owner = escape(&repo.owner),
        name = escape(&repo.name),
        description = escape(&repo.description),
        color = escape(&repo.language_color),
        language = escape(&repo.language),
        stars = escape(&compact_stars(&repo.stars)),
        hn = repo.hn_comments,
        updated = escape(&repo.updated),
    );

    nav.record_control(&repo.id, class, &inner)
}

/// Detail panel for one record
pub fn render_detail(repo: &RepoRecord) -> String {
    let comments: String = HN_COMMENTS
        .iter()
        .enumerate()
        .map(|(i, text)| {
            format!(
                r#"<div class="comment"><span class="comment-user">user_{i}</span><p>{text}</p></div>"#,
                text = escape(text),
            )
        })
        .collect();

    format!(
        r#"<aside class="detail">
                <div class="detail-head">
                    <span class="muted">Rank #{rank}</span>
                    <h2>{name}</h2>
                    <div><span class="chip">{language}</span> <span class="chip">{category}</span></div>
                    <a class="button-primary" href="{url}" target="_blank" rel="noopener">View Repository</a>
                </div>
                <div class="detail-body">
                    <div class="card">
                        <h4>Why it's trending</h4>
                        <p>{name} is seeing a surge in activity after the v5.0 release added plugin support. Discussion on Hacker News centers on its memory footprint and new integrations.</p>
                    </div>
                    <div class="card">
                        <h4>Star Growth <span class="trend trend-up">+1.2k / 24h</span></h4>
                        {sparkline}
                    </div>
                    <div class="card">
                        <h4>HN Top Comments</h4>
                        {comments}
                    </div>
                    <p class="muted">Maintained by Significant-Gravitas</p>
                </div>
            </aside>"#,
        rank = repo.rank,
        name = escape(&repo.name),
        language = escape(&repo.language),
        category = escape(&repo.category),
        url = escape(&repo.url()),
        sparkline = sparkline(&STAR_GROWTH, 300.0, 96.0),
    )
}

/// Inline SVG polyline scaled into `width` x `height`
fn sparkline(data: &[u32], width: f64, height: f64) -> String {
    let max = data.iter().copied().max().unwrap_or(0).max(1) as f64;
    let step = if data.len() > 1 {
        width / (data.len() - 1) as f64
    } else {
        0.0
    };

    let points: Vec<String> = data
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let x = i as f64 * step;
            let y = height - (*v as f64 / max) * height;
            format!("{:.1},{:.1}", x, y)
        })
        .collect();

    format!(
        r##"<svg class="sparkline" viewBox="0 0 {width} {height}" preserveAspectRatio="none"><polyline fill="none" stroke="#00E5FF" stroke-width="2" points="{points}"/></svg>"##,
        points = points.join(" "),
    )
}
