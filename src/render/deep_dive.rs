//! Deep-dive page for the featured project

use super::format::escape;
use super::page::Navigation;
use crate::selection::View;
use crate::store::DeepDiveRecord;

/// Upvotes shown on every comment
const COMMENT_UPVOTES: u32 = 142;

/// Render the deep-dive record onto the fixed page template
pub fn render_deep_dive_view(record: &DeepDiveRecord, nav: &Navigation) -> String {
    let title = escape(&record.title);
    let tags: String = record
        .tags
        .iter()
        .map(|t| format!(r#"<span class="tag">{}</span>"#, escape(t)))
        .collect();

    format!(
        r#"<section class="deep-dive">
            <div class="deep-dive-inner">
                <div class="breadcrumbs">{trending} / <span>{title}</span></div>
                <div class="dd-grid">
                    <div class="dd-main">
                        <div class="hero">
                            <span class="badge-new">New</span> {tags}
                            <h1>{title}</h1>
                            <p>{subtitle}</p>
                            <p class="muted">{description}</p>
                            <div class="hero-meta">
                                <span>&#9733; {stars} stars</span>
                                <span>{forks} forks</span>
                                <span>Trending since {since}</span>
                            </div>
                        </div>
                        <div class="panel">
                            <h3>Technical Analysis <span class="muted">LLM Generated &#8226; gpt-4-turbo</span></h3>
                            <h4>Technical Overview</h4>
                            <p>{analysis}</p>
                            <div class="two-col">
                                <div class="card"><h4>Core Capabilities</h4><ul>{capabilities}</ul></div>
                                <div class="card"><h4>Performance</h4><ul>{performance}</ul></div>
                            </div>
                        </div>
                        <div class="panel">
                            <h3>Why it Matters</h3>
                            {matrix}
                        </div>
                    </div>
                    <div class="dd-side">
                        <div class="panel">
                            <h3>HN Intelligence</h3>
                            {comments}
                        </div>
                        <div class="idea">
                            <h4>Actionable Idea</h4>
                            <p>{idea}</p>
                            <button type="button" class="button-primary">Start Project</button>
                        </div>
                    </div>
                </div>
            </div>
        </section>"#,
        trending = nav.view_control(View::List, "muted", "Trending"),
        subtitle = escape(&record.subtitle),
        description = escape(&record.description),
        stars = escape(&record.stars),
        forks = escape(&record.forks),
        since = escape(&record.trending_since),
        analysis = escape(&record.tech_analysis),
        capabilities = list_items(&record.capabilities),
        performance = list_items(&record.performance),
        matrix = render_comparison(record),
        comments = render_comments(record),
        idea = escape(&record.actionable_idea),
    )
}

/// Three-column matrix: row label, featured project, competitor
///
/// Rows come from `Comparison::rows`, so all four fields are always present.
pub fn render_comparison(record: &DeepDiveRecord) -> String {
    let mut cells = format!(
        r#"<div class="matrix-label matrix-head">Feature</div><div class="matrix-head">{}</div><div class="matrix-head">{}</div>"#,
        escape(&record.title),
        escape(&record.competitor.name),
    );

    let ours = record.why_it_matters.rows();
    let theirs = record.competitor.comparison.rows();
    for ((label, value), (_, other)) in ours.iter().zip(theirs.iter()) {
        cells.push_str(&format!(
            r#"<div class="matrix-label">{}</div><div>{}</div><div>{}</div>"#,
            escape(label),
            escape(value),
            escape(other),
        ));
    }

    format!(r#"<div class="matrix">{cells}</div>"#)
}

fn render_comments(record: &DeepDiveRecord) -> String {
    record
        .comments
        .iter()
        .map(|c| {
            format!(
                r#"<div class="comment"><p>"{text}"</p><span class="comment-user">@{user}</span> <span class="muted">&#9650; {COMMENT_UPVOTES}</span></div>"#,
                text = escape(&c.text),
                user = escape(&c.user),
            )
        })
        .collect()
}

fn list_items(items: &[String]) -> String {
    items
        .iter()
        .map(|i| format!("<li>{}</li>", escape(i)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::FixtureStore;

    #[test]
    fn test_comparison_has_four_rows_in_order() {
        let store = FixtureStore::builtin();
        let html = render_comparison(store.deep_dive());

        assert_eq!(html.matches(r#"<div class="matrix-label">"#).count(), 4);
        let privacy = html.find("Privacy").unwrap();
        let license = html.find("License").unwrap();
        assert!(privacy < license);
        assert!(html.contains("<div>GPL-3.0</div><div>Various</div>"));
        assert!(html.contains("Standard OCR"));
    }

    #[test]
    fn test_deep_dive_sections() {
        let store = FixtureStore::builtin();
        let html = render_deep_dive_view(store.deep_dive(), &Navigation::Server);

        assert!(html.contains("<h1>OmniParse</h1>"));
        assert!(html.contains("Trending since 4h ago"));
        assert!(html.contains("<li>Integration with LlamaIndex</li>"));
        assert!(html.contains("@legal_eagle"));
        assert!(html.contains("Start Project"));
        assert_eq!(html.matches(r#"class="tag""#).count(), 3);
    }

    #[test]
    fn test_breadcrumb_links_back_to_list() {
        let store = FixtureStore::builtin();
        let html = render_deep_dive_view(store.deep_dive(), &Navigation::Server);

        assert!(html.contains(r#"value="list-view""#));
    }
}
