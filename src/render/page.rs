//! Page shell: document head, sidebar navigation, decorative header
//!
//! The shell wraps whichever view is active. Navigation either posts
//! selection events back to the server or, for exported snapshots, links to
//! sibling files.

use super::format::escape;
use crate::selection::View;

/// How navigation controls are wired
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// Forms that post to `/select/view` and `/select/record`
    Server,
    /// Plain links to pre-rendered files; record selection is disabled
    Static(StaticLinks),
}

/// File names of the exported views
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticLinks {
    pub list: String,
    pub treemap: String,
    pub deep_dive: String,
}

impl StaticLinks {
    pub fn href(&self, view: View) -> &str {
        match view {
            View::List => &self.list,
            View::Treemap => &self.treemap,
            View::DeepDive => &self.deep_dive,
        }
    }
}

impl Navigation {
    /// A control that switches to `view`
    pub(crate) fn view_control(&self, view: View, class: &str, inner: &str) -> String {
        match self {
            Navigation::Server => format!(
                r#"<form method="post" action="/select/view"><input type="hidden" name="view" value="{view}"><button type="submit" class="{class}">{inner}</button></form>"#,
                view = view.as_str(),
            ),
            Navigation::Static(links) => format!(
                r#"<a href="{href}" class="{class}">{inner}</a>"#,
                href = escape(links.href(view)),
            ),
        }
    }

    /// Wrap `inner` so that activating it selects record `id`
    pub(crate) fn record_control(&self, id: &str, class: &str, inner: &str) -> String {
        match self {
            Navigation::Server => format!(
                r#"<form method="post" action="/select/record"><input type="hidden" name="id" value="{id}"><button type="submit" class="{class}">{inner}</button></form>"#,
                id = escape(id),
            ),
            Navigation::Static(_) => format!(r#"<div class="{class}">{inner}</div>"#),
        }
    }
}

/// Sidebar entries: (section, label, target view)
///
/// Several entries share a target; their category filters are placeholders.
const NAV_ITEMS: [(&str, &str, View); 8] = [
    ("Feeds", "All Trending", View::List),
    ("Feeds", "LLM & AI", View::List),
    ("Feeds", "Web Dev", View::List),
    ("Feeds", "Mobile", View::List),
    ("Feeds", "Data Science", View::Treemap),
    ("Insights", "Viral on HN", View::List),
    ("Insights", "Rising Stars", View::List),
    ("Insights", "Deep Dive: OmniParse", View::DeepDive),
];

/// Wrap a rendered view in the full document
pub fn render_document(title: &str, active: View, nav: &Navigation, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{css}</style>
</head>
<body>
    <div class="app">
        {sidebar}
        <main class="main">
            {header}
            <div class="content">
                {body}
            </div>
        </main>
    </div>
</body>
</html>"#,
        title = escape(title),
        css = inline_css(),
        sidebar = render_sidebar(active, nav),
        header = render_header(),
        body = body,
    )
}

/// Sidebar with logo, navigation sections and the (static) user card
pub fn render_sidebar(active: View, nav: &Navigation) -> String {
    let mut sections = String::new();
    let mut current_section = "";

    for (i, (section, label, target)) in NAV_ITEMS.iter().enumerate() {
        if *section != current_section {
            if i > 0 {
                sections.push_str("</div>");
            }
            sections.push_str(&format!(
                r#"<div class="nav-section"><p class="nav-heading">{}</p>"#,
                escape(section)
            ));
            current_section = *section;
        }

        // Only the first entry for a view is highlighted
        let is_first_for_view = NAV_ITEMS[..i].iter().all(|(_, _, t)| t != target);
        let class = if *target == active && is_first_for_view {
            "nav-item active"
        } else {
            "nav-item"
        };
        sections.push_str(&nav.view_control(*target, class, &escape(label)));
    }
    sections.push_str("</div>");

    format!(
        r#"<aside class="sidebar">
            <div class="brand"><span class="logo">S</span><h1>Synapse</h1></div>
            <nav class="nav">{sections}</nav>
            <div class="user-card">
                <span class="avatar"></span>
                <div><span class="user-name">Alex Dev</span><span class="muted">Pro Plan</span></div>
            </div>
        </aside>"#
    )
}

/// Header with the (unwired) search box and notification bell
pub fn render_header() -> String {
    r#"<header class="header">
            <div class="search">
                <input type="text" placeholder="Search repositories, discussions..." disabled>
                <span class="kbd">&#8984;K</span>
            </div>
            <button class="bell" type="button" aria-label="Notifications"><span class="live-dot"></span></button>
        </header>"#
        .to_string()
}

fn inline_css() -> &'static str {
    r#"
* { box-sizing: border-box; margin: 0; padding: 0; }
body { font-family: ui-sans-serif, system-ui, sans-serif; background: #0D1117; color: #c9d1d9; }
button { font: inherit; color: inherit; background: none; border: 0; cursor: pointer; text-align: left; }
form { display: contents; }
.app { display: flex; height: 100vh; overflow: hidden; }
.sidebar { width: 16rem; display: flex; flex-direction: column; background: #161B22; border-right: 1px solid #30363d; }
.brand { height: 4rem; display: flex; align-items: center; gap: .75rem; padding: 0 1.5rem; border-bottom: 1px solid #30363d; }
.brand h1 { font-size: 1.25rem; color: #fff; }
.logo { width: 2rem; height: 2rem; border-radius: .5rem; background: linear-gradient(135deg, #00E5FF, #2563eb); color: #000; display: flex; align-items: center; justify-content: center; font-weight: 700; }
.nav { flex: 1; overflow-y: auto; padding: 1.5rem 1rem; display: flex; flex-direction: column; gap: 1.5rem; }
.nav-heading { font-size: .75rem; font-weight: 700; text-transform: uppercase; letter-spacing: .05em; color: #8b949e; margin-bottom: .75rem; padding: 0 .5rem; }
.nav-item { display: block; width: 100%; padding: .6rem .75rem; border-radius: .5rem; border-left: 2px solid transparent; color: #8b949e; text-decoration: none; font-size: .875rem; }
.nav-item:hover { color: #fff; background: rgba(48, 54, 61, .3); }
.nav-item.active { color: #fff; background: rgba(0, 229, 255, .1); border-left-color: #00E5FF; }
.user-card { padding: 1rem; border-top: 1px solid #30363d; display: flex; gap: .75rem; align-items: center; }
.user-card div { display: flex; flex-direction: column; }
.user-name { color: #fff; font-size: .875rem; }
.avatar { width: 2rem; height: 2rem; border-radius: 50%; background: #30363d; }
.muted { color: #8b949e; font-size: .75rem; }
.main { flex: 1; display: flex; flex-direction: column; overflow: hidden; }
.header { height: 4rem; display: flex; align-items: center; justify-content: space-between; padding: 0 2rem; border-bottom: 1px solid #30363d; }
.search { position: relative; width: 100%; max-width: 36rem; }
.search input { width: 100%; background: #161B22; border: 1px solid #30363d; border-radius: .5rem; padding: .5rem 1rem; color: #fff; }
.kbd { position: absolute; right: .75rem; top: .45rem; font-size: .625rem; color: #8b949e; border: 1px solid #30363d; padding: .1rem .3rem; border-radius: .25rem; }
.bell { width: 2rem; height: 2rem; position: relative; }
.live-dot { position: absolute; top: .5rem; right: .5rem; width: .5rem; height: .5rem; border-radius: 50%; background: #00E5FF; }
.content { flex: 1; display: flex; overflow: hidden; }
.repo-list { flex: 1; overflow-y: auto; padding: 2rem; display: flex; flex-direction: column; gap: 1rem; }
.repo-card { display: flex; gap: 1rem; align-items: center; width: 100%; padding: 1rem; border-radius: .75rem; border: 1px solid #30363d; background: rgba(22, 27, 34, .4); }
.repo-card.selected { border-color: rgba(0, 229, 255, .3); background: rgba(22, 27, 34, .8); }
.rank { min-width: 3rem; display: flex; flex-direction: column; align-items: center; gap: .25rem; }
.rank-number { font: 700 1.5rem ui-monospace, monospace; color: #8b949e; }
.repo-card.selected .rank-number { color: #fff; }
.trend { font-size: .625rem; font-weight: 700; padding: .1rem .4rem; border-radius: 999px; }
.trend-up { color: #4ade80; background: rgba(34, 197, 94, .1); }
.trend-down { color: #f87171; background: rgba(239, 68, 68, .1); }
.trend-neutral { color: #8b949e; background: #30363d; }
.repo-body { flex: 1; min-width: 0; display: flex; flex-direction: column; gap: .4rem; }
.repo-title { font: 700 1.125rem ui-monospace, monospace; color: #fff; }
.repo-card.selected .repo-title { color: #00E5FF; }
.badge-new { font-size: .625rem; font-weight: 700; color: #fbbf24; border: 1px solid rgba(251, 191, 36, .3); padding: .1rem .5rem; border-radius: .25rem; }
.repo-desc { font-size: .875rem; color: #8b949e; }
.repo-meta { display: flex; gap: 1rem; font-size: .75rem; color: #8b949e; align-items: center; }
.lang-dot { display: inline-block; width: .6rem; height: .6rem; border-radius: 50%; margin-right: .3rem; }
.hn { color: #ff6600; }
.detail { width: 25rem; overflow-y: auto; border-left: 1px solid #30363d; background: #161B22; }
.detail-head { padding: 1.5rem; border-bottom: 1px solid #30363d; display: flex; flex-direction: column; gap: .5rem; }
.detail-head h2 { font: 700 1.5rem ui-monospace, monospace; color: #fff; }
.chip { font-size: .75rem; padding: .1rem .5rem; border-radius: .25rem; background: #30363d; }
.button-primary { display: block; text-align: center; padding: .6rem; border-radius: .5rem; background: #00E5FF; color: #000; font-weight: 700; text-decoration: none; }
.detail-body { padding: 1.5rem; display: flex; flex-direction: column; gap: 1.5rem; }
.card { background: rgba(13, 17, 23, .6); border: 1px solid #30363d; border-radius: .75rem; padding: 1rem; }
.card h4 { font-size: .875rem; text-transform: uppercase; color: #fff; margin-bottom: .75rem; }
.card p, .card li { font-size: .8rem; color: #8b949e; line-height: 1.5; }
.sparkline { width: 100%; height: 6rem; }
.treemap-view { flex: 1; display: flex; flex-direction: column; background: #0f2123; }
.treemap-head { padding: 1rem 1.5rem; border-bottom: 1px solid #21464a; display: flex; justify-content: space-between; align-items: flex-end; }
.treemap-head h1 { font-size: 1.5rem; color: #fff; }
.filters { display: flex; gap: .5rem; }
.filter { font-size: .75rem; padding: .3rem .7rem; border-radius: .3rem; border: 1px solid #2d5d63; color: #8ec6cc; }
.filter.active { color: #fff; background: #102123; }
.treemap-canvas { flex: 1; padding: 1.5rem; }
.treemap { position: relative; width: 100%; height: 100%; min-height: 600px; }
.tile { position: absolute; overflow: hidden; border: 1px solid #162a2d; border-radius: .25rem; padding: .75rem; display: flex; flex-direction: column; justify-content: space-between; }
.tile-name { font-weight: 700; font-size: .875rem; color: #fff; white-space: nowrap; overflow: hidden; text-overflow: ellipsis; }
.tile.hot .tile-name { font-size: 1.125rem; }
.hot-badge { font-size: .625rem; background: rgba(255, 255, 255, .2); color: #fff; padding: 0 .25rem; border-radius: .2rem; }
.tile-stars { font-size: .75rem; color: rgba(255, 255, 255, .7); }
.category-label { position: absolute; margin: 2px 0 0 4px; font-size: .8rem; font-weight: 700; text-transform: uppercase; letter-spacing: .05em; color: #fff; display: flex; gap: .5rem; align-items: center; pointer-events: none; }
.category-dot { width: .5rem; height: .5rem; border-radius: 50%; }
.deep-dive { flex: 1; overflow-y: auto; background: #0f1618; color: #cbd5e1; }
.deep-dive-inner { max-width: 80rem; margin: 0 auto; padding: 2rem 1.5rem; }
.breadcrumbs { font-size: .875rem; color: #94a3b8; margin-bottom: 2rem; }
.dd-grid { display: grid; grid-template-columns: 2fr 1fr; gap: 2rem; }
.dd-main, .dd-side { display: flex; flex-direction: column; gap: 2rem; }
.hero { background: #162224; border: 1px solid rgba(6, 224, 249, .1); border-radius: .75rem; padding: 2rem; }
.hero h1 { font-size: 3rem; font-weight: 900; color: #fff; }
.hero-meta { display: flex; gap: 1.5rem; font-size: .875rem; color: #94a3b8; border-top: 1px solid rgba(255, 255, 255, .05); padding-top: 1rem; margin-top: 1rem; }
.panel { border: 1px solid #21464a; background: #131d1f; border-radius: .75rem; padding: 1.5rem; }
.panel h3 { color: #fff; margin-bottom: 1rem; }
.two-col { display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; margin-top: 1.5rem; }
.matrix { display: grid; grid-template-columns: repeat(3, 1fr); border: 1px solid #21464a; border-radius: .5rem; overflow: hidden; }
.matrix div { padding: 1rem; border-bottom: 1px solid #21464a; text-align: center; font-size: .875rem; }
.matrix .matrix-label { text-align: left; color: #94a3b8; background: #1a2628; }
.matrix .matrix-head { font-weight: 700; color: #fff; }
.comment { background: #1a2628; padding: 1rem; border-radius: .5rem; border: 1px solid rgba(255, 255, 255, .05); margin-bottom: 1rem; }
.comment p { font-style: italic; font-size: .875rem; margin-bottom: .5rem; }
.comment-user { font-weight: 700; color: #06e0f9; font-size: .75rem; }
.idea { border: 1px solid #06e0f9; border-radius: .75rem; padding: 1.5rem; background: #0f1618; }
.idea h4 { color: #fff; margin-bottom: .5rem; }
.tag { font-size: .75rem; padding: .1rem .5rem; border-radius: .25rem; background: rgba(6, 224, 249, .1); color: #06e0f9; margin-right: .5rem; }
"#
}
