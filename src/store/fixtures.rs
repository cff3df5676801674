//! Compiled-in fixture data
//!
//! Stands in for a real backend: six trending repositories, the OmniParse
//! deep dive, and the "Tech Pulse" category tree.

use super::types::{Comment, Comparison, Competitor, DeepDiveRecord, RepoRecord, SizeTreeNode, Trend};

const PYTHON_COLOR: &str = "#3572A5";

/// The trending list, in rank order
pub fn repo_data() -> Vec<RepoRecord> {
    vec![
        RepoRecord::new("autogpt", 1, "AutoGPT", "AutoGPT")
            .description(
                "An experimental open-source attempt to make GPT-4 fully autonomous. \
                 Pushing the boundaries of what AI agents can do by chaining thoughts.",
            )
            .language("Python", PYTHON_COLOR)
            .counts("142k", 450)
            .updated("2h ago")
            .new_entry()
            .trend(Trend::Up, 4)
            .category("AI Agents"),
        RepoRecord::new("llama-3", 2, "meta-llama", "Llama-3-70b")
            .description(
                "Official repository for Meta's latest large language model. \
                 Optimized for inference and fine-tuning on consumer hardware.",
            )
            .language("Python", PYTHON_COLOR)
            .counts("25k", 128)
            .updated("5h ago")
            .trend(Trend::Up, 1)
            .category("LLM"),
        RepoRecord::new("shadcn", 3, "shadcn", "shadcn/ui")
            .description(
                "Beautifully designed components built with Radix UI and Tailwind CSS. \
                 Accessible. Customizable. Open Source.",
            )
            .language("TypeScript", "#2b7489")
            .counts("54k", 89)
            .updated("1d ago")
            .trend(Trend::Neutral, 0)
            .category("Web Dev")
            .repo_path("shadcn-ui/ui"),
        RepoRecord::new("rust", 4, "rust-lang", "rust")
            .description(
                "Empowering everyone to build reliable and efficient software. \
                 A language empowering everyone to build reliable and efficient software.",
            )
            .language("Rust", "#dea584")
            .counts("92k", 312)
            .updated("4h ago")
            .new_entry()
            .trend(Trend::Up, 12)
            .category("System"),
        RepoRecord::new("bun", 5, "oven-sh", "bun")
            .description(
                "Incredibly fast JavaScript runtime, bundler, test runner, \
                 and package manager \u{2013} all in one.",
            )
            .language("Zig", "#ec915c")
            .counts("68k", 76)
            .updated("12h ago")
            .trend(Trend::Down, 2)
            .category("System"),
        RepoRecord::new("omniparse", 6, "adithya-s-k", "OmniParse")
            .description(
                "A fully localized, high-precision data ingestion system for LLMs \
                 capable of parsing complex PDFs into structured markdown.",
            )
            .language("Python", PYTHON_COLOR)
            .counts("2.4k", 210)
            .updated("4h ago")
            .new_entry()
            .trend(Trend::Up, 142)
            .category("AI Tools"),
    ]
}

/// The featured OmniParse deep dive
pub fn omniparse_data() -> DeepDiveRecord {
    DeepDiveRecord {
        title: "OmniParse".to_string(),
        subtitle: "Fully localized, high-precision data ingestion.".to_string(),
        description: "A fully localized, high-precision data ingestion system for LLMs capable \
                      of parsing complex PDFs into structured markdown."
            .to_string(),
        stars: "2.4k".to_string(),
        forks: "142".to_string(),
        tags: vec!["Python".to_string(), "OCR".to_string(), "LLM".to_string()],
        tech_analysis: "OmniParse is a completely localized data ingestion system designed to \
                        transform unstructured data into structured formats usable by Large \
                        Language Models (LLMs). Its core architecture is based on Python, \
                        utilizing advanced OCR technology and layout analysis algorithms to \
                        accurately process PDF documents containing complex tables, images, and \
                        multi-column layouts."
            .to_string(),
        capabilities: vec![
            "Supports PDF, PowerPoint, Word".to_string(),
            "Integration with LlamaIndex".to_string(),
            "Dockerized for easy deployment".to_string(),
        ],
        performance: vec![
            "0.4s average parsing time per page".to_string(),
            "Low VRAM requirement (runs on T4)".to_string(),
            "Batch processing supported".to_string(),
        ],
        why_it_matters: Comparison::new("Native", "Advanced", "Moderate", "GPL-3.0"),
        competitor: Competitor {
            name: "Standard OCR".to_string(),
            comparison: Comparison::new("Cloud/API", "Hit or Miss", "High", "Various"),
        },
        comments: vec![
            Comment::new(
                "dev_ops_ninja",
                "This solves the biggest pain point of PDF parsing - tables spanning multiple \
                 pages. I've been hacking Unstructured.io for weeks to do this.",
            ),
            Comment::new(
                "legal_eagle",
                "Impressive, but be careful with the GPL license if you're embedding this into \
                 a proprietary SaaS product.",
            ),
            Comment::new(
                "curious_cat",
                "Does this support scanned documents or just digital PDFs? The OCR dependency \
                 suggests image-based processing.",
            ),
        ],
        trending_since: "4h ago".to_string(),
        actionable_idea: "Build a specialized VS Code extension that uses OmniParse to \
                          auto-document legacy PDF specs directly into your code comments."
            .to_string(),
    }
}

/// The "Tech Pulse" category tree (root -> category -> repository)
pub fn treemap_data() -> SizeTreeNode {
    SizeTreeNode::branch(
        "Tech Pulse",
        vec![
            SizeTreeNode::branch(
                "AI & ML",
                vec![
                    SizeTreeNode::leaf("langchain", 82000.0).color("#7c3aed"),
                    SizeTreeNode::leaf("ollama", 45000.0).color("#06b6d4"),
                    SizeTreeNode::leaf("autogen", 25000.0).color("#0f766e"),
                    SizeTreeNode::leaf("llama.cpp", 48000.0).color("#134e4a"),
                    SizeTreeNode::leaf("gpt4all", 32000.0).color("#115e59"),
                ],
            ),
            SizeTreeNode::branch(
                "Frontend",
                vec![
                    SizeTreeNode::leaf("shadcn/ui", 54000.0).color("#06e0f9"),
                    SizeTreeNode::leaf("next.js", 110000.0).color("#1e293b"),
                    SizeTreeNode::leaf("htmx", 28000.0).color("#3b82f6"),
                    SizeTreeNode::leaf("astro", 35000.0).color("#6366f1"),
                    SizeTreeNode::leaf("svelte", 65000.0).color("#f97316"),
                ],
            ),
            SizeTreeNode::branch(
                "System",
                vec![
                    SizeTreeNode::leaf("bun", 68000.0).color("#f59e0b"),
                    SizeTreeNode::leaf("rust", 92000.0).color("#ea580c"),
                    SizeTreeNode::leaf("docker", 70000.0).color("#0ea5e9"),
                    SizeTreeNode::leaf("kubernetes", 105000.0).color("#3b82f6"),
                ],
            ),
        ],
    )
}
