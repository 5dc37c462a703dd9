//! Built-in explainer deck.

use super::Section;

/// Section ids and durations of the built-in deck (30 seconds in total).
pub const TIMELINE_MS: [(&str, u64); 5] = [
    ("intro", 4000),
    ("problem", 7000),
    ("team", 4000),
    ("solution", 8000),
    ("impact", 7000),
];

pub fn sections() -> Vec<Section> {
    let [intro, problem, team, solution, impact] = TIMELINE_MS;

    vec![
        Section::new(intro.0, intro.1, "GitHub Repository Analysis Dashboard")
            .with_subtitle("Powered by AI • Built for Developers"),
        Section::new(problem.0, problem.1, "The Problem")
            .with_subtitle(
                "Modern software projects are complex with sprawling dependencies and hidden risks.",
            )
            .with_lines([
                "Understanding repo architecture quickly",
                "Identifying dead or useless code",
                "Predicting risks before failures",
                "Getting quick answers about repo health",
            ])
            .with_note("Existing tools are fragmented, manual, and lack intelligence."),
        Section::new(team.0, team.1, "Meet Our Team")
            .with_lines([
                "1  Developer 1  (Team Member)",
                "2  Developer 2  (Team Member)",
                "3  Developer 3  (Team Member)",
                "4  Developer 4  (Team Member)",
            ])
            .with_note("Four passionate developers united by innovation"),
        Section::new(solution.0, solution.1, "Our Solution")
            .with_subtitle("Streamlit-based AI Dashboard powered by multiple specialized AI agents")
            .with_lines([
                "Architecture Visualization: map modules and dependencies",
                "Code Analysis: scan quality, tests, and style",
                "Risk Prediction: forecast vulnerabilities and debt",
                "Developer Chatbot: explain issues and suggest fixes",
            ]),
        Section::new(impact.0, impact.1, "The Impact").with_lines([
            "Time Savings: saves hours of manual analysis → instant repo health insights",
            "Risk Reduction: reduces technical debt by proactively identifying risks",
            "Empowered Decisions: empowers developers to make faster, safer decisions",
            "Quality Tracking: helps managers and auditors track repo quality trends",
        ]),
    ]
}
