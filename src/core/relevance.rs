use crate::domain::model::RelevanceEntry;

pub const FALLBACK_INDUSTRY: &str = "custom";

const CUSTOM_RELEVANCE: RelevanceEntry = RelevanceEntry {
    relevant_projects: &[
        "ai-technology-innovation-0",
        "strategic-vision-systems-thinking-0",
        "business-transformation-innovation-0",
        "creative-conceptual-development-0",
    ],
    highlight_projects: &[
        "strategic-vision-systems-thinking-0",
        "ai-technology-innovation-0",
    ],
};

/// Curated project ids per industry. Ids are positional (`{slug}-{index}`),
/// so they follow the order of `projects.yaml`.
pub const RELEVANCE_TABLE: [(&str, RelevanceEntry); 6] = [
    (
        "financial-services",
        RelevanceEntry {
            relevant_projects: &[
                "ai-technology-innovation-0",
                "ai-technology-innovation-1",
                "business-transformation-innovation-2",
            ],
            highlight_projects: &["ai-technology-innovation-0"],
        },
    ),
    (
        "tech-consulting",
        RelevanceEntry {
            relevant_projects: &[
                "ai-technology-innovation-1",
                "business-transformation-innovation-0",
                "business-transformation-innovation-2",
            ],
            highlight_projects: &["business-transformation-innovation-2"],
        },
    ),
    (
        "ai-implementation",
        RelevanceEntry {
            relevant_projects: &[
                "ai-technology-innovation-0",
                "ai-technology-innovation-1",
                "ai-technology-innovation-2",
            ],
            highlight_projects: &["ai-technology-innovation-1"],
        },
    ),
    (
        "digital-transformation",
        RelevanceEntry {
            relevant_projects: &[
                "strategic-vision-systems-thinking-1",
                "business-transformation-innovation-0",
                "business-transformation-innovation-1",
            ],
            highlight_projects: &["business-transformation-innovation-0"],
        },
    ),
    (
        "startup-innovation",
        RelevanceEntry {
            relevant_projects: &[
                "business-transformation-innovation-1",
                "creative-conceptual-development-0",
                "creative-conceptual-development-1",
            ],
            highlight_projects: &["creative-conceptual-development-1"],
        },
    ),
    (FALLBACK_INDUSTRY, CUSTOM_RELEVANCE),
];

/// 未知的產業一律回傳 `custom`
pub fn relevance_for(industry_id: &str) -> RelevanceEntry {
    RELEVANCE_TABLE
        .iter()
        .find(|(id, _)| *id == industry_id)
        .map(|(_, entry)| *entry)
        .unwrap_or(CUSTOM_RELEVANCE)
}
