use crate::core::slug::slugify;
use crate::domain::model::{
    CategoryProjects, CategorySummary, Project, ProjectCategory, ProjectsDocument,
};
use crate::utils::error::{PortfolioError, Result};
use serde_json::{json, Value};

pub const DEFAULT_CAPABILITIES: [&str; 4] = [
    "Strategic vision and planning",
    "Technical implementation expertise",
    "Cross-functional team leadership",
    "Innovation and creative problem-solving",
];

const DEFAULT_INDUSTRY_APPLICATIONS: [(&str, &str); 3] = [
    (
        "Financial Services",
        "Enhances regulatory compliance while enabling innovation",
    ),
    (
        "Technology Consulting",
        "Demonstrates expertise in complex system integration",
    ),
    (
        "Digital Transformation",
        "Shows ability to reimagine processes with technology",
    ),
];

pub fn default_industry_applications() -> Value {
    DEFAULT_INDUSTRY_APPLICATIONS
        .iter()
        .map(|(industry, application)| json!({ "industry": industry, "application": application }))
        .collect()
}

pub fn default_capabilities() -> Value {
    DEFAULT_CAPABILITIES.iter().map(|c| json!(c)).collect()
}

/// 分類清單，`projectCount` 取自本次讀取的內容
pub fn category_summaries(doc: &ProjectsDocument) -> Vec<CategorySummary> {
    doc.projects
        .iter()
        .map(|category| CategorySummary {
            id: slugify(&category.name),
            name: category.name.clone(),
            project_count: category.projects.len(),
        })
        .collect()
}

/// Returns the projects of the first category whose slug equals
/// `category_id`, each tagged with its positional id.
pub fn category_projects(doc: ProjectsDocument, category_id: &str) -> Result<CategoryProjects> {
    let category = doc
        .projects
        .into_iter()
        .find(|category| slugify(&category.name) == category_id)
        .ok_or_else(|| PortfolioError::CategoryNotFound {
            id: category_id.to_string(),
        })?;

    let projects = category
        .projects
        .into_iter()
        .enumerate()
        .map(|(index, mut project)| {
            project.set_id(format!("{}-{}", category_id, index));
            project
        })
        .collect();

    Ok(CategoryProjects {
        category: category.name,
        projects,
    })
}

/// Resolves `{categorySlug}-{index}[-anything]` to a project.
///
/// Slugs contain `-` themselves, so the category part is the longest known
/// slug the id starts with (followed by `-`). Without such a prefix the id is
/// read as `{first}-{second}` and only the index is validated before the
/// lookup fails. The returned project keeps `project_id` verbatim as its id.
pub fn find_project(doc: ProjectsDocument, project_id: &str) -> Result<Project> {
    let parts: Vec<&str> = project_id.split('-').collect();
    if parts.len() < 2 {
        return Err(PortfolioError::InvalidProjectId {
            id: project_id.to_string(),
        });
    }

    let (category_slug, index_part) = match longest_slug_prefix(&doc.projects, project_id) {
        Some((slug, rest)) => (slug, rest.split('-').next().unwrap_or_default()),
        None => (parts[0].to_string(), parts[1]),
    };

    let index: usize = index_part
        .parse()
        .map_err(|_| PortfolioError::InvalidProjectIndex {
            id: project_id.to_string(),
        })?;

    let mut project = doc
        .projects
        .into_iter()
        .filter(|category| slugify(&category.name) == category_slug)
        .find_map(|mut category| {
            (index < category.projects.len()).then(|| category.projects.swap_remove(index))
        })
        .ok_or_else(|| PortfolioError::ProjectNotFound {
            id: project_id.to_string(),
        })?;

    project.set_id(project_id.to_string());
    Ok(with_defaults(project))
}

/// 補上缺少的 `industry_applications` 與 `capabilities`，不寫回檔案。
/// 已存在的值（包含 `null`）原樣保留。
pub fn with_defaults(mut project: Project) -> Project {
    project.insert_if_absent(Project::INDUSTRY_APPLICATIONS, default_industry_applications);
    project.insert_if_absent(Project::CAPABILITIES, default_capabilities);
    project
}

fn longest_slug_prefix<'a>(
    categories: &[ProjectCategory],
    project_id: &'a str,
) -> Option<(String, &'a str)> {
    let mut best: Option<(String, &'a str)> = None;

    for category in categories {
        let slug = slugify(&category.name);
        let Some(rest) = project_id
            .strip_prefix(slug.as_str())
            .and_then(|rest| rest.strip_prefix('-'))
        else {
            continue;
        };

        // 同長度保留第一個符合的分類
        if best.as_ref().map_or(true, |(current, _)| slug.len() > current.len()) {
            best = Some((slug, rest));
        }
    }

    best
}
