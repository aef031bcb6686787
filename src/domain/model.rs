use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 檔名 -> 渲染後的 HTML
pub type CvDocuments = BTreeMap<String, String>;

/// 產業 slug -> 原樣載入的 YAML 文件
pub type Industries = BTreeMap<String, serde_json::Value>;

/// `projects.yaml` 的頂層結構
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectsDocument {
    #[serde(default)]
    pub projects: Vec<ProjectCategory>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectCategory {
    #[serde(rename = "category")]
    pub name: String,
    #[serde(default)]
    pub projects: Vec<Project>,
}

/// A single portfolio entry, kept as the mapping read from YAML so every
/// descriptive field round-trips untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Project {
    pub fields: serde_json::Map<String, serde_json::Value>,
}

impl Project {
    pub const ID: &'static str = "id";
    pub const CAPABILITIES: &'static str = "capabilities";
    pub const INDUSTRY_APPLICATIONS: &'static str = "industry_applications";

    pub fn id(&self) -> Option<&str> {
        self.fields.get(Self::ID).and_then(|v| v.as_str())
    }

    pub fn set_id(&mut self, id: String) {
        self.fields
            .insert(Self::ID.to_string(), serde_json::Value::String(id));
    }

    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.fields.get(key)
    }

    /// 只在欄位完全不存在時寫入；`null` 也算存在
    pub fn insert_if_absent(&mut self, key: &str, value: impl FnOnce() -> serde_json::Value) {
        self.fields.entry(key).or_insert_with(value);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub id: String,
    pub name: String,
    #[serde(rename = "projectCount")]
    pub project_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryListing {
    pub categories: Vec<CategorySummary>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryProjects {
    pub category: String,
    pub projects: Vec<Project>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RelevanceEntry {
    pub relevant_projects: &'static [&'static str],
    pub highlight_projects: &'static [&'static str],
}
