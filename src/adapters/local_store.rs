use crate::core::markdown::render_html;
use crate::core::{ConfigProvider, ContentStore, CvDocuments, Industries, ProjectsDocument};
use crate::utils::error::{PortfolioError, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

const CV_SUFFIX: &str = ".md";
const INDUSTRY_SUFFIX: &str = ".yaml";

/// 內容檔案的位置，於建構時注入
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentPaths {
    pub cv_dir: PathBuf,
    pub industries_dir: PathBuf,
    pub projects_file: PathBuf,
}

impl ContentPaths {
    /// `<data>/cv`, `<data>/industries`, `<data>/projects.yaml`
    pub fn under<P: AsRef<Path>>(data_dir: P) -> Self {
        let data_dir = data_dir.as_ref();
        Self {
            cv_dir: data_dir.join("cv"),
            industries_dir: data_dir.join("industries"),
            projects_file: data_dir.join("projects.yaml"),
        }
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Self {
        Self {
            cv_dir: config.cv_dir(),
            industries_dir: config.industries_dir(),
            projects_file: config.projects_file(),
        }
    }
}

/// Reads portfolio content straight from disk on every call.
#[derive(Debug, Clone)]
pub struct LocalContentStore {
    paths: ContentPaths,
}

impl LocalContentStore {
    pub fn new(paths: ContentPaths) -> Self {
        Self { paths }
    }
}

#[async_trait]
impl ContentStore for LocalContentStore {
    async fn list_cv(&self) -> CvDocuments {
        let files = match list_files_with_suffix(&self.paths.cv_dir, CV_SUFFIX).await {
            Ok(files) => files,
            Err(e) => {
                tracing::warn!(error = %e, "CV directory unavailable, serving no documents");
                return CvDocuments::new();
            }
        };

        let mut documents = CvDocuments::new();
        for (name, path) in files {
            match read_text(&path).await {
                Ok(content) => {
                    documents.insert(name, render_html(&content));
                }
                Err(e) => tracing::warn!(error = %e, "Skipping unreadable CV document"),
            }
        }

        tracing::debug!("Loaded {} CV documents", documents.len());
        documents
    }

    async fn list_industries(&self) -> Industries {
        let files = match list_files_with_suffix(&self.paths.industries_dir, INDUSTRY_SUFFIX).await
        {
            Ok(files) => files,
            Err(e) => {
                tracing::warn!(error = %e, "Industries directory unavailable, serving none");
                return Industries::new();
            }
        };

        let mut industries = Industries::new();
        for (name, path) in files {
            // 移除檔名中所有的 `.yaml`，不只結尾
            let industry_id = name.replace(INDUSTRY_SUFFIX, "");

            // 單一檔案錯誤只影響該產業
            let document = load_yaml::<serde_json::Value>(&path)
                .await
                .unwrap_or_else(|e| {
                    tracing::warn!(error = %e, industry = %industry_id, "Using empty industry document");
                    serde_json::Value::Object(serde_json::Map::new())
                });
            industries.insert(industry_id, document);
        }

        tracing::debug!("Loaded {} industries", industries.len());
        industries
    }

    async fn list_projects(&self) -> ProjectsDocument {
        load_yaml::<ProjectsDocument>(&self.paths.projects_file)
            .await
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Using empty projects document");
                ProjectsDocument::default()
            })
    }
}

async fn read_text(path: &Path) -> Result<String> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| PortfolioError::SourceReadError {
            path: path.display().to_string(),
            source,
        })
}

/// 空白檔案視為預設值
async fn load_yaml<T: DeserializeOwned + Default>(path: &Path) -> Result<T> {
    let content = read_text(path).await?;
    if content.trim().is_empty() {
        return Ok(T::default());
    }

    serde_yaml::from_str(&content).map_err(|source| PortfolioError::SourceParseError {
        path: path.display().to_string(),
        source,
    })
}

/// Regular files in `dir` whose name ends with `suffix`, sorted by name.
async fn list_files_with_suffix(dir: &Path, suffix: &str) -> Result<Vec<(String, PathBuf)>> {
    let read_error = |source: std::io::Error| PortfolioError::SourceReadError {
        path: dir.display().to_string(),
        source,
    };

    let mut entries = tokio::fs::read_dir(dir).await.map_err(read_error)?;
    let mut files = Vec::new();

    while let Some(entry) = entries.next_entry().await.map_err(read_error)? {
        let Ok(name) = entry.file_name().into_string() else {
            continue;
        };
        if !name.ends_with(suffix) {
            continue;
        }
        match entry.file_type().await {
            Ok(file_type) if file_type.is_dir() => continue,
            _ => files.push((name, entry.path())),
        }
    }

    files.sort();
    Ok(files)
}
