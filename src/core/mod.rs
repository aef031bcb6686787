pub mod markdown;
pub mod projects;
pub mod relevance;
pub mod slug;

pub use crate::domain::model::{
    CategoryListing, CategoryProjects, CategorySummary, CvDocuments, Industries, Project,
    ProjectsDocument, RelevanceEntry,
};
pub use crate::domain::ports::{ConfigProvider, ContentStore};
pub use crate::utils::error::Result;
