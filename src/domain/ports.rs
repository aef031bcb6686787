use crate::domain::model::{CvDocuments, Industries, ProjectsDocument};
use crate::utils::error::Result;
use crate::utils::validation::validate_bind_address;
use async_trait::async_trait;
use std::net::SocketAddr;
use std::path::PathBuf;

/// 內容來源。每次呼叫都重新讀取，讀取失敗在此邊界降級為空值。
#[async_trait]
pub trait ContentStore: Send + Sync {
    async fn list_cv(&self) -> CvDocuments;
    async fn list_industries(&self) -> Industries;
    async fn list_projects(&self) -> ProjectsDocument;
}

pub trait ConfigProvider: Send + Sync {
    fn host(&self) -> &str;
    fn port(&self) -> u16;
    fn data_dir(&self) -> &str;
    fn static_dir(&self) -> &str;
    fn template_dir(&self) -> &str;

    /// 監聽位址只在這裡解析一次，失敗即為設定錯誤
    fn bind_address(&self) -> Result<SocketAddr> {
        validate_bind_address("host", self.host(), self.port())
    }

    fn cv_dir(&self) -> PathBuf {
        PathBuf::from(self.data_dir()).join("cv")
    }

    fn industries_dir(&self) -> PathBuf {
        PathBuf::from(self.data_dir()).join("industries")
    }

    fn projects_file(&self) -> PathBuf {
        PathBuf::from(self.data_dir()).join("projects.yaml")
    }
}
