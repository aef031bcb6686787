use crate::app::server::AppState;
use crate::core::projects::{category_projects, category_summaries, find_project};
use crate::core::relevance::relevance_for;
use crate::core::{CategoryListing, CategoryProjects, CvDocuments, Industries, Project, RelevanceEntry};
use crate::utils::error::{PortfolioError, Result};
use axum::extract::{Path, State};
use axum::response::Html;
use axum::Json;

pub async fn index(State(state): State<AppState>) -> Result<Html<String>> {
    let page = state
        .templates
        .render("index.html", &tera::Context::new())?;
    Ok(Html(page))
}

pub async fn get_cv(State(state): State<AppState>) -> Json<CvDocuments> {
    Json(state.store.list_cv().await)
}

pub async fn get_industries(State(state): State<AppState>) -> Json<Industries> {
    Json(state.store.list_industries().await)
}

pub async fn get_industry(
    State(state): State<AppState>,
    Path(industry_id): Path<String>,
) -> Result<Json<serde_json::Value>> {
    let mut industries = state.store.list_industries().await;
    industries
        .remove(&industry_id)
        .map(Json)
        .ok_or(PortfolioError::IndustryNotFound { id: industry_id })
}

pub async fn get_projects(State(state): State<AppState>) -> Json<CategoryListing> {
    let doc = state.store.list_projects().await;
    Json(CategoryListing {
        categories: category_summaries(&doc),
    })
}

pub async fn get_category_projects(
    State(state): State<AppState>,
    Path(category_id): Path<String>,
) -> Result<Json<CategoryProjects>> {
    let doc = state.store.list_projects().await;
    category_projects(doc, &category_id).map(Json)
}

pub async fn get_project(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
) -> Result<Json<Project>> {
    let doc = state.store.list_projects().await;
    find_project(doc, &project_id).map(Json)
}

pub async fn get_industry_relevance(Path(industry_id): Path<String>) -> Json<RelevanceEntry> {
    Json(relevance_for(&industry_id))
}
