pub mod handlers;
pub mod server;

pub use server::{load_templates, AppState, PortfolioServer};
