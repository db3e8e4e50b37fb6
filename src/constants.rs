//! Application constants and configuration

pub const DEFAULT_SERVER_URL: &str = "http://localhost:5000";
pub const API_BASE_PATH: &str = "/api/prompts";
pub const HISTORY_PAGE_SIZE: u32 = 20;
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const REPO_OWNER: &str = "promptstudio-app";
pub const REPO_NAME: &str = "prompt-studio";
