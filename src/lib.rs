pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::http::HttpResumeApi;
pub use config::Settings;
pub use core::fetch::{FetchState, ResumeLoader};
pub use core::render::{render_plain, TextStyle};
pub use domain::model::{Project, Resume};
pub use utils::error::{ResumeError, Result};
