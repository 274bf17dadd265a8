pub mod fetch;
pub mod font_size;
pub mod palette;
pub mod picker;
pub mod render;

pub use crate::domain::model::{Project, Resume};
pub use crate::domain::ports::{ConfigProvider, ResumeApi};
pub use crate::utils::error::Result;
