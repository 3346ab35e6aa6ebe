pub mod config;
pub mod language;
pub mod text;

pub use config::Config;
pub use language::Language;
