pub mod builtins;
pub mod config;
pub mod content;
pub mod engine;
pub mod error;
pub mod history;
pub mod input;
pub mod intro;
pub mod output;
pub mod page;
pub mod runtime;
pub mod scheduler;
pub mod section;
pub mod transcript;

// Re-export the main struct so users can just use `termfolio_core::TermfolioEngine`
pub use engine::{Submission, TermfolioEngine};

// Re-export the simpler types for the UI
pub use config::Config;
pub use error::TermfolioError;
pub use output::{Line, Output, Span, Tone};
pub use section::{Section, SectionAnchors};
