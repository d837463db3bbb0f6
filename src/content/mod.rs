//! Content module - discovers, parses and queries blog posts

mod frontmatter;
mod language;
pub mod loader;
mod post;
pub mod resolver;
mod source;

pub use frontmatter::{parse_tags, FrontMatter};
pub use language::Language;
pub use loader::FsSource;
pub use post::{Post, PostParser, EXCERPT_LENGTH, NO_CONTENT, NO_EXCERPT};
pub use resolver::{ContentResolver, DEFAULT_RECENT_COUNT};
pub use source::{validate_slug, ContentSource, ContentUnit, MemorySource};
