// File: ./src/model/mod.rs
pub mod date;
pub mod intent;
pub mod item;
pub mod matcher;
pub mod parser;
pub mod stopwords;

pub use date::extract_due_date;
pub use intent::{Intent, classify};
pub use item::{FaqEntry, Task};
pub use matcher::{DEFAULT_THRESHOLD, FaqMatch, FaqMatcher};
pub use parser::{ParsedTaskCreate, parse_add_task, parse_delete_task};
