//! Typed views over administrative responses.
//!
//! Each type keeps the document it was built from so callers can reach
//! fields the typed accessors do not cover.

pub mod aliases;
pub mod analyze;
pub mod definition;
pub mod diagnostics;
pub mod mappings;
pub mod responses;
pub mod settings;

pub use aliases::{AliasSet, IndexAliases};
pub use analyze::{AnalyzeOptions, AnalyzeToken, AnalyzedTokens};
pub use definition::IndexDefinition;
pub use diagnostics::IndexDiagnostics;
pub use mappings::MappingSet;
pub use responses::{AckResponse, ShardReport, ShardsResponse};
pub use settings::IndexSettings;
