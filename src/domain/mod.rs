//! Domain layer - markdown tree and tag configuration model

pub mod builder;
pub mod headings;
pub mod markdown;
pub mod suppression;
pub mod tags;
pub mod yaml;

pub use builder::{FragmentBuilder, ReadMeBuilder};
pub use markdown::{MarkdownDocument, NodeId, NodeKind};
pub use suppression::{StringOrSeq, Suppression, SuppressionItem};
