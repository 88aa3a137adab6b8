//! Domain logic - pure version rules independent of git operations

pub mod branch;
pub mod descriptor;
pub mod style;
pub mod tag;
pub mod version;

pub use branch::BranchKind;
pub use descriptor::{parse_descriptor, Descriptor};
pub use style::SuffixStyle;
pub use tag::TagPattern;
pub use version::{Increment, ReleaseKind, Version};
