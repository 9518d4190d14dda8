//! stitch-kit core library: skill frontmatter parsing, repository validation, and scaffolding
//! of new skills. Used by the `validate-skills` and `init-stitch-skill` binaries.

pub mod config;
pub mod frontmatter;
pub mod naming;
pub mod report;
pub mod scaffold;
pub mod validate;
