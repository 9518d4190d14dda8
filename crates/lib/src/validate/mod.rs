//! Skill validator: directory rules over `skills/` plus registry rules over marketplace.json.
//!
//! Both rule groups always run and write into one report; the directory rules come first so the
//! diagnostics read directory by directory, then plugin by plugin.

mod registry;
mod skills;

pub use registry::{check_registry, resolves_to_dir, PluginEntry, Registry, UNNAMED_PLUGIN};
pub use skills::{check_skill_dir, check_skills, SkillCheck, EXAMPLES_DIR, SKILL_FILE};

use crate::config::RepoLayout;
use crate::report::ValidationReport;

/// Validate every skill directory and the registry of the repository at `layout`.
pub fn validate(layout: &RepoLayout) -> ValidationReport {
    let mut report = ValidationReport::new();
    check_skills(&layout.skills_dir, &mut report);
    check_registry(layout, &mut report);
    report
}
