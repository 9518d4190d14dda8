//! Directory rules: every subdirectory of `skills/` is a conformant skill.

use std::path::{Path, PathBuf};

use crate::frontmatter::{self, Frontmatter};
use crate::naming::is_valid_skill_name;
use crate::report::ValidationReport;

/// Metadata document every skill directory must contain.
pub const SKILL_FILE: &str = "SKILL.md";

/// Recommended subdirectory with worked examples.
pub const EXAMPLES_DIR: &str = "examples";

/// How far the checks for one skill directory got.
#[derive(Debug)]
pub enum SkillCheck {
    /// SKILL.md was read and its frontmatter parsed; all checks ran.
    Complete(Frontmatter),
    /// No SKILL.md in the directory.
    MissingSkillFile,
    /// SKILL.md exists but could not be read as UTF-8 text.
    Unreadable(std::io::Error),
    /// SKILL.md has no well-formed frontmatter block at the start.
    MalformedFrontmatter,
}

/// Immediate subdirectories of `dir`, sorted by name.
fn list_skill_dirs(dir: &Path) -> std::io::Result<Vec<(String, PathBuf)>> {
    let mut dirs = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_dir() {
            continue;
        }
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        dirs.push((name, path));
    }
    dirs.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(dirs)
}

/// Run the directory rules over every skill in `skills_dir`.
pub fn check_skills(skills_dir: &Path, report: &mut ValidationReport) {
    if !skills_dir.is_dir() {
        report.error(format!(
            "skills/ directory not found at {}",
            skills_dir.display()
        ));
        return;
    }

    let skill_dirs = match list_skill_dirs(skills_dir) {
        Ok(d) => d,
        Err(e) => {
            report.error(format!(
                "cannot read skills/ directory at {}: {}",
                skills_dir.display(),
                e
            ));
            return;
        }
    };

    if skill_dirs.is_empty() {
        report.warn("No skill directories found in skills/");
        return;
    }

    log::info!("checking {} skill directories", skill_dirs.len());
    for (name, path) in &skill_dirs {
        report.count_skill();
        match check_skill_dir(name, path, report) {
            SkillCheck::Complete(fm) => {
                log::debug!("[{}] checked ({} frontmatter fields)", name, fm.len());
            }
            SkillCheck::MissingSkillFile => {
                report.error(format!("[{}] missing {}", name, SKILL_FILE));
            }
            SkillCheck::Unreadable(e) => {
                report.error(format!("[{}] cannot read {}: {}", name, SKILL_FILE, e));
            }
            SkillCheck::MalformedFrontmatter => {
                report.error(format!(
                    "[{}] {} has no valid YAML frontmatter block (expected --- ... ---)",
                    name, SKILL_FILE
                ));
            }
        }
    }
}

/// Check one skill directory. Naming problems are reported here and never stop the remaining
/// checks; the returned variant says whether the SKILL.md dependent checks could run.
pub fn check_skill_dir(name: &str, dir: &Path, report: &mut ValidationReport) -> SkillCheck {
    if !is_valid_skill_name(name) {
        report.error(format!(
            "[{}] directory name must match stitch-<segment>(-<segment>)* with lowercase alphanumeric segments (got '{}')",
            name, name
        ));
    }

    let skill_md = dir.join(SKILL_FILE);
    if !skill_md.exists() {
        return SkillCheck::MissingSkillFile;
    }
    let fm = match frontmatter::parse_file(&skill_md) {
        Ok(Some(fm)) => fm,
        Ok(None) => return SkillCheck::MalformedFrontmatter,
        Err(e) => return SkillCheck::Unreadable(e),
    };

    check_required_fields(name, &fm, report);

    if !dir.join(EXAMPLES_DIR).is_dir() {
        report.warn(format!(
            "[{}] no {}/ directory — consider adding usage examples",
            name, EXAMPLES_DIR
        ));
    }

    SkillCheck::Complete(fm)
}

fn check_required_fields(dir_name: &str, fm: &Frontmatter, report: &mut ValidationReport) {
    for field in ["name", "description"] {
        if !fm.contains_key(field) {
            report.error(format!(
                "[{}] {} frontmatter missing required field: '{}'",
                dir_name, SKILL_FILE, field
            ));
        }
    }
    if let Some(declared) = fm.get("name") {
        if declared != dir_name {
            report.error(format!(
                "[{}] frontmatter 'name' ({}) does not match directory name ({})",
                dir_name, declared, dir_name
            ));
        }
    }
}
