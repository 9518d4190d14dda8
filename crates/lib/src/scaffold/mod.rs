//! Create a new skill directory from the standard templates.
//!
//! Layout produced under `<destination>/<stitch-name>/`: `SKILL.md`, `examples/usage.md`, and
//! optionally `resources/architecture-checklist.md`. Nothing is rolled back if a write fails
//! after the directory was created.

mod templates;

pub use templates::{render_architecture_checklist, render_skill_md, render_usage_md};

use std::io;
use std::path::{Path, PathBuf};

use crate::naming::{is_valid_skill_name, normalize_skill_name, skill_title};
use crate::validate::{EXAMPLES_DIR, SKILL_FILE};

const USAGE_FILE: &str = "usage.md";
const RESOURCES_DIR: &str = "resources";
const CHECKLIST_FILE: &str = "architecture-checklist.md";

#[derive(Debug, thiserror::Error)]
pub enum ScaffoldError {
    #[error("invalid skill name: {0} (expected kebab-case starting with 'stitch-')")]
    InvalidName(String),
    #[error("skill directory already exists: {}", .0.display())]
    AlreadyExists(PathBuf),
    #[error("cannot resolve destination {}: {source}", .path.display())]
    Destination {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to create directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write {}: {source}", .path.display())]
    WriteFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Optional extras for a new skill.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScaffoldOptions {
    /// Also write `resources/architecture-checklist.md`.
    pub with_checklist: bool,
}

/// A freshly created skill directory.
#[derive(Debug, Clone)]
pub struct ScaffoldedSkill {
    /// Normalized skill name (also the directory name).
    pub name: String,
    pub title: String,
    /// Absolute path of the skill directory.
    pub path: PathBuf,
    /// Files written, in creation order.
    pub files: Vec<PathBuf>,
}

fn create_dirs(path: &Path) -> Result<(), ScaffoldError> {
    std::fs::create_dir_all(path).map_err(|source| ScaffoldError::CreateDir {
        path: path.to_path_buf(),
        source,
    })
}

fn write_file(path: PathBuf, content: &str, files: &mut Vec<PathBuf>) -> Result<(), ScaffoldError> {
    if let Err(source) = std::fs::write(&path, content) {
        return Err(ScaffoldError::WriteFile { path, source });
    }
    log::info!("wrote {}", path.display());
    files.push(path);
    Ok(())
}

/// Create `<destination>/<normalized name>` with the template documents.
///
/// Fails without touching the filesystem when the normalized name breaks the naming convention
/// or the target already exists.
pub fn create(
    proposed_name: &str,
    destination: &Path,
    options: &ScaffoldOptions,
) -> Result<ScaffoldedSkill, ScaffoldError> {
    let name = normalize_skill_name(proposed_name);
    let title = skill_title(&name);

    if !is_valid_skill_name(&name) {
        return Err(ScaffoldError::InvalidName(name));
    }

    let destination =
        std::path::absolute(destination).map_err(|source| ScaffoldError::Destination {
            path: destination.to_path_buf(),
            source,
        })?;
    let skill_dir = destination.join(&name);
    // symlink_metadata so a dangling link also counts as taken.
    if skill_dir.symlink_metadata().is_ok() {
        return Err(ScaffoldError::AlreadyExists(skill_dir));
    }

    create_dirs(&skill_dir.join(EXAMPLES_DIR))?;
    log::info!("created {}", skill_dir.display());

    let mut files = Vec::new();
    write_file(
        skill_dir.join(SKILL_FILE),
        &render_skill_md(&name, &title),
        &mut files,
    )?;
    write_file(
        skill_dir.join(EXAMPLES_DIR).join(USAGE_FILE),
        &render_usage_md(&title),
        &mut files,
    )?;
    if options.with_checklist {
        let resources = skill_dir.join(RESOURCES_DIR);
        create_dirs(&resources)?;
        write_file(
            resources.join(CHECKLIST_FILE),
            &render_architecture_checklist(&title),
            &mut files,
        )?;
    }

    Ok(ScaffoldedSkill {
        name,
        title,
        path: skill_dir,
        files,
    })
}
