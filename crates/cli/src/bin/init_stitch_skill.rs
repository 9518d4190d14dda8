//! Bootstrap a new stitch-kit skill from the standard template.
//!
//! `init-stitch-skill ecommerce-architect --path skills/` creates `skills/stitch-ecommerce-architect`.

use clap::Parser;
use std::path::PathBuf;

use stitch_kit::naming::NAME_EXAMPLES;
use stitch_kit::scaffold::{self, ScaffoldError, ScaffoldOptions};

#[derive(Parser)]
#[command(name = "init-stitch-skill")]
#[command(about = "Create a new stitch-kit skill directory", long_about = None)]
struct Cli {
    /// Skill name; `stitch-` is prepended when missing (e.g. ui-blog-architect)
    name: String,

    /// Directory to create the skill in
    #[arg(long, value_name = "DIR", default_value = ".")]
    path: PathBuf,

    /// Also write resources/architecture-checklist.md
    #[arg(long)]
    with_checklist: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let options = ScaffoldOptions {
        with_checklist: cli.with_checklist,
    };

    let skill = match scaffold::create(&cli.name, &cli.path, &options) {
        Ok(s) => s,
        Err(e) => {
            println!("❌ {}", e);
            if matches!(e, ScaffoldError::InvalidName(_)) {
                println!("   Examples: {}", NAME_EXAMPLES.join(", "));
            }
            std::process::exit(1);
        }
    };

    println!("✅ Created: {}/", skill.path.display());
    for file in &skill.files {
        let shown = file.strip_prefix(&skill.path).unwrap_or(file.as_path());
        println!("✅ Created {}", shown.display());
    }

    let dir = skill.path.display();
    println!("\n✅ Skill '{}' initialized.", skill.name);
    println!("\nNext steps:");
    println!("  1. Edit {}/SKILL.md — fill in description, steps, routing table", dir);
    println!("  2. Edit {}/examples/usage.md — replace placeholders with real examples", dir);
    println!("  3. Add to .claude-plugin/marketplace.json in the right plugin group");
    println!("  4. Add row to docs/skills-index.md");
    println!("  5. Add row to README.md in the right layer table");
}
