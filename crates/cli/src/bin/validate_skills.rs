//! CI validator: checks every skill under `skills/` and the plugin registry.
//! Exit code 0 when there are no errors (warnings allowed), 1 otherwise.

use clap::Parser;
use std::path::PathBuf;

use stitch_kit::config::{self, RepoLayout};
use stitch_kit::validate;

#[derive(Parser)]
#[command(name = "validate-skills")]
#[command(about = "Validate stitch-kit skills and marketplace.json", long_about = None)]
struct Cli {
    /// Repository root (default: STITCH_REPO_ROOT or the current directory)
    #[arg(long, value_name = "DIR")]
    root: Option<PathBuf>,
}

const RULE: &str = "========================================";

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match run(cli.root) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            log::error!("validation failed: {:#}", e);
            std::process::exit(1);
        }
    }
}

fn run(root: Option<PathBuf>) -> anyhow::Result<i32> {
    let root = config::resolve_repo_root(root)?;
    let layout = RepoLayout::from_root(root);

    println!("stitch-kit skill validator");
    println!("{}", RULE);
    println!(
        "\nChecking {} and {}...\n",
        config::display_relative(&layout, &layout.skills_dir),
        config::display_relative(&layout, &layout.registry_path)
    );

    let report = validate::validate(&layout);
    for diagnostic in report.diagnostics() {
        println!("  {}", diagnostic);
    }

    println!("\n{}", RULE);
    println!(
        "\nChecked {} skill director{} and {} registry path(s).",
        report.skills_checked(),
        if report.skills_checked() == 1 { "y" } else { "ies" },
        report.registry_refs_checked()
    );
    println!("{}", report.summary());
    Ok(report.outcome().exit_code())
}
