//! Config resolution and inspection commands

use std::path::Path;

use colored::Colorize;
use yoga_core::config::find_config_file;
use yoga_core::{PresenceProbe, PrismaYmlProbe, ProjectFacts, ResolvedConfig, TsConfigDescriptor};
use yoga_fs::NormalizedPath;

use crate::error::Result;

fn facts(dir: &Path) -> Result<ProjectFacts> {
    Ok(ProjectFacts::discover(dir, &TsConfigDescriptor)?)
}

async fn resolve(dir: &Path) -> Result<ResolvedConfig> {
    Ok(yoga_core::resolve_project(dir).await?)
}

/// Print the resolved configuration
pub async fn run_resolve(dir: &Path, json: bool) -> Result<()> {
    let resolved = resolve(dir).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&resolved)?);
        return Ok(());
    }

    println!("{}", "Resolved Configuration".bold());
    println!();
    for (field, path) in resolved.paths() {
        println!("  {:<36} {}", format!("{field}:").dimmed(), path);
    }
    println!();

    match &resolved.db_integration {
        Some(db) => {
            println!(
                "  {:<36} {} (bound as {})",
                "dbIntegration:".dimmed(),
                "enabled".green(),
                db.client_binding_name.cyan()
            );
        }
        None => println!("  {:<36} {}", "dbIntegration:".dimmed(), "disabled".dimmed()),
    }

    Ok(())
}

/// Resolve the configuration and report success
pub async fn run_check(dir: &Path) -> Result<()> {
    resolve(dir).await?;
    println!("{} configuration is valid", "ok".green().bold());
    Ok(())
}

/// Show project facts and the config file in use
pub fn run_paths(dir: &Path) -> Result<()> {
    let facts = facts(dir)?;
    let show = |path: Option<&NormalizedPath>| match path {
        Some(path) => path.to_string(),
        None => "(none)".dimmed().to_string(),
    };

    println!("{}", "Project".bold());
    println!();
    println!("  {:<16} {}", "Root:".dimmed(), facts.project_dir);
    println!("  {:<16} {}", "Working dir:".dimmed(), facts.working_dir);
    println!(
        "  {:<16} {}",
        "Build dir:".dimmed(),
        show(facts.build_output_dir.as_ref())
    );

    let source = find_config_file(&facts.project_dir);
    println!(
        "  {:<16} {}",
        "Config file:".dimmed(),
        show(source.as_ref().map(|s| &s.path))
    );
    println!(
        "  {:<16} {}",
        "prisma.yml:".dimmed(),
        show(PrismaYmlProbe.detect(&facts).as_ref())
    );

    Ok(())
}
