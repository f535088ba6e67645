//! Pure formatting functions for UI output.
//!
//! All display logic lives here, separated from user interaction.

use console::style;

use crate::domain::VersionInfo;
use crate::warning::ReleaseWarning;
use crate::workflow::ReleasePlan;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Display a non-fatal warning on stderr.
pub fn display_warning(warning: &ReleaseWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// Display the version change of a bump.
pub fn display_version_change(info: &VersionInfo) {
    println!("\n{}", style("Version:").bold());
    println!("  From: {}", style(info.old_version).red());
    println!("  To:   {}", style(info.new_version).green());
}

/// Render a dry-run plan as printable lines.
pub fn format_plan(plan: &ReleasePlan) -> Vec<String> {
    let mut lines = vec![
        format!("Current version: {}", plan.version_info.old_version),
        format!("New version:     {}", plan.version_info.new_version),
        format!("Source branch:   {}", plan.source_branch),
        format!("Manifest:        {}", plan.manifest_path.display()),
    ];

    let targets = if plan.target_branches.is_empty() {
        "(none)".to_string()
    } else {
        plan.target_branches.join(", ")
    };
    if plan.merge {
        lines.push(format!("Target branches: {}", targets));
    } else {
        lines.push(format!("Target branches: {} (merge skipped)", targets));
    }

    lines.push(match &plan.tag {
        Some(tag) => format!("Tag:             {}", tag),
        None => "Tag:             (disabled)".to_string(),
    });
    lines.push(format!("Commit message:  {}", plan.commit_message));
    lines.push(format!(
        "Push:            {}",
        if plan.push { "yes" } else { "skipped" }
    ));

    lines.push("Steps:".to_string());
    for (i, step) in plan.steps.iter().enumerate() {
        lines.push(format!("  {:>2}. {:<28} {}", i + 1, step.name, step.action));
    }
    lines
}

/// Display the dry-run plan.
pub fn display_plan(plan: &ReleasePlan) {
    println!("\n{}", style("Dry run - nothing will be changed").bold());
    for line in format_plan(plan) {
        println!("  {}", line);
    }
}
