//! Report rendering.
//!
//! Thin formatting over a completed [`DependencyReport`]: a full markdown
//! report, a condensed health summary, and a one-line quick status. None
//! of these re-run any scanning; everything is derived from the report's
//! fields.

use std::collections::BTreeMap;

use crate::report::{DependencyReport, MissingPackage, Severity};

/// Format the full dependency report as markdown.
pub fn format_report(report: &DependencyReport, install_commands: &[String]) -> String {
    let mut lines = vec!["# Dependency Status".to_string()];

    let critical: Vec<&MissingPackage> = report
        .missing
        .iter()
        .filter(|p| p.severity == Severity::Critical)
        .collect();
    let warning: Vec<&MissingPackage> = report
        .missing
        .iter()
        .filter(|p| p.severity != Severity::Critical)
        .collect();

    if !critical.is_empty() {
        lines.push("\n## Critical (Blocks Execution)".to_string());
        for pkg in &critical {
            lines.push(format!("\n- **{}** ({})", pkg.name, pkg.ecosystem));
            lines.push(format!("  - Source: `{}`", pkg.detected_from));
            lines.push("  ```bash".to_string());
            lines.push(format!("  {}", pkg.install_command));
            lines.push("  ```".to_string());
        }
    }

    if !warning.is_empty() {
        lines.push("\n## Warning (Should Install)".to_string());
        for pkg in &warning {
            lines.push(format!("\n- **{}** ({})", pkg.name, pkg.ecosystem));
            lines.push("  ```bash".to_string());
            lines.push(format!("  {}", pkg.install_command));
            lines.push("  ```".to_string());
        }
    }

    if !install_commands.is_empty() {
        lines.push("\n## Quick Fix".to_string());
        lines.push("```bash".to_string());
        for cmd in install_commands {
            lines.push(cmd.clone());
        }
        lines.push("```".to_string());
    }

    lines.push(format!("\n## Health Score: {}/100", report.health_score));

    lines.join("\n")
}

/// Format a condensed health summary as markdown.
///
/// Focuses on actionable information: score, severity counts, and at most
/// three quick-fix commands.
pub fn format_health_summary(report: &DependencyReport, install_commands: &[String]) -> String {
    let mut lines = vec!["# Workspace Health".to_string()];
    lines.push(format!("\n**Score:** {}/100", report.health_score));

    if report.missing.is_empty() {
        lines.push("\nAll dependencies are installed.".to_string());
        return lines.join("\n");
    }

    let critical = report.critical_count();
    let warnings = report.warning_count();

    if critical > 0 {
        lines.push(format!("\n**Critical Issues:** {}", critical));
    }
    if warnings > 0 {
        lines.push(format!("\n**Warnings:** {}", warnings));
    }

    if !install_commands.is_empty() {
        lines.push("\n**Quick Fix:**".to_string());
        lines.push("```bash".to_string());
        for cmd in install_commands.iter().take(3) {
            lines.push(cmd.clone());
        }
        lines.push("```".to_string());
    }

    lines.join("\n")
}

/// One-line status summary: `Health: XX/100 | N critical, M warnings`.
pub fn quick_status(report: &DependencyReport) -> String {
    let critical = report.critical_count();
    let warnings = report.warning_count();

    if critical == 0 && warnings == 0 {
        return format!("Health: {}/100 | All dependencies OK", report.health_score);
    }

    let mut parts = Vec::new();
    if critical > 0 {
        parts.push(format!("{} critical", critical));
    }
    if warnings > 0 {
        parts.push(format!("{} warnings", warnings));
    }

    format!("Health: {}/100 | {}", report.health_score, parts.join(", "))
}

/// Group missing package names by ecosystem, in ecosystem name order.
pub fn missing_by_ecosystem(report: &DependencyReport) -> BTreeMap<String, Vec<String>> {
    let mut grouped: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for pkg in &report.missing {
        grouped
            .entry(pkg.ecosystem.clone())
            .or_default()
            .push(pkg.name.clone());
    }
    grouped
}
