use crate::plan::{CommandPlan, SafetyLevel};
use colored::*;
use std::fmt::Write;

/// 안전 등급별 아이콘
pub fn safety_icon(level: SafetyLevel) -> ColoredString {
    match level {
        SafetyLevel::Safe => "✓".green(),
        SafetyLevel::Warning => "⚠".yellow(),
        SafetyLevel::Dangerous => "✗".red().bold(),
    }
}

fn colored_command(command: &str, level: SafetyLevel) -> ColoredString {
    match level {
        SafetyLevel::Safe => command.green(),
        SafetyLevel::Warning => command.yellow(),
        SafetyLevel::Dangerous => command.red().bold(),
    }
}

/// 터미널 출력용 계획 문자열
///
/// 순서: reasoning → dependencies → warnings → commands.
/// 명령어는 실행하지 않고 보여주기만 합니다.
pub fn render_plan(plan: &CommandPlan) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", "### REASONING".cyan().bold());
    let _ = writeln!(out, "{}\n", plan.reasoning());

    let dependencies = plan.unique_dependencies();
    if !dependencies.is_empty() {
        let _ = writeln!(out, "{}", "Dependencies:".yellow().bold());
        for dep in dependencies {
            let _ = writeln!(out, "  - {}", dep);
        }
        out.push('\n');
    }

    if !plan.warnings().is_empty() {
        let _ = writeln!(out, "{}", "⚠ Warnings:".red().bold());
        for warning in plan.warnings() {
            let _ = writeln!(out, "  {}", warning.yellow());
        }
        out.push('\n');
    }

    let _ = writeln!(out, "{}", "### COMMANDS".green().bold());
    if plan.is_no_op() {
        let _ = writeln!(out, "  {}", "No commands needed.".dimmed());
        return out;
    }

    for (idx, step) in plan.commands().iter().enumerate() {
        let _ = writeln!(
            out,
            "{} {} {}",
            safety_icon(step.safety()),
            format!("[{}]", idx + 1).dimmed(),
            format!("# {}", step.comment()).italic()
        );
        let _ = writeln!(out, "    {}", colored_command(step.command(), step.safety()));
    }

    out
}
