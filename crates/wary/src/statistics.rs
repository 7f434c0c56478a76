use colored::Colorize;
use std::collections::HashMap;
use wary_core::diagnostic::Diagnostic;

use crate::status::ExitStatus;

pub fn print_statistics(diagnostics: &[&Diagnostic]) -> anyhow::Result<ExitStatus> {
    if diagnostics.is_empty() {
        println!("{}", "All checks passed!".green().bold());
        return Ok(ExitStatus::Success);
    }

    // Hashmap with rule name as key, and (number of occurrences, has_fix) as
    // value.
    let mut counts: HashMap<&str, (usize, bool)> = HashMap::new();

    for diagnostic in diagnostics {
        let entry = counts.entry(diagnostic.rule_name()).or_default();
        entry.0 += 1;
        if !diagnostic.fix.is_empty() {
            entry.1 = true;
        }
    }

    let mut sorted: Vec<_> = counts.into_iter().collect();
    sorted.sort_by(|a, b| b.1.0.cmp(&a.1.0).then(a.0.cmp(b.0)));

    for (name, (count, has_fix)) in sorted {
        let star = if has_fix { "*" } else { " " };
        println!("{:>5} [{}] {}", count.to_string().bold(), star, name.bold().red());
    }

    println!("\nRules with `[*]` have an automatic fix.");

    Ok(ExitStatus::Failure)
}
