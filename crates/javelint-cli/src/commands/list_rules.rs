//! List rules command implementation.

use javelint_rules::builtin_rules;

/// Runs the list-rules command.
pub fn run() {
    println!("Available rules:\n");
    println!("{:<10} {:<40} Description", "Code", "Name");
    println!("{}", "-".repeat(100));

    for rule in builtin_rules() {
        println!(
            "{:<10} {:<40} {}",
            rule.code(),
            rule.name(),
            rule.description()
        );
    }

    println!("\nUse --rules to filter specific rules, e.g.:");
    println!("  javelint check --rules signature-declare-throws-exception");
    println!("  javelint check --rules JL001");
}
