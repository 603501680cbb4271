//! Report and budget status formatting

use crate::services::{BudgetStatus, Report};

/// Format the income/expense/savings report
pub fn format_report(report: &Report) -> String {
    let mut output = String::new();
    output.push_str("--- Financial Report ---\n");
    output.push_str(&format!("Total Income : {}\n", report.income));
    output.push_str(&format!("Total Expense: {}\n", report.expense));
    output.push_str(&format!("Total Savings: {}\n", report.savings));
    output
}

/// Format the warning line for a single over-budget row
pub fn format_budget_warning(status: &BudgetStatus) -> String {
    format!(
        "You have exceeded your budget for {}! Spent: {}, Limit: {}",
        status.category, status.spent, status.limit
    )
}

/// Format the result of a budget check
///
/// Only over-budget rows produce warnings; a fully in-budget check prints a
/// single confirmation line instead.
pub fn format_budget_check(statuses: &[BudgetStatus]) -> String {
    if statuses.is_empty() {
        return "No budgets set.\n".to_string();
    }

    let mut output = String::new();
    for status in statuses.iter().filter(|s| s.is_over()) {
        output.push_str(&format_budget_warning(status));
        output.push('\n');
    }

    if output.is_empty() {
        output.push_str("All spending is within budget.\n");
    }

    output
}
