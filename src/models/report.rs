use rust_decimal::Decimal;
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone)]
pub struct Report {
    pub category_totals: HashMap<String, Decimal>,
    pub total_spent: Decimal,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Expense Report:")?;
        for (category, total) in &self.category_totals {
            writeln!(f, "Category: {}, Total: ${:.2}", category, total)?;
        }
        writeln!(f, "Total Spent: ${:.2}", self.total_spent)
    }
}

#[derive(Debug, Clone)]
pub struct SixMonthPlan {
    pub monthly_budgets: HashMap<String, Decimal>,
    pub total_planned: Decimal,
}

impl fmt::Display for SixMonthPlan {
    // No trailing newline after the total line, unlike Report.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "6-Month Budget Plan:")?;
        for (category, monthly) in &self.monthly_budgets {
            writeln!(
                f,
                "Category: {}, Monthly Budget: ${:.2}, 6-Month Budget: ${:.2}",
                category,
                monthly,
                *monthly * Decimal::from(6)
            )?;
        }
        write!(
            f,
            "Total Planned Budget for 6 Months: ${:.2}",
            self.total_planned
        )
    }
}
