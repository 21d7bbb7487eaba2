use crate::models::expense::Expense;
use crate::models::report::{Report, SixMonthPlan};
use rust_decimal::Decimal;
use std::collections::HashMap;

/// In-memory ledger holding recorded expenses and planned monthly budgets.
/// Inputs are taken as-is: empty categories, empty descriptions and negative
/// or zero amounts are all recorded without complaint.
pub struct BudgetLedger {
    expenses: Vec<Expense>,
    planned_monthly_budget: HashMap<String, Decimal>,
}

impl BudgetLedger {
    pub fn new() -> Self {
        Self {
            expenses: Vec::new(),
            planned_monthly_budget: HashMap::new(),
        }
    }

    pub fn record_expense(&mut self, category: &str, description: &str, amount: Decimal) {
        self.expenses.push(Expense::new(
            category.to_string(),
            description.to_string(),
            amount,
        ));
    }

    /// Planning the same category twice keeps only the latest amount.
    pub fn plan_monthly_budget(&mut self, category: &str, amount: Decimal) {
        self.planned_monthly_budget
            .insert(category.to_string(), amount);
    }

    pub fn generate_report(&self) -> Report {
        let mut category_totals: HashMap<String, Decimal> = HashMap::new();
        let mut total_spent = Decimal::ZERO;

        for expense in &self.expenses {
            let entry = category_totals
                .entry(expense.category.clone())
                .or_insert(Decimal::ZERO);
            *entry += expense.amount;
            total_spent += expense.amount;
        }

        Report {
            category_totals,
            total_spent,
        }
    }

    pub fn generate_six_month_plan(&self) -> SixMonthPlan {
        let mut total_planned = Decimal::ZERO;
        for amount in self.planned_monthly_budget.values() {
            total_planned += *amount * Decimal::from(6);
        }

        SixMonthPlan {
            monthly_budgets: self.planned_monthly_budget.clone(),
            total_planned,
        }
    }

    /// Snapshot copy in insertion order; mutating it never touches the ledger.
    pub fn expenses(&self) -> Vec<Expense> {
        self.expenses.clone()
    }
}

impl Default for BudgetLedger {
    fn default() -> Self {
        Self::new()
    }
}
