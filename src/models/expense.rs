use rust_decimal::Decimal;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    pub category: String,
    pub description: String,
    pub amount: Decimal,
}

impl Expense {
    pub fn new(category: String, description: String, amount: Decimal) -> Self {
        Self {
            category,
            description,
            amount,
        }
    }
}

impl fmt::Display for Expense {
    // The amount keeps the scale it was recorded with, so 50.0 prints as $50.0,
    // not $50.00. Report totals are the ones forced to two decimals.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Category: {}, Description: {}, Amount: ${}",
            self.category, self.description, self.amount
        )
    }
}
