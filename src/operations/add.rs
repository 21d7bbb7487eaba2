use crate::ledger::BudgetLedger;
use rust_decimal::Decimal;

pub fn add_expense_from_input(ledger: &mut BudgetLedger, input: &str) -> Result<(), String> {
    let (category, description, amount) = parse_expense_line(input)?;
    ledger.record_expense(&category, &description, amount);
    Ok(())
}

// Only the shape of the line is checked; the ledger itself takes anything,
// so empty fields and negative amounts go straight through.
fn parse_expense_line(input: &str) -> Result<(String, String, Decimal), String> {
    let parts: Vec<&str> = input.split(',').map(|s| s.trim()).collect();
    if parts.len() != 3 {
        return Err(format!(
            "Invalid number of details provided. Expected 3 details separated by commas but got {}",
            parts.len()
        ));
    }

    let amount = match parts[2].parse::<Decimal>() {
        Ok(parsed_amount) => parsed_amount,
        Err(_) => {
            return Err(format!(
                "Invalid amount format {}. Please provide a valid decimal number.",
                parts[2]
            ));
        }
    };

    Ok((parts[0].to_string(), parts[1].to_string(), amount))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_add_expense_valid_input() {
        let mut ledger = BudgetLedger::new();
        let result = add_expense_from_input(&mut ledger, "Food, Groceries, 50.0");

        assert!(result.is_ok());
        let expenses = ledger.expenses();
        assert_eq!(expenses.len(), 1);
        assert_eq!(expenses[0].category, "Food");
        assert_eq!(expenses[0].description, "Groceries");
        assert_eq!(expenses[0].amount, Decimal::from_str("50.0").unwrap());
    }

    #[test]
    fn test_add_expense_wrong_field_count() {
        let mut ledger = BudgetLedger::new();
        let result = add_expense_from_input(&mut ledger, "Food, Groceries");

        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Expected 3 details"));
        assert!(ledger.expenses().is_empty());
    }

    #[test]
    fn test_add_expense_invalid_amount() {
        let mut ledger = BudgetLedger::new();
        let result = add_expense_from_input(&mut ledger, "Food, Groceries, lots");

        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Invalid amount format"));
        assert!(ledger.expenses().is_empty());
    }

    #[test]
    fn test_add_expense_negative_and_empty_fields_pass_through() {
        let mut ledger = BudgetLedger::new();
        let result = add_expense_from_input(&mut ledger, ", , -25.5");

        assert!(result.is_ok());
        let expenses = ledger.expenses();
        assert_eq!(expenses[0].category, "");
        assert_eq!(expenses[0].description, "");
        assert_eq!(expenses[0].amount, Decimal::from_str("-25.5").unwrap());
    }
}
