use crate::ledger::BudgetLedger;
use rust_decimal::Decimal;

pub fn plan_budget_from_input(ledger: &mut BudgetLedger, input: &str) -> Result<(), String> {
    let parts: Vec<&str> = input.split(',').map(|s| s.trim()).collect();
    if parts.len() != 2 {
        return Err(format!(
            "Invalid number of details provided. Expected 2 details separated by commas but got {}",
            parts.len()
        ));
    }

    let amount = match parts[1].parse::<Decimal>() {
        Ok(parsed_amount) => parsed_amount,
        Err(_) => {
            return Err(format!(
                "Invalid amount format {}. Please provide a valid decimal number.",
                parts[1]
            ));
        }
    };

    ledger.plan_monthly_budget(parts[0], amount);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_plan_budget_valid_input() {
        let mut ledger = BudgetLedger::new();
        let result = plan_budget_from_input(&mut ledger, "Rent, 1200.0");

        assert!(result.is_ok());
        let plan = ledger.generate_six_month_plan();
        assert_eq!(plan.monthly_budgets["Rent"], Decimal::from_str("1200.0").unwrap());
    }

    #[test]
    fn test_plan_budget_wrong_field_count() {
        let mut ledger = BudgetLedger::new();
        let result = plan_budget_from_input(&mut ledger, "Rent");

        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Expected 2 details"));
    }

    #[test]
    fn test_plan_budget_invalid_amount() {
        let mut ledger = BudgetLedger::new();
        let result = plan_budget_from_input(&mut ledger, "Rent, a-lot");

        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Invalid amount format"));
        assert!(ledger.generate_six_month_plan().monthly_budgets.is_empty());
    }

    #[test]
    fn test_plan_budget_latest_value_wins() {
        let mut ledger = BudgetLedger::new();
        plan_budget_from_input(&mut ledger, "Rent, 1000").unwrap();
        plan_budget_from_input(&mut ledger, "Rent, 1200").unwrap();

        let plan = ledger.generate_six_month_plan();
        assert_eq!(plan.monthly_budgets["Rent"], Decimal::from_str("1200").unwrap());
        assert_eq!(plan.total_planned, Decimal::from_str("7200").unwrap());
    }
}
