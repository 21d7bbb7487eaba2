use crate::ledger::BudgetLedger;
use rust_decimal::Decimal;
use std::fs::File;

#[derive(Debug)]
pub enum ImportFormat {
    CSV,
}

/// Bulk-records expenses from a `category,description,amount` file. The whole
/// file is parsed before anything is recorded, so a bad line imports nothing.
pub fn import_expenses(
    ledger: &mut BudgetLedger,
    format: ImportFormat,
    path: &str,
) -> Result<usize, String> {
    let rows = match format {
        ImportFormat::CSV => import_csv(path)?,
    };

    let count = rows.len();
    for (category, description, amount) in rows {
        ledger.record_expense(&category, &description, amount);
    }
    Ok(count)
}

fn import_csv(path: &str) -> Result<Vec<(String, String, Decimal)>, String> {
    let file = File::open(path).map_err(|e| format!("Failed to open file '{}': {}", path, e))?;

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .has_headers(false)
        .from_reader(file);

    let mut rows = Vec::new();

    for (line_index, result) in reader.records().enumerate() {
        let record =
            result.map_err(|e| format!("CSV parse error on line {}: {}", line_index + 1, e))?;

        if record.len() != 3 {
            return Err(format!(
                "Invalid number of columns on line {}: expected 3, got {}",
                line_index + 1,
                record.len()
            ));
        }

        let category = record.get(0).unwrap_or("");
        let description = record.get(1).unwrap_or("");
        let amount_str = record.get(2).unwrap_or("");

        let amount = amount_str.parse::<Decimal>().map_err(|_| {
            format!(
                "Line {}: Invalid amount format {}. Please provide a valid decimal number.",
                line_index + 1,
                amount_str
            )
        })?;

        rows.push((category.to_string(), description.to_string(), amount));
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::str::FromStr;
    use tempfile::NamedTempFile;

    fn write_temp_csv(contents: &str) -> NamedTempFile {
        let mut tmp = NamedTempFile::new().expect("Failed to create temp file");
        write!(tmp, "{}", contents).expect("Failed to write test CSV");
        tmp
    }

    #[test]
    fn test_import_csv_success() {
        let mut ledger = BudgetLedger::new();
        let csv_data = "\
Food,Groceries,50.0
Transport,Gas,40.0
";

        let tmp = write_temp_csv(csv_data);
        let result = import_expenses(&mut ledger, ImportFormat::CSV, tmp.path().to_str().unwrap());

        assert!(result.is_ok());
        assert_eq!(result.unwrap(), 2);

        let expenses = ledger.expenses();
        assert_eq!(expenses.len(), 2);
        assert_eq!(expenses[0].category, "Food");
        assert_eq!(expenses[1].description, "Gas");
        assert_eq!(expenses[1].amount, Decimal::from_str("40.0").unwrap());
    }

    #[test]
    fn test_import_csv_invalid_amount_records_nothing() {
        let mut ledger = BudgetLedger::new();
        let csv_data = "\
Food,Groceries,50.0
Transport,Gas,forty
";

        let tmp = write_temp_csv(csv_data);
        let result = import_expenses(&mut ledger, ImportFormat::CSV, tmp.path().to_str().unwrap());

        assert!(result.is_err());
        let error = result.unwrap_err();
        assert!(error.contains("Line 2"));
        assert!(error.contains("Invalid amount"));
        assert!(ledger.expenses().is_empty());
    }

    #[test]
    fn test_import_csv_wrong_column_count() {
        let mut ledger = BudgetLedger::new();
        let csv_data = "\
Food,Groceries
";

        let tmp = write_temp_csv(csv_data);
        let result = import_expenses(&mut ledger, ImportFormat::CSV, tmp.path().to_str().unwrap());

        assert!(result.is_err());
        assert!(result.unwrap_err().contains("expected 3, got 2"));
    }

    #[test]
    fn test_import_nonexistent_file() {
        let mut ledger = BudgetLedger::new();
        let result = import_expenses(&mut ledger, ImportFormat::CSV, "nonexistent.csv");

        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Failed to open file"));
    }
}
