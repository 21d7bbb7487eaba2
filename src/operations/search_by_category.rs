use crate::models::expense::Expense;

pub fn search_expenses_by_category<'a>(
    category: &str,
    expenses: &'a [Expense],
) -> Vec<&'a Expense> {
    expenses
        .iter()
        .filter(|expense| expense.category.eq_ignore_ascii_case(category))
        .collect()
}
