use crate::output::{print_json, print_table};
use maturity_core::catalog;
use maturity_core::types::Category;
use std::str::FromStr;

pub fn run(category: Option<&str>, json: bool) -> anyhow::Result<()> {
    let filter = category.map(Category::from_str).transpose()?;

    let dimensions: Vec<_> = catalog::catalog()
        .iter()
        .filter(|d| filter.is_none_or(|c| d.category == c))
        .collect();

    if json {
        return print_json(&dimensions);
    }

    let rows = dimensions
        .iter()
        .map(|d| {
            vec![
                d.id.to_string(),
                d.name.to_string(),
                d.category.to_string(),
                format!("{:.1}", d.weight),
                d.questions.len().to_string(),
            ]
        })
        .collect();
    print_table(&["ID", "NAME", "CATEGORY", "WEIGHT", "QUESTIONS"], rows);
    Ok(())
}
