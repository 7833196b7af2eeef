use crate::output::{print_json, print_table};
use maturity_core::maturity;

pub fn run(level: Option<u8>, json: bool) -> anyhow::Result<()> {
    match level {
        Some(n) => show_one(n, json),
        None => show_all(json),
    }
}

fn show_all(json: bool) -> anyhow::Result<()> {
    if json {
        return print_json(&maturity::LEVELS);
    }

    let rows = maturity::LEVELS
        .iter()
        .map(|ml| {
            vec![
                ml.level.to_string(),
                ml.name.to_string(),
                ml.estimated_time_to_next.to_string(),
                ml.required_investment.to_string(),
            ]
        })
        .collect();
    print_table(&["LEVEL", "NAME", "TIME TO NEXT", "INVESTMENT"], rows);
    Ok(())
}

fn show_one(n: u8, json: bool) -> anyhow::Result<()> {
    let ml = maturity::level(n).ok_or(maturity_core::AssessmentError::UnknownLevel(n))?;

    if json {
        return print_json(ml);
    }

    println!("Level {}: {}", ml.level, ml.name);
    println!("{}", ml.description);
    println!();
    println!("Characteristics:");
    for c in ml.characteristics {
        println!("  - {c}");
    }
    println!("Capabilities:");
    for c in ml.capabilities {
        println!("  - {c}");
    }
    println!("Typical challenges:");
    for c in ml.typical_challenges {
        println!("  - {c}");
    }
    println!("Next steps:");
    for s in ml.next_steps {
        println!("  - {s}");
    }
    println!();
    println!("Estimated time to next level: {}", ml.estimated_time_to_next);
    println!("Required investment: {}", ml.required_investment);
    Ok(())
}
