//! # Ingredient Line Parsing Example
//!
//! This example demonstrates parsing everyday recipe ingredient lines into
//! structured quantities: plain units, fractions, package units with
//! container sizes, and lines with no recognizable unit at all.

use ingredient_quantity::{ParsedQuantity, QuantityParser};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("🥕 Ingredient Quantity Parser Example");
    println!("=====================================\n");

    let parser = QuantityParser::new();

    // Example 1: everyday ingredient lines
    println!("📖 Example 1: Everyday Ingredient Lines");
    println!("---------------------------------------");

    let lines = [
        "2 cups flour",
        "1 1/2 cups milk",
        "1/2 cup sugar",
        "3 large eggs",
        "2 tbsp. butter",
        "1 pinch saffron",
        "tbsp. vanilla extract",
    ];

    for line in lines {
        let parsed = parser.parse(line)?;
        println!("  {:<28} → {}", line, describe(&parsed));
    }

    println!();

    // Example 2: package units keep their container size in the name
    println!("📦 Example 2: Package Units and Container Sizes");
    println!("-----------------------------------------------");

    let lines = [
        "2 (14.5 oz) cans diced tomatoes",
        "1 (8 oz) package cream cheese",
        "3 slices sourdough bread",
    ];

    for line in lines {
        let parsed = parser.parse(line)?;
        println!("  {:<33} → {}", line, describe(&parsed));
    }

    println!();

    // Example 3: structured output
    println!("🧾 Example 3: JSON Output");
    println!("-------------------------");

    for line in ["1 1/2 cups milk", "2 (14.5 oz) cans diced tomatoes"] {
        let parsed = parser.parse(line)?;
        println!("  {}", serde_json::to_string(&parsed)?);
    }

    Ok(())
}

fn describe(parsed: &ParsedQuantity) -> String {
    format!(
        "amount={} unit={:?} ingredient={:?} package={}",
        parsed.amount,
        parsed.unit_name(),
        parsed.ingredient,
        parsed.is_package_unit
    )
}
