//! The `mealmax init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    // Create mealmax.toml
    if std::path::Path::new("mealmax.toml").exists() {
        println!("mealmax.toml already exists, skipping.");
    } else {
        std::fs::write("mealmax.toml", SAMPLE_CONFIG)?;
        println!("Created mealmax.toml");
    }

    // Create example meal file
    std::fs::create_dir_all("meals")?;
    let example_path = std::path::Path::new("meals/example.toml");
    if example_path.exists() {
        println!("meals/example.toml already exists, skipping.");
    } else {
        std::fs::write(example_path, EXAMPLE_MEALS)?;
        println!("Created meals/example.toml");
    }

    println!("\nNext steps:");
    println!("  1. Add your own meals to meals/example.toml");
    println!("  2. Run: mealmax validate --meals meals/example.toml");
    println!("  3. Run: mealmax tournament --meals meals/example.toml");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# mealmax configuration

# Fix the seed to replay the same battles. Remove for fresh draws each run.
# seed = 42

# Leaderboard order: "wins" or "win_pct"
leaderboard_sort = "wins"
output_dir = "./mealmax-results"
"#;

const EXAMPLE_MEALS: &str = r#"[[meals]]
id = 1
meal = "Sushi"
cuisine = "Japanese"
price = 20.0
difficulty = "MED"

[[meals]]
id = 2
meal = "Pasta"
cuisine = "Italian"
price = 15.0
difficulty = "LOW"

[[meals]]
id = 3
meal = "Steak"
cuisine = "American"
price = 25.0
difficulty = "HIGH"

[[meals]]
id = 4
meal = "Pad Thai"
cuisine = "Thai"
price = 12.5
difficulty = "MED"
"#;
