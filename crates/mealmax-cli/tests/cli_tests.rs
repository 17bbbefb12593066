//! CLI integration tests using assert_cmd.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Runs the binary inside `dir` with no user config or seed leaking in.
fn mealmax(dir: &Path) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("mealmax").unwrap();
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env_remove("MEALMAX_SEED")
        .env_remove("RUST_LOG");
    cmd
}

const MEALS: &str = r#"
[[meals]]
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
id = 9
meal = "Cracker"
cuisine = "Thai"
price = 0.5
difficulty = "LOW"
"#;

fn write_meals(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("meals.toml");
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn help_output() {
    let dir = TempDir::new().unwrap();
    mealmax(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Two meals enter, one meal leaves"));
}

#[test]
fn version_output() {
    let dir = TempDir::new().unwrap();
    mealmax(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("mealmax"));
}

#[test]
fn init_creates_files() {
    let dir = TempDir::new().unwrap();

    mealmax(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created mealmax.toml"))
        .stdout(predicate::str::contains("Created meals/example.toml"));

    assert!(dir.path().join("mealmax.toml").exists());
    assert!(dir.path().join("meals/example.toml").exists());
}

#[test]
fn init_skips_existing() {
    let dir = TempDir::new().unwrap();

    mealmax(dir.path()).arg("init").assert().success();

    mealmax(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn init_example_is_valid() {
    let dir = TempDir::new().unwrap();
    mealmax(dir.path()).arg("init").assert().success();

    mealmax(dir.path())
        .args(["validate", "--meals", "meals/example.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("4 meals"))
        .stdout(predicate::str::contains("All meals valid"));
}

#[test]
fn validate_reports_warnings() {
    let dir = TempDir::new().unwrap();
    let path = write_meals(
        &dir,
        r#"
[[meals]]
id = 1
meal = "Sushi"
cuisine = "Japanese"
price = 20.0
difficulty = "MED"

[[meals]]
id = 1
meal = "Sashimi"
cuisine = "Japanese"
price = 22.0
difficulty = "HIGH"
"#,
    );

    mealmax(dir.path())
        .arg("validate")
        .arg("--meals")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("duplicate meal ID: 1"))
        .stdout(predicate::str::contains("1 warning(s) found"));
}

#[test]
fn validate_nonexistent_file() {
    let dir = TempDir::new().unwrap();
    mealmax(dir.path())
        .args(["validate", "--meals", "nonexistent.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn validate_unknown_difficulty() {
    let dir = TempDir::new().unwrap();
    let path = write_meals(
        &dir,
        r#"
[[meals]]
id = 1
meal = "Toast"
cuisine = "British"
price = 2.0
difficulty = "TRIVIAL"
"#,
    );

    mealmax(dir.path())
        .arg("validate")
        .arg("--meals")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown difficulty: TRIVIAL"));
}

#[test]
fn score_prints_formula_result() {
    let dir = TempDir::new().unwrap();
    let path = write_meals(&dir, MEALS);

    mealmax(dir.path())
        .arg("score")
        .arg("--meals")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("158.000"))
        .stdout(predicate::str::contains("102.000"))
        .stdout(predicate::str::contains("199.000"))
        .stdout(predicate::str::contains("-1.000"));
}

#[test]
fn battle_full_separation_always_favors_higher_score() {
    // Cracker scores -1, so the separation is maximal and the draw cannot
    // produce an upset.
    let dir = TempDir::new().unwrap();
    let path = write_meals(&dir, MEALS);

    for seed in ["1", "2", "3"] {
        mealmax(dir.path())
            .arg("battle")
            .arg("--meals")
            .arg(&path)
            .args(["--first", "9", "--second", "1", "--seed", seed])
            .assert()
            .success()
            .stdout(predicate::str::contains("threshold 1.000"))
            .stdout(predicate::str::contains("Winner: Sushi"))
            .stdout(predicate::str::contains("meal 1: win"))
            .stdout(predicate::str::contains("meal 9: loss"));
    }
}

#[test]
fn battle_logs_flow_even_with_global_warn_filter() {
    let dir = TempDir::new().unwrap();
    let path = write_meals(&dir, MEALS);

    mealmax(dir.path())
        .env("RUST_LOG", "warn")
        .arg("battle")
        .arg("--meals")
        .arg(&path)
        .args(["--first", "9", "--second", "1", "--seed", "1"])
        .assert()
        .success()
        .stderr(predicate::str::contains("the winner is: Sushi"));
}

#[test]
fn battle_same_seed_is_reproducible() {
    let dir = TempDir::new().unwrap();
    let path = write_meals(&dir, MEALS);

    let run = || {
        mealmax(dir.path())
            .arg("battle")
            .arg("--meals")
            .arg(&path)
            .args(["--first", "1", "--second", "2", "--seed", "42"])
            .output()
            .unwrap()
    };

    let a = run();
    let b = run();
    assert!(a.status.success());
    assert_eq!(a.stdout, b.stdout);
}

#[test]
fn battle_seed_from_config() {
    let dir = TempDir::new().unwrap();
    let path = write_meals(&dir, MEALS);
    std::fs::write(dir.path().join("mealmax.toml"), "seed = 7\n").unwrap();

    let with_config = mealmax(dir.path())
        .arg("battle")
        .arg("--meals")
        .arg(&path)
        .args(["--first", "1", "--second", "2"])
        .output()
        .unwrap();
    let with_flag = mealmax(dir.path())
        .arg("battle")
        .arg("--meals")
        .arg(&path)
        .args(["--first", "1", "--second", "2", "--seed", "7"])
        .output()
        .unwrap();

    assert!(with_config.status.success());
    assert_eq!(with_config.stdout, with_flag.stdout);
}

#[test]
fn battle_unknown_meal() {
    let dir = TempDir::new().unwrap();
    let path = write_meals(&dir, MEALS);

    mealmax(dir.path())
        .arg("battle")
        .arg("--meals")
        .arg(&path)
        .args(["--first", "1", "--second", "42"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("meal 42 not found"));
}

#[test]
fn battle_against_itself() {
    let dir = TempDir::new().unwrap();
    let path = write_meals(&dir, MEALS);

    mealmax(dir.path())
        .arg("battle")
        .arg("--meals")
        .arg(&path)
        .args(["--first", "1", "--second", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot battle itself"));
}

#[test]
fn tournament_prints_champion_and_leaderboard() {
    let dir = TempDir::new().unwrap();
    let path = write_meals(&dir, MEALS);

    mealmax(dir.path())
        .arg("tournament")
        .arg("--meals")
        .arg(&path)
        .args(["--seed", "42"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Round 3:"))
        .stdout(predicate::str::contains("Champion:"))
        .stdout(predicate::str::contains("Win %"));
}

#[test]
fn tournament_same_seed_is_reproducible() {
    let dir = TempDir::new().unwrap();
    let path = write_meals(&dir, MEALS);

    let run = || {
        mealmax(dir.path())
            .arg("tournament")
            .arg("--meals")
            .arg(&path)
            .args(["--seed", "1234", "--sort", "win_pct"])
            .output()
            .unwrap()
    };

    let a = run();
    let b = run();
    assert!(a.status.success());
    assert_eq!(a.stdout, b.stdout);
}

#[test]
fn tournament_writes_report() {
    let dir = TempDir::new().unwrap();
    let path = write_meals(&dir, MEALS);
    let report_path = dir.path().join("out").join("report.json");

    mealmax(dir.path())
        .arg("tournament")
        .arg("--meals")
        .arg(&path)
        .args(["--seed", "5", "--output"])
        .arg(&report_path)
        .assert()
        .success()
        .stderr(predicate::str::contains("Report saved to"));

    let content = std::fs::read_to_string(&report_path).unwrap();
    let json: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(json["seed"], 5);
    assert_eq!(json["battles"].as_array().unwrap().len(), 3);
    assert_eq!(json["leaderboard"].as_array().unwrap().len(), 4);
    assert!(json["champion"].is_string());
}

#[test]
fn tournament_save_uses_configured_output_dir() {
    let dir = TempDir::new().unwrap();
    let path = write_meals(&dir, MEALS);
    std::fs::write(dir.path().join("mealmax.toml"), "output_dir = \"results\"\n").unwrap();

    mealmax(dir.path())
        .arg("tournament")
        .arg("--meals")
        .arg(&path)
        .arg("--save")
        .assert()
        .success();

    let saved: Vec<_> = std::fs::read_dir(dir.path().join("results"))
        .unwrap()
        .collect();
    assert_eq!(saved.len(), 1);
}

#[test]
fn tournament_needs_two_meals() {
    let dir = TempDir::new().unwrap();
    let path = write_meals(
        &dir,
        r#"
[[meals]]
id = 1
meal = "Sushi"
cuisine = "Japanese"
price = 20.0
difficulty = "MED"
"#,
    );

    mealmax(dir.path())
        .arg("tournament")
        .arg("--meals")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Two combatants must be prepped for a battle.",
        ));
}

#[test]
fn tournament_rejects_duplicate_ids() {
    let dir = TempDir::new().unwrap();
    let path = write_meals(
        &dir,
        r#"
[[meals]]
id = 1
meal = "Sushi"
cuisine = "Japanese"
price = 20.0
difficulty = "MED"

[[meals]]
id = 1
meal = "Gruel"
cuisine = "British"
price = 1.0
difficulty = "LOW"
"#,
    );

    mealmax(dir.path())
        .arg("tournament")
        .arg("--meals")
        .arg(&path)
        .args(["--seed", "1"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Champion").not())
        .stderr(predicate::str::contains("Error: duplicate meal ID: 1"));
}

#[test]
fn tournament_rejects_unknown_sort() {
    let dir = TempDir::new().unwrap();
    let path = write_meals(&dir, MEALS);

    mealmax(dir.path())
        .arg("tournament")
        .arg("--meals")
        .arg(&path)
        .args(["--sort", "losses"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown leaderboard sort"));
}
