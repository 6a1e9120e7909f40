//! The `histquiz init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("histquiz.toml").exists() {
        println!("histquiz.toml already exists, skipping.");
    } else {
        std::fs::write("histquiz.toml", SAMPLE_CONFIG)?;
        println!("Created histquiz.toml");
    }

    println!("\nNext steps:");
    println!("  1. Adjust histquiz.toml if you want another subject or API");
    println!("  2. Run: histquiz lessons");
    println!("  3. Run: histquiz play");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# histquiz configuration

api_base_url = "https://quiz-app-1072083660725.us-central1.run.app"
subject = "History"

# The lesson list is cached for this long before re-fetching.
cache_ttl_secs = 3600
request_timeout_secs = 30

# Uncomment to move the cache away from ~/.cache/histquiz:
# cache_dir = "/tmp/histquiz"
"#;
