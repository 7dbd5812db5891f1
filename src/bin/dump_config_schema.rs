//! Prints the JSON schema of the phoenyx config file.

fn main() -> anyhow::Result<()> {
    let schema = phoenyx::Config::json_schema();
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
