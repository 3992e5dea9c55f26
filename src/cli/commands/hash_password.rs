use serde_json::json;

use crate::auth::PasswordHash;
use crate::cli::OutputFormat;

pub fn handle(password: &str, output_format: OutputFormat) -> anyhow::Result<()> {
    if password.is_empty() {
        anyhow::bail!("password must not be empty");
    }

    let hash = PasswordHash::new(password);
    match output_format {
        OutputFormat::Json => {
            println!("{}", json!({ "sal": hash.salt, "password_hash": hash.hash }));
        }
        OutputFormat::Text => {
            println!("sal:           {}", hash.salt);
            println!("password_hash: {}", hash.hash);
        }
    }
    Ok(())
}
