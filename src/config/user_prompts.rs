//! First-run prompt used when neither a config file nor an environment
//! override provides the service domain.

use crate::error::AppError;
use tokio::io::{self, AsyncBufReadExt};

/// Asks for the tournament/league service domain on stdin and returns the trimmed answer.
///
/// ```no_run
/// use league_watch::config::user_prompts::prompt_for_api_domain;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let api_domain = prompt_for_api_domain().await?;
/// println!("Using {api_domain}");
/// # Ok(())
/// # }
/// ```
pub async fn prompt_for_api_domain() -> Result<String, AppError> {
    println!("Please enter the league service domain (e.g. https://woogles.io): ");
    let mut input = String::new();
    let mut reader = io::BufReader::new(io::stdin());
    reader.read_line(&mut input).await?;
    Ok(input.trim().to_string())
}
