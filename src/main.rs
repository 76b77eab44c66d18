// Entrypoint for the CLI.
// - Parses the two positional credentials.
// - Runs one lookup and prints its outcome; every lookup failure still
//   exits with status 0.

use clap::Parser;
use github_id::{logging, ui::print_lookup, ApiClient, Credentials};
use tracing::debug;

#[derive(Parser)]
#[command(name = "github-id", version, about = "Print the numeric id of the account owning a token")]
struct Cli {
    /// Account name (Basic auth username)
    account_name: String,

    /// Personal access token (Basic auth password)
    secret_token: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init();

    let credentials = Credentials::new(cli.account_name, cli.secret_token);
    let outcome = ApiClient::from_env().and_then(|api| api.lookup_id(&credentials));
    if let Err(e) = &outcome {
        debug!(error = %e, "lookup failed");
    }

    let stdout = std::io::stdout();
    print_lookup(&mut stdout.lock(), &outcome)?;
    Ok(())
}
