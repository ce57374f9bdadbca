// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up diagnostic logging (tracing, to stderr)
// 3. Dispatch to the browse or interactive handler
// 4. Exit with proper code (0 = success, 1 = user error, 2 = other error)
//
// User errors are the ones the person at the keyboard can fix: an empty
// username, or a username GitHub doesn't know.
// =============================================================================

mod browser;
mod cli;
mod error;
mod github;
mod render;
mod session;
mod view;

use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use browser::RepoBrowser;
use cli::{Cli, Commands, FilterArgs, OutputArgs};
use github::GithubClient;
use session::{Command, Session};

// A single fetch at a time never needs more than one thread
#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let exit_code = match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// RUST_LOG wins unless --verbose was given; default is warnings only
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("repo_browser=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<i32> {
    let client = GithubClient::new(&cli.api_url)?;
    let mut browser = RepoBrowser::new(client);

    match cli.command {
        Commands::Browse {
            username,
            filters,
            output,
        } => {
            let mut status = io::stderr();
            let mut stdout = io::stdout().lock();
            handle_browse(&mut browser, &username, &filters, &output, &mut status, &mut stdout).await
        }
        Commands::Interactive { username, output } => {
            handle_interactive(&mut browser, username, &output).await
        }
    }
}

// Handles the 'browse' subcommand: one fetch, one render
//
// Progress and errors go to `status` (stderr), the rendered view to `out`
async fn handle_browse(
    browser: &mut RepoBrowser,
    username: &str,
    filters: &FilterArgs,
    output: &OutputArgs,
    status: &mut impl Write,
    out: &mut impl Write,
) -> Result<i32> {
    // Check the name first so a blank one never gets a "Fetching" line
    let username = match github::validate_username(username) {
        Ok(username) => username,
        Err(e) => {
            writeln!(status, "❌ {}", e)?;
            return Ok(1);
        }
    };
    writeln!(status, "🔍 Fetching repositories for {}", username)?;

    let count = match browser.load(username).await {
        Ok(count) => count,
        Err(e) if e.is_user_facing() => {
            writeln!(status, "❌ {}", e)?;
            return Ok(1);
        }
        Err(e) => return Err(e.into()),
    };
    writeln!(status, "📄 Found {} repositor{}", count, if count == 1 { "y" } else { "ies" })?;

    // load() resets the controls, so the flags are applied afterwards
    *browser.filters_mut() = filters.to_config();
    debug!(filters = ?browser.filters(), "applying command-line filters");

    browser.render_to(output.format, &output.target(), out)?;
    Ok(0)
}

// Handles the 'interactive' subcommand: read commands from stdin until quit
async fn handle_interactive(
    browser: &mut RepoBrowser,
    username: Option<String>,
    output: &OutputArgs,
) -> Result<i32> {
    let mut stdout = io::stdout();
    let mut session = Session::new(browser, output.format, output.target());

    if let Some(username) = username {
        session.execute(Command::User(username), &mut stdout).await?;
    }

    // Blocking reads are fine here: nothing else runs on the runtime
    session.run(io::stdin().lock(), &mut stdout).await?;
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    fn browse_args(extra: &[&str]) -> (FilterArgs, OutputArgs) {
        let args: Vec<&str> = ["repo-browser", "browse", "placeholder"]
            .iter()
            .chain(extra)
            .copied()
            .collect();
        match Cli::try_parse_from(args).unwrap().command {
            Commands::Browse { filters, output, .. } => (filters, output),
            other => panic!("expected browse, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_blank_username_exits_1_without_fetching() {
        let mut server = mockito::Server::new_async().await;
        let mock = server.mock("GET", Matcher::Any).expect(0).create_async().await;
        let mut browser = RepoBrowser::new(GithubClient::new(&server.url()).unwrap());
        let (filters, output) = browse_args(&[]);
        let (mut status, mut out) = (Vec::new(), Vec::new());

        let code = handle_browse(&mut browser, "   ", &filters, &output, &mut status, &mut out)
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(code, 1);
        assert_eq!(String::from_utf8(status).unwrap(), "❌ Please enter a GitHub username.\n");
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_browse_applies_flags_after_load() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/users/octocat/repos")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"[
                {"name": "five", "description": null, "language": null, "stargazers_count": 5,
                 "fork": false, "homepage": null, "updated_at": "2024-01-01T00:00:00Z",
                 "html_url": "https://github.com/octocat/five"},
                {"name": "ten", "description": null, "language": null, "stargazers_count": 10,
                 "fork": false, "homepage": null, "updated_at": "2024-01-01T00:00:00Z",
                 "html_url": "https://github.com/octocat/ten"}
            ]"#,
            )
            .create_async()
            .await;
        let mut browser = RepoBrowser::new(GithubClient::new(&server.url()).unwrap());
        let (filters, output) = browse_args(&["--min-stars", "6", "--format", "text"]);
        let (mut status, mut out) = (Vec::new(), Vec::new());

        let code = handle_browse(&mut browser, " octocat ", &filters, &output, &mut status, &mut out)
            .await
            .unwrap();

        assert_eq!(code, 0);
        let status = String::from_utf8(status).unwrap();
        assert!(status.starts_with("🔍 Fetching repositories for octocat\n"));
        assert!(status.contains("📄 Found 2 repositories"));
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("📦 ten"));
        assert!(!out.contains("📦 five"));
    }
}
