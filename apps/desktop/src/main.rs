use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use client_core::{
    load_settings, Action, FetchOutcome, GeminiClient, RecommendationFetcher, Store,
};
use tracing_subscriber::EnvFilter;

const MISSING_TEXT: &str = "(no recommendation text returned)";

#[derive(Parser, Debug)]
#[command(name = "book-recommender", version, about = "AI book recommendations from the terminal")]
struct Cli {
    /// Settings file (TOML); defaults to ./book_recommender.toml or the user config dir.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the available genres
    Genres,
    /// List the moods offered for a genre
    Moods {
        #[arg(long)]
        genre: String,
    },
    /// Ask the generative API for six book recommendations
    Recommend {
        #[arg(long)]
        genre: Option<String>,
        #[arg(long)]
        mood: Option<String>,
        #[arg(long)]
        level: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();

    let settings = load_settings(cli.config.as_deref()).context("failed to load settings")?;
    let catalog = settings
        .load_catalog()
        .context("failed to load option catalog")?;

    match cli.command {
        Command::Genres => {
            for genre in &catalog.genres {
                println!("{genre}");
            }
        }
        Command::Moods { genre } => {
            for mood in client_core::available_moods(&catalog, &genre) {
                println!("{mood}");
            }
        }
        Command::Recommend { genre, mood, level } => {
            let mut store = Store::new();
            // Absent flags stay unselected; the fetcher then skips the request.
            store.dispatch(Action::SetGenre(genre.unwrap_or_default()));
            store.dispatch(Action::SetMood(mood.unwrap_or_default()));
            store.dispatch(Action::SetLevel(level.unwrap_or_default()));

            let client = GeminiClient::from_settings(&settings);
            tracing::info!(model = %settings.model, "requesting recommendation");
            let snapshot = store.state().clone();
            let outcome = RecommendationFetcher
                .fetch(&snapshot, &client, |action| store.dispatch(action))
                .await;

            match outcome {
                FetchOutcome::Skipped => {
                    println!("Select a genre, mood and level to get a recommendation.");
                }
                FetchOutcome::Succeeded(_) => {
                    for (index, text) in store.state().responses.iter().enumerate() {
                        println!("{}", render_response(index, text.as_deref()));
                    }
                }
                FetchOutcome::Failed => bail!("request failed"),
            }
        }
    }

    Ok(())
}

fn render_response(index: usize, text: Option<&str>) -> String {
    format!(
        "Recommendation {}\n{}",
        index + 1,
        text.unwrap_or(MISSING_TEXT)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_numbered_response() {
        assert_eq!(
            render_response(0, Some("1. The Hobbit")),
            "Recommendation 1\n1. The Hobbit"
        );
    }

    #[test]
    fn renders_placeholder_for_missing_text() {
        assert_eq!(
            render_response(2, None),
            "Recommendation 3\n(no recommendation text returned)"
        );
    }

    #[test]
    fn parses_recommend_subcommand() {
        let cli = Cli::try_parse_from([
            "book-recommender",
            "recommend",
            "--genre",
            "Fantasy",
            "--mood",
            "Curious",
            "--level",
            "Beginner",
        ])
        .expect("parse");
        match cli.command {
            Command::Recommend { genre, mood, level } => {
                assert_eq!(genre.as_deref(), Some("Fantasy"));
                assert_eq!(mood.as_deref(), Some("Curious"));
                assert_eq!(level.as_deref(), Some("Beginner"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn recommend_fields_default_to_unselected() {
        let cli = Cli::try_parse_from(["book-recommender", "--config", "x.toml", "recommend"])
            .expect("parse");
        assert_eq!(cli.config, Some(PathBuf::from("x.toml")));
        assert!(matches!(
            cli.command,
            Command::Recommend {
                genre: None,
                mood: None,
                level: None
            }
        ));
    }
}
