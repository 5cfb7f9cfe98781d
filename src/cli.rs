use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "food-lens")]
#[command(about = "Photograph a meal and get its nutrition facts", long_about = None)]
pub struct Cli {
    /// Config file (defaults to config.toml in the data directory)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Analysis endpoint, overrides the config file
    #[arg(short, long, global = true)]
    pub endpoint: Option<String>,

    /// Also log to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze one image file and print the result
    Analyze {
        /// Image file (JPEG, PNG, WebP, ...)
        image: PathBuf,
    },
    /// Line-oriented session: camera, library, retry, result, state, quit
    Interactive,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_analyze_with_global_endpoint() {
        let cli = Cli::try_parse_from([
            "food-lens",
            "analyze",
            "/tmp/apple.jpg",
            "--endpoint",
            "http://localhost:9000/api/analyze",
        ])
        .unwrap();

        assert_eq!(
            cli.endpoint.as_deref(),
            Some("http://localhost:9000/api/analyze")
        );
        assert!(matches!(cli.command, Commands::Analyze { ref image } if image == &PathBuf::from("/tmp/apple.jpg")));
    }

    #[test]
    fn subcommand_is_required() {
        assert!(Cli::try_parse_from(["food-lens"]).is_err());
    }
}
