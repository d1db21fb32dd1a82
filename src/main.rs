use std::time::Duration;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use logpurge::{
    actions::Actions,
    configuration::{parse_toggle, Configuration},
    retention::{RetentionPolicy, DEFAULT_MAX_AGE_DAYS},
};
use tracing_subscriber::EnvFilter;
use url::Url;

/// Deletes dated filebeat and logstash indices once they outlive their retention.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Cluster endpoint, e.g. http://localhost:9200
    #[arg(long, env = "ES_HOST")]
    cluster: Url,

    /// Days to keep a log index; older ones are deleted
    #[arg(long, env = "MAX_AGE", default_value_t = DEFAULT_MAX_AGE_DAYS)]
    max_age: u32,

    /// Actually delete expired indices instead of only logging them
    #[arg(
        long,
        env = "ALLOW_DELETE",
        default_value = "false",
        default_missing_value = "true",
        num_args = 0..=1,
        require_equals = true,
        value_parser = parse_toggle,
        action = ArgAction::Set
    )]
    allow_delete: bool,

    /// Per-request timeout in seconds
    #[arg(
        long,
        env = "REQUEST_TIMEOUT",
        default_value_t = 30,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    timeout: u64,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Commands {
    /// Run one retention pass (the default)
    Purge,
    /// Show every log index with its age, without deleting anything
    List {
        /// Print as JSON instead of tab-separated lines
        #[arg(long)]
        json: bool,
    },
    /// Show which cluster the endpoint points at
    Info,
}

impl Args {
    fn configuration(&self) -> Result<Configuration> {
        let config = Configuration::builder()
            .cluster(self.cluster.clone())
            .policy(RetentionPolicy::new(self.max_age, self.allow_delete))
            .request_timeout(Duration::from_secs(self.timeout))
            .build();
        config.validate()?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let cli = Args::parse();
    let actions = Actions::new(cli.configuration()?)?;
    let today = chrono::Local::now().date_naive();

    match cli.command.unwrap_or(Commands::Purge) {
        Commands::Purge => {
            actions.purge(today).await?;
        }
        Commands::List { json } => {
            let ages = actions.list(today).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&ages)?);
            } else {
                for index in ages {
                    println!("{}", index);
                }
            }
        }
        Commands::Info => println!("{}", actions.info().await?),
    }
    Ok(())
}
