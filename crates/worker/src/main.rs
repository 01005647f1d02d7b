use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use screener_core::screening::overrides::RecommendationOverrides;

mod report;
mod universe;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "screener_worker")]
struct Args {
    /// Universe feed JSON file. Defaults to SCREENER_UNIVERSE_PATH, then the demo universe.
    #[arg(long)]
    input: Option<PathBuf>,

    /// Pin a recommendation, e.g. `--override ESGC=dont_buy`. Repeatable.
    #[arg(long = "override", value_name = "SYMBOL=LABEL")]
    overrides: Vec<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Print only the shortlist.
    #[arg(long)]
    shortlist_only: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = screener_core::config::Settings::from_env()?;
    let _sentry_guard = init_sentry(&settings);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(sentry_tracing::layer())
        .init();

    let args = Args::parse();

    let result = run(&args, &settings).await;
    if let Err(err) = &result {
        sentry_anyhow::capture_anyhow(err);
        tracing::error!(error = %format!("{err:#}"), "screening run failed");
    }
    result
}

async fn run(args: &Args, settings: &screener_core::config::Settings) -> anyhow::Result<()> {
    let opts = universe::UniverseOptions::resolve(args.input.clone(), settings);
    let source = universe::build_source(&opts);

    let cli_overrides = RecommendationOverrides::parse(&args.overrides.join(","))?;
    let overrides = settings.recommendation_overrides()?.merged_with(&cli_overrides);

    let universe = source.fetch_universe().await?;
    tracing::info!(
        source = source.provider_name(),
        securities = universe.securities.len(),
        overrides = overrides.len(),
        "universe loaded"
    );

    let snapshot = screener_core::screening::snapshot(source.provider_name(), universe, &overrides);

    match args.format {
        OutputFormat::Json if args.shortlist_only => {
            println!("{}", serde_json::to_string_pretty(&snapshot.shortlist)?)
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&snapshot)?),
        OutputFormat::Text => print!("{}", report::render_text(&snapshot, args.shortlist_only)),
    }

    Ok(())
}

fn init_sentry(settings: &screener_core::config::Settings) -> Option<sentry::ClientInitGuard> {
    let dsn = settings.sentry_dsn.as_deref()?;
    Some(sentry::init((
        dsn,
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_repeated_overrides() {
        let args = Args::try_parse_from([
            "screener_worker",
            "--override",
            "ESGC=dont_buy",
            "--override",
            "TX=Hold",
            "--format",
            "json",
        ])
        .unwrap();
        assert_eq!(args.overrides, vec!["ESGC=dont_buy", "TX=Hold"]);
        assert_eq!(args.format, OutputFormat::Json);

        let table = RecommendationOverrides::parse(&args.overrides.join(",")).unwrap();
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn parses_input_path() {
        let args =
            Args::try_parse_from(["screener_worker", "--input", "u.json", "--shortlist-only"])
                .unwrap();
        assert_eq!(args.input, Some(PathBuf::from("u.json")));
        assert!(args.shortlist_only);
        assert!(Args::try_parse_from(["screener_worker", "--http"]).is_err());
    }
}
