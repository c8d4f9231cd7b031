use career_ovr::clock::{self, Clock, FixedClock, SystemClock};
use career_ovr::config::AppConfig;
use career_ovr::error::AppError;
use career_ovr::market::{
    sync_segments, HeuristicMarketProvider, MarketSegment, MarketSignalProvider, MarketSnapshot,
};
use career_ovr::profile::ProfileSnapshot;
use career_ovr::rating::{RatingEngine, RatingResult};
use career_ovr::recommendations::{recommend, Recommendation};
use career_ovr::telemetry;
use career_ovr::tiers::{TierClassifier, TierTable, DEFAULT_TIER};
use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "career-ovr",
    about = "Rate career profiles with the deterministic Overall Rating engine",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rate a profile and print the breakdown and explanations
    Rate(RateArgs),
    /// Suggest actions that would raise a profile's rating
    Recommend(RecommendArgs),
    /// Resolve market signals for one segment or the default sweep
    Market(MarketArgs),
    /// Classify an organization or institution name
    Tier(TierArgs),
}

#[derive(Args, Debug)]
struct TargetArgs {
    /// Target role family used to resolve a market signal
    #[arg(long, requires = "industry")]
    role: Option<String>,
    /// Target industry used to resolve a market signal
    #[arg(long, requires = "role")]
    industry: Option<String>,
    /// Optional geography for the market signal
    #[arg(long)]
    geo: Option<String>,
}

#[derive(Args, Debug)]
struct RateArgs {
    /// Profile snapshot JSON file
    profile: PathBuf,
    #[command(flatten)]
    target: TargetArgs,
    /// Pin "now" (RFC 3339 or YYYY-MM-DD); overrides OVR_NOW
    #[arg(long, value_parser = clock::parse_instant)]
    now: Option<DateTime<Utc>>,
    /// Print the full result as JSON
    #[arg(long)]
    json: bool,
    /// Also write the factor breakdown to this CSV file
    #[arg(long)]
    breakdown_csv: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct RecommendArgs {
    /// Profile snapshot JSON file
    profile: PathBuf,
    #[command(flatten)]
    target: TargetArgs,
    /// Pin "now" (RFC 3339 or YYYY-MM-DD); overrides OVR_NOW
    #[arg(long, value_parser = clock::parse_instant)]
    now: Option<DateTime<Utc>>,
    /// Print the recommendations as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct MarketArgs {
    #[command(flatten)]
    target: TargetArgs,
    /// Pin the as-of date (RFC 3339 or YYYY-MM-DD); overrides OVR_NOW
    #[arg(long, value_parser = clock::parse_instant)]
    now: Option<DateTime<Utc>>,
}

#[derive(Args, Debug)]
struct TierArgs {
    /// Organization or institution name
    name: String,
    /// Table to classify against
    #[arg(long, value_enum, default_value_t = TableArg::Organization)]
    table: TableArg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum TableArg {
    Organization,
    Institution,
}

impl From<TableArg> for TierTable {
    fn from(value: TableArg) -> Self {
        match value {
            TableArg::Organization => TierTable::Organization,
            TableArg::Institution => TierTable::Institution,
        }
    }
}

#[derive(Debug, Serialize)]
struct RecommendationReport {
    overall: u8,
    recommendations: Vec<Recommendation>,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run_cli().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

async fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    match cli.command {
        Command::Rate(args) => run_rate(&config, args).await,
        Command::Recommend(args) => run_recommend(&config, args).await,
        Command::Market(args) => run_market(&config, args).await,
        Command::Tier(args) => {
            run_tier(args);
            Ok(())
        }
    }
}

/// `--now` beats `OVR_NOW`, which beats the wall clock.
fn resolve_clock(config: &AppConfig, now: Option<DateTime<Utc>>) -> Box<dyn Clock> {
    match now.or(config.now) {
        Some(instant) => Box::new(FixedClock(instant)),
        None => Box::new(SystemClock),
    }
}

fn load_profile(path: &Path) -> Result<ProfileSnapshot, AppError> {
    let raw = fs::read_to_string(path)?;
    let profile: ProfileSnapshot = serde_json::from_str(&raw)?;
    Ok(profile)
}

/// Attach a heuristic market signal when a target is given and the profile has work history.
async fn with_market_signal(
    profile: ProfileSnapshot,
    target: &TargetArgs,
    now: DateTime<Utc>,
) -> Result<ProfileSnapshot, AppError> {
    let (Some(role), Some(industry)) = (target.role.as_deref(), target.industry.as_deref()) else {
        return Ok(profile);
    };
    if profile.experiences.is_empty() {
        info!("profile has no experience; rating without a market signal");
        return Ok(profile);
    }

    let provider = HeuristicMarketProvider::new(now.date_naive());
    let snapshot = provider
        .fetch_signal(role, industry, target.geo.as_deref())
        .await?;
    Ok(profile.with_market_signal(snapshot.signal))
}

async fn rate_profile(
    config: &AppConfig,
    path: &Path,
    target: &TargetArgs,
    now: Option<DateTime<Utc>>,
) -> Result<(ProfileSnapshot, RatingResult), AppError> {
    let now = resolve_clock(config, now).now();
    let profile = with_market_signal(load_profile(path)?, target, now).await?;
    let engine = RatingEngine::new(config.rating.clone())?;
    let result = engine.rate_at(&profile, now)?;
    Ok((profile, result))
}

async fn run_rate(config: &AppConfig, args: RateArgs) -> Result<(), AppError> {
    let (_, result) = rate_profile(config, &args.profile, &args.target, args.now).await?;

    if let Some(path) = &args.breakdown_csv {
        let file = BufWriter::new(File::create(path)?);
        result.write_breakdown_csv(file)?;
        info!(path = %path.display(), "breakdown written");
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        render_rating(&result);
    }
    Ok(())
}

async fn run_recommend(config: &AppConfig, args: RecommendArgs) -> Result<(), AppError> {
    let (profile, result) = rate_profile(config, &args.profile, &args.target, args.now).await?;
    let recommendations = recommend(&profile, result.overall, result.rated_at);

    if args.json {
        let report = RecommendationReport {
            overall: result.overall,
            recommendations,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        render_recommendations(result.overall, &recommendations);
    }
    Ok(())
}

async fn run_market(config: &AppConfig, args: MarketArgs) -> Result<(), AppError> {
    let now = resolve_clock(config, args.now).now();
    let provider = HeuristicMarketProvider::new(now.date_naive());

    let snapshots: Vec<MarketSnapshot> =
        match (args.target.role.as_deref(), args.target.industry.as_deref()) {
            (Some(role), Some(industry)) => vec![
                provider
                    .fetch_signal(role, industry, args.target.geo.as_deref())
                    .await?,
            ],
            _ => sync_segments(&provider, &[] as &[MarketSegment]).await,
        };

    println!("{}", serde_json::to_string_pretty(&snapshots)?);
    Ok(())
}

fn run_tier(args: TierArgs) {
    let table = TierTable::from(args.table);
    let tier = TierClassifier::new().classify(table, &args.name);
    let note = if tier == DEFAULT_TIER {
        " (default)"
    } else {
        ""
    };
    println!("{}: tier {tier}{note}", args.name.trim());
}

fn render_rating(result: &RatingResult) {
    println!("Overall rating: {}", result.overall);
    println!(
        "Confidence: {:.0}% | model {} | rated {}",
        result.confidence * 100.0,
        result.model_version,
        result.rated_at.format("%Y-%m-%d")
    );
    println!(
        "Market trend x{:.3} | recency x{:.3}",
        result.trend_multiplier, result.recency_adjustment
    );

    println!("\nBreakdown");
    for item in &result.breakdown {
        println!(
            "- {:<16} {:>5.1} / {:<4} weight {:.2} -> {:.2}",
            item.factor.label(),
            item.raw_score,
            item.cap,
            item.weight,
            item.contribution
        );
    }

    if result.explanations.is_empty() {
        println!("\nExplanations: none");
    } else {
        println!("\nExplanations");
        for line in &result.explanations {
            println!("- {line}");
        }
    }
}

fn render_recommendations(overall: u8, recommendations: &[Recommendation]) {
    println!("Overall rating: {overall}");
    if recommendations.is_empty() {
        println!("\nRecommendations: none");
        return;
    }

    println!("\nRecommendations");
    for recommendation in recommendations {
        println!(
            "- +{} {} ({})",
            recommendation.estimated_delta, recommendation.action, recommendation.category
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use career_ovr::config::{AppEnvironment, TelemetryConfig};
    use career_ovr::rating::RatingConfig;
    use std::io::Write;

    fn config(now: Option<DateTime<Utc>>) -> AppConfig {
        AppConfig {
            environment: AppEnvironment::Test,
            telemetry: TelemetryConfig {
                log_level: "warn".to_string(),
            },
            rating: RatingConfig::default(),
            now,
        }
    }

    fn instant(raw: &str) -> DateTime<Utc> {
        clock::parse_instant(raw).expect("valid instant")
    }

    fn no_target() -> TargetArgs {
        TargetArgs {
            role: None,
            industry: None,
            geo: None,
        }
    }

    fn profile_file(json: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(json.as_bytes()).expect("write profile");
        file
    }

    const ANALYST: &str = r#"{
        "experiences": [{
            "title": "Data Analyst",
            "organization": "Acme",
            "start_date": "2023-01-01",
            "employment": "full_time",
            "bullets": ["Reduced reporting time by 30%"]
        }]
    }"#;

    #[test]
    fn cli_flag_beats_configured_now() {
        let configured = instant("2025-01-01");
        let flag = instant("2025-06-01");

        assert_eq!(resolve_clock(&config(Some(configured)), Some(flag)).now(), flag);
        assert_eq!(resolve_clock(&config(Some(configured)), None).now(), configured);
    }

    #[tokio::test]
    async fn rating_an_empty_profile_lands_on_the_floor() {
        let file = profile_file("{}");

        let (_, result) = rate_profile(
            &config(None),
            file.path(),
            &no_target(),
            Some(instant("2025-06-01")),
        )
        .await
        .expect("rated");

        assert_eq!(result.overall, 20);
    }

    #[tokio::test]
    async fn target_attaches_a_market_signal() {
        let file = profile_file(ANALYST);
        let target = TargetArgs {
            role: Some("Data Science".to_string()),
            industry: Some("Technology".to_string()),
            geo: None,
        };

        let (profile, result) = rate_profile(
            &config(None),
            file.path(),
            &target,
            Some(instant("2025-06-01")),
        )
        .await
        .expect("rated");

        assert!(profile.market_signal.is_some());
        assert!(result.trend_multiplier > 1.0);
    }

    #[tokio::test]
    async fn empty_history_skips_the_market_lookup() {
        let file = profile_file("{}");
        let target = TargetArgs {
            role: Some("Data Science".to_string()),
            industry: Some("Technology".to_string()),
            geo: None,
        };

        let (profile, result) = rate_profile(
            &config(None),
            file.path(),
            &target,
            Some(instant("2025-06-01")),
        )
        .await
        .expect("rated");

        assert!(profile.market_signal.is_none());
        assert_eq!(result.trend_multiplier, 1.0);
    }

    #[tokio::test]
    async fn malformed_profiles_surface_as_json_errors() {
        let file = profile_file(r#"{ "experiences": 7 }"#);

        let err = rate_profile(&config(None), file.path(), &no_target(), None)
            .await
            .expect_err("bad json");

        assert!(matches!(err, AppError::Json(_)));
    }

    #[tokio::test]
    async fn rate_writes_the_breakdown_csv() {
        let file = profile_file(ANALYST);
        let out = tempfile::NamedTempFile::new().expect("temp file");
        let args = RateArgs {
            profile: file.path().to_path_buf(),
            target: no_target(),
            now: Some(instant("2025-06-01")),
            json: true,
            breakdown_csv: Some(out.path().to_path_buf()),
        };

        run_rate(&config(None), args).await.expect("rate runs");

        let csv = fs::read_to_string(out.path()).expect("csv readable");
        assert_eq!(csv.lines().count(), 7);
        assert!(csv.starts_with("factor,raw_score,cap,weight,contribution"));
    }
}
