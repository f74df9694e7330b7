use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use data_loader::Catalog;
use rand::seq::IndexedRandom;
use recommender::{MovieCard, RecommendOutcome, RecommendRequest, Recommender, RecommenderConfig};
use sources::{DurationBucket, YearBucket};
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Semaphore;
use tracing::info;

/// ReelPicks - top-rated movies by genre, age and length
#[derive(Parser)]
#[command(name = "reel-picks")]
#[command(about = "Pick genres and get the highest rated movies, or a random surprise", long_about = None)]
struct Cli {
    /// Path to the movie catalog CSV (overrides the config file)
    #[arg(short, long)]
    data_file: Option<PathBuf>,

    /// Optional JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print results as JSON instead of formatted text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every genre in the catalog
    Genres,

    /// Top-rated movies for the selected genres
    Recommend {
        /// Genre to include (repeatable; any match is enough)
        #[arg(short, long = "genre")]
        genres: Vec<String>,

        /// Movie age
        #[arg(long, value_enum, default_value_t = AgeArg::All)]
        age: AgeArg,

        /// Movie duration
        #[arg(long, value_enum, default_value_t = DurationArg::All)]
        duration: DurationArg,

        /// Number of movies to return (default from config: 5)
        #[arg(long)]
        limit: Option<NonZeroUsize>,
    },

    /// Random movies from the whole catalog
    Surprise {
        /// Number of movies to draw (default from config: 5)
        #[arg(long)]
        count: Option<NonZeroUsize>,

        /// Seed for a reproducible draw
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Run many random recommend requests concurrently
    Benchmark {
        /// Number of requests to make
        #[arg(long, default_value = "100")]
        requests: usize,

        /// Number of concurrent requests
        #[arg(long, default_value = "10")]
        concurrent: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum AgeArg {
    All,
    New,
    Old,
}

impl AgeArg {
    fn bucket(self) -> Option<YearBucket> {
        match self {
            AgeArg::All => None,
            AgeArg::New => Some(YearBucket::New),
            AgeArg::Old => Some(YearBucket::Old),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum DurationArg {
    All,
    Short,
    Normal,
    Long,
}

impl DurationArg {
    fn bucket(self) -> Option<DurationBucket> {
        match self {
            DurationArg::All => None,
            DurationArg::Short => Some(DurationBucket::Short),
            DurationArg::Normal => Some(DurationBucket::Normal),
            DurationArg::Long => Some(DurationBucket::Long),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => RecommenderConfig::load_from_file(path)?,
        None => RecommenderConfig::default(),
    };
    if let Some(data_file) = cli.data_file.clone() {
        config.data_file = data_file;
    }

    // Load the catalog once; every command reads from it
    let start = Instant::now();
    let catalog = Arc::new(
        Catalog::load_from_file(&config.data_file).with_context(|| {
            format!(
                "Failed to load movie catalog from {}",
                config.data_file.display()
            )
        })?,
    );
    info!(
        "Loaded {} movies in {:?}",
        catalog.len(),
        start.elapsed()
    );

    let recommender = Recommender::new(catalog, config);

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Genres => handle_genres(&recommender, cli.json)?,
        Commands::Recommend {
            genres,
            age,
            duration,
            limit,
        } => handle_recommend(&recommender, genres, age, duration, limit, cli.json)?,
        Commands::Surprise { count, seed } => {
            let recommender = match seed {
                Some(seed) => recommender.with_surprise_seed(seed),
                None => recommender,
            };
            handle_surprise(&recommender, count, cli.json)?
        }
        Commands::Benchmark {
            requests,
            concurrent,
        } => handle_benchmark(recommender, requests, concurrent).await?,
    }

    Ok(())
}

/// Handle the 'genres' command
fn handle_genres(recommender: &Recommender, json: bool) -> Result<()> {
    let genres = recommender.genres();
    if json {
        println!("{}", serde_json::to_string_pretty(genres)?);
        return Ok(());
    }

    println!("{}", format!("{} genres:", genres.len()).bold().blue());
    for genre in genres {
        println!("{}{}", "• ".green(), genre);
    }
    Ok(())
}

/// Handle the 'recommend' command
fn handle_recommend(
    recommender: &Recommender,
    genres: Vec<String>,
    age: AgeArg,
    duration: DurationArg,
    limit: Option<NonZeroUsize>,
    json: bool,
) -> Result<()> {
    let mut request = RecommendRequest::new(genres)
        .with_year_bucket(age.bucket())
        .with_duration_bucket(duration.bucket());
    if let Some(limit) = limit {
        request = request.with_top_n(limit);
    }

    let outcome = recommender.recommend(&request)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    match &outcome {
        RecommendOutcome::Recommendations(cards) => {
            let header = format!("Top {} Recommendations", cards.len());
            print_cards(&header, cards);
        }
        RecommendOutcome::NoMatches => {
            println!("{}", outcome.message().unwrap_or_default().yellow());
        }
        RecommendOutcome::NoGenreSelected => {
            println!("{}", outcome.message().unwrap_or_default().cyan());
            println!("Available genres: {}", recommender.genres().join(", "));
        }
    }
    Ok(())
}

/// Handle the 'surprise' command
fn handle_surprise(recommender: &Recommender, count: Option<NonZeroUsize>, json: bool) -> Result<()> {
    let cards = recommender.surprise(count)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&cards)?);
    } else {
        print_cards("Surprise Picks", &cards);
    }
    Ok(())
}

/// Handle the 'benchmark' command
async fn handle_benchmark(
    recommender: Recommender,
    requests: usize,
    concurrent: usize,
) -> Result<()> {
    if requests == 0 {
        bail!("--requests must be at least 1");
    }
    if recommender.genres().is_empty() {
        bail!("Catalog has no genres to benchmark with");
    }

    // Build all requests up front; the thread RNG must not cross an await
    let ages = [AgeArg::All, AgeArg::New, AgeArg::Old];
    let durations = [
        DurationArg::All,
        DurationArg::Short,
        DurationArg::Normal,
        DurationArg::Long,
    ];
    let batch: Vec<RecommendRequest> = {
        let mut rng = rand::rng();
        (0..requests)
            .map(|_| {
                let genres: Vec<String> = recommender
                    .genres()
                    .choose_multiple(&mut rng, 2)
                    .cloned()
                    .collect();
                let age = ages.choose(&mut rng).copied().unwrap_or(AgeArg::All);
                let duration = durations.choose(&mut rng).copied().unwrap_or(DurationArg::All);
                RecommendRequest::new(genres)
                    .with_year_bucket(age.bucket())
                    .with_duration_bucket(duration.bucket())
            })
            .collect()
    };

    let semaphore = Arc::new(Semaphore::new(concurrent.max(1)));
    let wall_start = Instant::now();

    // Use tokio::spawn to make concurrent requests
    let mut handles = vec![];
    for request in batch {
        let recommender = recommender.clone();
        let semaphore = semaphore.clone();
        let handle = tokio::spawn(async move {
            let _permit = semaphore.acquire_owned().await?;
            tokio::task::spawn_blocking(move || {
                let start = Instant::now();
                recommender.recommend(&request)?;
                Ok::<_, anyhow::Error>(start.elapsed())
            })
            .await?
        });
        handles.push(handle);
    }

    // Wait for all tasks to complete and collect timings
    let mut timings: Vec<Duration> = vec![];
    for handle in handles {
        let elapsed = handle.await??;
        timings.push(elapsed);
    }
    let wall_time = wall_start.elapsed();

    let total_time: Duration = timings.iter().sum();
    let avg_latency = total_time / (timings.len() as u32);
    timings.sort();
    let percentile = |p: f64| timings[((timings.len() as f64 * p) as usize).min(timings.len() - 1)];
    let throughput = requests as f64 / wall_time.as_secs_f64();

    println!("{}", "Benchmark results:".bold().blue());
    println!("Requests: {} ({} concurrent)", requests, concurrent.max(1));
    println!("Wall time: {:?}", wall_time);
    println!("Average latency: {:?}", avg_latency);
    println!("P50 latency: {:?}", percentile(0.50));
    println!("P95 latency: {:?}", percentile(0.95));
    println!("P99 latency: {:?}", percentile(0.99));
    println!("Throughput: {:.2} requests/second", throughput);

    Ok(())
}

/// Helper function to format and print movie cards
fn print_cards(header: &str, cards: &[MovieCard]) {
    println!("{}", header.bold().blue());
    for card in cards {
        println!(
            "{} {}",
            format!("{}.", card.rank).green().bold(),
            card.title.bold()
        );
        println!("   IMDB Rating: {}", card.rating.to_string().bold());
        println!("   Genre: {}", card.genre);
        println!("   Year: {}", card.year);
        println!("   Duration: {}", card.runtime);
        if !card.overview.is_empty() {
            println!("   {}", card.overview.dimmed());
        }
        if let Some(poster) = &card.poster_url {
            println!("   Poster: {}", poster.underline());
        }
        println!();
    }
}
