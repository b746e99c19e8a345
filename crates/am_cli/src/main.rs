use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;

use am_core::{Article, ArticleStore, ListParams, NewArticle};
use am_store::{Latency, MemoryBackend};

#[derive(Parser, Debug)]
#[command(author, version, about = "Drive the in-process mock article API", long_about = None)]
struct Cli {
    /// Override every simulated delay with this many milliseconds
    #[arg(long)]
    latency_ms: Option<u64>,
    /// Print JSON instead of plain lines
    #[arg(long)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Page through the collection, optionally filtered by a query
    List {
        #[arg(long, default_value_t = 1)]
        page: usize,
        #[arg(long, default_value_t = 10)]
        page_size: usize,
        /// Substring matched against titles and summaries
        #[arg(long)]
        query: Option<String>,
    },
    /// Print every article, newest first
    All,
    /// Look up a single article by id
    Get { id: String },
    /// Validate and add a new article
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        summary: String,
    },
}

fn print_article(article: &Article) {
    println!("{}. {} | {}", article.id, article.title, article.summary);
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    // Every invocation starts from the five seed records; nothing persists
    // between runs.
    let latency = match cli.latency_ms {
        Some(ms) => Latency::uniform(Duration::from_millis(ms)),
        None => Latency::default(),
    };
    let store: Arc<dyn ArticleStore> = Arc::new(MemoryBackend::with_latency(latency));

    match cli.command {
        Commands::List {
            page,
            page_size,
            query,
        } => {
            let params = ListParams {
                page,
                page_size,
                query,
            };
            let result = store.list(&params).await?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                for article in &result.list {
                    print_article(article);
                }
                info!(
                    "📚 page {} shows {} of {} matching articles",
                    result.page,
                    result.list.len(),
                    result.total
                );
            }
        }
        Commands::All => {
            let articles = store.get_all().await?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&articles)?);
            } else {
                for article in &articles {
                    print_article(article);
                }
            }
        }
        Commands::Get { id } => match store.get_by_id(&id).await? {
            Some(article) => {
                if cli.json {
                    println!("{}", serde_json::to_string_pretty(&article)?);
                } else {
                    print_article(&article);
                }
            }
            None => println!("article {} not found", id),
        },
        Commands::Create { title, summary } => {
            let created = store.create(&NewArticle { title, summary }).await?;
            info!("✨ created article {}", created.id);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&created)?);
            } else {
                print_article(&created);
            }
        }
    }

    Ok(())
}
