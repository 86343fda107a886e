//! Tweet Analysis Script
//!
//! This script loads a JSON array of tweets and prints their timespan, the
//! users they mention, the guessed follows graph and the influencer ranking.
//!
//! Each tweet is an object with `id`, `author`, `text` and an RFC 3339
//! `timestamp`. The file path is the first argument, or `TWEETS_FILE`.
//! Set `RUST_LOG=debug` for per-step details.

use log::info;
use std::env;
use std::fs;

use tweetgraph::{
    get_mentioned_users, get_timespan, guess_follows_graph_with, top_influencers, GraphConfig,
    Tweet,
};

/// Number of influencers listed in the report.
const TOP_N: usize = 10;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    env_logger::init();

    let path = match env::args().nth(1).or_else(|| env::var("TWEETS_FILE").ok()) {
        Some(path) => path,
        None => {
            eprintln!("❌ Error: no input file given.");
            eprintln!();
            eprintln!("Usage:");
            eprintln!("  analyze_tweets <tweets.json>");
            eprintln!("  TWEETS_FILE=tweets.json analyze_tweets");
            std::process::exit(1);
        }
    };

    info!("Loading tweets from {}", path);
    let contents = fs::read_to_string(&path)?;
    let tweets: Vec<Tweet> = serde_json::from_str(&contents)?;

    println!("📊 Tweet Analysis");
    println!("=================");
    println!("Loaded {} tweets from {}", tweets.len(), path);
    println!();

    match get_timespan(&tweets) {
        Ok(span) => println!("🕒 Timespan: {} to {}", span.start(), span.end()),
        Err(e) => {
            eprintln!("❌ Cannot analyze: {}", e);
            std::process::exit(1);
        }
    }

    let mentioned = get_mentioned_users(&tweets);
    println!("💬 Mentioned users ({}):", mentioned.len());
    for user in &mentioned {
        println!("  @{}", user);
    }
    println!();

    let config = GraphConfig::from_env();
    let graph = guess_follows_graph_with(&tweets, &config);
    println!(
        "🔗 Follows graph: {} users, {} edges",
        graph.len(),
        graph.edge_count()
    );
    println!("{}", serde_json::to_string_pretty(&graph)?);
    println!();

    println!("⭐ Top influencers:");
    for (rank, (user, followers)) in top_influencers(&graph, TOP_N).iter().enumerate() {
        println!("  {:>2}. @{} ({} followers)", rank + 1, user, followers);
    }

    Ok(())
}
