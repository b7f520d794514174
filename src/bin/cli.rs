use anyhow::Result;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;
use url::Url;

use senti_hotel::{render_prediction, request_prediction, ReviewForm};

#[derive(Parser)]
#[command(author, version, about = "Analyze hotel reviews from the terminal", long_about = None)]
struct Args {
    /// Base URL of a running SentiHotel server
    #[arg(short, long, env = "SENTI_HOTEL_URL", default_value = "http://127.0.0.1:25566")]
    url: Url,

    /// Analyze a single review and exit instead of reading reviews from stdin
    #[arg(short, long)]
    review: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or(EnvFilter::new("WARN")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let client = reqwest::Client::new();
    let mut form = ReviewForm::new();

    if let Some(review) = args.review {
        form.set_input(review);
        analyze(&client, &args.url, &mut form).await;
        return Ok(());
    }

    eprintln!("Enter a hotel review per line, Ctrl-D to quit.");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        form.set_input(line);
        analyze(&client, &args.url, &mut form).await;
    }
    Ok(())
}

async fn analyze(client: &reqwest::Client, url: &Url, form: &mut ReviewForm) {
    let Some(review) = form.submit() else {
        return;
    };
    eprintln!("Analyzing...");
    let outcome = request_prediction(client, url, &review).await;
    let succeeded = outcome.is_ok();
    form.complete(outcome);

    if let (true, Some(prediction)) = (succeeded, form.prediction()) {
        println!("{}\n", render_prediction(prediction));
    }
}
