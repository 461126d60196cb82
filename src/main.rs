//! blog-router server binary.

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "blog-router")]
#[command(about = "Serve the blog's route table", long_about = None)]
struct Args {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "config/app.toml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    blog_router::lifecycle::run(&args.config).await?;
    Ok(())
}
