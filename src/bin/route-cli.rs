use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde_json::{json, Value};

use blog_router::config::load_config;
use blog_router::controllers::{default_callbacks, default_registry};
use blog_router::http::RequestContext;
use blog_router::routing::Router;

#[derive(Parser)]
#[command(name = "route-cli")]
#[command(about = "Inspect and test the blog route table", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "config/app.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the config and print the compiled route table
    Check,
    /// Show which route a request path resolves to
    Match {
        /// Request path, e.g. /cat-id-prop/books/42/title
        path: String,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(&cli.config)?;
    let router = Router::from_config(&config.routes, &default_callbacks())?;

    match cli.command {
        Commands::Check => {
            let registry = default_registry();
            let routes: Vec<Value> = router
                .table()
                .iter()
                .map(|route| {
                    json!({
                        "index": route.index(),
                        "kind": route.kind().name(),
                        "source": route.source(),
                        "handler": route.handler().to_string(),
                        "registered": registry.contains(route.handler().target()),
                        "data": route.data(),
                    })
                })
                .collect();
            print_json(&json!({ "app": config.app_name, "routes": routes }))?;
        }
        Commands::Match { path } => {
            let request = RequestContext::new(path).with_base(&config.listener.base_path);
            let Some(route_path) = request.route_path() else {
                print_json(&json!({ "matched": false, "reason": "outside base path" }))?;
                return Ok(());
            };

            let matched = router.match_url(route_path)?;
            let output = match matched.route() {
                Some(route) => json!({
                    "matched": true,
                    "index": route.index(),
                    "handler": route.handler().to_string(),
                    "params": matched.params().to_json(),
                    "data": route.data(),
                }),
                None => json!({ "matched": false }),
            };
            print_json(&output)?;
        }
    }

    Ok(())
}

fn print_json(value: &Value) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
