use clap::{Parser, Subcommand};
use serde_json::{json, Value};

#[derive(Parser)]
#[command(name = "projects-cli")]
#[command(about = "Command-line client for the projects API", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:3333")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Call the greeting endpoint
    Hello,
    /// List projects, optionally filtered by title substring
    List {
        #[arg(short, long)]
        title: Option<String>,
    },
    /// Create a project
    Create {
        #[arg(short, long)]
        title: String,
        #[arg(short, long)]
        owner: String,
    },
    /// Replace a project's title and owner
    Update {
        id: String,
        #[arg(short, long)]
        title: String,
        #[arg(short, long)]
        owner: String,
    },
    /// Delete a project
    Delete { id: String },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.url.trim_end_matches('/');

    let res = match cli.command {
        Commands::Hello => client.get(format!("{}/", base)).send().await?,
        Commands::List { title } => {
            let mut req = client.get(format!("{}/projects", base));
            if let Some(title) = title {
                req = req.query(&[("title", title)]);
            }
            req.send().await?
        }
        Commands::Create { title, owner } => {
            client
                .post(format!("{}/projects", base))
                .json(&json!({ "title": title, "owner": owner }))
                .send()
                .await?
        }
        Commands::Update { id, title, owner } => {
            client
                .put(format!("{}/projects/{}", base, id))
                .json(&json!({ "title": title, "owner": owner }))
                .send()
                .await?
        }
        Commands::Delete { id } => {
            client
                .delete(format!("{}/projects/{}", base, id))
                .send()
                .await?
        }
    };

    print_response(res).await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let text = res.text().await?;

    if !status.is_success() {
        eprintln!("Error: API returned status {}", status);
        if !text.is_empty() {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    if text.is_empty() {
        println!("{}", status);
        return Ok(());
    }

    let json: Value = serde_json::from_str(&text)?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
