use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use portfolio_server::adapters::inbound::http::dto::{
    ContactRequestDto, ContactResponseDto, HealthResponseDto,
};

#[derive(Parser, Debug)]
#[command(name = "portfolio-cli")]
#[command(about = "CLI for interacting with the portfolio server", long_about = None)]
struct Cli {
    /// Server URL
    #[arg(short, long, env = "PORTFOLIO_URL", default_value = "http://localhost:3000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Send a contact form submission
    Submit {
        /// Your name
        #[arg(long)]
        name: String,
        /// Your email address
        #[arg(long)]
        email: String,
        /// Company, if any
        #[arg(long)]
        company: Option<String>,
        /// Message (at least 10 characters)
        #[arg(long)]
        message: String,
    },

    /// Check that the server is up
    Health,
}

impl Cli {
    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.url.trim_end_matches('/'), path)
    }
}

async fn submit(client: &reqwest::Client, url: &str, request: &ContactRequestDto) -> Result<()> {
    let response = client
        .post(url)
        .json(request)
        .send()
        .await
        .with_context(|| format!("Failed to reach {}", url))?;

    let status = response.status();
    let body: ContactResponseDto = response
        .json()
        .await
        .with_context(|| format!("Unexpected response from server ({})", status))?;

    if body.success {
        println!("{}", body.message);
        return Ok(());
    }

    eprintln!("{}", body.message);
    for violation in body.errors.unwrap_or_default() {
        eprintln!("  {}: {}", violation.field, violation.message);
    }
    anyhow::bail!("Submission rejected ({})", status)
}

async fn health(client: &reqwest::Client, url: &str) -> Result<()> {
    let body: HealthResponseDto = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("Failed to reach {}", url))?
        .error_for_status()?
        .json()
        .await?;

    println!("{}", body.status);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let client = reqwest::Client::new();

    match &cli.command {
        Commands::Submit {
            name,
            email,
            company,
            message,
        } => {
            let request = ContactRequestDto {
                name: name.clone(),
                email: email.clone(),
                company: company.clone(),
                message: message.clone(),
            };
            submit(&client, &cli.endpoint("/api/contact"), &request).await
        }
        Commands::Health => health(&client, &cli.endpoint("/api/health")).await,
    }
}
