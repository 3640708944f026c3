use clap::{Parser, Subcommand};
use url::Url;

use holonet::{
    client::ApiClient,
    config::Config,
    error::Error,
    model::character::Character,
    service::character::CharacterService,
    startup,
};

#[derive(Parser)]
#[command(name = "holonet", version, about = "Fetch joined character pages and filmographies from the SWAPI movie-trivia API")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch one page of characters joined with their homeworlds
    FetchPage {
        /// 1-based page number
        page: u32,
    },
    /// Fetch the films referenced by a character, in reference order
    FetchFilmography {
        /// Canonical URL of the character
        character_url: Url,
    },
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let cli = Cli::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => exit_with(e),
    };
    let client = match startup::build_api_client(&config) {
        Ok(client) => client,
        Err(e) => exit_with(e),
    };

    match run(&cli.command, &client).await {
        Ok(output) => println!("{output}"),
        Err(e) => exit_with(e),
    }
}

async fn run(command: &Command, client: &ApiClient) -> Result<String, Error> {
    let service = CharacterService::new(client);

    match command {
        Command::FetchPage { page } => {
            let page = service.fetch_character_page(*page).await?;
            serde_json::to_string_pretty(&page).map_err(|e| Error::Unknown(e.to_string()))
        }
        Command::FetchFilmography { character_url } => {
            let character: Character = client.fetch_one(character_url.clone()).await?;
            let films = service.fetch_filmography(&character).await?;
            serde_json::to_string_pretty(&films).map_err(|e| Error::Unknown(e.to_string()))
        }
    }
}

fn exit_with(error: Error) -> ! {
    eprintln!("error[{}]: {}", error.code(), error);
    std::process::exit(error.exit_code());
}
