use anyhow::{bail, Result};
use clap::Parser;
use yieldboard::{ui, Config, Dashboard, RegistrationError, Store};
use yieldboard_client::prelude::*;
use yieldboard_common::form::RegistrationForm;
use yieldboard_common::{JsonFileRepository, MemoryRepository};

mod cli;

fn preprocess() {
    // grant access to .env
    dotenv::dotenv().ok();

    // initialise logger
    env_logger::init();
}

#[tokio::main]
async fn main() -> Result<()> {
    preprocess();
    let cli = cli::Cli::parse();
    log::info!("Command line input recorded: {cli:#?}");

    let config = Config::from_env()?;
    let client = build_client(&config.user_agent, config.quote_timeout)?;

    let store = match cli.store {
        cli::StoreKind::Couch => Store::Couch(CouchRepository::new(
            client.clone(),
            &config.couchdb_url,
            &config.couchdb_database,
        )),
        cli::StoreKind::File => Store::File(JsonFileRepository::new(
            cli.store_path.clone().unwrap_or(config.store_path.clone()),
        )),
        cli::StoreKind::Memory => Store::Memory(MemoryRepository::new()),
    };
    log::info!("Using brand store: {}", store.describe());

    let quotes = HttpQuoteSource::new(client, &config.quote_api_url);
    let mut dashboard = Dashboard::new(quotes, store);

    // cli framework:
    // "> yieldboard <COMMAND>"
    match &cli.command {
        // "> yieldboard refresh"
        // re-list every brand
        cli::Commands::Refresh => {
            dashboard.refresh().await?;
        }

        // "> yieldboard register --brand Orix --code 8591 --desired-yield 4.0"
        // look up the quote, store the brand, then re-list
        cli::Commands::Register(args) => {
            let form = RegistrationForm::new(
                &args.brand,
                &args.code,
                args.desired_yield.as_deref().unwrap_or_default(),
            );

            let pb = ui::spinner("registering ...");
            let result = dashboard.register(&form).await;
            pb.finish_and_clear();

            match result {
                Ok(record) => log::info!("Stored {} ({})", record.brand_name, record.ticker_code),
                Err(RegistrationError::Invalid(errors)) => {
                    eprint!("{}", ui::render_field_errors(&errors));
                    bail!("registration rejected");
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    print!("{}", ui::render_board(dashboard.cards()));
    Ok(())
}
