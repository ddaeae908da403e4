use butchers_db::cli::Cli;
use butchers_db::config::Config;
use butchers_db::db::Session;
use butchers_db::errors::AppError;
use butchers_db::handlers::command;
use butchers_db::utils::console::Console;
use clap::Parser;
use dotenv::dotenv;
use std::process;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    if let Err(err) = run(&cli).await {
        eprintln!("{}", err);
        process::exit(err.exit_code());
    }
}

async fn run(cli: &Cli) -> Result<(), AppError> {
    let config = match &cli.database_url {
        Some(url) => Config::new(url.clone())?,
        None => Config::from_env()?,
    };

    let mut session = Session::open(&config).await?;
    let mut console = Console::stdout(!cli.no_color);
    command::run(cli.command(), &mut session, &mut console).await
}
