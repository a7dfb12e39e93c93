//! # CLI Layer
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: Convert shell arguments into typed commands via clap
//! 2. **Context Setup**: Load configuration, start logging, open the catalog
//! 3. **Dispatch**: Route commands to the API facade
//! 4. **Output Formatting**: Terminal text or JSON, see `render`
//! 5. **Error Handling**: Errors bubble up to `main`, which prints them and exits 1

use super::render::{self, OutputMode};
use super::setup::{parse_cli, Cli, Commands, ConfigCommands};
use crate::server;
use crate::telemetry;
use anyhow::{anyhow, Context, Result};
use reelapp::api::CatalogApi;
use reelapp::commands::CmdResult;
use reelapp::config::ReelConfig;
use reelapp::init::{config_dirs, load_config, open_context};
use reelapp::store::DataStore;
use std::path::PathBuf;

pub fn run() -> Result<()> {
    let cli = parse_cli();
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    let dirs = config_dirs(&cwd);
    let config = load_config(&dirs);
    telemetry::init(cli.verbose || config.debug);

    // Config does not need the catalog, so it must not create one either
    if let Some(Commands::Config { action }) = &cli.command {
        return handle_config(action.as_ref(), &config);
    }

    let mode = OutputMode::from_flag(cli.json);
    let Cli { command, data, .. } = cli;
    let ctx = open_context(&cwd, data, config, dirs);
    let mut api = ctx.api;

    match command {
        None | Some(Commands::List) => print_listing(&api.list_movies(), mode),
        Some(Commands::Add(args)) => {
            let result = api.create_movie(args.into())?;
            print_modification(&result, mode)
        }
        Some(Commands::Get { id }) => print_detail(&api.get_movie(id)?, mode),
        Some(Commands::Update(args)) => {
            let (id, changes) = args.into_update();
            let result = api.update_movie(id, changes)?;
            print_modification(&result, mode)
        }
        Some(Commands::Delete { id }) => {
            let result = api.delete_movie(id)?;
            print_modification(&result, mode)
        }
        Some(Commands::Year { year }) => print_listing(&api.movies_by_year(year), mode),
        Some(Commands::Director { name }) => print_listing(&api.movies_by_director(&name), mode),
        Some(Commands::Genre { genre }) => print_listing(&api.movies_by_genre(&genre), mode),
        Some(Commands::Search { query }) => print_listing(&api.search_movies(&query), mode),
        Some(Commands::Serve { host, port }) => {
            let mut config = ctx.config;
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(port) = port {
                config.port = port;
            }
            handle_serve(api, config)
        }
        Some(Commands::Config { action }) => handle_config(action.as_ref(), &ctx.config),
    }
}

fn print_listing(result: &CmdResult, mode: OutputMode) -> Result<()> {
    match mode {
        OutputMode::Json => println!("{}", render::render_json(result)?),
        OutputMode::Terminal => {
            print!("{}", render::render_movie_list(&result.listed_movies));
            print!("{}", render::render_messages(&result.messages));
        }
    }
    Ok(())
}

fn print_detail(result: &CmdResult, mode: OutputMode) -> Result<()> {
    match mode {
        OutputMode::Json => println!("{}", render::render_json(result)?),
        OutputMode::Terminal => {
            for movie in &result.listed_movies {
                print!("{}", render::render_movie_detail(movie));
            }
        }
    }
    Ok(())
}

fn print_modification(result: &CmdResult, mode: OutputMode) -> Result<()> {
    match mode {
        OutputMode::Json => println!("{}", render::render_json(result)?),
        OutputMode::Terminal => {
            print!("{}", render::render_messages(&result.messages));
            print!("{}", render::render_movie_list(&result.affected_movies));
        }
    }
    Ok(())
}

/// `reel config` prints every resolved setting, `reel config get <key>` one.
fn handle_config(action: Option<&ConfigCommands>, config: &ReelConfig) -> Result<()> {
    let table = match toml::Value::try_from(config).context("could not render configuration")? {
        toml::Value::Table(table) => table,
        _ => return Err(anyhow!("configuration is not a table")),
    };

    match action {
        None => {
            for (key, value) in &table {
                println!("{} = {}", key, format_toml_value(value));
            }
        }
        Some(ConfigCommands::Get { key }) => {
            let value = table
                .get(key)
                .ok_or_else(|| anyhow!("Unknown config key: {}", key))?;
            println!("{}", format_toml_value(value));
        }
    }
    Ok(())
}

fn handle_serve<S>(api: CatalogApi<S>, config: ReelConfig) -> Result<()>
where
    S: DataStore + Send + 'static,
{
    let runtime = tokio::runtime::Runtime::new().context("could not start async runtime")?;
    runtime
        .block_on(server::serve(api, config))
        .context("HTTP server failed")
}

/// Format a TOML value for display.
fn format_toml_value(value: &toml::Value) -> String {
    match value {
        toml::Value::String(s) => s.clone(),
        toml::Value::Array(items) => {
            let parts: Vec<String> = items.iter().map(format_toml_value).collect();
            format!("[{}]", parts.join(", "))
        }
        other => other.to_string(),
    }
}
