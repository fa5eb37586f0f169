use super::print::{print_config, print_houses, print_messages, print_record_list, print_sheets};
use super::setup::{Cli, Commands};
use anuario::api::{parse_edits, AnuarioApi, AnuarioPaths, ConfigAction};
use anuario::config::{self, AnuarioConfig};
use anuario::error::{AnuarioError, Result};
use anuario::filter::RecordFilter;
use anuario::labels::Locale;
use anuario::model::Record;
use anuario::store::fs::FileStore;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding the log filter directives.
const LOG_ENV: &str = "ANUARIO_LOG";

struct AppContext {
    api: AnuarioApi<FileStore>,
    locale: Locale,
    page_size: usize,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::List {
            search,
            houses,
            page,
            json,
        }) => handle_list(&ctx, search, houses, page, json),
        Some(Commands::View { slugs }) => handle_view(&ctx, slugs),
        Some(Commands::Create { slug, assignments }) => handle_create(&mut ctx, slug, assignments),
        Some(Commands::Update { slug, assignments }) => {
            handle_update(&mut ctx, slug, assignments)
        }
        Some(Commands::Delete { slugs }) => handle_delete(&mut ctx, slugs),
        Some(Commands::Export { slugs, output }) => handle_export(&ctx, slugs, output),
        Some(Commands::Report { slug }) => handle_report(&ctx, slug),
        Some(Commands::Houses) => handle_houses(&ctx),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        Some(Commands::Path) => handle_path(&ctx),
        None => handle_list(&ctx, None, Vec::new(), 1, false),
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let app_dir = config::app_dir()?;
    let config = AnuarioConfig::load(&app_dir).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "ignoring unreadable config");
        AnuarioConfig::default()
    });

    let data_path = cli
        .file
        .clone()
        .unwrap_or_else(|| app_dir.join(&config.data_file));
    tracing::debug!(path = %data_path.display(), "using records file");

    let store = FileStore::new(data_path);
    let api = AnuarioApi::new(store, AnuarioPaths { app_dir });

    Ok(AppContext {
        api,
        locale: cli.lang.unwrap_or(config.locale),
        page_size: config.page_size,
    })
}

fn handle_list(
    ctx: &AppContext,
    search: Option<String>,
    houses: Vec<String>,
    page: usize,
    json: bool,
) -> Result<()> {
    let filter = RecordFilter { search, houses };
    let result = ctx.api.list_records(&filter, page, ctx.page_size)?;

    if json {
        let out =
            serde_json::to_string_pretty(&result.listed_records).map_err(AnuarioError::Serialization)?;
        println!("{}", out);
        return Ok(());
    }

    print_record_list(&result.listed_records, result.page.as_ref(), ctx.page_size);
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &AppContext, slugs: Vec<String>) -> Result<()> {
    let result = ctx.api.view_records(&slugs)?;
    print_sheets(&result.listed_records, ctx.locale);
    print_messages(&result.messages);
    Ok(())
}

fn handle_create(ctx: &mut AppContext, slug: String, assignments: Vec<String>) -> Result<()> {
    let mut record = Record::new(slug);
    for edit in parse_edits(&assignments)? {
        edit.apply(&mut record);
    }
    let result = ctx.api.create_record(record)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_update(ctx: &mut AppContext, slug: String, assignments: Vec<String>) -> Result<()> {
    let result = ctx.api.update_record(&slug, &assignments)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, slugs: Vec<String>) -> Result<()> {
    let result = ctx.api.delete_records(&slugs)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_export(ctx: &AppContext, slugs: Vec<String>, output: Option<PathBuf>) -> Result<()> {
    let out_dir = match output {
        Some(dir) => dir,
        None => std::env::current_dir().map_err(AnuarioError::Io)?,
    };
    let result = ctx.api.export_records(&slugs, &out_dir, ctx.locale)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_report(ctx: &AppContext, slug: String) -> Result<()> {
    let result = ctx.api.report(&slug)?;
    if let Some(params) = &result.report {
        let out = serde_json::to_string_pretty(params).map_err(AnuarioError::Serialization)?;
        println!("{}", out);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_houses(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.houses()?;
    print_houses(&result.houses);
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = ctx.api.config(action)?;
    if result.messages.is_empty() {
        if let Some(config) = &result.config {
            print_config(config);
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_path(ctx: &AppContext) -> Result<()> {
    println!("{}", ctx.api.data_path().display());
    Ok(())
}
