use chrono::Local;
use clap::Parser;
use log::LevelFilter;
use revtag::application::{init, ConfigService, RebuildCatalogService};
use revtag::cli::{format_review_items, parse_reference_date, Cli, Commands};
use revtag::domain::tags::{ParsedTag, TagParser, DEFAULT_TAG_PREFIX};
use revtag::domain::Catalog;
use revtag::error::RevtagError;
use revtag::infrastructure::{FileSystemRepository, VaultRepository};
use simplelog::{ColorChoice, Config as LogConfig, TermLogger, TerminalMode};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    let _ = TermLogger::init(
        level,
        LogConfig::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );
}

/// Discover the vault, resolve its configuration and run a full scan
fn rebuild_catalog() -> Result<Catalog, RevtagError> {
    let repo = FileSystemRepository::discover()?;
    let config = repo.load_config()?;

    let mut catalog = Catalog::new();
    RebuildCatalogService::new(&repo).execute(&config, &mut catalog)?;
    Ok(catalog)
}

fn run(cli: Cli) -> Result<(), RevtagError> {
    match cli.command {
        Some(Commands::Init { path }) => init::init(&path),
        Some(Commands::Config { key, value, list }) => {
            // Discover repository
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                // List all config
                let config = service.list()?;
                println!("tag_prefix = {}", config.tag_prefix);
                println!(
                    "include_subdirectories = {}",
                    config.include_subdirectories
                );
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    // Set config value
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    // Get config value
                    let val = service.get(&k)?;
                    println!("{}", val);
                    Ok(())
                }
            } else {
                // No key provided, show usage
                println!("Usage: revtag config [--list | <key> [<value>]]");
                println!("Valid keys: tag_prefix, include_subdirectories, created");
                Ok(())
            }
        }
        Some(Commands::List) => {
            let catalog = rebuild_catalog()?;
            let items: Vec<_> = catalog.items().iter().collect();
            println!("{}", format_review_items(&items).trim_end());
            Ok(())
        }
        Some(Commands::Pending { on }) => {
            let reference = match on {
                Some(input) => parse_reference_date(&input)?,
                None => Local::now().date_naive(),
            };

            let catalog = rebuild_catalog()?;
            let due = catalog.pending(reference);
            println!("{}", format_review_items(&due).trim_end());
            Ok(())
        }
        Some(Commands::Check { tag }) => {
            // Use the vault's configured prefix when run inside one
            let prefix = match FileSystemRepository::discover() {
                Ok(repo) => repo.load_config()?.tag_prefix,
                Err(_) => DEFAULT_TAG_PREFIX.to_string(),
            };

            match TagParser::new(&prefix).parse(&tag) {
                ParsedTag::Valid { date, .. } => {
                    println!("valid review tag, due {}", date.format("%d-%m-%Y"));
                }
                ParsedTag::Invalid { .. } => {
                    println!("not a valid review tag (prefix: {})", prefix);
                }
            }
            Ok(())
        }
        None => {
            // No command, show help
            println!("revtag - Review tag catalog for markdown notes");
            println!("Use --help for usage information");
            Ok(())
        }
    }
}
