use anyhow::Result;
use clap::Parser;
use std::io::Write;
use userdash::cli::{Cli, Commands, ListArgs};
use userdash::commands::{self, ListOptions};
use userdash::config::{self, UserdashConfig};
use userdash::formatting::{formatter_for, FormattingConfig};
use userdash::observability::{self, SessionPhase};
use userdash::pipeline::{DateRange, Filters, SortConfig, SortDirection, SortKey};

fn main() -> Result<()> {
    observability::install_panic_hook();
    let cli = Cli::parse();
    observability::init_tracing(cli.verbose);

    let config = {
        let _phase = observability::set_phase(SessionPhase::LoadingConfig);
        match &cli.config {
            Some(path) => config::load_config_from(path)?,
            None => config::load_config(),
        }
    };

    match cli.command {
        Commands::Browse { data } => {
            if let Some(log_file) = &config.logging.file {
                observability::set_log_file(log_file)?;
            }
            let path = commands::resolve_data_path(data, &config)?;
            let _dataset = observability::set_dataset(&path);
            let records = commands::load_records(&path)?;
            commands::run_browse(records, config.reveal_policy())
        }
        Commands::List(args) => handle_list_command(args, &config),
        Commands::Summary { data, format, plain } => {
            let path = commands::resolve_data_path(data, &config)?;
            let _dataset = observability::set_dataset(&path);
            let records = commands::load_records(&path)?;
            let mut out = std::io::stdout().lock();
            commands::run_summary(&records, format, create_formatting_config(plain), &mut out)?;
            out.flush()?;
            Ok(())
        }
        Commands::Init { force } => {
            let dir = std::env::current_dir()?;
            let path = commands::init_config(&dir, force)?;
            let fmt = formatter_for(FormattingConfig::from_env());
            println!("{}", fmt.success(&format!("Created {}", path.display())));
            Ok(())
        }
    }
}

fn handle_list_command(args: ListArgs, config: &UserdashConfig) -> Result<()> {
    let path = commands::resolve_data_path(args.data.clone(), config)?;
    let _dataset = observability::set_dataset(&path);
    let records = commands::load_records(&path)?;
    let options = build_list_options(args);

    let mut out = std::io::stdout().lock();
    commands::run_list(records, config.reveal_policy(), &options, &mut out)?;
    out.flush()?;
    Ok(())
}

fn create_formatting_config(plain: bool) -> FormattingConfig {
    if plain {
        FormattingConfig::plain()
    } else {
        FormattingConfig::from_env()
    }
}

fn build_date_range(args: &ListArgs) -> Option<DateRange> {
    if args.from.is_none() && args.to.is_none() {
        return None;
    }
    Some(DateRange::new(args.from, args.to))
}

fn build_sort_config(key: Option<&str>, desc: bool) -> SortConfig {
    match key {
        Some(key) => {
            let direction = if desc {
                SortDirection::Descending
            } else {
                SortDirection::Ascending
            };
            SortConfig::new(SortKey::parse(key), direction)
        }
        None => SortConfig::default(),
    }
}

fn build_list_options(args: ListArgs) -> ListOptions {
    let date_range = build_date_range(&args);
    ListOptions {
        filters: Filters {
            status: args.status,
            name: args.name.filter(|name| !name.is_empty()),
            date_range,
        },
        sort: build_sort_config(args.sort.as_deref(), args.desc),
        page: args.page,
        reveal_all: args.all,
        format: args.format,
        formatting: create_formatting_config(args.plain),
    }
}
