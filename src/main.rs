use clap::Parser;
use moodlog::application::{
    init::init, list_history, mood_stats, today, ConfigService, DashboardService, LogMoodService,
};
use moodlog::cli::{
    format_dashboard, format_entry_list, format_mood_catalog, format_stats, Cli, Commands,
};
use moodlog::domain::format_date;
use moodlog::error::MoodlogError;
use moodlog::infrastructure::{FileSystemRepository, MoodlogRepository};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = moodlog::logging::init_logging(cli.verbose) {
        eprintln!("Warning: logging disabled: {:#}", e);
    }

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), MoodlogError> {
    match cli.command {
        Some(Commands::Init { path }) => {
            init(&path)?;
            println!("Initialized moodlog journal at {}", path.display());
            Ok(())
        }
        Some(Commands::Log { mood, note }) => {
            let repo = FileSystemRepository::discover()?;
            let config = repo.load_config()?;
            let today = today()?;

            let mut service = LogMoodService::new(repo.open_store(&config), config.catalog());
            let entry = service.execute(&mood, &note, today)?;
            println!("Logged {} for {}", entry.mood, format_date(entry.date));
            Ok(())
        }
        Some(Commands::Status { limit }) => show_dashboard(limit),
        Some(Commands::History { limit }) => {
            let repo = FileSystemRepository::discover()?;
            let config = repo.load_config()?;
            let store = repo.open_store(&config);

            print!("{}", terminate(format_entry_list(&list_history(&store, limit))));
            Ok(())
        }
        Some(Commands::Stats) => {
            let repo = FileSystemRepository::discover()?;
            let config = repo.load_config()?;
            let store = repo.open_store(&config);

            print!("{}", terminate(format_stats(&mood_stats(&store))));
            Ok(())
        }
        Some(Commands::Moods) => {
            let repo = FileSystemRepository::discover()?;
            let config = repo.load_config()?;
            print!("{}", format_mood_catalog(&config.catalog()));
            Ok(())
        }
        Some(Commands::Config { key, value, list }) => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!("storage_key = {}", config.storage_key);
                println!("recent_limit = {}", config.recent_limit);
                println!("moods = {}", config.moods.join(" "));
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    let val = service.get(&k)?;
                    println!("{}", val);
                    Ok(())
                }
            } else {
                println!("Usage: moodlog config [--list | <key> [<value>]]");
                println!("Valid keys: storage_key, recent_limit, moods, created");
                Ok(())
            }
        }
        None => show_dashboard(None),
    }
}

fn show_dashboard(limit: Option<usize>) -> Result<(), MoodlogError> {
    let repo = FileSystemRepository::discover()?;
    let config = repo.load_config()?;
    let store = repo.open_store(&config);
    let today = today()?;

    let dashboard =
        DashboardService::new(&store).execute(today, limit.unwrap_or(config.recent_limit));
    println!("Mood Tracker");
    print!("{}", terminate(format_dashboard(&dashboard)));
    Ok(())
}

fn terminate(mut text: String) -> String {
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}
