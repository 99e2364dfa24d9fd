use chrono::Local;
use clap::Parser;
use std::io::Read;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use workxlog::application::{
    active_user, init::init, list_weeks, show_week, ConfigService, InsightsOptions,
    InsightsService, LogWeekService, SeedDemoService, WeekInput,
};
use workxlog::cli::{
    format_dashboard, format_entry, format_suggestions, format_week_list, Cli, Commands,
};
use workxlog::domain::entry::lines_from_text;
use workxlog::domain::skills::{suggest, DEFAULT_SKILLS};
use workxlog::domain::week::current_week_start;
use workxlog::domain::WeekReference;
use workxlog::error::WorklogError;
use workxlog::infrastructure::config::DEFAULT_USER;
use workxlog::infrastructure::{FileSystemRepository, WorklogRepository};

const RECENT_WEEKS: usize = 12;

fn main() {
    let cli = Cli::parse();

    // Priority: RUST_LOG env var > --verbose flag > default (warn)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), WorklogError> {
    let today = Local::now().date_naive();

    match cli.command {
        Some(Commands::Init { path }) => init(&path, cli.user.as_deref().unwrap_or(DEFAULT_USER)),
        Some(Commands::Log {
            week,
            mut lines,
            stdin,
            skills,
            mood,
        }) => {
            let week = WeekReference::parse(&week)?.resolve_past(today)?;
            if stdin {
                let mut text = String::new();
                std::io::stdin().read_to_string(&mut text)?;
                lines.extend(lines_from_text(&text));
            }

            let repo = FileSystemRepository::discover()?;
            let user = active_user(&repo.load_config()?, cli.user.as_deref())?;
            let outcome = LogWeekService::new(repo).execute(
                &user,
                WeekInput {
                    week,
                    lines,
                    skills,
                    mood,
                },
            )?;

            let verb = if outcome.replaced { "Updated" } else { "Saved" };
            println!(
                "{} week of {} ({} lines, {} skills, mood {})",
                verb,
                outcome.entry.week_start.format("%d-%m-%Y"),
                outcome.entry.lines.len(),
                outcome.entry.skills.len(),
                outcome.entry.mood
            );
            Ok(())
        }
        Some(Commands::Show { week }) => {
            let week = WeekReference::parse(&week)?.resolve_past(today)?;
            let repo = FileSystemRepository::discover()?;
            let user = active_user(&repo.load_config()?, cli.user.as_deref())?;
            let entry = show_week(&repo, &user, week)?;
            print!("{}", format_entry(&entry));
            Ok(())
        }
        Some(Commands::Weeks { all }) => {
            let repo = FileSystemRepository::discover()?;
            let user = active_user(&repo.load_config()?, cli.user.as_deref())?;
            let limit = if all { None } else { Some(RECENT_WEEKS) };
            let weeks = list_weeks(&repo, &user, limit)?;
            println!("{}", format_week_list(&weeks).trim_end());
            Ok(())
        }
        Some(Commands::Insights { weeks, top }) => {
            let repo = FileSystemRepository::discover()?;
            let user = active_user(&repo.load_config()?, cli.user.as_deref())?;
            let dashboard = InsightsService::new(repo).execute(
                &user,
                InsightsOptions {
                    window_weeks: weeks,
                    top_skills: top,
                },
            )?;
            print!("{}", format_dashboard(&dashboard));
            Ok(())
        }
        Some(Commands::Suggest { draft, exclude }) => {
            let suggestions = suggest(&draft, DEFAULT_SKILLS, &exclude);
            println!("{}", format_suggestions(&suggestions).trim_end());
            Ok(())
        }
        Some(Commands::Demo) => {
            let repo = FileSystemRepository::discover()?;
            let user = active_user(&repo.load_config()?, cli.user.as_deref())?;
            let added = SeedDemoService::new(repo).execute(&user, current_week_start())?;
            if added == 0 {
                println!("Demo data already present");
            } else {
                println!("Demo data loaded! ({} weeks)", added);
            }
            Ok(())
        }
        Some(Commands::Config { key, value, list }) => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!("user = {}", config.user);
                println!("window = {}", config.window_weeks);
                println!("top = {}", config.top_skills);
                println!("highlights = {}", config.highlight_limit);
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
                println!("Usage: workxlog config [--list | <key> [<value>]]");
                println!("Valid keys: user, window, top, highlights, created");
                Ok(())
            }
        }
        None => {
            println!("workxlog - Weekly work log with skill and mood insights");
            println!("Use --help for usage information");
            Ok(())
        }
    }
}
