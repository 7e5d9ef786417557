use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use journalapp::api::JournalApi;
use journalapp::config::JournalConfig;
use journalapp::error::{JournalError, Result};
use journalapp::model::{parse_tags, EntryDraft, JournalEntry, Mood};
use journalapp::query::{EntryQuery, SortKey, SortOrder};
use journalapp::store::FsBackend;
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod args;
mod render;
use args::{Cli, Commands};

fn main() {
    // Diagnostics are off unless JOURNAL_LOG is set (e.g. JOURNAL_LOG=debug)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_env("JOURNAL_LOG"))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let base_dir = default_data_dir()?;
    let config = JournalConfig::load(cli.data.as_deref().unwrap_or(&base_dir))?;

    // --data wins over configuration, configuration over the OS default
    let data_dir = cli
        .data
        .clone()
        .or_else(|| config.data_dir.clone())
        .unwrap_or(base_dir);

    let mut api = JournalApi::open(FsBackend::new(data_dir));

    if let Some(notice) = api.take_load_notice() {
        eprintln!("{}", notice.yellow());
    }

    if api.welcome_pending() {
        println!(
            "{}",
            "Welcome to your journal! Entries stay on this machine, in plain JSON.".cyan()
        );
        api.mark_welcome_seen().ok();
    }

    match cli.command {
        Some(Commands::Create {
            title,
            content,
            mood,
            tags,
        }) => {
            let draft = EntryDraft::new(title, content)
                .with_mood(parse_mood(mood.as_deref())?.unwrap_or_default())
                .with_tags(tags.as_deref().map(parse_tags).unwrap_or_default());
            let result = api.create_entry(draft)?;
            render::print_messages(&result.messages);
        }

        Some(Commands::List {
            search,
            mood,
            tag,
            sort,
            order,
            page,
            page_size,
        }) => {
            let params = EntryQuery {
                search_term: search,
                mood: parse_mood(mood.as_deref())?,
                tag,
                sort_key: sort.parse::<SortKey>().map_err(JournalError::Api)?,
                sort_order: order.parse::<SortOrder>().map_err(JournalError::Api)?,
            };
            let size = page_size.unwrap_or_else(|| config.page_size());
            let result = api.list_entries(&params, page, size)?;
            render::print_list(&result);
        }

        Some(Commands::View { position }) => {
            let id = api.resolve_position(position)?;
            let result = api.view_entry(id)?;
            render::print_entry(&result.affected[0]);
        }

        Some(Commands::Edit {
            position,
            title,
            content,
            mood,
            tags,
        }) => {
            let id = api.resolve_position(position)?;
            let current = current_entry(&api, id)?;

            // Full-field replacement; omitted flags keep current values
            let draft = EntryDraft {
                title: title.unwrap_or(current.title),
                content: content.unwrap_or(current.content),
                mood: parse_mood(mood.as_deref())?.unwrap_or(current.mood),
                tags: tags
                    .as_deref()
                    .map(parse_tags)
                    .unwrap_or(current.tags),
            };
            let result = api.update_entry(id, draft)?;
            render::print_messages(&result.messages);
        }

        Some(Commands::Delete { position, yes }) => {
            let id = api.resolve_position(position)?;
            let current = current_entry(&api, id)?;

            if !yes && !confirm(&format!("Delete entry '{}'? [y/N] ", current.title))? {
                println!("Aborted.");
                return Ok(());
            }

            let result = api.delete_entry(id)?;
            render::print_messages(&result.messages);
        }

        Some(Commands::Stats) => {
            let result = api.stats()?;
            if let Some(stats) = &result.stats {
                render::print_stats(stats);
            }
        }

        // Naked invocation: list the first page with defaults
        None => {
            let result = api.list_entries(&EntryQuery::default(), 1, config.page_size())?;
            render::print_list(&result);
        }
    }

    Ok(())
}

fn default_data_dir() -> Result<PathBuf> {
    ProjectDirs::from("com", "journal", "journal")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| JournalError::Store("could not determine a data directory".to_string()))
}

fn parse_mood(input: Option<&str>) -> Result<Option<Mood>> {
    match input {
        None => Ok(None),
        Some(s) => s
            .parse::<Mood>()
            .map(Some)
            .map_err(JournalError::Validation),
    }
}

fn current_entry(api: &JournalApi<FsBackend>, id: uuid::Uuid) -> Result<JournalEntry> {
    let mut result = api.view_entry(id)?;
    Ok(result.affected.remove(0))
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{}", prompt);
    std::io::stdout().flush().map_err(JournalError::Io)?;

    let mut answer = String::new();
    std::io::stdin()
        .read_line(&mut answer)
        .map_err(JournalError::Io)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}
