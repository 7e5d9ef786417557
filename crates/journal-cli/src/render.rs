//! Terminal rendering of structured command results. The library hands
//! back data; everything about columns, colors and relative times is
//! decided here.

use chrono::{DateTime, Utc};
use colored::*;
use journalapp::commands::stats::JournalStats;
use journalapp::commands::{CmdMessage, CmdResult, MessageLevel};
use journalapp::model::{JournalEntry, Mood};
use unicode_width::UnicodeWidthStr;

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => eprintln!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}

fn colorize_mood(mood: Mood, text: String) -> ColoredString {
    match mood {
        Mood::Happy => text.green(),
        Mood::Sad => text.blue(),
        Mood::Anxious => text.magenta(),
        Mood::Productive => text.cyan(),
        Mood::Neutral => text.dimmed(),
    }
}

fn mood_badge(mood: Mood) -> ColoredString {
    colorize_mood(mood, mood.name().to_string())
}

// Pad before colorizing: escape codes would throw off format!() widths.
fn mood_column(mood: Mood) -> ColoredString {
    colorize_mood(mood, format!("{:<10}", mood.name()))
}

fn relative(ts: DateTime<Utc>) -> String {
    let elapsed = (Utc::now() - ts).to_std().unwrap_or_default();
    timeago::Formatter::new().convert(elapsed)
}

fn pad_to(s: &str, width: usize) -> String {
    let current = UnicodeWidthStr::width(s);
    format!("{}{}", s, " ".repeat(width.saturating_sub(current)))
}

pub fn print_list(result: &CmdResult) {
    print_messages(&result.messages);
    if result.listed.is_empty() {
        return;
    }

    let title_width = result
        .listed
        .iter()
        .map(|le| UnicodeWidthStr::width(le.entry.title.as_str()))
        .max()
        .unwrap_or(0);

    for le in &result.listed {
        let entry = &le.entry;
        let tags = if entry.tags.is_empty() {
            String::new()
        } else {
            format!("[{}]", entry.tags.join(", "))
        };
        println!(
            "{:<4} {} {}  {}  {}",
            le.position.to_string().green(),
            pad_to(&entry.title, title_width).bold(),
            mood_column(entry.mood),
            relative(entry.created_at).dimmed(),
            tags.dimmed()
        );
        // Indented under the title column
        println!("     {}", entry.preview().dimmed());
    }

    if let Some(info) = result.page {
        if info.total_pages > 1 {
            println!(
                "\nPage {} of {} ({} entries)",
                info.page, info.total_pages, info.total_entries
            );
        }
    }
}

pub fn print_entry(entry: &JournalEntry) {
    println!("{}", entry.title.bold());
    println!(
        "{} · {} · {}",
        mood_badge(entry.mood),
        relative(entry.created_at),
        entry.created_at.format("%Y-%m-%d %H:%M UTC")
    );
    if entry.last_edited != entry.created_at {
        println!("{}", format!("edited {}", relative(entry.last_edited)).dimmed());
    }
    if !entry.tags.is_empty() {
        println!("{}", format!("tags: {}", entry.tags.join(", ")).dimmed());
    }
    println!("--------------------------------");
    println!("{}", entry.content);
    println!(
        "{}",
        format!("\n{} words", entry.word_count()).dimmed()
    );
}

pub fn print_stats(stats: &JournalStats) {
    println!("{}  {}", "Total entries:".bold(), stats.total_entries);
    println!("{}    {}", "Total words:".bold(), stats.total_words);
    if !stats.mood_counts.is_empty() {
        println!("{}", "Mood breakdown:".bold());
        for (mood, count) in &stats.mood_counts {
            println!("  {:<12} {}", mood_badge(*mood), count);
        }
    }
}
