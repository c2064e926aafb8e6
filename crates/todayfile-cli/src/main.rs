use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;
use todayfile_config::Config;
use todayfile_engine::{Document, io as notes};

/// Maintains a directory of plain-text daily note files: startup
/// checklist, notes, log, and a prioritized task list.
#[derive(Debug, Parser)]
#[command(name = "todayfile", version, about)]
struct Cli {
    /// Directory in which the daily note files reside.
    #[arg(short, long)]
    dir: Option<PathBuf>,

    /// Read from stdin and write to stdout instead of touching note
    /// files.
    #[arg(short = 'i', long)]
    pipe: bool,

    /// Skip assigning identifiers and dates to new tasks.
    #[arg(long)]
    no_update: bool,

    /// Skip sorting tasks by priority.
    #[arg(long)]
    no_sort: bool,

    /// Drop DONE tasks, reset the startup checklist, and empty the log.
    /// This otherwise happens only when a new day's file is generated.
    #[arg(short, long)]
    clear: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .init();
    run(&Cli::parse())
}

fn run(cli: &Cli) -> Result<()> {
    if cli.pipe {
        let mut doc =
            Document::parse(io::stdin().lock()).context("failed to parse today file")?;
        apply(&mut doc, cli);
        let stdout = io::stdout();
        let mut out = BufWriter::new(stdout.lock());
        doc.write(&mut out)?;
        out.flush()?;
        return Ok(());
    }

    let dir = notes_dir(cli)?;
    let today = Local::now().date_naive();

    let today_path = notes::note_path(&dir, today);
    if today_path.exists() {
        let mut doc = parse_note(&today_path)?;
        apply(&mut doc, cli);
        write_note(&dir, today, &doc)
    } else {
        generate_today(&dir, today)
    }
}

fn apply(doc: &mut Document, cli: &Cli) {
    if !cli.no_update {
        doc.update();
    }
    if !cli.no_sort {
        doc.sort();
    }
    if cli.clear {
        doc.clear();
    }
}

/// Starts today's note from the most recent one, carrying unfinished
/// tasks forward and dropping finished work. With no notes at all, an
/// empty document is written.
fn generate_today(dir: &Path, today: NaiveDate) -> Result<()> {
    let doc = match notes::most_recent_note(dir)? {
        Some(path) => {
            let mut doc = parse_note(&path)?;
            doc.update();
            doc.sort();
            doc.clear();
            doc
        }
        None => Document::default(),
    };
    write_note(dir, today, &doc)
}

fn parse_note(path: &Path) -> Result<Document> {
    let file =
        File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    Document::parse(BufReader::new(file))
        .with_context(|| format!("failed to parse {}", path.display()))
}

fn write_note(dir: &Path, date: NaiveDate, doc: &Document) -> Result<()> {
    if let Err(err) = notes::back_up(dir, date) {
        log::warn!("failed to back up today file: {err}");
    }
    let path = notes::note_path(dir, date);
    let file =
        File::create(&path).with_context(|| format!("failed to write {}", path.display()))?;
    let mut out = BufWriter::new(file);
    doc.write(&mut out)?;
    out.flush()?;
    Ok(())
}

fn notes_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.dir {
        return Ok(dir.clone());
    }
    if let Some(config) = Config::load()? {
        return Ok(config.notes_path);
    }
    Ok(todayfile_config::default_notes_path())
}
