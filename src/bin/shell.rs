//! ShelfDB Catalog Shell
//!
//! Interactive menu for managing a personal library catalog.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use shelfdb::{CatalogManager, Config, Record};
use tracing_subscriber::{fmt, EnvFilter};

/// Width of the longest bar in the chart and histogram views
const BAR_WIDTH: usize = 40;

/// ShelfDB Shell
#[derive(Parser, Debug)]
#[command(name = "shelfdb")]
#[command(about = "Personal library catalog with a CSV-backed store")]
#[command(version)]
struct Args {
    /// Catalog store file
    #[arg(short, long, default_value = "books.csv")]
    store: PathBuf,

    /// Number of bins for the publication-year histogram
    #[arg(long, default_value_t = 15)]
    year_bins: usize,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let args = Args::parse();

    tracing::info!("ShelfDB Shell v{}", shelfdb::VERSION);
    tracing::info!("Catalog store: {}", args.store.display());

    // Build config from args
    let config = Config::builder()
        .store_path(&args.store)
        .build();

    // Open the catalog manager
    let mut manager = match CatalogManager::open(config) {
        Ok(m) => m,
        Err(e) => {
            tracing::error!("Failed to open catalog: {}", e);
            std::process::exit(1);
        }
    };

    println!(
        "Loaded {} record(s) from {}",
        manager.record_count(),
        manager.store_path().display()
    );

    run_shell(&mut manager, args.year_bins);
}

/// Drive the menu until quit or end of input
fn run_shell(manager: &mut CatalogManager, year_bins: usize) {
    let mut lines = io::stdin().lock().lines();

    loop {
        print_menu();
        let Some(choice) = prompt(&mut lines, "> ") else {
            break;
        };

        match choice.trim() {
            "1" => load_catalog(manager, &mut lines),
            "2" => add_book(manager, &mut lines),
            "3" => list_books(manager),
            "4" => edit_book(manager, &mut lines),
            "5" => delete_books(manager, &mut lines),
            "6" => search_books(manager, &mut lines),
            "7" => println!("Total copies on the shelf: {}", manager.total_copies()),
            "8" => show_genre_counts(manager),
            "9" => show_genre_chart(manager),
            "10" => show_year_histogram(manager, year_bins),
            "q" | "Q" => break,
            "" => {}
            other => println!("Unknown choice: {other}"),
        }
    }

    println!("Bye.");
}

/// Print the action menu
fn print_menu() {
    println!();
    println!("==== ShelfDB catalog ====");
    println!(" 1. Load catalog from a file");
    println!(" 2. Add a book");
    println!(" 3. List books");
    println!(" 4. Edit a book");
    println!(" 5. Delete books by title");
    println!(" 6. Search by author/year");
    println!(" 7. Total copies");
    println!(" 8. Most common genres");
    println!(" 9. Genre distribution chart");
    println!("10. Publication-year histogram");
    println!(" q. Quit");
}

// ============================================================================
// Menu actions
// ============================================================================

/// Action 1: re-point the store and reload the table from disk
fn load_catalog<B: BufRead>(manager: &mut CatalogManager, lines: &mut io::Lines<B>) {
    let Some(path) = prompt(lines, "Path to catalog file: ") else {
        return;
    };
    let path = path.trim();
    if path.is_empty() {
        println!("Load cancelled.");
        return;
    }

    match manager.reload_from(path) {
        Ok(()) => println!(
            "Loaded {} record(s) from {}",
            manager.record_count(),
            manager.store_path().display()
        ),
        Err(e) => println!("Could not load the catalog: {e}"),
    }
}

/// Action 2: prompt for the five fields and append a record
fn add_book<B: BufRead>(manager: &mut CatalogManager, lines: &mut io::Lines<B>) {
    let Some(title) = prompt(lines, "Title: ") else { return };
    let Some(author) = prompt(lines, "Author: ") else { return };
    let Some(year) = prompt(lines, "Publication year: ") else { return };
    let Some(genre) = prompt(lines, "Genre: ") else { return };
    let Some(copies) = prompt(lines, "Copies: ") else { return };

    match manager.add_record(&title, &author, &year, &genre, &copies) {
        Ok(()) => println!("Added '{title}'."),
        Err(e) => println!("The book was not added: {e}"),
    }
}

/// Action 3: print the whole table
fn list_books(manager: &CatalogManager) {
    if manager.record_count() == 0 {
        println!("The catalog is empty.");
        return;
    }
    print_table(manager.list());
}

/// Action 4: overwrite one field of the first record matching a title
fn edit_book<B: BufRead>(manager: &mut CatalogManager, lines: &mut io::Lines<B>) {
    let Some(title) = prompt(lines, "Title to edit: ") else {
        return;
    };
    let Some(field) = prompt(lines, "Field (title, author, year, genre, copy_count): ") else {
        return;
    };
    let Some(value) = prompt(lines, "New value: ") else {
        return;
    };

    match manager.edit_record(&title, field.trim(), &value) {
        Ok(true) => println!("Updated '{title}'."),
        Ok(false) => println!("No book titled '{title}'."),
        Err(e) => println!("The edit was rejected: {e}"),
    }
}

/// Action 5: remove every record matching a title
fn delete_books<B: BufRead>(manager: &mut CatalogManager, lines: &mut io::Lines<B>) {
    let Some(title) = prompt(lines, "Title to delete: ") else {
        return;
    };
    if title.trim().is_empty() {
        println!("A title is required.");
        return;
    }

    match manager.delete_record(&title) {
        Ok(0) => println!("No book titled '{title}'."),
        Ok(n) => println!("Removed {n} record(s)."),
        Err(e) => println!("The delete failed: {e}"),
    }
}

/// Action 6: filter by author and/or publication year
fn search_books<B: BufRead>(manager: &CatalogManager, lines: &mut io::Lines<B>) {
    let Some(author) = prompt(lines, "Author (blank for any): ") else {
        return;
    };
    let Some(year) = prompt(lines, "Year (blank for any): ") else {
        return;
    };

    match manager.search(Some(&author), Some(&year)) {
        Ok(hits) if hits.is_empty() => println!("Nothing found."),
        Ok(hits) => print_table(&hits),
        Err(e) => println!("The search failed: {e}"),
    }
}

/// Action 8: ranked genre counts
fn show_genre_counts(manager: &CatalogManager) {
    let counts = manager.genre_counts();
    if counts.is_empty() {
        println!("The catalog is empty.");
        return;
    }

    println!("Most common genres:");
    for (rank, (genre, count)) in counts.iter().enumerate() {
        println!("{:>3}. {genre} ({count})", rank + 1);
    }
}

/// Action 9: per-genre share bars with percentages
fn show_genre_chart(manager: &CatalogManager) {
    let data = manager.genre_distribution_data();
    if data.is_empty() {
        println!("Nothing to chart.");
        return;
    }

    let total: usize = data.iter().map(|(_, count)| *count).sum();
    let widest = data
        .iter()
        .map(|(genre, _)| genre.chars().count())
        .max()
        .unwrap_or(0);

    for (genre, count) in &data {
        let share = *count as f64 / total as f64;
        let bar = "#".repeat((share * BAR_WIDTH as f64).round() as usize);
        println!("{genre:<widest$}  {bar} {:.1}%", share * 100.0);
    }
}

/// Action 10: equal-width binning of publication years
fn show_year_histogram(manager: &CatalogManager, bins: usize) {
    let rows = bin_years(&manager.year_histogram_data(), bins);
    if rows.is_empty() {
        println!("Nothing to chart.");
        return;
    }

    let tallest = rows
        .iter()
        .map(|(_, _, count)| *count)
        .max()
        .unwrap_or(1)
        .max(1);
    for (lo, hi, count) in &rows {
        let bar = "#".repeat(count * BAR_WIDTH / tallest);
        println!("{lo:7.1} .. {hi:7.1}  {bar} ({count})");
    }
}

/// Split years into `bins` equal-width ranges; one `(lo, hi, count)` per bin
///
/// Edge and offset arithmetic runs in `f64`, so a year span wider than the
/// `i64` range cannot overflow. The top edge belongs to the last bin. A
/// single distinct year collapses to one full-population row; an empty
/// input yields no rows.
fn bin_years(years: &[i64], bins: usize) -> Vec<(f64, f64, usize)> {
    if years.is_empty() {
        return Vec::new();
    }
    let bins = bins.max(1);

    let min = years.iter().copied().min().unwrap_or(0);
    let max = years.iter().copied().max().unwrap_or(0);

    // All years equal: one bin holds everything
    if min == max {
        return vec![(min as f64, max as f64, years.len())];
    }

    let lo_edge = min as f64;
    let width = (max as f64 - lo_edge) / bins as f64;

    let mut counts = vec![0usize; bins];
    for year in years {
        let idx = (((*year as f64 - lo_edge) / width) as usize).min(bins - 1);
        counts[idx] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| {
            let lo = lo_edge + i as f64 * width;
            (lo, lo + width, count)
        })
        .collect()
}

// ============================================================================
// Rendering helpers
// ============================================================================

/// Render records as an aligned table
fn print_table(records: &[Record]) {
    const LABELS: [&str; 5] = ["Title", "Author", "Year", "Genre", "Copies"];

    let mut widths = [
        LABELS[0].len(),
        LABELS[1].len(),
        LABELS[2].len(),
        LABELS[3].len(),
        LABELS[4].len(),
    ];
    for record in records {
        widths[0] = widths[0].max(record.title.chars().count());
        widths[1] = widths[1].max(record.author.chars().count());
        widths[2] = widths[2].max(record.year.to_string().len());
        widths[3] = widths[3].max(record.genre.chars().count());
        widths[4] = widths[4].max(record.copy_count.to_string().len());
    }

    print_row(&LABELS.map(String::from), &widths);
    let rule = widths.iter().sum::<usize>() + 2 * (widths.len() - 1);
    println!("{}", "-".repeat(rule));

    for record in records {
        let cells = [
            record.title.clone(),
            record.author.clone(),
            record.year.to_string(),
            record.genre.clone(),
            record.copy_count.to_string(),
        ];
        print_row(&cells, &widths);
    }
    println!("{} record(s)", records.len());
}

/// Print one table row; the numeric columns are right-aligned
fn print_row(cells: &[String; 5], widths: &[usize; 5]) {
    let mut line = String::new();
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            line.push_str("  ");
        }
        if i == 2 || i == 4 {
            line.push_str(&format!("{cell:>w$}", w = widths[i]));
        } else {
            line.push_str(&format!("{cell:<w$}", w = widths[i]));
        }
    }
    println!("{}", line.trim_end());
}

/// Print a prompt and read one line; `None` means end of input
fn prompt<B: BufRead>(lines: &mut io::Lines<B>, label: &str) -> Option<String> {
    print!("{label}");
    let _ = io::stdout().flush();
    match lines.next() {
        Some(Ok(line)) => Some(line),
        Some(Err(_)) | None => None,
    }
}
