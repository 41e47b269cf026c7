use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;
use rusqlite::Connection;
use time::{Date, Duration, OffsetDateTime};

use fintrack::{Transaction, create_transaction, initialize_db};

/// A utility for creating a test database for the fintrack server.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,
}

/// Amounts and descriptions repeated every month, paired with the day of the
/// month they land on.
const MONTHLY_TRANSACTIONS: [(u8, f64, &str); 5] = [
    (1, 2500.0, "Salary"),
    (3, -1200.0, "Rent"),
    (10, -85.5, "Power bill"),
    (14, -212.35, "Groceries"),
    (22, -48.0, "Phone plan"),
];

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    match output_path.extension() {
        None => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        Some(extension) if extension.is_empty() => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        _ => {}
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let conn = Connection::open(output_path)?;

    initialize_db(&conn)?;

    println!("Creating test transactions...");

    let today = OffsetDateTime::now_utc().date();
    let mut month_start = today.replace_day(1)?;
    let mut count = 0;

    // Roughly two years of history so the dashboard year selector has options.
    for _ in 0..24 {
        for (day, amount, description) in MONTHLY_TRANSACTIONS {
            let date = month_start.replace_day(day)?;
            if date > today {
                continue;
            }

            create_transaction(Transaction::build(amount, date, description), &conn)?;
            count += 1;
        }

        month_start = previous_month(month_start)?;
    }

    println!("Created {count} transactions. Success!");

    Ok(())
}

fn previous_month(month_start: Date) -> Result<Date, time::error::ComponentRange> {
    let last_day_of_previous_month = month_start - Duration::days(1);
    last_day_of_previous_month.replace_day(1)
}
