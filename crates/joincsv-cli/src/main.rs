//! joincsv CLI
//!
//! Joins CSV files whose columns come in different orders, using a labels
//! CSV to say which column holds which heading.

mod logging;

use clap::Parser;
use joincsv_core::{merge_files, plan_from_file, Error, HeaderMode, MergeOptions};
use std::io::{self, BufWriter};
use std::path::PathBuf;

const LONG_ABOUT: &str = "\
Sample usage: joincsv labels.csv content1.csv content2.csv

joincsv accepts two or more CSV files as inputs.

The first CSV file must contain two or more rows of labels.
The first row in that CSV file should be your desired new headings in order.
The second (and subsequent) rows should have those headings in the
columns where those values live in your content files. A heading placed
in more than one column is filled with those values joined together.

The second, and remaining, CSV files should all contain contents.

Use -k/--keep if your content CSVs don't have header rows (otherwise
you'll lose your first row of data)!";

#[derive(Parser)]
#[command(name = "joincsv")]
#[command(about = "Join CSV files under the headings of a labels CSV", long_about = LONG_ABOUT)]
#[command(version)]
struct Cli {
    /// Keep the first row of every content file
    #[arg(short, long)]
    keep: bool,

    /// Derive headings from the labels instead of using the first labels row
    #[arg(short, long)]
    derive: bool,

    /// Print the resolved header plan as JSON and exit
    #[arg(long)]
    plan: bool,

    /// Log more (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Labels CSV followed by one or more content CSVs
    #[arg(value_name = "FILES")]
    files: Vec<PathBuf>,
}

impl Cli {
    fn merge_options(&self) -> MergeOptions {
        MergeOptions {
            header_mode: if self.derive {
                HeaderMode::Derived
            } else {
                HeaderMode::Explicit
            },
            skip_header: !self.keep,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        // Usage problems go where the user is looking
        if e.is_usage() {
            println!("Error: {}", e);
        } else {
            eprintln!("Error: {}", e);
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> joincsv_core::Result<()> {
    let options = cli.merge_options();

    if cli.plan {
        cmd_plan(&cli.files, options.header_mode)
    } else {
        cmd_merge(&cli.files, &options)
    }
}

fn cmd_merge(files: &[PathBuf], options: &MergeOptions) -> joincsv_core::Result<()> {
    let (labels, contents) = match files {
        [labels, contents @ ..] if !contents.is_empty() => (labels, contents),
        _ => {
            return Err(Error::Usage(
                "you need to provide at least two CSV files (labels and contents)".to_string(),
            ))
        }
    };

    let stdout = io::stdout();
    let writer = BufWriter::new(stdout.lock());
    merge_files(labels, contents, options, writer)?;

    Ok(())
}

fn cmd_plan(files: &[PathBuf], mode: HeaderMode) -> joincsv_core::Result<()> {
    let (labels, rest) = files
        .split_first()
        .ok_or_else(|| Error::Usage("you need to provide a labels CSV file".to_string()))?;
    if !rest.is_empty() {
        tracing::warn!(ignored = rest.len(), "content files are not read with --plan");
    }

    let plan = plan_from_file(labels, mode)?;
    println!("{}", serde_json::to_string_pretty(&plan)?);

    Ok(())
}
