use clap::{Parser, ValueEnum};

use gildedrose_fixture::{DEFAULT_LAST_DAY, Options, OutputFormat};

#[derive(Parser)]
#[command(name = "gildedrose-fixture")]
#[command(about = "Print daily stock snapshots for the Gilded Rose shop")]
#[command(version)]
pub struct Cli {
    /// Last day to print (snapshots cover day 0 through this day)
    #[arg(short, long, default_value_t = DEFAULT_LAST_DAY)]
    pub days: usize,

    /// Check every snapshot against the bundled golden transcript
    #[arg(long)]
    pub verify: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    pub format: Format,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

impl Cli {
    pub fn options(&self) -> Options {
        Options {
            last_day: self.days,
            verify: self.verify,
            format: match self.format {
                Format::Text => OutputFormat::Text,
                Format::Json => OutputFormat::Json,
            },
        }
    }
}
