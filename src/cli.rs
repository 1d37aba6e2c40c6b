//! Command line arguments.

use std::path::PathBuf;

use clap::Parser;

use crate::config::Settings;
use crate::loader::Columns;

/// Load procurement bids into a binary search tree and browse them from a menu
#[derive(Parser, Debug)]
#[command(name = "bidtree")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Bid export to load (default: eBid_Monthly_Sales_Dec_2016.csv)
    #[arg(env = "BIDTREE_CSV")]
    pub csv_path: Option<PathBuf>,

    /// Bid id used by find and remove when none is typed
    pub bid_key: Option<String>,

    /// Column holding the bid id
    #[arg(long, default_value_t = Columns::default().id)]
    pub id_column: usize,

    /// Column holding the title
    #[arg(long, default_value_t = Columns::default().title)]
    pub title_column: usize,

    /// Column holding the amount
    #[arg(long, default_value_t = Columns::default().amount)]
    pub amount_column: usize,

    /// Column holding the fund
    #[arg(long, default_value_t = Columns::default().fund)]
    pub fund_column: usize,

    /// Increase log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub debug: u8,
}

impl Cli {
    /// Turns the parsed arguments into session settings.
    pub fn settings(&self) -> Settings {
        Settings {
            columns: Columns {
                id: self.id_column,
                title: self.title_column,
                amount: self.amount_column,
                fund: self.fund_column,
            },
            ..Settings::resolve(self.csv_path.clone(), self.bid_key.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    // https://docs.rs/clap/latest/clap/_derive/_tutorial/index.html#testing
    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_both_positionals() {
        let cli = Cli::try_parse_from(["bidtree", "bids.csv", "12345"]).unwrap();
        let settings = cli.settings();

        assert_eq!(settings.csv_path, PathBuf::from("bids.csv"));
        assert_eq!(settings.bid_key, "12345");
        assert_eq!(settings.columns, Columns::default());
    }

    #[test]
    fn test_column_overrides() {
        let cli = Cli::try_parse_from([
            "bidtree",
            "bids.csv",
            "--id-column",
            "0",
            "--title-column",
            "1",
            "-dd",
        ])
        .unwrap();
        let settings = cli.settings();

        assert_eq!(settings.bid_key, "98109");
        assert_eq!(settings.columns.id, 0);
        assert_eq!(settings.columns.title, 1);
        assert_eq!(settings.columns.fund, 8);
        assert_eq!(cli.debug, 2);
    }
}
