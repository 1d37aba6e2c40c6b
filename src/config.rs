//! Runtime settings for a menu session.

use std::path::PathBuf;

use crate::loader::Columns;

/// File loaded when no path is given.
pub const DEFAULT_CSV_PATH: &str = "eBid_Monthly_Sales_Dec_2016.csv";
/// Key searched for when neither a path nor a key is given.
pub const DEFAULT_BID_KEY: &str = "98110";
/// Key searched for when only a path is given.
pub const PATH_ONLY_BID_KEY: &str = "98109";

/// Where bids come from and which bid the menu looks up by default.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// The bid export to load.
    pub csv_path: PathBuf,
    /// Default key for find and remove.
    pub bid_key: String,
    /// How rows map onto bid fields.
    pub columns: Columns,
}

impl Default for Settings {
    fn default() -> Self {
        Self::resolve(None, None)
    }
}

impl Settings {
    /// Fills in whatever wasn't given. The default key depends on whether a
    /// path was supplied.
    ///
    /// ```
    /// use bidtree::config::Settings;
    ///
    /// assert_eq!(Settings::resolve(None, None).bid_key, "98110");
    /// assert_eq!(Settings::resolve(Some("bids.csv".into()), None).bid_key, "98109");
    /// ```
    pub fn resolve(csv_path: Option<PathBuf>, bid_key: Option<String>) -> Self {
        let bid_key = bid_key.unwrap_or_else(|| {
            if csv_path.is_some() {
                PATH_ONLY_BID_KEY
            } else {
                DEFAULT_BID_KEY
            }
            .to_string()
        });

        Self {
            csv_path: csv_path.unwrap_or_else(|| PathBuf::from(DEFAULT_CSV_PATH)),
            bid_key,
            columns: Columns::default(),
        }
    }
}
