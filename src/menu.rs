//! The interactive menu. It reads choices from any [`BufRead`] and prints to
//! any [`Write`], so sessions can be scripted in tests.

use std::io::{BufRead, Write};

use tracing::{debug_span, error};

use crate::bid::Bid;
use crate::config::Settings;
use crate::error::Result;
use crate::loader;
use crate::timer::Stopwatch;
use crate::tree::{Removal, Tree};

/// One entry of the menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Choice {
    /// Load the configured file.
    Load,
    /// List all bids in key order.
    DisplayAll,
    /// Look up one bid.
    Find,
    /// Remove one bid.
    Remove,
    /// List bids node first.
    DisplayPreOrder,
    /// List bids node last.
    DisplayPostOrder,
    /// Leave the menu.
    Exit,
}

impl Choice {
    /// Parses a line of user input.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Load),
            "2" => Some(Self::DisplayAll),
            "3" => Some(Self::Find),
            "4" => Some(Self::Remove),
            "5" => Some(Self::DisplayPreOrder),
            "6" => Some(Self::DisplayPostOrder),
            "9" => Some(Self::Exit),
            _ => None,
        }
    }
}

const MENU: &str = "Menu:
  1. Load Bids
  2. Display All Bids
  3. Find Bid
  4. Remove Bid
  5. Display Bids Pre-Order
  6. Display Bids Post-Order
  9. Exit";

/// A menu session over one tree.
pub struct Menu<R, W> {
    settings: Settings,
    tree: Tree,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    /// Creates a session with an empty tree.
    pub fn new(settings: Settings, input: R, output: W) -> Self {
        Self {
            settings,
            tree: Tree::new(),
            input,
            output,
        }
    }

    /// Runs until the user exits or input ends.
    pub fn run(&mut self) -> Result<()> {
        loop {
            writeln!(self.output, "{}", MENU)?;
            write!(self.output, "Enter choice: ")?;
            self.output.flush()?;

            let line = match self.read_line()? {
                Some(line) => line,
                None => break,
            };

            match Choice::parse(&line) {
                Some(Choice::Exit) => break,
                Some(choice) => self.dispatch(choice)?,
                None => writeln!(self.output, "Invalid choice.")?,
            }
        }

        writeln!(self.output, "Good bye.")?;
        Ok(())
    }

    fn dispatch(&mut self, choice: Choice) -> Result<()> {
        let _span = debug_span!("dispatch", ?choice).entered();
        match choice {
            Choice::Load => self.load(),
            Choice::DisplayAll | Choice::DisplayPreOrder | Choice::DisplayPostOrder => {
                self.list(choice)
            }
            Choice::Find => self.find(),
            Choice::Remove => self.remove(),
            Choice::Exit => Ok(()),
        }
    }

    fn load(&mut self) -> Result<()> {
        let watch = Stopwatch::start();
        writeln!(
            self.output,
            "Loading CSV file {}",
            self.settings.csv_path.display()
        )?;

        match loader::load_bids(
            &self.settings.csv_path,
            &self.settings.columns,
            &mut self.tree,
        ) {
            Ok(loaded) => {
                for column in &loaded.header {
                    write!(self.output, "{} | ", column)?;
                }
                writeln!(self.output)?;
                writeln!(self.output, "{} bids read", loaded.count)?;
            }
            Err(e) => {
                error!("{}", e);
                writeln!(self.output, "{}", e)?;
            }
        }

        writeln!(self.output, "{}", watch.elapsed())?;
        Ok(())
    }

    /// Prints every bid in the traversal order matching `choice`.
    fn list(&mut self, choice: Choice) -> Result<()> {
        let output = &mut self.output;
        let mut failure = None;
        let sink = |bid: &Bid| {
            if failure.is_none() {
                if let Err(e) = writeln!(output, "{}", bid.detail()) {
                    failure = Some(e);
                }
            }
        };

        match choice {
            Choice::DisplayPreOrder => self.tree.pre_order(sink),
            Choice::DisplayPostOrder => self.tree.post_order(sink),
            _ => self.tree.in_order(sink),
        }

        match failure {
            Some(e) => Err(e.into()),
            None => Ok(()),
        }
    }

    fn find(&mut self) -> Result<()> {
        let key = self.prompt_key()?;

        let watch = Stopwatch::start();
        let found = self.tree.search(&key);
        let elapsed = watch.elapsed();

        match found {
            Some(bid) => writeln!(self.output, "{}", bid)?,
            None => writeln!(self.output, "Bid Id {} not found.", key)?,
        }
        writeln!(self.output, "{}", elapsed)?;
        Ok(())
    }

    fn remove(&mut self) -> Result<()> {
        let key = self.prompt_key()?;

        match self.tree.remove(&key) {
            Removal::Removed(bid) => writeln!(self.output, "Deleting node: {}", bid.detail())?,
            Removal::NotFound => writeln!(self.output, "Bid not found, returning...")?,
            Removal::Unmatched => {}
        }
        Ok(())
    }

    /// Asks for a bid id, falling back to the configured one on a blank line.
    fn prompt_key(&mut self) -> Result<String> {
        write!(self.output, "Enter bid id [{}]: ", self.settings.bid_key)?;
        self.output.flush()?;

        let key = match self.read_line()? {
            Some(line) if !line.trim().is_empty() => line.trim().to_string(),
            _ => self.settings.bid_key.clone(),
        };
        Ok(key)
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}
