//! Interactive menu shell.
//!
//! [`Shell`] owns an [`Inventory`] and drives it from line-based input. It is
//! generic over the reader and writer so sessions can be scripted in tests.
//! All prompts, validation and formatting live here; the inventory itself
//! never touches the terminal.

use std::io::{BufRead, Write};

use tracing::{debug, warn};

use crate::config::ShellConfig;
use crate::core::{
    Inventory, Item, MAX_CATEGORY_LEN, MAX_NAME_LEN, MAX_PRIORITY, MIN_PRIORITY, SearchOutcome,
    SortKey,
};
use crate::error::{InputError, ShellError};

const RULE: &str = "===========================================================";

/// Whether the session keeps going after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    /// Input was closed.
    Exit,
}

/// Checks a free-text field: non-empty and at most `max_len` characters.
pub fn parse_text(line: &str, max_len: usize) -> Result<&str, InputError> {
    if line.is_empty() {
        Err(InputError::Empty)
    } else if line.chars().count() > max_len {
        Err(InputError::TooLong { max: max_len })
    } else {
        Ok(line)
    }
}

/// Parses a whole line as an integer in `[min, max]`.
pub fn parse_int(line: &str, min: i64, max: i64) -> Result<i64, InputError> {
    let line = line.trim();
    if line.is_empty() {
        return Err(InputError::Empty);
    }
    let value: i64 = line.parse().map_err(|_| InputError::NotAnInteger)?;
    if value < min || value > max {
        return Err(InputError::OutOfRange { min, max });
    }
    Ok(value)
}

/// A menu-driven session over one inventory.
pub struct Shell<R, W> {
    input: R,
    output: W,
    inventory: Inventory,
    config: ShellConfig,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W, config: ShellConfig) -> Self {
        Self {
            input,
            output,
            inventory: Inventory::new(),
            config,
        }
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Ends the session, handing back the inventory and the writer.
    pub fn into_parts(self) -> (Inventory, W) {
        (self.inventory, self.output)
    }

    /// Runs the menu loop until the user exits or input ends.
    pub fn run(&mut self) -> Result<(), ShellError> {
        loop {
            self.print_menu()?;
            let Some(choice) = self.read_int("Choose an option: ", 0, 5)? else {
                break;
            };
            debug!(choice, "menu option selected");

            let flow = match choice {
                1 => self.add_item()?,
                2 => self.discard_item()?,
                3 => self.list_items()?,
                4 => self.sort_menu()?,
                5 => self.search_item()?,
                _ => {
                    writeln!(self.output, "\nACTIVATING ESCAPE TOWER... Good luck!")?;
                    break;
                }
            };
            if flow == Flow::Exit || self.pause()? == Flow::Exit {
                break;
            }
        }
        self.output.flush()?;
        Ok(())
    }

    fn print_menu(&mut self) -> Result<(), ShellError> {
        let status = if self.inventory.is_sorted_by_name() {
            "SORTED"
        } else {
            "NOT SORTED"
        };
        writeln!(self.output, "\n{RULE}")?;
        writeln!(self.output, "    ESCAPE PLAN - ISLAND CODE (MASTER LEVEL)")?;
        writeln!(self.output, "{RULE}")?;
        writeln!(
            self.output,
            "Items in backpack: {}/{}",
            self.inventory.len(),
            self.inventory.capacity()
        )?;
        writeln!(self.output, "Name sort status: {status}\n")?;
        writeln!(self.output, "1. Add Item")?;
        writeln!(self.output, "2. Discard Item")?;
        writeln!(self.output, "3. List Items (Inventory)")?;
        writeln!(self.output, "4. Organize Backpack (Sort Items)")?;
        writeln!(self.output, "5. Binary Search for Key Item (by name)")?;
        writeln!(self.output, "0. ACTIVATE ESCAPE TOWER (Exit)")?;
        writeln!(self.output, "{RULE}")?;
        Ok(())
    }

    fn print_items(&mut self) -> Result<(), ShellError> {
        writeln!(self.output, "\n--- Items ---")?;
        for (i, item) in self.inventory.iter().enumerate() {
            writeln!(self.output, "{:2}) {item}", i + 1)?;
        }
        writeln!(self.output, "-------------------")?;
        Ok(())
    }

    fn add_item(&mut self) -> Result<Flow, ShellError> {
        if self.inventory.is_full() {
            warn!(capacity = self.inventory.capacity(), "add rejected, backpack full");
            writeln!(self.output, "Backpack is full! Remove something before adding.")?;
            return Ok(Flow::Continue);
        }

        writeln!(self.output, "\n-- Add Item --")?;
        let prompt = format!("Name (up to {MAX_NAME_LEN} chars): ");
        let Some(name) = self.read_text(&prompt, MAX_NAME_LEN)? else {
            return Ok(Flow::Exit);
        };
        let Some(category) = self.read_text(
            &format!("Category (control/support/propulsion, up to {MAX_CATEGORY_LEN} chars): "),
            MAX_CATEGORY_LEN,
        )?
        else {
            return Ok(Flow::Exit);
        };
        let Some(priority) = self.read_int(
            &format!("Priority ({MIN_PRIORITY} to {MAX_PRIORITY}): "),
            i64::from(MIN_PRIORITY),
            i64::from(MAX_PRIORITY),
        )?
        else {
            return Ok(Flow::Exit);
        };

        // parse_int kept the value inside the priority bounds.
        let item = Item::new(name, category, priority as u8);
        match self.inventory.insert(item) {
            Ok(()) => writeln!(self.output, "Item added!")?,
            Err(err) => writeln!(self.output, "{err}")?,
        }
        Ok(Flow::Continue)
    }

    fn discard_item(&mut self) -> Result<Flow, ShellError> {
        if self.inventory.is_empty() {
            writeln!(self.output, "Backpack is empty. Nothing to discard.")?;
            return Ok(Flow::Continue);
        }

        self.print_items()?;
        let len = self.inventory.len() as i64;
        let Some(position) = self.read_int("Enter the number of the item to discard: ", 1, len)?
        else {
            return Ok(Flow::Exit);
        };
        match self.inventory.remove_at(position as usize - 1) {
            Ok(_) => writeln!(self.output, "Item discarded.")?,
            Err(err) => writeln!(self.output, "{err}")?,
        }
        Ok(Flow::Continue)
    }

    fn list_items(&mut self) -> Result<Flow, ShellError> {
        if self.inventory.is_empty() {
            writeln!(self.output, "Backpack is empty.")?;
        } else {
            self.print_items()?;
        }
        Ok(Flow::Continue)
    }

    fn sort_menu(&mut self) -> Result<Flow, ShellError> {
        if self.inventory.len() <= 1 {
            writeln!(self.output, "Too few items. No need to sort.")?;
            return Ok(Flow::Continue);
        }

        writeln!(self.output, "\n-- Organize Backpack (Sort Items) --")?;
        writeln!(self.output, "1) Bubble Sort by NAME")?;
        writeln!(self.output, "2) Insertion Sort by CATEGORY")?;
        writeln!(self.output, "3) Selection Sort by PRIORITY")?;
        writeln!(self.output, "0) Back")?;
        let key = match self.read_int("Choose: ", 0, 3)? {
            None => return Ok(Flow::Exit),
            Some(1) => SortKey::Name,
            Some(2) => SortKey::Category,
            Some(3) => SortKey::Priority,
            Some(_) => return Ok(Flow::Continue),
        };

        let report = self.inventory.sort(key);
        writeln!(
            self.output,
            "\nSorted by {} ({}).\nComparisons: {} | Time: {:.6}s",
            report.key,
            report.key.algorithm(),
            report.comparisons,
            report.elapsed.as_secs_f64()
        )?;
        self.print_items()?;
        Ok(Flow::Continue)
    }

    fn search_item(&mut self) -> Result<Flow, ShellError> {
        if !self.inventory.is_sorted_by_name() {
            warn!("search rejected, backpack not sorted by name");
            writeln!(self.output, "Status: NOT SORTED by name.")?;
            writeln!(self.output, "Use option 4 -> Bubble Sort by NAME before searching.")?;
            return Ok(Flow::Continue);
        }
        if self.inventory.is_empty() {
            writeln!(self.output, "Backpack is empty. Nothing to search.")?;
            return Ok(Flow::Continue);
        }

        let Some(key) = self.read_text("Enter the NAME of the key item: ", MAX_NAME_LEN)? else {
            return Ok(Flow::Exit);
        };
        let report = match self.inventory.search_by_name(&key) {
            Ok(report) => report,
            Err(err) => {
                writeln!(self.output, "{err}")?;
                return Ok(Flow::Continue);
            }
        };

        match report.outcome {
            SearchOutcome::Found(index) => {
                writeln!(self.output, "\nItem found at position {}.", index + 1)?;
                let item = &self.inventory.items()[index];
                writeln!(
                    self.output,
                    "Confirmation: Name: {} | Category: {} | Priority: {}",
                    item.name, item.category, item.priority
                )?;
            }
            SearchOutcome::NotFound => writeln!(self.output, "\nItem not found.")?,
        }
        writeln!(
            self.output,
            "Comparisons (search): {} | Time: {:.6}s",
            report.comparisons,
            report.elapsed.as_secs_f64()
        )?;
        Ok(Flow::Continue)
    }

    fn pause(&mut self) -> Result<Flow, ShellError> {
        if !self.config.pause {
            return Ok(Flow::Continue);
        }
        write!(self.output, "Press ENTER to continue...")?;
        Ok(match self.read_line()? {
            Some(_) => Flow::Continue,
            None => Flow::Exit,
        })
    }

    /// Reads one line without its terminator. `None` once input is closed.
    fn read_line(&mut self) -> Result<Option<String>, ShellError> {
        self.output.flush()?;
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        // Undecodable bytes become U+FFFD instead of ending the session.
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_owned()))
    }

    fn read_text(&mut self, prompt: &str, max_len: usize) -> Result<Option<String>, ShellError> {
        loop {
            write!(self.output, "{prompt}")?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match parse_text(&line, max_len) {
                Ok(_) => return Ok(Some(line)),
                Err(err) => writeln!(self.output, "{err}")?,
            }
        }
    }

    fn read_int(&mut self, prompt: &str, min: i64, max: i64) -> Result<Option<i64>, ShellError> {
        loop {
            write!(self.output, "{prompt}")?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match parse_int(&line, min, max) {
                Ok(value) => return Ok(Some(value)),
                Err(err) => writeln!(self.output, "{err}")?,
            }
        }
    }
}
