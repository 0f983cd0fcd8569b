//! Shell Module
//!
//! The interactive menu loop that drives a [`Manager`].
//!
//! ## States
//! ```text
//!            ┌──────────────────────────────┐
//!            │   print menu → read choice   │
//!            ▼            → dispatch        │
//!      ┌───────────┐                        │
//!      │  Running  │────────────────────────┘
//!      └─────┬─────┘   "1".."7" / invalid
//!            │ "8" (save) or end of input (no save)
//!            ▼
//!      ┌────────────┐
//!      │ Terminated │
//!      └────────────┘
//! ```
//!
//! Input and output are generic so the loop can run against the terminal
//! or against in-memory buffers.

mod menu;

pub use menu::{Choice, MENU_TITLE};

use std::io::{BufRead, Write};

use crate::error::{Result, RosterError};
use crate::manager::Manager;
use crate::record::{self, Record};

/// Shell lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellState {
    Running,
    Terminated,
}

/// Menu-driven front end over a manager
#[derive(Debug)]
pub struct Shell<R, W> {
    /// The manager owning the collection
    manager: Manager,

    /// Line source for choices and prompts
    input: R,

    /// Destination for menus, prompts and results
    output: W,

    state: ShellState,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Create a shell in the running state
    pub fn new(manager: Manager, input: R, output: W) -> Self {
        Self {
            manager,
            input,
            output,
            state: ShellState::Running,
        }
    }

    /// Report the startup load and list what was loaded
    pub fn start(&mut self, load_error: Option<&RosterError>) -> Result<()> {
        if let Some(error) = load_error {
            writeln!(self.output, "Error loading file: {}", error)?;
        }

        writeln!(self.output, "Loaded students from file:\n")?;
        self.print_records()
    }

    /// Loop until the shell terminates
    pub fn run(&mut self) -> Result<()> {
        while self.state == ShellState::Running {
            self.step()?;
        }
        self.output.flush()?;
        Ok(())
    }

    /// One iteration: menu, choice, dispatch
    pub fn step(&mut self) -> Result<ShellState> {
        self.print_menu()?;

        let Some(input) = self.read_line()? else {
            tracing::warn!("Input closed before save; unsaved changes are discarded");
            self.state = ShellState::Terminated;
            return Ok(self.state);
        };

        match Choice::from_input(&input) {
            Some(choice) => {
                tracing::debug!("Menu choice {:?}", choice);
                self.dispatch(choice)?;
            }
            None => writeln!(self.output, "Invalid choice!")?,
        }

        Ok(self.state)
    }

    /// Current state
    pub fn state(&self) -> ShellState {
        self.state
    }

    /// The manager driven by this shell
    pub fn manager(&self) -> &Manager {
        &self.manager
    }

    /// Consume the shell, returning its manager
    pub fn into_manager(self) -> Manager {
        self.manager
    }

    // =========================================================================
    // Dispatch
    // =========================================================================

    fn dispatch(&mut self, choice: Choice) -> Result<()> {
        match choice {
            Choice::AddStudent => self.add_student(),
            Choice::ViewAll => self.view_all(),
            Choice::SearchByName => self.search_by_name(),
            Choice::DeleteByName => self.delete_by_name(),
            Choice::SortByMarks => self.sort_by_marks(),
            Choice::FileAttributes => self.file_attributes(),
            Choice::RandomAccessRead => self.random_access_read(),
            Choice::SaveAndExit => self.save_and_exit(),
        }
    }

    fn add_student(&mut self) -> Result<()> {
        match self.read_record() {
            Ok(record) => {
                self.manager.add(record);
                writeln!(self.output, "\nStudent Added Successfully!\n")?;
            }
            Err(RosterError::InvalidInput(reason)) => {
                tracing::debug!("Add aborted: {}", reason);
                writeln!(self.output, "Invalid Input!")?;
            }
            Err(e) => return Err(e),
        }
        Ok(())
    }

    /// Prompt for the five fields in file order
    ///
    /// Stops at the first numeric field that fails to parse.
    fn read_record(&mut self) -> Result<Record> {
        let roll_input = self.prompt("Enter Roll No: ")?;
        let roll_no = record::parse_roll_no(&roll_input)
            .map_err(|e| RosterError::InvalidInput(format!("roll no {:?}: {}", roll_input, e)))?;

        let name = self.prompt("Enter Name: ")?;
        let email = self.prompt("Enter Email: ")?;
        let course = self.prompt("Enter Course: ")?;

        let marks_input = self.prompt("Enter Marks: ")?;
        let marks = record::parse_marks(&marks_input)
            .map_err(|e| RosterError::InvalidInput(format!("marks {:?}: {}", marks_input, e)))?;

        Ok(Record::new(roll_no, name, email, course, marks))
    }

    fn view_all(&mut self) -> Result<()> {
        writeln!(self.output, "\n----- Student List -----\n")?;
        self.print_records()
    }

    fn search_by_name(&mut self) -> Result<()> {
        let name = self.prompt("Enter Name to Search: ")?;
        let matches = self.manager.search_by_name(&name);

        if matches.is_empty() {
            writeln!(self.output, "No student found with that name.")?;
        }
        for record in matches {
            writeln!(self.output, "{}\n", record)?;
        }
        Ok(())
    }

    fn delete_by_name(&mut self) -> Result<()> {
        let name = self.prompt("Enter Name to Delete: ")?;

        if self.manager.delete_by_name(&name) > 0 {
            writeln!(self.output, "Student removed successfully.")?;
        } else {
            writeln!(self.output, "No student found.")?;
        }
        Ok(())
    }

    fn sort_by_marks(&mut self) -> Result<()> {
        self.manager.sort_by_marks();
        writeln!(self.output, "\nSorted Student List by Marks:\n")?;
        self.view_all()
    }

    fn file_attributes(&mut self) -> Result<()> {
        let attrs = self.manager.file_attributes();

        writeln!(self.output, "\nFile Attributes:")?;
        writeln!(self.output, "Name: {}", attrs.name)?;
        writeln!(self.output, "Path: {}", attrs.path.display())?;
        writeln!(self.output, "Size: {} bytes", attrs.size)?;
        writeln!(self.output, "Readable: {}", attrs.readable)?;
        writeln!(self.output, "Writable: {}", attrs.writable)?;
        Ok(())
    }

    fn random_access_read(&mut self) -> Result<()> {
        match self.manager.read_first_line() {
            Ok(first) => {
                writeln!(self.output, "\nRandom Access Output:\n")?;
                if let Some(line) = first {
                    writeln!(self.output, "First Record: {}", line)?;
                }
            }
            Err(e) => {
                tracing::warn!("Random access read failed: {}", e);
                writeln!(self.output, "Error: {}", e)?;
            }
        }
        Ok(())
    }

    fn save_and_exit(&mut self) -> Result<()> {
        if let Err(e) = self.manager.save() {
            tracing::error!("Save to {} failed: {}", self.manager.data_file().display(), e);
            writeln!(self.output, "Error saving data: {}", e)?;
        }

        writeln!(self.output, "\nRecords Saved. Exiting Program.")?;
        self.state = ShellState::Terminated;
        Ok(())
    }

    // =========================================================================
    // Console Helpers
    // =========================================================================

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output, "\n{}", MENU_TITLE)?;
        for choice in Choice::ALL {
            writeln!(self.output, "{}. {}", choice.key(), choice.label())?;
        }
        write!(self.output, "Enter choice: ")?;
        self.output.flush()?;
        Ok(())
    }

    fn print_records(&mut self) -> Result<()> {
        for record in self.manager.records() {
            writeln!(self.output, "{}\n", record)?;
        }
        Ok(())
    }

    /// Show `text` and read the reply; end of input reads as ""
    fn prompt(&mut self, text: &str) -> Result<String> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        Ok(self.read_line()?.unwrap_or_default())
    }

    /// Next input line without its terminator, or `None` at end of input
    ///
    /// Invalid UTF-8 is replaced rather than rejected, so it reaches the
    /// usual "Invalid choice!" / "Invalid Input!" handling.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(record::decode_line(&buf)))
    }
}
