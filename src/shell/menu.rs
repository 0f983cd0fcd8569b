//! Menu definitions
//!
//! The numbered choices shown on every loop iteration.

/// A recognized menu choice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Choice {
    AddStudent = 1,
    ViewAll = 2,
    SearchByName = 3,
    DeleteByName = 4,
    SortByMarks = 5,
    FileAttributes = 6,
    RandomAccessRead = 7,
    SaveAndExit = 8,
}

/// Title printed above the menu
pub const MENU_TITLE: &str = "===== Capstone Student Menu =====";

impl Choice {
    /// All choices in menu order
    pub const ALL: [Choice; 8] = [
        Choice::AddStudent,
        Choice::ViewAll,
        Choice::SearchByName,
        Choice::DeleteByName,
        Choice::SortByMarks,
        Choice::FileAttributes,
        Choice::RandomAccessRead,
        Choice::SaveAndExit,
    ];

    /// Match one input line exactly against "1".."8"
    ///
    /// No trimming: " 1" and "01" are not choices.
    pub fn from_input(input: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|choice| input == choice.key())
    }

    /// The text a user types to pick this choice
    pub fn key(self) -> &'static str {
        match self {
            Choice::AddStudent => "1",
            Choice::ViewAll => "2",
            Choice::SearchByName => "3",
            Choice::DeleteByName => "4",
            Choice::SortByMarks => "5",
            Choice::FileAttributes => "6",
            Choice::RandomAccessRead => "7",
            Choice::SaveAndExit => "8",
        }
    }

    /// Menu label
    pub fn label(self) -> &'static str {
        match self {
            Choice::AddStudent => "Add Student",
            Choice::ViewAll => "View All Students",
            Choice::SearchByName => "Search by Name",
            Choice::DeleteByName => "Delete by Name",
            Choice::SortByMarks => "Sort by Marks",
            Choice::FileAttributes => "Show File Attributes",
            Choice::RandomAccessRead => "Read Using Random Access",
            Choice::SaveAndExit => "Save and Exit",
        }
    }
}
