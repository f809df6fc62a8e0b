//! Error types for course-order.
//!
//! The display form of [CourseError] and [CommandError] is the exact line
//! written back to the user, so the processor reports them with `writeln!`.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while validating a course command against the graph.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum CourseError {
    /// ADD_MATKUL named a course that already exists.
    #[error("Matkul {0} sudah ada")]
    DuplicateCourse(String),

    /// A course (target or prerequisite) does not exist.
    #[error("Matkul {0} tidak ditemukan")]
    UnknownCourse(String),
}

/// Errors raised while parsing a command line.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum CommandError {
    /// The first token is not a known command.
    #[error("Perintah tidak ditemukan")]
    UnknownCommand(String),

    /// ADD_MATKUL or EDIT_MATKUL was given without a course name.
    #[error("Perintah tidak ditemukan")]
    MissingCourseName(&'static str),
}

/// Top level error.  Only Io ends the command loop.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Course(#[from] CourseError),

    #[error(transparent)]
    Command(#[from] CommandError),

    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),
}
