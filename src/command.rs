//! Parses one line of input into a [Command].
//!
//! Uses the Pest crate to do all the tokenizing; the grammar is in command.pest.
use pest::iterators::Pair;
use pest::Parser;
use pest_derive::Parser;

use crate::error::CommandError;

#[derive(Parser)]
#[grammar = "command.pest"]
pub struct CommandParser;

pub const ADD_COURSE: &str = "ADD_MATKUL";
pub const EDIT_COURSE: &str = "EDIT_MATKUL";

/// A single parsed request.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Command {
    /// ADD_MATKUL name dep*
    AddCourse {
        name: String,
        prerequisites: Vec<String>,
    },
    /// EDIT_MATKUL name dep*
    EditCourse {
        name: String,
        prerequisites: Vec<String>,
    },
    /// CETAK_URUTAN
    PrintOrder,
    /// EXIT
    Exit,
}

impl Command {
    /// Parse a line of input.
    ///
    /// Blank lines and lines starting with whitespace are unknown commands.  Tokens
    /// after CETAK_URUTAN and EXIT are ignored.
    pub fn parse(line: &str) -> Result<Command, CommandError> {
        let unknown = || CommandError::UnknownCommand(first_token(line));

        let command = CommandParser::parse(Rule::line, line)
            .map_err(|_| unknown())?
            .next()
            .and_then(|parsed| parsed.into_inner().next())
            .ok_or_else(unknown)?;

        Self::from_pair(command).ok_or_else(unknown)?
    }

    /// Build the command from its pair.  None if the pair is not a command rule.
    fn from_pair(command: Pair<'_, Rule>) -> Option<Result<Command, CommandError>> {
        let rule = command.as_rule();
        let mut names = command
            .into_inner()
            .filter(|pair| pair.as_rule() == Rule::name)
            .map(|pair| pair.as_str().to_string());

        let parsed = match rule {
            Rule::add_course => names
                .next()
                .map(|name| Command::AddCourse {
                    name,
                    prerequisites: names.collect(),
                })
                .ok_or(CommandError::MissingCourseName(ADD_COURSE)),
            Rule::edit_course => names
                .next()
                .map(|name| Command::EditCourse {
                    name,
                    prerequisites: names.collect(),
                })
                .ok_or(CommandError::MissingCourseName(EDIT_COURSE)),
            Rule::print_order => Ok(Command::PrintOrder),
            Rule::exit => Ok(Command::Exit),
            _ => return None,
        };

        Some(parsed)
    }
}

/// First space separated token of the line, used to name an unknown command.
fn first_token(line: &str) -> String {
    line.split(' ').next().unwrap_or_default().to_string()
}
