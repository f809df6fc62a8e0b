//! The command loop: reads commands, applies them to the course graph, and writes replies.

use std::io::{BufRead, Write};
use std::ops::ControlFlow;

use tracing::{debug, trace, warn};

use crate::command::Command;
use crate::error::{CourseError, Error, Result};
use crate::graph::Graph;

/// Owns the course graph and the sink replies are written to.
///
/// Every command is fully validated before the graph is touched, so a rejected
/// command leaves the graph exactly as it was.
#[derive(Debug)]
pub struct CommandProcessor<W: Write> {
    graph: Graph,
    out: W,
}

impl<W: Write> CommandProcessor<W> {
    pub fn new(out: W) -> Self {
        CommandProcessor {
            graph: Graph::new(),
            out,
        }
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Give back the output sink, e.g. to inspect what was written.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Process lines from input until EXIT or end of input.
    ///
    /// Output is flushed after every line, before the next one is read.  Bytes that
    /// are not valid UTF-8 are replaced rather than ending the loop.
    /// Only i/o failures are returned: rejected commands are reported on the output.
    pub fn run<R: BufRead>(&mut self, mut input: R) -> Result<()> {
        let mut buf = Vec::new();

        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }

            let line = String::from_utf8_lossy(&buf);
            let flow = self.process_line(line.trim_end_matches(['\n', '\r']))?;
            self.out.flush()?;

            if flow.is_break() {
                debug!("exit requested");
                break;
            }
        }

        Ok(())
    }

    /// Parse and execute a single line.  Returns Break after EXIT.
    pub fn process_line(&mut self, line: &str) -> Result<ControlFlow<()>> {
        let outcome = Command::parse(line)
            .map_err(Error::from)
            .and_then(|command| self.execute(command));

        match outcome {
            Ok(flow) => Ok(flow),
            Err(Error::Course(err)) => {
                debug!(%err, "course command rejected");
                writeln!(self.out, "{err}")?;
                Ok(ControlFlow::Continue(()))
            }
            Err(Error::Command(err)) => {
                warn!(?err, line, "bad command");
                writeln!(self.out, "{err}")?;
                Ok(ControlFlow::Continue(()))
            }
            Err(err @ Error::Io(_)) => Err(err),
        }
    }

    /// Execute an already parsed command.
    pub fn execute(&mut self, command: Command) -> Result<ControlFlow<()>> {
        match command {
            Command::AddCourse {
                name,
                prerequisites,
            } => self.add_course(&name, &prerequisites)?,
            Command::EditCourse {
                name,
                prerequisites,
            } => self.edit_course(&name, &prerequisites)?,
            Command::PrintOrder => {
                let order = self.graph.course_order();
                writeln!(self.out, "{order}")?;
            }
            Command::Exit => return Ok(ControlFlow::Break(())),
        }

        Ok(ControlFlow::Continue(()))
    }

    /// Add a new course, with edges from each prerequisite to it.
    pub fn add_course<S: AsRef<str>>(
        &mut self,
        name: &str,
        prerequisites: &[S],
    ) -> std::result::Result<(), CourseError> {
        if self.graph.exists(name) {
            return Err(CourseError::DuplicateCourse(name.to_string()));
        }
        self.check_courses_exist(prerequisites)?;

        self.graph.add_node(name);
        for prerequisite in prerequisites {
            self.graph.add_edge(prerequisite.as_ref(), name)?;
        }
        debug!(course = name, prerequisites = prerequisites.len(), "added course");
        trace!(graph = %self.graph, "graph after add");

        Ok(())
    }

    /// Replace the prerequisites of an existing course.
    pub fn edit_course<S: AsRef<str>>(
        &mut self,
        name: &str,
        prerequisites: &[S],
    ) -> std::result::Result<(), CourseError> {
        let previous: Vec<String> = self
            .graph
            .incoming(name)
            .ok_or_else(|| CourseError::UnknownCourse(name.to_string()))?
            .into_iter()
            .map(str::to_string)
            .collect();
        self.check_courses_exist(prerequisites)?;

        for prerequisite in &previous {
            self.graph.remove_edge(prerequisite, name)?;
        }
        for prerequisite in prerequisites {
            self.graph.add_edge(prerequisite.as_ref(), name)?;
        }
        debug!(
            course = name,
            removed = previous.len(),
            added = prerequisites.len(),
            "edited course"
        );
        trace!(graph = %self.graph, "graph after edit");

        Ok(())
    }

    /// Fail with the first course (in argument order) that is not in the graph.
    fn check_courses_exist<S: AsRef<str>>(
        &self,
        names: &[S],
    ) -> std::result::Result<(), CourseError> {
        match names.iter().find(|name| !self.graph.exists(name.as_ref())) {
            Some(missing) => Err(CourseError::UnknownCourse(missing.as_ref().to_string())),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn processor() -> CommandProcessor<Vec<u8>> {
        CommandProcessor::new(Vec::new())
    }

    fn output(processor: CommandProcessor<Vec<u8>>) -> String {
        String::from_utf8(processor.into_output()).unwrap()
    }

    const NONE: [&str; 0] = [];

    #[test]
    fn test_add_duplicate_does_not_mutate() {
        let mut processor = processor();
        processor.add_course("A", &NONE).unwrap();
        processor.add_course("B", &["A"]).unwrap();

        assert_eq!(
            processor.add_course("B", &NONE),
            Err(CourseError::DuplicateCourse("B".to_string()))
        );
        assert_eq!(processor.graph().len(), 2);
        assert_eq!(processor.graph().incoming("B"), Some(vec!["A"]));
    }

    #[test]
    fn test_add_unknown_prerequisite_names_first_missing() {
        let mut processor = processor();
        processor.add_course("A", &NONE).unwrap();

        assert_eq!(
            processor.add_course("X", &["A", "Y", "Z"]),
            Err(CourseError::UnknownCourse("Y".to_string()))
        );
        assert!(!processor.graph().exists("X"));
        assert_eq!(processor.graph().outgoing("A"), Some(vec![]));
    }

    #[test]
    fn test_edit_replaces_prerequisites() {
        let mut processor = processor();
        processor.add_course("A", &NONE).unwrap();
        processor.add_course("B", &NONE).unwrap();
        processor.add_course("D", &NONE).unwrap();
        processor.add_course("C", &["A", "B"]).unwrap();

        processor.edit_course("C", &["B", "D"]).unwrap();

        assert_eq!(processor.graph().incoming("C"), Some(vec!["B", "D"]));
        assert_eq!(processor.graph().outgoing("A"), Some(vec![]));
        assert_eq!(processor.graph().outgoing("B"), Some(vec!["C"]));
    }

    #[test]
    fn test_edit_to_empty_list() {
        let mut processor = processor();
        processor.add_course("A", &NONE).unwrap();
        processor.add_course("B", &["A"]).unwrap();

        processor.edit_course("B", &NONE).unwrap();

        assert_eq!(processor.graph().incoming("B"), Some(vec![]));
        assert_eq!(processor.graph().outgoing("A"), Some(vec![]));
    }

    #[test]
    fn test_edit_with_duplicate_prior_edges() {
        let mut processor = processor();
        processor.add_course("A", &NONE).unwrap();
        processor.add_course("B", &["A", "A"]).unwrap();

        processor.edit_course("B", &NONE).unwrap();

        assert_eq!(processor.graph().incoming("B"), Some(vec![]));
        assert_eq!(processor.graph().outgoing("A"), Some(vec![]));
    }

    #[test]
    fn test_edit_failures_do_not_mutate() {
        let mut processor = processor();
        processor.add_course("A", &NONE).unwrap();
        processor.add_course("B", &["A"]).unwrap();

        assert_eq!(
            processor.edit_course("Q", &["A"]),
            Err(CourseError::UnknownCourse("Q".to_string()))
        );
        assert_eq!(
            processor.edit_course("B", &["Z"]),
            Err(CourseError::UnknownCourse("Z".to_string()))
        );
        assert_eq!(processor.graph().incoming("B"), Some(vec!["A"]));
    }

    #[test]
    fn test_process_line_reports_errors_and_continues() {
        let mut processor = processor();

        let flows = [
            "ADD_MATKUL A",
            "ADD_MATKUL A",
            "ADD_MATKUL X Y",
            "EDIT_MATKUL Y",
            "ADD_MATKUL",
            "TAMBAH A",
            "",
            "  EXIT",
            "CETAK_URUTAN",
        ]
        .map(|line| processor.process_line(line).unwrap());

        assert!(flows.iter().all(|flow| flow.is_continue()));
        assert_eq!(
            output(processor),
            "Matkul A sudah ada\n\
             Matkul Y tidak ditemukan\n\
             Matkul Y tidak ditemukan\n\
             Perintah tidak ditemukan\n\
             Perintah tidak ditemukan\n\
             Perintah tidak ditemukan\n\
             Perintah tidak ditemukan\n\
             A\n"
        );
    }

    #[test]
    fn test_exit_stops_run() {
        let mut processor = processor();
        let input = "ADD_MATKUL A\nEXIT\nCETAK_URUTAN\n".as_bytes();

        processor.run(input).unwrap();

        assert_eq!(output(processor), "");
    }

    #[test]
    fn test_debug_dump_is_not_a_command() {
        let mut processor = processor();
        let input = "ADD_MATKUL A\nADD_MATKUL B A\nPRINT\n".as_bytes();

        processor.run(input).unwrap();

        assert_eq!(processor.graph().to_string(), "A -> B\n");
        assert_eq!(output(processor), "Perintah tidak ditemukan\n");
    }

    #[test]
    fn test_invalid_utf8_line_does_not_stop_run() {
        let mut processor = processor();
        let input: &[u8] = b"ADD_MATKUL A\nADD_MATKUL \xff\xfe\nADD_MATKUL B A\nCETAK_URUTAN\n";

        processor.run(input).unwrap();

        assert!(processor.graph().exists("\u{FFFD}\u{FFFD}"));
        assert_eq!(output(processor), "A, \u{FFFD}\u{FFFD}, B\n");
    }

    #[test]
    fn test_crlf_and_missing_final_newline() {
        let mut processor = processor();
        let input = "ADD_MATKUL A\r\nADD_MATKUL B A\r\nCETAK_URUTAN".as_bytes();

        processor.run(input).unwrap();

        assert_eq!(output(processor), "A, B\n");
    }
}
