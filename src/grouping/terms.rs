use serde::Serialize;

use crate::model::{ErrorEvent, ErrorLog, Exception, StackFrame};

/// Which part of the error the grouping terms were taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TermSource {
    ExceptionStacktrace,
    ExceptionType,
    ExceptionMessage,
    LogStacktrace,
    LogMessage,
    None,
}

/// The ordered strings that identify an error, before hashing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupingTerms<'a> {
    pub source: TermSource,
    pub terms: Vec<&'a str>,
}

impl<'a> GroupingTerms<'a> {
    fn new(source: TermSource, terms: Vec<&'a str>) -> Self {
        Self { source, terms }
    }

    fn none() -> Self {
        Self::new(TermSource::None, Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// The terms as they are fed to a checksum: concatenated, no separator.
    pub fn concatenated(&self) -> String {
        self.terms.concat()
    }
}

/// Select the grouping terms of an error.
///
/// Exception data always wins over log data, with one exception: the log's
/// `param_message` follows the exception types when the chain has any. Without
/// frames the chain's types come first, then that `param_message`, then the
/// chain's messages. Frames anywhere in the exception chain mean only frames
/// are used, even if every one of them is excluded from grouping.
///
/// A frame with a module contributes the module alone, so keys for such
/// frames differ from groupers that also hash the function name.
pub fn select_terms(error: &ErrorEvent) -> GroupingTerms<'_> {
    match (&error.exception, &error.log) {
        (Some(exception), log) => exception_terms(exception, log.as_ref()),
        (None, Some(log)) => log_terms(log),
        (None, None) => GroupingTerms::none(),
    }
}

fn exception_terms<'a>(exception: &'a Exception, log: Option<&'a ErrorLog>) -> GroupingTerms<'a> {
    if exception.has_frames() {
        let mut terms = Vec::new();
        for link in exception.chain() {
            push_frame_terms(&mut terms, &link.stacktrace);
        }
        return GroupingTerms::new(TermSource::ExceptionStacktrace, terms);
    }

    let mut terms: Vec<&str> = exception.chain().filter_map(Exception::exception_type).collect();
    let source = if terms.is_empty() {
        TermSource::ExceptionMessage
    } else {
        if let Some(param_message) = log.map(|l| l.param_message.as_str()).filter(|m| !m.is_empty()) {
            terms.push(param_message);
        }
        TermSource::ExceptionType
    };

    terms.extend(exception.chain().filter_map(Exception::message));
    if terms.is_empty() {
        return GroupingTerms::none();
    }
    GroupingTerms::new(source, terms)
}

fn log_terms(log: &ErrorLog) -> GroupingTerms<'_> {
    if !log.stacktrace.is_empty() {
        let mut terms = Vec::new();
        push_frame_terms(&mut terms, &log.stacktrace);
        return GroupingTerms::new(TermSource::LogStacktrace, terms);
    }
    if log.message.is_empty() {
        return GroupingTerms::none();
    }
    GroupingTerms::new(TermSource::LogMessage, vec![log.message.as_str()])
}

fn push_frame_terms<'a>(terms: &mut Vec<&'a str>, frames: &'a [StackFrame]) {
    for frame in frames.iter().filter(|f| !f.exclude_from_grouping) {
        if let Some(module) = frame.module() {
            terms.push(module);
            continue;
        }
        if let Some(location) = frame.filename().or_else(|| frame.classname()) {
            terms.push(location);
        }
        if let Some(function) = frame.function() {
            terms.push(function);
        }
    }
}
