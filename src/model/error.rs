use serde::{Deserialize, Serialize};

/// One entry in a stacktrace.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StackFrame {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function: Option<String>,
    #[serde(default)]
    pub exclude_from_grouping: bool,
}

impl StackFrame {
    pub fn module(&self) -> Option<&str> {
        non_empty(&self.module)
    }

    pub fn filename(&self) -> Option<&str> {
        non_empty(&self.filename)
    }

    pub fn classname(&self) -> Option<&str> {
        non_empty(&self.classname)
    }

    pub fn function(&self) -> Option<&str> {
        non_empty(&self.function)
    }
}

/// An exception and the exceptions that caused it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Exception {
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stacktrace: Vec<StackFrame>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cause: Vec<Exception>,
}

impl Exception {
    pub fn exception_type(&self) -> Option<&str> {
        non_empty(&self.r#type)
    }

    pub fn message(&self) -> Option<&str> {
        non_empty(&self.message)
    }

    /// Walk this exception and all of its causes, depth-first.
    ///
    /// Each cause is visited together with its own nested causes before the
    /// next sibling cause.
    pub fn chain(&self) -> ExceptionChain<'_> {
        ExceptionChain { stack: vec![self] }
    }

    /// True if any exception in the chain carries at least one frame,
    /// regardless of `exclude_from_grouping`.
    pub fn has_frames(&self) -> bool {
        self.chain().any(|exception| !exception.stacktrace.is_empty())
    }
}

/// Depth-first, pre-order iterator over an exception chain.
#[derive(Debug, Clone)]
pub struct ExceptionChain<'a> {
    stack: Vec<&'a Exception>,
}

impl<'a> Iterator for ExceptionChain<'a> {
    type Item = &'a Exception;

    fn next(&mut self) -> Option<Self::Item> {
        let exception = self.stack.pop()?;
        // Reversed so the first cause is popped next.
        self.stack.extend(exception.cause.iter().rev());
        Some(exception)
    }
}

/// Log data attached to an error when no exception was captured.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ErrorLog {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub param_message: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stacktrace: Vec<StackFrame>,
}

/// The error payload of an event.
///
/// `grouping_key` is derived from the rest of the record and is overwritten
/// every time the key is computed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ErrorEvent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exception: Option<Exception>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log: Option<ErrorLog>,
    #[serde(default)]
    pub grouping_key: String,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}
