#![allow(dead_code)]

use grouping_key::{ErrorEvent, ErrorLog, Exception, GroupingKeyComputer, IdentityChecksum, StackFrame};

pub type IdentityComputer = GroupingKeyComputer<fn() -> IdentityChecksum>;

pub fn identity_computer() -> IdentityComputer {
    GroupingKeyComputer::new(IdentityChecksum::default as fn() -> IdentityChecksum)
}

/// The key an identity checksum gives for `terms`.
pub fn hexify(terms: &[&str]) -> String {
    hex::encode(terms.concat())
}

pub fn text(s: &str) -> Option<String> {
    Some(s.to_string())
}

pub fn function_frame(function: &str) -> StackFrame {
    StackFrame {
        function: text(function),
        ..Default::default()
    }
}

pub fn exception_with_frames(frames: Vec<StackFrame>, cause: Vec<Exception>) -> Exception {
    Exception {
        stacktrace: frames,
        cause,
        ..Default::default()
    }
}

pub fn exception_with_message(message: &str, cause: Vec<Exception>) -> Exception {
    Exception {
        message: text(message),
        cause,
        ..Default::default()
    }
}

pub fn error(exception: Option<Exception>, log: Option<ErrorLog>) -> ErrorEvent {
    ErrorEvent {
        exception,
        log,
        grouping_key: String::new(),
    }
}

pub mod strategies {
    use grouping_key::{ErrorEvent, ErrorLog, Exception, StackFrame};
    use proptest::collection::vec;
    use proptest::option;
    use proptest::prelude::*;

    pub fn ident() -> impl Strategy<Value = Option<String>> {
        option::of("[a-z_]{0,6}")
    }

    pub fn frame() -> impl Strategy<Value = StackFrame> {
        (ident(), ident(), ident(), ident(), any::<bool>()).prop_map(
            |(module, filename, classname, function, exclude_from_grouping)| StackFrame {
                module,
                filename,
                classname,
                function,
                exclude_from_grouping,
            },
        )
    }

    pub fn exception() -> impl Strategy<Value = Exception> {
        let leaf = (ident(), ident(), vec(frame(), 0..3)).prop_map(|(r#type, message, stacktrace)| {
            Exception {
                r#type,
                message,
                stacktrace,
                cause: Vec::new(),
            }
        });

        leaf.prop_recursive(3, 16, 3, |inner| {
            (ident(), ident(), vec(frame(), 0..3), vec(inner, 0..3)).prop_map(
                |(r#type, message, stacktrace, cause)| Exception {
                    r#type,
                    message,
                    stacktrace,
                    cause,
                },
            )
        })
    }

    pub fn log() -> impl Strategy<Value = ErrorLog> {
        ("[a-z ]{0,8}", "[a-z %]{0,8}", vec(frame(), 0..3)).prop_map(
            |(message, param_message, stacktrace)| ErrorLog {
                message,
                param_message,
                stacktrace,
            },
        )
    }

    pub fn error_event() -> impl Strategy<Value = ErrorEvent> {
        (option::of(exception()), option::of(log())).prop_map(|(exception, log)| ErrorEvent {
            exception,
            log,
            grouping_key: String::new(),
        })
    }
}
