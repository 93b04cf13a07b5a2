pub mod error;
pub mod event;

pub use error::{ErrorEvent, ErrorLog, Exception, ExceptionChain, StackFrame};
pub use event::{Batch, Event};
