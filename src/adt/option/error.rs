use derive_more::{Display, Error};

use crate::util::panic::Panic;

/// The error raised when a value is extracted from a [`Nil`](super::Nil).
///
/// Encountering this error indicates a logic error: the caller assumed a value was present when it
/// was not.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq, Hash)]
#[display("attempted to unwrap an absent value")]
pub struct EmptyValueError;

impl Panic for EmptyValueError {}
