//! Diagnostics for the Stark front end.
//!
//! Errors are never thrown: every stage appends [`LogMessage`]s to a
//! [`Diagnostics`] list and keeps going. A run has failed when the list holds
//! at least one [`Severity::Error`].
//!
//! Rendering follows the `file(line,col)-(line,col) : error : message` shape
//! that editors and build logs already understand.

mod diagnostic;
mod diagnostics;
mod printable;

pub use diagnostic::{LogMessage, Severity};
pub use diagnostics::Diagnostics;
pub use printable::printable;
