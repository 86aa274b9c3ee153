//! Grammar productions, one module per directive.
//!
//! Each production is an `impl Parser` block. A production that fails has
//! already reported why and recovered; it returns `None`.

mod extern_directive;
mod import_directive;
mod modifiers;
mod module_directive;
mod paths;
