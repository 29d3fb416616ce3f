//! The exhaustiveness check.
//!
//! A composite literal is checked when the nearest enclosing `var`
//! declaration group carries the directive comment as the last line of its
//! attached documentation block:
//!
//! ```go
//! //structinit:exhaustive
//! var cfg = Config{ ... }
//! ```
//!
//! Every situation the checker cannot decide degrades to "no diagnostic";
//! the check must never block the surrounding analysis.

mod directive;
mod engine;
mod fields;
mod literal;
mod locator;
mod runner;
mod walker;

pub use directive::{parse, Directive, DIRECTIVE};
pub use engine::{Checker, Diagnostic};
pub use fields::checkable_fields;
pub use literal::keyed_fields;
pub use locator::locate;
pub use runner::{CheckResult, Finding, Runner};
pub use walker::walk_literals;
