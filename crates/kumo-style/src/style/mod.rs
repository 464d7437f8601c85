//! The parsed style record and how utilities fold into it.

mod accumulate;
mod parsed;
mod soundness;

pub use parsed::{BorderStyle, ParsedStyle, VariableRef};
pub use soundness::Violation;
