/// Runtime values.
///
/// Defines `Value`, the result of evaluating any node, together with its
/// display form and the conversion from AST literals.
pub mod core;
/// Runtime type tags and the cast table.
///
/// Every value has exactly one `Type`, derived from its representation. The
/// cast table lists the few one-directional conversions applied when a value
/// is stored into a variable or returned from a function of another type.
pub mod types;

pub use self::core::Value;
pub use types::Type;
