//! Rule catalogue for the electronic delivery standard.
//!
//! Each rule group is a pure function over the immutable package. Groups are
//! independent and run unconditionally, so one validation pass surfaces the
//! complete defect list. The catalogue is a static ordered list; ordering is
//! a visible contract (reports render findings in result order):
//! structural, naming, metadata, sequence, then the warning group.

mod codes;
mod finding;

pub mod metadata;
pub mod naming;
pub mod sequence;
pub mod structural;
pub mod warnings;

pub use codes::{ErrorCode, WarningCode};
pub use finding::{ErrorFinding, Finding, WarningFinding};

use crate::engine::ValidatorConfig;
use crate::model::DeliveryPackage;

/// A rule group producing error findings.
pub type ErrorRule = fn(&DeliveryPackage, &ValidatorConfig) -> Vec<ErrorFinding>;

/// A rule group producing warning findings.
pub type WarningRule = fn(&DeliveryPackage, &ValidatorConfig) -> Vec<WarningFinding>;

/// Error rule groups in contract order.
pub const ERROR_RULES: &[ErrorRule] = &[
    structural::check,
    naming::check,
    metadata::check,
    sequence::check,
];

/// Warning rule groups in contract order.
pub const WARNING_RULES: &[WarningRule] = &[warnings::check];
