//! Check rules and the results they produce.

mod result;
mod rules;

pub use result::{CheckResult, CheckValue, ErrorTally, FormatStatus};
pub use rules::{
    AllowedValuesRule, ColumnRule, DATE_FORMAT, DatasetRule, DateFormatRule, DuplicateRecordRule,
    MissingValueRule, RangeRule, UniquenessRule,
};
