//! Rule trait for lint stages.

use super::{Finding, LintContext};
use crate::document::TermRecord;
use std::fmt::Debug;

/// One stage of the lint pipeline.
///
/// Rules never fail: every problem becomes a [`Finding`], and a rule must
/// tolerate records that other rules already reported as malformed (absent
/// fields, values of the wrong kind). Rules are stateless and only read the
/// context, so their order does not change the findings they produce.
///
/// Per-record rules implement [`Rule::check_record`]; rules that compare
/// records with each other implement [`Rule::evaluate`] instead.
///
/// # Examples
///
/// ```rust
/// use catmip_lint::core::{Finding, FindingCode, LintContext, Rule};
/// use catmip_lint::document::TermRecord;
///
/// #[derive(Debug)]
/// struct NoRecommendation;
///
/// impl Rule for NoRecommendation {
///     fn name(&self) -> &str {
///         "no_recommendation"
///     }
///
///     fn check_record(&self, record: &TermRecord, _ctx: &LintContext<'_>) -> Vec<Finding> {
///         if record.has("recommendation") {
///             vec![Finding::new(FindingCode::UnknownField, record, "recommendation is deprecated")]
///         } else {
///             Vec::new()
///         }
///     }
/// }
/// ```
pub trait Rule: Debug + Send + Sync {
    /// Returns the name of the rule, used in logs.
    fn name(&self) -> &str;

    /// Returns a description of what this rule validates.
    fn description(&self) -> Option<&str> {
        None
    }

    /// Checks a single record.
    fn check_record(&self, _record: &TermRecord, _ctx: &LintContext<'_>) -> Vec<Finding> {
        Vec::new()
    }

    /// Checks the whole collection.
    ///
    /// The default applies [`Rule::check_record`] to each record in document
    /// order.
    fn evaluate(&self, ctx: &LintContext<'_>) -> Vec<Finding> {
        ctx.records()
            .iter()
            .flat_map(|record| self.check_record(record, ctx))
            .collect()
    }
}

/// A boxed rule for use in collections.
pub type BoxedRule = Box<dyn Rule>;
