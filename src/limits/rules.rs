//! Configuration checks using Validation.

use crate::core::FunctionRef;
use crate::limits::policy::{Limits, MAX_SUPPORTED_LEVEL};
use crate::limits::violations::ConfigViolation;
use std::collections::HashSet;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Check a machine configuration, accumulating ALL violations.
///
/// `names` lists every registration in order, duplicates included.
pub fn validate(
    limits: &Limits,
    names: &[FunctionRef],
) -> Validation<(), NonEmptyVec<ConfigViolation>> {
    let mut checks: Vec<Validation<(), NonEmptyVec<ConfigViolation>>> = Vec::new();

    checks.push(if limits.max_level > MAX_SUPPORTED_LEVEL {
        Validation::fail(ConfigViolation::MaxLevelTooLarge {
            requested: limits.max_level,
            supported: MAX_SUPPORTED_LEVEL,
        })
    } else {
        Validation::success(())
    });

    if names.is_empty() {
        checks.push(Validation::fail(ConfigViolation::NoFunctions));
    }

    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    for name in names {
        if name.is_empty() {
            checks.push(Validation::fail(ConfigViolation::EmptyFunctionName));
            continue;
        }
        if !seen.insert(name) && reported.insert(name) {
            checks.push(Validation::fail(ConfigViolation::DuplicateFunction {
                name: name.to_string(),
            }));
        }
    }

    Validation::all_vec(checks).map(|_| ())
}
