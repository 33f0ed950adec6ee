//! Collection of the values trailing a leading named-parameter mapping.

use log::debug;

use crate::value::{Mapping, Value};

/// Folds `remaining` into `canonical` under `remaining_name`.
///
/// A single remaining value, or a first remaining value that is already a
/// sequence, is stored as-is (values after a leading sequence are dropped).
/// Several values are gathered into a new sequence. The result replaces any
/// explicit parameter of the same name. An empty `remaining_name` discards the
/// values.
pub fn collect_remaining(remaining: &[Value], remaining_name: &str, canonical: &mut Mapping) {
    let collected = match remaining {
        [] => return,
        [only] => only.clone(),
        [first @ Value::Sequence(_), rest @ ..] => {
            debug!(
                "First remaining value is a sequence, ignoring {} value(s) after it",
                rest.len()
            );
            first.clone()
        }
        values => Value::Sequence(values.to_vec()),
    };

    if remaining_name.is_empty() {
        debug!(
            "No remaining name configured, discarding {} remaining value(s)",
            remaining.len()
        );
        return;
    }

    if canonical
        .insert(remaining_name.to_string(), collected)
        .is_some()
    {
        debug!("Remaining values replaced the explicit `{remaining_name}` parameter");
    }
}
