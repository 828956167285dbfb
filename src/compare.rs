// model = "claude-opus-4-5"
// created = "2026-08-04"
// modified = "2026-08-05"
// driver = "Isaac Clayton"

//! Built-in comparators over possibly-missing operands.
//!
//! Both comparators take `Option<&Value>`: `None` is a field lookup that
//! resolved to nothing, and it sorts after every present value, from either
//! side. The default comparator keeps the original engine's exact rules:
//!
//! 1. dates collapse to their millisecond timestamp before anything else;
//! 2. equal operands compare `Equal`;
//! 3. a missing or null operand sorts last;
//! 4. otherwise `Greater` iff a strict "greater than" holds, else `Less`.
//!
//! Rule 4 only has a meaningful "greater than" between same-kind scalars.
//! Every other pairing (maps, sequences, cross-kind pairs) answers `Less`
//! from BOTH argument orders. That asymmetry is load-bearing compatibility
//! behavior; callers depend on it and tests pin it.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::value::Value;

/// A comparison function over possibly-missing operands.
pub type Comparator = dyn Fn(Option<&Value>, Option<&Value>) -> Ordering;

/// An operand as the default comparator sees it, after date coercion.
#[derive(PartialEq)]
enum Operand<'a> {
    Missing,
    Null,
    Bool(bool),
    Number(f64),
    Text(&'a str),
    Sequence(&'a [Value]),
    Map(&'a BTreeMap<String, Value>),
}

fn operand(value: Option<&Value>) -> Operand<'_> {
    match value {
        None => Operand::Missing,
        Some(Value::Null) => Operand::Null,
        Some(Value::Bool(flag)) => Operand::Bool(*flag),
        Some(Value::Number(number)) => Operand::Number(*number),
        Some(Value::Text(text)) => Operand::Text(text),
        Some(Value::Date(date)) => Operand::Number(date.timestamp_millis() as f64),
        Some(Value::Sequence(items)) => Operand::Sequence(items),
        Some(Value::Map(fields)) => Operand::Map(fields),
    }
}

/// The default comparator. Missing and null operands sort last; dates order
/// by timestamp; `NaN` is never equal to anything, so it lands on the
/// never-greater side of rule 4.
pub fn default_compare(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    let a = operand(a);
    let b = operand(b);
    if a == b {
        return Ordering::Equal;
    }
    if matches!(a, Operand::Missing | Operand::Null) {
        return Ordering::Greater;
    }
    if matches!(b, Operand::Missing | Operand::Null) {
        return Ordering::Less;
    }
    if strictly_greater(&a, &b) {
        return Ordering::Greater;
    }
    return Ordering::Less;
}

/// Case-insensitive variant: two texts compare by their lowercased forms;
/// anything else falls through to the default comparator.
pub fn case_insensitive_compare(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    if let (Some(Value::Text(a)), Some(Value::Text(b))) = (a, b) {
        return a.to_lowercase().cmp(&b.to_lowercase());
    }
    return default_compare(a, b);
}

/// Strict "greater than" between operands. Bools coerce numerically when
/// paired with a number. Everything else has no ordering and is never
/// greater.
fn strictly_greater(a: &Operand<'_>, b: &Operand<'_>) -> bool {
    match (a, b) {
        (Operand::Number(a), Operand::Number(b)) => a > b,
        (Operand::Text(a), Operand::Text(b)) => a > b,
        (Operand::Bool(a), Operand::Bool(b)) => a > b,
        (Operand::Bool(a), Operand::Number(b)) => f64::from(*a as u8) > *b,
        (Operand::Number(a), Operand::Bool(b)) => *a > f64::from(*b as u8),
        _ => false,
    }
}
