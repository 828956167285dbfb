// model = "claude-opus-4-5"
// created = "2026-08-04"
// modified = "2026-08-05"
// driver = "Isaac Clayton"

//! The ordering engine: dispatch, sequence sort, structure sort, and
//! multi-key composition.
//!
//! The engine is total. Whatever the input, `apply` answers a value: falsy
//! and scalar inputs pass through unchanged, unresolvable paths compare as
//! missing, and a structure with nothing sortable at the described location
//! comes back untouched. No input panics.

use std::cmp::Ordering;

use crate::compare;
use crate::compare::Comparator;
use crate::path;
use crate::path::FieldPath;
use crate::value::Value;

/// What to sort by: nothing, one field path, or several.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Directive {
    None,
    Key(String),
    Keys(Vec<String>),
}

/// A configured ordering: a directive, the reverse and case-insensitive
/// flags, and an optional custom comparator that overrides the built-ins.
///
/// ```
/// use orderly::Order;
/// use orderly::Value;
///
/// let posts = Value::from(serde_json::json!([
///     { "title": "beta" },
///     { "title": "alpha" },
/// ]));
/// let sorted = Order::by("title").apply(&posts);
/// assert_eq!(sorted, Value::from(serde_json::json!([
///     { "title": "alpha" },
///     { "title": "beta" },
/// ])));
/// ```
pub struct Order {
    directive: Directive,
    reverse: bool,
    case_insensitive: bool,
    comparator: Option<Box<Comparator>>,
}

impl Order {
    /// An ordering with no directive: elements compare directly.
    pub fn new() -> Order {
        return Order {
            directive: Directive::None,
            reverse: false,
            case_insensitive: false,
            comparator: None,
        };
    }

    /// Order by one field path, e.g. `"title"` or `"author.name"`.
    pub fn by(key: &str) -> Order {
        let mut order = Order::new();
        order.directive = Directive::Key(key.to_string());
        return order;
    }

    /// Order by several field paths. The first is the most significant key;
    /// ties under it break by the later keys in turn.
    pub fn by_keys(keys: &[&str]) -> Order {
        let mut order = Order::new();
        order.directive = Directive::Keys(keys.iter().map(|key| key.to_string()).collect());
        return order;
    }

    /// Reverse the final ordering after the sort. This inverts the whole
    /// result, not the per-pair comparisons.
    pub fn reversed(mut self, reverse: bool) -> Order {
        self.reverse = reverse;
        return self;
    }

    /// Compare textual values by their lowercased forms. Only affects the
    /// built-in comparators; a custom comparator always wins.
    pub fn case_insensitive(mut self, case_insensitive: bool) -> Order {
        self.case_insensitive = case_insensitive;
        return self;
    }

    /// Replace the built-in comparators. The function receives the resolved
    /// operands; `None` is a field lookup that found nothing.
    pub fn with_comparator<F>(mut self, comparator: F) -> Order
    where
        F: Fn(Option<&Value>, Option<&Value>) -> Ordering + 'static,
    {
        self.comparator = Some(Box::new(comparator));
        return self;
    }

    /// Produce a newly ordered value. The input is never mutated.
    pub fn apply(&self, value: &Value) -> Value {
        if !value.is_truthy() {
            return value.clone();
        }
        match &self.directive {
            Directive::Keys(keys) => {
                // Least-significant key first: each later (stable) pass
                // re-orders only within the groups the previous pass left.
                let mut result = value.clone();
                for key in keys.iter().rev() {
                    result = self.apply_one(&result, Some(key));
                }
                return result;
            }
            Directive::Key(key) => return self.apply_one(value, Some(key)),
            Directive::None => return self.apply_one(value, None),
        }
    }

    /// Single-directive dispatch: sequences sort on a copy, keyed maps go
    /// through the structure sort, everything else passes through.
    fn apply_one(&self, value: &Value, key: Option<&str>) -> Value {
        if !value.is_truthy() {
            return value.clone();
        }
        match value {
            Value::Sequence(items) => Value::Sequence(self.sort_sequence(items.clone(), key)),
            Value::Map(_) => self.sort_structure(value.clone(), key),
            other => other.clone(),
        }
    }

    /// Sort one sequence. A directive containing a dot is a deep path and
    /// resolves segment by segment; a plain key reads one field off each
    /// element (falling back to the elements themselves when either side is
    /// falsy); no directive compares the elements directly.
    fn sort_sequence(&self, mut items: Vec<Value>, key: Option<&str>) -> Vec<Value> {
        let key = match key {
            Some(key) if !key.is_empty() => Some(key),
            _ => None,
        };
        // Deep means the RAW directive has a dot, before bracket
        // normalization. `a[0]` alone stays one literal key.
        let deep_path = match key {
            Some(key) if key.contains('.') => Some(FieldPath::parse(key)),
            _ => None,
        };
        let compare_fn = self.compare_fn();
        stable_sort_by(&mut items, |a, b| {
            let key = match key {
                Some(key) => key,
                None => return compare_fn(Some(a), Some(b)),
            };
            if let Some(path) = &deep_path {
                return compare_fn(path.resolve(a), path.resolve(b));
            }
            if a.is_truthy() && b.is_truthy() {
                return compare_fn(a.get(key), b.get(key));
            }
            return compare_fn(Some(a), Some(b));
        });
        if self.reverse {
            items.reverse();
        }
        return items;
    }

    /// Sort the list a path names inside a keyed structure, then hand back
    /// the whole structure with the sorted list written in place.
    fn sort_structure(&self, value: Value, key: Option<&str>) -> Value {
        let key = match key {
            Some(key) if !key.is_empty() => key,
            _ => return value,
        };
        let path = FieldPath::parse(key);

        // The whole path may name the list itself; then there is no
        // per-element sort key.
        let located = path.resolve(&value).cloned();
        if let Some(Value::Sequence(items)) = located {
            let sorted = self.sort_sequence(items, None);
            let mut result = value;
            path::set_value(&mut result, path.segments(), Value::Sequence(sorted));
            return result;
        }

        // Otherwise the last segment is the sort key for the list one
        // level up.
        let (last, prefix) = match path.segments().split_last() {
            Some(pair) => pair,
            None => return value,
        };
        let located = path::resolve_segments(prefix, &value).cloned();
        if let Some(Value::Sequence(items)) = located {
            let sorted = self.sort_sequence(items, Some(last));
            let mut result = value;
            path::set_value(&mut result, prefix, Value::Sequence(sorted));
            return result;
        }

        // Nothing sortable at the described location.
        return value;
    }

    fn compare_fn(&self) -> &Comparator {
        if let Some(custom) = &self.comparator {
            return custom.as_ref();
        }
        if self.case_insensitive {
            return &compare::case_insensitive_compare;
        }
        return &compare::default_compare;
    }
}

impl Default for Order {
    fn default() -> Self {
        return Self::new();
    }
}

/// One-shot ordering by a single field path.
pub fn order(value: &Value, key: &str) -> Value {
    return Order::by(key).apply(value);
}

/// Bottom-up stable merge sort.
///
/// The default comparator is not a total order (cross-kind operands answer
/// `Less` from both sides), and the standard library's sort is allowed to
/// panic on comparators like that. This one never panics: an element only
/// moves ahead of one before it when the comparator strictly orders it
/// first, so pairs the comparator cannot order keep their input order.
fn stable_sort_by<F>(items: &mut Vec<Value>, compare: F)
where
    F: Fn(&Value, &Value) -> Ordering,
{
    let len = items.len();
    if len < 2 {
        return;
    }
    let mut buffer = items.clone();
    let mut width = 1;
    while width < len {
        let mut start = 0;
        while start < len {
            let middle = usize::min(start + width, len);
            let end = usize::min(start + 2 * width, len);
            merge(&items[start..middle], &items[middle..end], &mut buffer[start..end], &compare);
            start = end;
        }
        std::mem::swap(items, &mut buffer);
        width *= 2;
    }
}

fn merge<F>(left: &[Value], right: &[Value], out: &mut [Value], compare: &F)
where
    F: Fn(&Value, &Value) -> Ordering,
{
    let mut i = 0;
    let mut j = 0;
    for slot in out.iter_mut() {
        let take_right = i == left.len()
            || (j < right.len() && compare(&left[i], &right[j]) == Ordering::Greater);
        if take_right {
            *slot = right[j].clone();
            j += 1;
        } else {
            *slot = left[i].clone();
            i += 1;
        }
    }
}
