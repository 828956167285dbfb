//! AFL fuzz harness for the ordering engine.
//!
//! Invariants under test:
//! 1. Totality: no input value, directive, or flag combination panics.
//! 2. Permutation: ordering a sequence keeps its length.
//! 3. Determinism: applying the same ordering twice gives the same result.

use afl::fuzz;
use orderly::Order;
use orderly::Value;

const MAX_DEPTH: usize = 3;

/// Decode one value from the byte stream. Consumes a tag byte, then
/// whatever the variant needs; containers recurse with a depth limit.
fn value_from_bytes(bytes: &[u8], depth: usize) -> (Value, &[u8]) {
    let (tag, rest) = match bytes.split_first() {
        Some((tag, rest)) => (*tag, rest),
        None => return (Value::Null, bytes),
    };

    match tag % 6 {
        0 => (Value::Null, rest),
        1 => (Value::Bool(tag & 0x40 != 0), rest),
        2 => {
            let (byte, rest) = take_byte(rest);
            (Value::Number(byte as f64 - 128.0), rest)
        }
        3 => {
            let (text, rest) = text_from_bytes(rest);
            (Value::Text(text), rest)
        }
        4 if depth < MAX_DEPTH => {
            let (len, mut rest) = take_byte(rest);
            let mut items = Vec::new();
            for _ in 0..(len % 5) {
                let (item, tail) = value_from_bytes(rest, depth + 1);
                items.push(item);
                rest = tail;
            }
            (Value::Sequence(items), rest)
        }
        5 if depth < MAX_DEPTH => {
            let (len, mut rest) = take_byte(rest);
            let mut fields = std::collections::BTreeMap::new();
            for _ in 0..(len % 5) {
                let (key, tail) = text_from_bytes(rest);
                let (item, tail) = value_from_bytes(tail, depth + 1);
                fields.insert(key, item);
                rest = tail;
            }
            (Value::Map(fields), rest)
        }
        _ => (Value::Null, rest),
    }
}

fn take_byte(bytes: &[u8]) -> (u8, &[u8]) {
    match bytes.split_first() {
        Some((byte, rest)) => (*byte, rest),
        None => (0, bytes),
    }
}

/// Short strings over a directive-relevant alphabet, dots and brackets
/// included so path parsing gets exercised.
fn text_from_bytes(bytes: &[u8]) -> (String, &[u8]) {
    const ALPHABET: &[u8] = b"abc012._[]";
    let (len, rest) = take_byte(bytes);
    let len = (len % 8) as usize;
    let take = len.min(rest.len());
    let text = rest[..take]
        .iter()
        .map(|byte| ALPHABET[(*byte as usize) % ALPHABET.len()] as char)
        .collect();
    return (text, &rest[take..]);
}

fn main() {
    fuzz!(|data: &[u8]| {
        let (value, rest) = value_from_bytes(data, 0);
        let (directive, rest) = text_from_bytes(rest);
        let (flags, _) = take_byte(rest);

        let order = Order::by(&directive)
            .reversed(flags & 1 != 0)
            .case_insensitive(flags & 2 != 0);

        let first = order.apply(&value);
        if let (Value::Sequence(input), Value::Sequence(output)) = (&value, &first) {
            assert_eq!(input.len(), output.len(), "ordering changed sequence length");
        }

        let second = order.apply(&value);
        assert_eq!(first, second, "ordering is not deterministic");
    });
}
