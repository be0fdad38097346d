//! Argument Tokenizer
//!
//! Splits the argument text of a command into a preamble and the values that
//! follow each prefix marker.
//!
//! ```text
//! "1 n/Amy Bee t/friend t/captain"
//!  ^ preamble = "1"
//!    n/ -> ["Amy Bee"]
//!            t/ -> ["friend", "captain"]
//! ```
//!
//! A marker only counts at the start of the text or right after whitespace,
//! so `abc/def` inside a value is never mistaken for a prefix. Markers the
//! caller did not ask for are left in place as literal text.

use crate::error::ParseError;

use super::syntax::Prefix;

/// Preamble plus every prefix value, grouped by prefix in first-seen order.
///
/// A prefix that is present always has at least one value (possibly empty).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentMultimap {
    preamble: String,
    values: Vec<(Prefix, Vec<String>)>,
}

impl ArgumentMultimap {
    fn put(&mut self, prefix: Prefix, value: String) {
        match self.values.iter_mut().find(|(p, _)| *p == prefix) {
            Some((_, values)) => values.push(value),
            None => self.values.push((prefix, vec![value])),
        }
    }

    /// Text before the first recognised prefix, trimmed
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// The last value given for `prefix`
    pub fn value(&self, prefix: Prefix) -> Option<&str> {
        self.all_values(prefix).last().map(String::as_str)
    }

    /// Every value given for `prefix`, in input order; empty if absent
    pub fn all_values(&self, prefix: Prefix) -> &[String] {
        self.values
            .iter()
            .find(|(p, _)| *p == prefix)
            .map(|(_, values)| values.as_slice())
            .unwrap_or(&[])
    }

    pub fn is_present(&self, prefix: Prefix) -> bool {
        !self.all_values(prefix).is_empty()
    }

    pub fn are_all_present(&self, prefixes: &[Prefix]) -> bool {
        prefixes.iter().all(|p| self.is_present(*p))
    }

    /// Present prefixes in order of first occurrence
    pub fn prefixes(&self) -> impl Iterator<Item = Prefix> + '_ {
        self.values.iter().map(|(p, _)| *p)
    }

    /// Fails if any of `prefixes` occurs more than once.
    ///
    /// Every offending prefix is reported, in the order given.
    pub fn verify_no_duplicate_prefixes_for(&self, prefixes: &[Prefix]) -> Result<(), ParseError> {
        let mut duplicated: Vec<Prefix> = Vec::new();
        for prefix in prefixes {
            if self.all_values(*prefix).len() > 1 && !duplicated.contains(prefix) {
                duplicated.push(*prefix);
            }
        }

        if duplicated.is_empty() {
            Ok(())
        } else {
            Err(ParseError::DuplicatePrefix(duplicated))
        }
    }
}

/// Where a prefix was found in the argument text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PrefixPosition {
    prefix: Prefix,
    start: usize,
}

/// Tokenize `args`, recognising only `prefixes`
pub fn tokenize(args: &str, prefixes: &[Prefix]) -> ArgumentMultimap {
    let positions = find_prefix_positions(args, prefixes);
    extract_arguments(args, &positions)
}

fn find_prefix_positions(args: &str, prefixes: &[Prefix]) -> Vec<PrefixPosition> {
    // Longest first so that a marker sharing a head with a shorter one wins
    let mut candidates: Vec<Prefix> = prefixes.iter().copied().filter(|p| !p.is_empty()).collect();
    candidates.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
    candidates.dedup();

    let mut positions = Vec::new();
    let mut pos = 0;
    let mut at_boundary = true;

    while pos < args.len() {
        if at_boundary {
            if let Some(prefix) = candidates.iter().find(|p| args[pos..].starts_with(p.as_str())) {
                positions.push(PrefixPosition {
                    prefix: *prefix,
                    start: pos,
                });
                pos += prefix.len();
                at_boundary = false;
                continue;
            }
        }

        let Some(c) = args[pos..].chars().next() else {
            break;
        };
        at_boundary = c.is_whitespace();
        pos += c.len_utf8();
    }

    positions
}

fn extract_arguments(args: &str, positions: &[PrefixPosition]) -> ArgumentMultimap {
    let preamble_end = positions.first().map_or(args.len(), |p| p.start);
    let mut map = ArgumentMultimap {
        preamble: args[..preamble_end].trim().to_string(),
        values: Vec::new(),
    };

    for (i, position) in positions.iter().enumerate() {
        let value_start = position.start + position.prefix.len();
        let value_end = positions.get(i + 1).map_or(args.len(), |next| next.start);
        map.put(position.prefix, args[value_start..value_end].trim().to_string());
    }

    map
}
