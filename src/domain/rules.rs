use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use super::{Cell, RuleError};

/// Largest neighbor count the 8-neighbor counter can produce
pub const MAX_NEIGHBORS: u32 = 8;

/// Progressive 9-state variant of Conway's Life.
/// State 1 behaves like a live Life cell; states 2..=8 form a decay chain.
pub const DEFAULT_RULES: &str = "0:0,0\n1:0,0\n2:3,1\n3:1,1\n4:5,0\n5:6,0\n6:7,0\n7:8,0\n8:0,0\n";

/// Transition table keyed by live-neighbor count.
/// Each entry holds the next state for a currently dead cell and for a
/// currently alive cell. Immutable once parsed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleTable {
    entries: BTreeMap<u32, (Cell, Cell)>,
}

impl RuleTable {
    /// Parse newline-separated `count:dead,alive` records.
    ///
    /// A trailing line terminator does not start a new record, so `""`
    /// yields an empty table. Missing counts are not an error here; they
    /// surface as [`RuleError::UnknownNeighborCount`] on lookup.
    pub fn parse(spec: &str) -> Result<Self, RuleError> {
        let mut entries = BTreeMap::new();

        for (idx, record) in spec.split_terminator('\n').enumerate() {
            let (count, dead, alive) = parse_record(record).map_err(|reason| RuleError::Parse {
                line: idx + 1,
                record: record.to_string(),
                reason,
            })?;
            entries.insert(count, (Cell(dead), Cell(alive)));
        }

        tracing::debug!(entries = entries.len(), "parsed rule table");
        Ok(Self { entries })
    }

    /// Next state for a cell with `neighbors` live neighbors
    pub fn lookup(&self, neighbors: u32, is_alive: bool) -> Result<Cell, RuleError> {
        let &(dead, alive) = self
            .entries
            .get(&neighbors)
            .ok_or(RuleError::UnknownNeighborCount { count: neighbors })?;
        Ok(if is_alive { alive } else { dead })
    }

    /// Neighbor counts in `0..=max` that have no entry
    pub fn missing_counts(&self, max: u32) -> Vec<u32> {
        (0..=max).filter(|n| !self.entries.contains_key(n)).collect()
    }

    /// True when every count an 8-neighbor grid can produce is covered
    pub fn is_complete(&self) -> bool {
        self.missing_counts(MAX_NEIGHBORS).is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in ascending neighbor-count order as `(count, dead_next, alive_next)`
    pub fn iter(&self) -> impl Iterator<Item = (u32, Cell, Cell)> + '_ {
        self.entries.iter().map(|(&n, &(dead, alive))| (n, dead, alive))
    }
}

/// Split one record into its three integer fields
fn parse_record(record: &str) -> Result<(u32, u32, u32), &'static str> {
    let (count, outputs) = record
        .split_once(':')
        .ok_or("expected `count:dead,alive`")?;
    let (dead, alive) = outputs
        .split_once(',')
        .ok_or("expected both a dead and an alive output")?;
    if alive.contains([':', ',']) {
        return Err("too many fields");
    }

    Ok((parse_field(count)?, parse_field(dead)?, parse_field(alive)?))
}

fn parse_field(field: &str) -> Result<u32, &'static str> {
    field
        .trim()
        .parse()
        .map_err(|_| "field is not a non-negative integer")
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::parse(DEFAULT_RULES).unwrap_or_else(|_| unreachable!("default rules are well-formed"))
    }
}

impl FromStr for RuleTable {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Renders the table back into the rule-spec text format
impl fmt::Display for RuleTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (n, dead, alive) in self.iter() {
            writeln!(f, "{}:{},{}", n, dead.state(), alive.state())?;
        }
        Ok(())
    }
}

/// Named rule specifications
pub mod presets {
    pub use super::DEFAULT_RULES;

    /// Conway's Game of Life (B3/S23), strictly binary
    pub const CONWAY: &str = "0:0,0\n1:0,0\n2:0,1\n3:1,1\n4:0,0\n5:0,0\n6:0,0\n7:0,0\n8:0,0\n";

    /// HighLife (B36/S23) - births on 6 neighbors create replicators
    pub const HIGHLIFE: &str = "0:0,0\n1:0,0\n2:0,1\n3:1,1\n4:0,0\n5:0,0\n6:1,0\n7:0,0\n8:0,0\n";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rules_life_semantics() {
        let rules = RuleTable::parse(DEFAULT_RULES).unwrap();

        // Survival
        assert_eq!(rules.lookup(2, true), Ok(Cell(1)));
        assert_eq!(rules.lookup(3, true), Ok(Cell(1)));

        // Birth into the decay chain
        assert_eq!(rules.lookup(2, false), Ok(Cell(3)));
        assert_eq!(rules.lookup(3, false), Ok(Cell(1)));

        // Overpopulation
        assert_eq!(rules.lookup(4, true), Ok(Cell::DEAD));
        assert!(rules.is_complete());
    }

    #[test]
    fn test_missing_alive_output_is_parse_error() {
        let err = RuleTable::parse("2:1\n").unwrap_err();
        assert!(matches!(err, RuleError::Parse { line: 1, .. }));
    }

    #[test]
    fn test_malformed_records() {
        for spec in ["2\n", "x:1,1\n", "2:1,y\n", "2:-1,1\n", "2:1,1,1\n", "2:1:1,1\n"] {
            assert!(
                matches!(RuleTable::parse(spec), Err(RuleError::Parse { .. })),
                "{spec:?} should not parse"
            );
        }
    }

    #[test]
    fn test_error_reports_offending_line() {
        let err = RuleTable::parse("0:0,0\n1:0,0\noops\n").unwrap_err();
        assert_eq!(
            err,
            RuleError::Parse {
                line: 3,
                record: "oops".to_string(),
                reason: "expected `count:dead,alive`",
            }
        );
    }

    #[test]
    fn test_empty_spec_parses_but_lookups_fail() {
        let rules = RuleTable::parse("").unwrap();
        assert!(rules.is_empty());
        for n in 0..=MAX_NEIGHBORS {
            assert_eq!(
                rules.lookup(n, false),
                Err(RuleError::UnknownNeighborCount { count: n })
            );
            assert_eq!(
                rules.lookup(n, true),
                Err(RuleError::UnknownNeighborCount { count: n })
            );
        }
    }

    #[test]
    fn test_blank_line_inside_spec_is_rejected() {
        assert!(RuleTable::parse("0:0,0\n\n1:0,0\n").is_err());
    }

    #[test]
    fn test_last_record_without_newline_is_kept() {
        let rules = RuleTable::parse("0:0,0\n1:4,2").unwrap();
        assert_eq!(rules.lookup(1, true), Ok(Cell(2)));
    }

    #[test]
    fn test_crlf_and_whitespace_are_tolerated() {
        let rules = RuleTable::parse("0: 0, 0\r\n1:0,7\r\n").unwrap();
        assert_eq!(rules.lookup(1, true), Ok(Cell(7)));
    }

    #[test]
    fn test_keys_need_not_be_contiguous() {
        let rules = RuleTable::parse("3:1,1\n8:0,2\n").unwrap();
        assert_eq!(rules.len(), 2);
        assert_eq!(rules.missing_counts(8), vec![0, 1, 2, 4, 5, 6, 7]);
        assert!(!rules.is_complete());
    }

    #[test]
    fn test_repeated_key_overrides() {
        let rules = RuleTable::parse("3:1,1\n3:0,9\n").unwrap();
        assert_eq!(rules.lookup(3, true), Ok(Cell(9)));
    }

    #[test]
    fn test_display_matches_spec_format() {
        let rules: RuleTable = DEFAULT_RULES.parse().unwrap();
        assert_eq!(rules.to_string(), DEFAULT_RULES);
    }

    #[test]
    fn test_presets_are_complete() {
        for (name, spec) in [
            ("decay", presets::DEFAULT_RULES),
            ("conway", presets::CONWAY),
            ("highlife", presets::HIGHLIFE),
        ] {
            let rules = RuleTable::parse(spec).unwrap();
            assert!(rules.is_complete(), "{name} is missing entries");
        }
    }

    #[test]
    fn test_highlife_birth_on_six() {
        let rules = RuleTable::parse(presets::HIGHLIFE).unwrap();
        assert_eq!(rules.lookup(6, false), Ok(Cell::ALIVE));
        assert_eq!(rules.lookup(6, true), Ok(Cell::DEAD));
    }
}
