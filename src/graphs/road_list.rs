//! Turns user supplied road entries into well-formed [`Road`]s.
//!
//! Every field is read like a form input: leading whitespace and an optional
//! sign, then as many digits as follow. `2.5` reads as 2 and `7km` as 7.
//! Entries with a field that starts without a digit, endpoints outside `0..n`
//! or a non-positive cost are dropped silently. Only a document that cannot be
//! read at all is an error.

use std::{fs, path::Path};

use serde_json::Value;

use super::{edge::Road, Cost, Junction};
use crate::error::Result;

/// Roads accepted from one road list, in input order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RoadList {
    pub roads: Vec<Road>,
    pub dropped: usize,
}

impl RoadList {
    fn from_entries<I>(entries: I, number_of_junctions: u32) -> RoadList
    where
        I: IntoIterator<Item = Option<(i64, i64, i64)>>,
    {
        let mut list = RoadList::default();
        for (line, entry) in entries.into_iter().enumerate() {
            match entry.and_then(|(from, to, cost)| validate(from, to, cost, number_of_junctions)) {
                Some(road) => list.roads.push(road),
                None => {
                    tracing::debug!(entry = line, "dropping malformed road entry");
                    list.dropped += 1;
                }
            }
        }
        list
    }
}

/// Parses a JSON array of `{"from": .., "to": .., "cost": ..}` objects.
/// Numbers may also be given as numeric strings, as form inputs produce them.
pub fn parse_roads_json(text: &str, number_of_junctions: u32) -> Result<RoadList> {
    let entries: Vec<Value> = serde_json::from_str(text)?;
    let entries = entries.iter().map(|entry| {
        Some((
            integer_field(entry, "from")?,
            integer_field(entry, "to")?,
            integer_field(entry, "cost")?,
        ))
    });
    Ok(RoadList::from_entries(entries, number_of_junctions))
}

/// Parses one `from to cost` triple per line. Empty lines and lines starting
/// with `#` are skipped.
pub fn parse_roads_text(text: &str, number_of_junctions: u32) -> RoadList {
    let entries = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| {
            let mut values = line.split_whitespace().map(leading_integer);
            Some((values.next()??, values.next()??, values.next()??))
        });
    RoadList::from_entries(entries, number_of_junctions)
}

/// Reads a road list from disk. Files ending in `.json` are parsed as JSON,
/// everything else as whitespace separated text.
pub fn read_roads(path: &Path, number_of_junctions: u32) -> Result<RoadList> {
    let text = fs::read_to_string(path)?;
    let is_json = path
        .extension()
        .is_some_and(|extension| extension.eq_ignore_ascii_case("json"));

    if is_json {
        parse_roads_json(&text, number_of_junctions)
    } else {
        Ok(parse_roads_text(&text, number_of_junctions))
    }
}

/// The demonstration network: five junctions and seven roads.
pub fn sample_roads() -> Vec<Road> {
    [
        (0, 1, 4),
        (0, 2, 2),
        (1, 2, 1),
        (1, 3, 5),
        (2, 3, 8),
        (2, 4, 10),
        (3, 4, 2),
    ]
    .into_iter()
    .map(|(from, to, cost)| Road { from, to, cost })
    .collect()
}

fn integer_field(entry: &Value, key: &str) -> Option<i64> {
    match entry.get(key)? {
        Value::Number(number) => number.as_i64().or_else(|| {
            number
                .as_f64()
                .filter(|value| value.is_finite())
                .map(|value| value.trunc() as i64)
        }),
        Value::String(text) => leading_integer(text),
        _ => None,
    }
}

/// Reads the integer prefix of `text`, `None` if there is no digit to read.
fn leading_integer(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (negative, rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let digits = rest
        .bytes()
        .take_while(|byte| byte.is_ascii_digit())
        .count();
    let value: i64 = rest[..digits].parse().ok()?;
    Some(if negative { -value } else { value })
}

fn validate(from: i64, to: i64, cost: i64, number_of_junctions: u32) -> Option<Road> {
    let in_range = |junction: i64| (0..number_of_junctions as i64).contains(&junction);
    if !in_range(from) || !in_range(to) {
        return None;
    }
    let cost = Cost::try_from(cost).ok()?;
    Road::new(from as Junction, to as Junction, cost)
}

#[cfg(test)]
mod tests {
    use super::{leading_integer, parse_roads_json, parse_roads_text, sample_roads};
    use crate::{error::Error, graphs::edge::Road};

    #[test]
    fn json_drops_malformed_entries() {
        let text = r#"[
            {"from": 0, "to": 1, "cost": 4},
            {"from": 0, "to": 5, "cost": 1},
            {"from": 1, "to": 2, "cost": 0},
            {"from": 1, "to": 2, "cost": -3},
            {"from": "2", "to": "3", "cost": "8"},
            {"from": "x", "to": 3, "cost": 8},
            {"from": 3, "cost": 2},
            7
        ]"#;
        let list = parse_roads_json(text, 5).unwrap();
        assert_eq!(
            list.roads,
            vec![Road::new(0, 1, 4).unwrap(), Road::new(2, 3, 8).unwrap()]
        );
        assert_eq!(list.dropped, 6);
    }

    #[test]
    fn fractions_are_truncated() {
        let text = r#"[
            {"from": 0, "to": 1, "cost": 2.5},
            {"from": "1", "to": "2", "cost": "3.7"},
            {"from": 2.9, "to": 3, "cost": 0.5}
        ]"#;
        let list = parse_roads_json(text, 5).unwrap();
        assert_eq!(
            list.roads,
            vec![Road::new(0, 1, 2).unwrap(), Road::new(1, 2, 3).unwrap()]
        );
        assert_eq!(list.dropped, 1);

        let list = parse_roads_text("0 1 2.5\n1 3 7km\n2 4 .5\n", 5);
        assert_eq!(
            list.roads,
            vec![Road::new(0, 1, 2).unwrap(), Road::new(1, 3, 7).unwrap()]
        );
        assert_eq!(list.dropped, 1);
    }

    #[test]
    fn integer_prefix() {
        assert_eq!(leading_integer("  42"), Some(42));
        assert_eq!(leading_integer("-3x"), Some(-3));
        assert_eq!(leading_integer("+8"), Some(8));
        assert_eq!(leading_integer("x3"), None);
        assert_eq!(leading_integer("-"), None);
        assert_eq!(leading_integer(""), None);
    }

    #[test]
    fn json_must_be_an_array() {
        assert!(matches!(
            parse_roads_json(r#"{"from": 0}"#, 5),
            Err(Error::Json(_))
        ));
    }

    #[test]
    fn text_skips_comments() {
        let text = "# from to cost\n0 1 4\n\n1 2\n2 3 eight\n3 4 2 extra\n";
        let list = parse_roads_text(text, 5);
        assert_eq!(
            list.roads,
            vec![Road::new(0, 1, 4).unwrap(), Road::new(3, 4, 2).unwrap()]
        );
        assert_eq!(list.dropped, 2);
    }

    #[test]
    fn sample_has_seven_roads() {
        let roads = sample_roads();
        assert_eq!(roads.len(), 7);
        assert!(roads.iter().all(|road| road.fits(5) && road.cost > 0));
    }
}
