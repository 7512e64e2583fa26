//! Textual link edits.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;
use crate::weather::Weather;

/// One change to a network link.
///
/// Parses from whitespace-separated words:
///
/// ```text
/// remove FROM TO
/// set FROM TO WEIGHT
/// update FROM TO WEIGHT
/// weather FROM TO CONDITION
/// ```
///
/// # Examples
///
/// ```
/// use u_roadnet::session::Edit;
/// use u_roadnet::weather::Weather;
///
/// let edit: Edit = "weather Lima Quito nieve".parse().unwrap();
/// assert_eq!(
///     edit,
///     Edit::Weather { from: "Lima".into(), to: "Quito".into(), weather: Weather::Snow }
/// );
/// assert!("close Lima Quito".parse::<Edit>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Edit {
    /// Interrupt traffic on a link.
    Remove { from: String, to: String },
    /// Establish a link, or overwrite its weight.
    Set { from: String, to: String, weight: f64 },
    /// Change the weight of an existing link.
    Update { from: String, to: String, weight: f64 },
    /// Switch an existing link to its time for a weather condition.
    Weather {
        from: String,
        to: String,
        weather: Weather,
    },
}

impl FromStr for Edit {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| ParseError::InvalidEdit {
            input: s.to_string(),
            reason: reason.to_string(),
        };
        let words: Vec<&str> = s.split_whitespace().collect();
        let (verb, from, to, arg) = match words.as_slice() {
            [verb, from, to] => (*verb, *from, *to, None),
            [verb, from, to, arg] => (*verb, *from, *to, Some(*arg)),
            _ => return Err(invalid("expected: VERB FROM TO [VALUE]")),
        };
        let (from, to) = (from.to_string(), to.to_string());
        let weight = |arg: Option<&str>| -> Result<f64, ParseError> {
            arg.ok_or_else(|| invalid("missing weight"))?
                .parse::<f64>()
                .map_err(|_| invalid("weight is not a number"))
        };

        match (verb.to_ascii_lowercase().as_str(), arg) {
            ("remove", None) => Ok(Edit::Remove { from, to }),
            ("remove", Some(_)) => Err(invalid("remove takes no value")),
            ("set", _) => Ok(Edit::Set {
                from,
                to,
                weight: weight(arg)?,
            }),
            ("update", _) => Ok(Edit::Update {
                from,
                to,
                weight: weight(arg)?,
            }),
            ("weather", Some(cond)) => Ok(Edit::Weather {
                from,
                to,
                weather: cond.parse()?,
            }),
            ("weather", None) => Err(invalid("missing weather condition")),
            _ => Err(invalid("unknown verb")),
        }
    }
}

impl fmt::Display for Edit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Edit::Remove { from, to } => write!(f, "remove {from} {to}"),
            Edit::Set { from, to, weight } => write!(f, "set {from} {to} {weight}"),
            Edit::Update { from, to, weight } => write!(f, "update {from} {to} {weight}"),
            Edit::Weather { from, to, weather } => write!(f, "weather {from} {to} {weather}"),
        }
    }
}
