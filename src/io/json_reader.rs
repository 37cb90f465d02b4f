use super::{specs, InstanceReader, WarningHandler};
use crate::aa::{AAFramework, Argument};
use anyhow::{Context, Result};
use serde::{
    de::{MapAccess, Visitor},
    Deserialize, Deserializer,
};
use serde_json::Value;
use std::{collections::HashSet, fmt, io::Read};

#[derive(Deserialize)]
struct JsonFramework {
    #[serde(rename = "Arguments")]
    arguments: ArgumentEntries,
    #[serde(rename = "Attack Relations")]
    attack_relations: Vec<(String, String)>,
}

/// The entries of the `Arguments` object, repeated keys included.
struct ArgumentEntries(Vec<(String, Value)>);

impl<'de> Deserialize<'de> for ArgumentEntries {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = ArgumentEntries;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an object mapping argument identifiers to labels")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<String, Value>()? {
                    entries.push(entry);
                }
                Ok(ArgumentEntries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

/// A reader for frameworks given as JSON records.
///
/// The record maps the argument identifiers to their labels in an `Arguments` object,
/// and lists the attacks as two-element arrays `[attacker, attacked]` in an `Attack Relations` array.
/// Arguments and attacks keep the order of the file.
///
/// Labels that are not strings are kept as their JSON text.
/// When an identifier is repeated in `Arguments`, its first declaration is kept.
/// Repeated attacks are kept.
/// Each of these cases raises a warning, located by the position of the entry in its collection (starting at 1).
///
/// # Format
///
/// ```text
/// {
///   "Arguments": {"a0": "the claim", "a1": "an objection", "a2": "a rebuttal"},
///   "Attack Relations": [["a2", "a1"], ["a1", "a0"]]
/// }
/// ```
///
/// # Example
///
/// ```
/// # use argame::io::{InstanceReader, JsonReader};
/// let instance = r#"{"Arguments": {"a0": "claim", "a1": "objection"}, "Attack Relations": [["a1", "a0"]]}"#;
/// let af = JsonReader::default().read(&mut instance.as_bytes()).unwrap();
/// assert_eq!(2, af.n_arguments());
/// assert_eq!("objection", af.argument_set().get_argument(&"a1".to_string()).unwrap().label());
/// ```
#[derive(Default)]
pub struct JsonReader {
    warning_handlers: Vec<WarningHandler>,
}

impl JsonReader {
    fn warn(&self, position: usize, message: String) {
        self.warning_handlers
            .iter()
            .for_each(|h| (h)(position, message.clone()));
    }
}

impl InstanceReader<String> for JsonReader {
    fn read(&self, reader: &mut dyn Read) -> Result<AAFramework<String>> {
        let record: JsonFramework =
            serde_json::from_reader(reader).context("while parsing the JSON record")?;
        let mut declared = HashSet::with_capacity(record.arguments.0.len());
        let mut arguments = Vec::with_capacity(record.arguments.0.len());
        for (i, (id, label)) in record.arguments.0.into_iter().enumerate() {
            if declared.contains(&id) {
                self.warn(
                    i + 1,
                    format!(r#"argument "{}" is declared more than once"#, id),
                );
                continue;
            }
            let label = match label {
                Value::String(s) => s,
                other => {
                    self.warn(
                        i + 1,
                        format!(r#"the label of argument "{}" is not a string"#, id),
                    );
                    other.to_string()
                }
            };
            declared.insert(id.clone());
            arguments.push((id, label));
        }
        let mut seen = HashSet::with_capacity(record.attack_relations.len());
        for (i, attack) in record.attack_relations.iter().enumerate() {
            if !seen.insert(attack) {
                self.warn(
                    i + 1,
                    format!("attack from {} to {} is declared more than once", attack.0, attack.1),
                );
            }
        }
        AAFramework::new(arguments, &record.attack_relations)
            .context("while building the framework")
    }

    fn read_arg_from_str<'a>(
        &self,
        af: &'a AAFramework<String>,
        arg: &str,
    ) -> Result<&'a Argument<String>> {
        specs::string_arg_from_str(af, arg)
    }

    fn add_warning_handler(&mut self, h: WarningHandler) {
        self.warning_handlers.push(h);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aa::FrameworkError;
    use std::{cell::RefCell, rc::Rc};

    fn str_args(af: &AAFramework<String>) -> Vec<String> {
        af.argument_set()
            .iter()
            .map(|a| format!("{}={}", a, a.label()))
            .collect()
    }

    fn str_attacks(af: &AAFramework<String>) -> Vec<String> {
        af.iter_attacks()
            .map(|a| format!("({},{})", a.attacker(), a.attacked()))
            .collect()
    }

    #[test]
    fn test_read_ok() {
        let instance = r#"{
            "Arguments": {"a2": "rebuttal", "a0": "claim", "a1": "objection"},
            "Attack Relations": [["a2", "a1"], ["a1", "a0"]]
        }"#;
        let af = JsonReader::default().read(&mut instance.as_bytes()).unwrap();
        assert_eq!(
            vec!["a2=rebuttal", "a0=claim", "a1=objection"],
            str_args(&af)
        );
        assert_eq!(vec!["(a2,a1)", "(a1,a0)"], str_attacks(&af));
    }

    #[test]
    fn test_read_empty() {
        let instance = r#"{"Arguments": {}, "Attack Relations": []}"#;
        let af = JsonReader::default().read(&mut instance.as_bytes()).unwrap();
        assert_eq!(0, af.n_arguments());
        assert_eq!(0, af.n_attacks());
    }

    #[test]
    fn test_read_unknown_arg_in_attack() {
        let instance = r#"{"Arguments": {"a": "a"}, "Attack Relations": [["a", "z"]]}"#;
        let err = JsonReader::default()
            .read(&mut instance.as_bytes())
            .unwrap_err();
        assert_eq!(
            Some(&FrameworkError::InvalidReference {
                attacker: "a".to_string(),
                attacked: "z".to_string()
            }),
            err.downcast_ref::<FrameworkError>()
        );
    }

    #[test]
    fn test_read_missing_field() {
        let instance = r#"{"Arguments": {"a": "a"}}"#;
        assert!(JsonReader::default()
            .read(&mut instance.as_bytes())
            .is_err());
    }

    #[test]
    fn test_read_malformed_attack() {
        let instance = r#"{"Arguments": {"a": "a"}, "Attack Relations": [["a"]]}"#;
        assert!(JsonReader::default()
            .read(&mut instance.as_bytes())
            .is_err());
    }

    #[test]
    fn test_read_not_json() {
        assert!(JsonReader::default()
            .read(&mut "arg(a).".as_bytes())
            .is_err());
    }

    #[test]
    fn test_warnings() {
        let instance = r#"{
            "Arguments": {"a": "a", "b": 2},
            "Attack Relations": [["a", "b"], ["b", "a"], ["a", "b"]]
        }"#;
        let warnings = Rc::new(RefCell::new(vec![]));
        let warnings_clone = Rc::clone(&warnings);
        let mut reader = JsonReader::default();
        reader.add_warning_handler(Box::new(move |i, w| warnings_clone.borrow_mut().push((i, w))));
        let af = reader.read(&mut instance.as_bytes()).unwrap();
        assert_eq!("2", af.argument_set().get_argument(&"b".to_string()).unwrap().label());
        assert_eq!(3, af.n_attacks());
        assert_eq!(
            vec![
                (2, r#"the label of argument "b" is not a string"#.to_string()),
                (3, "attack from a to b is declared more than once".to_string())
            ],
            warnings.borrow().clone()
        );
    }

    #[test]
    fn test_repeated_argument_keeps_first_declaration() {
        let instance = r#"{
            "Arguments": {"a": "first", "b": "x", "a": "second"},
            "Attack Relations": [["b", "a"]]
        }"#;
        let warnings = Rc::new(RefCell::new(vec![]));
        let warnings_clone = Rc::clone(&warnings);
        let mut reader = JsonReader::default();
        reader.add_warning_handler(Box::new(move |i, w| warnings_clone.borrow_mut().push((i, w))));
        let af = reader.read(&mut instance.as_bytes()).unwrap();
        assert_eq!(vec!["a=first", "b=x"], str_args(&af));
        assert_eq!(
            vec![(3, r#"argument "a" is declared more than once"#.to_string())],
            warnings.borrow().clone()
        );
    }

    #[test]
    fn test_read_arguments_not_an_object() {
        let instance = r#"{"Arguments": ["a"], "Attack Relations": []}"#;
        assert!(JsonReader::default()
            .read(&mut instance.as_bytes())
            .is_err());
    }

    #[test]
    fn test_read_arg_from_str() {
        let instance = r#"{"Arguments": {"a": "a"}, "Attack Relations": []}"#;
        let reader = JsonReader::default();
        let af = reader.read(&mut instance.as_bytes()).unwrap();
        assert!(reader.read_arg_from_str(&af, "a").is_ok());
        assert!(reader.read_arg_from_str(&af, "b").is_err());
    }
}
