//! Read access to a parsed configuration tree.
//!
//! A missing key yields `None` from [`ConfigNode::child`]; a present but
//! empty or mistyped value falls back to the default handed to the typed
//! getters.

pub trait ConfigNode: Sized {
    fn child(&self, key: &str) -> Option<&Self>;

    /// `null` or an empty string.
    fn is_empty(&self) -> bool;

    /// Scalars coerced to their string form.
    fn as_string(&self) -> Option<String>;

    fn as_int(&self) -> Option<i64>;

    fn as_bool(&self) -> Option<bool>;

    fn as_list(&self) -> Option<Vec<&Self>>;

    /// Key/value pairs of a map node, empty for anything else.
    fn children(&self) -> Vec<(&str, &Self)>;

    fn get_string(&self, default: &str) -> String {
        match self.as_string() {
            Some(s) if !self.is_empty() => s,
            _ => default.to_string(),
        }
    }

    fn get_int(&self, default: i64) -> i64 {
        self.as_int().unwrap_or(default)
    }

    fn get_bool(&self, default: bool) -> bool {
        self.as_bool().unwrap_or(default)
    }

    /// A list of scalars; a lone scalar reads as a one element list.
    fn get_string_list(&self) -> Vec<String> {
        match self.as_list() {
            Some(list) => list.into_iter().filter_map(Self::as_string).collect(),
            None if self.is_empty() => Vec::new(),
            None => self.as_string().into_iter().collect(),
        }
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

fn float_to_int(f: f64) -> Option<i64> {
    (f.fract() == 0.0 && f.is_finite()).then_some(f as i64)
}

impl ConfigNode for toml::Value {
    fn child(&self, key: &str) -> Option<&Self> {
        match self {
            toml::Value::Table(table) => table.get(key),
            _ => None,
        }
    }

    fn is_empty(&self) -> bool {
        matches!(self, toml::Value::String(s) if s.is_empty())
    }

    fn as_string(&self) -> Option<String> {
        match self {
            toml::Value::String(s) => Some(s.clone()),
            toml::Value::Integer(i) => Some(i.to_string()),
            toml::Value::Float(f) => Some(f.to_string()),
            toml::Value::Boolean(b) => Some(b.to_string()),
            toml::Value::Datetime(d) => Some(d.to_string()),
            toml::Value::Array(_) | toml::Value::Table(_) => None,
        }
    }

    fn as_int(&self) -> Option<i64> {
        match self {
            toml::Value::Integer(i) => Some(*i),
            toml::Value::Float(f) => float_to_int(*f),
            toml::Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    fn as_bool(&self) -> Option<bool> {
        match self {
            toml::Value::Boolean(b) => Some(*b),
            toml::Value::String(s) => parse_bool(s),
            _ => None,
        }
    }

    fn as_list(&self) -> Option<Vec<&Self>> {
        match self {
            toml::Value::Array(values) => Some(values.iter().collect()),
            _ => None,
        }
    }

    fn children(&self) -> Vec<(&str, &Self)> {
        match self {
            toml::Value::Table(table) => table.iter().map(|(k, v)| (k.as_str(), v)).collect(),
            _ => Vec::new(),
        }
    }
}

impl ConfigNode for serde_json::Value {
    fn child(&self, key: &str) -> Option<&Self> {
        match self {
            serde_json::Value::Object(map) => map.get(key),
            _ => None,
        }
    }

    fn is_empty(&self) -> bool {
        match self {
            serde_json::Value::Null => true,
            serde_json::Value::String(s) => s.is_empty(),
            _ => false,
        }
    }

    fn as_string(&self) -> Option<String> {
        match self {
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Number(n) => Some(n.to_string()),
            serde_json::Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    fn as_int(&self) -> Option<i64> {
        match self {
            serde_json::Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(float_to_int)),
            serde_json::Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    fn as_bool(&self) -> Option<bool> {
        match self {
            serde_json::Value::Bool(b) => Some(*b),
            serde_json::Value::String(s) => parse_bool(s),
            _ => None,
        }
    }

    fn as_list(&self) -> Option<Vec<&Self>> {
        match self {
            serde_json::Value::Array(values) => Some(values.iter().collect()),
            _ => None,
        }
    }

    fn children(&self) -> Vec<(&str, &Self)> {
        match self {
            serde_json::Value::Object(map) => map.iter().map(|(k, v)| (k.as_str(), v)).collect(),
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::ConfigNode;

    fn toml_node(s: &str) -> toml::Value {
        toml::Value::Table(toml::from_str(s).unwrap())
    }

    #[test]
    fn toml_typed_reads() {
        let node = toml_node(
            r#"
            amount = 3
            glowing = "true"
            name = ""
            lore = ["a", 2, true]
            single = "only"
            model = 12.0
            "#,
        );
        assert_eq!(node.child("amount").unwrap().get_int(1), 3);
        assert!(node.child("glowing").unwrap().get_bool(false));
        assert_eq!(node.child("name").unwrap().get_string("fallback"), "fallback");
        assert_eq!(
            node.child("lore").unwrap().get_string_list(),
            vec!["a", "2", "true"]
        );
        assert_eq!(node.child("single").unwrap().get_string_list(), vec!["only"]);
        assert_eq!(node.child("model").unwrap().get_int(0), 12);
        assert!(node.child("missing").is_none());
    }

    #[test]
    fn toml_mistyped_falls_back() {
        let node = toml_node(
            r#"
            amount = "lots"
            glowing = 5
            "#,
        );
        assert_eq!(node.child("amount").unwrap().get_int(1), 1);
        assert!(!node.child("glowing").unwrap().get_bool(false));
    }

    #[test]
    fn toml_children_of_table() {
        let node = toml_node(
            r#"
            [enchants]
            sharpness = 5
            unbreaking = 3
            "#,
        );
        let children = node.child("enchants").unwrap().children();
        let keys: Vec<&str> = children.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec!["sharpness", "unbreaking"]);
        assert!(node.child("enchants").unwrap().child("sharpness").unwrap().children().is_empty());
    }

    #[test]
    fn json_nodes() {
        let node: serde_json::Value = serde_json::from_str(
            r#"{"amount": null, "lore": ["x"], "color": {"red": 10}, "level": "4"}"#,
        )
        .unwrap();
        assert!(node.child("amount").unwrap().is_empty());
        assert_eq!(node.child("amount").unwrap().get_int(1), 1);
        assert_eq!(node.child("lore").unwrap().get_string_list(), vec!["x"]);
        assert_eq!(node.child("amount").unwrap().get_string_list(), Vec::<String>::new());
        assert_eq!(
            node.child("color").unwrap().child("red").unwrap().get_int(0),
            10
        );
        assert_eq!(node.child("level").unwrap().get_int(1), 4);
    }
}
