use serde::de::DeserializeOwned;
use serde_json::Value;

/// How a JSON-typed column came back from the driver. Depending on driver
/// and column type, a sub-document may arrive pre-parsed or as its raw text.
/// The ambiguity is resolved once here, never downstream.
#[derive(Debug, Clone, PartialEq)]
pub enum JsonField {
    Parsed(Value),
    Raw(String),
    Absent,
}

impl JsonField {
    pub fn from_column(value: Option<Value>) -> Self {
        match value {
            None => JsonField::Absent,
            // A top-level string means the document was stored double-encoded.
            Some(Value::String(text)) => JsonField::Raw(text),
            Some(value) => JsonField::Parsed(value),
        }
    }

    /// Materialize the column as a structured value. Raw text is decoded;
    /// JSON `null`, absent columns and undecodable text all resolve to None.
    pub fn resolve(self) -> Option<Value> {
        let value = match self {
            JsonField::Absent => return None,
            JsonField::Parsed(value) => value,
            JsonField::Raw(text) => serde_json::from_str(&text).ok()?,
        };
        (!value.is_null()).then_some(value)
    }

    /// Resolve and shape into a typed sub-document. A document that does not
    /// match the expected shape resolves to None rather than failing the row.
    pub fn resolve_as<T: DeserializeOwned>(self) -> Option<T> {
        self.resolve().and_then(|v| serde_json::from_value(v).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parsed_document_passes_through() {
        let field = JsonField::from_column(Some(json!({"color": "Brown", "type": "Curly"})));
        assert_eq!(
            field.resolve(),
            Some(json!({"color": "Brown", "type": "Curly"}))
        );
    }

    #[test]
    fn raw_text_is_decoded() {
        let field = JsonField::from_column(Some(Value::String(
            r#"{"coin":"Bitcoin","wallet":"0xabc","network":"Ethereum (ERC20)"}"#.into(),
        )));
        assert!(matches!(field, JsonField::Raw(_)));
        let value = field.resolve().expect("raw text should decode");
        assert_eq!(value["coin"], "Bitcoin");
    }

    #[test]
    fn null_text_resolves_to_none() {
        let field = JsonField::from_column(Some(Value::String("null".into())));
        assert_eq!(field.resolve(), None);
    }

    #[test]
    fn parsed_null_resolves_to_none() {
        let field = JsonField::from_column(Some(Value::Null));
        assert_eq!(field.resolve(), None);
    }

    #[test]
    fn absent_column_resolves_to_none() {
        assert_eq!(JsonField::from_column(None).resolve(), None);
    }

    #[test]
    fn malformed_text_resolves_to_none_without_error() {
        let field = JsonField::Raw("{not valid json".into());
        assert_eq!(field.resolve(), None);
    }

    #[test]
    fn mismatched_shape_resolves_to_none() {
        #[derive(serde::Deserialize)]
        struct Expected {
            #[allow(dead_code)]
            color: String,
        }
        let field = JsonField::Parsed(json!({"something": "else"}));
        assert!(field.resolve_as::<Expected>().is_none());
    }
}
