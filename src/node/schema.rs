//! Module describing the node's parameters to the host.

use serde::ser::{Serialize, SerializeMap, SerializeTuple, Serializer};


/// Kind of a single node parameter, with its default value and constraints.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputType {
    /// Free-form text.
    String { default: String, multiline: bool },
    /// Integer within a range.
    Int { default: i64, min: i64, max: i64, step: i64 },
    /// One of several predefined values.
    Choice { options: Vec<String>, default: Option<String> },
    /// Image tensor.
    Image,
}

/// Named node parameter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputSpec {
    pub name: &'static str,
    pub kind: InputType,
}

impl InputSpec {
    #[inline]
    pub fn new(name: &'static str, kind: InputType) -> Self {
        InputSpec{name, kind}
    }
}


/// Schema of all the node's parameters.
///
/// Parameters are kept in the order they should be presented in.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InputTypes {
    pub required: Vec<InputSpec>,
    pub optional: Vec<InputSpec>,
}

impl InputTypes {
    /// Find a parameter by name.
    pub fn get(&self, name: &str) -> Option<&InputType> {
        self.required.iter().chain(&self.optional)
            .find(|input| input.name == name)
            .map(|input| &input.kind)
    }

    /// Whether the parameter of given name must always be given.
    pub fn is_required(&self, name: &str) -> bool {
        self.required.iter().any(|input| input.name == name)
    }
}


// Serialization into the shape the host expects:
//
//     {"required": {"name": ["INT", {"default": 1, ...}], ...}, "optional": {...}}

impl Serialize for InputTypes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("required", &Section(&self.required))?;
        map.serialize_entry("optional", &Section(&self.optional))?;
        map.end()
    }
}

struct Section<'s>(&'s [InputSpec]);

impl<'s> Serialize for Section<'s> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for input in self.0 {
            map.serialize_entry(input.name, &input.kind)?;
        }
        map.end()
    }
}

#[derive(Serialize)]
struct StringOptions<'o> {
    multiline: bool,
    default: &'o str,
}

#[derive(Serialize)]
struct IntOptions {
    default: i64,
    min: i64,
    max: i64,
    step: i64,
}

#[derive(Serialize)]
struct ChoiceOptions<'o> {
    default: &'o str,
}

impl Serialize for InputType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match *self {
            InputType::String{ref default, multiline} => {
                let mut tuple = serializer.serialize_tuple(2)?;
                tuple.serialize_element("STRING")?;
                tuple.serialize_element(&StringOptions{multiline, default})?;
                tuple.end()
            }
            InputType::Int{default, min, max, step} => {
                let mut tuple = serializer.serialize_tuple(2)?;
                tuple.serialize_element("INT")?;
                tuple.serialize_element(&IntOptions{default, min, max, step})?;
                tuple.end()
            }
            InputType::Choice{ref options, default: Some(ref default)} => {
                let mut tuple = serializer.serialize_tuple(2)?;
                tuple.serialize_element(options)?;
                tuple.serialize_element(&ChoiceOptions{default})?;
                tuple.end()
            }
            InputType::Choice{ref options, default: None} => {
                let mut tuple = serializer.serialize_tuple(1)?;
                tuple.serialize_element(options)?;
                tuple.end()
            }
            InputType::Image => {
                let mut tuple = serializer.serialize_tuple(1)?;
                tuple.serialize_element("IMAGE")?;
                tuple.end()
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use serde_json;
    use super::{InputSpec, InputType, InputTypes};

    #[test]
    fn serializes_in_host_format() {
        let types = InputTypes{
            required: vec![
                InputSpec::new("text", InputType::String{default: "hi".into(), multiline: true}),
                InputSpec::new("size", InputType::Int{default: 2, min: 0, max: 10, step: 1}),
                InputSpec::new("font", InputType::Choice{options: vec!["a.ttf".into()], default: None}),
                InputSpec::new("align", InputType::Choice{
                    options: vec!["left".into(), "right".into()], default: Some("left".into())}),
            ],
            optional: vec![InputSpec::new("image", InputType::Image)],
        };
        assert_eq!(json!({
            "required": {
                "text": ["STRING", {"multiline": true, "default": "hi"}],
                "size": ["INT", {"default": 2, "min": 0, "max": 10, "step": 1}],
                "font": [["a.ttf"]],
                "align": [["left", "right"], {"default": "left"}],
            },
            "optional": {
                "image": ["IMAGE"],
            },
        }), serde_json::to_value(&types).unwrap());
    }

    #[test]
    fn lookup() {
        let types = InputTypes{
            required: vec![InputSpec::new("size", InputType::Int{default: 2, min: 0, max: 10, step: 1})],
            optional: vec![InputSpec::new("image", InputType::Image)],
        };
        assert_eq!(Some(&InputType::Image), types.get("image"));
        assert_eq!(None, types.get("nope"));
        assert!(types.is_required("size"));
        assert!(!types.is_required("image"));
    }
}
