#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Type {
    String,
    Integer,
    Float,
    Bool,
    Object,
    Array,
}

impl Type {
    pub fn string() -> Type {
        Type::String
    }
    pub fn integer() -> Type {
        Type::Integer
    }
    pub fn float() -> Type {
        Type::Float
    }
    pub fn bool() -> Type {
        Type::Bool
    }
    pub fn object() -> Type {
        Type::Object
    }
    pub fn array() -> Type {
        Type::Array
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OperationInput {
    pub name: String,
    pub documentation: String,
    pub typing: Type,
    pub optional: bool,
}

/// Declares one operation of a node: the matcher the dispatcher selects on
/// and the inputs the host form collects for it. Display metadata beyond the
/// documentation string is the host's concern, not the addon's.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OperationSpecification {
    pub name: String,
    pub matcher: String,
    pub documentation: String,
    pub inputs: Vec<OperationInput>,
}

impl OperationSpecification {
    pub fn required_inputs(&self) -> impl Iterator<Item = &OperationInput> {
        self.inputs.iter().filter(|input| !input.optional)
    }
}
