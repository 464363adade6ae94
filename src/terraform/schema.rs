//! Declarative attribute schema for a resource type.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Required,
    Optional,
    Computed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeType {
    String,
    Bool,
    Int64,
    StringList,
    SingleNested(Vec<Attribute>),
    ListNested(Vec<Attribute>),
    Timeouts,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: &'static str,
    pub attribute_type: AttributeType,
    pub mode: Mode,
    pub description: &'static str,
    pub allowed_values: &'static [&'static str],
}

impl Attribute {
    fn new(
        name: &'static str,
        attribute_type: AttributeType,
        mode: Mode,
        description: &'static str,
    ) -> Self {
        Self {
            name,
            attribute_type,
            mode,
            description,
            allowed_values: &[],
        }
    }

    pub fn string(name: &'static str, mode: Mode, description: &'static str) -> Self {
        Self::new(name, AttributeType::String, mode, description)
    }

    pub fn bool(name: &'static str, mode: Mode, description: &'static str) -> Self {
        Self::new(name, AttributeType::Bool, mode, description)
    }

    pub fn int64(name: &'static str, mode: Mode, description: &'static str) -> Self {
        Self::new(name, AttributeType::Int64, mode, description)
    }

    pub fn string_list(name: &'static str, mode: Mode, description: &'static str) -> Self {
        Self::new(name, AttributeType::StringList, mode, description)
    }

    pub fn single_nested(
        name: &'static str,
        mode: Mode,
        description: &'static str,
        attributes: Vec<Attribute>,
    ) -> Self {
        Self::new(name, AttributeType::SingleNested(attributes), mode, description)
    }

    pub fn list_nested(
        name: &'static str,
        mode: Mode,
        description: &'static str,
        attributes: Vec<Attribute>,
    ) -> Self {
        Self::new(name, AttributeType::ListNested(attributes), mode, description)
    }

    pub fn timeouts() -> Self {
        Self::new(
            "timeouts",
            AttributeType::Timeouts,
            Mode::Optional,
            "Per-operation timeouts (create, read, update, delete). Defaults to 30s each.",
        )
    }

    /// Restricts a string (or string list element) to the given enumerators.
    pub fn one_of(mut self, values: &'static [&'static str]) -> Self {
        self.allowed_values = values;
        self
    }

    pub fn nested(&self) -> &[Attribute] {
        match &self.attribute_type {
            AttributeType::SingleNested(attrs) | AttributeType::ListNested(attrs) => attrs,
            _ => &[],
        }
    }

    pub fn type_label(&self) -> &'static str {
        match self.attribute_type {
            AttributeType::String => "string",
            AttributeType::Bool => "bool",
            AttributeType::Int64 => "int64",
            AttributeType::StringList => "list(string)",
            AttributeType::SingleNested(_) => "object",
            AttributeType::ListNested(_) => "list(object)",
            AttributeType::Timeouts => "timeouts",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    pub description: &'static str,
    pub attributes: Vec<Attribute>,
}

impl Schema {
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.name == name)
    }

    /// Resolves a dotted path such as `conditions.users.include_users`.
    pub fn lookup(&self, path: &str) -> Option<&Attribute> {
        let mut segments = path.split('.');
        let mut current = self.attribute(segments.next()?)?;
        for segment in segments {
            current = current.nested().iter().find(|a| a.name == segment)?;
        }
        Some(current)
    }
}
