use std::time::Duration;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AttributeType {
    String,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AttributeMode {
    Required,
    Computed,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AttributeSchema {
    pub name: &'static str,
    pub attribute_type: AttributeType,
    pub mode: AttributeMode,
    pub sensitive: bool,
}

impl AttributeSchema {
    pub fn required_string(name: &'static str) -> Self {
        Self {
            name,
            attribute_type: AttributeType::String,
            mode: AttributeMode::Required,
            sensitive: false,
        }
    }

    pub fn computed_sensitive_string(name: &'static str) -> Self {
        Self {
            name,
            attribute_type: AttributeType::String,
            mode: AttributeMode::Computed,
            sensitive: true,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ResourceTimeouts {
    pub read: Duration,
}

/// Attribute and timeout declaration a host binds a read handler to.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DataSourceSchema {
    pub type_name: &'static str,
    pub attributes: Vec<AttributeSchema>,
    pub timeouts: ResourceTimeouts,
}

impl DataSourceSchema {
    pub fn attribute(&self, name: &str) -> Option<&AttributeSchema> {
        self.attributes.iter().find(|attribute| attribute.name == name)
    }

    pub fn is_required(&self, name: &str) -> bool {
        self.attribute(name)
            .is_some_and(|attribute| attribute.mode == AttributeMode::Required)
    }

    pub fn sensitive_attributes(&self) -> Vec<&'static str> {
        self.attributes
            .iter()
            .filter(|attribute| attribute.sensitive)
            .map(|attribute| attribute.name)
            .collect()
    }
}
