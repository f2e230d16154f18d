use std::fmt;

/// Client identifier, matched as plain text
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cpf(pub String);

impl Cpf {
    pub fn new(cpf: impl Into<String>) -> Self {
        return Self(cpf.into());
    }

    pub fn as_str(&self) -> &str {
        return &self.0;
    }
}

impl fmt::Display for Cpf {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(f, "{}", self.0);
    }
}

impl From<&str> for Cpf {
    fn from(cpf: &str) -> Self {
        return Self::new(cpf);
    }
}
