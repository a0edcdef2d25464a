use std::{borrow::Borrow, fmt, str::FromStr};

use thiserror::Error;

/// Opaque identifier of a mosque as issued by the upstream API.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct MosqueId(String);

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("Empty mosque ID")]
pub struct EmptyIdError;

impl MosqueId {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for MosqueId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl TryFrom<String> for MosqueId {
    type Error = EmptyIdError;
    fn try_from(from: String) -> Result<Self, Self::Error> {
        let trimmed = from.trim();
        if trimmed.is_empty() {
            return Err(EmptyIdError);
        }
        if trimmed.len() == from.len() {
            Ok(Self(from))
        } else {
            Ok(Self(trimmed.to_owned()))
        }
    }
}

impl FromStr for MosqueId {
    type Err = EmptyIdError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.to_owned().try_into()
    }
}

impl From<MosqueId> for String {
    fn from(from: MosqueId) -> Self {
        from.0
    }
}

impl Borrow<str> for MosqueId {
    fn borrow(&self) -> &str {
        self.as_ref()
    }
}

impl fmt::Display for MosqueId {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        f.write_str(self.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_id() {
        assert_eq!("m1", "m1".parse::<MosqueId>().unwrap().as_str());
        assert_eq!("m1", " m1\n".parse::<MosqueId>().unwrap().as_str());
        assert_eq!(Err(EmptyIdError), "".parse::<MosqueId>());
        assert_eq!(Err(EmptyIdError), "  ".parse::<MosqueId>());
    }
}
