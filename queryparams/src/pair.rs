use alloc::{borrow::Cow, string::ToString};

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pair<'a> {
    key: Cow<'a, str>,
    value: Cow<'a, str>,
}

impl<'a> Pair<'a> {
    pub fn new(key: impl Into<Cow<'a, str>>, value: impl Into<Cow<'a, str>>) -> Pair<'a> {
        Pair {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn to_owned(self) -> Pair<'static> {
        Pair {
            key: self.key.to_string().into(),
            value: self.value.to_string().into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn into_parts(self) -> (Cow<'a, str>, Cow<'a, str>) {
        (self.key, self.value)
    }
}

impl<'a> From<(&'a str, &'a str)> for Pair<'a> {
    fn from((key, value): (&'a str, &'a str)) -> Pair<'a> {
        Pair::new(key, value)
    }
}
