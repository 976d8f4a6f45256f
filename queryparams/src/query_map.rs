use core::iter::FromIterator;

use alloc::{borrow::Cow, string::String, vec::Vec};

use crate::{parser::parse_into, Pairs, Params};

/// An owned string-to-string map of query parameters.
///
/// Keys are unique. Inserting over an existing key replaces the value in
/// place, so iteration follows first-occurrence order and a repeated key in
/// the parsed input resolves to its last occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryMap {
    inner: Vec<(String, String)>,
}

impl QueryMap {
    pub fn new() -> QueryMap {
        QueryMap { inner: Vec::new() }
    }

    /// Parses a query string, with or without a leading `?`.
    ///
    /// Always succeeds. The returned map is a fresh value owned by the
    /// caller; an empty or absent query yields an empty map.
    pub fn parse(input: &str) -> QueryMap {
        let mut map = QueryMap::new();
        parse_into(input, &mut map);
        map
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.inner
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.inner.iter().any(|(k, _)| k == key)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Inserts a key/value entry, returning the previous value for the key.
    ///
    /// An existing key keeps its position in iteration order.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let key = key.into();
        let value = value.into();

        match self.inner.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(core::mem::replace(slot, value)),
            None => {
                self.inner.push((key, value));
                None
            }
        }
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        let index = self.inner.iter().position(|(k, _)| k == key)?;
        Some(self.inner.remove(index).1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.inner.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.inner.iter().map(|(k, _)| k.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.inner.iter().map(|(_, v)| v.as_str())
    }
}

impl Params for QueryMap {
    fn set(&mut self, key: Cow<'_, str>, value: Cow<'_, str>) {
        self.insert(key.into_owned(), value.into_owned());
    }
}

impl<'a> From<Pairs<'a>> for QueryMap {
    fn from(pairs: Pairs<'a>) -> QueryMap {
        let mut map = QueryMap::new();
        for pair in pairs {
            let (key, value) = pair.into_parts();
            map.set(key, value);
        }
        map
    }
}

impl From<&str> for QueryMap {
    fn from(input: &str) -> QueryMap {
        QueryMap::parse(input)
    }
}

impl<K, V> Extend<(K, V)> for QueryMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V> FromIterator<(K, V)> for QueryMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> QueryMap {
        let mut map = QueryMap::new();
        map.extend(iter);
        map
    }
}

impl IntoIterator for QueryMap {
    type Item = (String, String);
    type IntoIter = alloc::vec::IntoIter<(String, String)>;
    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a> IntoIterator for &'a QueryMap {
    type Item = &'a (String, String);
    type IntoIter = alloc::slice::Iter<'a, (String, String)>;
    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::QueryMap;
    use alloc::string::String;
    use core::fmt;
    use serde::{
        de::{MapAccess, Visitor},
        ser::SerializeMap,
        Deserialize, Deserializer, Serialize, Serializer,
    };

    impl Serialize for QueryMap {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            let mut map = serializer.serialize_map(Some(self.len()))?;
            for (key, value) in self.iter() {
                map.serialize_entry(key, value)?;
            }
            map.end()
        }
    }

    impl<'de> Deserialize<'de> for QueryMap {
        fn deserialize<D>(deserializer: D) -> Result<QueryMap, D::Error>
        where
            D: Deserializer<'de>,
        {
            struct QueryMapVisitor;

            impl<'de> Visitor<'de> for QueryMapVisitor {
                type Value = QueryMap;

                fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                    formatter.write_str("a map of query parameters")
                }

                fn visit_map<A>(self, mut access: A) -> Result<QueryMap, A::Error>
                where
                    A: MapAccess<'de>,
                {
                    let mut map = QueryMap::new();
                    while let Some((key, value)) = access.next_entry::<String, String>()? {
                        map.insert(key, value);
                    }
                    Ok(map)
                }
            }

            deserializer.deserialize_map(QueryMapVisitor)
        }
    }
}
