use alloc::string::String;

use alloc::{borrow::Cow, collections::btree_map::BTreeMap};

/// Sink for decoded key/value pairs.
///
/// Map-backed impls resolve a repeated key to its last occurrence, since
/// every `set` is an insert over the previous value.
pub trait Params {
    fn set(&mut self, key: Cow<'_, str>, value: Cow<'_, str>);
}

impl Params for BTreeMap<String, String> {
    fn set(&mut self, key: Cow<'_, str>, value: Cow<'_, str>) {
        self.insert(key.into_owned(), value.into_owned());
    }
}

#[cfg(feature = "std")]
impl Params for std::collections::HashMap<String, String> {
    fn set(&mut self, key: Cow<'_, str>, value: Cow<'_, str>) {
        self.insert(key.into_owned(), value.into_owned());
    }
}

impl Params for () {
    fn set(&mut self, _key: Cow<'_, str>, _value: Cow<'_, str>) {}
}
