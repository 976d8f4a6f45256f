use crate::pair::Pair;
use alloc::{
    slice::Iter,
    vec::{IntoIter, Vec},
};

/// The key/value pairs of a query string in left-to-right scan order.
///
/// Duplicate keys are kept at this level; collapsing them is up to the
/// [`Params`](crate::Params) sink the pairs are folded into.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct Pairs<'a>(pub(crate) Vec<Pair<'a>>);

impl<'a> Pairs<'a> {
    pub fn new(pairs: Vec<Pair<'a>>) -> Pairs<'a> {
        Pairs(pairs)
    }

    pub fn to_owned(self) -> Pairs<'static> {
        Pairs(self.0.into_iter().map(|m| m.to_owned()).collect())
    }

    pub fn iter<'b>(&'b self) -> Iter<'b, Pair<'a>> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> AsRef<[Pair<'a>]> for Pairs<'a> {
    fn as_ref(&self) -> &[Pair<'a>] {
        self.0.as_ref()
    }
}

impl<'a> From<Pairs<'a>> for Vec<Pair<'a>> {
    fn from(pairs: Pairs<'a>) -> Self {
        pairs.0
    }
}

impl<'a> From<Vec<Pair<'a>>> for Pairs<'a> {
    fn from(pairs: Vec<Pair<'a>>) -> Self {
        Pairs::new(pairs)
    }
}

impl<'a> IntoIterator for Pairs<'a> {
    type Item = Pair<'a>;
    type IntoIter = IntoIter<Self::Item>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, 'b> IntoIterator for &'b Pairs<'a> {
    type Item = &'b Pair<'a>;
    type IntoIter = Iter<'b, Pair<'a>>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
