use serde::{Deserialize, Serialize};

use crate::header::ParamHeader;
use crate::id::ParamId;

/// An ordered collection of parameter headers describing one configuration.
///
/// A valid collection never contains two headers with the same
/// [`ParamId`]; checking that is left to a validator so that collections can
/// be built up freely and checked once.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SystMetaData {
    #[serde(default)]
    pub headers: Vec<ParamHeader>,
}

impl SystMetaData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_headers(headers: Vec<ParamHeader>) -> Self {
        Self { headers }
    }

    pub fn len(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ParamHeader> {
        self.headers.iter()
    }

    /// Parameter ids in stored order.
    pub fn ids(&self) -> impl Iterator<Item = &ParamId> {
        self.headers.iter().map(|h| &h.syst_param_id)
    }

    /// First header with the given id.
    pub fn get(&self, id: &str) -> Option<&ParamHeader> {
        self.headers.iter().find(|h| h.syst_param_id.as_str() == id)
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.get(id).is_some()
    }
}

impl FromIterator<ParamHeader> for SystMetaData {
    fn from_iter<I: IntoIterator<Item = ParamHeader>>(iter: I) -> Self {
        Self {
            headers: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a SystMetaData {
    type Item = &'a ParamHeader;
    type IntoIter = std::slice::Iter<'a, ParamHeader>;

    fn into_iter(self) -> Self::IntoIter {
        self.headers.iter()
    }
}
