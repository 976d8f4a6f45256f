use http::{Request, Uri};

use crate::{parser::parse_into, QueryMap};

/// Reads the query parameters of the location a request is addressed to.
///
/// The core parser stays pure and takes the query string explicitly; this
/// is the one boundary that reads it out of the surrounding request state.
pub trait QueryExt {
    fn query_map(&self) -> QueryMap;
}

impl QueryExt for Uri {
    fn query_map(&self) -> QueryMap {
        let mut map = QueryMap::new();

        if let Some(query) = self.query() {
            parse_into(query, &mut map);
        }

        map
    }
}

impl<B> QueryExt for Request<B> {
    fn query_map(&self) -> QueryMap {
        self.uri().query_map()
    }
}
