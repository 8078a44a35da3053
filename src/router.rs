//! Radix-tree request router.
//!
//! One tree per HTTP method. The responder only ever registers catch-alls,
//! but lookup still goes through `matchit` so a miss is classified the same
//! way for every method: no tree means the method is not served (501), a tree
//! without a match means the path is not routed (404).

use std::collections::HashMap;
use std::sync::Arc;

use matchit::Router as MatchitRouter;

use crate::handler::{BoxedHandler, Handler};
use crate::method::Method;

/// Pattern that matches every non-root path. `matchit` catch-alls need at
/// least one character, so `/` is registered on its own.
const CATCH_ALL: &str = "/{*path}";

/// Why a lookup found no handler.
#[derive(Debug, Eq, PartialEq)]
pub(crate) enum Miss {
    Method,
    Path,
}

/// The application router.
///
/// Build it once at startup and pass it to [`Server::serve`](crate::Server::serve).
pub struct Router {
    routes: HashMap<Method, MatchitRouter<BoxedHandler>>,
}

impl Router {
    pub fn new() -> Self {
        Self { routes: HashMap::new() }
    }

    /// Register a handler for `method` on every path, `/` included. Returns
    /// `self` for chaining.
    ///
    /// # Panics
    ///
    /// Panics if `method` already has a catch-all.
    pub fn any_path(mut self, method: Method, handler: impl Handler) -> Self {
        let handler = handler.into_boxed_handler();
        let tree = self.routes.entry(method).or_default();
        for path in ["/", CATCH_ALL] {
            tree.insert(path, Arc::clone(&handler))
                .unwrap_or_else(|e| panic!("invalid route `{path}`: {e}"));
        }
        self
    }

    pub(crate) fn lookup(&self, method: Method, path: &str) -> Result<BoxedHandler, Miss> {
        let tree = self.routes.get(&method).ok_or(Miss::Method)?;
        let matched = tree.at(path).map_err(|_| Miss::Path)?;
        Ok(Arc::clone(matched.value))
    }
}

impl Default for Router {
    fn default() -> Self { Self::new() }
}
