use rdstation_client::{ApiError, ApiResult, RouteResolver};
use std::collections::HashMap;

/// Route resolver backed by an explicit map.
#[allow(dead_code)]
#[derive(Default)]
pub struct MockRoutes {
    routes: HashMap<String, String>,
}

#[allow(dead_code)]
impl MockRoutes {
    /// A resolver that knows no routes at all.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_route(mut self, name: &str, url: &str) -> Self {
        self.routes.insert(name.to_string(), url.to_string());
        self
    }
}

impl RouteResolver for MockRoutes {
    fn resolve(&self, route: &str) -> ApiResult<String> {
        self.routes
            .get(route)
            .cloned()
            .ok_or_else(|| ApiError::InvalidRoute(route.to_string()))
    }
}
