use crate::config::MarkerNames;
use crate::diagnostics::DiagnosticReporter;
use crate::error::{Result, RouteGenError};
use crate::markers::MarkerReader;
use crate::validate::RouteNameValidator;
use crate::walker::CatalogWalker;
use indexmap::IndexMap;
use routegen_api::{TypeCatalog, TypeDeclaration};
use serde::Serialize;
use tracing::{debug, warn};

/// Final route registry of one pass.
///
/// Key order is the `AllRoutes` order; keys with a type form `RouteTypeMap`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RouteTable {
    routes: IndexMap<String, Option<String>>,
}

impl RouteTable {
    pub fn all_routes(&self) -> impl Iterator<Item = &str> {
        self.routes.keys().map(String::as_str)
    }

    pub fn route_type_map(&self) -> impl Iterator<Item = (&str, &str)> {
        self.routes
            .iter()
            .filter_map(|(name, ty)| ty.as_deref().map(|ty| (name.as_str(), ty)))
    }

    pub fn type_of(&self, route: &str) -> Option<&str> {
        self.routes.get(route).and_then(|ty| ty.as_deref())
    }

    pub fn contains(&self, route: &str) -> bool {
        self.routes.contains_key(route)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl FromIterator<(String, Option<String>)> for RouteTable {
    fn from_iter<I: IntoIterator<Item = (String, Option<String>)>>(iter: I) -> Self {
        Self {
            routes: iter.into_iter().collect(),
        }
    }
}

/// Accumulates the route table over discovery and merge.
///
/// The shared name map is mutated strictly in walk order; duplicate detection
/// relies on that.
pub struct RouteTableBuilder<'a> {
    catalog: &'a dyn TypeCatalog,
    walker: CatalogWalker<'a>,
    reader: MarkerReader<'a>,
    validator: &'a RouteNameValidator,
    routes: IndexMap<String, Option<String>>,
}

impl<'a> RouteTableBuilder<'a> {
    pub fn new(
        catalog: &'a dyn TypeCatalog,
        names: &'a MarkerNames,
        validator: &'a RouteNameValidator,
    ) -> Self {
        Self {
            catalog,
            walker: CatalogWalker::new(catalog),
            reader: MarkerReader::new(names),
            validator,
            routes: IndexMap::new(),
        }
    }

    /// Add every non-abstract, non-ignored class-like type whose simple name
    /// ends with `suffix`.
    pub fn discover_implicit(&mut self, suffix: &str) -> Result<usize> {
        let before = self.routes.len();

        for decl in self.walker.class_likes() {
            if !decl.name.ends_with(suffix) || decl.is_abstract || self.reader.is_ignored(decl) {
                continue;
            }
            if self.routes.contains_key(&decl.name) {
                debug!(
                    "Skipping {}: route '{}' already discovered",
                    decl.qualified_name(),
                    decl.name
                );
                continue;
            }
            if !self.validator.is_valid(&decl.name) {
                warn!(
                    "Skipping {}: '{}' is not a valid route name",
                    decl.qualified_name(),
                    decl.name
                );
                continue;
            }

            let qualified = self.resolve(decl)?;
            debug!("Implicit route {} -> {}", decl.name, qualified);
            self.routes.insert(decl.name.clone(), Some(qualified));
        }

        Ok(self.routes.len() - before)
    }

    /// Merge extra-route markers from every type, in walk order.
    pub fn merge_extra_routes(&mut self, reporter: &mut DiagnosticReporter<'_>) -> Result<usize> {
        let before = self.routes.len();

        for decl in self.walker.all() {
            for extra in self.reader.extra_routes(decl) {
                let Some(name) = extra
                    .route_name
                    .as_deref()
                    .filter(|n| !n.trim().is_empty())
                else {
                    debug!("Ignoring extra route without a name on {}", decl.qualified_name());
                    continue;
                };

                if !self.validator.is_valid(name) {
                    reporter.invalid_route_name(name, extra.origin);
                    continue;
                }

                if self.routes.contains_key(name) {
                    reporter.duplicate_route(name, extra.origin);
                    continue;
                }

                let target = match extra.explicit_type {
                    Some(explicit) => Some(explicit),
                    None => match self.walker.find_by_simple_name(name) {
                        Some(found) => Some(self.resolve(found)?),
                        None => None,
                    },
                };

                if target.is_none() {
                    reporter.unresolved_route_type(name, extra.origin);
                }
                debug!("Extra route {} -> {:?}", name, target);
                self.routes.insert(name.to_string(), target);
            }
        }

        Ok(self.routes.len() - before)
    }

    pub fn build(self) -> RouteTable {
        RouteTable {
            routes: self.routes,
        }
    }

    fn resolve(&self, decl: &TypeDeclaration) -> Result<String> {
        self.catalog.qualified_name(decl.id).ok_or_else(|| {
            RouteGenError::Unresolved(format!(
                "qualified name of {} ({}) could not be resolved",
                decl.name, decl.id
            ))
        })
    }
}
