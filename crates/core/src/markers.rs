use crate::config::MarkerNames;
use routegen_api::{Marker, MarkerValue, SourceLocation, TypeDeclaration, TypeId};

const SUFFIX_KEYS: &[&str] = &["suffix", "value"];
const ROUTE_NAME_KEYS: &[&str] = &["value", "routeName", "route"];
const TARGET_TYPE_KEYS: &[&str] = &["target", "targetType", "type"];

/// Configuration found on a carrier type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigurationMarker {
    pub carrier: TypeId,
    /// Simple name of the marker as written.
    pub marker: String,
    pub namespace: String,
    /// `None` when the argument is missing or not a string literal.
    pub suffix: Option<String>,
    pub origin: Option<SourceLocation>,
}

impl ConfigurationMarker {
    /// The suffix, provided it is not blank.
    pub fn usable_suffix(&self) -> Option<&str> {
        self.suffix.as_deref().filter(|s| !s.trim().is_empty())
    }
}

/// One extra-route marker instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtraRouteDeclaration {
    pub carrier: TypeId,
    pub route_name: Option<String>,
    pub explicit_type: Option<String>,
    pub origin: Option<SourceLocation>,
}

/// Reads generator markers off declarations.
pub struct MarkerReader<'a> {
    names: &'a MarkerNames,
}

impl<'a> MarkerReader<'a> {
    pub fn new(names: &'a MarkerNames) -> Self {
        Self { names }
    }

    pub fn configuration(&self, decl: &TypeDeclaration) -> Option<ConfigurationMarker> {
        let marker = decl.markers_named(&self.names.configuration).next()?;
        let suffix = argument(marker, 0, SUFFIX_KEYS)
            .and_then(MarkerValue::as_str)
            .map(str::to_string);
        Some(ConfigurationMarker {
            carrier: decl.id,
            marker: marker.simple_name().to_string(),
            namespace: decl.namespace.clone(),
            suffix,
            origin: marker.origin.clone().or_else(|| decl.origin.clone()),
        })
    }

    /// Extra routes on `decl`, in declaration order.
    pub fn extra_routes(&self, decl: &TypeDeclaration) -> Vec<ExtraRouteDeclaration> {
        decl.markers_named(&self.names.extra_route)
            .map(|marker| ExtraRouteDeclaration {
                carrier: decl.id,
                route_name: argument(marker, 0, ROUTE_NAME_KEYS)
                    .and_then(MarkerValue::as_str)
                    .map(str::to_string),
                explicit_type: argument(marker, 1, TARGET_TYPE_KEYS)
                    .and_then(MarkerValue::as_type_ref)
                    .map(str::to_string),
                origin: marker.origin.clone().or_else(|| decl.origin.clone()),
            })
            .collect()
    }

    pub fn is_ignored(&self, decl: &TypeDeclaration) -> bool {
        decl.has_marker(&self.names.ignore)
    }
}

/// Keyed arguments win over positional ones.
fn argument<'m>(marker: &'m Marker, position: usize, keys: &[&str]) -> Option<&'m MarkerValue> {
    marker.named(keys).or_else(|| marker.positional(position))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reader_names() -> MarkerNames {
        MarkerNames::default()
    }

    #[test]
    fn test_configuration_reads_positional_and_named_suffix() {
        let names = reader_names();
        let reader = MarkerReader::new(&names);

        let positional = TypeDeclaration::class("App", "com.example")
            .with_marker(Marker::new("AutoRoutes").with_arg(MarkerValue::Str("Page".into())));
        let named = TypeDeclaration::class("App", "com.example").with_marker(
            Marker::new("AutoRouteGeneration")
                .with_named_arg("suffix", MarkerValue::Str("Route".into())),
        );

        let config = reader.configuration(&positional).unwrap();
        assert_eq!(config.usable_suffix(), Some("Page"));
        assert_eq!(config.namespace, "com.example");
        assert_eq!(config.marker, "AutoRoutes");
        assert_eq!(
            reader.configuration(&named).unwrap().usable_suffix(),
            Some("Route")
        );
    }

    #[test]
    fn test_blank_or_null_suffix_is_not_usable() {
        let names = reader_names();
        let reader = MarkerReader::new(&names);

        for value in [
            MarkerValue::Str("   ".into()),
            MarkerValue::Str(String::new()),
            MarkerValue::Null,
        ] {
            let decl = TypeDeclaration::class("App", "app")
                .with_marker(Marker::new("AutoRoutes").with_arg(value));
            assert_eq!(reader.configuration(&decl).unwrap().usable_suffix(), None);
        }

        let bare = TypeDeclaration::class("App", "app").with_marker(Marker::new("AutoRoutes"));
        assert_eq!(reader.configuration(&bare).unwrap().suffix, None);
    }

    #[test]
    fn test_extra_routes_keep_declaration_order() {
        let names = reader_names();
        let reader = MarkerReader::new(&names);

        let decl = TypeDeclaration::class("Main", "app")
            .with_marker(Marker::new("ExtraRoute").with_arg(MarkerValue::Str("First".into())))
            .with_marker(Marker::new("AutoRoutes").with_arg(MarkerValue::Str("Route".into())))
            .with_marker(
                Marker::new("ExtraRoute")
                    .with_named_arg("value", MarkerValue::Str("Second".into()))
                    .with_named_arg("target", MarkerValue::TypeRef("app.Fastest".into())),
            )
            .with_marker(
                Marker::new("ExtraRoute")
                    .with_arg(MarkerValue::Str("Third".into()))
                    .with_arg(MarkerValue::Null),
            );

        let routes = reader.extra_routes(&decl);
        let route_names: Vec<_> = routes.iter().map(|r| r.route_name.as_deref()).collect();
        assert_eq!(route_names, vec![Some("First"), Some("Second"), Some("Third")]);
        assert_eq!(routes[0].explicit_type, None);
        assert_eq!(routes[1].explicit_type.as_deref(), Some("app.Fastest"));
        assert_eq!(routes[2].explicit_type, None);
    }

    #[test]
    fn test_ignore_marker_detected_by_simple_name() {
        let names = reader_names();
        let reader = MarkerReader::new(&names);

        let ignored = TypeDeclaration::class("DebugPage", "app")
            .with_marker(Marker::new("com.example.routing.IgnoreRoute"));
        assert!(reader.is_ignored(&ignored));
        assert!(!reader.is_ignored(&TypeDeclaration::class("HomePage", "app")));
    }
}
