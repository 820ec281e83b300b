use routegen_api::{Diagnostic, DiagnosticCode, DiagnosticSink, SourceLocation};

/// Formats rule violations and forwards them to the host sink.
pub struct DiagnosticReporter<'a> {
    sink: &'a mut dyn DiagnosticSink,
    reported: usize,
    errors: usize,
}

impl<'a> DiagnosticReporter<'a> {
    pub fn new(sink: &'a mut dyn DiagnosticSink) -> Self {
        Self {
            sink,
            reported: 0,
            errors: 0,
        }
    }

    pub fn report(&mut self, diagnostic: Diagnostic) {
        tracing::debug!("{}", diagnostic);
        self.reported += 1;
        if diagnostic.is_error() {
            self.errors += 1;
        }
        self.sink.report(diagnostic);
    }

    pub fn missing_suffix(&mut self, marker: &str, location: Option<SourceLocation>) {
        self.report(
            Diagnostic::new(
                DiagnosticCode::MissingSuffix,
                format!(
                    "The {} suffix parameter is required and may not be null or empty",
                    marker
                ),
            )
            .with_location(location),
        );
    }

    pub fn invalid_route_name(&mut self, route: &str, location: Option<SourceLocation>) {
        self.report(
            Diagnostic::new(
                DiagnosticCode::InvalidRouteName,
                format!(
                    "The ExtraRoute route parameter must be a valid route name, ignoring invalid route '{}'",
                    route
                ),
            )
            .with_location(location),
        );
    }

    pub fn duplicate_route(&mut self, route: &str, location: Option<SourceLocation>) {
        self.report(
            Diagnostic::new(
                DiagnosticCode::DuplicateRoute,
                format!(
                    "The ExtraRoute route parameter must be unique, ignoring duplicate '{}'",
                    route
                ),
            )
            .with_location(location),
        );
    }

    pub fn unresolved_route_type(&mut self, route: &str, location: Option<SourceLocation>) {
        self.report(
            Diagnostic::new(
                DiagnosticCode::UnresolvedRouteType,
                format!(
                    "No type found for extra route '{}', it is added to AllRoutes but not to RouteTypeMap",
                    route
                ),
            )
            .with_location(location),
        );
    }

    pub fn generation_fault(&mut self, category: &str, message: &str) {
        self.report(Diagnostic::new(
            DiagnosticCode::GenerationFault,
            format!("Route generation failed ({}): {}", category, message),
        ));
    }

    pub fn reported(&self) -> usize {
        self.reported
    }

    pub fn has_errors(&self) -> bool {
        self.errors > 0
    }
}
