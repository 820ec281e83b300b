//! One generation pass: configuration -> discovery -> merge -> emission.

use crate::config::MarkerNames;
use crate::diagnostics::DiagnosticReporter;
use crate::emit::{SourceEmitter, routes_file_id};
use crate::error::Result;
use crate::markers::MarkerReader;
use crate::table::{RouteTable, RouteTableBuilder};
use crate::validate::RouteNameValidator;
use crate::walker::CatalogWalker;
use routegen_api::{DiagnosticSink, OutputSink, TypeCatalog, TypeId};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedRoutes {
    pub file_id: String,
    pub namespace: String,
    /// The type carrying the configuration marker.
    pub carrier: TypeId,
    pub table: RouteTable,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationOutcome {
    /// No type carries the configuration marker.
    NotConfigured,
    /// The configuration suffix was blank; `ARG001` was reported.
    MissingSuffix,
    Generated(GeneratedRoutes),
    /// An internal fault was contained; `RGE001` was reported.
    Degraded,
    Cancelled,
}

impl GenerationOutcome {
    pub fn generated(&self) -> Option<&GeneratedRoutes> {
        match self {
            GenerationOutcome::Generated(routes) => Some(routes),
            _ => None,
        }
    }
}

pub struct RouteGenerator<'a> {
    emitter: &'a dyn SourceEmitter,
    names: MarkerNames,
    cancel: CancellationToken,
}

impl<'a> RouteGenerator<'a> {
    pub fn new(emitter: &'a dyn SourceEmitter) -> Self {
        Self {
            emitter,
            names: MarkerNames::default(),
            cancel: CancellationToken::new(),
        }
    }

    pub fn with_markers(mut self, names: MarkerNames) -> Self {
        self.names = names;
        self
    }

    pub fn with_cancellation(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }

    /// Run a full pass. Never fails: internal faults, including panics, are
    /// reported as a single `RGE001` warning.
    pub fn run(
        &self,
        catalog: &dyn TypeCatalog,
        diagnostics: &mut dyn DiagnosticSink,
        output: &mut dyn OutputSink,
    ) -> GenerationOutcome {
        let mut reporter = DiagnosticReporter::new(diagnostics);

        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            self.execute(catalog, &mut reporter, output)
        }));

        match result {
            Ok(Ok(outcome)) => outcome,
            Ok(Err(err)) => {
                error!("Route generation failed: {}", err);
                reporter.generation_fault(err.category(), &err.to_string());
                GenerationOutcome::Degraded
            }
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                error!("Route generation panicked: {}", message);
                reporter.generation_fault("Panic", &message);
                GenerationOutcome::Degraded
            }
        }
    }

    fn execute(
        &self,
        catalog: &dyn TypeCatalog,
        reporter: &mut DiagnosticReporter<'_>,
        output: &mut dyn OutputSink,
    ) -> Result<GenerationOutcome> {
        let walker = CatalogWalker::new(catalog);
        let reader = MarkerReader::new(&self.names);

        let mut carriers = walker.all().filter_map(|d| reader.configuration(d));
        let Some(config) = carriers.next() else {
            debug!("No configuration marker found, nothing to generate");
            return Ok(GenerationOutcome::NotConfigured);
        };
        for other in carriers {
            debug!(
                "Ignoring additional configuration marker on {}",
                catalog
                    .qualified_name(other.carrier)
                    .unwrap_or_else(|| other.carrier.to_string())
            );
        }

        let Some(suffix) = config.usable_suffix() else {
            reporter.missing_suffix(&config.marker, config.origin.clone());
            return Ok(GenerationOutcome::MissingSuffix);
        };

        let validator = RouteNameValidator::new(self.emitter.reserved_words().iter().copied());
        let mut builder = RouteTableBuilder::new(catalog, &self.names, &validator);

        if self.cancel.is_cancelled() {
            return Ok(GenerationOutcome::Cancelled);
        }
        let implicit = builder.discover_implicit(suffix)?;

        if self.cancel.is_cancelled() {
            return Ok(GenerationOutcome::Cancelled);
        }
        let extra = builder.merge_extra_routes(reporter)?;

        if self.cancel.is_cancelled() {
            return Ok(GenerationOutcome::Cancelled);
        }
        let table = builder.build();
        let text = self.emitter.render(&config.namespace, &table)?;
        let file_id = routes_file_id(self.emitter);
        output.add_source(&file_id, text)?;

        info!(
            "Generated {} with {} routes ({} implicit, {} extra, {} typed)",
            file_id,
            table.len(),
            implicit,
            extra,
            table.route_type_map().count()
        );

        Ok(GenerationOutcome::Generated(GeneratedRoutes {
            file_id,
            namespace: config.namespace,
            carrier: config.carrier,
            table,
        }))
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
