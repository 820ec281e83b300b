use crate::pass::ProjectPass;
use indexmap::IndexMap;
use routegen_core::GenerationOutcome;
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;

pub struct RoutesArgs {
    pub path: PathBuf,
    pub config: Option<PathBuf>,
    pub json: bool,
}

/// Route table of a pass, in generation order.
#[derive(Debug, Serialize)]
pub struct RoutesReport {
    pub namespace: String,
    pub all_routes: Vec<String>,
    pub route_type_map: IndexMap<String, String>,
}

impl RoutesReport {
    pub fn from_outcome(outcome: &GenerationOutcome) -> Option<Self> {
        let generated = outcome.generated()?;
        Some(Self {
            namespace: generated.namespace.clone(),
            all_routes: generated.table.all_routes().map(str::to_string).collect(),
            route_type_map: generated
                .table
                .route_type_map()
                .map(|(route, ty)| (route.to_string(), ty.to_string()))
                .collect(),
        })
    }

    pub fn render_text(&self) -> String {
        let width = self.all_routes.iter().map(String::len).max().unwrap_or(0);
        let mut lines = Vec::with_capacity(self.all_routes.len() + 1);
        if self.namespace.is_empty() {
            lines.push("Routes (default package)".to_string());
        } else {
            lines.push(format!("Routes ({})", self.namespace));
        }
        for route in &self.all_routes {
            match self.route_type_map.get(route) {
                Some(ty) => lines.push(format!("  {:<width$}  {}", route, ty, width = width)),
                None => lines.push(format!("  {:<width$}  -", route, width = width)),
            }
        }
        lines.join("\n")
    }
}

pub fn run(args: RoutesArgs) -> anyhow::Result<ExitCode> {
    let pass = ProjectPass::execute(&args.path, args.config.as_deref())?;
    pass.print_diagnostics();

    match RoutesReport::from_outcome(&pass.outcome) {
        Some(report) if args.json => println!("{}", serde_json::to_string_pretty(&report)?),
        Some(report) => println!("{}", report.render_text()),
        None => {
            if matches!(pass.outcome, GenerationOutcome::NotConfigured) {
                eprintln!(
                    "No configuration marker found in {}",
                    args.path.display()
                );
            }
        }
    }

    Ok(if pass.has_errors() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
