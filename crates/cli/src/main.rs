use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    routegen_cli::run()
}
