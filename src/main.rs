use std::process::ExitCode;

fn main() -> ExitCode {
    routemap::cli::run()
}
