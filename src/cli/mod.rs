//! Command-line front end: parses flags, enforces the length range, and
//! surfaces status messages around the generator.

mod context;
mod flags;
mod help;
mod parse;
pub mod prompts;
pub mod quiet;

pub use context::{Context, Done, validate_length};
pub use flags::CliFlags;
pub use parse::parse;

/// Run the CLI and return the process exit code.
pub fn run(args: Vec<String>) -> i32 {
    let mut ctx = match Context::new(&args) {
        Ok(ctx) => ctx,
        Err(e) => {
            prompts::error(&e.to_string());
            prompts::error("Use --help for usage information");
            return 1;
        }
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match ctx.run(&mut out) {
        Ok(()) => 0,
        Err(Done(code)) => code,
    }
}
