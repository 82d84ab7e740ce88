use clap::Parser;
use renamedit_core::{handle_sigint, request_interrupt};
use std::io::{self, IsTerminal};
use std::process;

mod cli;
mod edit;

use cli::Cli;

fn main() {
    // Both handlers only record the signal. They run inside the signal
    // handler itself, so whether the editor owned the terminal is known at
    // delivery time; the listing file is cleaned up by its guard.
    let handlers: [(i32, &str, fn()); 2] = [
        (signal_hook::consts::SIGINT, "SIGINT", handle_sigint),
        (signal_hook::consts::SIGTERM, "SIGTERM", request_interrupt),
    ];
    for (signal, name, action) in handlers {
        // SAFETY: the actions only touch atomics
        if let Err(e) = unsafe { signal_hook::low_level::register(signal, action) } {
            eprintln!("Warning: failed to set {name} handler: {e}");
        }
    }

    // Argument errors exit with 1 rather than clap's default of 2
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let exit_code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            process::exit(exit_code);
        },
    };

    let use_color = !cli.no_color && io::stdout().is_terminal();

    match edit::handle_edit(&cli, use_color) {
        Ok(()) => process::exit(0),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(1);
        },
    }
}
