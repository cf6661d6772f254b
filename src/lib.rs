use std::io::{self, BufRead, Write};

pub mod catalog;
pub use catalog::catalog::{Catalog, CatalogError, MovieUpdate};

pub mod model;
pub use model::movie::Movie;

pub mod persisters;
pub use persisters::csv_writer::CsvWriter;

mod menu;

/// Runs one interactive catalog session over stdin/stdout.
pub fn run() -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let catalog = run_session(&mut stdin.lock(), &mut stdout.lock())?;

    log::info!(
        "Session ended with {} movie(s) in the catalog. \
         The catalog is memory-resident only, so nothing persists past this point.",
        catalog.len()
    );
    Ok(())
}

/// Drives the menu with the given input and output streams and returns the
/// final catalog. Integration tests use this to script whole sessions.
pub fn run_session(
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> io::Result<Catalog> {
    let mut catalog = Catalog::new();
    menu::run_menu(&mut catalog, input, output)?;
    Ok(catalog)
}
