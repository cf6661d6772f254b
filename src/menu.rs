use std::io::{self, BufRead, Write};

use crate::catalog::catalog::{Catalog, CatalogError, MovieUpdate};

/// Runs the interactive menu until the user picks Exit or the input ends.
/// All catalog state lives in the caller; this module only prompts, parses
/// and prints.
pub fn run_menu(
    catalog: &mut Catalog,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> io::Result<()> {
    loop {
        display_menu(output)?;
        let Some(choice) = prompt(input, output, "Enter your choice (1-6): ")? else {
            return Ok(());
        };

        match choice.as_str() {
            "1" => handle_add(catalog, input, output)?,
            "2" => writeln!(output, "{}", catalog.view_all_movies())?,
            "3" => handle_search(catalog, input, output)?,
            "4" => handle_update(catalog, input, output)?,
            "5" => handle_delete(catalog, input, output)?,
            "6" => {
                writeln!(output, "Thank you for using the Movie Management System!")?;
                return Ok(());
            }
            _ => writeln!(output, "Invalid choice. Please try again.")?,
        }
    }
}

fn display_menu(output: &mut impl Write) -> io::Result<()> {
    writeln!(output)?;
    writeln!(output, "=== Movie Management System ===")?;
    writeln!(output, "1. Add a new movie")?;
    writeln!(output, "2. View all movies")?;
    writeln!(output, "3. Search movies by title")?;
    writeln!(output, "4. Update movie information")?;
    writeln!(output, "5. Delete a movie")?;
    writeln!(output, "6. Exit")?;
    writeln!(output, "============***==============")
}

fn handle_add(
    catalog: &mut Catalog,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> io::Result<()> {
    let id = loop {
        let Some(id) = prompt(input, output, "Enter movie ID: ")? else {
            return Ok(());
        };
        if catalog.contains(&id) {
            writeln!(output, "Movie ID already exists. Please try a different ID.")?;
            continue;
        }
        break id;
    };

    let Some(title) = prompt(input, output, "Enter movie title: ")? else {
        return Ok(());
    };
    let Some(director) = prompt(input, output, "Enter director name: ")? else {
        return Ok(());
    };
    let Some(release_year) = prompt(input, output, "Enter release year: ")? else {
        return Ok(());
    };
    let Some(genre) = prompt(input, output, "Enter genre: ")? else {
        return Ok(());
    };

    let result = catalog.add_movie(&id, &title, &director, &release_year, &genre);
    writeln!(output, "{}", render(result))
}

fn handle_search(
    catalog: &Catalog,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> io::Result<()> {
    let Some(title) = prompt(input, output, "Enter movie title to search: ")? else {
        return Ok(());
    };
    writeln!(output, "{}", catalog.search_movie(&title))
}

fn handle_update(
    catalog: &mut Catalog,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> io::Result<()> {
    let Some(id) = prompt(input, output, "Enter movie ID to update: ")? else {
        return Ok(());
    };
    let Some(title) = prompt(input, output, "New title (Enter to skip): ")? else {
        return Ok(());
    };
    let Some(director) = prompt(input, output, "New director (Enter to skip): ")? else {
        return Ok(());
    };
    let Some(release_year) = prompt(input, output, "New release year (Enter to skip): ")? else {
        return Ok(());
    };
    let Some(genre) = prompt(input, output, "New genre (Enter to skip): ")? else {
        return Ok(());
    };

    let updates = MovieUpdate {
        title: field(title),
        director: field(director),
        release_year: field(release_year),
        genre: field(genre),
    };

    let result = catalog.update_movie(&id, &updates);
    writeln!(output, "{}", render(result))
}

fn handle_delete(
    catalog: &mut Catalog,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> io::Result<()> {
    let Some(id) = prompt(input, output, "Enter movie ID to delete: ")? else {
        return Ok(());
    };
    writeln!(output, "{}", render(catalog.delete_movie(&id)))
}

/// Writes the message without a newline, flushes, and reads one answer
/// line. Returns `None` at end of input.
fn prompt(
    input: &mut impl BufRead,
    output: &mut impl Write,
    message: &str,
) -> io::Result<Option<String>> {
    write!(output, "{}", message)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(Some(line))
}

fn field(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

fn render(result: Result<&'static str, CatalogError>) -> String {
    match result {
        Ok(message) => message.to_string(),
        Err(e) => e.to_string(),
    }
}
