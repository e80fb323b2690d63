pub mod command;
pub mod run;
pub mod shell;

pub use run::run_app;

use crate::domain::contact::Contact;
use crate::errors::AppError;
use command::{MenuCommand, OutputFormat};
use std::io::{BufRead, Write};

// OUTPUT FUNCTIONS
pub fn show_menu<W: Write>(out: &mut W) -> Result<(), AppError> {
    writeln!(out)?;
    writeln!(out, "1. Add Contact")?;
    writeln!(out, "2. List Contacts")?;
    writeln!(out, "3. Exit")?;
    write!(out, "> ")?;
    out.flush()?;
    Ok(())
}

pub fn parse_menu_command(action: &str) -> Result<MenuCommand, AppError> {
    match action {
        "1" => Ok(MenuCommand::AddContact),
        "2" => Ok(MenuCommand::ListContacts),
        "3" => Ok(MenuCommand::Exit),
        _ => Err(AppError::ParseCommand(action.to_string())),
    }
}

pub fn display_contact(index: usize, contact: &Contact) -> String {
    format!(
        "{index:>3}. {:<15} {:<15} {:<15}",
        contact.first_name(),
        contact.last_name(),
        contact.phone_number()
    )
}

pub fn print_contacts<W: Write>(
    out: &mut W,
    contacts: &[Contact],
    format: OutputFormat,
) -> Result<(), AppError> {
    if contacts.is_empty() {
        writeln!(out, "No contact yet")?;
        return Ok(());
    }

    match format {
        OutputFormat::Table => {
            for (i, c) in contacts.iter().enumerate() {
                writeln!(out, "{}", display_contact(i + 1, c))?;
            }
        }
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(contacts)?)?;
        }
    }
    Ok(())
}

// INPUT FUNCTIONS
/// Reads one trimmed line, `None` at end of input.
pub fn get_input<R: BufRead>(input: &mut R) -> Result<Option<String>, AppError> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

pub fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    message: &str,
) -> Result<Option<String>, AppError> {
    writeln!(out, "\n{}", message)?;
    write!(out, "> ")?;
    out.flush()?;
    get_input(input)
}
