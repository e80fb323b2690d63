use super::*;
use crate::store::ContactStore;
use tracing::info;

/// Interactive session over a single store that lives until exit or end of input.
pub struct Session<R, W> {
    input: R,
    out: W,
    format: OutputFormat,
    store: ContactStore,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, out: W, format: OutputFormat) -> Self {
        Self {
            input,
            out,
            format,
            store: ContactStore::new(),
        }
    }

    pub fn run(&mut self) -> Result<(), AppError> {
        info!("session started");
        writeln!(self.out, "\n--- CONTACT BOOK ---")?;

        loop {
            show_menu(&mut self.out)?;

            let Some(action) = get_input(&mut self.input)? else {
                break;
            };

            let command = match parse_menu_command(action.trim()) {
                Ok(command) => command,
                Err(e) => {
                    writeln!(self.out, "{e}")?;
                    continue;
                }
            };

            match command {
                MenuCommand::AddContact => {
                    if !self.add_contact()? {
                        break;
                    }
                }
                MenuCommand::ListContacts => {
                    writeln!(self.out)?;
                    print_contacts(&mut self.out, self.store.all_contacts(), self.format)?;
                }
                MenuCommand::Exit => {
                    writeln!(self.out, "\nBye!")?;
                    break;
                }
            }
        }

        info!(contacts = self.store.len(), "session ended");
        Ok(())
    }

    // false when input ran out mid-prompt
    fn add_contact(&mut self) -> Result<bool, AppError> {
        let Some(first_name) = prompt(&mut self.input, &mut self.out, "Enter first name:")? else {
            return Ok(false);
        };
        let Some(last_name) = prompt(&mut self.input, &mut self.out, "Enter last name:")? else {
            return Ok(false);
        };
        let Some(phone) = prompt(&mut self.input, &mut self.out, "Enter phone number:")? else {
            return Ok(false);
        };

        match self.store.add_contact(&first_name, &last_name, &phone) {
            Ok(()) => writeln!(self.out, "Contact added successfully!")?,
            Err(e) if e.is_invalid_argument() => writeln!(self.out, "{e}")?,
            Err(e) => return Err(e),
        }
        Ok(true)
    }
}
