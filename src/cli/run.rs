use crate::{
    cli::{
        command::{Cli, Commands, OutputFormat},
        print_contacts,
        shell::Session,
    },
    errors::AppError,
    store::ContactStore,
};
use clap::Parser;
use dotenv::dotenv;
use std::io::{self, Write};

pub fn run_app() -> Result<(), AppError> {
    dotenv().ok();
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Add {
            first_name,
            last_name,
            phone,
        } => add_contact(&first_name, &last_name, &phone, cli.format),
        Commands::Shell => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            Session::new(stdin.lock(), stdout.lock(), cli.format).run()
        }
    }
}

fn add_contact(
    first_name: &str,
    last_name: &str,
    phone: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let mut store = ContactStore::new();
    store.add_contact(first_name, last_name, phone)?;

    let mut out = io::stdout().lock();
    writeln!(out, "Contact added successfully")?;
    print_contacts(&mut out, store.all_contacts(), format)
}
