use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "contact-manager", version, about = "In-memory contact book")]
pub struct Cli {
    /// Output format for listed contacts
    #[arg(long, env = "CONTACTS_FORMAT", value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommand and their flags
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a contact to a fresh contact book and list it
    Add {
        /// Contact first name
        #[arg(long)]
        first_name: String,

        /// Contact last name
        #[arg(long)]
        last_name: String,

        /// Contact phone number
        #[arg(long)]
        phone: String,
    },
    /// Start an interactive session (default)
    Shell,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Shell menu entries
#[derive(Debug, PartialEq, Eq)]
pub enum MenuCommand {
    AddContact,
    ListContacts,
    Exit,
}
