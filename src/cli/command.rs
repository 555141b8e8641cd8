use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "phonebook", version, about = "Simple Contact Book")]
pub struct Cli {
    /// Storage choice (json, mem) are available
    #[arg(long, env = "STORAGE_CHOICE", default_value_t = String::from("json"))]
    pub storage_choice: String,

    /// Directory holding the json storage files
    #[arg(long, env = "CONTACTS_STORAGE_DIR")]
    pub storage_dir: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Contact fields shared by add and edit
#[derive(Args, Debug, Default)]
pub struct ContactFields {
    /// First name
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub surname: Option<String>,

    #[arg(long)]
    pub patronymic: Option<String>,

    /// Category (work, family, friend, other)
    #[arg(long)]
    pub category: Option<String>,

    /// Phone numbers starting with +, separated by commas
    #[arg(long)]
    pub phones: Option<String>,

    /// Accept a single phone as typed, only rejecting letters
    #[arg(long)]
    pub quick: bool,
}

/// Subcommand and their flags
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new contact
    Add {
        #[command(flatten)]
        fields: ContactFields,
    },
    /// List contacts in the order they were added
    List {
        /// List only one category
        #[arg(long)]
        category: Option<String>,

        /// Reverse order
        #[arg(short, long)]
        reverse: bool,
    },
    /// Edit an existing contact by id
    /// Omitted fields keep their current value
    Edit {
        /// Contact id
        #[arg(long)]
        id: i64,

        #[command(flatten)]
        fields: ContactFields,
    },
    /// Delete a contact by id
    Delete {
        /// Contact id
        #[arg(long)]
        id: i64,
    },
    /// Show every detail of one contact
    Show {
        /// Contact id
        #[arg(long)]
        id: i64,
    },
    /// Search names and phone numbers
    Search {
        /// Text to look for
        query: String,

        /// Rank by name similarity instead of substring match
        #[arg(long)]
        fuzzy: bool,
    },
    /// Fill an empty contact book with sample contacts
    Seed,

    /// Import contacts from .csv file
    Import {
        /// File path to the source .csv file
        #[arg(short, long)]
        src: Option<String>,
    },

    /// Export contacts to a .csv file
    Export {
        /// File path to the destination location for export file
        #[arg(short, long)]
        des: Option<String>,
    },
}
