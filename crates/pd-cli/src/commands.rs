use crate::person_commands::PersonCommands;

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Person operations
    Person {
        #[command(subcommand)]
        action: PersonCommands,
    },
}
