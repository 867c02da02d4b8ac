use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum PersonCommands {
    /// List every person in the directory
    List,
    /// Get a person by uuid
    Get {
        /// Person uuid
        uuid: i32,
    },
    /// Create a person
    Create {
        /// Display name
        #[arg(long)]
        name: String,
        /// Age in years
        #[arg(long, allow_negative_numbers = true)]
        age: i32,
    },
    /// Delete a person by uuid
    Delete {
        /// Person uuid
        uuid: i32,
    },
}
