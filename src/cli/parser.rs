use crate::core::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rTodo
#[derive(Parser, Debug)]
#[command(
    name = "rtodo",
    version = env!("CARGO_PKG_VERSION"),
    about = "A small task list: add to-do items with optional due dates and mark them done",
    long_about = None
)]
pub struct Cli {
    /// Override the storage directory (useful for tests or a separate list)
    #[arg(global = true, long = "storage", value_name = "DIR")]
    pub storage: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Without a command the task list (Home) is shown
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize the configuration and an empty task list
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        /// Print the current configuration file to stdout
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        /// Edit the configuration file with your preferred editor
        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        /// Specify the editor to use (overrides $EDITOR/$VISUAL).
        #[arg(long = "editor", help = "Specify the editor to use (vim, nano, or custom path)")]
        editor: Option<String>,
    },

    /// Add a task
    Add {
        /// Task text; several words are joined with single spaces
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,

        /// Optional due date.
        ///
        /// Accepted formats (local time unless an offset is given):
        /// - YYYY-MM-DD HH:MM     (e.g. "2025-06-18 14:30")
        /// - YYYY-MM-DDTHH:MM     (e.g. "2025-06-18T14:30")
        /// - YYYY-MM-DD           → midnight
        /// - RFC 3339             (e.g. "2025-06-18T12:30:00Z")
        #[arg(long = "due", short = 'd', value_name = "WHEN")]
        due: Option<String>,
    },

    /// Show the task list (Home)
    #[command(visible_alias = "ls")]
    List,

    /// Mark a task done, or reopen it if it is already done
    #[command(visible_alias = "done")]
    Toggle {
        /// Task id, as shown by `list`
        id: i64,
    },

    /// About this application
    About,

    /// How to get in touch
    Contact,

    /// Print the internal log
    Log {
        /// Print the entries of the internal log
        #[arg(long = "print", help = "Print the internal log")]
        print: bool,
    },

    /// Export the task list
    Export {
        /// Export format
        #[arg(long, value_enum, value_name = "FORMAT", default_value = "json")]
        format: ExportFormat,

        /// Output file path
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Create a backup copy of the stored list
    Backup {
        /// Destination file path
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Also write a .zip archive next to the copy
        #[arg(long)]
        compress: bool,

        /// Overwrite destination without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}
