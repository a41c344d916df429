use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// List your servers as JSON
    List,

    /// Provision a new server
    Create {
        /// Display name
        #[arg(long)]
        name: String,

        /// Minecraft version (defaults to 1.20.1)
        #[arg(long, default_value = "")]
        version: String,

        /// Host address (defaults to localhost)
        #[arg(long, default_value = "")]
        ip: String,
    },

    /// Start a server
    Start { id: String },

    /// Stop a server
    Stop { id: String },

    /// Restart a server
    Restart { id: String },

    /// Delete a server
    Delete { id: String },

    /// Delete every server
    Clear {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Change a server's host address (the port is kept)
    Ip { id: String, new_ip: String },

    /// Show or edit a server's plugin selection
    Plugins {
        id: String,

        /// Plugin to toggle; repeat for several
        #[arg(long = "toggle")]
        toggle: Vec<String>,
    },

    /// Start the server if needed and copy its address
    Play { id: String },

    /// Copy a server's address to the clipboard
    Copy { id: String },

    /// Save the server's config bundle as a text file
    Download {
        id: String,

        /// Directory to save into (overrides config)
        #[arg(long)]
        out: Option<String>,
    },
}
