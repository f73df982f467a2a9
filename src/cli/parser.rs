use clap::{Parser, Subcommand, ValueEnum};

use crate::config::prefs::GridZoom;
use crate::export::ExportFormat;

/// Command-line interface definition for tablelane
/// CLI to turn table snapshots into grouped Gantt timeline lanes
#[derive(Parser)]
#[command(
    name = "tablelane",
    version = env!("CARGO_PKG_VERSION"),
    about = "Turn spreadsheet-like table rows into grouped Gantt timeline lanes",
    long_about = None
)]
pub struct Cli {
    /// Override the snapshot path (useful for tests or ad-hoc data)
    #[arg(global = true, long = "snapshot")]
    pub snapshot: Option<String>,

    /// Override the saved-views file path
    #[arg(global = true, long = "views-file")]
    pub views_file: Option<String>,

    /// Override the local preferences file path
    #[arg(global = true, long = "prefs-file")]
    pub prefs_file: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration directory and files
    Init,

    /// Render the timeline of a saved view as a text chart
    Render {
        /// Saved view id or name (defaults to the remembered selection)
        #[arg(long = "view")]
        view: Option<String>,

        /// Remember this grid zoom level for the rendered view
        #[arg(long = "zoom", value_enum)]
        zoom: Option<GridZoom>,
    },

    /// Export the computed timeline to a file
    Export {
        /// Output format
        #[arg(long = "format", value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Absolute path of the output file
        #[arg(long = "file")]
        file: String,

        /// Overwrite the output file if it exists
        #[arg(long = "force")]
        force: bool,

        /// Saved view id or name (defaults to the remembered selection)
        #[arg(long = "view")]
        view: Option<String>,
    },

    /// Manage the saved timeline views
    Views {
        #[command(subcommand)]
        action: ViewsAction,
    },

    /// Check whether a saved view's settings are complete
    Check {
        /// Saved view id or name (defaults to the remembered selection)
        #[arg(long = "view")]
        view: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum ViewsAction {
    /// List the saved views
    List,

    /// Add a new saved view
    Add {
        /// Name of the new view
        name: String,
    },

    /// Rename a saved view
    Rename {
        /// View id or name
        view: String,
        /// New name
        name: String,
    },

    /// Delete a saved view
    Del {
        /// View id or name
        view: String,
    },

    /// Move a saved view next to another one
    Move {
        /// View id or name to move
        view: String,
        /// Anchor view id or name
        anchor: String,
        /// Drop position relative to the anchor
        #[arg(long = "position", value_enum, default_value = "after")]
        position: MovePosition,
    },

    /// Select a saved view (remembered per table instance)
    Select {
        /// View id or name
        view: String,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum MovePosition {
    Before,
    After,
}
