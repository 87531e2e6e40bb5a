use crate::export::{ExportFormat, ExportTable};
use clap::{Parser, Subcommand};

/// Command-line interface definition for rHostel
/// CLI dashboard for a student hostel backed by SQLite
#[derive(Parser)]
#[command(
    name = "rhostel",
    version = env!("CARGO_PKG_VERSION"),
    about = "A small hostel dashboard: students, entry/exit logs, medical info and leave requests on SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Editor to use (vim, nano, or custom path)")]
        editor: Option<String>,
    },

    /// Database maintenance (integrity checks, vacuum, info)
    Db {
        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Manage student profiles
    Student {
        #[command(subcommand)]
        action: StudentCmd,
    },

    /// Record and list entry/exit logs
    Entry {
        #[command(subcommand)]
        action: EntryCmd,
    },

    /// Save or show a student's medical information
    Medical {
        #[command(subcommand)]
        action: MedicalCmd,
    },

    /// Submit and review leave requests
    Leave {
        #[command(subcommand)]
        action: LeaveCmd,
    },

    /// Show headline metrics and charts
    Dashboard,

    /// Show totals and department strength
    Analytics,

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },

    /// Export a whole table to CSV or JSON
    Export {
        #[arg(long, value_enum)]
        table: ExportTable,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum StudentCmd {
    /// Add a student
    Add {
        /// Full name
        name: String,

        #[arg(long, default_value = "")]
        dept: String,

        #[arg(long, default_value_t = 1, help = "Year of study (1-5)")]
        year: i32,

        #[arg(long, default_value = "", help = "Contact number")]
        contact: String,

        #[arg(long, default_value = "", help = "Guardian name")]
        guardian: String,

        #[arg(long = "guardian-contact", default_value = "")]
        guardian_contact: String,

        #[arg(long = "room", default_value = "", help = "Room number")]
        room_no: String,
    },

    /// List all students
    List,

    /// Update one or more fields of a student
    Update {
        id: i64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        dept: Option<String>,

        #[arg(long)]
        year: Option<i32>,

        #[arg(long)]
        contact: Option<String>,

        #[arg(long)]
        guardian: Option<String>,

        #[arg(long = "guardian-contact")]
        guardian_contact: Option<String>,

        #[arg(long = "room")]
        room_no: Option<String>,
    },

    /// Delete a student with all dependent records
    Delete {
        id: i64,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum EntryCmd {
    /// Check a student in (opens a stay)
    In {
        student: i64,

        #[arg(long, help = "Entry time (YYYY-MM-DD HH:MM[:SS]), default now")]
        at: Option<String>,
    },

    /// Check a student out (closes the open stay)
    Out {
        student: i64,

        #[arg(long, help = "Exit time (YYYY-MM-DD HH:MM[:SS]), default now")]
        at: Option<String>,
    },

    /// Insert a raw log row
    Add {
        student: i64,

        #[arg(long, help = "Entry time, default now")]
        entry: Option<String>,

        #[arg(long, help = "Exit time, default empty")]
        exit: Option<String>,

        #[arg(long, help = "Status label, default from config (\"On Time\")")]
        status: Option<String>,
    },

    /// List entry logs
    List {
        #[arg(long, help = "Only logs of this student")]
        student: Option<i64>,

        #[arg(long, help = "Only stays without an exit time")]
        open: bool,
    },
}

#[derive(Subcommand)]
pub enum MedicalCmd {
    /// Save medical info (replaces any previous record)
    Set {
        student: i64,

        #[arg(long = "blood-group", default_value = "")]
        blood_group: String,

        #[arg(long, default_value = "")]
        allergies: String,

        #[arg(long, default_value = "")]
        conditions: String,

        #[arg(long = "emergency-contact", default_value = "")]
        emergency_contact: String,
    },

    /// Show medical info of a student
    Show { student: i64 },
}

#[derive(Subcommand)]
pub enum LeaveCmd {
    /// Submit a leave request (status Pending)
    Add {
        student: i64,

        #[arg(long, help = "First day (YYYY-MM-DD), default today")]
        from: Option<String>,

        #[arg(long, help = "Last day (YYYY-MM-DD), default today")]
        to: Option<String>,

        #[arg(long, default_value = "")]
        reason: String,
    },

    /// List leave requests
    List {
        #[arg(long, help = "Only requests with this status")]
        status: Option<String>,
    },

    /// Approve a pending request
    Approve { id: i64 },

    /// Reject a pending request
    Reject { id: i64 },

    /// Set the status of a request (Pending, Approved, Rejected)
    Status { id: i64, status: String },
}
