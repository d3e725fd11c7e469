use crate::core::print::PrintFormat;
use crate::export::{ExportFormat, SheetKind};
use crate::models::ExpenseCategory;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rClinic
/// Appointments, intake sheets and cash flow of a small clinic, on SQLite
#[derive(Parser)]
#[command(
    name = "rclinic",
    version = env!("CARGO_PKG_VERSION"),
    about = "A small-clinic CLI: agenda, evaluation sheets, expenses and monthly cash flow on SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override workbook path (useful for tests or a second clinic)
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
    /// Initialize the workbook and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with their defaults")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the workbook (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending workbook migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check workbook integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the workbook using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show workbook information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,

        #[arg(long = "op", help = "Only rows of this operation (book, intake, ...)")]
        operation: Option<String>,
    },

    /// Quick booking: reserve a slot for a client
    Book {
        /// Client name
        name: String,

        /// Date (YYYY-MM-DD or DD/MM/YYYY)
        date: String,

        /// Start time (HH:MM)
        time: String,

        #[arg(long, help = "Phone / contact")]
        contact: Option<String>,

        #[arg(long, help = "Reason for the visit (stored as Motivo)")]
        reason: Option<String>,

        #[arg(long, help = "Length in minutes (default: slot_minutes)")]
        duration: Option<i64>,
    },

    /// Show booked and completed appointments
    Agenda {
        #[arg(
            long,
            short,
            help = "YYYY, YYYY-MM, YYYY-MM-DD or A:B (default: from today on)"
        )]
        period: Option<String>,

        #[arg(long = "today", help = "Only today's appointments")]
        today: bool,

        #[arg(long, help = "Only rows of this client")]
        client: Option<String>,
    },

    /// Save a full evaluation form read from YAML
    Intake {
        #[arg(long, value_name = "FILE", required_unless_present = "template")]
        file: Option<String>,

        #[arg(long, help = "Print a blank form to fill in")]
        template: bool,
    },

    /// Render the evaluation sheet of a client
    Print {
        #[arg(long, required_unless_present = "clients")]
        client: Option<String>,

        #[arg(long, help = "Record of this day instead of the latest")]
        date: Option<String>,

        #[arg(long, value_name = "FILE", required_unless_present = "clients")]
        file: Option<String>,

        #[arg(long, value_enum, default_value = "html")]
        format: PrintFormat,

        #[arg(long, help = "List the client names instead")]
        clients: bool,
    },

    /// Monthly cash flow: income, expenses and profit
    Cashflow {
        #[arg(long, help = "Month (1-12, default: current)")]
        month: Option<u32>,

        #[arg(long, help = "Year (default: current)")]
        year: Option<i32>,
    },

    /// Record an expense
    Expense {
        /// Amount (150, 150,00 or 1.234,56)
        #[arg(allow_hyphen_values = true)]
        amount: String,

        #[arg(long, help = "Description")]
        desc: Option<String>,

        #[arg(long, value_enum, default_value = "other")]
        category: ExpenseCategory,

        #[arg(long, help = "Date (default: today)")]
        date: Option<String>,
    },

    /// List expenses
    Expenses {
        #[arg(long, short, help = "YYYY, YYYY-MM, YYYY-MM-DD or A:B (default: current month)")]
        period: Option<String>,
    },

    /// Attach a photo to the client's latest record
    Photo {
        #[arg(long)]
        client: String,

        #[arg(long, value_name = "FILE")]
        file: String,
    },

    /// Import a CSV dump of a legacy sheet
    Import {
        #[arg(long, value_enum)]
        sheet: SheetKind,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long = "dry-run", help = "Check the file without writing")]
        dry_run: bool,
    },

    /// Create a backup copy of the workbook
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Export a sheet
    Export {
        #[arg(long, value_enum, default_value = "agendamentos")]
        sheet: SheetKind,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
