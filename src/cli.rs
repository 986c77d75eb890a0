use clap::{Parser, Subcommand, ValueEnum};
use contact_normalizer::{Config, EmailPolicy, OutputFormat};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "contact-normalizer",
    version,
    about = "Normalize and validate contact emails and phone numbers"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        value_enum,
        help = "Email repairs to attempt (defaults to EMAIL_POLICY or 'repair')"
    )]
    pub email_policy: Option<PolicyArg>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Report valid and invalid emails, one per line
    Emails {
        #[arg(help = "Email lists (defaults to EMAIL_FILE or Email.txt)")]
        files: Vec<PathBuf>,
    },
    /// Report valid and invalid phone numbers, one per line
    Phones {
        #[arg(help = "Phone lists (defaults to PHONE_FILE or PhoneNumbers.txt)")]
        files: Vec<PathBuf>,
    },
    /// Print each contact row with cleaned email and phone
    Contacts {
        #[arg(help = "Contact CSV files: first name, last name, email, phone")]
        files: Vec<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PolicyArg {
    Repair,
    SpacingOnly,
}

impl From<PolicyArg> for EmailPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Repair => EmailPolicy::Repair,
            PolicyArg::SpacingOnly => EmailPolicy::SpacingOnly,
        }
    }
}

impl Cli {
    /// The `--email-policy` flag, falling back to the configured policy.
    pub fn resolve_policy(&self, config: &Config) -> EmailPolicy {
        self.email_policy
            .map(EmailPolicy::from)
            .unwrap_or(config.email_policy)
    }

    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// Process exit status for a run in which `failed` input files could not be read.
pub fn exit_status(failed: usize) -> u8 {
    if failed == 0 {
        0
    } else {
        1
    }
}

/// Use `files`, or the configured default when none were given.
pub fn files_or(files: Vec<PathBuf>, default: &Path) -> Vec<PathBuf> {
    if files.is_empty() {
        vec![default.to_path_buf()]
    } else {
        files
    }
}
