use clap::{Parser, Subcommand};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const GIT_HASH: &str = env!("GIT_HASH");

/// Version string shown by `formz --version`.
pub fn version_string() -> String {
    if GIT_HASH.is_empty() {
        VERSION.to_string()
    } else {
        format!("{}@{}", VERSION, GIT_HASH)
    }
}

#[derive(Parser, Debug)]
#[command(name = "formz")]
#[command(version = version_string())]
#[command(about = "Terminal client for the asset-tracker API", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API base URL (also FORMZ_BASE_URL)
    #[arg(long, global = true, env = "FORMZ_BASE_URL")]
    pub base_url: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new account
    Signup,

    /// Sign in and store the session
    Login,

    /// Sign out and clear the stored session
    Logout,

    /// Request a password-reset email
    #[command(name = "forgot-password")]
    ForgotPassword,

    /// File a new expense report
    Expense,

    /// Create a maintenance plan
    Plan,

    /// Show the stored session
    Session,

    /// List the available forms
    Forms,
}
