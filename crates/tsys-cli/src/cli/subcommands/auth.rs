use clap::{Args, Subcommand};

/// Authentication commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuthCommands {
    /// Log in with username/email and password; stores the session.
    Login(AuthLoginArgs),
    /// Clear stored credentials.
    Logout,
    /// Show current auth status (token source, role, user id).
    Status,
    /// Create a new account.
    Register(AuthRegisterArgs),
    /// Request a password-reset code for an account.
    RequestReset(AuthRequestResetArgs),
    /// Complete a password reset with the emailed code.
    Reset(AuthResetArgs),
    /// Change the current user's password.
    ChangePassword(AuthChangePasswordArgs),
    /// Print the current user id decoded from the stored token.
    Whoami,
}

#[derive(Clone, Debug, Args)]
pub struct AuthLoginArgs {
    /// Username or email.
    #[arg(long)]
    pub login: String,
    /// Account password.
    #[arg(long)]
    pub password: String,
}

#[derive(Clone, Debug, Args)]
pub struct AuthRegisterArgs {
    #[arg(long)]
    pub username: String,
    #[arg(long)]
    pub email: String,
    /// Given name.
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub surname: String,
    #[arg(long)]
    pub password: String,
}

#[derive(Clone, Debug, Args)]
pub struct AuthRequestResetArgs {
    /// Username or email of the account to reset.
    #[arg(long)]
    pub login: String,
}

#[derive(Clone, Debug, Args)]
pub struct AuthResetArgs {
    /// The reset code from the email.
    #[arg(long)]
    pub code: String,
    #[arg(long)]
    pub new_password: String,
}

#[derive(Clone, Debug, Args)]
pub struct AuthChangePasswordArgs {
    #[arg(long)]
    pub old_password: String,
    #[arg(long)]
    pub new_password: String,
}
