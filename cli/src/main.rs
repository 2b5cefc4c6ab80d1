//! `roster`: manage employees from the terminal.

use std::io;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use roster_cli::{render, ReqwestTransport, TerminalNotifier};
use roster_core::{ActionError, ClientConfig, Field, RecordId, Session};
use tokio::runtime::Builder;
use tracing::error;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Debug, Parser)]
#[command(name = "roster", about = "Manage employees through the REST API", version)]
struct Cli {
    /// API base URL, e.g. `http://localhost:3000/api`.
    #[arg(long, env = "ROSTER_API_URL", value_name = "url")]
    base_url: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List all employees.
    List,
    /// Show a single employee.
    Show { id: RecordId },
    /// Add an employee.
    Add {
        #[arg(long)]
        name: String,
        #[arg(long, allow_negative_numbers = true)]
        salary: String,
        #[arg(long)]
        city: String,
    },
    /// Edit an employee. Omitted fields keep their current value.
    Edit {
        id: RecordId,
        #[arg(long)]
        name: Option<String>,
        #[arg(long, allow_negative_numbers = true)]
        salary: Option<String>,
        #[arg(long)]
        city: Option<String>,
    },
    /// Delete an employee after confirmation.
    Delete {
        id: RecordId,
        /// Skip the confirmation prompt.
        #[arg(long, short)]
        yes: bool,
    },
}

fn main() -> ExitCode {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let runtime = match Builder::new_current_thread().enable_all().build() {
        Ok(runtime) => runtime,
        Err(err) => {
            error!(error = %err, "failed to start runtime");
            return ExitCode::FAILURE;
        }
    };
    if runtime.block_on(run(cli)) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

async fn run(cli: Cli) -> bool {
    let config = cli
        .base_url
        .map(ClientConfig::new)
        .unwrap_or_else(ClientConfig::from_env);
    let yes = matches!(cli.command, Command::Delete { yes: true, .. });
    let notifier = TerminalNotifier::new(io::stdin().lock(), io::stdout()).assume_yes(yes);
    let mut session = Session::new(&config, ReqwestTransport::new(), notifier);

    match cli.command {
        Command::List => {
            session.mount().await;
            println!("{}", render::table(session.table()));
            render::load_error(session.table()).is_none()
        }
        Command::Show { id } => match session.get(id).await {
            Ok(record) => {
                println!("{}", render::record(&record));
                true
            }
            Err(ActionError::Api(err)) => {
                eprintln!("{}", err.user_message());
                false
            }
            Err(err) => report(err),
        },
        Command::Add { name, salary, city } => {
            let form = session.form_mut();
            form.set(Field::Name, &name);
            form.set(Field::Salary, &salary);
            form.set(Field::City, &city);
            match session.submit_form().await {
                Ok(record) => {
                    println!("{}", render::record(&record));
                    true
                }
                Err(err) => report(err),
            }
        }
        Command::Edit {
            id,
            name,
            salary,
            city,
        } => {
            session.mount().await;
            if let Some(error) = render::load_error(session.table()) {
                eprintln!("{error}");
                return false;
            }
            let panel = match session.open_edit(id) {
                Ok(panel) => panel,
                Err(err) => return report(err),
            };
            let changes = [(Field::Name, name), (Field::Salary, salary), (Field::City, city)];
            for (field, value) in changes {
                if let Some(value) = value {
                    panel.set(field, &value);
                }
            }
            match session.save_edit().await {
                Ok(record) => {
                    println!("{}", render::record(&record));
                    true
                }
                Err(err) => report(err),
            }
        }
        Command::Delete { id, .. } => {
            session.mount().await;
            if let Some(error) = render::load_error(session.table()) {
                eprintln!("{error}");
                return false;
            }
            match session.delete(id).await {
                Ok(()) => true,
                Err(err) => report(err),
            }
        }
    }
}

/// Print what the notifier has not already shown. Always a failure.
fn report(err: ActionError) -> bool {
    match err {
        ActionError::Invalid(errors) => {
            eprintln!("Invalid input:\n{}", render::field_errors(&errors));
        }
        ActionError::Declined => eprintln!("Cancelled."),
        // Mutation failures were already reported by the notifier.
        ActionError::Api(_) => {}
        other => eprintln!("{other}"),
    }
    false
}
