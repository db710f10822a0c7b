use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, CommandFactory, Parser, Subcommand};
use quill::core::log::init_logging;
use quill::core::{AddOn, AssignmentType, ContactForm, DisplayCurrency, EnquiryType};

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Estimate the cost of an assignment
    Quote(QuoteArgs),
    /// Show live exchange rates against the fallback rates
    Rates,
    /// Show student reviews
    Reviews,
    /// Show sample assignments
    Samples,
    /// Show reviews and samples together
    Home,
    /// Send an enquiry, or list stored enquiries
    Contact(ContactArgs),
}

#[derive(Args)]
struct QuoteArgs {
    /// Number of words
    #[arg(short, long, default_value_t = 1000, value_parser = clap::value_parser!(u32).range(100..=10_000))]
    words: u32,

    /// Assignment type: essay, report, dissertation, coursework, presentation, exam-prep
    #[arg(short = 't', long = "type", default_value = "essay")]
    assignment_type: AssignmentType,

    /// Specialist requirement (accounting, coding, medical), may be repeated
    #[arg(short, long = "add-on")]
    add_ons: Vec<AddOn>,

    /// Currency to show the estimate in: base, usd, gbp
    #[arg(long, default_value = "base")]
    currency: DisplayCurrency,

    /// Skip the live rate lookup and use the fallback rates
    #[arg(long)]
    offline: bool,

    /// Print the quote as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct ContactArgs {
    /// List stored enquiries instead of sending one
    #[arg(long, exclusive = true)]
    list: bool,

    #[arg(long, required_unless_present = "list")]
    name: Option<String>,

    #[arg(long, required_unless_present = "list")]
    email: Option<String>,

    #[arg(long, required_unless_present = "list")]
    subject: Option<String>,

    /// Assignment type: essay, report, dissertation, coursework, presentation, other
    #[arg(long = "type")]
    assignment_type: Option<EnquiryType>,

    /// Approximate word count
    #[arg(long)]
    words: Option<String>,

    /// Deadline as YYYY-MM-DD
    #[arg(long)]
    deadline: Option<NaiveDate>,

    #[arg(long, required_unless_present = "list")]
    message: Option<String>,
}

impl From<QuoteArgs> for quill::QuoteRequest {
    fn from(args: QuoteArgs) -> Self {
        quill::QuoteRequest {
            word_count: args.words,
            assignment_type: args.assignment_type,
            add_ons: args.add_ons,
            currency: args.currency,
            offline: args.offline,
            json: args.json,
        }
    }
}

impl From<ContactArgs> for quill::AppCommand {
    fn from(args: ContactArgs) -> Self {
        if args.list {
            return quill::AppCommand::ListEnquiries;
        }
        quill::AppCommand::Contact(ContactForm {
            name: args.name.unwrap_or_default(),
            email: args.email.unwrap_or_default(),
            subject: args.subject.unwrap_or_default(),
            assignment_type: args.assignment_type,
            word_count: args.words,
            deadline: args.deadline,
            message: args.message.unwrap_or_default(),
        })
    }
}

impl From<Commands> for quill::AppCommand {
    fn from(cmd: Commands) -> quill::AppCommand {
        match cmd {
            Commands::Quote(args) => quill::AppCommand::Quote(args.into()),
            Commands::Rates => quill::AppCommand::Rates,
            Commands::Reviews => quill::AppCommand::Reviews,
            Commands::Samples => quill::AppCommand::Samples,
            Commands::Home => quill::AppCommand::Home,
            Commands::Contact(args) => args.into(),
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => quill::cli::setup::setup(),
        Some(cmd) => quill::run_command(cmd.into(), cli.config_path.as_deref()).await,
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
