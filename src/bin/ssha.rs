// src/bin/ssha.rs

//! Driver program _ssha_ drives the [_sshalib_].
//!
//! Processes user-passed command-line arguments. Scans the authentication
//! log for failed ssh attempts, then for successful ssh logins, renders
//! the two sections into one combined report, and prints it to STDOUT.
//! With `--mail`, the same report is then submitted once to the configured
//! SMTP relay.
//!
//! Control flow is strictly sequential and single-threaded. `ssha.rs`
//! is the only code that prints to STDOUT.
//!
//! Exits 0 on normal completion (including the print-only path). Exits 1
//! when the log cannot be read, a qualifying line is malformed, the mail
//! relay refuses the connection, or the send fails.
//!
//! [_sshalib_]: sshalib

#![allow(non_camel_case_types)]

use std::process::ExitCode;

use ::clap::{Parser, ValueEnum};
use ::const_format::concatcp;
#[allow(unused_imports)]
use ::si_trace_print::stack::stack_offset_set;
#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

use ::sshalib::common::{FPath, ReportLines, PATH_AUTH_LOG_DEFAULT};
use ::sshalib::data::report::combine;
use ::sshalib::debug::printers::e_err;
use ::sshalib::printer::mailer::{
    MailOutcome,
    MailerConfig,
    ReportMailer,
    RECEIVER_DEFAULT,
    RELAY_HOST_DEFAULT,
    RELAY_PORT_DEFAULT,
    SENDER_DEFAULT,
};
use ::sshalib::printer::reportprinter::{ColorChoice, ReportPrinter};
use ::sshalib::readers::authlogreader::AuthLogReader;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// command-line parsing
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

const CLI_HELP_AFTER: &str = concatcp!(
    r#"The report always prints to STDOUT. Option --mail additionally
submits the report through the mail relay; the default sender and
receiver addresses are placeholders meant to be replaced.

The auth log is expected to be a conventional syslog-style
authentication log: whitespace-separated fields where field 0 is a
timestamp. Differently structured logs will misparse.

Version: "#,
    env!("CARGO_PKG_VERSION"),
    r#"
License: "#,
    env!("CARGO_PKG_LICENSE"),
);

/// CLI enum that maps to [`termcolor::ColorChoice`].
///
/// [`termcolor::ColorChoice`]: https://docs.rs/termcolor/1.4.1/termcolor/enum.ColorChoice.html
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord, ValueEnum)]
enum CLI_Color_Choice {
    always,
    auto,
    never,
}

/// clap command-line arguments build-time definitions.
//
// Note:
// * the `about` is taken from `Cargo.toml:[package]:description`.
#[derive(Parser, Debug)]
#[clap(
    about = env!("CARGO_PKG_DESCRIPTION"),
    name = "ssha",
    version = concatcp!(
        "(ssh activity)\n",
        "Version: ", env!("CARGO_PKG_VERSION"), "\n",
        "MSRV: ", env!("CARGO_PKG_RUST_VERSION"), "\n",
        "License: ", env!("CARGO_PKG_LICENSE"),
    ),
    after_help = CLI_HELP_AFTER,
    verbatim_doc_comment,
)]
struct CLI_Args {
    /// Path of the authentication log to scan.
    #[clap(
        verbatim_doc_comment,
        default_value_t = String::from(PATH_AUTH_LOG_DEFAULT),
    )]
    path: String,

    /// Email the report through the mail relay after printing it.
    #[clap(short = 'm', long, verbatim_doc_comment)]
    mail: bool,

    /// Mail relay host.
    #[clap(
        long = "mail-host",
        verbatim_doc_comment,
        default_value_t = String::from(RELAY_HOST_DEFAULT),
    )]
    mail_host: String,

    /// Mail relay port (plaintext submission).
    #[clap(
        long = "mail-port",
        verbatim_doc_comment,
        default_value_t = RELAY_PORT_DEFAULT,
    )]
    mail_port: u16,

    /// Sender address of the report mail.
    #[clap(
        long = "mail-from",
        verbatim_doc_comment,
        default_value_t = String::from(SENDER_DEFAULT),
    )]
    mail_from: String,

    /// Receiver address of the report mail.
    #[clap(
        long = "mail-to",
        verbatim_doc_comment,
        default_value_t = String::from(RECEIVER_DEFAULT),
    )]
    mail_to: String,

    /// Choose to print using colors.
    #[clap(
        required = false,
        short = 'c',
        long = "color",
        verbatim_doc_comment,
        value_enum,
        default_value_t = CLI_Color_Choice::auto,
    )]
    color_choice: CLI_Color_Choice,

    /// Print a summary of the scan to stderr.
    #[clap(short, long, verbatim_doc_comment)]
    summary: bool,
}

/// Process user-passed command-line arguments into program-usable values.
fn cli_process_args() -> (FPath, bool, MailerConfig, ColorChoice, bool) {
    defn!();
    let args = CLI_Args::parse();
    defo!("args {:?}", args);

    // map `CLI_Color_Choice` to `ColorChoice`
    let color_choice: ColorChoice = match args.color_choice {
        CLI_Color_Choice::always => ColorChoice::Always,
        CLI_Color_Choice::auto => ColorChoice::Auto,
        CLI_Color_Choice::never => ColorChoice::Never,
    };

    let config = MailerConfig {
        relay_host: args.mail_host,
        relay_port: args.mail_port,
        sender: args.mail_from,
        receiver: args.mail_to,
    };
    defx!();

    (args.path, args.mail, config, color_choice, args.summary)
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// main
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

pub fn main() -> ExitCode {
    if cfg!(debug_assertions) {
        stack_offset_set(Some(0));
    }
    defn!();
    let (path, mail, config, color_choice, summary) = cli_process_args();

    let mut reader = AuthLogReader::new(path);
    let failed = match reader.find_failed() {
        Ok(section) => section,
        Err(err) => {
            e_err!("{}", err);
            defx!("return FAILURE");
            return ExitCode::FAILURE;
        }
    };
    let successful = match reader.find_successful() {
        Ok(section) => section,
        Err(err) => {
            e_err!("{}", err);
            defx!("return FAILURE");
            return ExitCode::FAILURE;
        }
    };
    let lines: ReportLines = combine(&failed, &successful);

    // print before any mail attempt; a refused relay must not suppress
    // the STDOUT report
    let printer = ReportPrinter::new(color_choice);
    if let Err(err) = printer.print_report(&lines) {
        e_err!("{}", err);
        defx!("return FAILURE");
        return ExitCode::FAILURE;
    }

    let mut exitcode = ExitCode::SUCCESS;
    if mail {
        let mailer = ReportMailer::new(config, printer.header().to_string());
        match mailer.send_report(&lines) {
            Ok(MailOutcome::Sent) => {
                defo!("mail sent");
            }
            Ok(MailOutcome::NothingToSend) => {
                defo!("empty report; no mail sent");
            }
            Err(err) => {
                e_err!("{}", err);
                exitcode = ExitCode::FAILURE;
            }
        }
    }

    if summary {
        eprintln!("{}: {}", reader.path(), reader.summary());
    }
    defx!("exitcode {:?}", exitcode);

    exitcode
}
