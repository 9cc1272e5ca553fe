// Copyright (c) 2024-present, fjall-rs
// This source code is licensed under both the Apache 2.0 and MIT License
// (found in the LICENSE-* files in the repository)

//! CLI tool for experimenting with chained hash tables

use chained_hash_table::{HashMap, Key, Table};
use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use rustyline::DefaultEditor;
use std::io::{self, BufRead, IsTerminal, Write};
use tracing_subscriber::{
    filter::{EnvFilter, LevelFilter},
    prelude::*,
    registry::Registry,
};

macro_rules! die {
    ($fmt:literal, $($arg:tt)*) => {{
        eprintln!($fmt, $($arg)*);
        std::process::exit(1);
    }};

    ($msg:literal) => {{
        eprintln!($msg);
        std::process::exit(1);
    }};
}

use tracing::{debug, info};

const DEFAULT_CAPACITY: usize = 5;

pub fn init_tracing(quiet: bool, verbose: u8) -> (bool, LevelFilter) {
    let is_verbose = !quiet && verbose > 0;

    let level_filter = if quiet {
        LevelFilter::ERROR
    } else {
        match verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    };

    // Bridge log crate macros to tracing (the library logs through log::*)
    tracing_log::LogTracer::init().expect("Failed to set log tracer");

    let registry = Registry::default();

    let env_filter = EnvFilter::builder()
        .with_default_directive(level_filter.into())
        .with_env_var("CHTAB_LOG")
        .from_env_lossy()
        .add_directive(
            "rustyline=warn"
                .parse()
                .expect("Failed to parse rustyline directive"),
        );

    let subscriber = registry.with(env_filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .compact(),
    );

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        die!("INTERNAL ERROR: setting default tracing::subscriber failed");
    }

    let prev_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        tracing_panic::panic_hook(info);
        prev_hook(info); // daisy-chain to old panic hook
    }));

    (is_verbose, level_filter)
}

/// CLI tool for experimenting with chained hash tables
#[derive(Parser, Debug)]
#[command(name = "chtab")]
#[command(about = "CLI tool for experimenting with chained hash tables")]
struct ToolArgs {
    /// Suppress all output except for errors. This overrides the -v flag.
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Turn on verbose output. Supply -v multiple times to increase verbosity.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Amount of buckets
    #[arg(short, long, default_value_t = DEFAULT_CAPACITY, value_name = "BUCKETS")]
    capacity: usize,

    /// Keys to insert before running the command (e.g., "12,22,37" or "-3,-8")
    #[arg(
        short, long,
        value_delimiter = ',',
        allow_hyphen_values = true,
        value_name = "KEYS",
    )]
    keys: Vec<Key>,

    /// Command to run (if omitted, starts interactive shell)
    #[command(subcommand)]
    command: Option<ToolCommand>,
}

#[derive(Subcommand, Debug, Clone)]
enum ToolCommand {
    /// Insert one or more keys
    Insert {
        /// The keys to insert
        #[arg(required = true, allow_negative_numbers = true)]
        keys: Vec<Key>,
    },
    /// Check whether a key is present
    Contains {
        /// The key to look up
        #[arg(allow_negative_numbers = true)]
        key: Key,
    },
    /// Show the chain of a single bucket
    Bucket {
        /// The bucket index
        index: usize,
    },
    /// Print every bucket
    #[command(visible_alias = "ls")]
    Print,
    /// Show table statistics
    Info,
    /// Run the hash table vs. dictionary walkthrough
    Demo,
}

// Internal shell commands, include all external tool commands
#[derive(Parser, Debug)]
#[command(name = "")]
#[command(no_binary_name = true)]
#[command(disable_version_flag = true)]
#[command(help_template = "
{version}

Available Commands:

{subcommands}

Use `help COMMAND` or `COMMAND --help` for more details.

")]

struct ShellArgs {
    #[command(subcommand)]
    command: ShellCommand,
}

// Shell commands (including ones not available from CLI)
#[derive(Subcommand, Debug, Clone)]
enum ShellCommand {
    #[command(flatten)]
    ToolCmd(ToolCommand),

    /// Exit the current shell
    #[command(visible_alias = "quit")]
    Exit,
}

struct Session {
    table: Table,
}

impl Session {
    fn open(capacity: usize, keys: &[Key]) -> chained_hash_table::Result<Self> {
        let mut table = Table::new(capacity)?;

        for &key in keys {
            table.insert(key);
        }

        Ok(Self { table })
    }
}

fn handle_insert(session: &mut Session, keys: &[Key]) {
    for &key in keys {
        session.table.insert(key);
    }
    println!("OK ({} inserted)", keys.len());
}

fn handle_contains(session: &Session, key: Key) {
    println!("{}", session.table.contains(key));
}

fn handle_bucket(session: &Session, index: usize) {
    match session.table.bucket(index) {
        Some(bucket) => println!("Bucket {index}: {bucket}"),
        None => eprintln!(
            "Error: bucket index {index} out of range (capacity {})",
            session.table.capacity()
        ),
    }
}

#[allow(clippy::cast_precision_loss)]
fn print_info(session: &Session) {
    let table = &session.table;

    let used = (0..table.capacity())
        .filter_map(|idx| table.bucket(idx))
        .filter(|bucket| !bucket.is_empty())
        .count();

    println!("Buckets: {}", table.capacity());
    println!("Keys: {}", table.len());
    println!("Non-empty buckets: {used}");
    println!("Longest chain: {}", table.max_chain_len());
    println!(
        "Load factor: {:.2}",
        table.len() as f64 / table.capacity() as f64
    );
}

fn run_demo() {
    println!("Part A: Custom Hash Table");

    let mut table = match Table::new(5) {
        Ok(table) => table,
        Err(e) => die!("Error creating table: {}", e),
    };

    for key in [12, 22, 37] {
        table.insert(key);
    }

    table.print_table();

    println!("Contains 22? {}", table.contains(22));
    println!("Contains 99? {}", table.contains(99));

    println!("\nPart B: Dictionary Comparison");

    let mut phone_book = HashMap::<&str, &str>::default();
    phone_book.insert("Alice", "555-1234");
    phone_book.insert("Bob", "555-5678");
    phone_book.insert("Charlie", "555-9012");

    match phone_book.get("Alice") {
        Some(number) => println!("Alice's number: {number}"),
        None => println!("Alice's number: (not found)"),
    }
    println!("Contains David? {}", phone_book.contains_key("David"));
}

/// Result of executing a command
enum CommandResult {
    Continue,
    Exit,
}

/// Execute a parsed command
fn execute_command(session: &mut Session, cmd: ToolCommand) -> CommandResult {
    match cmd {
        ToolCommand::Insert { keys } => handle_insert(session, &keys),
        ToolCommand::Contains { key } => handle_contains(session, key),
        ToolCommand::Bucket { index } => handle_bucket(session, index),
        ToolCommand::Print => session.table.print_table(),
        ToolCommand::Info => print_info(session),
        ToolCommand::Demo => run_demo(),
    }
    CommandResult::Continue
}

/// Execute a shell-only command
fn execute_shell_command(session: &mut Session, cmd: ShellCommand) -> CommandResult {
    match cmd {
        ShellCommand::ToolCmd(tool_cmd) => execute_command(session, tool_cmd),
        ShellCommand::Exit => CommandResult::Exit,
    }
}

/// Parse and run a shell command line
fn run_shell_command(session: &mut Session, line: &str) -> CommandResult {
    let line = line.trim();
    if line.is_empty() {
        return CommandResult::Continue;
    }

    let tokens = match shlex::split(line) {
        Some(t) if !t.is_empty() => t,
        Some(_) => return CommandResult::Continue,
        None => {
            eprintln!("error: unclosed quote");
            return CommandResult::Continue;
        }
    };

    match ShellArgs::try_parse_from(&tokens) {
        Ok(args) => execute_shell_command(session, args.command),
        Err(e) => {
            // Print clap's error message
            eprintln!("{}", e);
            CommandResult::Continue
        }
    }
}

fn run_shell(session: &mut Session) {
    if io::stdin().is_terminal() {
        run_shell_interactive(session);
    } else {
        run_shell_non_interactive(session);
    }
}

fn run_shell_interactive(session: &mut Session) {
    println!("Welcome to the chained hash table shell");
    println!("Type 'help' for available commands, 'exit' to quit.\n");

    let mut rl = match DefaultEditor::new() {
        Ok(editor) => editor,
        Err(e) => {
            eprintln!("Error initializing line editor: {}", e);
            return;
        }
    };

    loop {
        match rl.readline("chtab> ") {
            Ok(line) => {
                let _ = rl.add_history_entry(&line);
                if let CommandResult::Exit = run_shell_command(session, &line) {
                    break;
                }
            }
            Err(rustyline::error::ReadlineError::Interrupted) => {
                // Ignore Ctrl+C, just show a new prompt
                continue;
            }
            Err(rustyline::error::ReadlineError::Eof) => {
                println!();
                break;
            }
            Err(e) => {
                eprintln!("Error reading input: {}", e);
                break;
            }
        }
    }
}

fn run_shell_non_interactive(session: &mut Session) {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        if stdout.flush().is_err() {
            die!("can't flush stdout");
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => {
                // EOF
                break;
            }
            Ok(_) => {
                if let CommandResult::Exit = run_shell_command(session, &line) {
                    break;
                }
            }
            Err(e) => {
                die!("Error reading input: {}", e);
            }
        }
    }
}

fn main() {
    let args = ToolArgs::parse();
    let (verbose, level_filter) = init_tracing(args.quiet, args.verbose);

    let cmd = ToolArgs::command();

    info!(
        "starting {} ({} {}), log level: {level_filter}",
        cmd.get_name(),
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );

    let mut session = match Session::open(args.capacity, &args.keys) {
        Ok(s) => s,
        Err(e) => {
            let note = if verbose {
                ""
            } else {
                ". Note: Use -v (one or multiple times) for more information"
            };
            die!("Error creating table: {}{}", e, note);
        }
    };

    debug!("table ready with {} keys", session.table.len());

    match args.command {
        Some(cmd) => {
            execute_command(&mut session, cmd);
        }
        None => run_shell(&mut session),
    }
}
