use std::error::Error;
use std::fs;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;

use clap::Parser;
use log::{info, warn};

use memsh::components::Key;
use memsh::components::terminal::{render_line, render_prompt};
use memsh::config::{APP_NAME, APP_VERSION, DEFAULT_HOSTNAME, DEFAULT_USER, MAX_COMMAND_HISTORY};
use memsh::core::VirtualFs;
use memsh::models::OpenAction;
use memsh::{ShellConfig, Terminal};

/// In-memory filesystem shell.
#[derive(Parser, Debug)]
#[command(name = APP_NAME, version = APP_VERSION, about)]
struct Args {
    /// Session user (home directory is /home/<user>)
    #[arg(short, long, default_value = DEFAULT_USER)]
    user: String,

    /// Host name shown in the prompt
    #[arg(long, default_value = DEFAULT_HOSTNAME)]
    host: String,

    /// JSON seed tree replacing the bundled one
    #[arg(long, value_name = "FILE")]
    seed: Option<PathBuf>,

    /// Run these lines instead of reading stdin
    #[arg(short = 'c', long = "command", value_name = "LINE")]
    commands: Vec<String>,

    /// Maximum number of command history entries
    #[arg(long, default_value_t = MAX_COMMAND_HISTORY)]
    history: usize,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();

    let fs = match &args.seed {
        Some(path) => VirtualFs::from_seed_json(&fs::read_to_string(path)?)?,
        None => VirtualFs::from_seed_json(memsh::config::DEFAULT_SEED)?,
    };
    let config = ShellConfig {
        user: args.user,
        hostname: args.host,
        max_command_history: args.history,
    };
    let mut terminal = Terminal::new(fs, config);

    let interactive = args.commands.is_empty() && io::stdin().is_terminal();
    let color = !args.no_color && io::stdout().is_terminal();
    let mut out = io::stdout().lock();
    let mut shown = 0;

    if !args.commands.is_empty() {
        for line in &args.commands {
            run_line(&mut terminal, line);
            shown = flush_output(&terminal, shown, color, &mut out)?;
        }
        return Ok(());
    }

    loop {
        if interactive {
            write!(out, "{}", render_prompt(&terminal.prompt(), color))?;
            out.flush()?;
        }
        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                warn!("unreadable input line: {}", e);
                continue;
            }
        }
        let line = line.trim_end_matches(['\r', '\n']);
        run_line(&mut terminal, line);
        shown = flush_output(&terminal, shown, color, &mut out)?;
    }

    info!("session ended");
    Ok(())
}

/// Feed a line through the input editor key by key, then press Enter.
///
/// TAB characters inside the line trigger completion.
fn run_line(terminal: &mut Terminal, line: &str) {
    for c in line.chars() {
        if let Some(key) = Key::from_char(c) {
            if let Some(action) = terminal.handle_key(key) {
                perform(&action);
            }
        }
    }
    if let Some(action) = terminal.handle_key(Key::Enter) {
        perform(&action);
    }
}

fn perform(action: &OpenAction) {
    match action {
        OpenAction::Navigate { url } => {
            info!("open requested: {}", url);
            println!("Opening {}", url);
        }
    }
}

/// Print output lines appended since the last call; a shorter log means `clear`.
fn flush_output(
    terminal: &Terminal,
    shown: usize,
    color: bool,
    out: &mut impl Write,
) -> io::Result<usize> {
    let output = terminal.output();
    let start = if output.len() < shown {
        if color {
            write!(out, "\x1b[2J\x1b[H")?;
        }
        0
    } else {
        shown
    };
    for line in &output[start..] {
        writeln!(out, "{}", render_line(line, color))?;
    }
    out.flush()?;
    Ok(output.len())
}
