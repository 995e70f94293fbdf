//! Paging of long outputs through `$PAGER`

use log::debug;
use std::io::{self, IsTerminal, Write};
use std::process::{Command, Stdio};

use crate::config::defaults;

/// Print `text`, through the user's pager when requested and stdout is a
/// terminal
///
/// Falls back to plain printing if the pager cannot be started.
pub fn page_output(text: &str, use_pager: bool) {
    if !use_pager || !io::stdout().is_terminal() {
        println!("{}", text);
        return;
    }

    let pager = std::env::var("PAGER")
        .ok()
        .filter(|p| !p.trim().is_empty())
        .unwrap_or_else(|| defaults::PAGER.to_string());

    if let Err(e) = run_pager(&pager, text) {
        debug!("Pager '{}' failed ({}), printing directly", pager, e);
        println!("{}", text);
    }
}

/// Split a pager command line into program and arguments, with shell
/// quoting rules
fn parse_pager_command(command: &str) -> Option<(String, Vec<String>)> {
    let mut parts = shlex::split(command)?.into_iter();
    let program = parts.next()?;
    Some((program, parts.collect()))
}

fn run_pager(command: &str, text: &str) -> io::Result<()> {
    let (program, args) = parse_pager_command(command)
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "invalid pager command"))?;

    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .spawn()?;

    if let Some(mut stdin) = child.stdin.take() {
        // The user may quit the pager before reading everything
        match writeln!(stdin, "{}", text) {
            Err(e) if e.kind() != io::ErrorKind::BrokenPipe => return Err(e),
            _ => {}
        }
    }

    child.wait()?;
    Ok(())
}
