//! Command-line parsing.
//!
//! Flags fill an [`Overrides`] layer; anything not given on the command
//! line stays `None` so the environment and config file still apply.

use std::ffi::OsString;
use std::path::PathBuf;

use thiserror::Error;

use crate::config::Overrides;

/// Parsed command line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Args {
    /// JSON config file, if any.
    pub config: Option<PathBuf>,
    /// Highest-priority settings layer.
    pub overrides: Overrides,
    pub help: bool,
    pub version: bool,
}

/// (short, long, value name, description) for each flag, in help order.
const FLAGS: &[(char, &str, &str, &str)] = &[
    ('H', "host", "ADDR", "IP address to bind [default: 127.0.0.1]"),
    ('p', "port", "PORT", "Port to listen on [default: 3000]"),
    ('c', "config", "FILE", "JSON configuration file"),
    ('s', "store", "ADDR", "Backing store address"),
    ('o', "store-option", "OPT", "Backing store option (repeatable)"),
    ('l', "log-level", "LEVEL", "Level or tracing filter directive"),
    ('h', "help", "", "Print help"),
    ('V', "version", "", "Print version"),
];

/// Parse the process arguments.
pub fn parse_args() -> Result<Args, ArgsError> {
    parse_args_from(std::env::args_os())
}

/// Parse an argument list whose first item is the program name.
pub fn parse_args_from<I>(args: I) -> Result<Args, ArgsError>
where
    I: IntoIterator<Item = OsString>,
{
    use lexopt::prelude::*;

    let mut parsed = Args::default();
    let mut parser = lexopt::Parser::from_iter(args);

    while let Some(arg) = parser.next()? {
        let layer = &mut parsed.overrides;
        match arg {
            Short('H') | Long("host") => {
                let raw = parser.value()?.string()?;
                let host = raw.parse().map_err(|_| ArgsError::Invalid("host", raw))?;
                layer.host = Some(host);
            }
            Short('p') | Long("port") => {
                let raw = parser.value()?.string()?;
                let port = raw.parse().map_err(|_| ArgsError::Invalid("port", raw))?;
                layer.port = Some(port);
            }
            Short('s') | Long("store") => layer.store_address = Some(parser.value()?.string()?),
            Short('o') | Long("store-option") => {
                layer.store_options.push(parser.value()?.string()?)
            }
            Short('l') | Long("log-level") => layer.log_level = Some(parser.value()?.string()?),
            Short('c') | Long("config") => parsed.config = Some(parser.value()?.into()),
            Short('h') | Long("help") => parsed.help = true,
            Short('V') | Long("version") => parsed.version = true,
            Value(extra) => return Err(ArgsError::Positional(extra.to_string_lossy().into())),
            _ => return Err(arg.unexpected().into()),
        }
    }

    Ok(parsed)
}

/// Render the usage text.
pub fn help_text() -> String {
    let mut text = format!(
        "session-vault {}\nConcurrent session store with a small REST surface\n\n\
         USAGE:\n    session-vault [OPTIONS]\n\nOPTIONS:\n",
        env!("CARGO_PKG_VERSION")
    );
    for (short, long, value, about) in FLAGS {
        let flag = if value.is_empty() {
            format!("-{short}, --{long}")
        } else {
            format!("-{short}, --{long} <{value}>")
        };
        text.push_str(&format!("    {flag:<30}{about}\n"));
    }

    text.push_str("\nENVIRONMENT (overridden by flags):\n");
    for var in [
        crate::config::ENV_HOST,
        crate::config::ENV_PORT,
        crate::config::ENV_STORE_ADDR,
        crate::config::ENV_STORE_OPTIONS,
        crate::config::ENV_LOG_LEVEL,
        "RUST_LOG",
    ] {
        text.push_str(&format!("    {var}\n"));
    }
    text
}

/// Argument parsing errors.
#[derive(Error, Debug)]
pub enum ArgsError {
    #[error(transparent)]
    Lexopt(#[from] lexopt::Error),

    #[error("invalid value for --{0}: '{1}'")]
    Invalid(&'static str, String),

    #[error("unexpected argument: '{0}'")]
    Positional(String),
}
