//! Line-oriented script parsing.
//!
//! A script is one statement per line, whitespace-separated:
//!
//! ```text
//! load photos/koala.png koala
//! brighten 10 koala koala-bright
//! greyscale luma-component koala koala-grey
//! filter blur koala-grey koala-soft
//! downscale 50 50 koala-soft koala-small
//! save out/koala-small.png koala-small
//! q
//! ```
//!
//! Blank lines and lines starting with `#` are skipped. Parsing resolves
//! every operation, component, filter, and transformation name here, so the
//! engine only ever sees closed enums.

mod command;

pub use command::{Operation, Statement};

use std::path::PathBuf;

use crate::error::{ImgridError, Result};

/// Parse a whole script into statements.
pub fn parse_script(source: &str) -> Result<Vec<Statement>> {
    let mut statements = Vec::new();
    for (number, line) in source.lines().enumerate() {
        if let Some(statement) = parse_line(line).map_err(|e| at_line(e, number + 1))? {
            statements.push(statement);
        }
    }
    Ok(statements)
}

/// Parse one script line. Returns `None` for blank and comment lines.
pub fn parse_line(line: &str) -> Result<Option<Statement>> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let tokens: Vec<&str> = trimmed.split_whitespace().collect();
    let statement = match tokens[0] {
        "q" => {
            expect_arity(&tokens, 0)?;
            Statement::Quit
        }
        "load" => {
            expect_arity(&tokens, 2)?;
            Statement::Load {
                path: PathBuf::from(tokens[1]),
                name: tokens[2].to_string(),
            }
        }
        "save" => {
            expect_arity(&tokens, 2)?;
            Statement::Save {
                path: PathBuf::from(tokens[1]),
                name: tokens[2].to_string(),
            }
        }
        _ => {
            // Everything else is `<operation> [scalars...] <src> <dest>`.
            if tokens.len() < 3 {
                return Err(parse_error(format!(
                    "statement `{}` is missing its source and destination names",
                    trimmed
                )));
            }
            let op = parse_operation(&tokens[..tokens.len() - 2])?;
            Statement::Apply {
                op,
                source: tokens[tokens.len() - 2].to_string(),
                dest: tokens[tokens.len() - 1].to_string(),
            }
        }
    };

    Ok(Some(statement))
}

/// Parse operation tokens (the statement minus its image names), e.g.
/// `["brighten", "10"]` or `["filter", "blur"]`.
pub fn parse_operation(tokens: &[&str]) -> Result<Operation> {
    let Some((&keyword, args)) = tokens.split_first() else {
        return Err(parse_error("empty operation"));
    };

    let op = match keyword {
        "brighten" => Operation::Brighten(parse_int(one_arg(keyword, args)?)?),
        "darken" => Operation::Brighten(-parse_int(one_arg(keyword, args)?)?),
        "vertical-flip" => {
            no_args(keyword, args)?;
            Operation::VerticalFlip
        }
        "horizontal-flip" => {
            no_args(keyword, args)?;
            Operation::HorizontalFlip
        }
        "greyscale" => Operation::Greyscale(one_arg(keyword, args)?.parse()?),
        "color-transformation" => {
            Operation::ColorTransformation(one_arg(keyword, args)?.parse()?)
        }
        "filter" => Operation::Filter(one_arg(keyword, args)?.parse()?),
        "downscale" => {
            if args.len() != 2 {
                return Err(parse_error(format!(
                    "downscale takes two percentages, got {} argument(s)",
                    args.len()
                )));
            }
            Operation::Downscale {
                width_percent: parse_percent(args[0])?,
                height_percent: parse_percent(args[1])?,
            }
        }
        _ => {
            return Err(ImgridError::Parse {
                message: format!("unknown command: {}", keyword),
                help: Some(
                    "expected one of load, save, brighten, darken, vertical-flip, \
                     horizontal-flip, greyscale, color-transformation, filter, \
                     downscale, q"
                        .to_string(),
                ),
            })
        }
    };

    Ok(op)
}

fn expect_arity(tokens: &[&str], args: usize) -> Result<()> {
    if tokens.len() != args + 1 {
        return Err(parse_error(format!(
            "{} takes {} argument(s), got {}",
            tokens[0],
            args,
            tokens.len() - 1
        )));
    }
    Ok(())
}

fn one_arg<'a>(keyword: &str, args: &[&'a str]) -> Result<&'a str> {
    if args.len() == 1 {
        Ok(args[0])
    } else {
        Err(parse_error(format!(
            "{} takes one argument, got {}",
            keyword,
            args.len()
        )))
    }
}

fn no_args(keyword: &str, args: &[&str]) -> Result<()> {
    if !args.is_empty() {
        return Err(parse_error(format!("{} takes no arguments", keyword)));
    }
    Ok(())
}

fn parse_int(token: &str) -> Result<i32> {
    token
        .parse()
        .map_err(|_| parse_error(format!("expected an integer, got `{}`", token)))
}

fn parse_percent(token: &str) -> Result<u32> {
    token
        .parse()
        .map_err(|_| parse_error(format!("expected a percentage, got `{}`", token)))
}

fn parse_error(message: impl Into<String>) -> ImgridError {
    ImgridError::Parse {
        message: message.into(),
        help: None,
    }
}

/// Attach a line number to an error bubbling out of `parse_line`.
fn at_line(error: ImgridError, line: usize) -> ImgridError {
    match error {
        ImgridError::Parse { message, help } => ImgridError::Parse {
            message: format!("line {}: {}", line, message),
            help,
        },
        ImgridError::InvalidArgument { message, help } => ImgridError::InvalidArgument {
            message: format!("line {}: {}", line, message),
            help,
        },
        other => other,
    }
}
