use crate::{Args, Command};
use anyhow::{anyhow, Context, Result};
use jsonform_editor::{sample_config, Edit, EditorConfig, EditorSession};
use jsonform_state::{Path, Value};
use std::io::Write;
use std::path::Path as FsPath;

pub fn run(args: Args, out: &mut impl Write) -> Result<()> {
    let mut session = open_session(&args)?;

    match args.command {
        Command::Show { json } => {
            if json {
                let nodes = session.outline();
                let text = if args.pretty {
                    serde_json::to_string_pretty(&nodes)?
                } else {
                    serde_json::to_string(&nodes)?
                };
                writeln!(out, "{text}")?;
            } else {
                write!(out, "{}", session.render())?;
            }
            return Ok(());
        }
        Command::Get { ref path } => {
            let path = parse_path(path)?;
            let value = session
                .get(&path)
                .ok_or_else(|| anyhow!("no value at {path}"))?;
            return print_value(value, args.pretty, out);
        }
        Command::Set {
            ref path,
            ref value,
            json,
        } => {
            let path = parse_path(path)?;
            let result = if json {
                let value = Value::from_json_str(value)
                    .with_context(|| format!("value for {path} is not valid JSON"))?;
                session.set(&path, value)
            } else {
                session.set_field_input(&path, value)
            };
            result.with_context(|| format!("failed to set {path}"))?;
        }
        Command::Delete { ref path } => {
            let path = parse_path(path)?;
            session
                .delete(&path)
                .with_context(|| format!("failed to delete {path}"))?;
        }
        Command::Apply { edits: ref file } => {
            let edits = read_edits(file)?;
            let applied = session
                .apply_all(&edits)
                .with_context(|| format!("failed to apply edits from {}", file.display()))?;
            tracing::info!(applied, "edits applied");
        }
        Command::Export => {}
    }

    print_value(session.root(), args.pretty, out)
}

fn open_session(args: &Args) -> Result<EditorSession> {
    let mut config = match &args.config {
        Some(file) => EditorConfig::from_file(file)
            .with_context(|| format!("failed to load config {}", file.display()))?,
        None => EditorConfig::default(),
    };
    if args.read_only {
        config.read_only = true;
    }
    if let Some(show_paths) = args.show_paths {
        config.show_paths = show_paths;
    }
    if args.hide_paths {
        config.show_paths = false;
    }
    if let Some(limit) = args.history_limit {
        config.history_limit = limit;
    }

    let root = match &args.input {
        Some(file) => read_document(file)?,
        None => sample_config(),
    };
    tracing::debug!(read_only = config.read_only, "session opened");
    Ok(EditorSession::with_config(root, config))
}

fn read_document(file: &FsPath) -> Result<Value> {
    let text = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    Value::from_json_str(&text).with_context(|| format!("{} is not valid JSON", file.display()))
}

fn read_edits(file: &FsPath) -> Result<Vec<Edit>> {
    let text = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("{} is not a list of edits", file.display()))
}

fn parse_path(text: &str) -> Result<Path> {
    Ok(Path::parse(text)?)
}

fn print_value(value: &Value, pretty: bool, out: &mut impl Write) -> Result<()> {
    let text = if pretty {
        value.to_json_pretty()?
    } else {
        value.to_json_string()?
    };
    writeln!(out, "{text}")?;
    Ok(())
}
