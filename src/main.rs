//! pickline demo binary
//!
//! With no arguments, runs the built-in example (select a name:
//! sam / tom / jerry, starting on tom). Otherwise the first argument is
//! the prompt message and the rest are choices, either bare labels or
//! `label=value` pairs.

use anyhow::Result;

use pickline::config::Config;
use pickline::log;
use pickline::prompt::{Choice, SelectPrompt};

#[tokio::main]
async fn main() -> Result<()> {
    if let Ok(log_path) = log::init() {
        log::log(&format!("Log file: {}", log_path.display()));
    }
    log::install_panic_hook();

    // Parse CLI arguments
    let args: Vec<String> = std::env::args().collect();
    let mut message: Option<String> = None;
    let mut choices: Vec<Choice<String>> = vec![];
    let mut default_index: Option<usize> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--default" | "-d" => {
                if i + 1 < args.len() {
                    match args[i + 1].parse() {
                        Ok(index) => default_index = Some(index),
                        Err(_) => eprintln!("Warning: --default requires a numeric index"),
                    }
                    i += 2;
                    continue;
                } else {
                    eprintln!("Warning: --default requires an index argument");
                    i += 1;
                }
            }
            arg if !arg.starts_with('-') => {
                if message.is_none() {
                    message = Some(arg.to_string());
                } else if let Some((label, value)) = arg.split_once('=') {
                    choices.push(Choice::new(label, value.to_string()));
                } else {
                    choices.push(Choice::new(arg, arg.to_string()));
                }
                i += 1;
            }
            _ => {
                // Unknown flag, ignore
                i += 1;
            }
        }
    }

    let (message, choices, default_index) = if choices.is_empty() {
        (
            "select a name".to_string(),
            vec![
                Choice::new("sam", "sam".to_string()),
                Choice::new("tom", "tom".to_string()),
                Choice::new("jerry", "jerry".to_string()),
            ],
            default_index.unwrap_or(1),
        )
    } else {
        (
            message.unwrap_or_default(),
            choices,
            default_index.unwrap_or(0),
        )
    };

    let config = Config::load();
    let answer = SelectPrompt::new(message, choices)
        .default_index(default_index)
        .theme(config.theme())
        .run()
        .await?;

    println!("answer {}", answer);
    Ok(())
}
