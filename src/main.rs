//! Classify a message and print the localized reply as JSON.
//!
//! Usage:
//!   farmnex-lingua "ආයුබෝවන්, කොහොමද?"
//!   farmnex-lingua --advice "Plant rice now." "வணக்கம்"
//!   farmnex-lingua --template crop_advice --param crop=tea --param advice="water daily" "මල"
//!   echo "Hello" | farmnex-lingua
//!
//! With no message words the message is read from stdin. Stdin must be piped;
//! an interactive terminal is rejected instead of waiting for input.
//!
//! Optional environment variables:
//! - LOG_DIRECTIVE (defaults to farmnex_lingua=info)
//! - FORCE_LANGUAGE (en, si or ta; skips detection)
//! - VALIDATE_CATALOG_ON_STARTUP (defaults to true)

use anyhow::{bail, Context, Result};
use farmnex_lingua::config::Config;
use farmnex_lingua::i18n::{CatalogValidator, Language, TemplateParams};
use farmnex_lingua::service::LanguageService;
use serde::Serialize;
use std::io::{IsTerminal, Read};
use tracing::{debug, info, warn};

/// Parsed command line
#[derive(Debug, Default, PartialEq, Eq)]
struct Args {
    message: Option<String>,
    advice: Option<String>,
    template: Option<String>,
    params: TemplateParams,
}

/// JSON printed to stdout
#[derive(Debug, Serialize)]
struct Reply {
    language: Language,
    name: &'static str,
    native_name: &'static str,
    detected: bool,
    greeting: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    response: Option<String>,
}

fn parse_args<I>(args: I) -> Result<Args>
where
    I: IntoIterator<Item = String>,
{
    let mut parsed = Args::default();
    let mut words = Vec::new();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--advice" => {
                parsed.advice = Some(args.next().context("--advice needs a value")?);
            }
            "--template" => {
                parsed.template = Some(args.next().context("--template needs a value")?);
            }
            "--param" => {
                let pair = args.next().context("--param needs a key=value pair")?;
                let Some((key, value)) = pair.split_once('=') else {
                    bail!("Invalid --param '{}'. Expected key=value", pair);
                };
                parsed.params.insert(key, value);
            }
            _ => words.push(arg),
        }
    }

    if !words.is_empty() {
        parsed.message = Some(words.join(" "));
    }

    Ok(parsed)
}

/// Message from the command line, or from `input` when none was given.
fn resolve_message<R: Read>(
    message: Option<String>,
    mut input: R,
    input_is_terminal: bool,
) -> Result<String> {
    if let Some(message) = message {
        return Ok(message);
    }
    if input_is_terminal {
        bail!("No message given. Pass message words or pipe text on stdin");
    }

    let mut buffer = String::new();
    input
        .read_to_string(&mut buffer)
        .context("Failed to read message from stdin")?;
    Ok(buffer)
}

fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    let config = Config::from_env()?;

    // Initialize logging (stderr, so stdout stays machine-readable)
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(config.log_directive.parse()?),
        )
        .init();

    if config.validate_catalog_on_startup {
        let report = CatalogValidator::validate_all();
        for warning in &report.warnings {
            warn!("Catalog warning: {}", warning);
        }
        if report.has_errors() {
            bail!("Catalog validation failed: {:?}", report.errors);
        }
        debug!("Catalog validation passed");
    }

    let args = parse_args(std::env::args().skip(1))?;
    let stdin = std::io::stdin();
    let stdin_is_terminal = stdin.is_terminal();
    let message = resolve_message(args.message.clone(), stdin.lock(), stdin_is_terminal)?;

    let service = LanguageService::new();
    let (language, detected) = match config.force_language {
        Some(language) => (language, false),
        None => (service.detect_language(&message), true),
    };
    info!(
        "Answering in {} ({})",
        language.name(),
        if detected { "detected" } else { "forced" }
    );

    let response = match (&args.template, &args.advice) {
        (Some(template), _) => Some(service.format_response(template, &args.params, language)),
        (None, Some(advice)) => Some(service.create_multilingual_response(advice, language)),
        (None, None) => None,
    };

    let reply = Reply {
        language,
        name: language.name(),
        native_name: language.native_name(),
        detected,
        greeting: service.get_greeting(language),
        response,
    };

    println!(
        "{}",
        serde_json::to_string_pretty(&reply).context("Failed to serialize reply")?
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_message_words_joined() {
        let parsed = parse_args(args(&["how", "is", "the", "weather"])).unwrap();
        assert_eq!(parsed.message.as_deref(), Some("how is the weather"));
    }

    #[test]
    fn test_parse_no_message() {
        let parsed = parse_args(args(&[])).unwrap();
        assert_eq!(parsed, Args::default());
    }

    #[test]
    fn test_parse_template_and_params() {
        let parsed = parse_args(args(&[
            "--template",
            "crop_advice",
            "--param",
            "crop=tea",
            "--param",
            "advice=water daily",
            "hello",
        ]))
        .unwrap();

        assert_eq!(parsed.template.as_deref(), Some("crop_advice"));
        assert_eq!(parsed.params.get("advice"), Some("water daily"));
        assert_eq!(parsed.message.as_deref(), Some("hello"));
    }

    #[test]
    fn test_parse_param_keeps_later_equals() {
        let parsed = parse_args(args(&["--param", "advice=a=b"])).unwrap();
        assert_eq!(parsed.params.get("advice"), Some("a=b"));
    }

    #[test]
    fn test_parse_invalid_param() {
        let err = parse_args(args(&["--param", "crop"])).unwrap_err();
        assert!(err.to_string().contains("key=value"));
    }

    #[test]
    fn test_parse_missing_value() {
        assert!(parse_args(args(&["--advice"])).is_err());
        assert!(parse_args(args(&["--template"])).is_err());
    }

    #[test]
    fn test_message_words_skip_stdin() {
        let message =
            resolve_message(Some("hello".to_string()), "ignored".as_bytes(), true).unwrap();
        assert_eq!(message, "hello");
    }

    #[test]
    fn test_piped_stdin_is_read() {
        let message = resolve_message(None, "ආයුබෝවන්\n".as_bytes(), false).unwrap();
        assert_eq!(message, "ආයුබෝවන්\n");
    }

    #[test]
    fn test_terminal_stdin_without_message_is_error() {
        let err = resolve_message(None, "never read".as_bytes(), true).unwrap_err();
        assert!(err.to_string().contains("No message given"));
    }

    #[test]
    fn test_reply_serialization() {
        let reply = Reply {
            language: Language::Tamil,
            name: "Tamil",
            native_name: "தமிழ்",
            detected: true,
            greeting: "வணக்கம்!".to_string(),
            response: None,
        };
        let json = serde_json::to_value(&reply).unwrap();

        assert_eq!(json["language"], "ta");
        assert_eq!(json["detected"], true);
        assert!(json.get("response").is_none());
    }
}
