//! detect the operating system of a tokenized User-Agent

use clap::Args;
use serde::Serialize;
use std::{
    fs::File,
    io::{self, BufReader, Read, Write},
    path::PathBuf,
};
use uaos::{
    Browser, Engine, OsDetector, OsInfo, Section,
    error::{BoxError, ErrorContext as _},
};

#[derive(Debug, Args)]
/// detect the operating system of a tokenized User-Agent
///
/// The input is a json array of sections, e.g.
/// `[{"name": "Mozilla", "version": "5.0", "comment": ["X11", "Linux x86_64"]}]`
pub struct CliCommandDetect {
    /// path to the json sections, stdin is used if absent or '-'
    pub(crate) input: Option<PathBuf>,

    #[arg(long, short = 'e')]
    /// the rendering engine of the browser (Gecko, AppleWebKit or Trident)
    pub(crate) engine: Option<Engine>,

    #[arg(long, short = 'b', default_value = "")]
    /// the name of the browser, as detected upfront
    pub(crate) browser: String,

    #[arg(long, short = 'c')]
    /// mark the User-Agent as a known automated crawler
    pub(crate) crawler: bool,

    #[arg(long, short = 'p')]
    /// pretty print the json output
    pub(crate) pretty: bool,
}

#[derive(Debug, Serialize)]
struct DetectOutput<'a> {
    #[serde(flatten)]
    info: &'a OsInfo,
    browser: &'a str,
}

/// run the uaos detect command
pub fn run(cfg: CliCommandDetect) -> Result<(), BoxError> {
    let stdout = io::stdout();
    match cfg.input.as_deref() {
        Some(path) if path.as_os_str() != "-" => {
            let file = File::open(path)
                .with_context(|| format!("open sections file: {}", path.display()))?;
            detect(&cfg, BufReader::new(file), stdout.lock())
        }
        _ => detect(&cfg, io::stdin().lock(), stdout.lock()),
    }
}

fn detect(cfg: &CliCommandDetect, input: impl Read, mut output: impl Write) -> Result<(), BoxError> {
    let sections: Vec<Section> =
        serde_json::from_reader(input).context("decode json sections")?;
    tracing::debug!(sections = sections.len(), "sections decoded");

    let mut browser = Browser::new(
        cfg.browser.as_str(),
        "",
        cfg.engine.unwrap_or_default(),
    );
    let info = OsDetector::new()
        .with_crawler(cfg.crawler)
        .detect(&sections, &mut browser);
    tracing::info!(%info, browser = %browser.name, "os detected");

    let out = DetectOutput {
        info: &info,
        browser: &browser.name,
    };
    let result = if cfg.pretty {
        serde_json::to_writer_pretty(&mut output, &out)
    } else {
        serde_json::to_writer(&mut output, &out)
    };
    result.context("encode json output")?;
    writeln!(output).context("write output")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg(engine: Option<Engine>, browser: &str) -> CliCommandDetect {
        CliCommandDetect {
            input: None,
            engine,
            browser: browser.to_owned(),
            crawler: false,
            pretty: false,
        }
    }

    #[test]
    fn test_detect_json_pipeline() {
        let input = br#"[
            {"name": "Mozilla", "version": "5.0", "comment": ["Linux", "U", "Android 2.3.5", "en-us"]},
            {"name": "AppleWebKit", "version": "533.1", "comment": ["KHTML, like Gecko"]},
            {"name": "Safari", "version": "533.1"}
        ]"#;
        let mut output = Vec::new();
        detect(
            &cfg(Some(Engine::AppleWebKit), "Safari"),
            &input[..],
            &mut output,
        )
        .unwrap();

        let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "platform": "Linux",
                "os": "Android 2.3.5",
                "localization": "en-us",
                "mobile": true,
                "undecided": false,
                "browser": "Android",
            })
        );
    }

    #[test]
    fn test_detect_undecided_without_engine() {
        let input = br#"[{"name": "Mozilla", "version": "5.0", "comment": ["compatible", "bingbot/2.0"]}]"#;
        let mut output = Vec::new();
        detect(&cfg(None, ""), &input[..], &mut output).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(value["undecided"], serde_json::json!(true));
    }

    #[test]
    fn test_detect_invalid_json() {
        let mut output = Vec::new();
        let err = detect(&cfg(None, ""), &b"{"[..], &mut output).unwrap_err();
        assert!(err.to_string().starts_with("decode json sections"));
        assert!(output.is_empty());
    }
}
