//! Terminal front end for the capture flow.

use std::path::PathBuf;
use std::process::ExitCode;

use fl_core::{CaptureState, ImageOrigin};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use crate::bootstrap::AppRuntime;
use crate::presenter::render_result;

const HELP: &str = "\
Commands:
  camera          take a photo with the configured camera command
  library [PATH]  analyze an image file (no path: cancel)
  retry           leave the error state
  result          show the last analysis
  state           show the capture state
  quit            exit
";

#[derive(Debug, PartialEq, Eq)]
enum ShellCommand {
    Camera,
    Library(Option<PathBuf>),
    Retry,
    Result,
    State,
    Help,
    Quit,
}

impl ShellCommand {
    fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        let (word, rest) = line
            .split_once(char::is_whitespace)
            .map(|(w, r)| (w, r.trim()))
            .unwrap_or((line, ""));

        match word {
            "camera" => Ok(Self::Camera),
            "library" => Ok(Self::Library(
                (!rest.is_empty()).then(|| PathBuf::from(rest)),
            )),
            "retry" => Ok(Self::Retry),
            "result" => Ok(Self::Result),
            "state" => Ok(Self::State),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            other => Err(format!("unknown command: {other} (try `help`)")),
        }
    }
}

/// One library capture of `image`; the result is printed by the event port.
pub async fn analyze_once(runtime: &AppRuntime, image: PathBuf) -> anyhow::Result<ExitCode> {
    runtime.selection.set(Some(image));
    let state = runtime
        .orchestrator
        .request_capture(ImageOrigin::Library)
        .await?;

    Ok(match state {
        CaptureState::Idle if runtime.show_result.execute().await.is_some() => ExitCode::SUCCESS,
        _ => ExitCode::FAILURE,
    })
}

pub async fn run_interactive(runtime: &AppRuntime) -> anyhow::Result<ExitCode> {
    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    stdout.write_all(HELP.as_bytes()).await?;
    loop {
        stdout.write_all(b"> ").await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        let command = match ShellCommand::parse(&line) {
            Ok(command) => command,
            Err(message) => {
                stdout.write_all(format!("{message}\n").as_bytes()).await?;
                continue;
            }
        };

        let outcome = match command {
            ShellCommand::Camera => runtime.orchestrator.request_capture(ImageOrigin::Camera).await,
            ShellCommand::Library(path) => {
                runtime.selection.set(path);
                runtime
                    .orchestrator
                    .request_capture(ImageOrigin::Library)
                    .await
            }
            ShellCommand::Retry => runtime.orchestrator.retry().await,
            ShellCommand::Result => {
                let text = match runtime.show_result.execute().await {
                    Some(view) => render_result(&view),
                    None => "No analysis yet.\n".to_string(),
                };
                stdout.write_all(text.as_bytes()).await?;
                continue;
            }
            ShellCommand::State => {
                let state = runtime.orchestrator.state().await;
                stdout.write_all(format!("{}\n", describe(&state)).as_bytes()).await?;
                continue;
            }
            ShellCommand::Help => {
                stdout.write_all(HELP.as_bytes()).await?;
                continue;
            }
            ShellCommand::Quit => break,
        };

        if let Err(e) = outcome {
            stdout.write_all(format!("{e}\n").as_bytes()).await?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn describe(state: &CaptureState) -> String {
    match state {
        CaptureState::Idle => "idle".to_string(),
        CaptureState::Analyzing => "analyzing".to_string(),
        CaptureState::Error { message } => format!("error: {message}"),
    }
}
