use crate::domain::{DiagramOutcome, RenderedResponse, ResponseBody};
use crate::ports::ResponseDisplay;

/// Writes rendered responses to the terminal.
///
/// Answers and diagram links go to stdout; failures and warnings go to stderr.
#[derive(Debug, Clone, Default)]
pub struct TerminalDisplay;

impl TerminalDisplay {
    pub fn new() -> Self {
        Self
    }
}

/// Text for one output stream.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct DisplayText {
    pub stdout: Vec<String>,
    pub stderr: Vec<String>,
}

pub(crate) fn format_response(response: &RenderedResponse) -> DisplayText {
    let mut text = DisplayText::default();

    match &response.body {
        ResponseBody::Markdown(markdown) => text.stdout.push(markdown.clone()),
        ResponseBody::Failure(err) => text.stderr.push(format!("❌ {}", err)),
    }

    match &response.diagram {
        Some(DiagramOutcome::Image { url, caption }) => {
            text.stdout.push(String::new());
            text.stdout.push(format!("🖼  {}: {}", caption, url));
        }
        Some(DiagramOutcome::Warning(message)) => text.stderr.push(format!("⚠️  {}", message)),
        None => {}
    }

    text
}

impl ResponseDisplay for TerminalDisplay {
    fn show(&self, response: &RenderedResponse) {
        let text = format_response(response);
        for line in text.stdout {
            println!("{}", line);
        }
        for line in text.stderr {
            eprintln!("{}", line);
        }
    }

    fn show_prompt(&self, prompt: &str) {
        println!("=== DRY RUN ===");
        println!("{}", prompt);
    }
}
