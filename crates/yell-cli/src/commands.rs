use crate::args::Cli;
use crate::input::{self, Document};
use crate::types::{ColorMode, OutputPath};
use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use std::cell::RefCell;
use std::io::{self, Stdout};
use std::panic::Location;
use yell::{BoxOptions, Frame, FrameSource, PrintOptions, Settings, Yell};

/// Columns taken by the tracer and one flup at the default level.
const TRACER_ALLOWANCE: usize = 5;
const MIN_WIDTH: usize = 20;

/// Presents the document being rendered as the caller, so headers name the
/// input file instead of this module.
#[derive(Debug, Default)]
pub struct DocumentFrames {
    current: RefCell<Vec<Frame>>,
}

impl DocumentFrames {
    /// `position` is the document's 1-based place on the command line.
    pub fn point_at(&self, source: &str, position: u32) {
        *self.current.borrow_mut() = vec![
            Frame::new(Some("yell::render"), source, Some(position)),
            Frame::new(Some("yell::main"), "main.rs", None),
        ];
    }
}

impl FrameSource for DocumentFrames {
    fn frames(&self, _origin: &Location<'static>) -> Vec<Frame> {
        self.current.borrow().clone()
    }
}

pub fn run(cli: Cli) -> Result<()> {
    init_logging(&cli);

    let settings = load_settings(&cli)?;
    let documents = input::load_documents(&cli.files)?;
    log::debug!("rendering {} document(s) as {}", documents.len(), cli.output);

    let registry = settings.registry();
    let mut yell = Yell::with_parts(settings, registry, io::stdout(), DocumentFrames::default());
    if cli.color == ColorMode::Always {
        yell::enable_color();
    }

    for (position, doc) in (1u32..).zip(&documents) {
        yell.frame_source().point_at(&doc.source, position);
        render(&mut yell, &cli, doc).with_context(|| format!("Failed to render {}", doc.source))?;
    }
    Ok(())
}

fn render(yell: &mut Yell<Stdout, DocumentFrames>, cli: &Cli, doc: &Document) -> yell::Result<()> {
    let values = std::slice::from_ref(&doc.value);
    match (cli.output, cli.output.severity()) {
        (_, Some(severity)) => yell.report(severity, values, &BoxOptions::default()),
        (OutputPath::Label, None) => yell.label(&doc.value.to_string(), 0),
        _ => {
            let options = PrintOptions {
                title: cli.title.clone(),
                ..PrintOptions::default()
            };
            yell.print_with(values, &options)
        }
    }
}

fn init_logging(cli: &Cli) {
    let env = env_logger::Env::default().default_filter_or(cli.log_level.to_string());
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}

fn load_settings(cli: &Cli) -> Result<Settings> {
    let mut settings = match &cli.config {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            Settings::load_from(path)
                .with_context(|| format!("Failed to load {}", path.display()))?
        }
        None => Settings::discover().context("Failed to load settings")?,
    };

    if let Some(indent) = cli.indent {
        settings.indent = indent;
    }
    settings.width = match cli.width {
        Some(width) => width,
        None => clamp_to_terminal(settings.width, settings.indent),
    };
    if cli.truncate {
        settings.truncate = true;
    }
    if cli.no_wrap {
        settings.wrap = false;
        settings.truncate = false;
    }
    if cli.no_timestamp {
        settings.show_timestamp = false;
    }

    match cli.color {
        ColorMode::Always => settings.use_theme = true,
        ColorMode::Never => settings.use_theme = false,
        ColorMode::Auto => {
            if !io::stdout().is_terminal() {
                settings.use_theme = false;
            }
        }
    }

    settings.validate()?;
    Ok(settings)
}

fn clamp_to_terminal(width: usize, indent: usize) -> usize {
    if !io::stdout().is_terminal() {
        return width;
    }
    match terminal_size::terminal_size() {
        Some((terminal_size::Width(cols), _)) => {
            let available = usize::from(cols).saturating_sub(indent + TRACER_ALLOWANCE);
            width.min(available.max(MIN_WIDTH))
        }
        None => width,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_frames_name_the_input() {
        let frames = DocumentFrames::default();
        frames.point_at("data/orders.json", 2);

        let stack = frames.frames(Location::caller());
        assert_eq!(stack[0].file_stem(), "orders");
        assert_eq!(stack[0].line, Some(2));
        assert_eq!(stack[0].chain_label(), "render()");
        assert_eq!(stack[1].chain_label(), "main()");
    }

    #[test]
    fn test_severity_paths() {
        assert_eq!(OutputPath::Info.severity(), Some(yell::Severity::Info));
        assert_eq!(OutputPath::Print.severity(), None);
        assert_eq!(OutputPath::Label.severity(), None);
    }
}
