use crate::config::Settings;
use crate::error::Result;
use crate::severity::Severity;
use std::io::{self, Stdout, Write};
use std::panic::Location;
use yell_engine::{
    Align, BoxRenderer, CallerRegistry, CustomClass, FrameSource, LineFormatter, NativeFrames,
    StackInspector, TreeRenderer, call_chain,
};
use yell_style::{ArrowStyle, Direction, StyledText, glyphs};
use yell_types::{CallerState, Value};

/// Boxes never get wider than this unless a width is passed explicitly.
pub const MAX_BOX_WIDTH: usize = 75;

/// Per-call options for the boxed paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoxOptions {
    /// Box width override.
    pub width: Option<usize>,
    pub align: Align,
    pub use_call_chain: bool,
    pub show_timestamp: bool,
}

impl Default for BoxOptions {
    fn default() -> Self {
        Self {
            width: None,
            align: Align::Left,
            use_call_chain: true,
            show_timestamp: true,
        }
    }
}

impl BoxOptions {
    pub fn width(width: usize) -> Self {
        Self {
            width: Some(width),
            ..Self::default()
        }
    }
}

/// Per-call options for [`Yell::print_with`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintOptions {
    /// Repeated-call output: no header, lines prefixed with loop markers.
    pub is_loop: bool,
    /// Loop marker depth. Zero uses the caller's level.
    pub loop_lvl: usize,
    /// Replaces the trace in a collapsed header.
    pub title: Option<String>,
    pub show_timestamp: bool,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            is_loop: false,
            loop_lvl: 0,
            title: None,
            show_timestamp: true,
        }
    }
}

impl PrintOptions {
    pub fn looping(loop_lvl: usize) -> Self {
        Self {
            is_loop: true,
            loop_lvl,
            ..Self::default()
        }
    }

    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }
}

/// Per-call options for [`Yell::label_with`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelOptions {
    /// Replaces the `file.function() : count` summary.
    pub func_trace: Option<String>,
    pub show_timestamp: bool,
}

impl Default for LabelOptions {
    fn default() -> Self {
        Self {
            func_trace: None,
            show_timestamp: true,
        }
    }
}

impl LabelOptions {
    pub fn traced(func_trace: impl Into<String>) -> Self {
        Self {
            func_trace: Some(func_trace.into()),
            ..Self::default()
        }
    }
}

/// The console facade.
///
/// Every output method resolves its call site first (through `#[track_caller]`
/// and the frame source), updates that caller's state in the registry and
/// then renders. Calls from a disabled caller write nothing.
///
/// ```no_run
/// use yell::{Settings, Yell, values};
///
/// let settings = Settings::default();
/// let registry = settings.registry();
/// let mut yell = Yell::new(settings, registry);
/// yell.info(&values!["connected", 42])?;
/// # Ok::<(), yell::Error>(())
/// ```
pub struct Yell<W = Stdout, S = NativeFrames> {
    settings: Settings,
    custom_classes: Vec<CustomClass>,
    registry: CallerRegistry,
    inspector: StackInspector<S>,
    sink: W,
    /// Identity of the caller behind the previous print, for header collapsing.
    last_caller: Option<String>,
}

impl Yell {
    /// A facade writing to stdout with native stack inspection.
    pub fn new(settings: Settings, registry: CallerRegistry) -> Self {
        Self::with_parts(settings, registry, io::stdout(), NativeFrames)
    }

    /// A facade configured from the first `yell.toml` found.
    pub fn from_config() -> Result<Self> {
        let settings = Settings::discover()?;
        settings.validate()?;
        let registry = settings.registry();
        Ok(Self::new(settings, registry))
    }
}

impl<W: Write, S: FrameSource> Yell<W, S> {
    pub fn with_parts(settings: Settings, registry: CallerRegistry, sink: W, frames: S) -> Self {
        if !settings.use_theme {
            yell_style::disable_color();
        }
        let custom_classes = settings.custom_classes();
        Self {
            settings,
            custom_classes,
            registry,
            inspector: StackInspector::new(frames),
            sink,
            last_caller: None,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn registry(&self) -> &CallerRegistry {
        &self.registry
    }

    /// Late registrations only affect identities that have not printed yet.
    pub fn registry_mut(&mut self) -> &mut CallerRegistry {
        &mut self.registry
    }

    pub fn sink(&self) -> &W {
        &self.sink
    }

    pub fn into_sink(self) -> W {
        self.sink
    }

    pub fn frame_source(&self) -> &S {
        self.inspector.source()
    }

    pub fn last_caller(&self) -> Option<&str> {
        self.last_caller.as_deref()
    }

    pub fn custom_classes(&self) -> &[CustomClass] {
        &self.custom_classes
    }

    /// Bind a color to a custom type. Earlier bindings win.
    pub fn add_custom_class(&mut self, class: CustomClass) {
        self.custom_classes.push(class);
    }

    #[track_caller]
    pub fn success(&mut self, values: &[Value]) -> Result<()> {
        self.report_at(Location::caller(), Severity::Success, values, &BoxOptions::default())
    }

    #[track_caller]
    pub fn warning(&mut self, values: &[Value]) -> Result<()> {
        self.report_at(Location::caller(), Severity::Warning, values, &BoxOptions::default())
    }

    #[track_caller]
    pub fn error(&mut self, values: &[Value]) -> Result<()> {
        self.report_at(Location::caller(), Severity::Error, values, &BoxOptions::default())
    }

    #[track_caller]
    pub fn failure(&mut self, values: &[Value]) -> Result<()> {
        self.report_at(Location::caller(), Severity::Failure, values, &BoxOptions::default())
    }

    #[track_caller]
    pub fn info(&mut self, values: &[Value]) -> Result<()> {
        self.report_at(Location::caller(), Severity::Info, values, &BoxOptions::default())
    }

    #[track_caller]
    pub fn debug(&mut self, values: &[Value]) -> Result<()> {
        self.report_at(Location::caller(), Severity::Debug, values, &BoxOptions::default())
    }

    /// Boxed output with explicit options.
    #[track_caller]
    pub fn report(
        &mut self,
        severity: Severity,
        values: &[Value],
        options: &BoxOptions,
    ) -> Result<()> {
        self.report_at(Location::caller(), severity, values, options)
    }

    /// `=>  -[ text ]-  <=  file.function() : count` at nesting level `lvl`.
    #[track_caller]
    pub fn label(&mut self, text: &str, lvl: usize) -> Result<()> {
        self.label_at(Location::caller(), text, lvl, &LabelOptions::default())
    }

    #[track_caller]
    pub fn label_with(&mut self, text: &str, lvl: usize, options: &LabelOptions) -> Result<()> {
        self.label_at(Location::caller(), text, lvl, options)
    }

    /// Print values under a caller header.
    #[track_caller]
    pub fn print(&mut self, values: &[Value]) -> Result<()> {
        self.print_at(Location::caller(), values, &PrintOptions::default())
    }

    #[track_caller]
    pub fn print_with(&mut self, values: &[Value], options: &PrintOptions) -> Result<()> {
        self.print_at(Location::caller(), values, options)
    }

    /// Resolve the call site. `None` means the caller is disabled.
    fn resolve(&mut self, origin: &'static Location<'static>) -> Result<Option<CallerState>> {
        let state = self.inspector.resolve(&mut self.registry, origin)?;
        if !state.enabled {
            log::trace!("caller '{}' is disabled, skipping output", state.identity);
            return Ok(None);
        }
        Ok(Some(state.clone()))
    }

    fn formatter(&self) -> LineFormatter<'_> {
        LineFormatter::new(
            &self.settings.theme,
            self.settings.width,
            self.settings.indent,
            self.settings.line_mode(),
        )
    }

    fn tree(&self, width: usize) -> TreeRenderer<'_> {
        TreeRenderer::new(&self.settings.theme, self.settings.indent, width)
            .with_custom_classes(&self.custom_classes)
    }

    fn report_at(
        &mut self,
        origin: &'static Location<'static>,
        severity: Severity,
        values: &[Value],
        options: &BoxOptions,
    ) -> Result<()> {
        let Some(caller) = self.resolve(origin)? else {
            return Ok(());
        };

        let width = options
            .width
            .unwrap_or_else(|| self.settings.width.min(MAX_BOX_WIDTH));
        let color = severity.color(&self.settings.theme);
        let formatter = self.formatter();

        let rendered = self.tree(width).render(values, false, 0);
        let fit = formatter.conform_width(rendered, width);
        let boxed = BoxRenderer::new(width, severity.corners(), color)
            .with_align(options.align)
            .render(&fit, &formatter, caller.level);

        let mut lines = Vec::with_capacity(boxed.len() + 1);
        if options.use_call_chain {
            let label = StyledText::new(severity.label(), color);
            let header = call_chain(&label, &caller.last_stack, caller.last_line);
            lines.extend(formatter.shape(&header, caller.level));
        }
        lines.extend(boxed);

        self.emit(&lines, "\n", options.show_timestamp)
    }

    fn label_at(
        &mut self,
        origin: &'static Location<'static>,
        text: &str,
        lvl: usize,
        options: &LabelOptions,
    ) -> Result<()> {
        let Some(caller) = self.resolve(origin)? else {
            return Ok(());
        };

        let theme = &self.settings.theme;
        let trace = match &options.func_trace {
            Some(trace) => StyledText::new(trace.as_str(), theme.secondary).render(),
            None => format!(
                " {}.{}() : {}",
                StyledText::new(caller.identity.as_str(), theme.primary),
                StyledText::new(caller.last_function.clone().unwrap_or_default(), theme.secondary),
                StyledText::new(caller.last_function_calls().to_string(), theme.failure),
            ),
        };
        let line = format!(
            "{}  -[ {} ]-  {} {}",
            glyphs::arrow(Direction::Right, ArrowStyle::Arrow, theme.arrow),
            StyledText::new(text, theme.label),
            glyphs::arrow(Direction::Left, ArrowStyle::Arrow, theme.arrow),
            trace
        );
        let shaped = self.formatter().shape(&line, lvl);

        self.emit(&shaped, "\n", options.show_timestamp)
    }

    fn print_at(
        &mut self,
        origin: &'static Location<'static>,
        values: &[Value],
        options: &PrintOptions,
    ) -> Result<()> {
        let Some(caller) = self.resolve(origin)? else {
            return Ok(());
        };

        let theme = &self.settings.theme;
        let formatter = self.formatter();
        let chunk = glyphs::chunk(theme.chunk);
        let function = StyledText::new(caller.last_function.clone().unwrap_or_default(), theme.tertiary);
        let count = StyledText::new(caller.last_function_calls().to_string(), theme.failure);

        let repeated = self.last_caller.as_deref() == Some(caller.identity.as_str());
        let (header, terminator) = if repeated {
            let trace = match &options.title {
                Some(title) => title.clone(),
                None => format!(
                    " {}.{}() : {}",
                    StyledText::new(caller.identity.as_str(), theme.primary),
                    function,
                    count
                ),
            };
            (format!("  {chunk} {trace} {chunk}"), "\n".to_string())
        } else {
            let header = format!(
                "{chunk} {}  {}  {}(): {} {chunk}",
                StyledText::new(caller.display_file_name(), theme.label),
                glyphs::arrow(Direction::Right, ArrowStyle::Pointer, theme.arrow),
                function,
                count
            );
            let rule = glyphs::div(self.settings.width + self.settings.indent, theme.tertiary);
            (header, format!("\n{rule}\n"))
        };

        let values: Vec<Value> = values.iter().cloned().flat_map(Value::split_lines).collect();
        let loop_level = if options.loop_lvl > 0 {
            options.loop_lvl
        } else {
            caller.level
        };
        let rendered = self
            .tree(self.settings.width)
            .render(&values, options.is_loop, loop_level);
        let fit = formatter.conform_width(rendered, self.settings.width);

        let mut lines = Vec::with_capacity(fit.len() + 1);
        if !options.is_loop {
            lines.extend(formatter.shape(&header, caller.level));
        }
        lines.extend(fit.iter().flat_map(|line| formatter.shape(line, caller.level)));

        self.emit(&lines, &terminator, options.show_timestamp)?;
        self.last_caller = Some(caller.identity);
        Ok(())
    }

    /// One write per call: optional timestamp line, the lines, the terminator.
    fn emit(&mut self, lines: &[String], terminator: &str, show_timestamp: bool) -> Result<()> {
        if self.settings.all_quiet {
            return Ok(());
        }

        let mut out = String::new();
        if show_timestamp && self.settings.show_timestamp {
            out.push_str(&glyphs::timestamp().render());
            out.push('\n');
        }
        out.push_str(&lines.join("\n"));
        out.push_str(terminator);

        self.sink.write_all(out.as_bytes())?;
        self.sink.flush()?;
        Ok(())
    }
}
