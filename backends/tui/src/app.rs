use catsearch::{Catalog, FilterOutcome, MemoryInput, MemoryResults, SearchWidget, WidgetConfig};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::{debug, info};

use crate::{
    error::TuiError,
    renderer::{RenderFrame, Renderer},
    terminal::Terminal,
};

/// Widget bound to the terminal's in-memory prompt and list.
pub type TerminalSearchWidget = SearchWidget<MemoryInput, MemoryResults>;

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep reading keys.
    Continue,
    /// Leave the event loop.
    Quit,
}

/// Interactive search prompt drawn in the terminal.
#[derive(Debug)]
pub struct TuiApp {
    terminal: Terminal,
    renderer: Renderer,
    widget: TerminalSearchWidget,
}

impl TuiApp {
    /// Draws the current prompt and list.
    ///
    /// # Errors
    ///
    /// Returns an error when the terminal cannot be written to.
    pub fn render(&mut self) -> Result<(), TuiError> {
        let frame = self.render_to_frame();
        self.terminal.render(&frame)
    }

    /// Builds the current frame without drawing it.
    #[must_use]
    pub fn render_to_frame(&self) -> RenderFrame {
        self.renderer.render(self.widget.input(), self.widget.results())
    }

    /// Applies one key press to the prompt and refilters when the text changed.
    ///
    /// Printable characters are appended, `Backspace` deletes, `Ctrl-U` clears
    /// the prompt, `Esc` and `Ctrl-C` quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> Control {
        if key.kind == KeyEventKind::Release {
            return Control::Continue;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let edited = match key.code {
            KeyCode::Esc => return Control::Quit,
            KeyCode::Char('c') if ctrl => return Control::Quit,
            KeyCode::Char('u') if ctrl => {
                self.widget.input_mut().clear();
                true
            }
            KeyCode::Char(ch) if !ctrl => {
                self.widget.input_mut().push(ch);
                true
            }
            KeyCode::Backspace => self.widget.input_mut().pop().is_some(),
            _ => false,
        };

        if edited {
            let outcome = self.refilter();
            debug!(
                query = self.widget.input().value(),
                visible = outcome.visible_count(),
                "prompt changed"
            );
        }
        Control::Continue
    }

    fn refilter(&mut self) -> FilterOutcome {
        let Ok(outcome) = self.widget.handle_search_change();
        outcome
    }

    /// Runs the interactive loop until the user quits.
    ///
    /// # Errors
    ///
    /// Returns an error when terminal events cannot be read or drawn.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.sync_width()?;
        self.render()?;
        loop {
            match event::read()? {
                Event::Key(key) => {
                    if self.handle_key(key) == Control::Quit {
                        break;
                    }
                }
                Event::Resize(..) => self.sync_width()?,
                _ => continue,
            }
            self.render()?;
        }
        info!(query = self.widget.input().value(), "search prompt closed");
        Ok(())
    }

    fn sync_width(&mut self) -> Result<(), TuiError> {
        let (columns, _) = self.terminal.size()?;
        self.renderer.set_width(usize::from(columns));
        Ok(())
    }

    /// Provides immutable access to the widget.
    #[must_use]
    pub const fn widget(&self) -> &TerminalSearchWidget {
        &self.widget
    }

    /// Provides immutable access to the terminal handle.
    #[must_use]
    pub const fn terminal(&self) -> &Terminal {
        &self.terminal
    }
}

/// Builder for [`TuiApp`] instances.
#[derive(Debug, Default)]
pub struct TuiAppBuilder {
    terminal: Option<Terminal>,
    config: WidgetConfig,
    catalog: Option<Catalog>,
    query: String,
}

impl TuiAppBuilder {
    /// Creates a new builder with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the terminal handle used by the application.
    #[must_use]
    pub fn with_terminal(mut self, terminal: Terminal) -> Self {
        self.terminal = Some(terminal);
        self
    }

    /// Replaces the widget configuration.
    #[must_use]
    pub fn with_config(mut self, config: WidgetConfig) -> Self {
        self.config = config;
        self
    }

    /// Filters a custom catalog instead of the built-in one.
    #[must_use]
    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Starts the prompt with `query` already typed.
    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Consumes the builder and produces a [`TuiApp`].
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be initialised.
    pub fn build(self) -> Result<TuiApp, TuiError> {
        let terminal = match self.terminal {
            Some(terminal) => terminal,
            None => Terminal::stdout()?,
        };

        let Ok(widget) = SearchWidget::with_catalog(
            self.config,
            self.catalog.unwrap_or_default(),
            MemoryInput::new(self.query),
            MemoryResults::new(),
        );
        let mut app = TuiApp {
            terminal,
            renderer: Renderer::default(),
            widget,
        };
        app.refilter();
        Ok(app)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catsearch::CategoryRecord;

    fn app() -> TuiApp {
        TuiAppBuilder::new()
            .with_terminal(Terminal::buffered())
            .build()
            .expect("building app should succeed")
    }

    fn press(app: &mut TuiApp, code: KeyCode) -> Control {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn snapshot(app: &TuiApp) -> String {
        String::from_utf8(app.terminal().snapshot().expect("buffered terminal").to_vec())
            .expect("snapshot should be valid utf8")
    }

    #[test]
    fn render_into_buffer() {
        let mut app = app();
        app.render().expect("rendering should succeed");
        let snapshot = snapshot(&app);
        assert!(snapshot.starts_with("Search: \n"));
        assert!(snapshot.contains("  loc Locations"));
        assert!(snapshot.ends_with("7 of 7 categories"));
    }

    #[test]
    fn typing_filters_the_list() {
        let mut app = app();
        for ch in "loc".chars() {
            assert_eq!(press(&mut app, KeyCode::Char(ch)), Control::Continue);
        }
        app.render().unwrap();
        assert_eq!(
            snapshot(&app),
            "Search: loc\n\n  loc Locations\n\n1 of 7 categories"
        );
    }

    #[test]
    fn backspace_widens_the_match() {
        let mut app = app();
        for ch in "Rev".chars() {
            press(&mut app, KeyCode::Char(ch));
        }
        assert_eq!(app.widget().results().visible_keys().collect::<Vec<_>>(), ["rev"]);
        press(&mut app, KeyCode::Backspace);
        assert_eq!(
            app.widget().results().visible_keys().collect::<Vec<_>>(),
            ["res", "rev"]
        );
    }

    #[test]
    fn backspace_on_empty_prompt_is_harmless() {
        let mut app = app();
        assert_eq!(press(&mut app, KeyCode::Backspace), Control::Continue);
        assert_eq!(app.widget().input().value(), "");
    }

    #[test]
    fn ctrl_u_clears_the_prompt() {
        let mut app = TuiAppBuilder::new()
            .with_terminal(Terminal::buffered())
            .with_query("xyz")
            .build()
            .unwrap();
        assert_eq!(app.widget().results().visible_keys().count(), 0);

        app.handle_key(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
        assert_eq!(app.widget().input().value(), "");
        assert_eq!(app.widget().results().visible_keys().count(), 7);
    }

    #[test]
    fn escape_and_ctrl_c_quit() {
        let mut app = app();
        assert_eq!(press(&mut app, KeyCode::Esc), Control::Quit);
        assert_eq!(
            app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Control::Quit
        );
    }

    #[test]
    fn key_releases_are_ignored() {
        let mut app = app();
        let mut release = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        app.handle_key(release);
        assert_eq!(app.widget().input().value(), "");
    }

    #[test]
    fn custom_catalog_and_initial_query() {
        let catalog = Catalog::new([
            CategoryRecord::new("a", "Apples", "/apples", "Apple"),
            CategoryRecord::new("b", "Bananas", "/bananas", "Banana"),
        ])
        .unwrap();
        let app = TuiAppBuilder::new()
            .with_terminal(Terminal::buffered())
            .with_catalog(catalog)
            .with_query("an")
            .build()
            .unwrap();
        let frame = app.render_to_frame();
        assert_eq!(
            frame.to_plain_text(),
            "Search: an\n\n  b Bananas\n\n1 of 2 categories"
        );
    }
}
