use super::autocomplete::Autocompleter;
use super::render::{OutputLine, Tone};
use super::shell::Shell;
use super::ui;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use std::io;
use tui_textarea::{Input, Key, TextArea};

pub struct App<'a> {
    pub textarea: TextArea<'a>,
    pub messages: Vec<Line<'static>>,
    pub shell: Shell,
    pub exit: bool,

    // Autocomplete State
    pub autocompleter: Autocompleter,
    pub suggestions: Vec<String>,
    pub suggestion_index: usize,
    pub popup_open: bool,
}

impl<'a> App<'a> {
    pub fn new(shell: Shell) -> Self {
        let mut messages: Vec<Line<'static>> = Shell::welcome().into_iter().map(styled).collect();
        messages.push(separator());

        Self {
            textarea: Self::new_textarea(),
            messages,
            shell,
            exit: false,
            autocompleter: Autocompleter::new(),
            suggestions: Vec::new(),
            suggestion_index: 0,
            popup_open: false,
        }
    }

    fn new_textarea() -> TextArea<'static> {
        let mut textarea = TextArea::default();
        textarea.set_placeholder_text(
            "Enter a command (Press 'Enter' to run, 'Tab' for autocomplete, 'Esc' to quit)",
        );
        textarea.set_block(
            ratatui::widgets::Block::default()
                .borders(ratatui::widgets::Borders::ALL)
                .title(" Command "),
        );
        textarea
    }

    fn reset_textarea(&mut self) {
        self.textarea = Self::new_textarea();
    }

    pub fn run(&mut self) -> anyhow::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let res = self.run_loop(&mut terminal);

        // Restore terminal
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        res?;
        Ok(())
    }

    fn run_loop<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| ui::draw(f, self))?;

            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                // Navigation inside Popup
                if self.popup_open {
                    match key.code {
                        KeyCode::Down => {
                            if !self.suggestions.is_empty() {
                                self.suggestion_index =
                                    (self.suggestion_index + 1) % self.suggestions.len();
                            }
                            continue;
                        }
                        KeyCode::Up => {
                            if !self.suggestions.is_empty() {
                                self.suggestion_index = (self.suggestion_index
                                    + self.suggestions.len()
                                    - 1)
                                    % self.suggestions.len();
                            }
                            continue;
                        }
                        KeyCode::Enter | KeyCode::Tab => {
                            self.accept_suggestion();
                            continue;
                        }
                        KeyCode::Esc => {
                            self.popup_open = false;
                            continue;
                        }
                        _ => {
                            self.popup_open = false;
                        }
                    }
                }

                match key.code {
                    KeyCode::Esc => {
                        self.exit = true;
                    }
                    KeyCode::Enter => {
                        self.execute_command();
                    }
                    KeyCode::Tab => {
                        self.update_suggestions();
                        if !self.suggestions.is_empty() {
                            self.popup_open = true;
                            self.suggestion_index = 0;
                        }
                    }
                    _ => {
                        self.textarea.input(key);
                    }
                }
            }

            if self.exit {
                return Ok(());
            }
        }
    }

    fn update_suggestions(&mut self) {
        let word = self.current_word();
        if word.is_empty() {
            self.suggestions.clear();
            self.popup_open = false;
            return;
        }

        self.suggestions = self
            .autocompleter
            .get_suggestions(&word, self.shell.system());
        self.suggestion_index = 0;
    }

    fn accept_suggestion(&mut self) {
        let Some(suggestion) = self.suggestions.get(self.suggestion_index).cloned() else {
            return;
        };
        let word = self.current_word();

        for _ in 0..word.chars().count() {
            self.textarea.input(Input {
                key: Key::Backspace,
                ctrl: false,
                alt: false,
                shift: false,
            });
        }

        // Names with spaces need quoting to survive tokenizing
        if suggestion.contains(' ') {
            self.textarea.insert_str(format!("\"{}\"", suggestion));
        } else {
            self.textarea.insert_str(&suggestion);
        }
        self.popup_open = false;
    }

    /// Word left of the cursor on the input line
    fn current_word(&self) -> String {
        let (row, col) = self.textarea.cursor();
        let Some(line) = self.textarea.lines().get(row) else {
            return String::new();
        };

        let prefix: Vec<char> = line.chars().take(col).collect();
        let start = prefix
            .iter()
            .rposition(|c| c.is_whitespace() || *c == '"')
            .map_or(0, |separator| separator + 1);
        prefix[start..].iter().collect()
    }

    fn execute_command(&mut self) {
        let input = self.textarea.lines().join(" ");
        if input.trim().is_empty() {
            return;
        }

        self.messages.push(Line::from(vec![
            Span::styled("> ", Style::default().fg(Color::Yellow)),
            Span::raw(input.clone()),
        ]));
        self.reset_textarea();

        let reply = self.shell.execute_line(&input);
        self.messages.extend(reply.lines.into_iter().map(styled));
        self.messages.push(separator());

        if reply.exit {
            self.exit = true;
        }
    }
}

fn styled(line: OutputLine) -> Line<'static> {
    let style = match line.tone {
        Tone::Plain => Style::default(),
        Tone::Heading => Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
        Tone::Success => Style::default().fg(Color::Green),
        Tone::Warning => Style::default().fg(Color::Yellow),
        Tone::Error => Style::default().fg(Color::Red),
    };
    Line::from(Span::styled(line.text, style))
}

fn separator() -> Line<'static> {
    Line::from(Span::styled(
        "-".repeat(50),
        Style::default().fg(Color::DarkGray),
    ))
}
