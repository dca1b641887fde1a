use crossterm::event::KeyCode;
use pagesmith_engine::editing::{BlockStore, Cmd, LinkForm, LinkFormOutcome};
use pagesmith_engine::models::style::is_hex_color;
use pagesmith_engine::{
    Block, BlockContent, BlockId, BlockKind, MediaKind, PageShell, StylePatch, TextAlign,
    ToggleField, export_html_with, io,
};
use ratatui::widgets::ListState;
use std::path::{Path, PathBuf};

const FONT_STEP_PX: i32 = 2;
const HEIGHT_STEP_PX: i32 = 20;
const SUMMARY_CHARS: usize = 40;

/// What the text prompt at the bottom of the screen is collecting
#[derive(Debug, Clone, PartialEq)]
pub enum Prompt {
    EditContent { id: BlockId },
    Color { id: BlockId },
    MediaPath { kind: MediaKind },
    LinkUrl,
    LinkLabel { url: String },
}

impl Prompt {
    pub fn title(&self) -> &'static str {
        match self {
            Prompt::EditContent { .. } => "Content",
            Prompt::Color { .. } => "Color (#rrggbb)",
            Prompt::MediaPath {
                kind: MediaKind::Image,
            } => "Image file",
            Prompt::MediaPath {
                kind: MediaKind::Video,
            } => "Video file",
            Prompt::LinkUrl => "Link URL",
            Prompt::LinkLabel { .. } => "Link text (optional)",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Input {
    pub prompt: Prompt,
    pub buffer: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct App {
    pub store: BlockStore,
    pub list_state: ListState,
    pub input: Option<Input>,
    pub status: Option<String>,
    output_dir: PathBuf,
    shell: PageShell,
}

impl App {
    pub fn new(output_dir: PathBuf, shell: PageShell) -> Self {
        Self {
            store: BlockStore::new(),
            list_state: ListState::default(),
            input: None,
            status: None,
            output_dir,
            shell,
        }
    }

    pub fn output_dir(&self) -> &PathBuf {
        &self.output_dir
    }

    pub fn selected_block(&self) -> Option<&Block> {
        let index = self.list_state.selected()?;
        self.store.blocks().get(index)
    }

    fn selected_id(&self) -> Option<BlockId> {
        self.selected_block().map(Block::id)
    }

    pub fn handle_key(&mut self, code: KeyCode) -> Flow {
        if self.input.is_some() {
            self.handle_prompt_key(code);
            return Flow::Continue;
        }

        self.status = None;
        match code {
            KeyCode::Char('q') => return Flow::Quit,
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Up | KeyCode::Char('k') => self.select_previous(),
            KeyCode::Char('a') => {
                self.apply(Cmd::Add {
                    kind: BlockKind::Text,
                    content: None,
                });
            }
            KeyCode::Char('i') => self.open_prompt(Prompt::MediaPath {
                kind: MediaKind::Image,
            }),
            KeyCode::Char('v') => self.open_prompt(Prompt::MediaPath {
                kind: MediaKind::Video,
            }),
            KeyCode::Char('l') => self.open_prompt(Prompt::LinkUrl),
            KeyCode::Char('e') => {
                if let Some(block) = self.selected_block() {
                    let id = block.id();
                    let current = block.content().to_string();
                    self.open_prompt_with(Prompt::EditContent { id }, current);
                }
            }
            KeyCode::Char('c') => {
                if let Some(block) = self.selected_block()
                    && let Some(style) = block.text_style()
                {
                    let id = block.id();
                    let current = style.color.clone();
                    self.open_prompt_with(Prompt::Color { id }, current);
                }
            }
            KeyCode::Char('x') | KeyCode::Delete => self.delete_selected(),
            KeyCode::Char('B') => self.toggle(ToggleField::Bold),
            KeyCode::Char('I') => self.toggle(ToggleField::Italic),
            KeyCode::Char('U') => self.toggle(ToggleField::Underline),
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.with_selected(|id| Cmd::AdjustFontSize {
                    id,
                    delta_px: FONT_STEP_PX,
                });
            }
            KeyCode::Char('-') => {
                self.with_selected(|id| Cmd::AdjustFontSize {
                    id,
                    delta_px: -FONT_STEP_PX,
                });
            }
            KeyCode::Char(']') => {
                self.with_selected(|id| Cmd::AdjustMinHeight {
                    id,
                    delta_px: HEIGHT_STEP_PX,
                });
            }
            KeyCode::Char('[') => {
                self.with_selected(|id| Cmd::AdjustMinHeight {
                    id,
                    delta_px: -HEIGHT_STEP_PX,
                });
            }
            KeyCode::Char('1') => self.align(TextAlign::Left),
            KeyCode::Char('2') => self.align(TextAlign::Center),
            KeyCode::Char('3') => self.align(TextAlign::Right),
            KeyCode::Char('s') => self.export(),
            _ => {}
        }
        Flow::Continue
    }

    fn handle_prompt_key(&mut self, code: KeyCode) {
        let Some(input) = self.input.as_mut() else {
            return;
        };
        match code {
            KeyCode::Char(c) => input.buffer.push(c),
            KeyCode::Backspace => {
                input.buffer.pop();
            }
            KeyCode::Esc => {
                // The label is optional: skipping it still creates the link
                if let Some(Input {
                    prompt: prompt @ Prompt::LinkLabel { .. },
                    ..
                }) = self.input.take()
                {
                    self.submit(Input {
                        prompt,
                        buffer: String::new(),
                    });
                }
            }
            KeyCode::Enter => {
                if let Some(input) = self.input.take() {
                    self.submit(input);
                }
            }
            _ => {}
        }
    }

    fn submit(&mut self, input: Input) {
        match input.prompt {
            Prompt::EditContent { id } => {
                self.apply(Cmd::UpdateContent {
                    id,
                    content: input.buffer,
                });
            }
            Prompt::Color { id } => {
                let color = input.buffer.trim().to_string();
                if is_hex_color(&color) {
                    self.apply(Cmd::UpdateStyle {
                        id,
                        patch: StylePatch::color(color),
                    });
                } else {
                    self.status = Some(format!("Not a hex color: {color}"));
                }
            }
            Prompt::MediaPath { kind } => self.add_media(kind, input.buffer.trim()),
            Prompt::LinkUrl => match LinkForm::submitted(input.buffer, "").resolve() {
                LinkFormOutcome::Create { url, .. } => self.open_prompt(Prompt::LinkLabel { url }),
                LinkFormOutcome::MissingUrl => {
                    self.status = Some("Please enter a URL".to_string());
                }
                LinkFormOutcome::Cancelled => {}
            },
            Prompt::LinkLabel { url } => {
                let outcome = LinkForm::submitted(url, input.buffer).resolve();
                if let Some(cmd) = outcome.into_command() {
                    self.apply(cmd);
                }
            }
        }
    }

    fn add_media(&mut self, kind: MediaKind, path: &str) {
        match io::read_media_file(Path::new(path), kind) {
            Ok(uri) => {
                let id = self.store.add_media(kind, uri).id();
                self.select_id(id);
            }
            Err(e) => self.status = Some(format!("Could not add media: {e}")),
        }
    }

    fn open_prompt(&mut self, prompt: Prompt) {
        self.open_prompt_with(prompt, String::new());
    }

    fn open_prompt_with(&mut self, prompt: Prompt, buffer: String) {
        self.input = Some(Input { prompt, buffer });
    }

    fn apply(&mut self, cmd: Cmd) {
        let is_add = matches!(cmd, Cmd::Add { .. } | Cmd::AddWith { .. });
        let patch = self.store.apply(cmd);
        if is_add && let Some(id) = patch.changed {
            self.select_id(id);
        }
    }

    fn with_selected(&mut self, make: impl FnOnce(BlockId) -> Cmd) {
        if let Some(id) = self.selected_id() {
            self.apply(make(id));
        }
    }

    fn toggle(&mut self, field: ToggleField) {
        self.with_selected(|id| Cmd::ToggleStyle { id, field });
    }

    fn align(&mut self, align: TextAlign) {
        self.with_selected(|id| Cmd::UpdateStyle {
            id,
            patch: StylePatch::align(align),
        });
    }

    fn delete_selected(&mut self) {
        let Some(index) = self.list_state.selected() else {
            return;
        };
        self.with_selected(|id| Cmd::Delete { id });

        let len = self.store.len();
        self.list_state
            .select(if len == 0 { None } else { Some(index.min(len - 1)) });
    }

    fn select_id(&mut self, id: BlockId) {
        self.list_state.select(self.store.position(id));
    }

    fn select_next(&mut self) {
        let len = self.store.len();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => (i + 1) % len,
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    fn select_previous(&mut self) {
        let len = self.store.len();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        self.list_state.select(Some(i));
    }

    fn export(&mut self) {
        let html = export_html_with(self.store.blocks(), &self.shell);
        self.status = Some(match io::write_export(&self.output_dir, &html) {
            Ok(path) => format!("Exported {}", path.display()),
            Err(e) => format!("Export failed: {e}"),
        });
    }
}

/// One-line description of a block for the block list
pub fn summary(block: &Block) -> String {
    let detail = match block.body() {
        BlockContent::Text(text) => truncate(&text.html),
        BlockContent::Image(media) | BlockContent::Video(media) => media_summary(&media.src),
        BlockContent::Link(link) => truncate(link.label()),
    };
    format!("{:<6}{detail}", block.kind().label())
}

fn media_summary(src: &str) -> String {
    match src.strip_prefix("data:") {
        Some(rest) => {
            let mime = rest.split(';').next().unwrap_or_default();
            format!("{mime} ({} KiB embedded)", src.len().div_ceil(1024))
        }
        None => truncate(src),
    }
}

fn truncate(text: &str) -> String {
    let single_line = text.replace('\n', " ");
    if single_line.chars().count() <= SUMMARY_CHARS {
        return single_line;
    }
    let cut: String = single_line.chars().take(SUMMARY_CHARS - 1).collect();
    format!("{cut}…")
}
