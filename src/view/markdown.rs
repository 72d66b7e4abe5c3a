// Markdown rendering for the content pane
//
// Walks the pulldown-cmark event stream and emits egui widgets: wrapped
// inline runs, syntect-highlighted code blocks with a copy button, grids for
// tables, indented blockquotes.

use eframe::egui;
use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use syntect::easy::HighlightLines;
use syntect::highlighting::ThemeSet;
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

use crate::style::{self, Theme};

/// One styled run of inline text, buffered until the enclosing block ends.
#[derive(Default)]
struct InlineSpan {
    text: String,
    strong: bool,
    emphasis: bool,
    code: bool,
    link: Option<String>,
}

/// How a flushed run of inline spans is presented.
#[derive(Clone, Copy, PartialEq)]
enum BlockKind {
    Body,
    Heading(u8),
    Quote,
}

/// A table being captured; rendered as a grid once the closing tag arrives.
#[derive(Default)]
struct TableCapture {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
    current_row: Vec<String>,
    current_cell: String,
    in_head: bool,
}

pub struct MarkdownView<'a> {
    syntax_set: &'a SyntaxSet,
    theme_set: &'a ThemeSet,
    theme: Theme,
    body_size: f32,
    code_size: f32,
}

impl<'a> MarkdownView<'a> {
    pub fn new(
        syntax_set: &'a SyntaxSet,
        theme_set: &'a ThemeSet,
        theme: Theme,
        body_size: f32,
        code_size: f32,
    ) -> Self {
        Self {
            syntax_set,
            theme_set,
            theme,
            body_size,
            code_size,
        }
    }

    pub fn show(&self, ui: &mut egui::Ui, markdown: &str) {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        let parser = Parser::new_ext(markdown, options);

        let mut spans: Vec<InlineSpan> = Vec::new();
        let mut strong_depth = 0usize;
        let mut emphasis_depth = 0usize;
        let mut link_target: Option<String> = None;

        let mut heading_level: Option<u8> = None;
        let mut quote_depth = 0usize;
        // Per open list: the next ordinal for ordered lists, None for bullets.
        let mut list_stack: Vec<Option<u64>> = Vec::new();

        let mut code_lang: Option<String> = None;
        let mut code_buffer = String::new();

        let mut table: Option<TableCapture> = None;
        let mut table_index = 0usize;

        for event in parser {
            match event {
                Event::Start(tag) => match tag {
                    Tag::Heading { level, .. } => {
                        heading_level = Some(match level {
                            HeadingLevel::H1 => 1,
                            HeadingLevel::H2 => 2,
                            HeadingLevel::H3 => 3,
                            HeadingLevel::H4 => 4,
                            HeadingLevel::H5 => 5,
                            HeadingLevel::H6 => 6,
                        });
                    }
                    Tag::BlockQuote(_) => quote_depth += 1,
                    Tag::CodeBlock(kind) => {
                        code_lang = Some(match kind {
                            CodeBlockKind::Fenced(lang) => lang.to_string(),
                            CodeBlockKind::Indented => String::new(),
                        });
                        code_buffer.clear();
                    }
                    Tag::List(start) => list_stack.push(start),
                    Tag::Item => {
                        let prefix = match list_stack.last_mut() {
                            Some(Some(ordinal)) => {
                                let text = format!("{ordinal}. ");
                                *ordinal += 1;
                                text
                            }
                            _ => "• ".to_string(),
                        };
                        spans.push(InlineSpan {
                            text: prefix,
                            ..Default::default()
                        });
                    }
                    Tag::Strong => strong_depth += 1,
                    Tag::Emphasis => emphasis_depth += 1,
                    Tag::Link { dest_url, .. } => link_target = Some(dest_url.to_string()),
                    Tag::Table(_) => table = Some(TableCapture::default()),
                    Tag::TableHead => {
                        if let Some(table) = table.as_mut() {
                            table.in_head = true;
                        }
                    }
                    Tag::TableRow => {
                        if let Some(table) = table.as_mut() {
                            table.current_row.clear();
                        }
                    }
                    Tag::TableCell => {
                        if let Some(table) = table.as_mut() {
                            table.current_cell.clear();
                        }
                    }
                    _ => {}
                },
                Event::End(tag) => match tag {
                    TagEnd::Heading(_) => {
                        let level = heading_level.take().unwrap_or(1);
                        self.flush(ui, &mut spans, BlockKind::Heading(level), 0.0);
                        ui.add_space(6.0);
                    }
                    TagEnd::BlockQuote(_) => quote_depth = quote_depth.saturating_sub(1),
                    TagEnd::CodeBlock => {
                        let lang = code_lang.take().unwrap_or_default();
                        self.render_code_block(ui, &lang, &code_buffer);
                        code_buffer.clear();
                    }
                    TagEnd::List(_) => {
                        list_stack.pop();
                        if list_stack.is_empty() {
                            ui.add_space(6.0);
                        }
                    }
                    TagEnd::Item => {
                        let indent = list_stack.len().saturating_sub(1) as f32 * 14.0;
                        self.flush(ui, &mut spans, BlockKind::Body, indent);
                    }
                    TagEnd::Paragraph => {
                        let kind = if quote_depth > 0 {
                            BlockKind::Quote
                        } else {
                            BlockKind::Body
                        };
                        let indent = list_stack.len() as f32 * 14.0;
                        self.flush(ui, &mut spans, kind, indent);
                        if list_stack.is_empty() {
                            ui.add_space(6.0);
                        }
                    }
                    TagEnd::Strong => strong_depth = strong_depth.saturating_sub(1),
                    TagEnd::Emphasis => emphasis_depth = emphasis_depth.saturating_sub(1),
                    TagEnd::Link => link_target = None,
                    TagEnd::Table => {
                        if let Some(capture) = table.take() {
                            self.render_table(ui, &capture, table_index);
                            table_index += 1;
                        }
                    }
                    TagEnd::TableHead => {
                        if let Some(table) = table.as_mut() {
                            table.header = std::mem::take(&mut table.current_row);
                            table.in_head = false;
                        }
                    }
                    TagEnd::TableRow => {
                        if let Some(table) = table.as_mut() {
                            let row = std::mem::take(&mut table.current_row);
                            table.rows.push(row);
                        }
                    }
                    TagEnd::TableCell => {
                        if let Some(table) = table.as_mut() {
                            let cell = std::mem::take(&mut table.current_cell);
                            table.current_row.push(cell);
                        }
                    }
                    _ => {}
                },
                Event::Text(text) => {
                    if code_lang.is_some() {
                        code_buffer.push_str(&text);
                    } else if let Some(table) = table.as_mut() {
                        table.current_cell.push_str(&text);
                    } else {
                        spans.push(InlineSpan {
                            text: text.to_string(),
                            strong: strong_depth > 0,
                            emphasis: emphasis_depth > 0,
                            code: false,
                            link: link_target.clone(),
                        });
                    }
                }
                Event::Code(code) => {
                    if let Some(table) = table.as_mut() {
                        table.current_cell.push_str(&code);
                    } else {
                        spans.push(InlineSpan {
                            text: code.to_string(),
                            code: true,
                            ..Default::default()
                        });
                    }
                }
                Event::SoftBreak | Event::HardBreak => {
                    if let Some(table) = table.as_mut() {
                        table.current_cell.push(' ');
                    } else {
                        spans.push(InlineSpan {
                            text: " ".to_string(),
                            ..Default::default()
                        });
                    }
                }
                Event::Rule => {
                    ui.add_space(4.0);
                    ui.separator();
                    ui.add_space(4.0);
                }
                _ => {}
            }
        }

        // A trailing run without a closing paragraph still gets painted.
        self.flush(ui, &mut spans, BlockKind::Body, 0.0);
    }

    /// Paints the buffered inline spans as one wrapped run and clears them.
    fn flush(&self, ui: &mut egui::Ui, spans: &mut Vec<InlineSpan>, kind: BlockKind, indent: f32) {
        if spans.is_empty() {
            return;
        }
        let runs = std::mem::take(spans);

        let size = match kind {
            BlockKind::Heading(1) => 24.0,
            BlockKind::Heading(2) => 20.0,
            BlockKind::Heading(3) => 18.0,
            BlockKind::Heading(_) => 16.0,
            BlockKind::Body | BlockKind::Quote => self.body_size,
        };

        let paint = |ui: &mut egui::Ui| {
            ui.horizontal_wrapped(|ui| {
                ui.spacing_mut().item_spacing.x = 0.0;
                if indent > 0.0 {
                    ui.add_space(indent);
                }
                for span in &runs {
                    let mut text = egui::RichText::new(&span.text).size(size);
                    if matches!(kind, BlockKind::Heading(_)) || span.strong {
                        text = text.strong();
                    }
                    if span.emphasis || kind == BlockKind::Quote {
                        text = text.italics();
                    }
                    if kind == BlockKind::Quote {
                        text = text.weak();
                    }
                    if span.code {
                        text = text
                            .monospace()
                            .size(self.code_size)
                            .background_color(style::code_background(self.theme));
                    }
                    match &span.link {
                        Some(url) => {
                            ui.hyperlink_to(text, url);
                        }
                        None => {
                            ui.label(text);
                        }
                    }
                }
            });
        };

        if kind == BlockKind::Quote {
            ui.indent("quote", paint);
        } else {
            paint(ui);
        }
    }

    fn render_code_block(&self, ui: &mut egui::Ui, lang: &str, code: &str) {
        let frame = egui::Frame::new()
            .fill(style::code_background(self.theme))
            .corner_radius(6)
            .inner_margin(8.0);
        frame.show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                if !lang.is_empty() {
                    ui.weak(lang);
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.small_button("Copy").clicked() {
                        ui.ctx().copy_text(code.to_string());
                    }
                });
            });
            ui.add_space(4.0);

            let syntax = self
                .syntax_set
                .find_syntax_by_token(lang)
                .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());
            let theme = &self.theme_set.themes[style::syntect_theme_name(self.theme)];
            let mut highlighter = HighlightLines::new(syntax, theme);

            let mut job = egui::text::LayoutJob::default();
            for line in LinesWithEndings::from(code) {
                let ranges = highlighter
                    .highlight_line(line, self.syntax_set)
                    .unwrap_or_default();
                for (segment_style, text) in ranges {
                    let color = egui::Color32::from_rgb(
                        segment_style.foreground.r,
                        segment_style.foreground.g,
                        segment_style.foreground.b,
                    );
                    job.append(
                        text,
                        0.0,
                        egui::TextFormat {
                            font_id: egui::FontId::monospace(self.code_size),
                            color,
                            ..Default::default()
                        },
                    );
                }
            }
            ui.add(egui::Label::new(job));
        });
        ui.add_space(8.0);
    }

    fn render_table(&self, ui: &mut egui::Ui, capture: &TableCapture, index: usize) {
        // egui::Grid rather than a fixed-row-height table: description cells
        // wrap to several lines.
        egui::Grid::new(("markdown_table", index))
            .striped(true)
            .min_col_width(40.0)
            .max_col_width(360.0)
            .spacing([14.0, 6.0])
            .show(ui, |ui| {
                for cell in &capture.header {
                    ui.label(egui::RichText::new(cell).size(self.body_size).strong());
                }
                ui.end_row();
                for row in &capture.rows {
                    for cell in row {
                        ui.add(egui::Label::new(
                            egui::RichText::new(cell).size(self.body_size),
                        ));
                    }
                    ui.end_row();
                }
            });
        ui.add_space(8.0);
    }
}
