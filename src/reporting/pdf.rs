//! PDF output for a `ReportLayout`, drawn with the built-in Helvetica faces.

use printpdf::path::PaintMode;
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference, Rect, Rgb,
};
use crate::errors::ScanboardError;
use super::layout::{Block, ReportLayout, Table, TableKind};

const MARGIN: f32 = 72.0;
const CELL_PADDING: f32 = 6.0;
const LINE_SPACING: f32 = 1.2;
const BORDER_WIDTH: f32 = 1.0;
/// Average Helvetica glyph width as a fraction of the font size.
const GLYPH_WIDTH: f32 = 0.5;

/// Page dimensions in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSize {
    pub width: f32,
    pub height: f32,
}

impl PageSize {
    pub const LETTER: PageSize = PageSize { width: 612.0, height: 792.0 };
    pub const A4: PageSize = PageSize { width: 595.28, height: 841.89 };
}

#[derive(Debug)]
pub struct RenderedPdf {
    pub bytes: Vec<u8>,
    pub pages: usize,
}

fn mm(points: f32) -> Mm {
    Mm(points * 25.4 / 72.0)
}

fn rgb(r: f32, g: f32, b: f32) -> Color {
    Color::Rgb(Rgb::new(r, g, b, None))
}

fn black() -> Color { rgb(0.0, 0.0, 0.0) }
fn grey() -> Color { rgb(0.5, 0.5, 0.5) }
fn whitesmoke() -> Color { rgb(0.96, 0.96, 0.96) }
fn lightblue() -> Color { rgb(0.68, 0.85, 0.9) }

/// Greedy word wrap to fit `width` points at `font_size`. Words longer than a
/// full line are split.
pub fn wrap_text(text: &str, width: f32, font_size: f32) -> Vec<String> {
    let max_chars = ((width / (font_size * GLYPH_WIDTH)).floor() as usize).max(1);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > max_chars {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            lines.push(word.drain(..max_chars).collect());
        }
        let word: String = word.into_iter().collect();
        if word.is_empty() {
            continue;
        }

        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > max_chars && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(&word);
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

struct PdfWriter {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    page: PageSize,
    /// Baseline position measured from the page bottom
    cursor: f32,
    pages: usize,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

impl PdfWriter {
    fn new(title: &str, page: PageSize) -> Result<Self, ScanboardError> {
        let (doc, page_idx, layer_idx) =
            PdfDocument::new(title, mm(page.width), mm(page.height), "Page 1");
        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| ScanboardError::Render(format!("Failed to load font: {:?}", e)))?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| ScanboardError::Render(format!("Failed to load font: {:?}", e)))?;
        let layer = doc.get_page(page_idx).get_layer(layer_idx);

        Ok(Self {
            doc,
            layer,
            page,
            cursor: page.height - MARGIN,
            pages: 1,
            regular,
            bold,
        })
    }

    fn new_page(&mut self) {
        self.pages += 1;
        let (page_idx, layer_idx) = self.doc.add_page(
            mm(self.page.width),
            mm(self.page.height),
            format!("Page {}", self.pages),
        );
        self.layer = self.doc.get_page(page_idx).get_layer(layer_idx);
        self.cursor = self.page.height - MARGIN;
    }

    fn ensure_space(&mut self, height: f32) {
        if self.cursor - height < MARGIN {
            self.new_page();
        }
    }

    fn text_line(&self, text: &str, size: f32, x: f32, baseline: f32, bold: bool, color: Color) {
        self.layer.set_fill_color(color);
        let font = if bold { &self.bold } else { &self.regular };
        self.layer.use_text(text, size, mm(x), mm(baseline), font);
    }

    fn centered(&mut self, text: &str, size: f32) {
        let content_width = self.page.width - 2.0 * MARGIN;
        for line in wrap_text(text, content_width, size) {
            let leading = size * LINE_SPACING;
            self.ensure_space(leading);
            let width = line.chars().count() as f32 * size * GLYPH_WIDTH;
            let x = MARGIN + ((content_width - width) / 2.0).max(0.0);
            self.cursor -= leading;
            self.text_line(&line, size, x, self.cursor, true, black());
        }
    }

    fn heading(&mut self, text: &str, size: f32) {
        let leading = size * LINE_SPACING;
        self.ensure_space(leading);
        self.cursor -= leading;
        self.text_line(text, size, MARGIN, self.cursor, true, black());
    }

    fn rect(&self, x: f32, top: f32, width: f32, height: f32, fill: Option<Color>) {
        self.layer.set_outline_color(black());
        self.layer.set_outline_thickness(BORDER_WIDTH);
        let mode = match fill {
            Some(color) => {
                self.layer.set_fill_color(color);
                PaintMode::FillStroke
            }
            None => PaintMode::Stroke,
        };
        let rect = Rect::new(mm(x), mm(top - height), mm(x + width), mm(top)).with_mode(mode);
        self.layer.add_rect(rect);
    }

    fn table(&mut self, table: &Table) {
        let font_size = match table.kind {
            TableKind::Summary => 10.0,
            TableKind::Finding => 9.0,
        };
        let leading = font_size * LINE_SPACING;
        let total_width: f32 = table.column_widths.iter().sum();
        let left = ((self.page.width - total_width) / 2.0).max(MARGIN / 2.0);

        for (row_idx, row) in table.rows.iter().enumerate() {
            let cells: Vec<Vec<String>> = row
                .iter()
                .zip(&table.column_widths)
                .map(|(text, width)| wrap_text(text, width - 2.0 * CELL_PADDING, font_size))
                .collect();
            let line_count = cells.iter().map(Vec::len).max().unwrap_or(1);
            let per_page = self.lines_fitting(self.page.height - MARGIN, leading);

            // Rows that fit on one page are kept whole. Taller rows are
            // continued across pages, each piece drawn as its own bordered row.
            let mut start = 0;
            while start < line_count {
                let remaining = line_count - start;
                let needed = if remaining <= per_page { remaining } else { 1 };
                let fits = self.lines_fitting(self.cursor, leading);
                let fresh_page = self.cursor >= self.page.height - MARGIN;
                if fits < needed && !fresh_page {
                    self.new_page();
                    continue;
                }
                let take = remaining.min(fits.max(1));
                let segment_height = take as f32 * leading + 2.0 * CELL_PADDING;
                let top = self.cursor;
                let mut x = left;

                for (col_idx, (lines, width)) in cells.iter().zip(&table.column_widths).enumerate() {
                    let (fill, text_color, bold) = match table.kind {
                        TableKind::Summary if col_idx == 0 => (Some(grey()), whitesmoke(), false),
                        TableKind::Finding if row_idx == 0 => (Some(lightblue()), black(), true),
                        _ => (None, black(), false),
                    };
                    self.rect(x, top, *width, segment_height, fill);

                    let mut baseline = top - CELL_PADDING;
                    for line in lines.iter().skip(start).take(take) {
                        baseline -= leading;
                        self.text_line(line, font_size, x + CELL_PADDING, baseline + (leading - font_size), bold, text_color.clone());
                    }
                    x += width;
                }

                self.cursor -= segment_height;
                start += take;
            }
        }
    }

    /// Number of text lines a row starting at `top` can hold above the bottom margin.
    fn lines_fitting(&self, top: f32, leading: f32) -> usize {
        let available = top - MARGIN - 2.0 * CELL_PADDING;
        (available / leading).max(0.0).floor() as usize
    }

    fn finish(self) -> Result<RenderedPdf, ScanboardError> {
        let pages = self.pages;
        let bytes = self
            .doc
            .save_to_bytes()
            .map_err(|e| ScanboardError::Render(format!("Failed to write PDF: {:?}", e)))?;
        Ok(RenderedPdf { bytes, pages })
    }
}

pub fn render_pdf(layout: &ReportLayout, page: PageSize) -> Result<RenderedPdf, ScanboardError> {
    let mut writer = PdfWriter::new(&layout.title, page)?;

    for block in &layout.blocks {
        match block {
            Block::Title(text) => writer.centered(text, 18.0),
            Block::Heading(text) => writer.heading(text, 14.0),
            Block::Spacer(height) => writer.cursor -= *height,
            Block::Table(table) => writer.table(table),
        }
    }

    writer.finish()
}
