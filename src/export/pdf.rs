use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// A titled block of text lines in the printable report.
pub struct ReportSection {
    pub heading: String,
    pub lines: Vec<String>,
}

/// Printable report layout: title block, text sections, then a table that
/// flows over as many pages as needed.
pub struct ReportLayout<'a> {
    pub title: &'a str,
    pub subtitle: &'a str,
    pub sections: &'a [ReportSection],
    pub table_title: &'a str,
    pub headers: &'a [&'a str],
    pub rows: &'a [Vec<String>],
    pub generated_on: &'a str,
}

pub struct PdfManager {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    page_refs: Vec<Ref>,
    current_content_id: Option<Ref>,

    page_w: f32,
    page_h: f32,
    margin: f32,
    row_h: f32,

    next_id: i32,
    font_id: Ref,

    font_size: f32,
    header_font_size: f32,
    section_font_size: f32,
    subtitle_font_size: f32,
    title_font_size: f32,
}

impl Default for PdfManager {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfManager {
    pub fn new() -> Self {
        let mut pdf = Pdf::new();

        // IDs are handed out manually
        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);
        let next_id = 4;

        pdf.type1_font(font_id).base_font(Name(b"Helvetica"));

        Self {
            pdf,
            catalog_id,
            pages_id,
            page_refs: Vec::new(),
            current_content_id: None,

            // A4 portrait
            page_w: 595.0,
            page_h: 842.0,
            margin: 50.0,
            row_h: 20.0,

            next_id,
            font_id,

            font_size: 10.0,
            header_font_size: 11.0,
            section_font_size: 14.0,
            subtitle_font_size: 16.0,
            title_font_size: 20.0,
        }
    }

    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    /// Open a new page and its content object
    fn new_page(&mut self) -> Content {
        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();

        self.page_refs.push(page_id);

        let mut page = self.pdf.page(page_id);
        page.parent(self.pages_id)
            .media_box(Rect::new(0.0, 0.0, self.page_w, self.page_h))
            .contents(content_id);

        page.resources().fonts().pair(Name(b"F1"), self.font_id);

        self.current_content_id = Some(content_id);

        Content::new()
    }

    fn finalize_page(&mut self, content: Content) {
        if let Some(id) = self.current_content_id {
            self.pdf.stream(id, &content.finish());
        }
    }

    fn build_pages_tree(&mut self) {
        let mut pages = self.pdf.pages(self.pages_id);
        pages.count(self.page_refs.len() as i32);
        pages.kids(self.page_refs.clone());
    }

    fn draw_text(&self, content: &mut Content, x: f32, y: f32, size: f32, text: &str) {
        let text = to_latin(text);
        content.begin_text();
        content.set_font(Name(b"F1"), size);
        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
        content.show(Str(text.as_bytes()));
        content.end_text();
    }

    /// Horizontally centered text; Helvetica width is estimated per glyph.
    fn draw_text_centered(&self, content: &mut Content, y: f32, size: f32, text: &str) {
        let width = text.chars().count() as f32 * size * 0.5;
        let x = ((self.page_w - width) / 2.0).max(self.margin);
        self.draw_text(content, x, y, size, text);
    }

    fn draw_cell_borders(&self, content: &mut Content, x: f32, y: f32, w: f32, h: f32) {
        content.save_state();
        content.set_stroke_rgb(0.65, 0.65, 0.65);
        content.rect(x, y, w, h);
        content.stroke();
        content.restore_state();
    }

    fn fill_band(&self, content: &mut Content, y: f32, width: f32, rgb: (f32, f32, f32)) {
        content.save_state();
        content.set_fill_rgb(rgb.0, rgb.1, rgb.2);
        content.rect(self.margin, y, width, self.row_h);
        content.fill_nonzero();
        content.restore_state();
    }

    fn draw_row(&self, content: &mut Content, y: f32, col_widths: &[f32], row: &[String], size: f32) {
        let mut x = self.margin;

        for (i, text) in row.iter().enumerate() {
            let w = col_widths[i];
            self.draw_text(content, x + 4.0, y + 5.0, size, text);
            self.draw_cell_borders(content, x, y, w, self.row_h);
            x += w;
        }
    }

    /// Column widths from header + content, scaled down to fit the page.
    fn compute_col_widths(&self, headers: &[&str], rows: &[Vec<String>]) -> Vec<f32> {
        let mut widths: Vec<f32> = headers
            .iter()
            .map(|h| (h.len() as f32 * 6.5).max(90.0))
            .collect();

        for row in rows {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = (cell.len() as f32 * 6.2).max(widths[i]);
            }
        }

        let total: f32 = widths.iter().sum();
        let max = self.page_w - 2.0 * self.margin;

        if total > max {
            let scale = max / total;
            for w in &mut widths {
                *w *= scale;
            }
        }

        widths
    }

    /// How many body rows fit under a table header drawn at `y_header`.
    fn rows_fitting(&self, y_header: f32) -> usize {
        let mut y = y_header - self.row_h;
        let mut n = 0;
        while y >= self.margin {
            n += 1;
            y -= self.row_h;
        }
        n.max(1)
    }

    /// Draw the title and text sections, returning the y where the table title goes.
    fn draw_intro(&self, content: &mut Content, layout: &ReportLayout) -> f32 {
        let mut y = self.page_h - self.margin;

        self.draw_text_centered(content, y - 10.0, self.title_font_size, layout.title);
        self.draw_text_centered(content, y - 34.0, self.subtitle_font_size, layout.subtitle);
        y -= 70.0;

        for section in layout.sections {
            self.draw_text(content, self.margin, y, self.section_font_size, &section.heading);
            y -= 20.0;
            for line in &section.lines {
                self.draw_text(content, self.margin, y, self.header_font_size, line);
                y -= 16.0;
            }
            y -= 14.0;
        }

        y
    }

    fn draw_footer(&self, content: &mut Content, generated_on: &str, page: usize, total: usize) {
        let text = format!("Generated on {} | Page {} of {}", generated_on, page, total);
        self.draw_text_centered(content, self.margin - 30.0, self.font_size, &text);
    }

    /// Lay out the full report.
    pub fn write_report(&mut self, layout: &ReportLayout) {
        let col_widths = self.compute_col_widths(layout.headers, layout.rows);
        let table_w: f32 = col_widths.iter().sum();
        let header_row: Vec<String> = layout.headers.iter().map(|s| s.to_string()).collect();

        // The intro only lives on page 1; measure it on a scratch stream first
        let intro_end = self.draw_intro(&mut Content::new(), layout);
        let first_header_y = intro_end - 10.0 - self.row_h;
        let next_header_y = self.page_h - self.margin - self.row_h;

        let first_cap = self.rows_fitting(first_header_y);
        let next_cap = self.rows_fitting(next_header_y);

        let mut chunks: Vec<&[Vec<String>]> = Vec::new();
        let (first, mut rest) = layout.rows.split_at(first_cap.min(layout.rows.len()));
        chunks.push(first);
        while !rest.is_empty() {
            let (c, r) = rest.split_at(next_cap.min(rest.len()));
            chunks.push(c);
            rest = r;
        }

        let total_pages = chunks.len();

        for (idx, chunk) in chunks.iter().enumerate() {
            let mut content = self.new_page();

            let mut y = if idx == 0 {
                let table_title_y = self.draw_intro(&mut content, layout);
                self.draw_text(
                    &mut content,
                    self.margin,
                    table_title_y,
                    self.section_font_size,
                    layout.table_title,
                );
                first_header_y
            } else {
                next_header_y
            };

            // table header
            self.fill_band(&mut content, y, table_w, (0.85, 0.87, 0.90));
            self.draw_row(&mut content, y, &col_widths, &header_row, self.header_font_size);
            y -= self.row_h;

            for (i, row) in chunk.iter().enumerate() {
                // zebra stripe
                if i % 2 == 0 {
                    self.fill_band(&mut content, y, table_w, (0.96, 0.96, 0.96));
                }
                self.draw_row(&mut content, y, &col_widths, row, self.font_size);
                y -= self.row_h;
            }

            self.draw_footer(&mut content, layout.generated_on, idx + 1, total_pages);
            self.finalize_page(content);
        }
    }

    pub fn save(mut self, path: &Path) -> std::io::Result<()> {
        // Catalog + Pages tree are built once, here
        self.pdf.catalog(self.catalog_id).pages(self.pages_id);
        self.build_pages_tree();

        let bytes = self.pdf.finish();
        let mut f = File::create(path)?;
        f.write_all(&bytes)?;
        Ok(())
    }
}

/// The base-14 Helvetica font only covers Latin text; anything else becomes '?'.
fn to_latin(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_ascii() { c } else { '?' })
        .collect()
}
