use crate::core::print::EvaluationSheet;
use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};
use std::fs::File;
use std::io::Write;
use std::path::Path;

const REGULAR: Name<'static> = Name(b"F1");
const BOLD: Name<'static> = Name(b"F2");

/// Helvetica is a base-14 font: text must be WinAnsi bytes.
/// Latin-1 maps straight through, a few typographic marks are remapped,
/// the rest becomes '?'.
fn win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            '\u{20}'..='\u{7E}' | '\u{A0}'..='\u{FF}' => c as u32 as u8,
            '€' => 0x80,
            '…' => 0x85,
            '•' => 0x95,
            '–' => 0x96,
            '—' => 0x97,
            _ => b'?',
        })
        .collect()
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
    bold_font_id: Ref,

    font_size: f32,
    header_font_size: f32,
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

        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);
        let bold_font_id = Ref::new(4);
        let next_id = 5;

        pdf.type1_font(font_id)
            .base_font(Name(b"Helvetica"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));
        pdf.type1_font(bold_font_id)
            .base_font(Name(b"Helvetica-Bold"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));

        Self {
            pdf,
            catalog_id,
            pages_id,
            page_refs: Vec::new(),
            current_content_id: None,

            page_w: 595.0,
            page_h: 842.0,
            margin: 50.0,
            row_h: 20.0,

            next_id,
            font_id,
            bold_font_id,

            font_size: 10.0,
            header_font_size: 11.0,
            title_font_size: 14.0,
        }
    }

    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    /// Start a page and return its content stream.
    fn new_page(&mut self) -> Content {
        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();

        self.page_refs.push(page_id);

        let mut page = self.pdf.page(page_id);
        page.parent(self.pages_id)
            .media_box(Rect::new(0.0, 0.0, self.page_w, self.page_h))
            .contents(content_id);

        {
            let mut resources = page.resources();
            let mut fonts = resources.fonts();
            fonts.pair(REGULAR, self.font_id);
            fonts.pair(BOLD, self.bold_font_id);
        }
        drop(page);

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

    fn draw_text(&self, content: &mut Content, font: Name, x: f32, y: f32, size: f32, text: &str) {
        content.begin_text();
        content.set_font(font, size);
        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
        content.show(Str(&win_ansi(text)));
        content.end_text();
    }

    fn draw_cell_borders(&self, content: &mut Content, x: f32, y: f32, w: f32, h: f32) {
        content.save_state();
        content.set_stroke_rgb(0.65, 0.65, 0.65);
        content.rect(x, y, w, h);
        content.stroke();
        content.restore_state();
    }

    fn fill_band(&self, content: &mut Content, y: f32, width: f32, grey: f32) {
        content.save_state();
        content.set_fill_rgb(grey, grey, grey);
        content.rect(self.margin, y, width, self.row_h);
        content.fill_nonzero();
        content.restore_state();
    }

    fn draw_row(
        &self,
        content: &mut Content,
        y: f32,
        col_widths: &[f32],
        row: &[String],
        font: Name,
        font_size: f32,
    ) {
        let mut x = self.margin;

        for (text, w) in row.iter().zip(col_widths) {
            // Rough Helvetica average: 0.5 em per glyph.
            let fits = ((w - 8.0) / (font_size * 0.5)).max(1.0) as usize;
            let cell = crate::utils::formatting::truncate(text, fits);
            self.draw_text(content, font, x + 4.0, y + 6.0, font_size, &cell);
            self.draw_cell_borders(content, x, y, *w, self.row_h);
            x += w;
        }
    }

    /// Column widths from header and content length, scaled to the page.
    fn compute_col_widths(&self, headers: &[&str], rows: &[Vec<String>]) -> Vec<f32> {
        let mut widths: Vec<f32> = headers.iter().map(|h| h.len() as f32 * 6.5).collect();

        for row in rows {
            for (i, cell) in row.iter().enumerate() {
                if let Some(w) = widths.get_mut(i) {
                    *w = (cell.chars().count() as f32 * 5.2).max(*w);
                }
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

    fn draw_page_header_footer(&self, content: &mut Content, title: &str, page: usize) {
        self.draw_text(
            content,
            BOLD,
            self.margin,
            self.page_h - self.margin + 15.0,
            self.title_font_size,
            title,
        );

        let pg = format!("Página {}", page);
        self.draw_text(
            content,
            REGULAR,
            self.page_w - self.margin - 60.0,
            self.margin - 35.0,
            self.font_size,
            &pg,
        );
    }

    /// Multi-page table with a title. An empty table still gets one page
    /// with the header row.
    pub fn write_table(&mut self, title: &str, headers: &[&str], rows: &[Vec<String>]) {
        let col_widths = self.compute_col_widths(headers, rows);
        let total_w: f32 = col_widths.iter().sum();
        let header_row: Vec<String> = headers.iter().map(|s| s.to_string()).collect();

        let mut remaining: &[Vec<String>] = rows;
        let mut page_idx = 1;

        loop {
            let mut content = self.new_page();
            self.draw_page_header_footer(&mut content, title, page_idx);

            let mut y = self.page_h - self.margin - 30.0;

            self.fill_band(&mut content, y, total_w, 0.88);
            self.draw_row(
                &mut content,
                y,
                &col_widths,
                &header_row,
                BOLD,
                self.header_font_size,
            );
            y -= self.row_h;

            let mut consumed = 0;
            for (i, row) in remaining.iter().enumerate() {
                if y - self.row_h < self.margin {
                    break;
                }
                if i % 2 == 0 {
                    self.fill_band(&mut content, y, total_w, 0.96);
                }
                self.draw_row(&mut content, y, &col_widths, row, REGULAR, self.font_size);
                y -= self.row_h;
                consumed += 1;
            }

            self.finalize_page(content);
            remaining = &remaining[consumed..];
            page_idx += 1;

            if remaining.is_empty() {
                break;
            }
        }
    }

    /// The evaluation sheet as flowing text, wrapped to the page width.
    pub fn write_sheet(&mut self, sheet: &EvaluationSheet) {
        let line_h = self.font_size * 1.5;
        let wrap_cols = ((self.page_w - 2.0 * self.margin) / (self.font_size * 0.5)) as usize;

        let mut lines: Vec<(Name, f32, String)> = Vec::new();
        lines.push((REGULAR, self.font_size, sheet.clinic_name.clone()));
        lines.push((
            REGULAR,
            self.font_size,
            format!("Data: {} {} | Cliente: {}", sheet.date, sheet.time, sheet.client),
        ));
        if !sheet.contact.is_empty() {
            lines.push((REGULAR, self.font_size, format!("Contato: {}", sheet.contact)));
        }
        for l in textwrap::wrap(&format!("Dados: {}", sheet.personal), wrap_cols) {
            lines.push((REGULAR, self.font_size, l.into_owned()));
        }

        for section in &sheet.sections {
            lines.push((REGULAR, self.font_size, String::new()));
            lines.push((BOLD, self.header_font_size, section.title.to_string()));
            for item in &section.list {
                lines.push((REGULAR, self.font_size, format!("• {item}")));
            }
            for text in &section.lines {
                for l in textwrap::wrap(text, wrap_cols) {
                    lines.push((REGULAR, self.font_size, l.into_owned()));
                }
            }
        }

        if let Some(photo) = &sheet.photo {
            lines.push((REGULAR, self.font_size, String::new()));
            lines.push((
                REGULAR,
                self.font_size,
                format!("Foto anexada: {}", photo.file_name),
            ));
        }

        lines.push((REGULAR, self.font_size, String::new()));
        lines.push((REGULAR, self.font_size, String::new()));
        lines.push((REGULAR, self.font_size, "______________________________".into()));
        lines.push((REGULAR, self.font_size, "Assinatura".into()));

        let mut page_idx = 1;
        let mut content = self.new_page();
        self.draw_page_header_footer(&mut content, EvaluationSheet::TITLE, page_idx);
        let mut y = self.page_h - self.margin - 20.0;

        for (font, size, text) in lines {
            if y < self.margin {
                self.finalize_page(content);
                page_idx += 1;
                content = self.new_page();
                self.draw_page_header_footer(&mut content, EvaluationSheet::TITLE, page_idx);
                y = self.page_h - self.margin - 20.0;
            }
            if !text.is_empty() {
                self.draw_text(&mut content, font, self.margin, y, size, &text);
            }
            y -= line_h;
        }

        self.finalize_page(content);
    }

    pub fn save(mut self, path: &Path) -> std::io::Result<()> {
        self.pdf.catalog(self.catalog_id).pages(self.pages_id);
        self.build_pages_tree();

        let bytes = self.pdf.finish();
        let mut f = File::create(path)?;
        f.write_all(&bytes)?;
        Ok(())
    }
}
