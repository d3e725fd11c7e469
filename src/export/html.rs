// src/export/html.rs

use crate::core::print::{EvaluationSheet, SheetSection};
use maud::{DOCTYPE, Markup, PreEscaped, html};

/// Standalone printable page for one evaluation sheet.
pub fn render_sheet(sheet: &EvaluationSheet) -> Markup {
    html! {
        (DOCTYPE)
        html lang="pt-BR" {
            head {
                meta charset="UTF-8";
                title { (EvaluationSheet::TITLE) " - " (sheet.client) }
                style { (PreEscaped(CSS)) }
            }
            body {
                div.sheet {
                    header {
                        @if let Some(logo) = &sheet.logo {
                            img.logo src=(logo) alt="logo";
                        }
                        div {
                            h1 { (EvaluationSheet::TITLE) }
                            p.clinic { (sheet.clinic_name) }
                        }
                    }
                    hr;
                    p {
                        strong { "Data: " } (sheet.date) " " (sheet.time)
                        " | "
                        strong { "Cliente: " } (sheet.client)
                    }
                    @if !sheet.contact.is_empty() {
                        p { strong { "Contato: " } (sheet.contact) }
                    }
                    p { strong { "Dados: " } (sheet.personal) }

                    @for section in &sheet.sections {
                        (render_section(section))
                    }

                    @if let Some(photo) = &sheet.photo {
                        section.photo {
                            h2 { "FOTO" }
                            img src=(photo.data_uri()) alt=(photo.file_name);
                        }
                    }

                    div.signature {
                        div.line {}
                        p { "Assinatura" }
                    }
                }
            }
        }
    }
}

fn render_section(section: &SheetSection) -> Markup {
    html! {
        section {
            h2 { (section.title) }
            @if section.list.is_empty() && section.lines.is_empty() {
                p.empty { "-" }
            }
            @if !section.list.is_empty() {
                ul {
                    @for item in &section.list {
                        li { (item) }
                    }
                }
            }
            @for line in &section.lines {
                p { (line) }
            }
        }
    }
}

const CSS: &str = r#"
* { box-sizing: border-box; }

body {
    font-family: "Helvetica Neue", Arial, sans-serif;
    color: #222;
    margin: 0;
    line-height: 1.4;
}

.sheet {
    max-width: 800px;
    margin: 0 auto;
    padding: 24px;
}

header {
    display: flex;
    align-items: center;
    gap: 16px;
}

header .logo { width: 100px; }

h1 { font-size: 1.5em; margin: 0; }
h2 {
    font-size: 1.05em;
    margin: 18px 0 6px;
    border-bottom: 1px solid #bbb;
    padding-bottom: 2px;
}

.clinic { margin: 2px 0 0; color: #666; }
.empty { color: #999; }

section.photo img { max-width: 320px; max-height: 320px; }

.signature { margin-top: 64px; width: 280px; }
.signature .line { border-top: 1px solid #222; }
.signature p { margin: 4px 0 0; text-align: center; }

@page { size: A4; margin: 15mm; }

@media print {
    .sheet { max-width: none; padding: 0; }
    section { page-break-inside: avoid; }
}
"#;
