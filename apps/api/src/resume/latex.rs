//! Resume document rendering — plain text to a paginated monospace PDF.
//!
//! The resume text is laid out one paragraph per input line in a 10pt
//! typewriter face with 10mm margins; page breaks happen automatically on
//! overflow. Compilation is CPU-bound and runs inside `spawn_blocking`.

use crate::errors::AppError;
use crate::resume::sanitize::sanitize_for_document;

/// Builds the full LaTeX source for a sanitized resume text.
pub fn build_latex_document(resume_text: &str) -> String {
    let mut body = String::new();
    for line in resume_text.lines() {
        let line = escape_latex(line.trim_end());
        if line.is_empty() {
            body.push_str("\\vspace{\\baselineskip}\n");
        } else {
            body.push_str(&line);
            body.push_str("\\par\n");
        }
    }

    format!(
        "\\documentclass[10pt]{{article}}\n\
         \\usepackage[margin=10mm]{{geometry}}\n\
         \\usepackage[T1]{{fontenc}}\n\
         \\pagestyle{{empty}}\n\
         \\setlength{{\\parindent}}{{0pt}}\n\
         \\begin{{document}}\n\
         \\ttfamily\n\
         \\raggedright\n\
         {body}\\end{{document}}\n"
    )
}

/// Escapes LaTeX-reserved characters in one line of resume text.
fn escape_latex(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    for c in line.chars() {
        match c {
            '\\' => out.push_str("\\textbackslash{}"),
            '{' => out.push_str("\\{"),
            '}' => out.push_str("\\}"),
            '#' | '$' | '%' | '&' | '_' => {
                out.push('\\');
                out.push(c);
            }
            '~' => out.push_str("\\textasciitilde{}"),
            '^' => out.push_str("\\textasciicircum{}"),
            _ => out.push(c),
        }
    }
    out
}

/// Sanitizes, builds, and compiles the resume text to PDF bytes.
pub async fn render_pdf(resume_text: &str) -> Result<Vec<u8>, AppError> {
    let latex = build_latex_document(&sanitize_for_document(resume_text));
    let pdf = tokio::task::spawn_blocking(move || tectonic::latex_to_pdf(latex))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("PDF task panicked: {e}")))?
        .map_err(|e| AppError::Document(e.to_string()))?;
    Ok(pdf)
}

/// Download filename derived from the user's name.
pub fn resume_filename(name: &str) -> String {
    format!("{}_resume.pdf", name.replace(' ', "_"))
}
