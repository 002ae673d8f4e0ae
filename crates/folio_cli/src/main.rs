//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `folio_core` linkage.
//! - Drive one full render pass through a plain-text sink, with
//!   deterministic output for quick local sanity checks.

use folio_core::{
    builtin_catalog, BadgeVariant, PageService, PageView, RenderInstruction, RenderSink,
};
use std::io::{self, Write};

/// Plain-text sink: one line per instruction, no styling.
///
/// This is a smoke probe for core wiring, not a styled page; layout and
/// visual concerns stay with real rendering collaborators.
struct TextSink<W: Write> {
    out: W,
}

impl<W: Write> TextSink<W> {
    fn new(out: W) -> Self {
        Self { out }
    }

    fn write_instruction(&mut self, instruction: &RenderInstruction) -> io::Result<()> {
        match instruction {
            RenderInstruction::Text(text) => writeln!(self.out, "  {text}"),
            RenderInstruction::Link { label, href } => writeln!(self.out, "  {label} -> {href}"),
        }
    }
}

impl<W: Write> RenderSink for TextSink<W> {
    type Error = io::Error;

    fn present(&mut self, page: &PageView) -> io::Result<()> {
        writeln!(self.out, "# Tech Stack")?;
        for badge in &page.tech_stack {
            self.write_instruction(badge)?;
        }

        writeln!(self.out, "# Projects")?;
        for project in &page.projects {
            match project.badge {
                Some(variant) => {
                    writeln!(self.out, "## {} [{}]", project.title, variant_name(variant))?
                }
                None => writeln!(self.out, "## {}", project.title)?,
            }
            writeln!(self.out, "  {}", project.description)?;
            for badge in &project.tech_badges {
                self.write_instruction(badge)?;
            }
            if let Some(note) = &project.note_instruction {
                self.write_instruction(note)?;
            }
            for link in &project.link_section {
                self.write_instruction(link)?;
            }
        }

        writeln!(self.out, "# Contact")?;
        writeln!(self.out, "  {}", page.contact_email)
    }
}

fn variant_name(variant: BadgeVariant) -> &'static str {
    match variant {
        BadgeVariant::Primary => "primary",
        BadgeVariant::Muted => "muted",
        BadgeVariant::Outlined => "outlined",
    }
}

fn main() -> io::Result<()> {
    println!("folio_core ping={}", folio_core::ping());
    println!("folio_core version={}", folio_core::core_version());

    let service = PageService::new(builtin_catalog().clone());
    let mut sink = TextSink::new(io::stdout().lock());
    service.render_into(&mut sink)
}
