use crate::core::font_size::FontSize;
use crate::core::palette::{Rgb, DEFAULT_BACKGROUND, DEFAULT_FONT_COLOR};
use crate::domain::model::{Project, Resume};

pub const SECTION_RULE: &str = "------------------------";
pub const BULLET: &str = "•";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Heading,
    Rule,
    Body,
    Spacer,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeLine {
    pub kind: LineKind,
    pub text: String,
}

impl ResumeLine {
    fn heading(text: &str) -> Self {
        Self {
            kind: LineKind::Heading,
            text: text.to_string(),
        }
    }

    fn rule() -> Self {
        Self {
            kind: LineKind::Rule,
            text: SECTION_RULE.to_string(),
        }
    }

    fn body(text: String) -> Self {
        Self {
            kind: LineKind::Body,
            text,
        }
    }

    fn spacer() -> Self {
        Self {
            kind: LineKind::Spacer,
            text: String::new(),
        }
    }
}

/// Style parameters the resume card is drawn with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub font_size: FontSize,
    pub font_color: Rgb,
    pub background: Rgb,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_size: FontSize::default(),
            font_color: DEFAULT_FONT_COLOR,
            background: DEFAULT_BACKGROUND,
        }
    }
}

/// Lay a resume out as its three labeled sections.
pub fn resume_lines(resume: &Resume) -> Vec<ResumeLine> {
    let mut lines = Vec::new();

    push_section(&mut lines, "PERSONAL DETAILS");
    lines.push(ResumeLine::body(format!("Name: {}", resume.name)));
    lines.push(ResumeLine::body(format!("Phone: {}", resume.phone)));
    lines.push(ResumeLine::body(format!("Email: {}", resume.email)));
    lines.push(ResumeLine::body(format!("Twitter: {}", resume.twitter)));
    lines.push(ResumeLine::body(format!("Address: {}", resume.address)));
    if let Some(summary) = resume.summary.as_deref().filter(|s| !s.trim().is_empty()) {
        lines.push(ResumeLine::body(format!("Summary: {}", summary)));
    }

    lines.push(ResumeLine::spacer());
    push_section(&mut lines, "SKILLS");
    for skill in &resume.skills {
        lines.push(ResumeLine::body(format!("{} {}", BULLET, skill)));
    }

    lines.push(ResumeLine::spacer());
    push_section(&mut lines, "PROJECTS");
    for project in &resume.projects {
        lines.push(ResumeLine::body(project_line(project)));
    }

    lines
}

fn push_section(lines: &mut Vec<ResumeLine>, title: &str) {
    lines.push(ResumeLine::heading(title));
    lines.push(ResumeLine::rule());
}

fn project_line(project: &Project) -> String {
    let line = format!("{} {} - {}", BULLET, project.title, project.description);
    // A date range needs both ends; a lone date is dropped.
    match (project.start_date.as_deref(), project.end_date.as_deref()) {
        (Some(start), Some(end)) => format!("{} ({} - {})", line, start, end),
        _ => line,
    }
}

pub fn render_plain(resume: &Resume) -> String {
    resume_lines(resume)
        .into_iter()
        .map(|line| line.text)
        .collect::<Vec<_>>()
        .join("\n")
}
