use crate::error::RenderError;

/// An external collaborator that turns diagram source into visual output.
///
/// The core only passes text in and receives either output or a message back.
/// It never retries: failures are shown to the user, who may edit and try again.
pub trait DiagramRenderer {
    fn render(&self, source: &str) -> Result<String, RenderError>;
}

/// Wraps the source in a fenced `mermaid` block, ready to paste into Markdown.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownRenderer;

impl DiagramRenderer for MarkdownRenderer {
    fn render(&self, source: &str) -> Result<String, RenderError> {
        if source.trim().is_empty() {
            return Err(RenderError::new("nothing to render"));
        }
        Ok(format!("```mermaid\n{}\n```\n", source))
    }
}

/// Renders `source`, turning a failure into display strings.
pub fn render_diagram(
    renderer: &dyn DiagramRenderer,
    source: &str,
) -> Result<String, Vec<String>> {
    renderer
        .render(source)
        .map_err(|e| vec![format!("Renderer error: {}", e)])
}
