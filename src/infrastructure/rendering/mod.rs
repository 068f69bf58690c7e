mod docx_renderer;
mod plain_text_renderer;
mod renderer_factory;

pub use docx_renderer::DocxRenderer;
pub use plain_text_renderer::PlainTextRenderer;
pub use renderer_factory::RendererFactory;
