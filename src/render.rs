mod html;
mod options;

pub use self::options::{RenderFormat, RenderOptions};
use crate::{error::Error, node::Node};
use tokio::io::{AsyncWrite, AsyncWriteExt};

/// Renders composed nodes.
pub async fn render_page(
    nodes: &[Node],
    options: &RenderOptions,
    writer: &mut (impl AsyncWrite + Unpin),
) -> Result<(), Error> {
    let bytes = match options.format() {
        RenderFormat::Html => html::serialize(nodes)?,
        RenderFormat::Json => serde_json::to_vec_pretty(nodes)?,
    };

    writer.write_all(&bytes).await?;
    writer.write_all(b"\n").await?;
    writer.flush().await?;

    Ok(())
}
