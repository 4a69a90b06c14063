use std::sync::Arc;

use bytes::{BufMut, BytesMut};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, warn};

use crate::app::App;
use crate::http::writer::ResponseWriter;

/// One request, one response, then close.
///
/// The request must arrive in a single read of at most `read_buffer_size`
/// bytes. Anything beyond that, or sent in a later segment, is never seen.
/// There is no read timeout: a silent peer stalls this connection's task.
pub struct Connection<S> {
    stream: S,
    app: Arc<App>,
    buffer: BytesMut,
    read_buffer_size: usize,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    Processing,
    Writing(ResponseWriter),
    Closed,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, app: Arc<App>, read_buffer_size: usize) -> Self {
        Self {
            stream,
            app,
            buffer: BytesMut::with_capacity(read_buffer_size),
            read_buffer_size,
            state: ConnectionState::Reading,
        }
    }

    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match &mut self.state {
                ConnectionState::Reading => {
                    self.state = if self.read_request().await? {
                        ConnectionState::Processing
                    } else {
                        ConnectionState::Closed
                    };
                }

                ConnectionState::Processing => {
                    self.state = match self.app.respond(&self.buffer) {
                        Ok(bytes) => ConnectionState::Writing(ResponseWriter::from_bytes(bytes)),
                        Err(e) => {
                            // Malformed input gets no reply
                            warn!(error = %e, "Dropping malformed request");
                            ConnectionState::Closed
                        }
                    };
                }

                ConnectionState::Writing(writer) => {
                    debug!(bytes = writer.remaining(), "Writing response");
                    writer.write_to_stream(&mut self.stream).await?;
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        if let Err(e) = self.stream.shutdown().await {
            debug!(error = %e, "Shutdown after response failed");
        }
        Ok(())
    }

    /// Performs the single read. Returns `false` if the peer sent nothing.
    async fn read_request(&mut self) -> anyhow::Result<bool> {
        let mut limited = (&mut self.buffer).limit(self.read_buffer_size);
        let n = self.stream.read_buf(&mut limited).await?;
        Ok(n > 0)
    }
}
