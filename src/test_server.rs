//! A one-shot HTTP server on localhost for testing clients.

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Answers a single request with `status` and `body`. Resolves to the raw request.
pub struct OneShotServer {
    /// Base URL of the server, without a trailing slash.
    pub base_url: String,
    request: JoinHandle<String>,
}

impl OneShotServer {
    pub async fn start(status: &'static str, body: &'static str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let request = tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let request = read_request(&mut stream).await;
            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len(),
            );

            stream.write_all(response.as_bytes()).await.unwrap();
            let _ = stream.shutdown().await;
            request
        });

        Self {
            base_url,
            request,
        }
    }

    /// The request the server received.
    pub async fn request(self) -> String {
        self.request.await.unwrap()
    }
}

/// Gets a URL on localhost that refuses connections.
pub async fn refused_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());

    drop(listener);
    base_url
}

async fn read_request(stream: &mut tokio::net::TcpStream) -> String {
    let mut request = Vec::new();
    let mut chunk = [0u8; 1024];

    loop {
        let read = stream.read(&mut chunk).await.unwrap();

        if read == 0 {
            break;
        }

        request.extend_from_slice(&chunk[..read]);

        let text = String::from_utf8_lossy(&request).to_lowercase();

        if let Some(head_end) = text.find("\r\n\r\n") {
            let content_length = text[..head_end]
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .and_then(|length| length.trim().parse::<usize>().ok())
                .unwrap_or(0);

            if request.len() >= head_end + 4 + content_length {
                break;
            }
        }
    }

    String::from_utf8_lossy(&request).into_owned()
}
