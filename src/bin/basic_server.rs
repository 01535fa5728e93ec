//! Basic web server practical
//!
//! Answers every request with one static HTML document on port 3000.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Request, Response};
use hyper_util::rt::TokioIo;
use std::convert::Infallible;
use tokio::net::TcpListener;

const PORT: u16 = 3000;

const PAGE: &str = "<h1>Welcome to My First Rust Web Server!</h1>";

async fn hello(_req: Request<hyper::body::Incoming>) -> Result<Response<Full<Bytes>>, Infallible> {
    let response = Response::builder()
        .status(200)
        .header("Content-Type", "text/html")
        .body(Full::new(Bytes::from(PAGE)))
        .unwrap_or_else(|_| Response::new(Full::new(Bytes::from(PAGE))));

    Ok(response)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let listener = TcpListener::bind(("127.0.0.1", PORT)).await?;

    println!("Server is running on http://127.0.0.1:{PORT}");
    println!("Press Ctrl+C to stop the server");

    loop {
        let (stream, _) = listener.accept().await?;

        tokio::spawn(async move {
            let io = TokioIo::new(stream);
            if let Err(err) = http1::Builder::new()
                .serve_connection(io, service_fn(hello))
                .await
            {
                eprintln!("[ERROR] Failed to serve connection: {err:?}");
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_contains_welcome_marker() {
        assert!(PAGE.contains("Welcome to My First Rust Web Server"));
    }
}
