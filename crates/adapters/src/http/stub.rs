//! Minimal HTTP/1.1 responder on a loopback port for adapter tests.

use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::thread;

#[derive(Debug, Clone)]
pub(crate) struct StubRoute {
    path: String,
    status: u16,
    content_type: &'static str,
    body: Vec<u8>,
}

impl StubRoute {
    pub(crate) fn ok(path: &str, content_type: &'static str, body: Vec<u8>) -> Self {
        Self {
            path: path.to_string(),
            status: 200,
            content_type,
            body,
        }
    }

    pub(crate) fn json(path: &str, body: &str) -> Self {
        Self::ok(path, "application/json", body.as_bytes().to_vec())
    }

    pub(crate) fn status(path: &str, status: u16) -> Self {
        Self {
            path: path.to_string(),
            status,
            content_type: "text/plain",
            body: Vec::new(),
        }
    }
}

pub(crate) struct StubServer {
    base_url: String,
}

impl StubServer {
    /// Serves `routes` until the test process exits. Unknown paths get a 404.
    pub(crate) fn start(routes: Vec<StubRoute>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub server");
        let addr = listener.local_addr().expect("stub address");
        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(stream) = stream else { continue };
                respond(stream, &routes);
            }
        });
        Self {
            base_url: format!("http://{addr}"),
        }
    }

    /// URL on a port nobody is listening on.
    pub(crate) fn closed_url(path: &str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind throwaway port");
        let addr = listener.local_addr().expect("throwaway address");
        drop(listener);
        format!("http://{addr}{path}")
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }
}

fn respond(stream: TcpStream, routes: &[StubRoute]) {
    let mut reader = BufReader::new(stream);
    let mut request_line = String::new();
    if reader.read_line(&mut request_line).is_err() {
        return;
    }
    loop {
        let mut header = String::new();
        match reader.read_line(&mut header) {
            Ok(0) | Err(_) => break,
            Ok(_) if header == "\r\n" || header == "\n" => break,
            Ok(_) => {}
        }
    }

    let path = request_line.split_whitespace().nth(1).unwrap_or("/");
    let not_found = StubRoute::status(path, 404);
    let route = routes
        .iter()
        .find(|route| route.path == path)
        .unwrap_or(&not_found);

    let head = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        route.status,
        reason(route.status),
        route.content_type,
        route.body.len()
    );
    let mut stream = reader.into_inner();
    let _ = stream.write_all(head.as_bytes());
    let _ = stream.write_all(&route.body);
    let _ = stream.flush();
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Unknown",
    }
}
