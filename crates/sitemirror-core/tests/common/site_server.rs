//! Minimal HTTP/1.1 server for crawl integration tests.
//!
//! Serves a fixed set of paths with per-path bodies and content types,
//! counting requests per path so tests can assert fetch-at-most-once
//! behavior. Unknown paths get 404 (still counted).

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread;

type Routes = HashMap<String, (String, Vec<u8>)>;

pub struct SiteServer {
    port: u16,
    routes: Arc<Mutex<Routes>>,
    hits: Arc<Mutex<HashMap<String, usize>>>,
}

impl SiteServer {
    pub fn base_url(&self) -> String {
        format!("http://127.0.0.1:{}/", self.port)
    }

    /// Sanitized host directory the crawler mirrors this server under.
    pub fn host_dir(&self) -> String {
        format!("127.0.0.1_{}", self.port)
    }

    /// Number of requests seen for `path` (404s included).
    pub fn hits(&self, path: &str) -> usize {
        self.hits.lock().unwrap().get(path).copied().unwrap_or(0)
    }

    pub fn total_hits(&self) -> usize {
        self.hits.lock().unwrap().values().sum()
    }

    /// Replace (or add) a page body; used to prove re-runs never overwrite.
    pub fn set_page(&self, path: &str, content_type: &str, body: &str) {
        self.routes.lock().unwrap().insert(
            path.to_string(),
            (content_type.to_string(), body.as_bytes().to_vec()),
        );
    }
}

/// Starts a server in a background thread serving `pages` as
/// `(path, content_type, body)` triples. Runs until the process exits.
pub fn start(pages: &[(&str, &str, &str)]) -> SiteServer {
    let mut routes: Routes = HashMap::new();
    for (path, content_type, body) in pages {
        routes.insert(
            path.to_string(),
            (content_type.to_string(), body.as_bytes().to_vec()),
        );
    }
    let routes = Arc::new(Mutex::new(routes));
    let hits: Arc<Mutex<HashMap<String, usize>>> = Arc::new(Mutex::new(HashMap::new()));

    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();

    let routes_for_accept = Arc::clone(&routes);
    let hits_for_accept = Arc::clone(&hits);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let routes = Arc::clone(&routes_for_accept);
            let hits = Arc::clone(&hits_for_accept);
            thread::spawn(move || handle(stream, &routes, &hits));
        }
    });

    SiteServer { port, routes, hits }
}

fn handle(
    mut stream: std::net::TcpStream,
    routes: &Mutex<Routes>,
    hits: &Mutex<HashMap<String, usize>>,
) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    let mut parts = request.lines().next().unwrap_or("").split_whitespace();
    let method = parts.next().unwrap_or("");
    let path = parts.next().unwrap_or("/").to_string();

    *hits.lock().unwrap().entry(path.clone()).or_insert(0) += 1;

    if !method.eq_ignore_ascii_case("GET") {
        let _ = stream.write_all(b"HTTP/1.1 405 Method Not Allowed\r\nConnection: close\r\n\r\n");
        return;
    }

    let page = routes.lock().unwrap().get(&path).cloned();
    match page {
        Some((content_type, body)) => {
            let response = format!(
                "HTTP/1.1 200 OK\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                content_type,
                body.len()
            );
            let _ = stream.write_all(response.as_bytes());
            let _ = stream.write_all(&body);
        }
        None => {
            let _ = stream.write_all(
                b"HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
            );
        }
    }
}
