#![allow(dead_code)]

use std::fs;
use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::path::PathBuf;
use std::process::Command;
use std::thread::{self, JoinHandle};
use std::time::{SystemTime, UNIX_EPOCH};

/// Command for the compiled binary with a clean environment for the
/// variables the tool reads.
pub fn search_command() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_perplexity-search"));
    for var in [
        "OPENROUTER_KEY",
        "OPENROUTER_API_URL",
        "REQUEST_TIMEOUT_SECS",
        "LOG_FORMAT",
        "LOG_OUTPUT",
        "LOG_FILE_PATH",
    ] {
        cmd.env_remove(var);
    }
    cmd.env("RUST_LOG", "perplexity_search=debug");
    cmd
}

pub fn unique_temp_dir(suffix: &str) -> PathBuf {
    let stamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock should be after unix epoch")
        .as_nanos();
    let dir = std::env::temp_dir().join(format!(
        "perplexity-search-{suffix}-{stamp}-{}",
        std::process::id()
    ));
    fs::create_dir_all(&dir).expect("failed to create temp directory");
    dir
}

/// URL of a local port nobody listens on.
pub fn refused_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind should succeed");
    let addr = listener.local_addr().expect("address should be available");
    drop(listener);
    format!("http://{addr}/api/v1/chat/completions")
}

/// Answers a single request with `status_line` and `body`, returning the
/// received request body from the join handle.
pub fn fake_gateway(status_line: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind should succeed");
    let addr = listener.local_addr().expect("address should be available");
    let handle = thread::spawn(move || {
        let (stream, _) = listener.accept().expect("accept should succeed");
        let mut reader = BufReader::new(stream);

        let mut content_length = 0usize;
        loop {
            let mut line = String::new();
            reader.read_line(&mut line).expect("read header line");
            if line == "\r\n" || line.is_empty() {
                break;
            }
            if let Some((name, value)) = line.split_once(':')
                && name.eq_ignore_ascii_case("content-length")
            {
                content_length = value.trim().parse().expect("numeric content-length");
            }
        }
        let mut request_body = vec![0u8; content_length];
        reader
            .read_exact(&mut request_body)
            .expect("read request body");

        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        let mut stream = reader.into_inner();
        stream
            .write_all(response.as_bytes())
            .expect("write response");
        stream.flush().expect("flush response");

        String::from_utf8(request_body).expect("utf-8 request body")
    });
    (format!("http://{addr}/api/v1/chat/completions"), handle)
}
