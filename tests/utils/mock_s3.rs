//! Minimal S3 compatible endpoint (path-style, one request per connection).

use anyhow::Result;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread;

pub struct MockRoute {
	pub path: String,
	pub status: u16,
	pub body: String,
}

pub struct MockS3 {
	pub endpoint: String,
}

impl MockS3 {
	/// Serve the routes on a random local port. Unknown paths get a `NoSuchKey` 404.
	pub fn start(routes: Vec<MockRoute>) -> Result<MockS3> {
		let listener = TcpListener::bind("127.0.0.1:0")?;
		let endpoint = format!("http://{}", listener.local_addr()?);

		thread::spawn(move || {
			for stream in listener.incoming() {
				match stream {
					Ok(mut stream) => {
						if let Err(err) = handle(&mut stream, &routes) {
							eprintln!("mock s3 - request failed: {err}");
						}
					}
					Err(err) => eprintln!("mock s3 - accept failed: {err}"),
				}
			}
		});

		Ok(MockS3 { endpoint })
	}
}

pub fn route(path: &str, status: u16, body: impl Into<String>) -> MockRoute {
	MockRoute {
		path: path.to_string(),
		status,
		body: body.into(),
	}
}

// region:    --- Bodies
pub fn list_buckets_body(names: &[&str]) -> String {
	let buckets: String = names
		.iter()
		.map(|name| format!("<Bucket><Name>{name}</Name><CreationDate>2024-01-01T00:00:00.000Z</CreationDate></Bucket>"))
		.collect();

	format!(
		r#"<?xml version="1.0" encoding="UTF-8"?>
<ListAllMyBucketsResult xmlns="http://s3.amazonaws.com/doc/2006-03-01/"><Owner><ID>lab</ID><DisplayName>lab</DisplayName></Owner><Buckets>{buckets}</Buckets></ListAllMyBucketsResult>"#
	)
}

pub fn error_body(code: &str, message: &str) -> String {
	format!(
		r#"<?xml version="1.0" encoding="UTF-8"?>
<Error><Code>{code}</Code><Message>{message}</Message><RequestId>mock-request</RequestId></Error>"#
	)
}
// endregion: --- Bodies

fn handle(stream: &mut TcpStream, routes: &[MockRoute]) -> Result<()> {
	// -- Read the request head (GET only, no body)
	let mut head: Vec<u8> = Vec::new();
	let mut buf = [0u8; 4096];
	loop {
		let n = stream.read(&mut buf)?;
		if n == 0 {
			break;
		}
		head.extend_from_slice(&buf[..n]);
		if head.windows(4).any(|w| w == b"\r\n\r\n") {
			break;
		}
	}
	let head = String::from_utf8_lossy(&head);

	// e.g., "GET /lab/hello.txt?x-id=GetObject HTTP/1.1"
	let target = head.lines().next().and_then(|line| line.split_whitespace().nth(1)).unwrap_or("/");
	let path = target.split('?').next().unwrap_or("/");

	let (status, body) = match routes.iter().find(|r| r.path == path) {
		Some(r) => (r.status, r.body.clone()),
		None => (404, error_body("NoSuchKey", "The specified key does not exist.")),
	};

	let response = format!(
		"HTTP/1.1 {status} {}\r\nContent-Type: application/xml\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
		reason(status),
		body.len()
	);
	stream.write_all(response.as_bytes())?;
	stream.flush()?;

	Ok(())
}

fn reason(status: u16) -> &'static str {
	match status {
		200 => "OK",
		403 => "Forbidden",
		404 => "Not Found",
		503 => "Service Unavailable",
		_ => "Unknown",
	}
}
