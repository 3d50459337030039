//! Serve command: validation reports as JSON over HTTP.

use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::{Path, PathBuf};

use relcheck::report::generate_report;

pub fn cmd_serve(port: u16, config_flags: &[PathBuf], example_flag: Option<&Path>) -> Result<()> {
    let (example, configs) = super::resolve_inputs(config_flags, example_flag)?;

    let addr = format!("127.0.0.1:{}", port);
    let listener =
        TcpListener::bind(&addr).with_context(|| format!("Failed to bind to {}", addr))?;

    println!(
        "{} Serving validation reports at {}",
        "→".cyan(),
        format!("http://{}", addr).green()
    );
    println!("Press {} to stop", "Ctrl+C".yellow());

    let _ = ctrlc::set_handler(|| {
        println!("\nStopping server");
        std::process::exit(0);
    });

    for stream in listener.incoming() {
        match stream {
            Ok(mut stream) => {
                // Read request
                let mut buffer = [0; 4096];
                if stream.read(&mut buffer).is_err() {
                    continue;
                }

                let request = String::from_utf8_lossy(&buffer);
                let path = parse_request_path(&request);

                let (status, content_type, body) = match path.as_str() {
                    "/" | "/report" => {
                        // Regenerated per request: the environment may have
                        // changed since the last call.
                        let report = generate_report(&example, &configs);
                        match serde_json::to_string_pretty(&report) {
                            Ok(body) => ("200 OK", "application/json", body),
                            Err(e) => (
                                "500 Internal Server Error",
                                "text/plain",
                                format!("report serialization failed: {}", e),
                            ),
                        }
                    }
                    "/healthz" => ("200 OK", "text/plain", "ok".to_string()),
                    _ => ("404 Not Found", "text/plain", "not found".to_string()),
                };

                let response = format!(
                    "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\n\r\n",
                    status,
                    content_type,
                    body.len()
                );

                let _ = stream.write_all(response.as_bytes());
                let _ = stream.write_all(body.as_bytes());

                // Log request
                let status_code = status.split(' ').next().unwrap_or("???");
                let status_color = if status_code == "200" {
                    status_code.green()
                } else {
                    status_code.yellow()
                };
                println!("  {} {}", status_color, path);
            }
            Err(e) => {
                eprintln!("{} Connection error: {}", "Error:".red(), e);
            }
        }
    }

    Ok(())
}

/// Parse the request path from an HTTP request
fn parse_request_path(request: &str) -> String {
    let first_line = request.lines().next().unwrap_or("");
    let parts: Vec<&str> = first_line.split_whitespace().collect();

    if parts.len() >= 2 {
        let path = parts[1];
        // Drop any query string
        path.split('?').next().unwrap_or(path).to_string()
    } else {
        "/".to_string()
    }
}
