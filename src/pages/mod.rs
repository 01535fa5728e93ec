//! HTML page builders
//!
//! Leaf string constructors for every route, sharing one layout shell.
//! All dynamic values pass through `escape_html` before being embedded.

use chrono::{DateTime, Local};

use crate::state::Uptime;

const STYLE: &str = r#"
        body {
            font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
            max-width: 800px;
            margin: 50px auto;
            padding: 20px;
            background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
            color: white;
        }
        .container {
            background: rgba(255, 255, 255, 0.1);
            padding: 40px;
            border-radius: 15px;
            backdrop-filter: blur(10px);
        }
        .nav { margin: 30px 0; display: flex; flex-wrap: wrap; gap: 10px; }
        .nav a {
            color: white;
            background: rgba(255, 255, 255, 0.2);
            padding: 12px 24px;
            text-decoration: none;
            border-radius: 8px;
        }
        .stat {
            background: rgba(255, 255, 255, 0.2);
            padding: 20px;
            margin: 15px 0;
            border-radius: 8px;
            font-size: 1.2em;
        }
        .time { font-size: 3em; margin: 30px 0; }
        a { color: #ffd700; }
        code { background: rgba(0, 0, 0, 0.3); padding: 2px 6px; border-radius: 4px; }
"#;

/// Wrap page content in the shared document shell
fn layout(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title}</title>
    <style>{STYLE}    </style>
</head>
<body>
    <div class="container">
{content}
    </div>
</body>
</html>"#
    )
}

/// Home document embedding the current visit count
pub fn home(visits: u64) -> String {
    let content = format!(
        r#"        <h1>Welcome to My First Rust Web Server!</h1>
        <p>Visit count: <strong>{visits}</strong></p>
        <div class="nav">
            <a href="/">Home</a>
            <a href="/about">About</a>
            <a href="/stats">Stats</a>
            <a href="/time">Time</a>
            <a href="/greet?name=YourName">Greet</a>
        </div>
        <h2>Features</h2>
        <ul>
            <li>Multiple routes with exact-path dispatch</li>
            <li>Server uptime and visit statistics</li>
            <li>Query parameters: try <code>/greet?name=John</code></li>
        </ul>"#
    );
    layout("My Rust Server", &content)
}

/// Static about document
pub fn about() -> String {
    let content = r#"        <h1>About This Server</h1>
        <p>This is an interactive HTTP server built with <code>tokio</code> and <code>hyper</code>.</p>
        <h3>Technologies Used:</h3>
        <ul>
            <li>Tokio async runtime</li>
            <li>Hyper HTTP/1.1 serving</li>
            <li>Query-string parsing</li>
            <li>Dynamic HTML generation</li>
        </ul>
        <p><a href="/">&larr; Back to Home</a></p>"#;
    layout("About - My Rust Server", content)
}

/// Server statistics document
pub fn stats(visits: u64, uptime: Uptime, started_at: DateTime<Local>, port: u16) -> String {
    let started = started_at.format("%Y-%m-%d %H:%M:%S");
    let content = format!(
        r#"        <h1>Server Statistics</h1>
        <div class="stat"><strong>Total Visits:</strong> {visits}</div>
        <div class="stat"><strong>Server Uptime:</strong> {}h {}m {}s</div>
        <div class="stat"><strong>Started At:</strong> {started}</div>
        <div class="stat"><strong>Port:</strong> {port}</div>
        <p><a href="/">&larr; Back to Home</a></p>"#,
        uptime.hours, uptime.minutes, uptime.seconds
    );
    layout("Stats - My Rust Server", &content)
}

/// Personalized greeting document
pub fn greet(name: &str) -> String {
    let safe_name = escape_html(name);
    let content = format!(
        r#"        <h1>Hello, {safe_name}!</h1>
        <p>Welcome to my Rust server!</p>
        <p>Try changing the name in the URL: <code>/greet?name=YourName</code></p>
        <p><a href="/">&larr; Back to Home</a></p>"#
    );
    layout("Greetings - My Rust Server", &content)
}

/// Current time-of-day and full calendar date
pub fn time(now: DateTime<Local>) -> String {
    let clock = now.format("%-I:%M:%S %p");
    let date = now.format("%A, %B %-d, %Y");
    let content = format!(
        r#"        <h1>Server Time</h1>
        <div class="time">{clock}</div>
        <p>{date}</p>
        <p><a href="/">&larr; Back to Home</a></p>"#
    );
    layout("Server Time - My Rust Server", &content)
}

/// Not-found document for unmatched paths
pub fn not_found() -> String {
    let content = r#"        <h1>404</h1>
        <h2>Page Not Found</h2>
        <p>The page you're looking for doesn't exist.</p>
        <p><a href="/">&larr; Go Home</a></p>"#;
    layout("404 - Page Not Found", content)
}

/// Escape HTML metacharacters in a dynamic value before embedding
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
