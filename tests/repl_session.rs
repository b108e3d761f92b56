mod common;

use common::{gzip, TestHome, TestServer};
use restline::views::ansi_escape_codes::strip;
use restline::{
    ExchangeRenderer, HttpService, ReplLoop, ScriptedLineReader, SessionEnd,
};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, ResponseTemplate};

struct Transcript {
    end: SessionEnd,
    out: String,
    err: String,
}

fn run_script(home: &TestHome, lines: &[&str]) -> Transcript {
    let mut repl = ReplLoop::new(
        ScriptedLineReader::new(lines.iter().copied()),
        home.session(),
        HttpService::new().unwrap(),
        ExchangeRenderer::with_width(10),
    );
    let mut out = Vec::new();
    let mut err = Vec::new();
    let end = repl.run_with(&mut out, &mut err).unwrap();
    Transcript {
        end,
        out: strip(&String::from_utf8(out).unwrap()),
        err: String::from_utf8(err).unwrap(),
    }
}

#[test]
fn get_should_print_request_status_and_indented_body() {
    let server = TestServer::start();
    server.mount(
        Mock::given(method("GET"))
            .and(path("/items"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-encoding", "gzip")
                    .set_body_raw(gzip(br#"{"a":1}"#), "application/json"),
            ),
    );

    let home = TestHome::new();
    let server_line = format!("server {}", server.uri());
    let transcript = run_script(&home, &[&server_line, "get /items"]);

    let rule = "-".repeat(10);
    assert_eq!(
        transcript.out,
        format!(
            "{rule}\nGET {}/items\nHTTP/1.1 200 OK\n{rule}\n{{\n  \"a\": 1\n}}\n",
            server.uri()
        )
    );
    assert!(transcript.err.is_empty());
}

#[test]
fn header_echo_should_follow_setting() {
    let server = TestServer::start();
    server.mount(
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).insert_header("x-served-by", "mock")),
    );

    let home = TestHome::new();
    let server_line = format!("server {}", server.uri());
    let transcript = run_script(&home, &[&server_line, "config_set headers on", "get /"]);

    assert!(transcript.out.contains("x-served-by: mock"));
}

#[test]
fn header_set_should_be_sent_and_survive_restart() {
    let server = TestServer::start();
    server.mount(
        Mock::given(method("GET"))
            .and(header("x-api-key", "abc123"))
            .respond_with(ResponseTemplate::new(200))
            .expect(2),
    );

    let home = TestHome::new();
    let server_line = format!("server {}", server.uri());
    let first = run_script(
        &home,
        &[&server_line, "header_set X-Api-Key abc123", "get /", "quit"],
    );
    assert_eq!(first.end, SessionEnd::Quit);

    let second = run_script(&home, &["header_list", "get /"]);
    assert!(second.out.contains("X-Api-Key: abc123"));
    assert!(second.out.contains("HTTP/1.1 200 OK"));
    assert!(second.err.is_empty());
    server.verify();
}

#[test]
fn session_cookies_should_flow_between_commands() {
    let server = TestServer::start();
    server.mount(
        Mock::given(method("POST"))
            .and(path("/login"))
            .respond_with(ResponseTemplate::new(200).insert_header("set-cookie", "sid=42; Path=/")),
    );
    server.mount(
        Mock::given(method("GET"))
            .and(path("/me"))
            .and(header("cookie", "sid=42"))
            .respond_with(ResponseTemplate::new(200).set_body_string("it's you"))
            .expect(1),
    );

    let home = TestHome::new();
    let server_line = format!("server {}", server.uri());
    let transcript = run_script(&home, &[&server_line, "post /login", "get /me"]);

    assert!(transcript.out.contains("it's you"));
    server.verify();
}

#[test]
fn failures_should_not_end_the_session() {
    let home = TestHome::new();
    let transcript = run_script(
        &home,
        &[
            "get /users",
            "frobnicate foo",
            "header_set Lonely",
            "config_get colour",
            "header_list",
            "exit",
        ],
    );

    assert_eq!(transcript.end, SessionEnd::Quit);
    let errors: Vec<&str> = transcript.err.lines().collect();
    assert_eq!(
        errors,
        [
            "no server configured, use `server <url>` first",
            "frobnicate foo not found",
            "usage: header_set <key> <value>",
            "unknown setting 'colour'",
        ]
    );
    assert!(transcript.out.contains("Content-Type: application/json"));
}

#[test]
fn end_of_input_should_keep_saved_config() {
    let home = TestHome::new();
    run_script(&home, &["server http://first.example", "quit"]);
    let transcript = run_script(&home, &["server http://second.example"]);

    assert_eq!(transcript.end, SessionEnd::EndOfInput);
    assert_eq!(home.session().base_url(), Some("http://first.example"));
}

#[test]
fn undecodable_body_should_print_raw_and_report_on_stderr() {
    let server = TestServer::start();
    server.mount(
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-encoding", "gzip")
                    .set_body_raw(b"not gzip".to_vec(), "text/plain"),
            ),
    );

    let home = TestHome::new();
    let server_line = format!("server {}", server.uri());
    let transcript = run_script(&home, &[&server_line, "get /"]);

    assert!(transcript.out.ends_with("not gzip\n"));
    assert!(!transcript.out.contains("could not decode"));
    assert!(transcript.err.starts_with("could not decode response body"));
    assert_eq!(transcript.err.lines().count(), 1);
}

#[test]
fn unknown_verb_should_not_touch_state_files() {
    let home = TestHome::new();
    run_script(
        &home,
        &["header_set X-Trace 1", "server http://first.example", "quit"],
    );
    let headers_before = std::fs::read(&home.paths.headers).unwrap();
    let config_before = std::fs::read(&home.paths.config).unwrap();

    let transcript = run_script(&home, &["frobnicate foo"]);

    assert_eq!(transcript.err, "frobnicate foo not found\n");
    assert_eq!(std::fs::read(&home.paths.headers).unwrap(), headers_before);
    assert_eq!(std::fs::read(&home.paths.config).unwrap(), config_before);
}
