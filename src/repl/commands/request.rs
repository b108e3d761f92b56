//! # Request Commands
//!
//! `get`, `post`, `put` and `delete`: resolve the path, echo the request,
//! send it and print whatever comes back.

use reqwest::Method;

use crate::repl::commands::{CommandContext, CommandEvent, ReplCommand};
use crate::repl::error::ReplResult;
use crate::repl::models::HttpRequest;

/// One HTTP verb
pub struct HttpCommand {
    name: &'static str,
    usage: &'static str,
    method: Method,
}

impl HttpCommand {
    pub fn get() -> Self {
        Self {
            name: "get",
            usage: "get <path> [body]",
            method: Method::GET,
        }
    }

    pub fn post() -> Self {
        Self {
            name: "post",
            usage: "post <path> [body]",
            method: Method::POST,
        }
    }

    pub fn put() -> Self {
        Self {
            name: "put",
            usage: "put <path> [body]",
            method: Method::PUT,
        }
    }

    pub fn delete() -> Self {
        Self {
            name: "delete",
            usage: "delete <path> [body]",
            method: Method::DELETE,
        }
    }

    pub fn method(&self) -> &Method {
        &self.method
    }
}

impl ReplCommand for HttpCommand {
    fn name(&self) -> &'static str {
        self.name
    }

    fn usage(&self) -> &'static str {
        self.usage
    }

    fn about(&self) -> &'static str {
        "send a request relative to the server; the rest of the line is the body"
    }

    fn execute(&self, args: &str, context: &mut CommandContext<'_>) -> ReplResult<CommandEvent> {
        let request = HttpRequest::build(self.method.clone(), context.session.base_url(), args)?;
        context.renderer.render_request(&mut *context.out, &request)?;

        let exchange = context.http.execute(
            &request,
            context.session.headers().list(),
            context.session.timeout(),
        )?;
        context
            .renderer
            .render_response(&mut *context.out, &exchange, context.session.show_headers())?;

        Ok(CommandEvent::Handled)
    }
}
