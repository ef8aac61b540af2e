//! # Session Loop
//!
//! Reads one command per line, runs it against the session state and
//! writes one response per command.
//!
//! ## Line Protocol
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  stdin line                    response (json)                          │
//! │  ──────────                    ───────────────                          │
//! │  products                 ──►  {"kind":"products","data":[...]}         │
//! │  add p-lamp --qty 2       ──►  {"kind":"cart","data":{items,totals}}    │
//! │  coupon discount10        ──►  {"kind":"coupon","data":{applied,...}}   │
//! │  update p-lamp 0          ──►  {"error":{"code":"VALIDATION_ERROR",..}} │
//! │  checkout                 ──►  {"kind":"order","data":{orderId,...}}    │
//! │  quit                     ──►  (session ends)                           │
//! │                                                                         │
//! │  Blank lines and lines starting with '#' are skipped.                   │
//! │  A failed command never ends the session.                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{self, BufRead, Write};

use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use storefront_core::OrderSummary;
use tracing::{debug, warn};

use crate::commands::catalog::ProductDto;
use crate::commands::coupon::CouponResponse;
use crate::commands::{cart, catalog, checkout, coupon};
use crate::error::ApiError;
use crate::render;
use crate::state::{CartResponse, CartSession, Catalog, StoreConfig};

/// Output format for responses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// One input line, parsed.
#[derive(Debug, Parser)]
#[command(
    name = "storefront",
    no_binary_name = true,
    disable_help_subcommand = true,
    disable_help_flag = true
)]
struct SessionLine {
    #[command(subcommand)]
    command: SessionCommand,
}

#[derive(Debug, Subcommand)]
enum SessionCommand {
    /// List the catalog
    Products,
    /// Show items and totals
    Cart,
    /// Add a catalog product to the cart
    Add {
        id: String,
        #[arg(long, allow_negative_numbers = true)]
        qty: Option<i64>,
    },
    /// Set the quantity of a cart item
    Update {
        id: String,
        #[arg(allow_negative_numbers = true)]
        qty: i64,
    },
    /// Remove an item from the cart
    Remove { id: String },
    /// Empty the cart and drop the coupon
    Clear,
    /// Apply a coupon code
    Coupon { code: String },
    /// Drop the applied coupon
    Uncoupon,
    /// Place the order and start a new cart
    Checkout,
    /// Show this help
    Help,
    /// End the session
    #[command(alias = "exit")]
    Quit,
}

/// A successful command result.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", content = "data", rename_all = "camelCase")]
pub enum Response {
    Products(Vec<ProductDto>),
    Cart(CartResponse),
    Coupon(CouponResponse),
    Order(OrderSummary),
    Help(String),
}

/// Wire shape of a failed command in JSON mode.
#[derive(Serialize)]
struct ErrorEnvelope<'a> {
    error: &'a ApiError,
}

enum Step {
    Skip,
    Reply(Result<Response, ApiError>),
    Quit,
}

/// An interactive shopping session.
pub struct Session {
    cart: CartSession,
    catalog: Catalog,
    config: StoreConfig,
    format: OutputFormat,
}

impl Session {
    pub fn new(catalog: Catalog, config: StoreConfig, format: OutputFormat) -> Self {
        Session {
            cart: CartSession::new(),
            catalog,
            config,
            format,
        }
    }

    /// The cart as it stands between commands.
    pub fn cart(&self) -> &CartSession {
        &self.cart
    }

    /// Runs one input line. `None` for blank lines, comments and `quit`.
    pub fn execute(&mut self, line: &str) -> Option<Result<Response, ApiError>> {
        match self.step(line) {
            Step::Reply(result) => Some(result),
            Step::Skip | Step::Quit => None,
        }
    }

    /// Drives the session until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        if self.format == OutputFormat::Text {
            writeln!(
                output,
                "Welcome to {}. Type 'help' for commands.",
                self.config.store_name
            )?;
        }

        for line in input.lines() {
            let line = line?;
            match self.step(&line) {
                Step::Skip => continue,
                Step::Quit => break,
                Step::Reply(result) => self.write_reply(&mut output, &result)?,
            }
            output.flush()?;
        }

        debug!(items = self.cart.cart().len(), "session ended");
        Ok(())
    }

    fn step(&mut self, line: &str) -> Step {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Step::Skip;
        }

        let parsed = match SessionLine::try_parse_from(line.split_whitespace()) {
            Ok(parsed) => parsed,
            Err(err) => {
                let message = clap_message(&err);
                warn!(line = %line, error = %message, "rejected command");
                return Step::Reply(Err(ApiError::invalid_command(message)));
            }
        };

        let result = match parsed.command {
            SessionCommand::Quit => return Step::Quit,
            SessionCommand::Help => Ok(Response::Help(help_text())),
            SessionCommand::Products => Ok(Response::Products(catalog::list_products(&self.catalog))),
            SessionCommand::Cart => Ok(Response::Cart(cart::get_cart(&self.cart))),
            SessionCommand::Add { id, qty } => {
                cart::add_to_cart(&mut self.cart, &self.catalog, &id, qty).map(Response::Cart)
            }
            SessionCommand::Update { id, qty } => {
                cart::update_cart_item(&mut self.cart, &id, qty).map(Response::Cart)
            }
            SessionCommand::Remove { id } => {
                cart::remove_from_cart(&mut self.cart, &id).map(Response::Cart)
            }
            SessionCommand::Clear => Ok(Response::Cart(cart::clear_cart(&mut self.cart))),
            SessionCommand::Coupon { code } => {
                Ok(Response::Coupon(coupon::apply_coupon(&mut self.cart, &code)))
            }
            SessionCommand::Uncoupon => Ok(Response::Cart(coupon::remove_coupon(&mut self.cart))),
            SessionCommand::Checkout => checkout::checkout(&mut self.cart).map(Response::Order),
        };

        if let Err(err) = &result {
            warn!(line = %line, code = err.code.as_str(), error = %err.message, "command failed");
        }
        Step::Reply(result)
    }

    fn write_reply<W: Write>(
        &self,
        output: &mut W,
        result: &Result<Response, ApiError>,
    ) -> io::Result<()> {
        match self.format {
            OutputFormat::Json => {
                match result {
                    Ok(response) => serde_json::to_writer(&mut *output, response)?,
                    Err(err) => serde_json::to_writer(&mut *output, &ErrorEnvelope { error: err })?,
                }
                writeln!(output)
            }
            OutputFormat::Text => {
                let text = match result {
                    Ok(response) => self.render_text(response),
                    Err(err) => render::error(err),
                };
                writeln!(output, "{}", text)
            }
        }
    }

    fn render_text(&self, response: &Response) -> String {
        match response {
            Response::Products(products) => render::products(&self.config, products),
            Response::Cart(cart) => render::cart(&self.config, cart),
            Response::Coupon(coupon) => render::coupon(&self.config, coupon),
            Response::Order(order) => render::order(&self.config, order),
            Response::Help(text) => text.clone(),
        }
    }
}

fn help_text() -> String {
    SessionLine::command()
        .override_usage("<command> [args]")
        .render_help()
        .to_string()
        .trim_end()
        .to_string()
}

/// First line of a clap error, without its `error: ` prefix.
fn clap_message(err: &clap::Error) -> String {
    let rendered = err.to_string();
    let first = rendered.lines().next().unwrap_or_default();
    first.strip_prefix("error: ").unwrap_or(first).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use std::io::Cursor;
    use storefront_core::Money;

    fn session(format: OutputFormat) -> Session {
        Session::new(Catalog::builtin(), StoreConfig::default(), format)
    }

    fn run_script(format: OutputFormat, script: &str) -> String {
        let mut output = Vec::new();
        session(format)
            .run(Cursor::new(script.as_bytes()), &mut output)
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_execute_add_and_coupon() {
        let mut s = session(OutputFormat::Json);

        let response = s.execute("add p-lamp --qty 2").unwrap().unwrap();
        match response {
            Response::Cart(cart) => assert_eq!(cart.totals.grand_total, Money::from_major(2100)),
            other => panic!("unexpected response: {:?}", other),
        }

        let response = s.execute("coupon discount10").unwrap().unwrap();
        match response {
            Response::Coupon(c) => {
                assert!(c.applied);
                assert_eq!(c.totals.grand_total, Money::from_major(1940));
            }
            other => panic!("unexpected response: {:?}", other),
        }
    }

    #[test]
    fn test_execute_skips_blank_and_comments() {
        let mut s = session(OutputFormat::Text);
        assert!(s.execute("").is_none());
        assert!(s.execute("   ").is_none());
        assert!(s.execute("# a comment").is_none());
    }

    #[test]
    fn test_unknown_command_is_invalid_command() {
        let mut s = session(OutputFormat::Text);
        let err = s.execute("teleport p-lamp").unwrap().unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidCommand);
    }

    #[test]
    fn test_missing_argument_is_invalid_command() {
        let mut s = session(OutputFormat::Text);
        let err = s.execute("update p-lamp").unwrap().unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidCommand);
    }

    #[test]
    fn test_negative_quantity_reaches_validation() {
        let mut s = session(OutputFormat::Text);
        s.execute("add p-lamp").unwrap().unwrap();
        let err = s.execute("update p-lamp -1").unwrap().unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_quit_and_exit_end_session() {
        let output = run_script(OutputFormat::Json, "add p-lamp\nexit\nadd p-mug\n");
        assert_eq!(output.lines().count(), 1);

        let output = run_script(OutputFormat::Json, "quit\nproducts\n");
        assert!(output.is_empty());
    }

    #[test]
    fn test_json_session_round() {
        let script = "\
add p-lamp --qty 2
coupon DISCOUNT10
update p-lamp 0
checkout
cart
";
        let output = run_script(OutputFormat::Json, script);
        let lines: Vec<serde_json::Value> = output
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 5);

        assert_eq!(lines[0]["kind"], "cart");
        assert_eq!(lines[1]["kind"], "coupon");
        assert_eq!(lines[1]["data"]["applied"], true);
        assert_eq!(lines[2]["error"]["code"], "VALIDATION_ERROR");

        assert_eq!(lines[3]["kind"], "order");
        let amount_due: Money = lines[3]["data"]["amountDue"].as_str().unwrap().parse().unwrap();
        assert_eq!(amount_due, Money::from_major(1940));
        assert_eq!(lines[3]["data"]["amountDueMinor"], 194_000);

        assert_eq!(lines[4]["kind"], "cart");
        assert_eq!(lines[4]["data"]["items"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_text_session() {
        let output = run_script(OutputFormat::Text, "add p-lamp --qty 2\nremove p-mug\n");
        assert!(output.starts_with("Welcome to Storefront."));
        assert!(output.contains("₹2100.00"));
        assert!(output.contains("error [NOT_FOUND]: Cart item not found: p-mug"));
    }

    #[test]
    fn test_help_lists_commands() {
        let mut s = session(OutputFormat::Text);
        match s.execute("help").unwrap().unwrap() {
            Response::Help(text) => {
                for command in ["products", "add", "update", "coupon", "checkout", "quit"] {
                    assert!(text.contains(command), "help is missing {}", command);
                }
            }
            other => panic!("unexpected response: {:?}", other),
        }
    }

    #[test]
    fn test_session_state_persists_between_lines() {
        let mut s = session(OutputFormat::Json);
        s.execute("add p-lamp").unwrap().unwrap();
        s.execute("add p-lamp --qty 2").unwrap().unwrap();
        assert_eq!(s.cart().cart().total_quantity(), 3);
    }
}
